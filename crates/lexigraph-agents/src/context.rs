//! The seam between agent actions and the environment's shared state.
//!
//! Agents never hold a pointer to the clock, the snapshot history, or the
//! word ledger. The environment owns them and lends them to each action
//! through a [`TurnContext`].

use lexigraph_types::{FormedWord, LetterInventory, NodeId};

use crate::error::AgentError;

/// Shared game state as seen by a single agent action.
pub trait TurnContext {
    /// Current global time.
    fn time(&self) -> u64;

    /// Time at which no further action may run.
    fn time_max(&self) -> u64;

    /// Append a completed word to the global ledger.
    fn record_word(&mut self, formed: FormedWord);

    /// Close out one action: archive the current snapshot under the current
    /// time, write the touched inventories into the new snapshot, and advance
    /// the clock by one.
    ///
    /// Returns the time the action ran at (the value before advancing).
    fn commit(&mut self, touched: Vec<(NodeId, LetterInventory)>) -> Result<u64, AgentError>;

    /// Fail with [`AgentError::TickLimitReached`] once the clock has reached
    /// its bound.
    fn ensure_can_act(&self) -> Result<(), AgentError> {
        let (time, time_max) = (self.time(), self.time_max());
        if time >= time_max {
            return Err(AgentError::TickLimitReached { time, time_max });
        }
        Ok(())
    }
}
