//! Shared game state: the clock, the current world snapshot, the snapshot
//! history, and the ledger of formed words.
//!
//! [`SharedState`] is the environment's implementation of
//! [`TurnContext`]. It is lent to each agent action and is the only thing
//! that writes snapshots or moves the clock.

use std::collections::BTreeMap;

use lexigraph_agents::{AgentError, TurnContext};
use lexigraph_types::{FormedWord, LetterInventory, NodeId, WorldSnapshot};

use crate::clock::{ClockError, GameClock};

/// Clock, snapshots, and ledger for one game.
#[derive(Debug, Clone)]
pub struct SharedState {
    /// Global tick counter.
    clock: GameClock,
    /// Inventories as of the current time.
    current: WorldSnapshot,
    /// Archived snapshots keyed by the time they were taken at.
    history: BTreeMap<u64, WorldSnapshot>,
    /// Every completed word, in completion order.
    words_formed: Vec<FormedWord>,
}

impl SharedState {
    /// Fresh state at time 0 with the given bound.
    pub const fn new(time_max: u64) -> Self {
        Self {
            clock: GameClock::new(time_max),
            current: BTreeMap::new(),
            history: BTreeMap::new(),
            words_formed: Vec::new(),
        }
    }

    /// The clock.
    pub const fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Inventories as of the current time.
    pub const fn current(&self) -> &WorldSnapshot {
        &self.current
    }

    /// Archived snapshots.
    pub const fn history(&self) -> &BTreeMap<u64, WorldSnapshot> {
        &self.history
    }

    /// Completed words, in completion order.
    pub fn words_formed(&self) -> &[FormedWord] {
        &self.words_formed
    }

    /// Write one node's inventory into the current snapshot.
    pub fn record(&mut self, node: NodeId, letters: LetterInventory) {
        self.current.insert(node, letters);
    }

    /// Replace the whole current snapshot.
    pub fn replace_current(&mut self, snapshot: WorldSnapshot) {
        self.current = snapshot;
    }

    /// Copy the current snapshot into history under the current time.
    ///
    /// An existing entry is left alone: history is write-once.
    pub fn archive(&mut self) {
        self.history
            .entry(self.clock.time())
            .or_insert_with(|| self.current.clone());
    }

    /// Advance the clock by one. Returns the new time.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::TickOverflow`] at `u64::MAX`.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        self.clock.advance()
    }

    /// Back to time 0 with an empty snapshot, history, and ledger.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.current.clear();
        self.history.clear();
        self.words_formed.clear();
    }
}

impl TurnContext for SharedState {
    fn time(&self) -> u64 {
        self.clock.time()
    }

    fn time_max(&self) -> u64 {
        self.clock.time_max()
    }

    fn record_word(&mut self, formed: FormedWord) {
        self.words_formed.push(formed);
    }

    fn commit(&mut self, touched: Vec<(NodeId, LetterInventory)>) -> Result<u64, AgentError> {
        let time = self.clock.time();
        self.archive();
        for (node, letters) in touched {
            self.record(node, letters);
        }
        self.advance()
            .map_err(|ClockError::TickOverflow| AgentError::ClockOverflow { time })?;
        Ok(time)
    }
}
