//! Form-word handler.
//!
//! Succeeds only when the agent has a target and no letters are missing.
//! On success the word goes to the global ledger, the stolen and received
//! letters it used are spent, and the agent picks its next target.

use lexigraph_types::{FormedWord, NodeId};
use tracing::info;

use super::ActionOutcome;
use crate::context::TurnContext;
use crate::error::AgentError;
use crate::registry::AgentRegistry;

/// Attempt to complete `node`'s current target.
///
/// # Errors
///
/// Returns [`AgentError::AgentNotFound`] or a counter overflow.
pub fn form_word<C>(
    registry: &mut AgentRegistry,
    ctx: &mut C,
    node: NodeId,
) -> Result<ActionOutcome, AgentError>
where
    C: TurnContext + ?Sized,
{
    let agent = registry.require_mut(node)?;
    if !agent.can_form() {
        return Ok(ActionOutcome::failed());
    }

    let time = ctx.time();
    if let Some(word) = agent.complete_target()? {
        info!(node = %node, word = %word, time, next_target = ?agent.target(), "Word formed");
        ctx.record_word(FormedWord { word, node, time });
    }
    Ok(ActionOutcome::succeeded())
}
