//! Action dispatch and post-action bookkeeping.
//!
//! One call to [`take_action`] is one full turn for one agent:
//!
//! 1. Check the clock bound (fatal if already reached)
//! 2. Draw an [`ActionKind`] from the agent's sampler
//! 3. Run the handler ([`form`], [`steal`], [`pass`], or think)
//! 4. Recompute needed letters for every touched agent
//! 5. Archive the snapshot, write the new one, advance the clock
//! 6. Count the action and append an audit record
//!
//! Handlers report soft failures through [`ActionOutcome::success`]; only
//! contract violations come back as `Err`.

pub mod form;
pub mod pass;
pub mod steal;

use lexigraph_types::{ActionKind, ActionRecord, NodeId};
use rand::Rng;
use tracing::debug;

use crate::context::TurnContext;
use crate::error::AgentError;
use crate::registry::AgentRegistry;

/// What a handler did, before bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionOutcome {
    /// Whether the action achieved its effect.
    pub success: bool,
    /// The letter moved by a steal or pass.
    pub letter: Option<char>,
    /// The neighbor a letter was copied from.
    pub donor: Option<NodeId>,
    /// The neighbor whose inventory received a letter.
    pub recipient: Option<NodeId>,
}

impl ActionOutcome {
    /// A soft failure with no state change.
    pub const fn failed() -> Self {
        Self {
            success: false,
            letter: None,
            donor: None,
            recipient: None,
        }
    }

    /// A success that touched only the acting agent.
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            letter: None,
            donor: None,
            recipient: None,
        }
    }
}

/// Take one turn for `node`: sample an action from its probability vector
/// and perform it.
///
/// # Errors
///
/// Returns [`AgentError::TickLimitReached`] if the clock is already at its
/// bound, [`AgentError::AgentNotFound`] / [`AgentError::UnknownNeighbor`]
/// for a corrupt registry, or a counter/clock overflow.
pub fn take_action<C, R>(
    registry: &mut AgentRegistry,
    ctx: &mut C,
    node: NodeId,
    rng: &mut R,
) -> Result<ActionRecord, AgentError>
where
    C: TurnContext + ?Sized,
    R: Rng + ?Sized,
{
    ctx.ensure_can_act()?;
    let action = registry.require(node)?.sampler().sample(rng)?;
    execute(registry, ctx, node, action, rng)
}

/// Perform a specific action for `node`, bypassing the sampler.
///
/// Used by scripted scenarios and tests. Bookkeeping is identical to
/// [`take_action`].
///
/// # Errors
///
/// Same as [`take_action`].
pub fn perform_action<C, R>(
    registry: &mut AgentRegistry,
    ctx: &mut C,
    node: NodeId,
    action: ActionKind,
    rng: &mut R,
) -> Result<ActionRecord, AgentError>
where
    C: TurnContext + ?Sized,
    R: Rng + ?Sized,
{
    ctx.ensure_can_act()?;
    execute(registry, ctx, node, action, rng)
}

fn execute<C, R>(
    registry: &mut AgentRegistry,
    ctx: &mut C,
    node: NodeId,
    action: ActionKind,
    rng: &mut R,
) -> Result<ActionRecord, AgentError>
where
    C: TurnContext + ?Sized,
    R: Rng + ?Sized,
{
    let outcome = match action {
        ActionKind::FormWord => form::form_word(registry, ctx, node)?,
        ActionKind::StealLetter => steal::steal_letter(registry, node, rng)?,
        ActionKind::PassLetter => pass::pass_letter(registry, node, rng)?,
        ActionKind::Think => ActionOutcome::succeeded(),
    };

    let mut touched = Vec::with_capacity(2);
    for id in core::iter::once(node).chain(outcome.recipient) {
        let agent = registry.require_mut(id)?;
        agent.refresh_needed();
        touched.push(agent.snapshot_entry());
    }
    let time = ctx.commit(touched)?;

    let record = registry
        .require_mut(node)?
        .log_action(action, outcome.success, time)?;

    debug!(
        node = %node,
        time,
        action = %action,
        success = outcome.success,
        letter = ?outcome.letter,
        donor = ?outcome.donor,
        recipient = ?outcome.recipient,
        "Action resolved"
    );
    Ok(record)
}
