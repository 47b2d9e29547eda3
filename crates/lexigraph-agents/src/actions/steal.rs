//! Steal-letter handler.
//!
//! The thief picks one needed letter uniformly at random and copies it from
//! the first neighbor, in neighbor-list order, whose available union holds
//! it. The donor keeps its letter: stealing does not deplete the source.

use lexigraph_types::NodeId;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::ActionOutcome;
use crate::error::AgentError;
use crate::registry::AgentRegistry;

/// Attempt to steal a needed letter for `node`.
///
/// Fails softly when nothing is needed or no neighbor holds the chosen
/// letter.
///
/// # Errors
///
/// Returns [`AgentError::AgentNotFound`] or [`AgentError::UnknownNeighbor`]
/// for a corrupt registry.
pub fn steal_letter<R>(
    registry: &mut AgentRegistry,
    node: NodeId,
    rng: &mut R,
) -> Result<ActionOutcome, AgentError>
where
    R: Rng + ?Sized,
{
    let thief = registry.require(node)?;
    let Some(letter) = thief.needed().choose(rng).copied() else {
        return Ok(ActionOutcome::failed());
    };

    let Some(donor) = find_donor(registry, node, letter)? else {
        return Ok(ActionOutcome {
            letter: Some(letter),
            ..ActionOutcome::failed()
        });
    };

    registry.require_mut(node)?.push_stolen(letter);
    Ok(ActionOutcome {
        success: true,
        letter: Some(letter),
        donor: Some(donor),
        recipient: None,
    })
}

/// First neighbor of `node` whose available union contains `letter`.
fn find_donor(
    registry: &AgentRegistry,
    node: NodeId,
    letter: char,
) -> Result<Option<NodeId>, AgentError> {
    for neighbor in registry.require(node)?.neighbors() {
        let candidate = registry
            .get(*neighbor)
            .ok_or(AgentError::UnknownNeighbor {
                node,
                neighbor: *neighbor,
            })?;
        if candidate.holds(letter) {
            return Ok(Some(*neighbor));
        }
    }
    Ok(None)
}
