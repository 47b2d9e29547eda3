//! Pass-letter handler.
//!
//! The giver picks one of its *initial* letters uniformly at random and
//! hands a copy to the first neighbor, in neighbor-list order, that does not
//! already hold it. The giver keeps its letter.

use lexigraph_types::NodeId;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::ActionOutcome;
use crate::error::AgentError;
use crate::registry::AgentRegistry;

/// Attempt to pass one initial letter from `node` to a neighbor lacking it.
///
/// Fails softly when every neighbor already holds the letter, when the
/// agent has no neighbors, or when its initial hand is empty.
///
/// # Errors
///
/// Returns [`AgentError::AgentNotFound`] or [`AgentError::UnknownNeighbor`]
/// for a corrupt registry.
pub fn pass_letter<R>(
    registry: &mut AgentRegistry,
    node: NodeId,
    rng: &mut R,
) -> Result<ActionOutcome, AgentError>
where
    R: Rng + ?Sized,
{
    let giver = registry.require(node)?;
    let Some(letter) = giver.letters().initial.choose(rng).copied() else {
        return Ok(ActionOutcome::failed());
    };

    let Some(recipient) = find_recipient(registry, node, letter)? else {
        return Ok(ActionOutcome {
            letter: Some(letter),
            ..ActionOutcome::failed()
        });
    };

    registry.require_mut(recipient)?.push_received(letter);
    Ok(ActionOutcome {
        success: true,
        letter: Some(letter),
        donor: None,
        recipient: Some(recipient),
    })
}

/// First neighbor of `node` whose available union lacks `letter`.
fn find_recipient(
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
        if !candidate.holds(letter) {
            return Ok(Some(*neighbor));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::actions::perform_action;
    use crate::actions::test_support::{MemoryContext, registry};
    use lexigraph_types::ActionKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pass_gives_copy_to_neighbor_lacking_letter() {
        let mut agents = registry(&["qqqqq", "abcde"], [0.0, 0.0, 1.0, 0.0]);
        let mut ctx = MemoryContext::with_limit(5);
        let mut rng = StdRng::seed_from_u64(5);

        let record =
            perform_action(&mut agents, &mut ctx, NodeId(0), ActionKind::PassLetter, &mut rng)
                .unwrap();
        assert!(record.success);
        assert_eq!(agents.require(NodeId(1)).unwrap().letters().received, vec!['q']);
        assert_eq!(agents.require(NodeId(0)).unwrap().letters().initial.len(), 5);
        // The recipient's new inventory lands in the snapshot too.
        assert_eq!(ctx.current.get(&NodeId(1)).unwrap().received, vec!['q']);
    }

    #[test]
    fn pass_recomputes_recipient_needed() {
        let mut agents = registry(&["qqqqq", "uick"], [0.0, 0.0, 1.0, 0.0]);
        agents.require_mut(NodeId(1)).unwrap().set_target("quick");
        assert_eq!(agents.require(NodeId(1)).unwrap().needed(), ['q']);
        let mut rng = StdRng::seed_from_u64(5);

        let outcome = pass_letter(&mut agents, NodeId(0), &mut rng).unwrap();
        assert_eq!(outcome.recipient, Some(NodeId(1)));
        assert!(agents.require(NodeId(1)).unwrap().needed().is_empty());
    }

    #[test]
    fn pass_fails_when_every_neighbor_has_letter() {
        let mut agents = registry(&["zzzzz", "zebra", "pizza"], [0.0, 0.0, 1.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = pass_letter(&mut agents, NodeId(0), &mut rng).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.letter, Some('z'));
        assert!(agents.require(NodeId(1)).unwrap().letters().received.is_empty());
    }

    #[test]
    fn pass_skips_neighbors_that_already_hold_letter() {
        let mut agents = registry(&["kkkkk", "kite", "abcd"], [0.0, 0.0, 1.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = pass_letter(&mut agents, NodeId(0), &mut rng).unwrap();
        assert_eq!(outcome.recipient, Some(NodeId(2)));
    }

    #[test]
    fn isolated_agent_cannot_pass() {
        let mut agents = registry(&["abcde"], [0.0, 0.0, 1.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = pass_letter(&mut agents, NodeId(0), &mut rng).unwrap();
        assert!(!outcome.success);
    }
}
