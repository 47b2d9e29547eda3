//! Weighted categorical action draw.
//!
//! Each agent owns an [`ActionSampler`] built once from its node's
//! action-probability vector. The vector is validated here, at
//! construction, so a draw only fails if the index distribution hands back
//! a slot outside the four actions.

use lexigraph_types::{ActionKind, NodeId};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::AgentError;

/// Allowed deviation of the probability sum from 1.
const SUM_TOLERANCE: f64 = 1e-6;

/// Draws one [`ActionKind`] per call from a fixed 4-slot distribution.
#[derive(Debug, Clone)]
pub struct ActionSampler {
    /// Node the sampler belongs to, for error reports.
    node: NodeId,
    /// The validated probabilities, in [`ActionKind::ALL`] order.
    probabilities: [f64; 4],
    /// Precomputed cumulative weights.
    index: WeightedIndex<f64>,
}

impl ActionSampler {
    /// Validate `probabilities` and build a sampler.
    ///
    /// Every slot must be finite and non-negative and the slots must sum to
    /// 1 (within a small tolerance).
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidActionProbabilities`] otherwise.
    pub fn new(node: NodeId, probabilities: [f64; 4]) -> Result<Self, AgentError> {
        let invalid = |reason: String| AgentError::InvalidActionProbabilities { node, reason };

        if let Some(bad) = probabilities.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(invalid(format!("probability {bad} is not a finite non-negative number")));
        }
        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(invalid(format!("probabilities sum to {sum}, expected 1")));
        }

        let index = WeightedIndex::new(probabilities).map_err(|err| invalid(err.to_string()))?;
        Ok(Self {
            node,
            probabilities,
            index,
        })
    }

    /// The validated probability vector.
    pub const fn probabilities(&self) -> [f64; 4] {
        self.probabilities
    }

    /// Draw one action. Draws are independent across calls.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidActionSlot`] if the draw lands outside
    /// the four action slots.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ActionKind, AgentError> {
        action_for_slot(self.node, self.index.sample(rng))
    }
}

/// Map a slot of the probability vector to its action.
fn action_for_slot(node: NodeId, slot: usize) -> Result<ActionKind, AgentError> {
    match slot {
        0 => Ok(ActionKind::FormWord),
        1 => Ok(ActionKind::StealLetter),
        2 => Ok(ActionKind::PassLetter),
        3 => Ok(ActionKind::Think),
        _ => Err(AgentError::InvalidActionSlot { node, slot }),
    }
}
