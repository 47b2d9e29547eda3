//! Per-node agent state.
//!
//! An [`Agent`] owns its letter inventory, its current target word, its
//! private pool of remaining candidate words, and its audit log. The static
//! node data (strategy, probabilities, neighbors, degree) is copied in at
//! construction and never changes.

use lexigraph_lexicon::closest_target;
use lexigraph_types::{ActionKind, ActionRecord, LetterInventory, NodeData, NodeId, Strategy};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

use crate::error::AgentError;
use crate::inventory::{consume_word, needed_letters};
use crate::sampler::ActionSampler;

/// An autonomous player sitting on one graph node.
#[derive(Debug, Clone)]
pub struct Agent {
    /// The node this agent lives on.
    node: NodeId,
    /// Static node data from the graph generator.
    data: NodeData,
    /// Action sampler built from `data.action_probabilities`.
    sampler: ActionSampler,
    /// Letters held, by provenance.
    letters: LetterInventory,
    /// Word currently being built, if any candidates remain.
    target: Option<String>,
    /// Sorted distinct target letters missing from the inventory.
    needed: Vec<char>,
    /// Private copy of the feasible corpus, minus every word already targeted.
    candidates: Vec<String>,
    /// Actions taken so far.
    actions_taken: u64,
    /// Words formed so far.
    words_formed: u64,
    /// One record per action, in order.
    log: Vec<ActionRecord>,
}

impl Agent {
    /// Create an agent for `node` with an empty inventory and no target.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidActionProbabilities`] if the node's
    /// probability vector is unusable.
    pub fn new(node: NodeId, data: NodeData) -> Result<Self, AgentError> {
        let sampler = ActionSampler::new(node, data.action_probabilities)?;
        Ok(Self {
            node,
            data,
            sampler,
            letters: LetterInventory::default(),
            target: None,
            needed: Vec::new(),
            candidates: Vec::new(),
            actions_taken: 0,
            words_formed: 0,
            log: Vec::new(),
        })
    }

    // -------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------

    /// The node this agent lives on.
    pub const fn node(&self) -> NodeId {
        self.node
    }

    /// Strategy label of the node.
    pub const fn strategy(&self) -> Strategy {
        self.data.strategy
    }

    /// Neighbors in scan order.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.data.neighbors
    }

    /// The action sampler.
    pub const fn sampler(&self) -> &ActionSampler {
        &self.sampler
    }

    /// Letters held, by provenance.
    pub const fn letters(&self) -> &LetterInventory {
        &self.letters
    }

    /// The available-letters union.
    pub fn available(&self) -> Vec<char> {
        self.letters.available()
    }

    /// Whether `letter` is in the available union.
    pub fn holds(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    /// Current target word.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Letters still needed for the target.
    pub fn needed(&self) -> &[char] {
        &self.needed
    }

    /// Remaining candidate words.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Actions taken so far.
    pub const fn actions_taken(&self) -> u64 {
        self.actions_taken
    }

    /// Words formed so far.
    pub const fn words_formed(&self) -> u64 {
        self.words_formed
    }

    /// The audit log.
    pub fn log(&self) -> &[ActionRecord] {
        &self.log
    }

    /// Whether the form precondition holds.
    pub fn can_form(&self) -> bool {
        self.target.is_some() && self.needed.is_empty()
    }

    // -------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------

    /// Deal `hand_size` letters uniformly, with replacement, into the initial
    /// hand, replacing any previous hand.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::EmptyAlphabet`] if `alphabet` is empty.
    pub fn deal_initial_hand<R: Rng + ?Sized>(
        &mut self,
        alphabet: &[char],
        hand_size: usize,
        rng: &mut R,
    ) -> Result<(), AgentError> {
        let mut hand = Vec::with_capacity(hand_size);
        for _ in 0..hand_size {
            let letter = alphabet.choose(rng).copied().ok_or(AgentError::EmptyAlphabet)?;
            hand.push(letter);
        }
        self.set_initial_hand(hand);
        Ok(())
    }

    /// Place a specific initial hand, replacing any previous one.
    pub fn set_initial_hand(&mut self, hand: Vec<char>) {
        debug!(node = %self.node, hand = %hand.iter().collect::<String>(), "Initial hand dealt");
        self.letters.initial = hand;
        self.refresh_needed();
    }

    /// Replace the private candidate pool.
    pub fn set_candidates(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
    }

    /// Pick the closest remaining candidate as the new target and drop it
    /// from the pool. Leaves the agent without a target once the pool is
    /// exhausted.
    pub fn choose_target(&mut self) -> Option<&str> {
        let available = self.letters.available();
        self.target = closest_target(&mut self.candidates, &available);
        if self.target.is_none() {
            warn!(node = %self.node, "Candidate pool exhausted, agent has no target");
        }
        self.refresh_needed();
        self.target.as_deref()
    }

    /// Clear all dynamic state, keeping the node data.
    pub fn reset(&mut self) {
        self.letters = LetterInventory::default();
        self.target = None;
        self.needed.clear();
        self.candidates.clear();
        self.actions_taken = 0;
        self.words_formed = 0;
        self.log.clear();
    }

    // -------------------------------------------------------------------
    // Protocol mutations (driven by `actions`)
    // -------------------------------------------------------------------

    /// Recompute `needed` from the current target and inventory.
    pub(crate) fn refresh_needed(&mut self) {
        self.needed = self
            .target
            .as_deref()
            .map(|target| needed_letters(target, &self.letters))
            .unwrap_or_default();
    }

    /// Add a letter copied from a neighbor.
    pub(crate) fn push_stolen(&mut self, letter: char) {
        self.letters.stolen.push(letter);
        self.refresh_needed();
    }

    /// Add a letter given by a neighbor.
    pub(crate) fn push_received(&mut self, letter: char) {
        self.letters.received.push(letter);
        self.refresh_needed();
    }

    /// Complete the current target: spend external letters, bump the word
    /// counter, and move on to a fresh target. Returns the completed word.
    pub(crate) fn complete_target(&mut self) -> Result<Option<String>, AgentError> {
        let Some(word) = self.target.take() else {
            return Ok(None);
        };
        consume_word(&mut self.letters, &word);
        self.words_formed = self.words_formed.checked_add(1).ok_or_else(|| {
            AgentError::ArithmeticOverflow {
                context: String::from("words_formed counter"),
            }
        })?;
        self.choose_target();
        Ok(Some(word))
    }

    /// Count the action and append its audit record.
    pub(crate) fn log_action(
        &mut self,
        action: ActionKind,
        success: bool,
        time: u64,
    ) -> Result<ActionRecord, AgentError> {
        self.actions_taken = self.actions_taken.checked_add(1).ok_or_else(|| {
            AgentError::ArithmeticOverflow {
                context: String::from("actions_taken counter"),
            }
        })?;
        let record = ActionRecord {
            node: self.node,
            strategy: self.data.strategy,
            action_probabilities: self.data.action_probabilities,
            neighbors: self.data.neighbors.clone(),
            degree: self.data.degree,
            target: self.target.clone(),
            available: self.letters.available(),
            needed: self.needed.clone(),
            time,
            actions_taken: self.actions_taken,
            action,
            success,
            words_formed: self.words_formed,
        };
        self.log.push(record.clone());
        Ok(record)
    }

    /// Inventory entry for the world snapshot.
    pub(crate) fn snapshot_entry(&self) -> (NodeId, LetterInventory) {
        (self.node, self.letters.clone())
    }

    /// Mutable inventory access for tests in sibling modules.
    #[cfg(test)]
    pub(crate) fn letters_mut(&mut self) -> &mut LetterInventory {
        &mut self.letters
    }

    /// Force a target for tests in sibling modules.
    #[cfg(test)]
    pub(crate) fn set_target(&mut self, target: &str) {
        self.target = Some(target.to_owned());
        self.refresh_needed();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn node_data(neighbors: Vec<NodeId>) -> NodeData {
        let degree = neighbors.len();
        NodeData {
            strategy: Strategy::Selfish,
            action_probabilities: [0.1, 0.4, 0.2, 0.3],
            neighbors,
            degree,
        }
    }

    #[test]
    fn new_agent_is_empty() {
        let agent = Agent::new(NodeId(0), node_data(vec![NodeId(1)])).unwrap();
        assert!(agent.letters().is_empty());
        assert_eq!(agent.target(), None);
        assert!(!agent.can_form());
        assert_eq!(agent.neighbors(), [NodeId(1)]);
    }

    #[test]
    fn new_agent_rejects_bad_probabilities() {
        let mut data = node_data(Vec::new());
        data.action_probabilities = [0.9, 0.9, 0.0, 0.0];
        assert!(Agent::new(NodeId(0), data).is_err());
    }

    #[test]
    fn deal_draws_requested_hand_size_from_alphabet() {
        let mut agent = Agent::new(NodeId(0), node_data(Vec::new())).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        agent.deal_initial_hand(&['x', 'y'], 5, &mut rng).unwrap();
        assert_eq!(agent.letters().initial.len(), 5);
        assert!(agent.letters().initial.iter().all(|c| *c == 'x' || *c == 'y'));
    }

    #[test]
    fn deal_from_empty_alphabet_fails() {
        let mut agent = Agent::new(NodeId(0), node_data(Vec::new())).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let err = agent.deal_initial_hand(&[], 5, &mut rng).unwrap_err();
        assert!(matches!(err, AgentError::EmptyAlphabet));
    }

    #[test]
    fn choose_target_removes_word_and_computes_needed() {
        let mut agent = Agent::new(NodeId(0), node_data(Vec::new())).unwrap();
        agent.letters_mut().initial = vec!['a', 'p', 'l'];
        agent.set_candidates(vec!["zebra".to_owned(), "apple".to_owned()]);

        assert_eq!(agent.choose_target(), Some("apple"));
        assert_eq!(agent.candidates(), ["zebra"]);
        assert_eq!(agent.needed(), ['e']);
    }

    #[test]
    fn exhausted_pool_leaves_no_target() {
        let mut agent = Agent::new(NodeId(0), node_data(Vec::new())).unwrap();
        assert_eq!(agent.choose_target(), None);
        assert!(agent.needed().is_empty());
        assert!(!agent.can_form());
    }

    #[test]
    fn complete_target_consumes_and_retargets() {
        let mut agent = Agent::new(NodeId(0), node_data(Vec::new())).unwrap();
        agent.letters_mut().initial = vec!['a', 'p'];
        agent.letters_mut().stolen = vec!['l'];
        agent.letters_mut().received = vec!['e'];
        agent.set_candidates(vec!["pale".to_owned()]);
        agent.set_target("apple");
        assert!(agent.can_form());

        let word = agent.complete_target().unwrap();
        assert_eq!(word.as_deref(), Some("apple"));
        assert_eq!(agent.words_formed(), 1);
        assert!(agent.letters().stolen.is_empty());
        assert!(agent.letters().received.is_empty());
        assert_eq!(agent.target(), Some("pale"));
    }

    #[test]
    fn reset_clears_dynamic_state() {
        let mut agent = Agent::new(NodeId(0), node_data(Vec::new())).unwrap();
        agent.letters_mut().initial = vec!['a'];
        agent.set_target("apple");
        agent.reset();
        assert!(agent.letters().is_empty());
        assert_eq!(agent.target(), None);
        assert!(agent.needed().is_empty());
        assert_eq!(agent.strategy(), Strategy::Selfish);
    }
}
