//! Game setup and the round loop.
//!
//! An [`Environment`] is built from a [`Topology`] and a [`Lexicon`]. Setup
//! runs in a fixed order:
//!
//! 1. [`Environment::deal_initial_hands`] -- random letters for every agent
//! 2. [`Environment::compute_feasible_corpus`] -- words the pooled letters
//!    can spell, copied into every agent's candidate pool
//! 3. [`Environment::assign_initial_targets`] -- closest target per agent,
//!    then one archive and one clock tick
//!
//! [`Environment::set_env`] runs all three. [`Environment::play`] then
//! gives every agent one action per round, in ascending node order, until
//! the clock reaches its bound.

use std::collections::BTreeMap;

use lexigraph_agents::{Agent, AgentError, AgentRegistry, TurnContext, take_action};
use lexigraph_graph::Topology;
use lexigraph_lexicon::{ALPHABET_SIZE, Lexicon, feasible};
use lexigraph_types::{ActionRecord, FormedWord, NodeData, NodeId, WorldSnapshot};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::clock::ClockError;
use crate::config::GameConfig;
use crate::runner::RunSummary;
use crate::state::SharedState;

/// Errors that can occur while setting up or running a game.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    /// The alphabet does not have the expected number of symbols.
    #[error("alphabet must have 26 symbols, found {found}")]
    AlphabetSize {
        /// Number of symbols actually loaded.
        found: usize,
    },

    /// The topology has no nodes.
    #[error("cannot run a game with no agents")]
    NoAgents,

    /// An agent operation failed.
    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    /// The clock could not advance.
    #[error("clock error: {0}")]
    Clock(#[from] ClockError),
}

/// The game: agents, shared state, and the random source driving both.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Corpus and alphabet.
    lexicon: Lexicon,
    /// Static node data, as read from the topology.
    nodes: BTreeMap<NodeId, NodeData>,
    /// One agent per node.
    registry: AgentRegistry,
    /// Clock, snapshots, and ledger.
    state: SharedState,
    /// Words the initial letter pool can spell.
    possible_corpus: Vec<String>,
    /// Letters per initial hand.
    hand_size: usize,
    /// Seed the random source was built from, kept for [`Environment::reset`].
    seed: u64,
    /// Random source for hands, action draws, and neighbor choice.
    rng: StdRng,
}

impl Environment {
    /// Build the node-data table and one agent per node.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::AlphabetSize`] unless the alphabet has
    /// exactly 26 symbols, [`EnvironmentError::NoAgents`] for an empty
    /// topology, or [`EnvironmentError::Agent`] for a malformed probability
    /// vector or a neighbor id that names no node.
    pub fn configure(
        topology: &Topology,
        lexicon: Lexicon,
        game: &GameConfig,
    ) -> Result<Self, EnvironmentError> {
        let found = lexicon.alphabet().len();
        if found != ALPHABET_SIZE {
            return Err(EnvironmentError::AlphabetSize { found });
        }

        let nodes = topology.node_data();
        if nodes.is_empty() {
            return Err(EnvironmentError::NoAgents);
        }

        let mut registry = AgentRegistry::new();
        for (node, data) in &nodes {
            registry.insert(Agent::new(*node, data.clone())?)?;
        }
        registry.validate_neighbors()?;

        info!(
            agents = registry.len(),
            edges = topology.edge_count(),
            tick_limit = game.tick_limit,
            seed = game.seed,
            "Environment configured"
        );

        Ok(Self {
            lexicon,
            nodes,
            registry,
            state: SharedState::new(game.tick_limit),
            possible_corpus: Vec::new(),
            hand_size: game.hand_size,
            seed: game.seed,
            rng: StdRng::seed_from_u64(game.seed),
        })
    }

    // -------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------

    /// Deal random hands, build the feasible corpus, and assign targets.
    ///
    /// # Errors
    ///
    /// Propagates failures from the three setup steps.
    pub fn set_env(&mut self) -> Result<(), EnvironmentError> {
        self.deal_initial_hands()?;
        self.finish_setup()
    }

    /// Like [`Environment::set_env`], but with fixed hands instead of random
    /// ones. Nodes missing from `hands` start empty.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::Agent`] for a hand addressed to an
    /// unknown node, before any hand is placed, plus anything [`Environment::assign_initial_targets`]
    /// returns.
    pub fn set_env_with_hands(
        &mut self,
        hands: BTreeMap<NodeId, Vec<char>>,
    ) -> Result<(), EnvironmentError> {
        for node in hands.keys() {
            self.registry.require(*node)?;
        }
        for (node, hand) in hands {
            self.registry.require_mut(node)?.set_initial_hand(hand);
        }
        self.state.replace_current(self.registry.snapshot());
        self.finish_setup()
    }

    fn finish_setup(&mut self) -> Result<(), EnvironmentError> {
        self.compute_feasible_corpus();
        self.assign_initial_targets()?;
        info!(
            time = self.state.clock().time(),
            feasible_words = self.possible_corpus.len(),
            "Environment set"
        );
        Ok(())
    }

    /// Draw `hand_size` letters per agent, uniformly with replacement, and
    /// record them in the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::Agent`] if the alphabet is empty.
    pub fn deal_initial_hands(&mut self) -> Result<(), EnvironmentError> {
        for agent in self.registry.iter_mut() {
            agent.deal_initial_hand(self.lexicon.alphabet(), self.hand_size, &mut self.rng)?;
            self.state.record(agent.node(), agent.letters().clone());
        }
        Ok(())
    }

    /// Keep the words the pooled letters of every agent can spell, and give
    /// each agent its own copy.
    pub fn compute_feasible_corpus(&mut self) {
        let pool = self.registry.letter_pool();
        self.possible_corpus = feasible(self.lexicon.words(), &pool);
        for agent in self.registry.iter_mut() {
            agent.set_candidates(self.possible_corpus.clone());
        }
        debug!(
            pool = %pool.iter().collect::<String>(),
            corpus = self.lexicon.words().len(),
            feasible = self.possible_corpus.len(),
            "Feasible corpus computed"
        );
    }

    /// Give every agent its closest candidate as a target, archive the
    /// snapshot, and advance the clock once.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::Clock`] on clock overflow.
    pub fn assign_initial_targets(&mut self) -> Result<(), EnvironmentError> {
        for agent in self.registry.iter_mut() {
            let target = agent.choose_target().map(str::to_owned);
            debug!(node = %agent.node(), target = ?target, "Initial target assigned");
        }
        self.state.replace_current(self.registry.snapshot());
        self.state.archive();
        self.state.advance()?;
        Ok(())
    }

    // -------------------------------------------------------------------
    // Turn loop
    // -------------------------------------------------------------------

    /// One sampled action for `node`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::Agent`] wrapping
    /// [`AgentError::TickLimitReached`] once the clock is at its bound.
    pub fn take_turn(&mut self, node: NodeId) -> Result<ActionRecord, EnvironmentError> {
        Ok(take_action(
            &mut self.registry,
            &mut self.state,
            node,
            &mut self.rng,
        )?)
    }

    /// Run rounds until the clock reaches its bound. Stops mid-round when
    /// the bound falls inside one.
    ///
    /// # Errors
    ///
    /// Propagates any fatal agent error.
    pub fn play(&mut self) -> Result<RunSummary, EnvironmentError> {
        let mut actions_executed: u64 = 0;
        let mut rounds: u64 = 0;

        'rounds: while !self.state.clock().is_exhausted() {
            for node in self.registry.ids() {
                if self.state.clock().is_exhausted() {
                    break 'rounds;
                }
                self.take_turn(node)?;
                actions_executed = actions_executed.saturating_add(1);
            }
            rounds = rounds.saturating_add(1);
            debug!(round = rounds, time = self.state.clock().time(), "Round complete");
        }

        info!(
            rounds,
            actions_executed,
            time = self.state.clock().time(),
            words_formed = self.state.words_formed().len(),
            "Play finished"
        );

        Ok(RunSummary::collect(
            &self.registry,
            actions_executed,
            self.state.clock().time(),
            self.state.words_formed(),
        ))
    }

    /// Back to the state right after [`Environment::configure`]: clock at 0,
    /// no snapshots, no ledger, no hands, and a freshly seeded random
    /// source. Static node data is kept.
    pub fn reset(&mut self) {
        self.state.reset();
        for agent in self.registry.iter_mut() {
            agent.reset();
        }
        self.possible_corpus.clear();
        self.rng = StdRng::seed_from_u64(self.seed);
        debug!("Environment reset");
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// Current global time.
    pub fn time(&self) -> u64 {
        self.state.time()
    }

    /// The clock bound.
    pub fn time_max(&self) -> u64 {
        self.state.time_max()
    }

    /// All agents.
    pub const fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// One agent.
    pub fn agent(&self, node: NodeId) -> Option<&Agent> {
        self.registry.get(node)
    }

    /// Static node data.
    pub const fn node_data(&self) -> &BTreeMap<NodeId, NodeData> {
        &self.nodes
    }

    /// Corpus and alphabet.
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Words the initial letter pool can spell.
    pub fn possible_corpus(&self) -> &[String] {
        &self.possible_corpus
    }

    /// Inventories as of the current time.
    pub const fn current_snapshot(&self) -> &WorldSnapshot {
        self.state.current()
    }

    /// Archived snapshots keyed by time.
    pub const fn history(&self) -> &BTreeMap<u64, WorldSnapshot> {
        self.state.history()
    }

    /// Completed words, in completion order.
    pub fn words_formed(&self) -> &[FormedWord] {
        self.state.words_formed()
    }

    /// Every agent's audit records, sorted by time.
    pub fn audit_log(&self) -> Vec<ActionRecord> {
        self.registry.audit_log()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lexigraph_types::{NodeAttributes, Strategy};

    const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::from_parts(
            words.iter().map(|w| (*w).to_owned()).collect(),
            ALPHABET.chars().collect(),
        )
        .unwrap()
    }

    fn pair() -> Topology {
        let attrs = NodeAttributes {
            strategy: Strategy::Altruistic,
            action_probabilities: [0.25, 0.25, 0.25, 0.25],
        };
        let attributes = BTreeMap::from([(NodeId(0), attrs), (NodeId(1), attrs)]);
        Topology::from_edges(attributes, &[(NodeId(0), NodeId(1))]).unwrap()
    }

    fn game(tick_limit: u64) -> GameConfig {
        GameConfig {
            seed: 7,
            tick_limit,
            hand_size: 5,
        }
    }

    #[test]
    fn configure_rejects_short_alphabet() {
        let lexicon = Lexicon::from_parts(vec![String::from("apple")], vec!['a', 'p']).unwrap();
        let err = Environment::configure(&pair(), lexicon, &game(10)).unwrap_err();
        assert!(matches!(err, EnvironmentError::AlphabetSize { found: 2 }));
    }

    #[test]
    fn configure_builds_one_agent_per_node() {
        let env = Environment::configure(&pair(), lexicon(&["apple"]), &game(10)).unwrap();
        assert_eq!(env.registry().len(), 2);
        assert_eq!(env.node_data().len(), 2);
        assert_eq!(env.time(), 0);
        assert_eq!(env.agent(NodeId(1)).unwrap().neighbors(), &[NodeId(0)]);
    }

    #[test]
    fn set_env_deals_hands_and_ticks_once() {
        let mut env = Environment::configure(&pair(), lexicon(&["apple"]), &game(10)).unwrap();
        env.set_env().unwrap();

        assert_eq!(env.time(), 1);
        assert_eq!(env.history().len(), 1);
        assert!(env.history().contains_key(&0));
        for agent in env.registry().iter() {
            assert_eq!(agent.letters().initial.len(), 5);
            assert!(agent.letters().stolen.is_empty());
            assert_eq!(env.current_snapshot()[&agent.node()], agent.letters().clone());
        }
    }

    #[test]
    fn scripted_hands_pick_shared_target() {
        let mut env =
            Environment::configure(&pair(), lexicon(&["apple", "zebra"]), &game(10)).unwrap();
        env.set_env_with_hands(BTreeMap::from([
            (NodeId(0), "apxyz".chars().collect()),
            (NodeId(1), "lemno".chars().collect()),
        ]))
        .unwrap();

        assert_eq!(env.possible_corpus(), &[String::from("apple")]);
        for agent in env.registry().iter() {
            assert_eq!(agent.target(), Some("apple"));
        }
    }

    #[test]
    fn scripted_hands_for_unknown_node_change_nothing() {
        let mut env = Environment::configure(&pair(), lexicon(&["apple"]), &game(10)).unwrap();
        let err = env
            .set_env_with_hands(BTreeMap::from([
                (NodeId(0), "apple".chars().collect()),
                (NodeId(9), "zebra".chars().collect()),
            ]))
            .unwrap_err();

        assert!(matches!(
            err,
            EnvironmentError::Agent(AgentError::AgentNotFound(NodeId(9)))
        ));
        assert!(env.agent(NodeId(0)).unwrap().letters().initial.is_empty());
        assert!(env.current_snapshot().is_empty());
        assert_eq!(env.time(), 0);
    }

    #[test]
    fn play_stops_exactly_at_the_bound() {
        // 1 setup tick + 3 rounds of 2 agents.
        let mut env = Environment::configure(&pair(), lexicon(&["apple"]), &game(7)).unwrap();
        env.set_env().unwrap();
        let summary = env.play().unwrap();

        assert_eq!(summary.actions_executed, 6);
        assert_eq!(summary.final_time, 7);
        assert_eq!(env.audit_log().len(), 6);
        assert!(matches!(
            env.take_turn(NodeId(0)),
            Err(EnvironmentError::Agent(AgentError::TickLimitReached { time: 7, time_max: 7 }))
        ));
    }

    #[test]
    fn play_stops_mid_round() {
        let mut env = Environment::configure(&pair(), lexicon(&["apple"]), &game(4)).unwrap();
        env.set_env().unwrap();
        let summary = env.play().unwrap();

        assert_eq!(summary.actions_executed, 3);
        assert_eq!(summary.per_agent[&NodeId(0)].actions_taken, 2);
        assert_eq!(summary.per_agent[&NodeId(1)].actions_taken, 1);
    }

    #[test]
    fn reset_allows_an_identical_rerun() {
        let mut env = Environment::configure(&pair(), lexicon(&["apple"]), &game(9)).unwrap();
        env.set_env().unwrap();
        let first = env.play().unwrap();
        let first_log = env.audit_log();

        env.reset();
        assert_eq!(env.time(), 0);
        assert!(env.history().is_empty());
        assert!(env.audit_log().is_empty());

        env.set_env().unwrap();
        let second = env.play().unwrap();
        assert_eq!(first, second);
        assert_eq!(first_log, env.audit_log());
    }
}
