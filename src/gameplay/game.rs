use super::policy::Policy;
use super::registry::Registry;
use super::state::State;
use crate::Bucket;
use crate::Chips;
use crate::Result;
use crate::Utility;
use crate::abstraction::Clusters;
use crate::abstraction::Indexer;
use crate::abstraction::Isomorphic;
use crate::abstraction::Modulo;
use crate::rules::Gamedef;
use std::sync::Arc;
use std::sync::RwLock;

/// Immutable configuration of one abstracted poker game.
///
/// Holds the rules, the betting abstraction, the information
/// abstraction (indexer and clustering oracle), and the game-level
/// off-abstraction table. States share one `Game` through an `Arc`,
/// and the table is the only thing that ever grows after construction.
pub struct Game {
    gamedef: Arc<Gamedef>,
    policy: Policy,
    indexer: Box<dyn Indexer>,
    clusters: Box<dyn Clusters>,
    registry: RwLock<Registry>,
}

impl Game {
    pub fn new(gamedef: Gamedef, policy: Policy) -> Self {
        log::info!("new {} game, {} players, {} rounds", policy, gamedef.players(), gamedef.rounds());
        Self {
            indexer: Box::new(Isomorphic::from(gamedef.suits())),
            clusters: Box::new(Modulo::default()),
            registry: RwLock::new(Registry::default()),
            gamedef: Arc::new(gamedef),
            policy,
        }
    }
    pub fn with_indexer<I: Indexer + 'static>(mut self, indexer: I) -> Self {
        self.indexer = Box::new(indexer);
        self
    }
    pub fn with_clusters<C: Clusters + 'static>(mut self, clusters: C) -> Self {
        self.clusters = Box::new(clusters);
        self
    }
    /// the all-cards-undealt root of the game tree
    pub fn new_initial_state(self: &Arc<Self>) -> State {
        State::from(Arc::clone(self))
    }
}

/// Game metadata.
impl Game {
    pub fn gamedef(&self) -> &Arc<Gamedef> {
        &self.gamedef
    }
    pub fn policy(&self) -> Policy {
        self.policy
    }
    pub fn num_players(&self) -> usize {
        self.gamedef.players()
    }
    pub fn num_distinct_actions(&self) -> usize {
        match self.gamedef.is_limit() {
            true => 3,
            false => 8,
        }
    }
    pub fn max_chance_outcomes(&self) -> usize {
        self.gamedef.deck_size()
    }
    /// one terminal step, every card dealt, one check per player per
    /// round, and another lap of raises for every halving of the
    /// deepest stack down to the biggest blind
    pub fn max_game_length(&self) -> usize {
        let n = self.gamedef.players();
        let mut length = 1
            + self.gamedef.total_board_cards()
            + self.gamedef.hole_cards() * n
            + self.gamedef.rounds() * n;
        let blind = self.gamedef.max_blind().max(1) as f64;
        let mut stack = self.gamedef.max_stack() as f64;
        while stack > blind {
            stack /= 2.;
            length += n;
        }
        length
    }
    pub fn information_state_tensor_size(&self) -> usize {
        self.gamedef.players() + self.gamedef.deck_size() * 2 + self.max_game_length() * 2
    }
    pub fn observation_tensor_size(&self) -> usize {
        (self.gamedef.players() + self.gamedef.deck_size()) * 2
    }
    pub fn min_utility(&self) -> Utility {
        -(self.gamedef.stack(0) as Utility)
    }
    pub fn max_utility(&self) -> Utility {
        self.gamedef.stack(0) as Utility * (self.gamedef.players() - 1) as Utility
    }
    pub fn utility_sum(&self) -> Utility {
        0.
    }
}

/// Information abstraction.
impl Game {
    /// bucket of hole cards followed by the board. the round must be
    /// indexed and the cards must complete it.
    pub fn bucket(&self, round: usize, cards: &str) -> Result<Bucket> {
        self.indexer
            .index(round, cards)
            .and_then(|id| self.clusters.cluster(round, id))
    }
    pub fn indexer(&self) -> &dyn Indexer {
        self.indexer.as_ref()
    }
    pub fn clusters(&self) -> &dyn Clusters {
        self.clusters.as_ref()
    }
}

/// Game-level off-abstraction table.
impl Game {
    pub fn register_raise(&self, fingerprint: String, raise: Chips) -> Result<()> {
        self.registry
            .write()
            .expect("registry lock poisoned")
            .register(fingerprint, raise)
    }
    pub fn lookup_raise(&self, fingerprint: &str) -> Option<Chips> {
        self.registry
            .read()
            .expect("registry lock poisoned")
            .lookup(fingerprint)
    }
    pub fn has_registered_raises(&self) -> bool {
        !self.registry.read().expect("registry lock poisoned").is_empty()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("gamedef", &self.gamedef)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}bettingAbstraction = {}", self.gamedef, self.policy)
    }
}
