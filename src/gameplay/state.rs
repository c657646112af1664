use super::action::Action;
use super::choice::Choice;
use super::game::Game;
use super::legal::Legal;
use super::registry::Registry;
use super::sizing::Sizing;
use super::turn::Turn;
use crate::Bucket;
use crate::Chips;
use crate::Error;
use crate::NO_BUCKET;
use crate::Probability;
use crate::Result;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::rules::Engine;
use crate::rules::Move;
use itertools::Itertools;
use std::sync::Arc;

/// hole plus board cards the canonical indexer expects, by round
const INDEXED: [usize; 4] = [2, 5, 6, 7];

/// One node of the abstracted game tree.
///
/// A state owns everything that changes during a hand: the betting
/// engine, the undealt pool, each player's hole cards, the board, and
/// the action sequence. The node type and the legal choices with their
/// raise-to amounts are recomputed after every transition, so they are
/// always current when read. Cloning is a deep copy, except for the
/// shared `Game`.
#[derive(Debug, Clone)]
pub struct State {
    game: Arc<Game>,
    engine: Engine,
    deck: Deck,
    holes: Vec<Hand>,
    board: Hand,
    turn: Turn,
    sizing: Sizing,
    sequence: String,
    history: Vec<Action>,
    overlay: Registry,
}

impl From<Arc<Game>> for State {
    fn from(game: Arc<Game>) -> Self {
        let gamedef = Arc::clone(game.gamedef());
        let mut state = Self {
            engine: Engine::from(Arc::clone(&gamedef)),
            deck: Deck::new(gamedef.suits(), gamedef.ranks()),
            holes: vec![Hand::empty(); gamedef.players()],
            board: Hand::empty(),
            turn: Turn::Chance,
            sizing: Sizing::deal(),
            sequence: String::new(),
            history: Vec::new(),
            overlay: Registry::default(),
            game,
        };
        state.recompute();
        state
    }
}

/// Node type and accessors.
impl State {
    pub fn game(&self) -> &Arc<Game> {
        &self.game
    }
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
    pub fn turn(&self) -> Turn {
        self.turn
    }
    /// seat to act, or the chance and terminal sentinels
    pub fn current_player(&self) -> i64 {
        i64::from(self.turn)
    }
    pub fn is_chance(&self) -> bool {
        self.turn == Turn::Chance
    }
    pub fn is_terminal(&self) -> bool {
        self.turn == Turn::Terminal
    }
    pub fn is_decision(&self) -> bool {
        matches!(self.turn, Turn::Choice(_))
    }
    pub fn round(&self) -> usize {
        self.engine.round()
    }
    pub fn hole(&self, player: usize) -> Hand {
        self.holes[player]
    }
    pub fn board(&self) -> Hand {
        self.board
    }
    /// undealt cards
    pub fn deck(&self) -> Deck {
        self.deck
    }
    pub fn legal(&self) -> Legal {
        self.sizing.legal()
    }
    pub fn sizing(&self) -> &Sizing {
        &self.sizing
    }
    /// one character per action taken, deals included
    pub fn sequence(&self) -> &str {
        &self.sequence
    }
    pub fn history(&self) -> &[Action] {
        &self.history
    }
    pub fn fold_is_valid(&self) -> bool {
        self.is_decision() && self.engine.fold_is_valid()
    }
    pub fn call_is_valid(&self) -> bool {
        self.is_decision() && self.engine.call_is_valid()
    }
    pub fn raise_bounds(&self) -> Option<(Chips, Chips)> {
        self.is_decision().then(|| self.engine.raise_bounds()).flatten()
    }
    /// chips every live player would share if all bets were matched
    pub fn pot(&self) -> i64 {
        self.engine.max_spend() as i64 * (self.game.num_players() - self.engine.num_folded()) as i64
    }
}

/// Transitions.
impl State {
    /// undealt card ids at chance nodes, choice ids at decision nodes
    pub fn legal_actions(&self) -> Vec<i64> {
        match self.turn {
            Turn::Terminal => vec![],
            Turn::Chance => self.deck.cards().into_iter().map(|c| u8::from(c) as i64).collect(),
            Turn::Choice(_) => self.sizing.legal().choices().map(i64::from).collect(),
        }
    }
    /// uniform over the undealt pool
    pub fn chance_outcomes(&self) -> Vec<(i64, Probability)> {
        assert!(self.is_chance(), "chance outcomes at {}", self.turn);
        let p = 1. / self.deck.size() as Probability;
        self.legal_actions().into_iter().map(|a| (a, p)).collect()
    }
    /// decode an action id in the context of this node
    pub fn action(&self, id: i64) -> Result<Action> {
        let illegal = || Error::IllegalAction {
            action: id,
            legal: self.legal_actions(),
        };
        match self.turn {
            Turn::Terminal => Err(Error::Terminal),
            Turn::Chance => u8::try_from(id)
                .ok()
                .filter(|c| *c < 52)
                .map(Card::from)
                .filter(|c| self.deck.contains(c))
                .map(Action::Deal)
                .ok_or_else(illegal),
            Turn::Choice(_) => Choice::try_from(id)
                .ok()
                .filter(|c| self.sizing.legal().contains(c))
                .map(Action::Choose)
                .ok_or_else(illegal),
        }
    }
    pub fn apply(&mut self, id: i64) -> Result<()> {
        match self.action(id)? {
            Action::Deal(card) => self.deal(card),
            Action::Choose(choice) => self.choose(choice),
        }
        Ok(())
    }
    pub fn child(&self, id: i64) -> Result<Self> {
        let mut child = self.clone();
        child.apply(id)?;
        Ok(child)
    }

    /// hole cards fill seat by seat, then the board
    fn deal(&mut self, card: Card) {
        self.deck.remove(card);
        match self.receiver() {
            Some(seat) => self.holes[seat].insert(card),
            None => self.board.insert(card),
        }
        log::trace!("deal {}", card);
        self.sequence.push(Action::Deal(card).symbol());
        self.history.push(Action::Deal(card));
        self.recompute();
    }
    fn choose(&mut self, choice: Choice) {
        let amount = self.sizing.amount(choice);
        let m = match choice {
            Choice::Fold => Move::Fold,
            Choice::Call => Move::Call,
            _ => Move::Raise(amount),
        };
        log::trace!("{} plays {} for {}", self.turn, choice, amount);
        self.engine.apply(m);
        self.sequence.push(choice.symbol());
        self.history.push(Action::Choose(choice));
        self.recompute();
    }
    /// seat still owed hole cards, if any
    fn receiver(&self) -> Option<usize> {
        let hole = self.game.gamedef().hole_cards();
        self.holes.iter().position(|h| h.size() < hole)
    }
    fn recompute(&mut self) {
        let gamedef = self.game.gamedef();
        let owed = self.board.size() < gamedef.board_cards_required(self.engine.round());
        let alone = self.engine.num_folded() + 1 >= gamedef.players();
        self.turn = if self.engine.is_finished() {
            match (alone, owed) {
                (false, true) => Turn::Chance,
                _ => Turn::Terminal,
            }
        } else if self.receiver().is_some() || owed {
            Turn::Chance
        } else {
            Turn::Choice(self.engine.current_player())
        };
        self.resize();
        log::trace!("{} after {}", self.turn, self.sequence);
        if self.is_terminal() {
            log::debug!("terminal {}", self.engine);
        }
    }
    fn resize(&mut self) {
        self.sizing = match self.turn {
            Turn::Terminal => Sizing::none(),
            Turn::Chance => Sizing::deal(),
            Turn::Choice(_) => Sizing::resolve(&self.engine, self.game.policy(), || self.registered_raise()),
        };
    }
}

/// Off-abstraction raises.
impl State {
    /// registers a raise for the current information state in this
    /// state's overlay, then offers it if it is in bounds
    pub fn register_raise(&mut self, raise: Chips) -> Result<()> {
        match self.turn {
            Turn::Terminal => return Err(Error::Terminal),
            Turn::Chance => {
                return Err(Error::IllegalAction {
                    action: i64::from(Choice::OffAbs),
                    legal: self.legal_actions(),
                });
            }
            Turn::Choice(_) => {}
        }
        let fingerprint = self.fingerprint();
        if self.game.lookup_raise(&fingerprint).is_some() {
            return Err(Error::OffAbstractionConflict(fingerprint));
        }
        self.overlay.register(fingerprint, raise)?;
        self.resize();
        Ok(())
    }
    /// overlay first, then the game table
    pub fn registered_raise(&self) -> Option<Chips> {
        if self.overlay.is_empty() && !self.game.has_registered_raises() {
            return None;
        }
        let fingerprint = self.fingerprint();
        self.overlay
            .lookup(&fingerprint)
            .or_else(|| self.game.lookup_raise(&fingerprint))
    }
    /// raise-to amounts of the legal raise-class choices, in id order
    pub fn legal_raises(&self) -> Vec<Chips> {
        self.sizing.raises()
    }
    fn fingerprint(&self) -> String {
        self.information_state_string(self.turn.position())
    }
}

/// Rewards.
impl State {
    /// net chips won by each player, zero until the hand is over
    pub fn returns(&self) -> Vec<Utility> {
        let n = self.game.num_players();
        match self.turn {
            Turn::Terminal => (0..n)
                .map(|p| self.engine.value_of_state(p, &self.holes, self.board))
                .collect(),
            _ => vec![0.; n],
        }
    }
}

/// String and tensor encodings.
impl State {
    /// information bucket of a player's hole cards and the board.
    /// only complete two-card hands at an indexed street get one.
    pub fn bucket(&self, player: usize) -> Bucket {
        let hole = self.holes[player];
        let round = self.engine.round() + 1;
        match hole.size() == 2 && INDEXED.get(round - 1) == Some(&(hole.size() + self.board.size())) {
            true => self
                .game
                .bucket(round, &format!("{}{}", hole, self.board))
                .expect("indexed round with complete cards"),
            false => NO_BUCKET,
        }
    }
    /// the fingerprint that keys off-abstraction raises
    pub fn information_state_string(&self, player: usize) -> String {
        assert!(player < self.game.num_players(), "no player {}", player);
        format!(
            "[Round {}][Player: {}][Pot: {}][Money: {}][InfoAbs: {}][Sequences: {}]",
            self.engine.round(),
            self.current_player(),
            self.pot(),
            self.money(),
            self.bucket(player),
            (0..=self.engine.round())
                .map(|r| self.engine.betting_sequence(r))
                .join("|"),
        )
    }
    pub fn observation_string(&self, player: usize) -> String {
        assert!(player < self.game.num_players(), "no player {}", player);
        format!(
            "[Round {}][Player: {}][Pot: {}][Money: {}][Private: {}][Ante: {}]",
            self.engine.round(),
            self.current_player(),
            self.pot(),
            self.money(),
            self.holes[player],
            (0..self.game.num_players())
                .map(|p| self.engine.ante(p))
                .join(" "),
        )
    }
    /// `[seat one-hot][own hole cards][board cards][2 bits per action]`.
    /// calls are 10, every raise size shares 01, folds and deals are 00.
    pub fn information_state_tensor(&self, player: usize) -> Vec<f64> {
        assert!(player < self.game.num_players(), "no player {}", player);
        self.fits();
        let mut values = vec![0.; self.game.information_state_tensor_size()];
        let offset = self.cards(&mut values, player);
        for (i, symbol) in self.sequence.chars().enumerate() {
            let (hi, lo) = match symbol {
                'c' => (1., 0.),
                'f' | 'd' => (0., 0.),
                _ => (0., 1.),
            };
            values[offset + 2 * i] = hi;
            values[offset + 2 * i + 1] = lo;
        }
        values
    }
    /// `[seat one-hot][own hole cards][board cards][each player's ante]`
    pub fn observation_tensor(&self, player: usize) -> Vec<f64> {
        let n = self.game.num_players();
        assert!(player < n, "no player {}", player);
        self.fits();
        let mut values = vec![0.; self.game.observation_tensor_size()];
        let offset = self.cards(&mut values, player);
        for p in 0..n {
            values[offset + p] = self.engine.ante(p) as f64;
        }
        values
    }
    pub fn action_to_string(&self, player: i64, action: i64) -> Result<String> {
        if player == Turn::CHANCE {
            return Ok(format!("player=chance move=d card={}", action));
        }
        Ok(match Choice::try_from(action)? {
            Choice::Fold => format!("player={} move=f", player),
            Choice::Call => format!("player={} move=c", player),
            raise => format!("player={} move=r money={}", player, self.sizing.amount(raise)),
        })
    }

    fn fits(&self) {
        let length = self.game.max_game_length();
        assert!(
            self.sequence.len() <= length,
            "sequence of {} actions overflows max game length {}",
            self.sequence.len(),
            length
        );
    }
    fn money(&self) -> String {
        (0..self.game.num_players())
            .map(|p| self.engine.money(p))
            .join(" ")
    }
    /// seat one-hot, then hole and board cards over the full deck.
    /// returns the offset past the card segments.
    fn cards(&self, values: &mut [f64], player: usize) -> usize {
        let gamedef = self.game.gamedef();
        let full = Hand::from(Deck::new(gamedef.suits(), gamedef.ranks()));
        let n = gamedef.players();
        let size = full.size();
        values[player] = 1.;
        for (segment, hand) in [self.holes[player], self.board].into_iter().enumerate() {
            for card in hand {
                let i = full.index_of(&card).expect("dealt cards come from the deck");
                values[n + segment * size + i] = 1.;
            }
        }
        n + size * 2
    }
}

/// Information-set sampling.
impl State {
    /// every history the acting player cannot tell apart from this one,
    /// uniformly weighted: the same cards and choices, with the opponent
    /// holding any combination of cards unseen by the actor.
    /// heads-up only, empty otherwise.
    pub fn consistent_histories(&self) -> Vec<(State, Probability)> {
        let gamedef = self.game.gamedef();
        if gamedef.players() != 2 {
            return vec![];
        }
        let Turn::Choice(me) = self.turn else {
            return vec![];
        };
        let seen = u64::from(Hand::add(self.holes[me], self.board));
        let full = u64::from(Hand::from(Deck::new(gamedef.suits(), gamedef.ranks())));
        let unseen = Hand::from(full & !seen);
        let states = Vec::<Card>::from(unseen)
            .into_iter()
            .combinations(gamedef.hole_cards())
            .filter_map(|cards| self.replay(1 - me, &cards).ok())
            .collect::<Vec<_>>();
        let p = 1. / states.len() as Probability;
        states.into_iter().map(|s| (s, p)).collect()
    }

    /// this history again with `seat` dealt `cards` instead
    fn replay(&self, seat: usize, cards: &[Card]) -> Result<State> {
        let mut state = self.game.new_initial_state();
        state.overlay = self.overlay.clone();
        let mut cards = cards.iter().copied();
        for action in self.history.iter() {
            let action = match action {
                Action::Deal(_) if state.receiver() == Some(seat) => {
                    Action::Deal(cards.next().expect("one replacement per hole card"))
                }
                other => *other,
            };
            state.apply(i64::from(action))?;
        }
        Ok(state)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "BettingAbstraction: {}", self.game.policy())?;
        for (p, hole) in self.holes.iter().enumerate() {
            writeln!(f, "P{} Cards: {}", p, hole)?;
        }
        writeln!(f, "BoardCards {}", self.board)?;
        if self.is_chance() {
            writeln!(f, "PossibleCardsToDeal {}", self.deck)?;
        }
        if self.is_terminal() {
            for (p, reward) in self.returns().iter().enumerate() {
                writeln!(f, "P{} Reward: {}", p, reward)?;
            }
        }
        match self.turn {
            Turn::Chance => writeln!(f, "Node type?: Chance node")?,
            Turn::Terminal => writeln!(f, "Node type?: Terminal Node!")?,
            Turn::Choice(p) => writeln!(f, "Node type?: Player node for player {}", p)?,
        }
        writeln!(f, "PossibleActions ({}): {}", self.legal_actions().len(), self.legal())?;
        writeln!(f, "Round: {}", self.engine.round())?;
        writeln!(f, "Betting: {}", self.engine)?;
        writeln!(f, "Action Sequence: {}", self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Policy;
    use crate::rules::Gamedef;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const HOLDEM: &str = "GAMEDEF\nnolimit\nnumPlayers = 2\nnumRounds = 4\nstack = 20000 20000\nblind = 100 50\nfirstPlayer = 2 1 1 1\nnumSuits = 4\nnumRanks = 13\nnumHoleCards = 2\nnumBoardCards = 0 3 1 1\nEND GAMEDEF\n";
    const LIMIT: &str = "GAMEDEF\nlimit\nnumPlayers = 2\nnumRounds = 2\nblind = 1 1\nraiseSize = 2 4\nfirstPlayer = 1 1\nmaxRaises = 2 2\nnumSuits = 4\nnumRanks = 6\nnumHoleCards = 1\nnumBoardCards = 0 1\nEND GAMEDEF\n";
    const THREE: &str = "GAMEDEF\nnolimit\nnumPlayers = 3\nnumRounds = 2\nstack = 1000 1000 1000\nblind = 10 20 0\nfirstPlayer = 3 1\nnumSuits = 4\nnumRanks = 6\nnumHoleCards = 1\nnumBoardCards = 0 1\nEND GAMEDEF\n";

    fn game(text: &str, policy: Policy) -> Arc<Game> {
        Arc::new(Game::new(Gamedef::try_from(text).unwrap(), policy))
    }
    fn deal(state: &mut State, cards: &str) {
        for card in Hand::try_from(cards).unwrap() {
            assert!(state.is_chance());
            state.apply(u8::from(card) as i64).unwrap();
        }
    }
    /// holdem after hole cards, seat 1 to act
    fn preflop() -> State {
        let mut state = game(HOLDEM, Policy::FCPA).new_initial_state();
        for card in ["As", "Ah", "Kd", "Kc"] {
            state.apply(u8::from(Card::try_from(card).unwrap()) as i64).unwrap();
        }
        state
    }
    fn rollout(state: &mut State, rng: &mut SmallRng) {
        while !state.is_terminal() {
            let actions = state.legal_actions();
            state.apply(actions[rng.random_range(0..actions.len())]).unwrap();
        }
    }

    #[test]
    fn root_is_chance() {
        let state = game(HOLDEM, Policy::FCPA).new_initial_state();
        assert!(state.is_chance());
        assert!(state.current_player() == -1);
        assert!(state.legal_actions() == (0..52).collect::<Vec<_>>());
        assert!(state.chance_outcomes().iter().all(|(_, p)| *p == 1. / 52.));
        assert!(state.returns() == vec![0., 0.]);
    }

    #[test]
    fn hole_cards_before_board() {
        let mut state = game(HOLDEM, Policy::FCPA).new_initial_state();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut dealt = Vec::new();
        while state.is_chance() {
            let actions = state.legal_actions();
            let card = actions[rng.random_range(0..actions.len())];
            state.apply(card).unwrap();
            dealt.push(Card::from(card as u8));
            if dealt.len() <= 2 {
                assert!(state.hole(0).size() == dealt.len());
                assert!(state.hole(1).size() == 0);
            }
        }
        assert!(dealt.len() == 4);
        assert!(state.hole(1) == dealt[2..].iter().copied().collect::<Hand>());
        assert!(state.board().is_empty());
        assert!(state.sequence() == "dddd");
        assert!(state.deck().size() == 48);
    }

    #[test]
    fn limp_deals_flop() {
        let mut state = preflop();
        assert!(state.turn() == Turn::Choice(1));
        state.apply(i64::from(Choice::Call)).unwrap();
        assert!(state.turn() == Turn::Choice(0));
        assert!(state.round() == 0);
        state.apply(i64::from(Choice::Call)).unwrap();
        assert!(state.round() == 1);
        assert!(state.is_chance());
        deal(&mut state, "2c 7d 9h");
        assert!(state.board().size() == 3);
        assert!(state.turn() == Turn::Choice(0));
        assert!(state.sequence() == "ddddccddd");
    }

    #[test]
    fn limit_bet_takes_fixed_size() {
        let mut state = game(LIMIT, Policy::FCPA).new_initial_state();
        deal(&mut state, "2c 3c");
        assert!(state.legal_raises() == vec![3]);
        assert!(state.legal().choices().collect::<Vec<_>>() == vec![Choice::Call, Choice::Bet]);
        state.apply(i64::from(Choice::Bet)).unwrap();
        state.apply(i64::from(Choice::Bet)).unwrap();
        assert!(!state.legal().contains(&Choice::Bet));
        assert!(state.apply(i64::from(Choice::Bet)).is_err());
        assert!(state.engine().betting_sequence(0) == "rr");
    }

    #[test]
    fn fold_call_policy_never_bets() {
        let mut state = game(HOLDEM, Policy::FC).new_initial_state();
        deal(&mut state, "As Ah Kd Kc");
        assert!(state.sizing().amount(Choice::Bet) == 0);
        assert!(!state.legal().contains(&Choice::Bet));
        assert!(state.legal_actions() == vec![0, 1]);
        assert!(state.legal_raises().is_empty());
    }

    #[test]
    fn last_player_standing_takes_the_blinds() {
        let mut state = game(THREE, Policy::FCPA).new_initial_state();
        deal(&mut state, "2c 3c 4c");
        assert!(state.turn() == Turn::Choice(2));
        state.apply(i64::from(Choice::Fold)).unwrap();
        state.apply(i64::from(Choice::Fold)).unwrap();
        assert!(state.is_terminal());
        assert!(state.current_player() == -4);
        assert!(state.legal_actions().is_empty());
        assert!(state.returns() == vec![-10., 10., 0.]);
        assert!(state.apply(0) == Err(Error::Terminal));
    }

    #[test]
    fn shove_closes_raising() {
        let mut state = preflop();
        state.apply(i64::from(Choice::AllIn)).unwrap();
        assert!(state.turn() == Turn::Choice(0));
        assert!(!state.legal().contains(&Choice::AllIn));
        assert!(state.legal_raises().is_empty());
        state.apply(i64::from(Choice::Call)).unwrap();
        assert!(state.round() == 3);
        assert!(state.is_chance());
        deal(&mut state, "2c 7d 9h Js 3s");
        assert!(state.is_terminal());
        assert!(state.returns() == vec![20000., -20000.]);
    }

    #[test]
    fn illegal_actions_rejected() {
        let mut state = preflop();
        assert!(matches!(state.apply(5), Err(Error::IllegalAction { action: 5, .. })));
        assert!(matches!(state.apply(8), Err(Error::IllegalAction { .. })));
        let mut root = game(HOLDEM, Policy::FCPA).new_initial_state();
        root.apply(51).unwrap();
        assert!(matches!(root.apply(51), Err(Error::IllegalAction { .. })));
        assert!(matches!(root.apply(52), Err(Error::IllegalAction { .. })));
    }

    #[test]
    fn random_hands_are_zero_sum() {
        let mut rng = SmallRng::seed_from_u64(7);
        for text in [HOLDEM, LIMIT, THREE] {
            let game = game(text, Policy::FCPA);
            for _ in 0..200 {
                let mut state = game.new_initial_state();
                rollout(&mut state, &mut rng);
                assert!(state.returns().iter().sum::<Utility>().abs() < 1e-9);
            }
        }
    }

    #[test]
    fn one_node_type_and_stable_legality() {
        let mut rng = SmallRng::seed_from_u64(11);
        let game = game(HOLDEM, Policy::FCPA);
        for _ in 0..50 {
            let mut state = game.new_initial_state();
            while !state.is_terminal() {
                let kinds = [state.is_chance(), state.is_terminal(), state.is_decision()];
                assert!(kinds.iter().filter(|k| **k).count() == 1);
                let mut again = state.clone();
                again.resize();
                assert!(again.sizing() == state.sizing());
                let actions = state.legal_actions();
                state.apply(actions[rng.random_range(0..actions.len())]).unwrap();
            }
        }
    }

    #[test]
    fn tensor_segments_decode() {
        let mut state = preflop();
        state.apply(i64::from(Choice::HalfPot)).unwrap();
        state.apply(i64::from(Choice::Call)).unwrap();
        deal(&mut state, "2c 7d 9h");
        let game = Arc::clone(state.game());
        let values = state.information_state_tensor(1);
        assert!(values.len() == game.information_state_tensor_size());
        assert!(values[..2] == [0., 1.]);
        let full = Hand::from(Deck::new(4, 13)).collect::<Vec<_>>();
        let decode = |segment: &[f64]| {
            segment
                .iter()
                .zip(full.iter())
                .filter(|(v, _)| **v == 1.)
                .map(|(_, c)| *c)
                .collect::<Hand>()
        };
        assert!(decode(&values[2..54]) == state.hole(1));
        assert!(decode(&values[54..106]) == state.board());
        let codes = values[106..]
            .chunks(2)
            .take(state.sequence().len())
            .map(|c| (c[0], c[1]))
            .collect::<Vec<_>>();
        let expected = "ddddhcddd"
            .chars()
            .map(|c| match c {
                'c' => (1., 0.),
                'h' => (0., 1.),
                _ => (0., 0.),
            })
            .collect::<Vec<_>>();
        assert!(codes == expected);
        assert!(values[106 + 2 * 9..].iter().all(|v| *v == 0.));
    }

    #[test]
    fn raise_sizes_share_a_code() {
        let mut half = preflop();
        let mut pot = preflop();
        half.apply(i64::from(Choice::HalfPot)).unwrap();
        pot.apply(i64::from(Choice::OnePot)).unwrap();
        let n = 2 + 104;
        assert!(half.information_state_tensor(0)[n..] == pot.information_state_tensor(0)[n..]);
        assert!(half.information_state_string(0) != pot.information_state_string(0));
    }

    #[test]
    fn observation_layout() {
        let state = preflop();
        let values = state.observation_tensor(0);
        assert!(values.len() == 108);
        assert!(values[0] == 1.);
        assert!(values[106..] == [100., 50.]);
        assert!(values[2..54].iter().sum::<f64>() == 2.);
        assert!(state.observation_string(0) == "[Round 0][Player: 1][Pot: 200][Money: 19900 19950][Private: AhAs][Ante: 100 50]");
    }

    #[test]
    fn fingerprint_format() {
        let mut state = preflop();
        state.apply(i64::from(Choice::OnePot)).unwrap();
        let fingerprint = state.information_state_string(0);
        let bucket = state.bucket(0);
        assert!(bucket != NO_BUCKET);
        assert!(
            fingerprint
                == format!("[Round 0][Player: 0][Pot: 600][Money: 19900 19700][InfoAbs: {}][Sequences: r300]", bucket)
        );
        state.apply(i64::from(Choice::Call)).unwrap();
        assert!(state.bucket(0) == NO_BUCKET);
        deal(&mut state, "2c 7d 9h");
        assert!(state.bucket(0) != NO_BUCKET);
        assert!(state.information_state_string(0).ends_with("[Sequences: r300c|]"));
    }

    #[test]
    fn action_strings() {
        let state = preflop();
        assert!(state.action_to_string(-1, 12).unwrap() == "player=chance move=d card=12");
        assert!(state.action_to_string(1, 0).unwrap() == "player=1 move=f");
        assert!(state.action_to_string(1, 1).unwrap() == "player=1 move=c");
        assert!(state.action_to_string(1, 6).unwrap() == "player=1 move=r money=300");
        assert!(state.action_to_string(1, 3).unwrap() == "player=1 move=r money=20000");
        assert!(state.action_to_string(1, 9).is_err());
    }

    #[test]
    fn off_abstraction_registers_once() {
        let mut state = preflop();
        assert!(!state.legal().contains(&Choice::OffAbs));
        state.register_raise(750).unwrap();
        assert!(state.legal().contains(&Choice::OffAbs));
        assert!(state.registered_raise() == Some(750));
        let conflict = state.register_raise(900);
        assert!(matches!(conflict, Err(Error::OffAbstractionConflict(_))));
        assert!(state.registered_raise() == Some(750));
        state.apply(i64::from(Choice::OffAbs)).unwrap();
        assert!(state.engine().max_spend() == 750);
        assert!(state.sequence().ends_with('b'));
    }

    #[test]
    fn out_of_bounds_registration_stays_illegal() {
        let mut state = preflop();
        state.register_raise(20000).unwrap();
        assert!(!state.legal().contains(&Choice::OffAbs));
        assert!(state.sizing().amount(Choice::OffAbs) == 20000);
    }

    #[test]
    fn game_table_offers_registered_raises() {
        let state = preflop();
        let game = Arc::clone(state.game());
        let fingerprint = state.information_state_string(1);
        game.register_raise(fingerprint.clone(), 400).unwrap();
        let fresh = preflop_in(&game);
        assert!(fresh.legal().contains(&Choice::OffAbs));
        assert!(fresh.sizing().amount(Choice::OffAbs) == 400);
        let mut other = fresh.clone();
        assert!(matches!(other.register_raise(500), Err(Error::OffAbstractionConflict(_))));
        assert!(game.lookup_raise(&fingerprint) == Some(400));
    }

    fn preflop_in(game: &Arc<Game>) -> State {
        let mut state = game.new_initial_state();
        deal(&mut state, "As Ah Kd Kc");
        state
    }

    #[test]
    fn clones_are_independent() {
        let state = preflop();
        let mut clone = state.clone();
        clone.register_raise(750).unwrap();
        clone.apply(i64::from(Choice::OffAbs)).unwrap();
        assert!(state.registered_raise().is_none());
        assert!(!state.legal().contains(&Choice::OffAbs));
        assert!(state.sequence() == "dddd");
        assert!(state.engine().max_spend() == 100);
        let child = state.child(i64::from(Choice::Call)).unwrap();
        assert!(child.sequence() == "ddddc");
        assert!(state.sequence() == "dddd");
    }

    #[test]
    fn consistent_histories_swap_opponent_cards() {
        let mut state = preflop();
        state.apply(i64::from(Choice::Call)).unwrap();
        let histories = state.consistent_histories();
        assert!(histories.len() == 50 * 49 / 2);
        assert!((histories.iter().map(|(_, p)| p).sum::<Probability>() - 1.).abs() < 1e-9);
        for (other, _) in histories.iter() {
            assert!(other.hole(0) == state.hole(0));
            assert!(other.sequence() == state.sequence());
            assert!(other.information_state_string(0) == state.information_state_string(0));
        }
        let three = game(THREE, Policy::FCPA).new_initial_state();
        assert!(three.consistent_histories().is_empty());
    }

    #[test]
    fn deep_stacks_settle_zero_sum() {
        let game = game(&HOLDEM.replace("20000 20000", "2000000000 2000000000"), Policy::FCPA);
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..20 {
            let mut state = game.new_initial_state();
            while state.is_chance() {
                let actions = state.legal_actions();
                state.apply(actions[rng.random_range(0..actions.len())]).unwrap();
            }
            assert!(state.legal().contains(&Choice::AllIn));
            assert!(state.sizing().amount(Choice::AllIn) == 2_000_000_000);
            state.apply(i64::from(Choice::AllIn)).unwrap();
            state.apply(i64::from(Choice::Call)).unwrap();
            rollout(&mut state, &mut rng);
            let returns = state.returns();
            assert!(returns.iter().sum::<Utility>().abs() < 1e-9);
            assert!(returns.iter().all(|r| *r == 0. || r.abs() == 2e9));
        }
    }

    /// every decision raises by the minimum through a fresh
    /// off-abstraction registration
    fn min_raise_war() -> State {
        let mut state = preflop();
        while state.sequence().len() <= state.game().max_game_length() {
            let (min, _) = state.raise_bounds().unwrap();
            state.register_raise(min).unwrap();
            state.apply(i64::from(Choice::OffAbs)).unwrap();
        }
        state
    }

    #[test]
    #[should_panic(expected = "overflows max game length")]
    fn long_sequence_overflows_information_tensor() {
        min_raise_war().information_state_tensor(0);
    }

    #[test]
    #[should_panic(expected = "overflows max game length")]
    fn long_sequence_overflows_observation_tensor() {
        min_raise_war().observation_tensor(1);
    }

    #[test]
    fn dump_names_node_type() {
        let state = preflop();
        let dump = state.to_string();
        assert!(dump.contains("Player node for player 1"));
        assert!(dump.contains("P0 Cards: AhAs"));
        assert!(dump.contains("Action Sequence: dddd"));
    }
}
