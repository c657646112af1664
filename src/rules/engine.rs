use super::gamedef::Gamedef;
use super::moves::Move;
use super::showdown::Showdown;
use crate::Chips;
use crate::Utility;
use crate::cards::Hand;
use std::sync::Arc;

/// Betting state of one hand.
///
/// Tracks how much each player has put in, who folded, and the moves of
/// every round. Knows nothing about cards until a showdown is asked for.
///
/// - `spent` total chips committed this hand, blinds included
/// - `max_spent` the amount every live player must match
/// - `min_raise` smallest legal no-limit raise-to
/// - `moves` each round's moves, tagged with the seat that made them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    gamedef: Arc<Gamedef>,
    round: usize,
    spent: Vec<Chips>,
    folded: Vec<bool>,
    max_spent: Chips,
    min_raise: Chips,
    moves: Vec<Vec<(usize, Move)>>,
    finished: bool,
}

impl From<Arc<Gamedef>> for Engine {
    fn from(gamedef: Arc<Gamedef>) -> Self {
        let spent = (0..gamedef.players()).map(|p| gamedef.blind(p)).collect::<Vec<_>>();
        let max_spent = spent.iter().copied().max().unwrap_or_default();
        let min_raise = match (gamedef.is_limit(), max_spent) {
            (true, _) => 0,
            (false, 0) => 1,
            (false, blind) => chips(blind as i64 * 2),
        };
        Self {
            round: 0,
            folded: vec![false; gamedef.players()],
            moves: vec![Vec::new(); gamedef.rounds()],
            finished: false,
            spent,
            max_spent,
            min_raise,
            gamedef,
        }
    }
}

/// raise-to arithmetic runs in i64 and saturates back to chips
fn chips(amount: i64) -> Chips {
    amount.clamp(Chips::MIN as i64, Chips::MAX as i64) as Chips
}

/// Public state accessors.
impl Engine {
    pub fn gamedef(&self) -> &Gamedef {
        &self.gamedef
    }
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn is_finished(&self) -> bool {
        self.finished
    }
    /// largest contribution any player has made
    pub fn max_spend(&self) -> Chips {
        self.max_spent
    }
    /// chips a player has put in the pot
    pub fn ante(&self, player: usize) -> Chips {
        self.spent[player]
    }
    /// chips a player still has behind
    pub fn money(&self, player: usize) -> Chips {
        self.gamedef.stack(player) - self.spent[player]
    }
    pub fn has_folded(&self, player: usize) -> bool {
        self.folded[player]
    }
    pub fn num_folded(&self) -> usize {
        self.folded.iter().filter(|f| **f).count()
    }
    /// players who can still put chips in
    pub fn num_acting(&self) -> usize {
        (0..self.gamedef.players()).filter(|p| self.is_acting(*p)).count()
    }
    pub fn num_all_in(&self) -> usize {
        (0..self.gamedef.players())
            .filter(|p| self.spent[*p] >= self.gamedef.stack(*p))
            .count()
    }
    /// raises made so far this round
    pub fn num_raises(&self) -> usize {
        self.moves[self.round].iter().filter(|(_, m)| m.is_raise()).count()
    }
    /// players who have matched the live bet since it was made
    pub fn num_called(&self) -> usize {
        let mut called = 0;
        for (p, m) in self.moves[self.round].iter().rev() {
            let live = self.spent[*p] < self.gamedef.stack(*p);
            match m {
                Move::Raise(_) => return called + live as usize,
                Move::Call => called += live as usize,
                Move::Fold => {}
            }
        }
        called
    }
    /// seat to act next
    pub fn current_player(&self) -> usize {
        match self.moves[self.round].last() {
            Some((last, _)) => self.next_player(*last),
            None => {
                let n = self.gamedef.players();
                self.next_player(self.gamedef.first_player(self.round) + n - 1)
            }
        }
    }
    /// a round's moves as text: `f`, `c`, `r<to>` in no-limit, `r` in limit
    pub fn betting_sequence(&self, round: usize) -> String {
        self.moves
            .get(round)
            .map(|moves| {
                moves
                    .iter()
                    .map(|(_, m)| match (m, self.gamedef.is_limit()) {
                        (Move::Raise(_), true) => "r".to_string(),
                        (m, _) => m.to_string(),
                    })
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
    /// every move of the hand, round by round
    pub fn moves(&self) -> impl Iterator<Item = &(usize, Move)> {
        self.moves.iter().flatten()
    }

    fn is_acting(&self, player: usize) -> bool {
        !self.folded[player] && self.spent[player] < self.gamedef.stack(player)
    }
    fn next_player(&self, from: usize) -> usize {
        let n = self.gamedef.players();
        let mut p = from;
        for _ in 0..n {
            p = (p + 1) % n;
            if self.is_acting(p) {
                return p;
            }
        }
        panic!("no player can act after {}", from)
    }
}

/// Move validation.
impl Engine {
    /// raise-to bounds for the current player, or None when
    /// no raise is possible. limit games report the fixed raise-to
    /// as both bounds.
    pub fn raise_bounds(&self) -> Option<(Chips, Chips)> {
        if self.finished {
            return None;
        }
        if self.num_raises() >= self.gamedef.max_raises(self.round) as usize {
            return None;
        }
        if self.num_acting() <= 1 {
            return None;
        }
        let p = self.current_player();
        let stack = self.gamedef.stack(p);
        if self.max_spent >= stack {
            return None;
        }
        if self.gamedef.is_limit() {
            let to = chips(self.max_spent as i64 + self.gamedef.raise_size(self.round) as i64).min(stack);
            return Some((to, to));
        }
        Some((self.min_raise.min(stack), stack))
    }
    pub fn raise_is_valid(&self) -> bool {
        self.raise_bounds().is_some()
    }
    /// folding is pointless when checking is free, and impossible all-in
    pub fn fold_is_valid(&self) -> bool {
        if self.finished {
            return false;
        }
        let p = self.current_player();
        self.spent[p] != self.max_spent && self.spent[p] != self.gamedef.stack(p)
    }
    pub fn call_is_valid(&self) -> bool {
        !self.finished
    }
    pub fn is_valid(&self, m: &Move) -> bool {
        match m {
            Move::Fold => self.fold_is_valid(),
            Move::Call => self.call_is_valid(),
            Move::Raise(to) if self.gamedef.is_limit() => self.raise_bounds().is_some_and(|(min, _)| *to == min || *to == 0),
            Move::Raise(to) => self.raise_bounds().is_some_and(|(min, max)| (min..=max).contains(to)),
        }
    }
}

/// Move application.
impl Engine {
    /// panics on an invalid move
    pub fn apply(&mut self, m: Move) {
        assert!(self.is_valid(&m), "invalid move {} in {}", m, self);
        let p = self.current_player();
        let stack = self.gamedef.stack(p);
        let m = match m {
            Move::Fold => {
                self.folded[p] = true;
                m
            }
            Move::Call => {
                self.spent[p] = self.max_spent.min(stack);
                m
            }
            Move::Raise(_) if self.gamedef.is_limit() => {
                self.max_spent = chips(self.max_spent as i64 + self.gamedef.raise_size(self.round) as i64).min(stack);
                self.spent[p] = self.max_spent;
                Move::Raise(self.max_spent)
            }
            Move::Raise(to) => {
                self.min_raise = self.min_raise.max(chips(to as i64 * 2 - self.max_spent as i64));
                self.max_spent = to;
                self.spent[p] = to;
                m
            }
        };
        log::trace!("seat {} plays {} in round {}", p, m, self.round);
        self.moves[self.round].push((p, m));
        self.advance();
    }

    fn advance(&mut self) {
        if self.num_folded() + 1 >= self.gamedef.players() {
            self.finished = true;
        } else if self.num_called() >= self.num_acting() {
            if self.num_acting() > 1 {
                if self.round + 1 < self.gamedef.rounds() {
                    self.round += 1;
                    self.min_raise = chips(self.gamedef.max_blind().max(1) as i64 + self.max_spent as i64);
                } else {
                    self.finished = true;
                }
            } else {
                self.finished = true;
                self.round = self.gamedef.rounds() - 1;
            }
        }
    }
}

/// Payoffs.
impl Engine {
    /// net chips a player wins at the end of the hand.
    /// folded players lose what they put in, a lone survivor
    /// takes everything else, otherwise pots go to the best hands.
    pub fn value_of_state(&self, player: usize, holes: &[Hand], board: Hand) -> Utility {
        if self.folded[player] {
            return -(self.spent[player] as Utility);
        }
        if self.num_folded() + 1 == self.gamedef.players() {
            return (0..self.gamedef.players())
                .filter(|p| *p != player)
                .map(|p| self.spent[p] as Utility)
                .sum();
        }
        Showdown::from((self.spent.as_slice(), self.folded.as_slice(), holes, board)).value(player)
    }
}

/// rounds separated by '/', then each seat's contribution
impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let betting = (0..=self.round)
            .map(|r| self.betting_sequence(r))
            .collect::<Vec<_>>()
            .join("/");
        let spent = self
            .spent
            .iter()
            .zip(self.folded.iter())
            .map(|(s, f)| if *f { format!("{}f", s) } else { s.to_string() })
            .collect::<Vec<_>>()
            .join("|");
        write!(f, "STATE:{}:{}:{}", self.round, betting, spent)
    }
}
