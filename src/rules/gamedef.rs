use super::betting::Betting;
use crate::Chips;
use crate::Error;
use crate::MAX_BOARD_CARDS;
use crate::MAX_HOLE_CARDS;
use crate::MAX_PLAYERS;
use crate::MAX_RAISES;
use crate::MAX_ROUNDS;

/// The rules of one poker variant, as read from gamedef text.
///
/// ```text
/// GAMEDEF
/// nolimit
/// numPlayers = 2
/// numRounds = 4
/// stack = 20000 20000
/// blind = 100 50
/// firstPlayer = 2 1 1 1
/// numSuits = 4
/// numRanks = 13
/// numHoleCards = 2
/// numBoardCards = 0 3 1 1
/// END GAMEDEF
/// ```
///
/// keys are case-insensitive, blank lines and lines starting with `#`
/// are skipped. per-player lists are indexed by seat, per-round lists by
/// round. `firstPlayer` is 1-based in text and 0-based here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gamedef {
    betting: Betting,
    players: usize,
    rounds: usize,
    stacks: Vec<Chips>,
    blinds: Vec<Chips>,
    raises: Vec<Chips>,
    first: Vec<usize>,
    limits: Vec<u8>,
    suits: usize,
    ranks: usize,
    hole: usize,
    board: Vec<usize>,
}

impl Gamedef {
    pub fn betting(&self) -> Betting {
        self.betting
    }
    pub fn is_limit(&self) -> bool {
        self.betting.is_limit()
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn stack(&self, player: usize) -> Chips {
        self.stacks[player]
    }
    pub fn blind(&self, player: usize) -> Chips {
        self.blinds[player]
    }
    pub fn max_blind(&self) -> Chips {
        self.blinds.iter().copied().max().unwrap_or_default()
    }
    pub fn max_stack(&self) -> Chips {
        self.stacks.iter().copied().max().unwrap_or_default()
    }
    /// fixed raise increment of a limit round
    pub fn raise_size(&self, round: usize) -> Chips {
        self.raises[round]
    }
    /// seat that opens the betting of a round
    pub fn first_player(&self, round: usize) -> usize {
        self.first[round]
    }
    pub fn max_raises(&self, round: usize) -> u8 {
        self.limits[round]
    }
    pub fn suits(&self) -> usize {
        self.suits
    }
    pub fn ranks(&self) -> usize {
        self.ranks
    }
    pub fn deck_size(&self) -> usize {
        self.suits * self.ranks
    }
    pub fn hole_cards(&self) -> usize {
        self.hole
    }
    /// board cards revealed at the start of a round
    pub fn board_cards(&self, round: usize) -> usize {
        self.board[round]
    }
    /// board cards on the table once a round is dealt
    pub fn board_cards_required(&self, round: usize) -> usize {
        self.board.iter().take(round + 1).sum()
    }
    pub fn total_board_cards(&self) -> usize {
        self.board.iter().sum()
    }
}

impl Gamedef {
    fn validate(self) -> Result<Self, Error> {
        let fail = |reason: String| Err(Error::Config(reason));
        if !(2..=MAX_PLAYERS).contains(&self.players) {
            return fail(format!("numPlayers {} outside 2..={}", self.players, MAX_PLAYERS));
        }
        if !(1..=MAX_ROUNDS).contains(&self.rounds) {
            return fail(format!("numRounds {} outside 1..={}", self.rounds, MAX_ROUNDS));
        }
        if !(1..=4).contains(&self.suits) {
            return fail(format!("numSuits {} outside 1..=4", self.suits));
        }
        if !(1..=13).contains(&self.ranks) {
            return fail(format!("numRanks {} outside 1..=13", self.ranks));
        }
        if !(1..=MAX_HOLE_CARDS).contains(&self.hole) {
            return fail(format!("numHoleCards {} outside 1..={}", self.hole, MAX_HOLE_CARDS));
        }
        if self.total_board_cards() > MAX_BOARD_CARDS {
            return fail(format!("{} board cards exceed {}", self.total_board_cards(), MAX_BOARD_CARDS));
        }
        if self.hole * self.players + self.total_board_cards() > self.deck_size() {
            return fail(format!("a deck of {} cards cannot deal this game", self.deck_size()));
        }
        if let Some(p) = self.first.iter().find(|p| **p >= self.players) {
            return fail(format!("firstPlayer {} outside 1..={}", p + 1, self.players));
        }
        if self.is_limit() && self.raises.iter().any(|r| *r <= 0) {
            return fail(format!("limit betting needs a raiseSize for each of {} rounds", self.rounds));
        }
        if let Some(p) = (0..self.players).find(|p| self.stacks[*p] <= 0) {
            return fail(format!("stack of player {} must be positive", p));
        }
        if let Some(p) = (0..self.players).find(|p| self.blinds[*p] > self.stacks[*p]) {
            return fail(format!("blind of player {} exceeds their stack", p));
        }
        Ok(self)
    }
}

/// gamedef text isomorphism
impl TryFrom<&str> for Gamedef {
    type Error = Error;
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut betting = None;
        let mut players = 0usize;
        let mut rounds = 0usize;
        let mut stacks = vec![Chips::MAX; MAX_PLAYERS];
        let mut blinds = vec![0; MAX_PLAYERS];
        let mut raises = vec![0; MAX_ROUNDS];
        let mut first = vec![0usize; MAX_ROUNDS];
        let mut limits = vec![MAX_RAISES; MAX_ROUNDS];
        let mut suits = 0usize;
        let mut ranks = 0usize;
        let mut hole = 0usize;
        let mut board = vec![0usize; MAX_ROUNDS];
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            let n = i + 1;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let lower = line.to_ascii_lowercase();
            if lower.starts_with("end gamedef") {
                break;
            }
            if lower == "gamedef" {
                continue;
            }
            if lower == "limit" || lower == "nolimit" {
                betting = Some(Betting::try_from(lower.as_str()).map_err(|reason| Error::Gamedef { line: n, reason })?);
                continue;
            }
            let (key, values) = lower.split_once('=').ok_or_else(|| Error::Gamedef {
                line: n,
                reason: format!("expected key = values, got {}", line),
            })?;
            let values = values
                .split_whitespace()
                .map(|v| v.parse::<i64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| Error::Gamedef { line: n, reason: e.to_string() })?;
            let one = || match values.as_slice() {
                [v] if *v >= 0 => Ok(*v as usize),
                _ => Err(Error::Gamedef { line: n, reason: format!("{} takes one non-negative value", key.trim()) }),
            };
            let many = |into: usize| match values.len() {
                0 => Err(Error::Gamedef { line: n, reason: format!("{} has no values", key.trim()) }),
                k if k > into => Err(Error::Gamedef { line: n, reason: format!("{} has more than {} values", key.trim(), into) }),
                _ => Ok(values.clone()),
            };
            let chips = |v: i64| {
                Chips::try_from(v).map_err(|_| Error::Gamedef { line: n, reason: format!("{} does not fit in chips", v) })
            };
            match key.trim() {
                "numplayers" => players = one()?,
                "numrounds" => rounds = one()?,
                "numsuits" => suits = one()?,
                "numranks" => ranks = one()?,
                "numholecards" => hole = one()?,
                "stack" => {
                    for (s, v) in stacks.iter_mut().zip(many(MAX_PLAYERS)?) {
                        *s = chips(v)?;
                    }
                }
                "blind" => {
                    for (b, v) in blinds.iter_mut().zip(many(MAX_PLAYERS)?) {
                        *b = chips(v)?;
                    }
                }
                "raisesize" => {
                    for (r, v) in raises.iter_mut().zip(many(MAX_ROUNDS)?) {
                        *r = chips(v)?;
                    }
                }
                "firstplayer" => {
                    for (f, v) in first.iter_mut().zip(many(MAX_ROUNDS)?) {
                        if v < 1 {
                            return Err(Error::Gamedef { line: n, reason: "firstPlayer is 1-based".to_string() });
                        }
                        *f = (v - 1) as usize;
                    }
                }
                "maxraises" => {
                    for (m, v) in limits.iter_mut().zip(many(MAX_ROUNDS)?) {
                        *m = u8::try_from(v).map_err(|_| Error::Gamedef { line: n, reason: format!("maxRaises {} outside 0..=255", v) })?;
                    }
                }
                "numboardcards" => {
                    for (b, v) in board.iter_mut().zip(many(MAX_ROUNDS)?) {
                        *b = usize::try_from(v).map_err(|_| Error::Gamedef { line: n, reason: format!("negative board count {}", v) })?;
                    }
                }
                other => {
                    return Err(Error::Gamedef { line: n, reason: format!("unknown key {}", other) });
                }
            }
        }
        let betting = betting.ok_or_else(|| Error::Config("gamedef names neither limit nor nolimit".to_string()))?;
        if !(2..=MAX_PLAYERS).contains(&players) || !(1..=MAX_ROUNDS).contains(&rounds) {
            return Err(Error::Config(format!("{} players over {} rounds is not a game", players, rounds)));
        }
        stacks.truncate(players);
        blinds.truncate(players);
        raises.truncate(rounds);
        first.truncate(rounds);
        limits.truncate(rounds);
        board.truncate(rounds);
        Self {
            betting,
            players,
            rounds,
            stacks,
            blinds,
            raises,
            first,
            limits,
            suits,
            ranks,
            hole,
            board,
        }
        .validate()
    }
}

impl std::fmt::Display for Gamedef {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let join = |xs: Vec<String>| xs.join(" ");
        writeln!(f, "GAMEDEF")?;
        writeln!(f, "{}", self.betting)?;
        writeln!(f, "numPlayers = {}", self.players)?;
        writeln!(f, "numRounds = {}", self.rounds)?;
        if self.stacks.iter().any(|s| *s != Chips::MAX) {
            writeln!(f, "stack = {}", join(self.stacks.iter().map(|s| s.to_string()).collect()))?;
        }
        writeln!(f, "blind = {}", join(self.blinds.iter().map(|b| b.to_string()).collect()))?;
        if self.is_limit() {
            writeln!(f, "raiseSize = {}", join(self.raises.iter().map(|r| r.to_string()).collect()))?;
        }
        writeln!(f, "firstPlayer = {}", join(self.first.iter().map(|p| (p + 1).to_string()).collect()))?;
        if self.limits.iter().any(|m| *m != MAX_RAISES) {
            writeln!(f, "maxRaises = {}", join(self.limits.iter().map(|m| m.to_string()).collect()))?;
        }
        writeln!(f, "numSuits = {}", self.suits)?;
        writeln!(f, "numRanks = {}", self.ranks)?;
        writeln!(f, "numHoleCards = {}", self.hole)?;
        writeln!(f, "numBoardCards = {}", join(self.board.iter().map(|b| b.to_string()).collect()))?;
        writeln!(f, "END GAMEDEF")
    }
}
