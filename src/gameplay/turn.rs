/// Who moves next.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Terminal,
    Chance,
    Choice(usize),
}

impl Turn {
    pub const CHANCE: i64 = -1;
    pub const TERMINAL: i64 = -4;

    pub fn position(&self) -> usize {
        match self {
            Self::Choice(c) => *c,
            _ => panic!("don't ask"),
        }
    }
}

/// seats as themselves, nature and the end of the hand as sentinels
impl From<Turn> for i64 {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::Choice(c) => c as i64,
            Turn::Chance => Turn::CHANCE,
            Turn::Terminal => Turn::TERMINAL,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(c) => write!(f, "P{}", c),
            Self::Terminal => write!(f, "XX"),
            Self::Chance => write!(f, "??"),
        }
    }
}

impl TryFrom<&str> for Turn {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "XX" => Ok(Self::Terminal),
            "??" => Ok(Self::Chance),
            turn => {
                if let Some(seat) = turn.strip_prefix('P') {
                    seat.parse::<usize>()
                        .map(Self::Choice)
                        .map_err(|_| "invalid player turn")
                } else {
                    Err("invalid turn input")
                }
            }
        }
    }
}
