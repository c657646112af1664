/// How raise sizes are constrained.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Betting {
    /// every raise is a fixed increment per round
    Limit,
    /// raises anywhere between the minimum raise-to and the stack
    #[default]
    NoLimit,
}

impl Betting {
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::Limit)
    }
}

impl TryFrom<&str> for Betting {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "limit" => Ok(Self::Limit),
            "nolimit" => Ok(Self::NoLimit),
            other => Err(format!("betting should be limit or nolimit, not {}", other)),
        }
    }
}

impl std::fmt::Display for Betting {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::NoLimit => write!(f, "nolimit"),
        }
    }
}
