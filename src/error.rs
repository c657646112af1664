use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid gamedef at line {line}: {reason}")]
    Gamedef { line: usize, reason: String },

    #[error("illegal action {action}, legal actions are {legal:?}")]
    IllegalAction { action: i64, legal: Vec<i64> },

    #[error("invalid cards: {0}")]
    Cards(String),

    #[error("round {0} is outside the indexed rounds 1..=4")]
    RoundOutOfRange(usize),

    #[error("round {round} indexes {expected} cards, got {got}")]
    CardCount {
        round: usize,
        expected: usize,
        got: usize,
    },

    #[error("off-abstraction raise already exists for {0}")]
    OffAbstractionConflict(String),

    #[error("raise to {amount} outside legal bounds [{min}, {max}]")]
    RaiseOutOfRange { amount: i32, min: i32, max: i32 },

    #[error("no transitions from a terminal state")]
    Terminal,

    #[error("opponent failed to act: {0}")]
    Opponent(String),
}

pub type Result<T> = std::result::Result<T, Error>;
