use crate::Chips;
use crate::Result;
use crate::gameplay::Choice;
use crate::gameplay::State;

/// What an outside actor wants to do at its decision node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// one of the abstract choices offered by the state
    Choose(Choice),
    /// a concrete raise-to amount, inside or outside the abstraction
    Raise(Chips),
}

/// A player the learning agent does not control.
pub trait Opponent: Send {
    fn decide(&mut self, state: &State) -> Result<Decision>;
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Choose(choice) => write!(f, "{}", choice),
            Self::Raise(to) => write!(f, "RAISE {}", to),
        }
    }
}
