use super::choice::Choice;
use crate::cards::Card;

/// A transition out of a non-terminal state: nature deals a card,
/// or the acting player takes an abstract choice.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Deal(Card),
    Choose(Choice),
}

impl Action {
    pub fn symbol(&self) -> char {
        match self {
            Self::Deal(_) => 'd',
            Self::Choose(choice) => choice.symbol(),
        }
    }
}

/// cards are ids at chance nodes, choices at decision nodes
impl From<Action> for i64 {
    fn from(action: Action) -> Self {
        match action {
            Action::Deal(card) => u8::from(card) as i64,
            Action::Choose(choice) => i64::from(choice),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Deal(card) => write!(f, "DEAL {}", card),
            Self::Choose(choice) => write!(f, "{}", choice),
        }
    }
}
