use crate::Chips;

/// A betting intent as the rules engine sees it.
/// raise amounts are raise-to totals; limit raises ignore them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Move {
    Fold,
    Call,
    Raise(Chips),
}

impl Move {
    pub fn is_raise(&self) -> bool {
        matches!(self, Self::Raise(_))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "f"),
            Self::Call => write!(f, "c"),
            Self::Raise(chips) => write!(f, "r{}", chips),
        }
    }
}
