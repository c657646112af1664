use crate::Error;

/// An abstract decision a player can take.
///
/// Ids are stable and double as action ids at decision nodes.
/// Every raise-class choice resolves to a raise-to amount
/// once the betting state is known.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Fold = 0,
    Call = 1,
    /// raise to the pot, or the minimum raise if larger
    Bet = 2,
    AllIn = 3,
    HalfPot = 4,
    /// a raise registered for this exact information state
    OffAbs = 5,
    OnePot = 6,
    TwoPot = 7,
}

impl Choice {
    pub const fn all() -> [Self; 8] {
        [
            Self::Fold,
            Self::Call,
            Self::Bet,
            Self::AllIn,
            Self::HalfPot,
            Self::OffAbs,
            Self::OnePot,
            Self::TwoPot,
        ]
    }
    pub fn is_raise(&self) -> bool {
        !matches!(self, Self::Fold | Self::Call)
    }
    /// character recorded in the action sequence
    pub fn symbol(&self) -> char {
        match self {
            Self::Fold => 'f',
            Self::Call => 'c',
            Self::Bet => 'p',
            Self::AllIn => 'a',
            Self::HalfPot => 'h',
            Self::OffAbs => 'b',
            Self::OnePot => 'w',
            Self::TwoPot => 't',
        }
    }
    /// bit in the legal action mask
    pub fn flag(&self) -> u16 {
        1 << (*self as u16 + 1)
    }
}

impl From<Choice> for i64 {
    fn from(choice: Choice) -> Self {
        choice as i64
    }
}

impl TryFrom<i64> for Choice {
    type Error = Error;
    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|c| i64::from(*c) == id)
            .ok_or_else(|| Error::IllegalAction {
                action: id,
                legal: Self::all().into_iter().map(i64::from).collect(),
            })
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "ACTION_FOLD"),
            Self::Call => write!(f, "ACTION_CHECK_CALL"),
            Self::Bet => write!(f, "ACTION_BET"),
            Self::AllIn => write!(f, "ACTION_ALL_IN"),
            Self::HalfPot => write!(f, "ACTION_BET_HALF_POT"),
            Self::OffAbs => write!(f, "ACTION_OFF_ABS"),
            Self::OnePot => write!(f, "ACTION_BET_POT"),
            Self::TwoPot => write!(f, "ACTION_BET_DOUBLE_POT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        assert!(Choice::all().iter().enumerate().all(|(i, c)| i64::from(*c) == i as i64));
        assert!(Choice::try_from(5).unwrap() == Choice::OffAbs);
        assert!(Choice::try_from(8).is_err());
        assert!(Choice::try_from(-1).is_err());
    }

    #[test]
    fn flags_are_disjoint() {
        let union = Choice::all().iter().fold(0u16, |acc, c| {
            assert!(acc & c.flag() == 0);
            acc | c.flag()
        });
        assert!(union == 0b1_1111_1110);
    }
}
