use super::choice::Choice;

/// Bitmask of the actions a node offers.
///
/// Bit 0 marks a chance node, bits 1 through 8 the eight choices
/// in id order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Legal(u16);

impl Legal {
    pub const DEAL: u16 = 1;

    pub fn empty() -> Self {
        Self(0)
    }
    pub fn deal() -> Self {
        Self(Self::DEAL)
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn is_deal(&self) -> bool {
        self.0 & Self::DEAL != 0
    }
    pub fn insert(&mut self, choice: Choice) {
        self.0 |= choice.flag();
    }
    pub fn contains(&self, choice: &Choice) -> bool {
        self.0 & choice.flag() != 0
    }
    /// allowed choices in id order
    pub fn choices(&self) -> impl Iterator<Item = Choice> + '_ {
        Choice::all().into_iter().filter(|c| self.contains(c))
    }
}

impl From<Legal> for u16 {
    fn from(legal: Legal) -> Self {
        legal.0
    }
}

impl FromIterator<Choice> for Legal {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        let mut legal = Self::empty();
        iter.into_iter().for_each(|c| legal.insert(c));
        legal
    }
}

impl std::fmt::Display for Legal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        if self.is_deal() {
            write!(f, " ACTION_DEAL ")?;
        }
        for choice in self.choices() {
            write!(f, " {} ", choice)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut legal = Legal::empty();
        legal.insert(Choice::Call);
        legal.insert(Choice::Call);
        legal.insert(Choice::AllIn);
        assert!(u16::from(legal) == 0b1_0100);
        assert!(legal.choices().collect::<Vec<_>>() == vec![Choice::Call, Choice::AllIn]);
        assert!(!legal.is_deal());
    }

    #[test]
    fn deal_carries_no_choices() {
        let legal = Legal::deal();
        assert!(legal.is_deal());
        assert!(legal.choices().count() == 0);
        assert!(legal.to_string() == "[ ACTION_DEAL ]");
    }
}
