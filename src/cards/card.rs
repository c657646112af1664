use super::rank::Rank;
use super::suit::Suit;
use std::fmt::Display;
use std::fmt::Formatter;

/// a single playing card. its u8 id doubles as
/// the chance action that deals it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        assert!(n.count_ones() == 1, "card mask must have one bit");
        Self::from(n.trailing_zeros() as u8)
    }
}

/// str isomorphism
/// rank char then suit char, e.g. "Ts"
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Self::from((Rank::try_from(r)?, Suit::try_from(s)?))),
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        (0..52u8).for_each(|n| assert!(n == u8::from(Card::from(n))));
    }

    #[test]
    fn bijective_u64() {
        let card = Card::try_from("Ts").unwrap();
        assert!(card == Card::from(u64::from(card)));
        assert!(u8::from(card) == 35);
    }

    #[test]
    fn bijective_str() {
        let card = Card::try_from("Qh").unwrap();
        assert!(card.to_string() == "Qh");
        assert!(Card::try_from("Qhx").is_err());
        assert!(Card::try_from("Q").is_err());
    }
}
