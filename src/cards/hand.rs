use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// Hand represents an unordered set of Cards. stored as a u64,
/// but only needs the LSB bitstring of 52 bits. each bit is a
/// unique card in the (unordered) set. this is the card set used
/// for hole cards, board cards, and the undealt pool alike.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
    /// disjoint union
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0, "overlapping hands {} {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// the cards of this hand in a given suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// the cards of this hand of a given rank
    pub fn ranked(&self, rank: &Rank) -> Hand {
        Self(self.0 & u64::from(*rank))
    }
    pub fn lowest(&self) -> Option<Card> {
        match self.0 {
            0 => None,
            n => Some(Card::from(n.trailing_zeros() as u8)),
        }
    }
    pub fn highest(&self) -> Option<Card> {
        match self.0 {
            0 => None,
            n => Some(Card::from((64 - 1 - n.leading_zeros()) as u8)),
        }
    }
    /// position of a card among the cards of this hand, ascending
    pub fn index_of(&self, card: &Card) -> Option<usize> {
        match self.contains(card) {
            false => None,
            true => Some((self.0 & (u64::from(*card) - 1)).count_ones() as usize),
        }
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        let card = self.lowest()?;
        self.remove(card);
        Some(card)
    }
}

/// u64 isomorphism
/// we OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000000000100110000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = 0u64;
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism
/// accepts "Ac Kd" as well as "AcKd"
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
        if chars.len() % 2 != 0 {
            return Err(format!("invalid hand str: {}", s));
        }
        let mut hand = Hand::empty();
        for pair in chars.chunks(2) {
            let card = Card::try_from(pair.iter().collect::<String>().as_str())?;
            if hand.contains(&card) {
                return Err(format!("duplicate card {} in {}", card, s));
            }
            hand.insert(card);
        }
        Ok(hand)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random::<u64>())
    }
}
