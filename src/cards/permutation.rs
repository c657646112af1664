use super::hand::Hand;
use super::suit::Suit;
use crate::Arbitrary;

/// an array of 4 unique Suits represents
/// any of the 4! = 24 elements in the Suit permutation group.
/// by assuming a "canonical" order of suits (C < D < H < S),
/// we use [Suit; 4] to map C -> P[0], D -> P[1], H -> P[2], S -> P[3].
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Permutation([Suit; 4]);

impl Permutation {
    /// the image of a hand under a permutation
    /// is the union of its shifted sub-Hands
    pub fn image(&self, hand: &Hand) -> Hand {
        Suit::all()
            .iter()
            .map(|suit| self.shift(suit, hand))
            .fold(Hand::empty(), Hand::add)
    }

    /// the hand here gets filtered by the "old" suit
    /// and then we bitshift so that it is in its "new" suit
    /// e.g. Full Hand -> Hearts Hand -> Spades Hand
    fn shift(&self, suit: &Suit, hand: &Hand) -> Hand {
        let old = *suit;
        let new = self.map(suit);
        let shift = new as i8 - old as i8;
        let cards = u64::from(hand.of(suit));
        if shift >= 0 {
            Hand::from(cards << shift as u64)
        } else {
            Hand::from(cards >> shift.unsigned_abs() as u64)
        }
    }
    /// get the image of a Suit under a Permutation
    pub fn map(&self, suit: &Suit) -> Suit {
        self.0[*suit as usize]
    }

    pub const fn identity() -> Self {
        Self(Suit::all())
    }
    /// permutations that only shuffle the first n suits,
    /// i.e. the symmetries of an n-suited deck
    pub fn within(n: usize) -> impl Iterator<Item = Self> {
        Self::exhaust()
            .into_iter()
            .filter(move |p| Suit::all().iter().skip(n).all(|s| p.map(s) == *s))
    }
    pub const fn exhaust() -> [Self; 24] {
        [
            Self([Suit::C, Suit::D, Suit::H, Suit::S]),
            Self([Suit::C, Suit::D, Suit::S, Suit::H]),
            Self([Suit::C, Suit::H, Suit::D, Suit::S]),
            Self([Suit::C, Suit::H, Suit::S, Suit::D]),
            Self([Suit::C, Suit::S, Suit::D, Suit::H]),
            Self([Suit::C, Suit::S, Suit::H, Suit::D]),
            Self([Suit::D, Suit::C, Suit::H, Suit::S]),
            Self([Suit::D, Suit::C, Suit::S, Suit::H]),
            Self([Suit::D, Suit::H, Suit::C, Suit::S]),
            Self([Suit::D, Suit::H, Suit::S, Suit::C]),
            Self([Suit::D, Suit::S, Suit::C, Suit::H]),
            Self([Suit::D, Suit::S, Suit::H, Suit::C]),
            Self([Suit::H, Suit::C, Suit::D, Suit::S]),
            Self([Suit::H, Suit::C, Suit::S, Suit::D]),
            Self([Suit::H, Suit::D, Suit::C, Suit::S]),
            Self([Suit::H, Suit::D, Suit::S, Suit::C]),
            Self([Suit::H, Suit::S, Suit::C, Suit::D]),
            Self([Suit::H, Suit::S, Suit::D, Suit::C]),
            Self([Suit::S, Suit::C, Suit::D, Suit::H]),
            Self([Suit::S, Suit::C, Suit::H, Suit::D]),
            Self([Suit::S, Suit::D, Suit::C, Suit::H]),
            Self([Suit::S, Suit::D, Suit::H, Suit::C]),
            Self([Suit::S, Suit::H, Suit::C, Suit::D]),
            Self([Suit::S, Suit::H, Suit::D, Suit::C]),
        ]
    }
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        use rand::Rng;
        Self::exhaust()[rand::rng().random_range(0..24)]
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for s in Suit::all().iter() {
            writeln!(f, "{} -> {}", s, self.map(s))?;
        }
        Ok(())
    }
}
