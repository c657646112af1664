use crate::Error;
use crate::Result;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Permutation;

/// cards revealed per indexed round: hole, flop, turn, river
const SEGMENTS: [usize; 4] = [2, 3, 1, 1];
/// cards in a full deck, the universe every segment is ranked in
const UNIVERSE: u64 = 52;

/// Maps concrete cards to the id of their suit-isomorphism class and back.
///
/// `cards` is the hole cards followed by the board, written as in
/// `"AsKdQh2c3d"`. rounds count from 1 (preflop) to 4 (river).
pub trait Indexer: Send + Sync {
    fn index(&self, round: usize, cards: &str) -> Result<u64>;
    fn canonical(&self, round: usize, id: u64) -> Result<String>;
}

/// many card combinations are strategically equivalent,
/// so we canonize them to reduce the index space.
///
/// each round's cards are split into segments (hole, flop, turn, river),
/// each segment is ranked co-lexicographically, and the ranks are packed
/// in mixed radix. the canonical id is the least packing over every
/// suit permutation of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Isomorphic {
    suits: usize,
}

impl Default for Isomorphic {
    fn default() -> Self {
        Self { suits: 4 }
    }
}

impl From<usize> for Isomorphic {
    fn from(suits: usize) -> Self {
        assert!((1..=4).contains(&suits), "{} suits", suits);
        Self { suits }
    }
}

impl Indexer for Isomorphic {
    fn index(&self, round: usize, cards: &str) -> Result<u64> {
        let segments = Self::segments(round)?;
        let cards = Self::parse(cards)?;
        let expected = segments.iter().sum::<usize>();
        if cards.len() != expected {
            return Err(Error::CardCount {
                round,
                expected,
                got: cards.len(),
            });
        }
        let mut offset = 0;
        let hands = segments
            .iter()
            .map(|k| {
                let hand = cards[offset..offset + k].iter().copied().collect::<Hand>();
                offset += k;
                hand
            })
            .collect::<Vec<_>>();
        Permutation::within(self.suits)
            .map(|p| hands.iter().map(|h| p.image(h)).collect::<Vec<_>>())
            .map(|hands| Self::pack(&hands))
            .min()
            .ok_or_else(|| Error::Cards("no suit permutations".to_string()))
    }

    fn canonical(&self, round: usize, id: u64) -> Result<String> {
        let segments = Self::segments(round)?;
        let mut rest = id;
        let mut seen = Hand::empty();
        let mut text = String::new();
        for k in segments.iter().copied() {
            let radix = choose(UNIVERSE, k as u64);
            let hand = unrank(rest % radix, k);
            rest /= radix;
            if u64::from(seen) & u64::from(hand) != 0 {
                return Err(Error::Cards(format!("{} is not a hand index", id)));
            }
            seen = Hand::add(seen, hand);
            text.push_str(&hand.to_string());
        }
        match rest {
            0 => Ok(text),
            _ => Err(Error::Cards(format!("{} is not a hand index", id))),
        }
    }
}

impl Isomorphic {
    fn segments(round: usize) -> Result<&'static [usize]> {
        match round {
            1..=4 => Ok(&SEGMENTS[..round]),
            _ => Err(Error::RoundOutOfRange(round)),
        }
    }
    fn parse(cards: &str) -> Result<Vec<Card>> {
        let chars = cards.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
        if chars.len() % 2 != 0 {
            return Err(Error::Cards(cards.to_string()));
        }
        let cards = chars
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|s| Card::try_from(s.as_str()).map_err(Error::Cards))
            .collect::<Result<Vec<_>>>()?;
        let unique = cards.iter().copied().collect::<Hand>();
        match unique.size() == cards.len() {
            true => Ok(cards),
            false => Err(Error::Cards("repeated card".to_string())),
        }
    }
    fn pack(hands: &[Hand]) -> u64 {
        hands
            .iter()
            .rev()
            .fold(0, |id, hand| id * choose(UNIVERSE, hand.size() as u64) + rank(*hand))
    }
}

/// binomial coefficient, zero when k > n
fn choose(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    (0..k.min(n - k)).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// co-lexicographic rank of a set of cards
fn rank(hand: Hand) -> u64 {
    hand.enumerate()
        .map(|(i, card)| choose(u8::from(card) as u64, i as u64 + 1))
        .sum()
}

/// the k-card set with a given co-lexicographic rank
fn unrank(mut r: u64, k: usize) -> Hand {
    let mut hand = Hand::empty();
    for i in (1..=k as u64).rev() {
        let c = (0..UNIVERSE)
            .rev()
            .find(|c| choose(*c, i) <= r)
            .expect("some card ranks within r");
        r -= choose(c, i);
        hand.insert(Card::from(c as u8));
    }
    hand
}
