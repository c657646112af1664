use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;

/// Deck extends much of Hand functionality, with ability to remove cards from itself.
/// a deck is built from its lowest `ranks` ranks and first `suits` suits,
/// so a 6-rank 4-suit deck holds the 24 cards 2c..7s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Deck {
    pub fn new(suits: usize, ranks: usize) -> Self {
        assert!(suits <= 4 && ranks <= 13, "deck of {} suits {} ranks", suits, ranks);
        Self(
            Rank::first(ranks)
                .flat_map(|r| Suit::first(suits).map(move |s| Card::from((r, s))))
                .collect(),
        )
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        assert!(self.0.contains(&card), "{} is not in the deck", card);
        self.0.remove(card);
    }
    /// remaining cards, ascending
    pub fn cards(&self) -> Vec<Card> {
        Vec::<Card>::from(self.0)
    }

    /// remove a random card from the deck
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        assert!(self.0.size() > 0, "draw from an empty deck");
        let i = rng.random_range(0..self.0.size());
        let mut cards = self.0;
        let card = cards.nth(i).expect("index within deck size");
        self.remove(card);
        card
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
