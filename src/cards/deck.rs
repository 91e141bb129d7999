use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// The set of cards still available to be dealt.
///
/// Wraps a [`Hand`] so that removing the player's cards from the 52-card
/// universe is a single mask. Random draws take the RNG explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// The deck with every held card taken out.
    pub fn without(held: Hand) -> Self {
        Self(held.complement())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rng.random_range(0..n);
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck &= deck - 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// Draws `n` distinct cards in the order they came out.
    pub fn deal<R: Rng>(&mut self, rng: &mut R, n: usize) -> Vec<Card> {
        (0..n).map(|_| self.draw(rng)).collect()
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
/// remaining cards in ascending card order
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        Vec::from(deck.0)
    }
}
