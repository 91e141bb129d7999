//! Card representation and row evaluation.
//!
//! - [`Card`] — a `(Rank, Suit)` pair encoded in one byte
//! - [`Hand`] — an unordered set of cards as a 64-bit bitmask
//! - [`Deck`] — the cards left to deal once the player's hand is removed
//! - [`Evaluator`] — bitwise search for a row's [`Ranking`]
//! - [`Score`] — the ranking flattened to one comparable integer
pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod score;
pub use score::*;

pub mod suit;
pub use suit::*;
