pub mod basic;
pub mod deck;

pub use basic::{Card, CardError, Rank, SpecialKind, Suit, SUPERCONDUCTION};
pub use deck::{find_starter, full_deck, shuffle, DECK_SIZE};
