use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use strum::IntoEnumIterator;

use super::basic::{Card, Rank, SpecialKind, Suit};

/// 20 normal cards, 20 special cards, one Superconduction.
pub const DECK_SIZE: usize = 41;

/// Builds the full deck in canonical order: normals suit-major, then
/// specials suit-major, then the wild card last.
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::iter() {
        for rank in Rank::iter() {
            cards.push(Card::normal(suit, rank));
        }
    }
    for suit in Suit::iter() {
        for kind in SpecialKind::iter() {
            cards.push(Card::special(suit, kind));
        }
    }
    cards.push(Card::Superconduction);
    cards
}

pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Pops cards off the front of the pile until a normal card turns up,
/// cycling anything else to the back. Scans one full cycle at most; a
/// pile holding no normal card returns None with its order intact.
pub fn find_starter(pile: &mut VecDeque<Card>) -> Option<Card> {
    for _ in 0..pile.len() {
        let card = pile.pop_front()?;
        if card.is_normal() {
            return Some(card);
        }
        pile.push_back(card);
    }
    None
}
