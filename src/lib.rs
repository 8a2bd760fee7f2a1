// Library crate for the supercon card game engine
// This file exposes the public API for frontends and integration tests

pub mod cards;
pub mod game;
pub mod player;
pub mod rules;

// Re-export commonly used types for easier access
pub use cards::{full_deck, Card, CardError, Rank, SpecialKind, Suit, DECK_SIZE, SUPERCONDUCTION};
pub use game::{Game, GameError, TurnState, DEFAULT_HAND_SIZE, DEFAULT_PLAYER_COUNT};
pub use player::{get_player, get_player_hand, Player};
pub use rules::{is_compatible, legal_moves, legal_moves_by_identity};
