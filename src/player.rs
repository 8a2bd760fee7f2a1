use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::GameError;

/// A seat at the table. Ids are 1-based and stable for the whole game;
/// hands keep their deal order because legality masks index into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            hand: Vec::new(),
        }
    }
}

/// Looks up a player by 1-based id.
pub fn get_player(players: &[Player], player_id: usize) -> Result<&Player, GameError> {
    if player_id < 1 || player_id > players.len() {
        return Err(GameError::InvalidPlayerId(player_id));
    }
    Ok(&players[player_id - 1])
}

/// Snapshot of a player's hand, detached from the game state.
pub fn get_player_hand(players: &[Player], player_id: usize) -> Result<Vec<Card>, GameError> {
    get_player(players, player_id).map(|player| player.hand.clone())
}
