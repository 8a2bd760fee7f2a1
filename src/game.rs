// Authoritative match state. Every mutation validates first and commits
// only when the whole operation can succeed, so a rejected call leaves
// the game exactly as it was.

use std::collections::VecDeque;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{self, Card, SpecialKind};
use crate::player::Player;
use crate::rules;

pub const DEFAULT_PLAYER_COUNT: usize = 3;
pub const DEFAULT_HAND_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// The current player may play a card.
    AwaitingMove,
    /// A card landed on the table; the turn must advance before the next move.
    TurnAdvancePending,
    /// A player emptied their hand. Terminal.
    GameOver,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GameError {
    #[error("Deck already initialized")]
    AlreadyInitialized,
    #[error("Not enough cards to deal: need {needed}, have {available}")]
    InsufficientCards { needed: usize, available: usize },
    #[error("No normal card available to start the table")]
    EmptyDeck,
    #[error("Invalid player count: {0}")]
    InvalidPlayerCount(usize),
    #[error("Invalid player id: {0}")]
    InvalidPlayerId(usize),
    #[error("Not player {0}'s turn")]
    NotYourTurn(usize),
    #[error("Player does not hold card: {0}")]
    CardNotInHand(Card),
    #[error("Card {card} cannot be played on {top}")]
    IllegalMove { card: Card, top: Card },
    #[error("Operation not allowed in state {0:?}")]
    InvalidStateTransition(TurnState),
    #[error("Unknown card identity: {0}")]
    UnknownCard(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    // Reference copy of every card in the match, fixed at initialization.
    deck: Vec<Card>,
    draw_pile: VecDeque<Card>,
    table_pile: Vec<Card>,
    players: Vec<Player>,
    current_player: usize,
    turn_state: TurnState,
    winner: Option<usize>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            deck: Vec::new(),
            draw_pile: VecDeque::new(),
            table_pile: Vec::new(),
            players: Vec::new(),
            current_player: 0,
            turn_state: TurnState::AwaitingMove,
            winner: None,
        }
    }

    /// Builds a game directly from its zones, bypassing shuffle and deal.
    /// Hands are seated in order as players 1..=n and it is player 1's turn.
    pub fn with_zones(draw_pile: Vec<Card>, table_pile: Vec<Card>, hands: Vec<Vec<Card>>) -> Self {
        let players: Vec<Player> = hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| Player { id: i + 1, hand })
            .collect();

        let mut deck = draw_pile.clone();
        deck.extend(table_pile.iter().copied());
        deck.extend(players.iter().flat_map(|player| player.hand.iter().copied()));

        Self {
            deck,
            draw_pile: draw_pile.into(),
            table_pile,
            players,
            current_player: 0,
            turn_state: TurnState::AwaitingMove,
            winner: None,
        }
    }

    /// Creates the full deck and shuffles it into the draw pile.
    pub fn init_and_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if !self.deck.is_empty() {
            return Err(GameError::AlreadyInitialized);
        }

        self.deck = cards::full_deck();
        let mut pile = self.deck.clone();
        cards::shuffle(&mut pile, rng);
        self.draw_pile = pile.into();

        debug!(cards = self.draw_pile.len(), "Deck initialized and shuffled");
        Ok(())
    }

    /// Deals `cards_per_player` to each of `num_players` seats, round-robin
    /// off the front of the draw pile, optionally seeding the table with a
    /// starter card afterwards. Fails without touching the game unless the
    /// whole deal can complete.
    pub fn deal(
        &mut self,
        num_players: usize,
        cards_per_player: usize,
        seed_table: bool,
    ) -> Result<(), GameError> {
        if !self.players.is_empty() {
            return Err(GameError::InvalidStateTransition(self.turn_state));
        }
        if num_players == 0 {
            return Err(GameError::InvalidPlayerCount(num_players));
        }

        let needed = num_players * cards_per_player;
        let available = self.draw_pile.len();
        if needed > available {
            return Err(GameError::InsufficientCards { needed, available });
        }

        // Stage on locals so a failed table seed commits nothing.
        let mut pile = self.draw_pile.clone();
        let mut players: Vec<Player> = (1..=num_players).map(Player::new).collect();
        for (i, card) in pile.drain(..needed).enumerate() {
            players[i % num_players].hand.push(card);
        }

        let starter = if seed_table {
            match cards::find_starter(&mut pile) {
                Some(card) => Some(card),
                None => return Err(GameError::EmptyDeck),
            }
        } else {
            None
        };

        self.draw_pile = pile;
        self.players = players;
        if let Some(card) = starter {
            self.table_pile.push(card);
        }
        self.current_player = 0;
        self.turn_state = TurnState::AwaitingMove;

        debug_assert!(self.card_conservation_holds());
        info!(
            num_players = num_players,
            cards_per_player = cards_per_player,
            seeded = starter.is_some(),
            "Hands dealt"
        );
        Ok(())
    }

    /// Turns up the first normal card from the draw pile onto the empty
    /// table, cycling specials and the wild card to the back of the pile.
    pub fn seed_table(&mut self) -> Result<(), GameError> {
        if !self.table_pile.is_empty() {
            return Err(GameError::InvalidStateTransition(self.turn_state));
        }

        let card = cards::find_starter(&mut self.draw_pile).ok_or(GameError::EmptyDeck)?;
        self.table_pile.push(card);

        debug!(card = %card, "Table seeded");
        Ok(())
    }

    pub fn current_top(&self) -> Option<Card> {
        self.table_pile.last().copied()
    }

    /// Plays the card named by `identity` from the current player's hand
    /// onto the table. `player_index` is the 0-based seat index and must
    /// match the current turn.
    pub fn play(&mut self, player_index: usize, identity: &str) -> Result<(), GameError> {
        match self.turn_state {
            TurnState::AwaitingMove => {}
            state => return Err(GameError::InvalidStateTransition(state)),
        }
        if self.players.is_empty() {
            return Err(GameError::InvalidStateTransition(self.turn_state));
        }
        if player_index != self.current_player {
            return Err(GameError::NotYourTurn(player_index));
        }

        let card = Card::from_identity(identity)
            .map_err(|_| GameError::UnknownCard(identity.to_string()))?;

        let hand = &self.players[self.current_player].hand;
        let position = hand
            .iter()
            .position(|held| *held == card)
            .ok_or(GameError::CardNotInHand(card))?;

        if let Some(top) = self.current_top() {
            if !rules::is_compatible(&card, &top) {
                return Err(GameError::IllegalMove { card, top });
            }
        }

        let played = self.players[self.current_player].hand.remove(position);
        self.table_pile.push(played);
        self.turn_state = TurnState::TurnAdvancePending;

        if let Card::Special { kind, .. } = played {
            self.on_special_played(kind);
        }

        debug_assert!(self.card_conservation_holds());
        debug!(player = player_index, card = %played, "Card played");
        Ok(())
    }

    // Suited specials carry no table effect yet; the match is the seam
    // where per-kind behavior lands once the rules define it.
    fn on_special_played(&mut self, kind: SpecialKind) {
        match kind {
            SpecialKind::Cryostat
            | SpecialKind::Superfluid
            | SpecialKind::Spin
            | SpecialKind::Entanglement
            | SpecialKind::Teleportation => {}
        }
    }

    /// Resolves the pending move: the game ends if the mover's hand is
    /// empty, otherwise the turn passes to the next seat.
    pub fn advance_turn(&mut self) -> Result<(), GameError> {
        if self.turn_state != TurnState::TurnAdvancePending {
            return Err(GameError::InvalidStateTransition(self.turn_state));
        }

        let mover = &self.players[self.current_player];
        if mover.hand.is_empty() {
            self.winner = Some(mover.id);
            self.turn_state = TurnState::GameOver;
            info!(winner = mover.id, "Game over");
        } else {
            self.current_player = (self.current_player + 1) % self.players.len();
            self.turn_state = TurnState::AwaitingMove;
        }
        Ok(())
    }

    /// Winning player's 1-based id, set only once the game is over.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Clears every zone back to an uninitialized game.
    pub fn reset(&mut self) {
        *self = Game::new();
        info!("Game reset");
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    /// 0-based seat index of the player to act.
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    /// Legality mask for the current player's hand, in hand order. Every
    /// card is playable while the table is empty.
    pub fn current_legal_moves(&self) -> Vec<bool> {
        let Some(player) = self.players.get(self.current_player) else {
            return Vec::new();
        };
        match self.current_top() {
            Some(top) => rules::legal_moves(&top, &player.hand),
            None => vec![true; player.hand.len()],
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn table_pile(&self) -> &[Card] {
        &self.table_pile
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    // Cards only ever move between zones, so the zone counts must always
    // add back up to the initialized deck.
    fn card_conservation_holds(&self) -> bool {
        let in_zones = self.draw_pile.len()
            + self.table_pile.len()
            + self
                .players
                .iter()
                .map(|player| player.hand.len())
                .sum::<usize>();
        in_zones == self.deck.len()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current_top() {
            Some(top) => write!(f, "{}", top),
            None => write!(f, "Table is empty"),
        }
    }
}
