use std::fmt;
use strum_macros::EnumIter;
use thiserror::Error;

/// Identity string of the lone wild card.
pub const SUPERCONDUCTION: &str = "super";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Circle = 0,
    Square = 1,
    Triangle = 2,
    Cross = 3,
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Circle => "C",
                // Square encodes as "R" in card identities, not "S".
                Suit::Square => "R",
                Suit::Triangle => "T",
                Suit::Cross => "X",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "C" => Ok(Suit::Circle),
            "R" => Ok(Suit::Square),
            "T" => Ok(Suit::Triangle),
            "X" => Ok(Suit::Cross),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl TryFrom<&str> for Rank {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "1" => Ok(Rank::One),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum SpecialKind {
    Cryostat = 0,
    Superfluid = 1,
    Spin = 2,
    Entanglement = 3,
    Teleportation = 4,
}

impl PartialOrd for SpecialKind {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SpecialKind {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for SpecialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SpecialKind::Cryostat => "cr",
                SpecialKind::Superfluid => "su",
                SpecialKind::Spin => "sp",
                SpecialKind::Entanglement => "en",
                SpecialKind::Teleportation => "te",
            }
        )
    }
}

impl TryFrom<&str> for SpecialKind {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "cr" => Ok(SpecialKind::Cryostat),
            "su" => Ok(SpecialKind::Superfluid),
            "sp" => Ok(SpecialKind::Spin),
            "en" => Ok(SpecialKind::Entanglement),
            "te" => Ok(SpecialKind::Teleportation),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Unknown card identity: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Card {
    Normal { suit: Suit, rank: Rank },
    Special { suit: Suit, kind: SpecialKind },
    Superconduction,
}

impl Card {
    pub fn normal(suit: Suit, rank: Rank) -> Self {
        Card::Normal { suit, rank }
    }

    pub fn special(suit: Suit, kind: SpecialKind) -> Self {
        Card::Special { suit, kind }
    }

    pub fn from_identity(s: &str) -> Result<Self, CardError> {
        if s == SUPERCONDUCTION {
            return Ok(Card::Superconduction);
        }

        let (lead, tail) = s
            .split_once('_')
            .ok_or_else(|| CardError::Unknown(s.to_string()))?;
        let suit = Suit::try_from(lead).map_err(|_| CardError::Unknown(s.to_string()))?;

        if let Ok(rank) = Rank::try_from(tail) {
            return Ok(Card::Normal { suit, rank });
        }
        if let Ok(kind) = SpecialKind::try_from(tail) {
            return Ok(Card::Special { suit, kind });
        }
        Err(CardError::Unknown(s.to_string()))
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Normal { suit, .. } | Card::Special { suit, .. } => Some(*suit),
            Card::Superconduction => None,
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Normal { rank, .. } => Some(*rank),
            _ => None,
        }
    }

    /// Numeric value of a normal card; specials and the wild card have none.
    pub fn rank_value(&self) -> Option<u8> {
        self.rank().map(Rank::value)
    }

    pub fn kind(&self) -> Option<SpecialKind> {
        match self {
            Card::Special { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Card::Normal { .. })
    }

    pub fn is_special(&self) -> bool {
        matches!(self, Card::Special { .. })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Normal { suit, rank } => write!(f, "{}_{}", suit, rank),
            Card::Special { suit, kind } => write!(f, "{}_{}", suit, kind),
            Card::Superconduction => write!(f, "{}", SUPERCONDUCTION),
        }
    }
}

impl std::str::FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_identity(s)
    }
}

// Cards travel over the wire as their identity string, not as a struct.
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Card::from_identity(&s).map_err(serde::de::Error::custom)
    }
}
