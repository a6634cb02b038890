// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum number of concurrent players on the roster.
pub const MAX_ROSTER: u8 = 8;

/// Maximum length of a player display name, in characters.
pub const MAX_NAME_LEN: usize = 16;

/// Coarse tournament lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Roster being assembled.
    #[default]
    Setup,
    /// Events and bonuses being recorded.
    Playing,
    /// Reserved for a closing ceremony; no operation currently enters it.
    Finished,
}

impl FromStr for Phase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "setup" => Ok(Self::Setup),
            "playing" => Ok(Self::Playing),
            "finished" => Ok(Self::Finished),
            _ => Err(DomainError::InvalidPhase(s.to_string())),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Phase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Playing => "playing",
            Self::Finished => "finished",
        }
    }

    /// Checks if a transition from this phase to another is valid.
    ///
    /// Valid transitions are:
    /// - Setup → Playing
    /// - Playing → Finished
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Setup, Self::Playing) | (Self::Playing, Self::Finished)
        )
    }
}

/// Opaque identifier for a player.
///
/// Ids are handed out by a monotonic counter owned by the tournament state.
/// They are distinct for the lifetime of a storage slot and never reused,
/// even after the holder has been removed from the roster.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Creates a `PlayerId` from a raw counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player's display name.
///
/// Surrounding whitespace is trimmed on construction; the trimmed name must
/// be non-empty and at most [`MAX_NAME_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName {
    value: String,
}

impl PlayerName {
    /// Creates a new `PlayerName` from raw input.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw name as entered; surrounding whitespace is trimmed
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty or longer than
    /// [`MAX_NAME_LEN`] characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyPlayerName);
        }
        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::PlayerNameTooLong { max: MAX_NAME_LEN });
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.value
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A playable character, chosen from the fixed character catalog.
///
/// Construction does not check catalog membership; that is contextual and
/// validated when a player is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Character {
    value: String,
}

impl Character {
    /// Creates a new `Character`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the character name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The nation a player represents, chosen from the fixed nation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nation {
    value: String,
}

impl Nation {
    /// Creates a new `Nation`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the nation name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Nation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifier of an event in the fixed event catalog.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EventId(String);

impl EventId {
    /// Creates a new `EventId`.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a rule in the fixed bonus-rule catalog.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BonusId(String);

impl BonusId {
    /// Creates a new `BonusId`.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BonusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The integer finish rank a player achieves in one event (1 = first).
///
/// Valid ranks are 1 through [`MAX_ROSTER`]: a full roster has eight
/// finishing positions. Ranks 5 and beyond are recordable but score zero
/// points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Placement {
    rank: u8,
}

impl Placement {
    /// Creates a new `Placement`.
    ///
    /// # Arguments
    ///
    /// * `rank` - The finish rank (must be between 1 and [`MAX_ROSTER`] inclusive)
    ///
    /// # Errors
    ///
    /// Returns an error if the rank is zero or greater than [`MAX_ROSTER`].
    pub const fn new(rank: u8) -> Result<Self, DomainError> {
        if rank >= 1 && rank <= MAX_ROSTER {
            Ok(Self { rank })
        } else {
            Err(DomainError::InvalidPlacement { rank })
        }
    }

    /// Returns the rank value.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// First place.
    #[must_use]
    pub const fn is_gold(&self) -> bool {
        self.rank == 1
    }

    /// Second place.
    #[must_use]
    pub const fn is_silver(&self) -> bool {
        self.rank == 2
    }

    /// Third place.
    #[must_use]
    pub const fn is_bronze(&self) -> bool {
        self.rank == 3
    }
}

impl TryFrom<u8> for Placement {
    type Error = DomainError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::new(rank)
    }
}

impl From<Placement> for u8 {
    fn from(placement: Placement) -> Self {
        placement.rank
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rank)
    }
}

/// A tournament participant.
///
/// Players are immutable after creation; the only roster mutations are
/// appending a new player and removing an existing one. Roster position,
/// not any field of the player, is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Opaque unique identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: PlayerName,
    /// The character this player uses for the whole night.
    pub character: Character,
    /// The nation this player represents.
    pub nation: Nation,
}

impl Player {
    /// Creates a new `Player`.
    ///
    /// # Arguments
    ///
    /// * `id` - The opaque unique identifier
    /// * `name` - The validated display name
    /// * `character` - The chosen character
    /// * `nation` - The chosen nation
    #[must_use]
    pub const fn new(id: PlayerId, name: PlayerName, character: Character, nation: Nation) -> Self {
        Self {
            id,
            name,
            character,
            nation,
        }
    }
}
