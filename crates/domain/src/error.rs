// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::PlayerId;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// Player name exceeds the maximum length.
    PlayerNameTooLong {
        /// Maximum allowed length in characters.
        max: usize,
    },
    /// The roster already holds the maximum number of players.
    RosterFull {
        /// The roster capacity.
        capacity: u8,
    },
    /// The character is not part of the character catalog.
    UnknownCharacter(String),
    /// The nation is not part of the nation catalog.
    UnknownNation(String),
    /// The event id is not part of the event catalog.
    UnknownEvent(String),
    /// The bonus rule id is not part of the bonus-rule catalog.
    UnknownBonusRule(String),
    /// No player with this id exists on the roster.
    PlayerNotFound(PlayerId),
    /// The roster is too small for the requested transition.
    NotEnoughPlayers {
        /// Minimum roster size required.
        required: usize,
        /// Actual roster size.
        actual: usize,
    },
    /// Placement rank is outside the valid range.
    InvalidPlacement {
        /// The rejected rank value.
        rank: u8,
    },
    /// The string is not a recognized phase name.
    InvalidPhase(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPlayerName => write!(f, "Player name cannot be empty"),
            Self::PlayerNameTooLong { max } => {
                write!(f, "Player name cannot be longer than {max} characters")
            }
            Self::RosterFull { capacity } => {
                write!(f, "Roster already holds {capacity} players")
            }
            Self::UnknownCharacter(character) => {
                write!(f, "Character '{character}' is not in the catalog")
            }
            Self::UnknownNation(nation) => {
                write!(f, "Nation '{nation}' is not in the catalog")
            }
            Self::UnknownEvent(event) => {
                write!(f, "Event '{event}' is not in the catalog")
            }
            Self::UnknownBonusRule(bonus) => {
                write!(f, "Bonus rule '{bonus}' is not in the catalog")
            }
            Self::PlayerNotFound(id) => write!(f, "No player with id {id} on the roster"),
            Self::NotEnoughPlayers { required, actual } => {
                write!(f, "Need at least {required} players, have {actual}")
            }
            Self::InvalidPlacement { rank } => {
                write!(f, "Placement rank {rank} is outside the valid range")
            }
            Self::InvalidPhase(phase) => write!(f, "Unknown phase: {phase}"),
        }
    }
}

impl std::error::Error for DomainError {}
