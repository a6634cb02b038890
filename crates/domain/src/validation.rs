// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog;
use crate::error::DomainError;
use crate::types::{BonusId, Character, EventId, MAX_ROSTER, Nation, Player, PlayerId};

/// Validates that the roster can accept one more player.
///
/// # Arguments
///
/// * `players` - The current roster
///
/// # Errors
///
/// Returns an error if the roster already holds [`MAX_ROSTER`] players.
pub fn validate_roster_capacity(players: &[Player]) -> Result<(), DomainError> {
    if players.len() >= usize::from(MAX_ROSTER) {
        return Err(DomainError::RosterFull {
            capacity: MAX_ROSTER,
        });
    }
    Ok(())
}

/// Validates that a character is part of the character catalog.
///
/// # Errors
///
/// Returns an error if the character is not a catalog entry.
pub fn validate_character_known(character: &Character) -> Result<(), DomainError> {
    if catalog::is_known_character(character) {
        Ok(())
    } else {
        Err(DomainError::UnknownCharacter(
            character.value().to_string(),
        ))
    }
}

/// Validates that a nation is part of the nation catalog.
///
/// # Errors
///
/// Returns an error if the nation is not a catalog entry.
pub fn validate_nation_known(nation: &Nation) -> Result<(), DomainError> {
    if catalog::is_known_nation(nation) {
        Ok(())
    } else {
        Err(DomainError::UnknownNation(nation.value().to_string()))
    }
}

/// Validates that an event id is part of the event catalog.
///
/// # Errors
///
/// Returns an error if no catalog event carries this id.
pub fn validate_event_known(event: &EventId) -> Result<(), DomainError> {
    if catalog::event(event).is_some() {
        Ok(())
    } else {
        Err(DomainError::UnknownEvent(event.value().to_string()))
    }
}

/// Validates that a bonus rule id is part of the bonus-rule catalog.
///
/// # Errors
///
/// Returns an error if no catalog rule carries this id.
pub fn validate_bonus_known(bonus: &BonusId) -> Result<(), DomainError> {
    if catalog::bonus_rule(bonus).is_some() {
        Ok(())
    } else {
        Err(DomainError::UnknownBonusRule(bonus.value().to_string()))
    }
}

/// Validates that a player id refers to a roster member.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `player` - The id to validate
/// * `players` - The current roster
///
/// # Errors
///
/// Returns an error if no roster member carries this id.
pub fn validate_player_exists(player: PlayerId, players: &[Player]) -> Result<(), DomainError> {
    if players.iter().any(|member| member.id == player) {
        Ok(())
    } else {
        Err(DomainError::PlayerNotFound(player))
    }
}
