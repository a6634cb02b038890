// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{BonusLedger, EventResults, TournamentState};
use medagliere_domain::{
    DomainError, Phase, Player, PlayerId, validate_bonus_known, validate_character_known,
    validate_event_known, validate_nation_known, validate_player_exists,
    validate_roster_capacity,
};

/// Minimum roster size required to start the tournament.
pub const MIN_PLAYERS_TO_START: usize = 2;

/// Applies a command to the current state, producing a new state.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects, leaving the input state untouched.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TournamentState)` containing the new state
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if the command violates domain rules; see the
/// individual [`Command`] variants for what each one requires.
pub fn apply(state: &TournamentState, command: Command) -> Result<TournamentState, CoreError> {
    match command {
        Command::AddPlayer {
            name,
            character,
            nation,
        } => {
            validate_roster_capacity(&state.players)?;
            validate_character_known(&character)?;
            validate_nation_known(&nation)?;

            let mut new_state: TournamentState = state.clone();
            let id: PlayerId = new_state.allocate_player_id();
            new_state
                .players
                .push(Player::new(id, name, character, nation));
            // Every roster member owns a ledger entry, even while empty.
            new_state.bonuses.insert(id, BonusLedger::new());

            Ok(new_state)
        }
        Command::RemovePlayer { player } => {
            validate_player_exists(player, &state.players)?;

            let mut new_state: TournamentState = state.clone();
            new_state.players.retain(|member| member.id != player);
            // No result or bonus entry may reference a player that is no
            // longer on the roster.
            for placements in new_state.results.values_mut() {
                placements.remove(&player);
            }
            new_state.bonuses.remove(&player);

            Ok(new_state)
        }
        Command::StartTournament => {
            if state.players.len() < MIN_PLAYERS_TO_START {
                return Err(CoreError::DomainViolation(DomainError::NotEnoughPlayers {
                    required: MIN_PLAYERS_TO_START,
                    actual: state.players.len(),
                }));
            }

            let mut new_state: TournamentState = state.clone();
            new_state.phase = Phase::Playing;

            Ok(new_state)
        }
        Command::SetPlacement {
            event,
            player,
            placement,
        } => {
            validate_event_known(&event)?;
            validate_player_exists(player, &state.players)?;

            let mut new_state: TournamentState = state.clone();
            if let Some(rank) = placement {
                let placements: &mut EventResults = new_state.results.entry(event).or_default();
                // Placements are unique per event: evict the current holder
                // of this rank before assigning it.
                placements.retain(|_, held| *held != rank);
                placements.insert(player, rank);
            } else if let Some(placements) = new_state.results.get_mut(&event) {
                placements.remove(&player);
            }

            Ok(new_state)
        }
        Command::ToggleBonus {
            player,
            bonus,
            points,
        } => {
            validate_player_exists(player, &state.players)?;
            validate_bonus_known(&bonus)?;

            let mut new_state: TournamentState = state.clone();
            let ledger: &mut BonusLedger = new_state.bonuses.entry(player).or_default();
            // Strict two-state toggle: present removes, absent inserts.
            if ledger.remove(&bonus).is_none() {
                ledger.insert(bonus, points);
            }

            Ok(new_state)
        }
        Command::ResetResults => {
            let mut new_state: TournamentState = state.clone();
            new_state.results.clear();
            new_state.bonuses.clear();

            Ok(new_state)
        }
        Command::ResetAll => Ok(state.reset_with_counter()),
    }
}
