// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PersistenceError;
use crate::StateSlot;
use medagliere::{Command, TournamentState, apply};
use medagliere_domain::{BonusId, Character, EventId, Nation, Placement, PlayerName};

/// A slot whose writes always fail; reads report an empty slot.
#[derive(Debug, Default)]
pub struct FailingSlot;

impl StateSlot for FailingSlot {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(None)
    }

    fn write(&mut self, _payload: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Backend(String::from("slot full")))
    }
}

/// A slot whose reads fail; writes are accepted and discarded.
#[derive(Debug, Default)]
pub struct UnreadableSlot;

impl StateSlot for UnreadableSlot {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Err(PersistenceError::Backend(String::from("medium offline")))
    }

    fn write(&mut self, _payload: &str) -> Result<(), PersistenceError> {
        Ok(())
    }
}

/// A mid-tournament state: two players, placements, one bonus, playing.
pub fn populated_state() -> TournamentState {
    let mut state: TournamentState = TournamentState::new();
    for name in ["Alice", "Bob"] {
        state = apply(
            &state,
            Command::AddPlayer {
                name: PlayerName::new(name).unwrap(),
                character: Character::new("Mario"),
                nation: Nation::new("🇮🇹 Italia"),
            },
        )
        .unwrap();
    }
    state = apply(&state, Command::StartTournament).unwrap();
    state = apply(
        &state,
        Command::SetPlacement {
            event: EventId::new("ski_jump"),
            player: state.players[0].id,
            placement: Some(Placement::new(1).unwrap()),
        },
    )
    .unwrap();
    state = apply(
        &state,
        Command::SetPlacement {
            event: EventId::new("dream"),
            player: state.players[1].id,
            placement: Some(Placement::new(2).unwrap()),
        },
    )
    .unwrap();
    apply(
        &state,
        Command::ToggleBonus {
            player: state.players[0].id,
            bonus: BonusId::new("simpatia"),
            points: 3,
        },
    )
    .unwrap()
}
