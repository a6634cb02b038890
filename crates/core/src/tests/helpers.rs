// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, TournamentState, apply};
use medagliere_domain::{
    BonusId, Character, EventId, Nation, Placement, PlayerId, PlayerName,
};

pub fn add_player_command(name: &str) -> Command {
    Command::AddPlayer {
        name: PlayerName::new(name).unwrap(),
        character: Character::new("Mario"),
        nation: Nation::new("🇮🇹 Italia"),
    }
}

/// Builds a state with one player per name, added through the reducer.
pub fn state_with_players(names: &[&str]) -> TournamentState {
    let mut state: TournamentState = TournamentState::new();
    for name in names {
        state = apply(&state, add_player_command(name)).unwrap();
    }
    state
}

pub fn player_id(state: &TournamentState, name: &str) -> PlayerId {
    state
        .players
        .iter()
        .find(|player| player.name.value() == name)
        .unwrap()
        .id
}

pub fn placement(rank: u8) -> Placement {
    Placement::new(rank).unwrap()
}

pub fn event(id: &str) -> EventId {
    EventId::new(id)
}

pub fn bonus(id: &str) -> BonusId {
    BonusId::new(id)
}

pub fn set_placement(
    state: &TournamentState,
    event_id: &str,
    name: &str,
    rank: u8,
) -> TournamentState {
    apply(
        state,
        Command::SetPlacement {
            event: event(event_id),
            player: player_id(state, name),
            placement: Some(placement(rank)),
        },
    )
    .unwrap()
}
