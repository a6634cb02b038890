// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Scoreboard;
use medagliere_domain::{BonusId, EventId, Placement, PlayerId};
use medagliere_persistence::{MemorySlot, Persistence, StateSlot};

/// A scoreboard over a throwaway in-memory slot.
pub fn memory_scoreboard() -> Scoreboard<MemorySlot> {
    Scoreboard::open(Persistence::new(MemorySlot::new()))
}

/// A scoreboard with Alice and Bob already on the roster.
pub fn alice_and_bob() -> Scoreboard<MemorySlot> {
    let mut board: Scoreboard<MemorySlot> = memory_scoreboard();
    board.add_player("Alice", "Peach", "🇮🇹 Italia");
    board.add_player("Bob", "Sonic", "🇺🇸 USA");
    board
}

pub fn player_id<S: StateSlot>(board: &Scoreboard<S>, name: &str) -> PlayerId {
    board
        .state()
        .players
        .iter()
        .find(|player| player.name.value() == name)
        .unwrap()
        .id
}

pub fn event(id: &str) -> EventId {
    EventId::new(id)
}

pub fn bonus(id: &str) -> BonusId {
    BonusId::new(id)
}

pub fn placement(rank: u8) -> Placement {
    Placement::new(rank).unwrap()
}
