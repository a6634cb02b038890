// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use medagliere_domain::{BonusId, Character, EventId, Nation, Placement, PlayerId, PlayerName};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new player to the end of the roster.
    AddPlayer {
        /// Validated display name.
        name: PlayerName,
        /// Chosen character; must come from the character catalog.
        character: Character,
        /// Chosen nation; must come from the nation catalog.
        nation: Nation,
    },
    /// Remove a player, along with every result and bonus entry keyed by
    /// their id.
    RemovePlayer {
        /// The player to remove.
        player: PlayerId,
    },
    /// Move the tournament from setup to playing.
    StartTournament,
    /// Record, move, or clear one player's placement in one event.
    SetPlacement {
        /// The event whose result mapping changes.
        event: EventId,
        /// The player whose placement changes.
        player: PlayerId,
        /// `Some` assigns the rank, evicting any current holder of the same
        /// rank in this event; `None` clears the player's entry.
        placement: Option<Placement>,
    },
    /// Grant a bonus award if absent, revoke it if present.
    ToggleBonus {
        /// The player whose ledger is toggled.
        player: PlayerId,
        /// The bonus rule being granted or revoked.
        bonus: BonusId,
        /// Points stored with the award while it is active.
        points: u32,
    },
    /// Clear all results and all bonus awards; roster and phase survive.
    ResetResults,
    /// Restore the initial empty state. The id counter is preserved so ids
    /// are never reused.
    ResetAll,
}
