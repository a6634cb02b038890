// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use medagliere_domain::catalog;
use medagliere_domain::{BonusId, EventId, Phase, Placement, Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-event recorded placements, keyed by player id.
pub type EventResults = BTreeMap<PlayerId, Placement>;

/// Per-player active bonus awards: bonus rule id to the points granted.
///
/// The stored points are redundant with the bonus-rule catalog; keeping
/// them per award makes every ledger entry self-contained.
pub type BonusLedger = BTreeMap<BonusId, u32>;

/// The complete tournament state.
///
/// This is the single mutable aggregate of the system and the exact record
/// that gets persisted. It is only ever replaced as a whole:
/// [`apply`](crate::apply) takes a reference and returns a new value, so a
/// failed transition leaves the current value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentState {
    /// Roster in insertion order; insertion order is the display order.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Recorded placements, keyed by event id then player id.
    ///
    /// Invariant: within one event, at most one player holds any given
    /// placement value.
    #[serde(default)]
    pub results: BTreeMap<EventId, EventResults>,
    /// Active bonus awards, keyed by player id then bonus rule id.
    #[serde(default)]
    pub bonuses: BTreeMap<PlayerId, BonusLedger>,
    /// The events this tournament runs, in schedule order.
    #[serde(default)]
    pub selected_events: Vec<EventId>,
    /// Lifecycle phase.
    #[serde(default)]
    pub phase: Phase,
    /// Next value handed out by [`allocate_player_id`](Self::allocate_player_id).
    #[serde(default = "first_player_id")]
    next_player_id: u64,
}

const fn first_player_id() -> u64 {
    1
}

impl TournamentState {
    /// Creates the initial empty state: no players, no results, no bonuses,
    /// the full event catalog selected, phase [`Phase::Setup`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            results: BTreeMap::new(),
            bonuses: BTreeMap::new(),
            selected_events: catalog::default_selected_events(),
            phase: Phase::Setup,
            next_player_id: first_player_id(),
        }
    }

    /// Looks up a roster member by id.
    #[must_use]
    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Checks if a player id refers to a roster member.
    #[must_use]
    pub fn has_player(&self, id: PlayerId) -> bool {
        self.find_player(id).is_some()
    }

    /// Checks if an event has at least one recorded placement.
    #[must_use]
    pub fn event_has_results(&self, event: &EventId) -> bool {
        self.results
            .get(event)
            .is_some_and(|placements| !placements.is_empty())
    }

    /// Repairs a state decoded from storage.
    ///
    /// An empty selected-events list is restored to the full catalog, and
    /// the id counter is bumped past every roster id, so a stale or
    /// hand-edited document can never cause an id to be handed out twice.
    pub fn normalize(&mut self) {
        if self.selected_events.is_empty() {
            self.selected_events = catalog::default_selected_events();
        }
        let max_roster_id: u64 = self
            .players
            .iter()
            .map(|player| player.id.value())
            .max()
            .unwrap_or(0);
        if self.next_player_id <= max_roster_id {
            self.next_player_id = max_roster_id + 1;
        }
    }

    /// Hands out the next player id and advances the counter.
    pub(crate) const fn allocate_player_id(&mut self) -> PlayerId {
        let id: PlayerId = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        id
    }

    /// Restores the initial state, preserving the id counter so ids are
    /// never reused across a full reset.
    #[must_use]
    pub(crate) fn reset_with_counter(&self) -> Self {
        Self {
            next_player_id: self.next_player_id,
            ..Self::new()
        }
    }
}

impl Default for TournamentState {
    fn default() -> Self {
        Self::new()
    }
}
