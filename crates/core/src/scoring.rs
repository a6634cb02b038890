// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived leaderboard computation.
//!
//! The scoring engine is pure: it reads the roster, results, and bonuses
//! and produces a ranked view. It never mutates and holds no cache; with a
//! roster of at most eight players, recomputing on every read is trivial.

use crate::state::{BonusLedger, EventResults, TournamentState};
use medagliere_domain::catalog;
use medagliere_domain::{EventId, Placement, Player, PlayerId};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Gold, silver, and bronze counts across all events for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedalTally {
    /// First places.
    pub gold: u32,
    /// Second places.
    pub silver: u32,
    /// Third places.
    pub bronze: u32,
}

impl MedalTally {
    const fn record(&mut self, placement: Placement) {
        match placement.rank() {
            1 => self.gold += 1,
            2 => self.silver += 1,
            3 => self.bronze += 1,
            _ => {}
        }
    }
}

/// One leaderboard row: a player together with their derived score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlayer {
    /// The roster member this row describes.
    pub player: Player,
    /// Placement points across all events, event multipliers applied.
    pub event_points: u32,
    /// Sum of the player's active bonus awards.
    pub bonus_points: u32,
    /// `event_points + bonus_points`.
    pub total: u32,
    /// Medal counts; a double-points event still counts one medal.
    pub medals: MedalTally,
}

/// Computes the ranked leaderboard.
///
/// Returns exactly one entry per roster member, ordered by total points
/// descending, ties broken by gold count, then by silver count; players
/// still tied keep their roster insertion order. Result or bonus entries
/// keyed by an id that is not on the roster are ignored rather than being
/// an error.
///
/// # Arguments
///
/// * `players` - The roster, in insertion order
/// * `results` - Recorded placements per event
/// * `bonuses` - Active bonus awards per player
#[must_use]
pub fn rank(
    players: &[Player],
    results: &BTreeMap<EventId, EventResults>,
    bonuses: &BTreeMap<PlayerId, BonusLedger>,
) -> Vec<RankedPlayer> {
    let mut ranked: Vec<RankedPlayer> = players
        .iter()
        .map(|player| score_player(player, results, bonuses))
        .collect();
    // Vec::sort_by is stable, so full ties keep roster insertion order.
    ranked.sort_by(compare_rows);
    ranked
}

fn score_player(
    player: &Player,
    results: &BTreeMap<EventId, EventResults>,
    bonuses: &BTreeMap<PlayerId, BonusLedger>,
) -> RankedPlayer {
    let mut event_points: u32 = 0;
    let mut medals: MedalTally = MedalTally::default();
    for (event, placements) in results {
        if let Some(placement) = placements.get(&player.id) {
            event_points +=
                catalog::points_for_placement(*placement) * catalog::point_multiplier(event);
            medals.record(*placement);
        }
    }

    let bonus_points: u32 = bonuses
        .get(&player.id)
        .map_or(0, |ledger| ledger.values().sum());

    RankedPlayer {
        player: player.clone(),
        event_points,
        bonus_points,
        total: event_points + bonus_points,
        medals,
    }
}

fn compare_rows(a: &RankedPlayer, b: &RankedPlayer) -> Ordering {
    b.total
        .cmp(&a.total)
        .then_with(|| b.medals.gold.cmp(&a.medals.gold))
        .then_with(|| b.medals.silver.cmp(&a.medals.silver))
}

impl TournamentState {
    /// Convenience wrapper: [`rank`] over the current state.
    #[must_use]
    pub fn rankings(&self) -> Vec<RankedPlayer> {
        rank(&self.players, &self.results, &self.bonuses)
    }
}
