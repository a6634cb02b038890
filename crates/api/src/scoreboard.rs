// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use medagliere::{Command, RankedPlayer, TournamentState, apply};
use medagliere_domain::{
    BonusId, Character, EventId, Nation, Placement, PlayerId, PlayerName,
};
use medagliere_persistence::{Persistence, StateSlot};
use tracing::debug;

/// The collaborator-facing controller.
///
/// Owns the tournament state and its persistence adapter. Every mutation
/// funnels through the core reducer; a rejected mutation leaves the state
/// unchanged and is logged at debug level, so no operation here ever fails
/// visibly. Every dispatched mutation, applied or rejected, is followed by
/// a save attempt before control returns to the caller.
#[derive(Debug)]
pub struct Scoreboard<S: StateSlot> {
    state: TournamentState,
    persistence: Persistence<S>,
}

impl<S: StateSlot> Scoreboard<S> {
    /// Opens the scoreboard, loading the last saved state — or the default
    /// state if the slot is absent, unreadable, or corrupt.
    #[must_use]
    pub fn open(persistence: Persistence<S>) -> Self {
        let state: TournamentState = persistence.load();
        Self { state, persistence }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &TournamentState {
        &self.state
    }

    /// The derived leaderboard, recomputed on every call.
    #[must_use]
    pub fn rankings(&self) -> Vec<RankedPlayer> {
        self.state.rankings()
    }

    /// Adds a player to the end of the roster.
    ///
    /// No-op if the trimmed name is empty or over-long, the roster is
    /// full, or the character or nation is not a catalog entry.
    pub fn add_player(&mut self, name: &str, character: &str, nation: &str) {
        match PlayerName::new(name) {
            Ok(name) => self.dispatch(Command::AddPlayer {
                name,
                character: Character::new(character),
                nation: Nation::new(nation),
            }),
            Err(err) => debug!("add_player rejected: {err}"),
        }
    }

    /// Removes a player, along with every result and bonus entry keyed by
    /// their id. No-op for an unknown id.
    pub fn remove_player(&mut self, player: PlayerId) {
        self.dispatch(Command::RemovePlayer { player });
    }

    /// Moves the tournament from setup to playing. No-op with fewer than
    /// two players on the roster.
    pub fn start_tournament(&mut self) {
        self.dispatch(Command::StartTournament);
    }

    /// Records, moves, or clears one placement. `None` clears the player's
    /// entry for the event; the toggle semantic — clicking the held rank
    /// again to clear it — is the caller's job: pass `None` instead of the
    /// held rank. No-op for an unknown event or player.
    pub fn set_placement(
        &mut self,
        event: &EventId,
        player: PlayerId,
        placement: Option<Placement>,
    ) {
        self.dispatch(Command::SetPlacement {
            event: event.clone(),
            player,
            placement,
        });
    }

    /// Grants the bonus if the player does not hold it, revokes it if they
    /// do. No-op for an unknown player or bonus rule.
    pub fn toggle_bonus(&mut self, player: PlayerId, bonus: &BonusId, points: u32) {
        self.dispatch(Command::ToggleBonus {
            player,
            bonus: bonus.clone(),
            points,
        });
    }

    /// Clears all results and all bonus awards; the roster and phase
    /// survive.
    pub fn reset_results(&mut self) {
        self.dispatch(Command::ResetResults);
    }

    /// Restores the initial empty state. Destructive and irreversible —
    /// callers are expected to gate this behind an explicit confirmation
    /// step.
    pub fn reset_all(&mut self) {
        self.dispatch(Command::ResetAll);
    }

    /// Runs one command through the reducer and persists the outcome.
    ///
    /// The save is attempted on every exit path, applied or rejected.
    fn dispatch(&mut self, command: Command) {
        match apply(&self.state, command) {
            Ok(new_state) => self.state = new_state,
            Err(err) => debug!("mutation rejected: {err}"),
        }
        self.persistence.save(&self.state);
    }
}
