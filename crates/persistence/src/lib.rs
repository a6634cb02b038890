// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the medagliere scoreboard.
//!
//! One serialized state document lives in a single named durable slot. The
//! adapter is deliberately forgiving: an absent, unreadable, or corrupt
//! slot loads as the default state, and write failures are swallowed, so
//! the in-memory state stays authoritative for the rest of the session.
//! Durability can degrade; the running tournament never does.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod slot;

#[cfg(test)]
mod tests;

use medagliere::TournamentState;
use tracing::{debug, warn};

pub use error::PersistenceError;
pub use slot::{FileSlot, MemorySlot, StateSlot};

/// Name of the durable slot holding the serialized state.
///
/// The suffix encodes the layout version: a breaking layout change bumps
/// the name, so documents in the old and new layouts never collide.
pub const STATE_SLOT_NAME: &str = "medagliere_state_v1";

/// The persistence adapter: the whole state, serialized into one slot.
#[derive(Debug)]
pub struct Persistence<S: StateSlot> {
    slot: S,
}

impl<S: StateSlot> Persistence<S> {
    /// Creates an adapter over a slot backend.
    #[must_use]
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Loads the state from the slot.
    ///
    /// Never fails: an absent slot, an unreadable slot, or a payload that
    /// does not decode yields the default initial state instead. A decoded
    /// state is normalized before use (an empty selected-events list is
    /// repaired to the full catalog and the id counter is bumped past every
    /// roster id).
    #[must_use]
    pub fn load(&self) -> TournamentState {
        let payload: Option<String> = match self.slot.read() {
            Ok(payload) => payload,
            Err(err) => {
                warn!("state slot unreadable, starting fresh: {err}");
                return TournamentState::new();
            }
        };
        let Some(payload) = payload else {
            debug!("state slot empty, starting fresh");
            return TournamentState::new();
        };
        match serde_json::from_str::<TournamentState>(&payload) {
            Ok(mut state) => {
                state.normalize();
                debug!("loaded state with {} players", state.players.len());
                state
            }
            Err(err) => {
                warn!("stored state did not decode, starting fresh: {err}");
                TournamentState::new()
            }
        }
    }

    /// Writes the state to the slot.
    ///
    /// Attempted after every mutation. Failures (for example, an exhausted
    /// quota on the storage medium) are logged and swallowed; the caller's
    /// in-memory state remains authoritative either way.
    pub fn save(&mut self, state: &TournamentState) {
        let payload: String = match serde_json::to_string(state) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("state did not serialize, skipping save: {err}");
                return;
            }
        };
        if let Err(err) = self.slot.write(&payload) {
            warn!("state save failed, keeping in-memory state: {err}");
        }
    }
}
