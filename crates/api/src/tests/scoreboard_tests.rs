// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Scoreboard;
use crate::tests::helpers::{
    alice_and_bob, bonus, event, memory_scoreboard, placement, player_id,
};
use medagliere::{RankedPlayer, TournamentState};
use medagliere_domain::{Phase, PlayerId};
use medagliere_persistence::{FileSlot, MemorySlot, Persistence, STATE_SLOT_NAME};

#[test]
fn test_open_on_an_empty_slot_starts_a_fresh_tournament() {
    let board: Scoreboard<MemorySlot> = memory_scoreboard();

    assert!(board.state().players.is_empty());
    assert_eq!(board.state().phase, Phase::Setup);
    assert_eq!(board.state().selected_events.len(), 6);
}

#[test]
fn test_add_player_trims_the_name() {
    let mut board: Scoreboard<MemorySlot> = memory_scoreboard();

    board.add_player("  Alice  ", "Peach", "🇮🇹 Italia");

    assert_eq!(board.state().players[0].name.value(), "Alice");
}

#[test]
fn test_add_player_with_blank_name_is_a_noop() {
    let mut board: Scoreboard<MemorySlot> = memory_scoreboard();

    board.add_player("   ", "Peach", "🇮🇹 Italia");

    assert!(board.state().players.is_empty());
}

#[test]
fn test_add_player_with_unknown_character_is_a_noop() {
    let mut board: Scoreboard<MemorySlot> = memory_scoreboard();

    board.add_player("Alice", "Kirby", "🇮🇹 Italia");

    assert!(board.state().players.is_empty());
}

#[test]
fn test_ninth_add_player_is_a_noop() {
    let mut board: Scoreboard<MemorySlot> = memory_scoreboard();
    for i in 1..=8 {
        board.add_player(&format!("Player {i}"), "Mario", "🇮🇹 Italia");
    }

    board.add_player("Player 9", "Mario", "🇮🇹 Italia");

    assert_eq!(board.state().players.len(), 8);
}

#[test]
fn test_remove_player_prunes_results_and_bonuses() {
    let mut board: Scoreboard<MemorySlot> = alice_and_bob();
    let alice: PlayerId = player_id(&board, "Alice");
    board.set_placement(&event("curling"), alice, Some(placement(1)));
    board.toggle_bonus(alice, &bonus("simpatia"), 3);

    board.remove_player(alice);

    assert_eq!(board.state().players.len(), 1);
    assert!(!board.state().results.get(&event("curling")).unwrap().contains_key(&alice));
    assert!(!board.state().bonuses.contains_key(&alice));
}

#[test]
fn test_remove_unknown_player_is_a_noop() {
    let mut board: Scoreboard<MemorySlot> = alice_and_bob();

    board.remove_player(PlayerId::new(999));

    assert_eq!(board.state().players.len(), 2);
}

#[test]
fn test_start_tournament_needs_two_players() {
    let mut board: Scoreboard<MemorySlot> = memory_scoreboard();
    board.add_player("Alice", "Peach", "🇮🇹 Italia");

    board.start_tournament();
    assert_eq!(board.state().phase, Phase::Setup);

    board.add_player("Bob", "Sonic", "🇺🇸 USA");
    board.start_tournament();
    assert_eq!(board.state().phase, Phase::Playing);
}

#[test]
fn test_placement_collision_reassigns_the_rank() {
    // Event has Alice at rank 1; assigning rank 1 to Bob removes Alice's
    // entry and Bob now holds it.
    let mut board: Scoreboard<MemorySlot> = alice_and_bob();
    let alice: PlayerId = player_id(&board, "Alice");
    let bob: PlayerId = player_id(&board, "Bob");

    board.set_placement(&event("ski_jump"), alice, Some(placement(1)));
    board.set_placement(&event("ski_jump"), bob, Some(placement(1)));

    let placements = board.state().results.get(&event("ski_jump")).unwrap();
    assert!(!placements.contains_key(&alice));
    assert_eq!(placements.get(&bob), Some(&placement(1)));
}

#[test]
fn test_caller_side_toggle_clears_with_none() {
    let mut board: Scoreboard<MemorySlot> = alice_and_bob();
    let alice: PlayerId = player_id(&board, "Alice");

    board.set_placement(&event("ski_jump"), alice, Some(placement(2)));
    // The UI computes sentinel-vs-value: clicking the held rank passes None.
    board.set_placement(&event("ski_jump"), alice, None);

    assert!(!board.state().results.get(&event("ski_jump")).unwrap().contains_key(&alice));
}

#[test]
fn test_toggle_bonus_twice_is_a_net_noop() {
    let mut board: Scoreboard<MemorySlot> = alice_and_bob();
    let alice: PlayerId = player_id(&board, "Alice");

    board.toggle_bonus(alice, &bonus("simpatia"), 3);
    board.toggle_bonus(alice, &bonus("simpatia"), 3);

    assert!(!board.state().bonuses.get(&alice).unwrap().contains_key(&bonus("simpatia")));
    let ranked: Vec<RankedPlayer> = board.rankings();
    assert_eq!(ranked[0].bonus_points, 0);
}

#[test]
fn test_rankings_reflect_the_current_state() {
    let mut board: Scoreboard<MemorySlot> = alice_and_bob();
    let alice: PlayerId = player_id(&board, "Alice");
    let bob: PlayerId = player_id(&board, "Bob");

    board.set_placement(&event("ski_jump"), alice, Some(placement(1)));
    board.set_placement(&event("ski_jump"), bob, Some(placement(2)));

    let ranked: Vec<RankedPlayer> = board.rankings();
    assert_eq!(ranked[0].player.id, alice);
    assert_eq!(ranked[0].event_points, 5);
    assert_eq!(ranked[1].player.id, bob);
    assert_eq!(ranked[1].event_points, 3);
}

#[test]
fn test_reset_results_keeps_the_roster() {
    let mut board: Scoreboard<MemorySlot> = alice_and_bob();
    let alice: PlayerId = player_id(&board, "Alice");
    board.set_placement(&event("dream"), alice, Some(placement(1)));
    board.toggle_bonus(alice, &bonus("momento"), 1);

    board.reset_results();

    assert_eq!(board.state().players.len(), 2);
    assert!(board.state().results.is_empty());
    assert!(board.state().bonuses.is_empty());
}

#[test]
fn test_reset_all_restores_the_initial_state() {
    let mut board: Scoreboard<MemorySlot> = alice_and_bob();
    board.start_tournament();

    board.reset_all();

    assert!(board.state().players.is_empty());
    assert_eq!(board.state().phase, Phase::Setup);
    assert_eq!(board.state().selected_events.len(), 6);
}

#[test]
fn test_state_survives_a_restart() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();

    let mut board: Scoreboard<FileSlot> =
        Scoreboard::open(Persistence::new(FileSlot::new(dir.path(), STATE_SLOT_NAME)));
    board.add_player("Alice", "Peach", "🇮🇹 Italia");
    board.add_player("Bob", "Sonic", "🇺🇸 USA");
    board.start_tournament();
    let alice: PlayerId = player_id(&board, "Alice");
    board.set_placement(&event("dream"), alice, Some(placement(2)));
    board.toggle_bonus(alice, &bonus("ghiaccio"), 1);
    let before: TournamentState = board.state().clone();
    drop(board);

    let reopened: Scoreboard<FileSlot> =
        Scoreboard::open(Persistence::new(FileSlot::new(dir.path(), STATE_SLOT_NAME)));

    assert_eq!(*reopened.state(), before);
}

#[test]
fn test_rejected_mutations_still_attempt_a_save() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();

    let mut board: Scoreboard<FileSlot> =
        Scoreboard::open(Persistence::new(FileSlot::new(dir.path(), STATE_SLOT_NAME)));
    board.remove_player(PlayerId::new(999));
    drop(board);

    // The rejected dispatch wrote the (unchanged) state to the slot.
    assert!(dir.path().join(format!("{STATE_SLOT_NAME}.json")).exists());
}
