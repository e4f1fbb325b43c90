//! Integration tests for the knockout format.
//!
//! These tests run complete tournaments through the public API, from
//! seeding through champion, including retroactive score corrections.

use bracket_engine::knockout::KnockoutTournament;
use bracket_engine::{BracketSummary, Player, Tournament, submit_knockout_score};

fn roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::with_id(format!("p{i}"), &format!("Player {i}")))
        .collect()
}

/// Submit a 1-0 for every playable match of a round, in order.
fn sweep_round(mut t: KnockoutTournament, round: usize) -> KnockoutTournament {
    let ids: Vec<String> = t.rounds[round].matches.iter().map(|m| m.id.clone()).collect();
    for id in ids {
        t = submit_knockout_score(t, &id, [1, 0]);
    }
    t
}

#[test]
fn test_power_of_two_field_runs_to_a_champion() {
    let mut t = KnockoutTournament::new("Weekend Cup", roster(8));
    assert_eq!(t.rounds.len(), 3);
    assert!(t.winner.is_none());

    for round in 0..3 {
        t = sweep_round(t, round);
    }

    let champion = t.winner.clone().expect("final decided");
    let final_match = &t.rounds[2].matches[0];
    assert_eq!(final_match.winner_id.as_deref(), Some(champion.id.as_str()));
    // Every match along the way has a decided winner.
    assert!(
        t.rounds
            .iter()
            .flat_map(|r| &r.matches)
            .all(|m| m.is_complete())
    );
}

#[test]
fn test_five_player_field_runs_through_the_preliminary() {
    let mut t = KnockoutTournament::new("Odd Cup", roster(5));
    let names: Vec<&str> = t.rounds.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Preliminary Round", "Semifinals", "Final"]);

    t = submit_knockout_score(t, "pr0", [2, 1]);
    let prelim_winner = t.rounds[0].matches[0].winner_id.clone().unwrap();
    assert_eq!(
        t.rounds[1].matches[1].players[1]
            .as_ref()
            .map(|p| p.id.as_str()),
        Some(prelim_winner.as_str())
    );

    for round in 1..3 {
        t = sweep_round(t, round);
    }
    assert!(t.winner.is_some());
}

#[test]
fn test_correction_rolls_back_exactly_the_dependent_chain() {
    let mut t = KnockoutTournament::new("Replay Cup", roster(8));
    for round in 0..3 {
        t = sweep_round(t, round);
    }
    let old_champion = t.winner.clone().unwrap();
    // The 1-0 sweep crowns the player seeded into r0m0 slot 0.
    assert_eq!(
        t.rounds[0].matches[0].players[0].as_ref().unwrap().id,
        old_champion.id
    );
    let untouched_semi = t.rounds[1].matches[1].clone();

    // Flip the champion's quarterfinal.
    t = submit_knockout_score(t, "r0m0", [0, 2]);

    assert!(t.winner.is_none());
    assert!(!t.rounds[1].matches[0].is_complete());
    assert!(!t.rounds[2].matches[0].is_complete());
    // The sibling semifinal result is untouched.
    assert_eq!(t.rounds[1].matches[1], untouched_semi);

    // Replaying the rolled-back chain crowns a fresh champion.
    t = submit_knockout_score(t, "r1m0", [1, 0]);
    t = submit_knockout_score(t, "r2m0", [0, 1]);
    let new_champion = t.winner.clone().unwrap();
    assert_ne!(new_champion.id, old_champion.id);
}

#[test]
fn test_tournament_enum_round_trips_through_updates_and_json() {
    let tournament = Tournament::from(KnockoutTournament::new("Enum Cup", roster(4)));
    let tournament = tournament
        .submit_knockout_score("r0m0", [2, 0])
        .submit_knockout_score("r0m1", [0, 2])
        .submit_knockout_score("r1m0", [3, 2]);
    assert!(tournament.is_complete());

    let json = serde_json::to_string(&tournament).unwrap();
    let restored: Tournament = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.winner().map(|p| p.id.clone()), tournament.winner().map(|p| p.id.clone()));
}

#[test]
fn test_winner_iff_final_match_decided() {
    let mut t = KnockoutTournament::new("Invariant Cup", roster(4));
    t = sweep_round(t, 0);
    assert!(t.rounds[1].matches[0].winner_id.is_none());
    assert!(t.winner.is_none());

    t = submit_knockout_score(t, "r1m0", [4, 2]);
    let final_match = &t.rounds[1].matches[0];
    assert_eq!(
        t.winner.as_ref().map(|p| p.id.as_str()),
        final_match.winner_id.as_deref()
    );
}
