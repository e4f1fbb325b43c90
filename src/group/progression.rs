//! Group-advancement result propagation.
//!
//! A race result can change the composition of every later heat, so the
//! engine never patches downstream state incrementally: it clears every
//! round past the edited one and rebuilds the next round's lineup from the
//! edited round's finished heats. Resubmitting the same result therefore
//! always reproduces the same structure.

use log::{debug, warn};

use super::models::GroupTournament;
use crate::tournament::models::{FinishPosition, Player};

/// Record finishing positions for one race and rebuild the ladder forward.
///
/// Out-of-range round or race indices are silent no-ops. For a non-final
/// round, every later round is unconditionally reset; the next round is
/// refilled only once all heats of the edited round are finished, taking
/// each heat's advancers in heat order and filling slots left to right,
/// heat by heat. A final-round result sets or clears the tournament winner.
#[must_use]
pub fn submit_race_result(
    mut tournament: GroupTournament,
    round_idx: usize,
    race_idx: usize,
    positions: &[Option<FinishPosition>],
) -> GroupTournament {
    let last_round = match tournament.rounds.len().checked_sub(1) {
        Some(last) if round_idx <= last => last,
        _ => {
            warn!("ignoring result for unknown round {round_idx}");
            return tournament;
        }
    };
    if race_idx >= tournament.rounds[round_idx].races.len() {
        warn!("ignoring result for unknown race {race_idx} in round {round_idx}");
        return tournament;
    }

    let race = &mut tournament.rounds[round_idx].races[race_idx];
    for i in 0..race.positions.len() {
        race.positions[i] = positions.get(i).copied().flatten();
    }
    race.recompute_finished();

    if round_idx == last_round {
        tournament.winner = if tournament.rounds[round_idx].races[race_idx].is_finished {
            tournament.rounds[round_idx].races[race_idx]
                .advancers()
                .into_iter()
                .next()
        } else {
            None
        };
        return tournament;
    }

    // Full forward reset: one edited heat can reshuffle everything below.
    tournament.winner = None;
    for round in &mut tournament.rounds[round_idx + 1..] {
        for race in &mut round.races {
            race.clear();
        }
    }

    if !tournament.rounds[round_idx].is_finished() {
        debug!("round {round_idx} has unfinished heats; later rounds stay empty");
        return tournament;
    }

    let advancers: Vec<Player> = tournament.rounds[round_idx]
        .races
        .iter()
        .flat_map(|race| race.advancers())
        .collect();
    debug!(
        "round {round_idx} finished; {} players advance to round {}",
        advancers.len(),
        round_idx + 1
    );
    let mut advancers = advancers.into_iter();
    for race in &mut tournament.rounds[round_idx + 1].races {
        for slot in &mut race.players {
            *slot = advancers.next();
        }
    }
    tournament
}
