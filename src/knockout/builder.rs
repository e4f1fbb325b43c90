//! Knockout bracket seeding.
//!
//! Builds the complete round structure for single-elimination play. When the
//! field is not a power of two, the lowest-seeded players meet in a
//! preliminary round whose winners feed the reserved slots of Round 1; the
//! rest of the field receives a bye into Round 1.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::models::{KnockoutBracket, Match, PRELIMINARY_ROUND_NAME, Round};
use crate::tournament::models::{Player, stage_name};

/// Seed players into a knockout bracket with a uniform random shuffle.
///
/// Fewer than two players yields an empty bracket.
#[must_use]
pub fn build_bracket(players: &[Player]) -> KnockoutBracket {
    build_bracket_with_rng(players, &mut rand::rng())
}

/// Seed players into a knockout bracket using a caller-supplied RNG.
#[must_use]
pub fn build_bracket_with_rng<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> KnockoutBracket {
    let n = players.len();
    if n < 2 {
        return KnockoutBracket {
            rounds: Vec::new(),
            winner: None,
        };
    }

    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    let rounds = if n.is_power_of_two() {
        full_bracket_rounds(&shuffled)
    } else {
        preliminary_bracket_rounds(&shuffled)
    };
    debug!("seeded {n} players into {} knockout rounds", rounds.len());

    KnockoutBracket {
        rounds,
        winner: None,
    }
}

/// Rounds for a power-of-two field: Round 1 pairs the shuffled players
/// sequentially and every later round starts fully open.
fn full_bracket_rounds(shuffled: &[Player]) -> Vec<Round> {
    let total = shuffled.len().ilog2() as usize;
    let mut rounds = Vec::with_capacity(total);

    let first: Vec<Match> = shuffled
        .chunks_exact(2)
        .enumerate()
        .map(|(j, pair)| {
            Match::seeded(
                format!("r0m{j}"),
                Some(pair[0].clone()),
                Some(pair[1].clone()),
            )
        })
        .collect();
    let mut matches_in_round = first.len();
    rounds.push(Round {
        name: stage_name(0, total, "Final"),
        matches: first,
    });

    for i in 1..total {
        matches_in_round /= 2;
        rounds.push(open_round(i, matches_in_round, stage_name(i, total, "Final")));
    }
    rounds
}

/// Rounds for a non-power-of-two field of size N. With P the largest power
/// of two at most N, the last 2(N - P) shuffled players contest N - P
/// preliminary matches and the remaining 2P - N players get a bye into
/// Round 1. Round 1 is laid out as bye-pair matches, then matches holding
/// one bye plus one slot reserved for a preliminary winner, then (only when
/// preliminary winners outnumber byes) matches with both slots reserved.
/// Reserved slots map onto preliminary matches in order; see
/// [`super::progression::preliminary_target`], which derives the same
/// layout. Every reserved slot receives exactly one preliminary winner.
fn preliminary_bracket_rounds(shuffled: &[Player]) -> Vec<Round> {
    let n = shuffled.len();
    let main_field = 1usize << n.ilog2();
    let prelim_count = n - main_field;
    let (byes, prelim_players) = shuffled.split_at(n - 2 * prelim_count);

    let prelim: Vec<Match> = prelim_players
        .chunks_exact(2)
        .enumerate()
        .map(|(j, pair)| {
            Match::seeded(
                format!("pr{j}"),
                Some(pair[0].clone()),
                Some(pair[1].clone()),
            )
        })
        .collect();

    let total = main_field.ilog2() as usize;
    let mut rounds = Vec::with_capacity(total + 1);
    rounds.push(Round {
        name: PRELIMINARY_ROUND_NAME.to_string(),
        matches: prelim,
    });

    let mut first = Vec::with_capacity(main_field / 2);
    let bye_pairs = byes.len().saturating_sub(prelim_count) / 2;
    let mut cursor = 0;
    for pair in byes[..2 * bye_pairs].chunks_exact(2) {
        first.push(Match::seeded(
            format!("r0m{}", first.len()),
            Some(pair[0].clone()),
            Some(pair[1].clone()),
        ));
        cursor += 2;
    }
    while cursor < byes.len() {
        first.push(Match::seeded(
            format!("r0m{}", first.len()),
            Some(byes[cursor].clone()),
            None,
        ));
        cursor += 1;
    }
    while first.len() < main_field / 2 {
        first.push(Match::open(format!("r0m{}", first.len())));
    }

    let mut matches_in_round = first.len();
    rounds.push(Round {
        name: stage_name(0, total, "Final"),
        matches: first,
    });

    for i in 1..total {
        matches_in_round /= 2;
        rounds.push(open_round(i, matches_in_round, stage_name(i, total, "Final")));
    }
    rounds
}

fn open_round(main_index: usize, matches: usize, name: String) -> Round {
    Round {
        name,
        matches: (0..matches)
            .map(|j| Match::open(format!("r{main_index}m{j}")))
            .collect(),
    }
}
