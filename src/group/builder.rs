//! Group-advancement ladder seeding.
//!
//! Partitions the field into heats of 2-4 players per round and generates
//! rounds until the pool converges to a single final heat.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::models::{GroupBracket, Race, RaceRound};
use crate::tournament::models::{Player, stage_name};

/// Partition a pool into heat sizes.
///
/// Heats of 4 are preferred. The remainder never produces a heat of 1 and
/// an all-3s tail beats a trailing heat of 2: `T mod 4 == 1` splits one
/// four into 3 + 2, `T mod 4 == 2` splits one four into 3 + 3, and
/// `T mod 4 == 3` appends a single 3. A pool of at most 4 is one heat.
pub(crate) fn partition_heats(pool: usize) -> Vec<usize> {
    if pool <= 4 {
        return vec![pool];
    }
    let fours = pool / 4;
    match pool % 4 {
        0 => vec![4; fours],
        1 => {
            let mut sizes = vec![4; fours - 1];
            sizes.extend([3, 2]);
            sizes
        }
        2 => {
            let mut sizes = vec![4; fours - 1];
            sizes.extend([3, 3]);
            sizes
        }
        _ => {
            let mut sizes = vec![4; fours];
            sizes.push(3);
            sizes
        }
    }
}

/// How many players a heat sends forward. Heats of 3 or 4 advance two,
/// heats of 2 advance one, and the final heat crowns exactly one champion.
pub(crate) fn advancement_for(heat_size: usize, is_final: bool) -> usize {
    if is_final || heat_size == 2 { 1 } else { 2 }
}

/// Seed players into a group-advancement ladder with a uniform shuffle.
///
/// Fewer than two players yields an empty bracket.
#[must_use]
pub fn build_bracket(players: &[Player]) -> GroupBracket {
    build_bracket_with_rng(players, &mut rand::rng())
}

/// Seed players into a group-advancement ladder using a caller-supplied RNG.
#[must_use]
pub fn build_bracket_with_rng<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> GroupBracket {
    let n = players.len();
    if n < 2 {
        return GroupBracket {
            rounds: Vec::new(),
            winner: None,
        };
    }

    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    // Partition every round up front so names can count down to the final.
    let mut partitions = Vec::new();
    let mut pool = n;
    loop {
        let sizes = partition_heats(pool);
        let is_single = sizes.len() == 1;
        pool = sizes.iter().map(|&s| advancement_for(s, is_single)).sum();
        partitions.push(sizes);
        if is_single {
            break;
        }
    }
    let total = partitions.len();
    debug!("seeded {n} players into a {total}-round heat ladder");

    let rounds = partitions
        .iter()
        .enumerate()
        .map(|(i, sizes)| {
            let is_final_round = i + 1 == total;
            let mut cursor = 0;
            let races = sizes
                .iter()
                .enumerate()
                .map(|(j, &size)| {
                    let id = format!("r{i}h{j}");
                    let advancement = advancement_for(size, is_final_round);
                    if i == 0 {
                        let heat = shuffled[cursor..cursor + size].to_vec();
                        cursor += size;
                        Race::seeded(id, heat, advancement)
                    } else {
                        Race::open(id, size, advancement)
                    }
                })
                .collect();
            RaceRound {
                name: stage_name(i, total, "Final Race"),
                races,
            }
        })
        .collect();

    GroupBracket {
        rounds,
        winner: None,
    }
}
