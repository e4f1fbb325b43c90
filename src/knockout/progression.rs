//! Knockout result propagation.
//!
//! [`submit_score`] records a score, derives the match winner, advances the
//! winner into its fixed downstream slot and, when the submission overturns
//! a previously recorded winner, invalidates every downstream result that
//! chain had produced. The whole operation is a pure transformation of one
//! tournament snapshot into the next.

use log::{debug, warn};

use super::models::{KnockoutTournament, Round};
use crate::tournament::models::Score;

/// Record a score for one match and propagate the outcome.
///
/// The winner is the player with the higher first score; a tie is resolved
/// in favor of slot 0 by definition. An unknown `match_id` is a silent
/// no-op. A score correction that keeps the winner touches nothing
/// downstream; one that changes the winner resets the downstream match it
/// feeds and keeps resetting along the stale winner's advancement chain,
/// clearing the tournament winner if the chain had decided it.
#[must_use]
pub fn submit_score(
    mut tournament: KnockoutTournament,
    match_id: &str,
    scores: [Score; 2],
) -> KnockoutTournament {
    let Some((round_idx, match_idx)) = tournament.find_match(match_id) else {
        warn!("ignoring score for unknown match {match_id}");
        return tournament;
    };

    let last_round = tournament.rounds.len() - 1;
    let current = &mut tournament.rounds[round_idx].matches[match_idx];
    let previous_winner = current.winner_id.clone();
    current.scores = [Some(scores[0]), Some(scores[1])];

    let winner = match (&current.players[0], &current.players[1]) {
        (Some(home), Some(away)) => Some(if scores[0] >= scores[1] {
            home.clone()
        } else {
            away.clone()
        }),
        // A half-filled match keeps its scores but derives no winner.
        _ => None,
    };
    current.winner_id = winner.as_ref().map(|p| p.id.clone());

    if round_idx == last_round {
        tournament.winner = winner;
        return tournament;
    }

    let Some(winner) = winner else {
        return tournament;
    };
    if previous_winner.as_deref() == Some(winner.id.as_str()) {
        return tournament;
    }

    let (next_match, slot) = advancement_target(&tournament.rounds, round_idx, match_idx);
    debug!(
        "advancing {} from {match_id} into round {} match {next_match} slot {slot}",
        winner.id,
        round_idx + 1
    );
    tournament.rounds[round_idx + 1].matches[next_match].players[slot] = Some(winner);
    if previous_winner.is_some() {
        invalidate_result(&mut tournament, round_idx + 1, next_match);
    }
    tournament
}

/// Clear a match result that depended on a superseded upstream winner, and
/// chase the stale winner out of every later round it had reached.
fn invalidate_result(tournament: &mut KnockoutTournament, round_idx: usize, match_idx: usize) {
    let last_round = tournament.rounds.len() - 1;
    let stale = {
        let m = &mut tournament.rounds[round_idx].matches[match_idx];
        let stale = m.winner_id.clone();
        m.reset_result();
        stale
    };
    let Some(stale_id) = stale else {
        return;
    };

    if round_idx == last_round {
        if tournament
            .winner
            .as_ref()
            .is_some_and(|p| p.id == stale_id)
        {
            tournament.winner = None;
        }
        return;
    }

    let (next_match, slot) = advancement_target(&tournament.rounds, round_idx, match_idx);
    let occupied = tournament.rounds[round_idx + 1].matches[next_match].players[slot]
        .as_ref()
        .is_some_and(|p| p.id == stale_id);
    if occupied {
        tournament.rounds[round_idx + 1].matches[next_match].players[slot] = None;
        invalidate_result(tournament, round_idx + 1, next_match);
    }
}

/// The (match, slot) in the next round a winner advances into.
///
/// Main-bracket matches feed match `idx / 2`, slot `idx % 2`. Preliminary
/// matches feed the slots Round 1 reserved for them at build time; the
/// mapping is derived from the bracket shape alone, never by scanning for
/// open slots, so replays land in the same place every time.
fn advancement_target(rounds: &[Round], round_idx: usize, match_idx: usize) -> (usize, usize) {
    if rounds[round_idx].is_preliminary() {
        preliminary_target(
            rounds[round_idx + 1].matches.len(),
            rounds[round_idx].matches.len(),
            match_idx,
        )
    } else {
        (match_idx / 2, match_idx % 2)
    }
}

/// Fixed mapping from a preliminary match to its reserved Round-1 slot.
///
/// Round 1 is laid out as bye pairs, then one-bye matches whose second slot
/// is reserved, then fully reserved matches. Reserved slots are handed to
/// preliminary matches in order. Mirrors the layout produced by
/// [`super::builder`].
pub(super) fn preliminary_target(
    round1_len: usize,
    prelim_count: usize,
    prelim_idx: usize,
) -> (usize, usize) {
    let byes = 2 * round1_len - prelim_count;
    let bye_pairs = byes.saturating_sub(prelim_count) / 2;
    if prelim_idx < byes {
        (bye_pairs + prelim_idx, 1)
    } else {
        let overflow = prelim_idx - byes;
        (bye_pairs + byes + overflow / 2, overflow % 2)
    }
}
