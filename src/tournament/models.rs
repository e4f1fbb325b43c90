//! Shared tournament data models.

use enum_dispatch::enum_dispatch;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::group::{self, GroupTournament};
use crate::knockout::{self, KnockoutTournament};

/// Opaque player identifier. Players are referenced by id everywhere;
/// the id is never reinterpreted by the engine.
pub type PlayerId = String;

/// Identifier of a knockout match, stable across the tournament's lifetime.
pub type MatchId = String;

/// Identifier of a group-advancement race.
pub type RaceId = String;

/// A recorded match score.
pub type Score = u32;

/// A 1-based finish rank within a race.
pub type FinishPosition = u32;

/// Errors surfaced by the optional validation helpers.
///
/// The progression engines themselves never fail: unknown references are
/// silent no-ops and malformed inputs degrade to "incomplete". These errors
/// exist so callers can reject bad input before submitting it.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum BracketError {
    #[error("finish position {0} appears more than once")]
    DuplicatePosition(FinishPosition),

    #[error("expected {expected} positions, got {got}")]
    PositionCountMismatch { expected: usize, got: usize },
}

/// A tournament participant.
///
/// Identity is by `id`; every bracket slot holds a back-reference to a
/// roster member, never an independent copy with its own identity.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a player with a freshly minted id.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    /// Create a player with a caller-supplied id.
    #[must_use]
    pub fn with_id(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

/// Read-only summary common to every tournament format.
#[enum_dispatch]
pub trait BracketSummary {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn players(&self) -> &[Player];
    fn winner(&self) -> Option<&Player>;

    /// A tournament is complete once its champion is decided.
    fn is_complete(&self) -> bool {
        self.winner().is_some()
    }
}

/// A tournament of any supported format.
///
/// Formats are a closed set and every consumer matches exhaustively;
/// field-presence checks are never used to tell variants apart.
#[enum_dispatch(BracketSummary)]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "game")]
pub enum Tournament {
    Knockout(KnockoutTournament),
    GroupAdvancement(GroupTournament),
}

impl Tournament {
    /// Submit a score for one knockout match.
    ///
    /// Submitting to a non-knockout tournament is a no-op, consistent with
    /// how the engines treat any reference the current state can't satisfy.
    #[must_use]
    pub fn submit_knockout_score(self, match_id: &str, scores: [Score; 2]) -> Self {
        match self {
            Self::Knockout(t) => Self::Knockout(knockout::submit_score(t, match_id, scores)),
            other => {
                warn!("knockout score submitted to a non-knockout tournament");
                other
            }
        }
    }

    /// Submit finishing positions for one group-advancement race.
    #[must_use]
    pub fn submit_race_result(
        self,
        round_idx: usize,
        race_idx: usize,
        positions: &[Option<FinishPosition>],
    ) -> Self {
        match self {
            Self::GroupAdvancement(t) => Self::GroupAdvancement(group::submit_race_result(
                t, round_idx, race_idx, positions,
            )),
            other => {
                warn!("race result submitted to a non-group tournament");
                other
            }
        }
    }

    /// Withdraw a player from the tournament.
    ///
    /// The player is dropped from the roster and every slot, match winner,
    /// and tournament winner that referenced them is blanked. The bracket
    /// shape is untouched.
    #[must_use]
    pub fn remove_player(mut self, player_id: &str) -> Self {
        match &mut self {
            Self::Knockout(t) => {
                t.players.retain(|p| p.id != player_id);
                for round in &mut t.rounds {
                    for m in &mut round.matches {
                        for slot in &mut m.players {
                            if slot.as_ref().is_some_and(|p| p.id == player_id) {
                                *slot = None;
                            }
                        }
                        if m.winner_id.as_deref() == Some(player_id) {
                            m.winner_id = None;
                        }
                    }
                }
                if t.winner.as_ref().is_some_and(|p| p.id == player_id) {
                    t.winner = None;
                }
            }
            Self::GroupAdvancement(t) => {
                t.players.retain(|p| p.id != player_id);
                for round in &mut t.rounds {
                    for race in &mut round.races {
                        let mut touched = false;
                        for i in 0..race.players.len() {
                            if race.players[i].as_ref().is_some_and(|p| p.id == player_id) {
                                race.players[i] = None;
                                race.positions[i] = None;
                                touched = true;
                            }
                        }
                        if touched {
                            race.recompute_finished();
                        }
                    }
                }
                if t.winner.as_ref().is_some_and(|p| p.id == player_id) {
                    t.winner = None;
                }
            }
        }
        self
    }
}

/// Name a stage by its distance from the final.
pub(crate) fn stage_name(index: usize, total: usize, final_name: &str) -> String {
    match total - index {
        1 => final_name.to_string(),
        2 => "Semifinals".to_string(),
        3 => "Quarterfinals".to_string(),
        _ => format!("Round {}", index + 1),
    }
}
