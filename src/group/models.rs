//! Group-advancement (heat ladder) data models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tournament::models::{
    BracketError, BracketSummary, FinishPosition, Player, RaceId,
};

/// One grouped contest of 2-4 players producing ranked finishers.
///
/// `advancement_count` is fixed at creation. `positions[i]` is the 1-based
/// finish rank of `players[i]`; `is_finished` is derived and maintained by
/// the progression engine.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Race {
    pub id: RaceId,
    pub players: Vec<Option<Player>>,
    pub positions: Vec<Option<FinishPosition>>,
    pub advancement_count: usize,
    pub is_finished: bool,
}

impl Race {
    /// A race whose slots wait on advancement from the previous round.
    pub(crate) fn open(id: RaceId, size: usize, advancement_count: usize) -> Self {
        Self {
            id,
            players: vec![None; size],
            positions: vec![None; size],
            advancement_count,
            is_finished: false,
        }
    }

    pub(crate) fn seeded(id: RaceId, players: Vec<Player>, advancement_count: usize) -> Self {
        let size = players.len();
        Self {
            id,
            players: players.into_iter().map(Some).collect(),
            positions: vec![None; size],
            advancement_count,
            is_finished: false,
        }
    }

    /// Recompute the derived finished flag: every occupied slot has a
    /// position and at least one slot is occupied.
    pub(crate) fn recompute_finished(&mut self) {
        let occupied = self.players.iter().filter(|p| p.is_some()).count();
        self.is_finished = occupied > 0
            && self
                .players
                .iter()
                .zip(&self.positions)
                .all(|(player, position)| player.is_none() || position.is_some());
    }

    /// Occupied slots with a recorded position, best finisher first.
    ///
    /// Ranking is a stable sort on position, so duplicate positions (a
    /// caller input error) deterministically resolve to original slot
    /// order.
    pub fn ranked_finishers(&self) -> Vec<&Player> {
        let mut finishers: Vec<(&Player, FinishPosition)> = self
            .players
            .iter()
            .zip(&self.positions)
            .filter_map(|(player, position)| Some((player.as_ref()?, (*position)?)))
            .collect();
        finishers.sort_by_key(|&(_, position)| position);
        finishers.into_iter().map(|(player, _)| player).collect()
    }

    /// The players this heat sends forward, in rank order.
    pub fn advancers(&self) -> Vec<Player> {
        self.ranked_finishers()
            .into_iter()
            .take(self.advancement_count)
            .cloned()
            .collect()
    }

    /// Empty every slot and drop the result.
    pub(crate) fn clear(&mut self) {
        self.players.iter_mut().for_each(|p| *p = None);
        self.positions.iter_mut().for_each(|p| *p = None);
        self.is_finished = false;
    }
}

/// One chronological round of races.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RaceRound {
    pub name: String,
    pub races: Vec<Race>,
}

impl RaceRound {
    pub fn is_finished(&self) -> bool {
        self.races.iter().all(|r| r.is_finished)
    }

    /// Total players this round sends to the next one.
    pub fn advancing_total(&self) -> usize {
        self.races.iter().map(|r| r.advancement_count).sum()
    }
}

/// The structure a group-advancement builder produces.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GroupBracket {
    pub rounds: Vec<RaceRound>,
    pub winner: Option<Player>,
}

/// A group-advancement ladder tournament.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GroupTournament {
    pub id: String,
    pub name: String,
    pub players: Vec<Player>,
    pub rounds: Vec<RaceRound>,
    pub winner: Option<Player>,
}

impl GroupTournament {
    /// Create a tournament over a finalized roster, seeding the first
    /// round's heats with a uniform shuffle.
    #[must_use]
    pub fn new(name: &str, players: Vec<Player>) -> Self {
        let bracket = super::build_bracket(&players);
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            players,
            rounds: bracket.rounds,
            winner: bracket.winner,
        }
    }
}

impl BracketSummary for GroupTournament {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn players(&self) -> &[Player] {
        &self.players
    }

    fn winner(&self) -> Option<&Player> {
        self.winner.as_ref()
    }
}

/// Check a position array before submitting it: the length must match the
/// race's slot count and positions on occupied slots must be distinct.
///
/// The engine itself accepts anything (ties resolve by slot order), so this
/// is the place for callers who want hard rejection instead.
pub fn validate_positions(
    race: &Race,
    positions: &[Option<FinishPosition>],
) -> Result<(), BracketError> {
    if positions.len() != race.players.len() {
        return Err(BracketError::PositionCountMismatch {
            expected: race.players.len(),
            got: positions.len(),
        });
    }
    let mut seen = Vec::with_capacity(positions.len());
    for (player, position) in race.players.iter().zip(positions) {
        if player.is_none() {
            continue;
        }
        if let Some(position) = position {
            if seen.contains(position) {
                return Err(BracketError::DuplicatePosition(*position));
            }
            seen.push(*position);
        }
    }
    Ok(())
}
