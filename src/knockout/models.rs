//! Knockout bracket data models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tournament::models::{BracketSummary, MatchId, Player, PlayerId, Score};

/// Name given to the extra round that trims a non-power-of-two field down
/// to the main bracket. It is never counted when naming the main rounds.
pub const PRELIMINARY_ROUND_NAME: &str = "Preliminary Round";

/// A single knockout match.
///
/// Slots stay empty until seeding or advancement fills them. `winner_id` is
/// derived from the recorded scores and is never set independently.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub players: [Option<Player>; 2],
    pub scores: [Option<Score>; 2],
    pub winner_id: Option<PlayerId>,
}

impl Match {
    /// A match with both slots reserved for later advancement.
    pub(crate) fn open(id: MatchId) -> Self {
        Self::seeded(id, None, None)
    }

    pub(crate) fn seeded(id: MatchId, home: Option<Player>, away: Option<Player>) -> Self {
        Self {
            id,
            players: [home, away],
            scores: [None, None],
            winner_id: None,
        }
    }

    /// The winning player, resolved against the occupied slots.
    pub fn winner(&self) -> Option<&Player> {
        let winner_id = self.winner_id.as_deref()?;
        self.players
            .iter()
            .flatten()
            .find(|p| p.id == winner_id)
    }

    pub fn is_complete(&self) -> bool {
        self.winner_id.is_some()
    }

    /// Drop the recorded result, keeping the participants in place.
    pub(crate) fn reset_result(&mut self) {
        self.scores = [None, None];
        self.winner_id = None;
    }
}

/// One chronological round of knockout matches.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Round {
    pub name: String,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn is_preliminary(&self) -> bool {
        self.name == PRELIMINARY_ROUND_NAME
    }
}

/// The structure a knockout builder produces: rounds plus an undecided
/// champion. The caller wraps it into a [`KnockoutTournament`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct KnockoutBracket {
    pub rounds: Vec<Round>,
    pub winner: Option<Player>,
}

/// A single-elimination tournament.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct KnockoutTournament {
    pub id: String,
    pub name: String,
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
    pub winner: Option<Player>,
}

impl KnockoutTournament {
    /// Create a tournament over a finalized roster, seeding the bracket
    /// with a uniform shuffle.
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

    /// Locate a match by id, returning its (round, match) indices.
    pub fn find_match(&self, match_id: &str) -> Option<(usize, usize)> {
        self.rounds.iter().enumerate().find_map(|(i, round)| {
            round
                .matches
                .iter()
                .position(|m| m.id == match_id)
                .map(|j| (i, j))
        })
    }
}

impl BracketSummary for KnockoutTournament {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str) -> Player {
        Player::with_id(id.to_string(), id)
    }

    #[test]
    fn test_match_winner_resolves_against_slots() {
        let mut m = Match::seeded("r0m0".into(), Some(player("a")), Some(player("b")));
        assert!(m.winner().is_none());

        m.scores = [Some(2), Some(1)];
        m.winner_id = Some("a".to_string());
        assert_eq!(m.winner().map(|p| p.id.as_str()), Some("a"));
        assert!(m.is_complete());
    }

    #[test]
    fn test_reset_result_keeps_participants() {
        let mut m = Match::seeded("r0m0".into(), Some(player("a")), Some(player("b")));
        m.scores = [Some(2), Some(1)];
        m.winner_id = Some("a".to_string());

        m.reset_result();
        assert_eq!(m.scores, [None, None]);
        assert!(m.winner_id.is_none());
        assert!(m.players.iter().all(Option::is_some));
    }

    #[test]
    fn test_find_match_by_id() {
        let players = (0..4).map(|i| player(&format!("p{i}"))).collect();
        let t = KnockoutTournament::new("Cup", players);
        assert_eq!(t.find_match("r0m1"), Some((0, 1)));
        assert_eq!(t.find_match("r1m0"), Some((1, 0)));
        assert_eq!(t.find_match("nope"), None);
    }
}
