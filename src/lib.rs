//! # Bracket Engine
//!
//! A bracket construction and progression engine for multi-format esports
//! tournaments.
//!
//! The crate covers the structural side of running a tournament: seeding an
//! arbitrary number of players into a valid bracket and deterministically
//! propagating results through it, including undoing downstream state when
//! an earlier result is retroactively corrected. Roster management,
//! persistence, and rendering are the caller's business; every operation
//! here is a pure transformation of one tournament snapshot into the next,
//! so callers serialize writes per tournament and persist whatever comes
//! back.
//!
//! ## Formats
//!
//! - **Knockout** ([`knockout`]): single elimination. Fields that are not a
//!   power of two get a preliminary round whose winners feed slots reserved
//!   in Round 1; everyone else receives a bye. Correcting a match score
//!   cascades: results that depended on the superseded winner are cleared
//!   all the way forward.
//! - **Group advancement** ([`group`]): players race in heats of 2-4, the
//!   top finishers refill the next round's heats, and rounds repeat until a
//!   single final heat crowns the champion. Any edited heat result resets
//!   and rebuilds the entire downstream ladder.
//!
//! ## Example
//!
//! ```
//! use bracket_engine::{Player, submit_knockout_score};
//! use bracket_engine::knockout::KnockoutTournament;
//!
//! let players: Vec<Player> = ["Ada", "Bo", "Cy", "Di"]
//!     .iter()
//!     .map(|name| Player::new(name))
//!     .collect();
//! let tournament = KnockoutTournament::new("Friday Cup", players);
//! let tournament = submit_knockout_score(tournament, "r0m0", [3, 1]);
//! assert!(tournament.rounds[0].matches[0].is_complete());
//! ```

/// Group-advancement ladder construction and progression.
pub mod group;
/// Knockout bracket construction and progression.
pub mod knockout;
/// Shared tournament models and format dispatch.
pub mod tournament;

pub use group::{
    build_bracket as build_group_advancement_bracket,
    submit_race_result as submit_group_advancement_result, validate_positions,
};
pub use knockout::{build_bracket as build_knockout_bracket, submit_score as submit_knockout_score};
pub use tournament::{
    BracketError, BracketSummary, FinishPosition, MatchId, Player, PlayerId, RaceId, Score,
    Tournament,
};
