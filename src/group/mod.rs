//! Group-advancement (heat ladder) format.
//!
//! [`build_bracket`] partitions a shuffled field into heats of 2-4 players
//! per round, converging to a single final heat. [`submit_race_result`]
//! records finishing positions and rebuilds the downstream ladder from the
//! edited round forward.

pub mod builder;
pub mod models;
pub mod progression;

pub use builder::{build_bracket, build_bracket_with_rng};
pub use models::{GroupBracket, GroupTournament, Race, RaceRound, validate_positions};
pub use progression::submit_race_result;
