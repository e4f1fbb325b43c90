//! Single-elimination knockout format.
//!
//! [`build_bracket`] seeds a shuffled field into a complete round structure,
//! inserting a preliminary round plus byes when the field is not a power of
//! two. [`submit_score`] records results and propagates winners forward,
//! invalidating any downstream results a corrected score supersedes.

pub mod builder;
pub mod models;
pub mod progression;

pub use builder::{build_bracket, build_bracket_with_rng};
pub use models::{KnockoutBracket, KnockoutTournament, Match, PRELIMINARY_ROUND_NAME, Round};
pub use progression::submit_score;
