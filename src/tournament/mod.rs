//! Shared tournament models and format dispatch.
//!
//! This module holds everything common to the supported tournament formats:
//! - Player and identifier types
//! - The [`Tournament`] tagged enum over the format-specific structures
//! - The [`BracketSummary`] read-only trait dispatched across formats
//! - Roster withdrawal ([`Tournament::remove_player`])
//!
//! Format-specific construction and progression live in [`crate::knockout`]
//! and [`crate::group`].

pub mod models;

pub use models::{
    BracketError, BracketSummary, FinishPosition, MatchId, Player, PlayerId, RaceId, Score,
    Tournament,
};
