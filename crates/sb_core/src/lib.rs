//! # sb_core - League Scorebook Core
//!
//! Engine for a league scorebook: infers completed half-innings and
//! per-inning runs/hits/errors from the cumulative per-player totals a
//! scorer enters over the course of a game, keeps a player's derived
//! batting fields (PA/AB/H) consistent while the sheet is edited, and maps
//! the recorded innings into the classic R/H/E linescore table.
//!
//! ## Features
//! - Delta reconciliation that is safe to re-run on every sheet submission
//! - Non-empty innings are never overwritten by recalculation
//! - Explicit, auditable error attribution swap (store and display sides)
//! - JSON API for host applications

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod stats;
pub mod store;

// Re-export the main API functions
pub use api::{
    derive_stat_line_json, linescore_view_json, reconcile_linescore_json, ApiResponse,
};
pub use engine::{
    completed_batting_innings, completed_half_innings, derive_stat_line, reconcile_linescore,
    DerivedLine, EntryMode, GameSnapshot, InningUpsert, LineInputs, LinescoreView, TeamLine,
};
pub use error::StoreError;
pub use models::{
    Game, GameStatLine, GameStatus, GameTotals, InningEntry, TeamSide, DEFAULT_INNINGS,
};
pub use store::{reconcile_game, submit_team_sheet, GameStore, MemoryStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
