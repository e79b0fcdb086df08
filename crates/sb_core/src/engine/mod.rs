//! The scorebook engine: derived batting fields, half-inning boundary
//! detection, linescore reconciliation and presentation mapping.

pub mod boundary;
pub mod derived;
pub mod linescore;
pub mod reconcile;

pub use boundary::{completed_batting_innings, completed_half_innings, OUTS_PER_HALF_INNING};
pub use derived::{derive_stat_line, singles_from_stored, DerivedLine, EntryMode, LineInputs};
pub use linescore::{LinescoreView, TeamLine};
pub use reconcile::{reconcile_linescore, GameSnapshot, InningUpsert};
