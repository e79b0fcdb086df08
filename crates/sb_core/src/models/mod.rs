//! Record types shared by the engine, store and API layers.

pub mod game;
pub mod inning;
pub mod stat_line;

pub use game::{Game, GameStatus, TeamSide, DEFAULT_INNINGS};
pub use inning::InningEntry;
pub use stat_line::{GameStatLine, GameTotals};
