//! Half-inning boundary detection.
//!
//! Putouts accumulate only while a team is fielding, so a team's putout
//! total counts the half-innings the *other* team has finished batting:
//!
//! - home putouts -> completed **top** halves (away batting)
//! - away putouts -> completed **bottom** halves (home batting)
//!
//! Getting this mapping backwards silently attributes innings to the wrong
//! team, so all callers go through [`completed_batting_innings`] instead of
//! picking a putout total by hand.

use crate::models::{GameTotals, TeamSide};

/// Putouts needed to retire the side.
pub const OUTS_PER_HALF_INNING: u32 = 3;

/// Number of defensive half-innings a putout total accounts for.
pub fn completed_half_innings(putouts: u32) -> u32 {
    putouts / OUTS_PER_HALF_INNING
}

/// Completed batting half-innings for `batting`, derived from the
/// *fielding* team's cumulative putouts.
pub fn completed_batting_innings(
    batting: TeamSide,
    away: &GameTotals,
    home: &GameTotals,
) -> u32 {
    match batting {
        TeamSide::Away => completed_half_innings(home.putouts),
        TeamSide::Home => completed_half_innings(away.putouts),
    }
}
