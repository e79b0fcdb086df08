//! Linescore delta reconciler.
//!
//! The scorer never tells the system "inning N just ended". Instead, every
//! time a team's full sheet is (re-)submitted, the reconciler compares the
//! completed half-inning count inferred from putouts against the innings
//! already on record, and attributes the unaccounted-for runs, hits and
//! errors to the most recently completed half for each side.
//!
//! Rules, per side:
//!
//! 1. `n = completed_half_innings(fielding team putouts)`; nothing to do
//!    while `n == 0`.
//! 2. An existing non-empty entry for inning `n` is never recomputed, no
//!    matter what the cumulative totals now say. Empty entries (skeleton
//!    rows from a fielding-side-first save) are fair game.
//! 3. The inning's counts are the cumulative totals minus the sums over
//!    innings `1..n-1`, clamped at zero (totals can be corrected downward
//!    after the fact).
//!
//! Safe to call any number of times with the same or growing totals.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::engine::boundary::completed_batting_innings;
use crate::models::{Game, GameStatLine, GameTotals, InningEntry, TeamSide};

/// All rows the reconciler needs, read once up front. The engine is a pure
/// function over this snapshot; nothing is loaded or written from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: Game,
    #[serde(default)]
    pub stat_lines: Vec<GameStatLine>,
    #[serde(default)]
    pub innings: Vec<InningEntry>,
}

impl GameSnapshot {
    pub fn totals(&self, team_id: &str) -> GameTotals {
        GameTotals::from_lines(&self.stat_lines, team_id)
    }
}

/// A row to persist, keyed by (game, team, inning). Row ids are the
/// store's concern; an upsert onto an existing entry keeps its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningUpsert {
    pub game_id: String,
    pub team_id: String,
    pub inning: u32,
    pub runs: u32,
    pub hits: u32,
    /// Fielding team's errors, charged to this (batting) team's row per the
    /// attribution-swap convention.
    pub errors: u32,
}

/// Reconcile both sides of a game. Returns the rows to persist, away side
/// first; an empty result means the stored innings already account for the
/// cumulative totals.
pub fn reconcile_linescore(snapshot: &GameSnapshot) -> Vec<InningUpsert> {
    let game = &snapshot.game;
    let away = snapshot.totals(&game.away_team_id);
    let home = snapshot.totals(&game.home_team_id);

    let mut upserts = Vec::new();
    for side in [TeamSide::Away, TeamSide::Home] {
        let n = completed_batting_innings(side, &away, &home);
        let (batting, fielding) = match side {
            TeamSide::Away => (&away, &home),
            TeamSide::Home => (&home, &away),
        };
        if let Some(upsert) = reconcile_side(game, side, n, batting, fielding, &snapshot.innings)
        {
            upserts.push(upsert);
        }
    }
    upserts
}

fn reconcile_side(
    game: &Game,
    side: TeamSide,
    n: u32,
    batting: &GameTotals,
    fielding: &GameTotals,
    innings: &[InningEntry],
) -> Option<InningUpsert> {
    if n == 0 {
        return None;
    }

    let team_id = game.team_id(side);
    let existing = innings
        .iter()
        .find(|e| e.team_id == team_id && e.inning == n);
    if let Some(entry) = existing {
        if !entry.is_empty() {
            // Finalized or manually corrected; never clobbered.
            return None;
        }
    }

    let mut prior = GameTotals::default();
    for entry in innings.iter().filter(|e| e.team_id == team_id && e.inning < n) {
        prior.runs += entry.runs;
        prior.hits += entry.hits;
        prior.errors += entry.errors;
    }

    let upsert = InningUpsert {
        game_id: game.id.clone(),
        team_id: team_id.to_string(),
        inning: n,
        runs: clamped_delta(batting.runs, prior.runs, "runs", team_id, n),
        hits: clamped_delta(batting.hits, prior.hits, "hits", team_id, n),
        errors: errors_charged_to_batting_row(fielding, &prior, team_id, n),
    };

    // Rewriting a skeleton with the identical values would be a no-op row;
    // suppressing it keeps repeated reconciliation write-free.
    if let Some(entry) = existing {
        if (entry.runs, entry.hits, entry.errors) == (upsert.runs, upsert.hits, upsert.errors)
        {
            return None;
        }
    }
    Some(upsert)
}

/// Attribution swap, store side: the *fielding* team's cumulative errors,
/// net of prior innings, land on the batting team's row. The linescore view
/// performs the matching swap back for display.
fn errors_charged_to_batting_row(
    fielding: &GameTotals,
    prior: &GameTotals,
    batting_team_id: &str,
    inning: u32,
) -> u32 {
    clamped_delta(fielding.errors, prior.errors, "errors", batting_team_id, inning)
}

/// Cumulative total minus prior innings, floored at zero. A negative delta
/// means a total was corrected downward after earlier innings were
/// recorded; the loss is absorbed but logged.
fn clamped_delta(total: u32, prior: u32, stat: &str, team_id: &str, inning: u32) -> u32 {
    if prior > total {
        warn!(
            "{} delta for team {} inning {} is negative ({} cumulative vs {} already recorded); clamping to 0",
            stat, team_id, inning, total, prior
        );
        return 0;
    }
    total - prior
}
