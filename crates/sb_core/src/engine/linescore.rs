//! Linescore presentation mapping.
//!
//! Builds the classic R/H/E table from the persisted inning entries. This
//! is where the attribution-swap convention is undone: each stored entry
//! carries the *fielding* team's errors, so a team's displayed error total
//! is summed from the opposing team's rows.

use serde::{Deserialize, Serialize};

use crate::models::{Game, InningEntry, TeamSide};

/// One team's row of the linescore table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLine {
    pub team_id: String,
    /// Runs per inning, index 0 = inning one. `None` renders as a dash for
    /// half-innings not yet on record.
    pub innings: Vec<Option<u32>>,
    pub runs: u32,
    pub hits: u32,
    /// This team's own defensive errors (swapped back from the opponent's
    /// stored rows).
    pub errors: u32,
}

/// Per-team, per-inning view of a game's linescore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinescoreView {
    /// Inning columns shown: regulation count, or more once extra innings
    /// appear in the data.
    pub columns: u32,
    pub away: TeamLine,
    pub home: TeamLine,
}

impl LinescoreView {
    pub fn build(game: &Game, innings: &[InningEntry]) -> Self {
        let highest = innings.iter().map(|e| e.inning).max().unwrap_or(0);
        let columns = game.regulation_innings.max(highest);

        let away = team_line(game, TeamSide::Away, columns, innings);
        let home = team_line(game, TeamSide::Home, columns, innings);
        LinescoreView { columns, away, home }
    }
}

fn team_line(game: &Game, side: TeamSide, columns: u32, innings: &[InningEntry]) -> TeamLine {
    let team_id = game.team_id(side);
    let own: Vec<&InningEntry> = innings.iter().filter(|e| e.team_id == team_id).collect();

    let per_inning: Vec<Option<u32>> = (1..=columns)
        .map(|n| own.iter().find(|e| e.inning == n).map(|e| e.runs))
        .collect();
    let hits = own.iter().map(|e| e.hits).sum();

    // R column prefers the game's recorded running score; before one is
    // entered it falls back to the sum of the recorded innings.
    let score = match side {
        TeamSide::Away => game.away_score,
        TeamSide::Home => game.home_score,
    };
    let runs = score.unwrap_or_else(|| own.iter().map(|e| e.runs).sum());

    TeamLine {
        team_id: team_id.to_string(),
        innings: per_inning,
        runs,
        hits,
        errors: own_errors_total(game, side, innings),
    }
}

/// Attribution swap, display side: a team's own errors live on the
/// *opposing* team's stored rows.
fn own_errors_total(game: &Game, side: TeamSide, innings: &[InningEntry]) -> u32 {
    let opponent_id = game.team_id(side.opponent());
    innings
        .iter()
        .filter(|e| e.team_id == opponent_id)
        .map(|e| e.errors)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn game() -> Game {
        Game::new(
            "game-1",
            "away-1",
            "home-1",
            NaiveDate::from_ymd_opt(2026, 5, 3).unwrap(),
        )
    }

    fn entry(team_id: &str, inning: u32, runs: u32, hits: u32, errors: u32) -> InningEntry {
        InningEntry { runs, hits, errors, ..InningEntry::new("game-1", team_id, inning) }
    }

    #[test]
    fn test_error_totals_are_swapped_back() {
        // Scenario D: away row stored 2 errors (home's fielding), home row
        // stored 1 (away's fielding).
        let innings = vec![entry("away-1", 1, 0, 0, 2), entry("home-1", 1, 0, 0, 1)];
        let view = LinescoreView::build(&game(), &innings);
        assert_eq!(view.away.errors, 1);
        assert_eq!(view.home.errors, 2);
    }

    #[test]
    fn test_missing_innings_render_as_none() {
        let innings = vec![entry("away-1", 1, 2, 2, 0), entry("away-1", 3, 1, 1, 0)];
        let view = LinescoreView::build(&game(), &innings);
        assert_eq!(view.columns, 7);
        assert_eq!(view.away.innings[0], Some(2));
        assert_eq!(view.away.innings[1], None);
        assert_eq!(view.away.innings[2], Some(1));
        assert!(view.home.innings.iter().all(Option::is_none));
    }

    #[test]
    fn test_extra_innings_widen_the_table() {
        let innings = vec![entry("home-1", 9, 1, 1, 0)];
        let view = LinescoreView::build(&game(), &innings);
        assert_eq!(view.columns, 9);
        assert_eq!(view.home.innings.len(), 9);
        assert_eq!(view.home.innings[8], Some(1));
    }

    #[test]
    fn test_hits_total_from_own_rows() {
        let innings = vec![
            entry("away-1", 1, 2, 2, 0),
            entry("away-1", 2, 1, 2, 0),
            entry("home-1", 1, 0, 3, 0),
        ];
        let view = LinescoreView::build(&game(), &innings);
        assert_eq!(view.away.hits, 4);
        assert_eq!(view.home.hits, 3);
    }

    #[test]
    fn test_runs_fall_back_to_inning_sum() {
        let innings = vec![entry("away-1", 1, 2, 2, 0), entry("away-1", 2, 1, 1, 0)];
        let mut g = game();
        let view = LinescoreView::build(&g, &innings);
        assert_eq!(view.away.runs, 3);

        // A recorded final score wins over the inning sum.
        g.away_score = Some(4);
        let view = LinescoreView::build(&g, &innings);
        assert_eq!(view.away.runs, 4);
    }
}
