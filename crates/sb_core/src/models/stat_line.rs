use serde::{Deserialize, Serialize};

/// One player's full line for one game, as submitted from the score sheet.
///
/// The sheet is saved wholesale each time (full upsert keyed by
/// player + game), never patched field by field. `plate_appearances`,
/// `at_bats` and `hits` are stored as plain integers but are always produced
/// by the derived-field calculator, never typed in directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStatLine {
    pub player_id: String,
    pub game_id: String,
    pub team_id: String,
    #[serde(default)]
    pub is_starter: bool,
    /// Lineup slot, `None` for bench players.
    #[serde(default)]
    pub batting_order: Option<u8>,
    // Batting
    #[serde(default)]
    pub plate_appearances: u32,
    #[serde(default)]
    pub at_bats: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub doubles: u32,
    #[serde(default)]
    pub triples: u32,
    #[serde(default)]
    pub home_runs: u32,
    #[serde(default)]
    pub rbi: u32,
    #[serde(default)]
    pub walks: u32,
    #[serde(default)]
    pub strikeouts: u32,
    #[serde(default)]
    pub stolen_bases: u32,
    #[serde(default)]
    pub caught_stealing: u32,
    #[serde(default)]
    pub hit_by_pitch: u32,
    #[serde(default)]
    pub sacrifice_flies: u32,
    #[serde(default)]
    pub sacrifice_bunts: u32,
    // Fielding
    #[serde(default)]
    pub putouts: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub errors: u32,
}

impl GameStatLine {
    pub fn new(
        player_id: impl Into<String>,
        game_id: impl Into<String>,
        team_id: impl Into<String>,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            game_id: game_id.into(),
            team_id: team_id.into(),
            ..Default::default()
        }
    }
}

/// Per-team cumulative totals for a game.
///
/// Derived on demand from the full set of stat lines; never persisted or
/// cached. Successive snapshots of these totals are what the reconciler
/// diffs against the recorded innings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTotals {
    pub runs: u32,
    pub hits: u32,
    pub putouts: u32,
    pub errors: u32,
}

impl GameTotals {
    /// Sum one team's lines out of a mixed per-game set.
    pub fn from_lines<'a>(
        lines: impl IntoIterator<Item = &'a GameStatLine>,
        team_id: &str,
    ) -> Self {
        let mut totals = GameTotals::default();
        for line in lines.into_iter().filter(|l| l.team_id == team_id) {
            totals.runs += line.runs;
            totals.hits += line.hits;
            totals.putouts += line.putouts;
            totals.errors += line.errors;
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_sum_only_requested_team() {
        let mut a = GameStatLine::new("p1", "g1", "away-1");
        a.runs = 2;
        a.hits = 3;
        a.putouts = 3;
        let mut b = GameStatLine::new("p2", "g1", "away-1");
        b.runs = 1;
        b.errors = 1;
        let mut other = GameStatLine::new("p3", "g1", "home-1");
        other.runs = 9;
        other.putouts = 6;

        let lines = [a, b, other];
        let away = GameTotals::from_lines(&lines, "away-1");
        assert_eq!(away.runs, 3);
        assert_eq!(away.hits, 3);
        assert_eq!(away.putouts, 3);
        assert_eq!(away.errors, 1);

        let home = GameTotals::from_lines(&lines, "home-1");
        assert_eq!(home.runs, 9);
        assert_eq!(home.putouts, 6);
    }

    #[test]
    fn test_totals_empty_for_unknown_team() {
        let lines: Vec<GameStatLine> = Vec::new();
        assert_eq!(GameTotals::from_lines(&lines, "away-1"), GameTotals::default());
    }
}
