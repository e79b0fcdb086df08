use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Regulation innings for league play (7-inning games).
pub const DEFAULT_INNINGS: u32 = 7;

/// Lifecycle of a scheduled game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Scheduled,
    InProgress,
    Final,
    Postponed,
    Cancelled,
}

/// Which bench a team occupies. Away bats the top half, home the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Away,
    Home,
}

impl TeamSide {
    pub fn opponent(self) -> TeamSide {
        match self {
            TeamSide::Away => TeamSide::Home,
            TeamSide::Home => TeamSide::Away,
        }
    }
}

/// A single scheduled or played game between two teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub away_team_id: String,
    pub home_team_id: String,
    pub game_date: NaiveDate,
    #[serde(default = "default_regulation_innings")]
    pub regulation_innings: u32,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub location: Option<String>,
    /// Final scores, entered when the game is closed out.
    #[serde(default)]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub home_score: Option<u32>,
}

fn default_regulation_innings() -> u32 {
    DEFAULT_INNINGS
}

impl Game {
    pub fn new(
        id: impl Into<String>,
        away_team_id: impl Into<String>,
        home_team_id: impl Into<String>,
        game_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            away_team_id: away_team_id.into(),
            home_team_id: home_team_id.into(),
            game_date,
            regulation_innings: DEFAULT_INNINGS,
            status: GameStatus::Scheduled,
            location: None,
            away_score: None,
            home_score: None,
        }
    }

    pub fn team_id(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Away => &self.away_team_id,
            TeamSide::Home => &self.home_team_id,
        }
    }

    /// Resolve a team id to its side, if the team plays in this game.
    pub fn side_of(&self, team_id: &str) -> Option<TeamSide> {
        if team_id == self.away_team_id {
            Some(TeamSide::Away)
        } else if team_id == self.home_team_id {
            Some(TeamSide::Home)
        } else {
            None
        }
    }
}
