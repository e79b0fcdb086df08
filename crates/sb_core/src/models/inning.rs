use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded half-inning for one team, keyed by (game, team, inning).
///
/// Attribution-swap convention: `errors` on a team's entry are the
/// *opposing* (fielding) team's errors committed while this team batted,
/// not this team's own. Storage and display both honor this; the swap back
/// happens in the linescore view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningEntry {
    pub id: String,
    pub game_id: String,
    pub team_id: String,
    pub inning: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub errors: u32,
}

impl InningEntry {
    /// Fresh entry with a generated row id and zeroed counts.
    pub fn new(
        game_id: impl Into<String>,
        team_id: impl Into<String>,
        inning: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            game_id: game_id.into(),
            team_id: team_id.into(),
            inning,
            runs: 0,
            hits: 0,
            errors: 0,
        }
    }

    /// An empty entry is a skeleton left behind when the fielding side's
    /// sheet was saved before the batting side's. Only these may be
    /// recomputed by a later reconciliation.
    pub fn is_empty(&self) -> bool {
        self.runs == 0 && self.hits == 0
    }
}
