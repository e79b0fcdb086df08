//! Storage seam.
//!
//! Persistence itself lives outside this crate; [`GameStore`] is the trait
//! the surrounding application implements over its relational store.
//! [`MemoryStore`] backs the tests and the CLI.
//!
//! Writes are serialized upstream (one scorer per game), so there is no
//! locking here. A reader may observe a partially reconciled linescore
//! between a stat upsert and the inning upsert that follows it; the next
//! reconciliation converges it.

use std::collections::HashMap;

use crate::engine::reconcile::{reconcile_linescore, GameSnapshot, InningUpsert};
use crate::error::{Result, StoreError};
use crate::models::{Game, GameStatLine, InningEntry};

pub trait GameStore {
    fn game(&self, game_id: &str) -> Result<Option<Game>>;
    fn stat_lines(&self, game_id: &str) -> Result<Vec<GameStatLine>>;
    fn inning_entries(&self, game_id: &str) -> Result<Vec<InningEntry>>;
    /// Full-sheet upsert keyed by (player, game).
    fn upsert_stat_lines(&mut self, lines: &[GameStatLine]) -> Result<()>;
    /// Upsert keyed by (game, team, inning); an existing row keeps its id.
    fn upsert_innings(&mut self, game_id: &str, upserts: &[InningUpsert]) -> Result<()>;
}

/// Load a snapshot, reconcile, persist whatever came out. A game that does
/// not exist, or has no recorded stats yet, yields an empty result rather
/// than an error.
pub fn reconcile_game<S: GameStore>(store: &mut S, game_id: &str) -> Result<Vec<InningUpsert>> {
    let Some(game) = store.game(game_id)? else {
        return Ok(Vec::new());
    };
    let snapshot = GameSnapshot {
        game,
        stat_lines: store.stat_lines(game_id)?,
        innings: store.inning_entries(game_id)?,
    };
    let upserts = reconcile_linescore(&snapshot);
    if !upserts.is_empty() {
        store.upsert_innings(game_id, &upserts)?;
    }
    Ok(upserts)
}

/// Save a team's full sheet, then reconcile the linescore. The two steps
/// are one logical operation for the caller: if the inning upsert fails the
/// whole submission is reported failed, even though the already committed
/// stat upsert is not rolled back.
pub fn submit_team_sheet<S: GameStore>(
    store: &mut S,
    game_id: &str,
    lines: &[GameStatLine],
) -> Result<Vec<InningUpsert>> {
    store.upsert_stat_lines(lines)?;
    reconcile_game(store, game_id)
}

/// In-memory store for tests and the CLI.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: HashMap<String, Game>,
    /// Keyed by (game_id, player_id).
    stat_lines: HashMap<(String, String), GameStatLine>,
    /// Keyed by (game_id, team_id, inning).
    innings: HashMap<(String, String, u32), InningEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_game(&mut self, game: Game) {
        self.games.insert(game.id.clone(), game);
    }

    /// Seed a full snapshot at once.
    pub fn load_snapshot(&mut self, snapshot: GameSnapshot) {
        for line in &snapshot.stat_lines {
            self.stat_lines
                .insert((line.game_id.clone(), line.player_id.clone()), line.clone());
        }
        for entry in &snapshot.innings {
            self.innings.insert(
                (entry.game_id.clone(), entry.team_id.clone(), entry.inning),
                entry.clone(),
            );
        }
        self.insert_game(snapshot.game);
    }
}

impl GameStore for MemoryStore {
    fn game(&self, game_id: &str) -> Result<Option<Game>> {
        Ok(self.games.get(game_id).cloned())
    }

    fn stat_lines(&self, game_id: &str) -> Result<Vec<GameStatLine>> {
        let mut lines: Vec<GameStatLine> = self
            .stat_lines
            .values()
            .filter(|l| l.game_id == game_id)
            .cloned()
            .collect();
        lines.sort_by(|a, b| a.player_id.cmp(&b.player_id));
        Ok(lines)
    }

    fn inning_entries(&self, game_id: &str) -> Result<Vec<InningEntry>> {
        let mut entries: Vec<InningEntry> = self
            .innings
            .values()
            .filter(|e| e.game_id == game_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| (a.inning, &a.team_id).cmp(&(b.inning, &b.team_id)));
        Ok(entries)
    }

    fn upsert_stat_lines(&mut self, lines: &[GameStatLine]) -> Result<()> {
        for line in lines {
            self.stat_lines
                .insert((line.game_id.clone(), line.player_id.clone()), line.clone());
        }
        Ok(())
    }

    fn upsert_innings(&mut self, game_id: &str, upserts: &[InningUpsert]) -> Result<()> {
        if !self.games.contains_key(game_id) {
            return Err(StoreError::Backend(format!("unknown game: {game_id}")));
        }
        for up in upserts {
            let key = (up.game_id.clone(), up.team_id.clone(), up.inning);
            match self.innings.get_mut(&key) {
                Some(entry) => {
                    entry.runs = up.runs;
                    entry.hits = up.hits;
                    entry.errors = up.errors;
                }
                None => {
                    let mut entry =
                        InningEntry::new(up.game_id.clone(), up.team_id.clone(), up.inning);
                    entry.runs = up.runs;
                    entry.hits = up.hits;
                    entry.errors = up.errors;
                    self.innings.insert(key, entry);
                }
            }
        }
        Ok(())
    }
}
