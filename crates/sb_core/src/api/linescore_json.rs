//! JSON entry points for the three external operations: deriving a stat
//! line, reconciling a game's linescore, and mapping it for display.
//!
//! Requests and responses travel as JSON strings so host applications
//! don't have to link against the model types. Every response is wrapped
//! in [`ApiResponse`] with a schema version and timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::derived::{derive_stat_line, DerivedLine, LineInputs};
use crate::engine::linescore::LinescoreView;
use crate::engine::reconcile::{reconcile_linescore, GameSnapshot, InningUpsert};
use crate::models::{Game, InningEntry};

/// API version for schema compatibility.
pub const API_VERSION: &str = "v1";

/// Error codes carried in [`ApiError`].
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "E_INVALID_REQUEST";
    pub const SERIALIZATION: &str = "E_SERIALIZATION";
}

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError { code: code.to_string(), message: message.into() }),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeriveStatLineRequest {
    pub schema_version: Option<String>,
    pub inputs: LineInputs,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReconcileRequest {
    pub schema_version: Option<String>,
    pub snapshot: GameSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileResponse {
    pub upserts: Vec<InningUpsert>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinescoreViewRequest {
    pub schema_version: Option<String>,
    pub game: Game,
    #[serde(default)]
    pub innings: Vec<InningEntry>,
}

/// Compute the dependent fields (PA/AB/H) for one player's line.
pub fn derive_stat_line_json(request_json: &str) -> String {
    let request: DeriveStatLineRequest = match serde_json::from_str(request_json) {
        Ok(request) => request,
        Err(error) => {
            warn!("derive-stat-line request rejected: {error}");
            return to_json(ApiResponse::<DerivedLine>::error(
                error_codes::INVALID_REQUEST,
                error.to_string(),
            ));
        }
    };
    to_json(ApiResponse::success(derive_stat_line(&request.inputs)))
}

/// Reconcile a game snapshot into the inning rows to persist.
pub fn reconcile_linescore_json(request_json: &str) -> String {
    let request: ReconcileRequest = match serde_json::from_str(request_json) {
        Ok(request) => request,
        Err(error) => {
            warn!("reconcile request rejected: {error}");
            return to_json(ApiResponse::<ReconcileResponse>::error(
                error_codes::INVALID_REQUEST,
                error.to_string(),
            ));
        }
    };
    let upserts = reconcile_linescore(&request.snapshot);
    info!(
        game_id = %request.snapshot.game.id,
        upserts = upserts.len(),
        "linescore reconciled"
    );
    to_json(ApiResponse::success(ReconcileResponse { upserts }))
}

/// Map persisted inning rows into the per-team display view.
pub fn linescore_view_json(request_json: &str) -> String {
    let request: LinescoreViewRequest = match serde_json::from_str(request_json) {
        Ok(request) => request,
        Err(error) => {
            warn!("linescore-view request rejected: {error}");
            return to_json(ApiResponse::<LinescoreView>::error(
                error_codes::INVALID_REQUEST,
                error.to_string(),
            ));
        }
    };
    to_json(ApiResponse::success(LinescoreView::build(&request.game, &request.innings)))
}

fn to_json<T: Serialize>(response: ApiResponse<T>) -> String {
    serde_json::to_string(&response).unwrap_or_else(|error| {
        format!(
            r#"{{"success":false,"data":null,"error":{{"code":"{}","message":"{}"}},"schema_version":"{}","timestamp":null}}"#,
            error_codes::SERIALIZATION,
            error,
            API_VERSION
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_derive_stat_line_roundtrip() {
        let request = json!({
            "inputs": {
                "at_bats": 4,
                "walks": 1,
                "hit_by_pitch": 0,
                "sacrifice_flies": 1,
                "singles": 1,
                "doubles": 1,
                "triples": 0,
                "home_runs": 0
            }
        });
        let response: serde_json::Value =
            serde_json::from_str(&derive_stat_line_json(&request.to_string())).unwrap();
        assert_eq!(response["success"], true);
        assert_eq!(response["schema_version"], API_VERSION);
        assert_eq!(response["data"]["plate_appearances"], 6);
        assert_eq!(response["data"]["at_bats"], 4);
        assert_eq!(response["data"]["hits"], 2);
    }

    #[test]
    fn test_invalid_request_yields_error_envelope() {
        let response: serde_json::Value =
            serde_json::from_str(&derive_stat_line_json("not json")).unwrap();
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], error_codes::INVALID_REQUEST);
        assert!(response["data"].is_null());
    }

    #[test]
    fn test_reconcile_over_json() {
        let request = json!({
            "snapshot": {
                "game": {
                    "id": "game-1",
                    "away_team_id": "away-1",
                    "home_team_id": "home-1",
                    "game_date": "2026-05-03"
                },
                "stat_lines": [
                    {"player_id": "p1", "game_id": "game-1", "team_id": "away-1",
                     "runs": 2, "hits": 2},
                    {"player_id": "p2", "game_id": "game-1", "team_id": "home-1",
                     "putouts": 3}
                ]
            }
        });
        let response: serde_json::Value =
            serde_json::from_str(&reconcile_linescore_json(&request.to_string())).unwrap();
        assert_eq!(response["success"], true);
        let upserts = response["data"]["upserts"].as_array().unwrap();
        assert_eq!(upserts.len(), 1);
        assert_eq!(upserts[0]["team_id"], "away-1");
        assert_eq!(upserts[0]["inning"], 1);
        assert_eq!(upserts[0]["runs"], 2);
    }

    #[test]
    fn test_linescore_view_over_json() {
        let request = json!({
            "game": {
                "id": "game-1",
                "away_team_id": "away-1",
                "home_team_id": "home-1",
                "game_date": "2026-05-03"
            },
            "innings": [
                {"id": "r1", "game_id": "game-1", "team_id": "away-1",
                 "inning": 1, "runs": 2, "hits": 2, "errors": 1}
            ]
        });
        let response: serde_json::Value =
            serde_json::from_str(&linescore_view_json(&request.to_string())).unwrap();
        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["columns"], 7);
        assert_eq!(response["data"]["away"]["innings"][0], 2);
        // Away's stored errors belong to home's display row.
        assert_eq!(response["data"]["home"]["errors"], 1);
    }
}
