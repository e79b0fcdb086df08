//! JSON API surface for host applications.

pub mod linescore_json;

pub use linescore_json::{
    derive_stat_line_json, linescore_view_json, reconcile_linescore_json, ApiError, ApiResponse,
    API_VERSION,
};
