//! Wire bodies for the record store tables.

use serde::Serialize;

use longshot_types::SessionId;

/// Row in `sessions`, inserted once at startup.
#[derive(Debug, Serialize)]
pub(crate) struct SessionRow {
    pub id: SessionId,
    pub started_at: String,
    pub last_active_at: String,
    pub completed: bool,
    pub sound_enabled: bool,
}

/// Partial update to the session row. `last_active_at` is filled on every
/// patch; the flags only when they change.
#[derive(Debug, Default, Serialize)]
pub(crate) struct SessionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_enabled: Option<bool>,
}

/// Row in `slide_progress`, upserted per (session, slide).
#[derive(Debug, Serialize)]
pub(crate) struct SlideProgressRow {
    pub session_id: SessionId,
    pub slide_number: usize,
    pub viewed_at: String,
    pub time_spent_seconds: u64,
}

/// Row in `experiment_results`, append-only.
#[derive(Debug, Serialize)]
pub(crate) struct ExperimentResultRow {
    pub session_id: SessionId,
    pub user_age: u8,
    pub years_needed: u64,
    pub generations_needed: u64,
}
