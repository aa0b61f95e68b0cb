//! Best-effort session analytics.
//!
//! Records sessions, per-slide progress, and experiment results to a
//! PostgREST-style record store. Every public entry point is
//! fire-and-forget: it spawns the request and returns immediately, and a
//! failed or slow call is logged at warn and otherwise vanishes. Nothing
//! here may ever block or break navigation.
//!
//! The `send_*` methods are the spawned bodies, exposed so tests can await
//! them directly against a mock server.

mod records;

use std::sync::Arc;

use chrono::Utc;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use longshot_types::{SessionId, SlideId};

use records::{ExperimentResultRow, SessionPatch, SessionRow, SlideProgressRow};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection parameters for the record store.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Base endpoint URL, e.g. `https://xyz.example.co`.
    pub url: String,
    /// Access key, sent as both `apikey` and bearer token.
    pub key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("access key is not a valid header value")]
    InvalidKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Analytics client bound to one session.
///
/// Constructed once at startup. Without configuration the client is
/// disabled: every call is a no-op and the slideshow runs untracked.
#[derive(Clone)]
pub struct Tracker {
    inner: Option<Arc<Inner>>,
}

struct Inner {
    http: reqwest::Client,
    base: String,
    session: SessionId,
}

impl Tracker {
    /// Build a client, or a disabled one when `config` is absent or the
    /// HTTP client cannot be constructed.
    #[must_use]
    pub fn new(config: Option<TrackerConfig>) -> Self {
        let Some(config) = config else {
            tracing::info!("analytics endpoint not configured; tracking disabled");
            return Self { inner: None };
        };
        match build_inner(&config) {
            Ok(inner) => Self {
                inner: Some(Arc::new(inner)),
            },
            Err(err) => {
                tracing::warn!("analytics client unavailable, tracking disabled: {err}");
                Self { inner: None }
            }
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Session identity carried on every record, when tracking is enabled.
    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.inner.as_ref().map(|inner| inner.session)
    }

    /// Register the session record. Called once at startup.
    pub fn start_session(&self, sound_enabled: bool) {
        self.spawn(move |inner| async move { inner.send_start_session(sound_enabled).await });
    }

    /// Upsert the (session, slide) progress record and touch the session.
    pub fn track_slide_view(&self, slide: SlideId, seconds_on_previous: u64) {
        self.spawn(move |inner| async move {
            inner.send_slide_view(slide, seconds_on_previous).await
        });
    }

    /// Flag the session as completed.
    pub fn mark_complete(&self) {
        self.spawn(move |inner| async move { inner.send_mark_complete().await });
    }

    /// Record the viewer's current sound preference.
    pub fn update_sound_preference(&self, enabled: bool) {
        self.spawn(move |inner| async move { inner.send_sound_preference(enabled).await });
    }

    /// Append one experiment-result row.
    pub fn save_experiment_result(&self, age: u8, years_needed: u64, generations_needed: u64) {
        self.spawn(move |inner| async move {
            inner
                .send_experiment_result(age, years_needed, generations_needed)
                .await
        });
    }

    /// Direct access to the request bodies, for tests.
    #[must_use]
    pub fn sender(&self) -> Option<TrackerSender> {
        self.inner.as_ref().map(|inner| TrackerSender {
            inner: Arc::clone(inner),
        })
    }

    fn spawn<F, Fut>(&self, call: F)
    where
        F: FnOnce(TrackerSender) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), TrackerError>> + Send + 'static,
    {
        let Some(inner) = &self.inner else {
            return;
        };
        let sender = TrackerSender {
            inner: Arc::clone(inner),
        };
        tokio::spawn(async move {
            if let Err(err) = call(sender).await {
                tracing::warn!("analytics call failed: {err}");
            }
        });
    }
}

/// The awaitable side of the tracker: one method per remote record.
#[derive(Clone)]
pub struct TrackerSender {
    inner: Arc<Inner>,
}

impl TrackerSender {
    pub async fn send_start_session(&self, sound_enabled: bool) -> Result<(), TrackerError> {
        let now = Utc::now().to_rfc3339();
        let row = SessionRow {
            id: self.inner.session,
            started_at: now.clone(),
            last_active_at: now,
            completed: false,
            sound_enabled,
        };
        self.inner
            .http
            .post(self.inner.table_url("sessions"))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn send_slide_view(
        &self,
        slide: SlideId,
        seconds_on_previous: u64,
    ) -> Result<(), TrackerError> {
        let row = SlideProgressRow {
            session_id: self.inner.session,
            slide_number: slide.index(),
            viewed_at: Utc::now().to_rfc3339(),
            time_spent_seconds: seconds_on_previous,
        };
        self.inner
            .http
            .post(format!(
                "{}?on_conflict=session_id,slide_number",
                self.inner.table_url("slide_progress")
            ))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&row)
            .send()
            .await?
            .error_for_status()?;

        self.touch_session(SessionPatch::default()).await
    }

    pub async fn send_mark_complete(&self) -> Result<(), TrackerError> {
        self.touch_session(SessionPatch {
            completed: Some(true),
            ..SessionPatch::default()
        })
        .await
    }

    pub async fn send_sound_preference(&self, enabled: bool) -> Result<(), TrackerError> {
        self.touch_session(SessionPatch {
            sound_enabled: Some(enabled),
            ..SessionPatch::default()
        })
        .await
    }

    pub async fn send_experiment_result(
        &self,
        age: u8,
        years_needed: u64,
        generations_needed: u64,
    ) -> Result<(), TrackerError> {
        let row = ExperimentResultRow {
            session_id: self.inner.session,
            user_age: age,
            years_needed,
            generations_needed,
        };
        self.inner
            .http
            .post(self.inner.table_url("experiment_results"))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// PATCH the session row; always refreshes `last_active_at`.
    async fn touch_session(&self, mut patch: SessionPatch) -> Result<(), TrackerError> {
        patch.last_active_at = Some(Utc::now().to_rfc3339());
        self.inner
            .http
            .patch(format!(
                "{}?id=eq.{}",
                self.inner.table_url("sessions"),
                self.inner.session
            ))
            .header("Prefer", "return=minimal")
            .json(&patch)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl Inner {
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base)
    }
}

fn build_inner(config: &TrackerConfig) -> Result<Inner, TrackerError> {
    let key = HeaderValue::from_str(&config.key).map_err(|_| TrackerError::InvalidKey)?;
    let bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
        .map_err(|_| TrackerError::InvalidKey)?;

    let mut headers = HeaderMap::new();
    headers.insert("apikey", key);
    headers.insert(AUTHORIZATION, bearer);

    let http = reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .default_headers(headers)
        .build()?;

    let session = SessionId::generate();
    tracing::info!(%session, "analytics session started");

    Ok(Inner {
        http,
        base: config.url.trim_end_matches('/').to_string(),
        session,
    })
}
