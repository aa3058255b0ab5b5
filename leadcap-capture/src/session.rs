//! Per-form-render capture session state.

use crate::backend::PartialSaveBackend;
use leadcap_types::{ApiResult, FieldSnapshot, LeadId, SessionId};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// What a field commit did. Failures are informational: the session has
/// already recovered, nothing needs surfacing to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The merged snapshot was persisted (and any returned lead adopted).
    Saved,
    /// Empty value; nothing to persist.
    SkippedEmpty,
    /// Value equals the last acknowledged value for this label.
    SkippedUnchanged,
    /// A save was already in flight; this commit was dropped, not queued.
    DroppedInFlight,
    /// The save failed; acknowledged state was left untouched so a later
    /// distinct edit retries the same merged snapshot.
    SaveFailed,
}

/// Holds one form render's capture state and serializes its partial saves.
///
/// Created when the form begins rendering, dropped when it unmounts. Never
/// persisted locally: after a page reload the backend starts a new partial
/// lead.
pub struct CaptureSession {
    session_id: SessionId,
    backend: Arc<dyn PartialSaveBackend>,
    /// Set on the first acknowledgment that carries an id; never cleared
    /// within the session.
    lead_id: RwLock<Option<LeadId>>,
    /// Last-acknowledged value per field label.
    saved_fields: RwLock<FieldSnapshot>,
    /// Mutual exclusion for saves: claimed before the network call,
    /// released once its result has been observed.
    in_flight: AtomicBool,
}

impl CaptureSession {
    /// Starts a session over the given backend.
    pub fn new(backend: Arc<dyn PartialSaveBackend>) -> Self {
        Self {
            session_id: SessionId::new(),
            backend,
            lead_id: RwLock::new(None),
            saved_fields: RwLock::new(FieldSnapshot::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// The session's local identifier (log correlation only).
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// The lead assigned by the backend, once known.
    pub async fn lead_id(&self) -> Option<LeadId> {
        self.lead_id.read().await.clone()
    }

    /// Copy of the last-acknowledged field values.
    pub async fn saved_fields(&self) -> FieldSnapshot {
        self.saved_fields.read().await.clone()
    }

    /// Commits one field value, persisting the merged snapshot when it
    /// changes anything and no save is already in flight.
    pub async fn commit_field(&self, label: &str, value: &str) -> CommitOutcome {
        if value.is_empty() {
            return CommitOutcome::SkippedEmpty;
        }
        if self.saved_fields.read().await.is_unchanged(label, value) {
            return CommitOutcome::SkippedUnchanged;
        }

        // Claim the in-flight slot; losers are dropped, not queued. The
        // merged snapshot of a later edit covers whatever was dropped.
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(
                session = %self.session_id,
                label, "partial save already in flight; dropping commit"
            );
            return CommitOutcome::DroppedInFlight;
        }

        let snapshot = self.saved_fields.read().await.merged(label, value);
        let lead_id = self.lead_id.read().await.clone();

        let result = self.backend.save_partial(&snapshot, lead_id.as_ref()).await;

        let outcome = match result {
            ApiResult::Success { data, .. } => {
                if let Some(id) = data.lead_id {
                    debug!(session = %self.session_id, lead = %id, "partial lead acknowledged");
                    *self.lead_id.write().await = Some(id);
                }
                // Success without an id still counts as saved; the backend
                // just hasn't assigned a lead yet.
                *self.saved_fields.write().await = snapshot;
                CommitOutcome::Saved
            }
            ApiResult::Failure { error } => {
                // Best-effort path: log and leave acknowledged state alone
                // so the next differing edit retries the merged snapshot.
                warn!(session = %self.session_id, label, "partial save failed: {error}");
                CommitOutcome::SaveFailed
            }
        };

        self.in_flight.store(false, Ordering::Release);
        outcome
    }
}
