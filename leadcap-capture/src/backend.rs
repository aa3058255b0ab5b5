//! Backend seam for partial saves.
//!
//! The controller talks to the backend through this trait so tests can
//! substitute a recording mock for the HTTP transport.

use async_trait::async_trait;
use leadcap_transport::LeadApi;
use leadcap_types::{ApiResult, FieldSnapshot, LeadId, PartialSaveAck, PartialSaveRequest};

/// The one call a capture session makes.
#[async_trait]
pub trait PartialSaveBackend: Send + Sync {
    /// Persists the full merged snapshot under the given lead, if any.
    async fn save_partial(
        &self,
        snapshot: &FieldSnapshot,
        lead_id: Option<&LeadId>,
    ) -> ApiResult<PartialSaveAck>;
}

/// Production backend: the typed lead API over the HTTP transport.
#[derive(Clone)]
pub struct ApiBackend {
    api: LeadApi,
}

impl ApiBackend {
    /// Wraps a lead API.
    pub fn new(api: LeadApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PartialSaveBackend for ApiBackend {
    async fn save_partial(
        &self,
        snapshot: &FieldSnapshot,
        lead_id: Option<&LeadId>,
    ) -> ApiResult<PartialSaveAck> {
        let request = PartialSaveRequest::new(snapshot.clone(), lead_id.cloned());
        self.api.save_partial(&request).await
    }
}

/// A mock backend for testing.
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    /// One recorded partial-save call.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedSave {
        pub snapshot: FieldSnapshot,
        pub lead_id: Option<LeadId>,
    }

    /// Records every call and replays scripted responses. With no script,
    /// every call succeeds without a lead assignment.
    #[derive(Default)]
    pub struct MockBackend {
        calls: Mutex<Vec<RecordedSave>>,
        responses: Mutex<VecDeque<ApiResult<PartialSaveAck>>>,
        gate: Mutex<Option<Arc<Notify>>>,
    }

    impl MockBackend {
        /// Creates a mock that acknowledges every save.
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a response for the next call.
        pub fn push_response(&self, response: ApiResult<PartialSaveAck>) {
            self.responses.lock().unwrap().push_back(response);
        }

        /// Holds the next call open until the returned handle is notified,
        /// for exercising in-flight behavior.
        pub fn hold_next(&self) -> Arc<Notify> {
            let notify = Arc::new(Notify::new());
            *self.gate.lock().unwrap() = Some(notify.clone());
            notify
        }

        /// All calls made so far.
        pub fn calls(&self) -> Vec<RecordedSave> {
            self.calls.lock().unwrap().clone()
        }

        /// Number of calls made so far.
        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PartialSaveBackend for MockBackend {
        async fn save_partial(
            &self,
            snapshot: &FieldSnapshot,
            lead_id: Option<&LeadId>,
        ) -> ApiResult<PartialSaveAck> {
            self.calls.lock().unwrap().push(RecordedSave {
                snapshot: snapshot.clone(),
                lead_id: lead_id.cloned(),
            });

            let gate = self.gate.lock().unwrap().take();
            if let Some(gate) = gate {
                gate.notified().await;
            }

            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| ApiResult::ok(PartialSaveAck::unassigned()))
        }
    }
}
