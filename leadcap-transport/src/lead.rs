//! Typed wrappers for the lead endpoints the capture pipeline touches.

use crate::client::TransportClient;
use leadcap_types::{ApiResult, FieldSnapshot, LeadId, PartialSaveAck, PartialSaveRequest};
use std::sync::Arc;

/// The two lead calls the pipeline makes: best-effort partial saves while
/// the user types, and the final submission.
#[derive(Clone)]
pub struct LeadApi {
    client: Arc<TransportClient>,
}

impl LeadApi {
    /// Creates the API surface over a shared client.
    pub fn new(client: Arc<TransportClient>) -> Self {
        Self { client }
    }

    /// The underlying transport client.
    pub fn client(&self) -> &Arc<TransportClient> {
        &self.client
    }

    /// Persists a partial snapshot. The backend folds it into the lead
    /// named by `partial_lead_id`, or opens a new partial lead and returns
    /// its id in the acknowledgment.
    pub async fn save_partial(&self, request: &PartialSaveRequest) -> ApiResult<PartialSaveAck> {
        self.client.post("leads/partial", request).await
    }

    /// Submits the completed form. Unlike partial saves this is not
    /// best-effort: the caller surfaces failures to the user.
    pub async fn submit(
        &self,
        fields: &FieldSnapshot,
        lead_id: Option<&LeadId>,
    ) -> ApiResult<PartialSaveAck> {
        let request = PartialSaveRequest::new(fields.clone(), lead_id.cloned());
        self.client.post("leads", &request).await
    }
}
