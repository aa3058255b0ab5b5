//! Wire messages for the partial-save endpoint.
//!
//! The backend accepts `{ data: {label: value, ...}, partial_lead_id }` and
//! answers `{ lead_id }` once a lead record exists. The acknowledgment's
//! `lead_id` is optional: an early save may succeed before the backend has
//! assigned an identifier, which callers treat as "no assignment yet".

use crate::{FieldSnapshot, LeadId};
use serde::{Deserialize, Serialize};

/// Request body for a progressive (partial) lead save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialSaveRequest {
    /// Full merged snapshot of every field captured so far.
    pub data: FieldSnapshot,
    /// Lead identifier from a previous acknowledgment, if any.
    pub partial_lead_id: Option<LeadId>,
}

impl PartialSaveRequest {
    /// Creates a partial-save request.
    pub fn new(data: FieldSnapshot, partial_lead_id: Option<LeadId>) -> Self {
        Self {
            data,
            partial_lead_id,
        }
    }
}

/// Acknowledgment returned by the partial-save endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialSaveAck {
    /// The lead record this save was folded into, once assigned.
    #[serde(default)]
    pub lead_id: Option<LeadId>,
}

impl PartialSaveAck {
    /// An acknowledgment carrying a lead assignment.
    pub fn assigned(lead_id: impl Into<LeadId>) -> Self {
        Self {
            lead_id: Some(lead_id.into()),
        }
    }

    /// An acknowledgment without a lead assignment.
    pub fn unassigned() -> Self {
        Self { lead_id: None }
    }
}
