//! Core type definitions for the leadcap capture pipeline.
//!
//! This crate defines the fundamental types shared by the transport client
//! and the progressive capture controller:
//! - Lead and session identifiers
//! - Field snapshots (label → last-acknowledged value)
//! - Partial-save wire messages
//! - The classified transport result envelope
//!
//! Everything UI-facing (form definitions, rendering state) belongs in the
//! consuming application, not here.

mod ids;
mod result;
mod snapshot;
mod wire;

pub use ids::{LeadId, SessionId};
pub use result::ApiResult;
pub use snapshot::FieldSnapshot;
pub use wire::{PartialSaveAck, PartialSaveRequest};
