//! Progressive capture: best-effort persistence of partially filled forms.
//!
//! As a user advances through a multi-step form, each committed field is
//! opportunistically saved to the backend so an abandoned submission is
//! still recoverable server-side. The controller protects two invariants:
//!
//! - **Deduplication**: a field commit whose value matches the last
//!   acknowledged value for that label makes no network call.
//! - **Bounded concurrency**: at most one partial save is in flight per
//!   session. Commits arriving during an in-flight save are dropped, not
//!   queued; a later distinct edit carries the merged snapshot anyway.
//!
//! Partial-save failures are swallowed (logged, state unchanged) — this
//! path is a best-effort optimization, never surfaced to the end user. The
//! final, complete submission is a separate non-best-effort call made
//! through [`leadcap_transport::LeadApi::submit`].

mod backend;
mod session;

pub use backend::{mock, ApiBackend, PartialSaveBackend};
pub use session::{CaptureSession, CommitOutcome};
