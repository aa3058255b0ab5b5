//! HTTP transport for the leadcap client pipeline.
//!
//! This crate is the single choke point between the application and the
//! backend. Every outbound call resolves to a classified
//! [`leadcap_types::ApiResult`] — network faults, misrouted HTML responses
//! and application errors are all mapped to a failure result rather than
//! raised past the boundary.
//!
//! The client also owns the bearer credential's lifecycle. The credential
//! is not ambient global state: a [`TokenStore`] is injected at
//! construction, so multiple clients with independent sessions can coexist
//! (and tests get an in-memory store).
//!
//! # Components
//!
//! - **Client**: request execution and response classification
//! - **Token**: the persistent credential slot (file-backed or in-memory)
//! - **Lead**: typed wrappers for the lead endpoints the pipeline touches

mod client;
mod error;
mod lead;
mod token;

pub use client::{BODY_PREVIEW_LIMIT, ClientConfig, TransportClient};
pub use error::{TransportError, TransportResult};
pub use lead::LeadApi;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
