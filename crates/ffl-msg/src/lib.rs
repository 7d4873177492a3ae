//! ---
//! ffl_section: "02-messaging-data-model"
//! ffl_subsection: "module"
//! ffl_type: "source"
//! ffl_scope: "code"
//! ffl_description: "Service bus request catalog and envelope types."
//! ffl_version: "v0.0.0-prealpha"
//! ffl_owner: "tbd"
//! ---
//! Request envelopes for the FFL service bus.
//!
//! [`MessageCatalog`] turns business parameters into [`RequestDocument`]s and
//! stamps each one with a per-client correlation identifier. Sending the
//! documents and matching replies is left to the transport.
#![warn(missing_docs)]

pub mod catalog;
pub mod command;
pub mod correlation;
pub mod logging;
pub mod types;

/// Shared result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while handing documents to an encoder.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Wrapper for JSON serialization or deserialization problems.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub use catalog::MessageCatalog;
pub use command::{Command, ReplyPolicy, ServiceName};
pub use correlation::{CorrelationCounter, CorrelationId};
pub use logging::log_request;
pub use types::{CommandRecord, Requestor, RequestDocument, Service, ServiceRequest};
