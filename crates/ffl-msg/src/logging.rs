//! ---
//! ffl_section: "02-messaging-data-model"
//! ffl_subsection: "module"
//! ffl_type: "source"
//! ffl_scope: "code"
//! ffl_description: "Service bus request catalog and envelope types."
//! ffl_version: "v0.0.0-prealpha"
//! ffl_owner: "tbd"
//! ---
use tracing::debug;

use crate::types::RequestDocument;

/// Emit a structured log entry for a freshly built request.
pub fn log_request(document: &RequestDocument) {
    let cmd: &'static str = document.command().map(|c| c.name()).unwrap_or("");
    debug!(
        correlation_id = document.correlation_id(),
        service = %document.service_name(),
        cmd,
        reply_to = document.reply_to().unwrap_or(""),
        "request built"
    );
}
