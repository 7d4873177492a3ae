//! ---
//! ffl_section: "02-messaging-data-model"
//! ffl_subsection: "module"
//! ffl_type: "source"
//! ffl_scope: "code"
//! ffl_description: "Service bus request catalog and envelope types."
//! ffl_version: "v0.0.0-prealpha"
//! ffl_owner: "tbd"
//! ---
use std::sync::atomic::{AtomicU64, Ordering};

/// Correlation identifier stamped into `serviceRequest.requestor.correlationID`.
pub type CorrelationId = u64;

/// Per-client source of correlation identifiers.
///
/// Identifiers start at 1 and are never reused. The counter is atomic so a
/// catalog shared between threads still hands out unique values.
#[derive(Debug, Default)]
pub struct CorrelationCounter {
    issued: AtomicU64,
}

impl CorrelationCounter {
    /// Counter that has not issued anything yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter and return the new identifier.
    pub fn next(&self) -> CorrelationId {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Most recently issued identifier, `0` before the first call to [`Self::next`].
    pub fn last(&self) -> CorrelationId {
        self.issued.load(Ordering::Relaxed)
    }
}
