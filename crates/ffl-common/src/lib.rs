//! ---
//! ffl_section: "01-core-functionality"
//! ffl_subsection: "module"
//! ffl_type: "source"
//! ffl_scope: "code"
//! ffl_description: "Shared configuration and logging for FFL clients."
//! ffl_version: "v0.0.0-prealpha"
//! ffl_owner: "tbd"
//! ---
//! Shared primitives for FFL client tools.
//! This crate exposes client configuration loading and tracing setup
//! consumed by the binaries in the workspace.

pub mod config;
pub mod logging;

pub use config::{ClientConfig, LoadedClientConfig, LoggingConfig};
pub use logging::{init_tracing, LogFormat};
