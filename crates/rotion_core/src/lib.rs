//! Core domain logic for Rotion.
//! This crate is the single source of truth for Project invariants.

pub mod logging;
pub mod model;

pub use logging::{
    default_log_level, init_logging, logging_status, LogConfig, LogLevel, LoggingError,
};
pub use model::project::{Project, ProjectId, ProjectValidationError, MAX_DESCRIPTION_CHARS};
pub use model::sources::{Clock, IdGenerator, ProjectSources, RandomIdGenerator, SystemClock};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
