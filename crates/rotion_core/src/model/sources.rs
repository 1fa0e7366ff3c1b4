//! Identity and time sources used when a Project is created.
//!
//! # Responsibility
//! - Abstract wall-clock reads and id generation behind small traits.
//! - Let tests supply deterministic time and identity.
//!
//! # Invariants
//! - `IdGenerator` implementations must never return a nil id.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::project::ProjectId;

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh project identifiers.
pub trait IdGenerator {
    fn next_id(&self) -> ProjectId;
}

/// Reads the system clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Generates random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> ProjectId {
        Uuid::new_v4()
    }
}

/// Clock + id generator pair borrowed for one construction call.
#[derive(Clone, Copy)]
pub struct ProjectSources<'a> {
    pub clock: &'a dyn Clock,
    pub ids: &'a dyn IdGenerator,
}

impl<'a> ProjectSources<'a> {
    pub fn new(clock: &'a dyn Clock, ids: &'a dyn IdGenerator) -> Self {
        Self { clock, ids }
    }

    /// Process defaults: system clock and random v4 ids.
    pub fn system() -> ProjectSources<'static> {
        ProjectSources {
            clock: &SystemClock,
            ids: &RandomIdGenerator,
        }
    }
}
