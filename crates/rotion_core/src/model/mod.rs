//! Domain model for Rotion workspaces.
//!
//! # Responsibility
//! - Define the Project entity and its validation rules.
//! - Keep time and identity sources injectable for deterministic tests.
//!
//! # Invariants
//! - Every Project is identified by a stable, non-nil `ProjectId`.
//! - Externally observable Projects have passed validation, except after a
//!   failed partial update (fields are not rolled back).

pub mod project;
pub mod sources;
