//! Project domain model.
//!
//! # Responsibility
//! - Define the user-created workspace container (title, description, emoji).
//! - Enforce field validation on construction, partial update and decode.
//!
//! # Invariants
//! - `id` and `created_at` are assigned once and never change.
//! - `title` and `description` are always present on a constructed Project.
//! - `description` holds at most `MAX_DESCRIPTION_CHARS` characters, except
//!   after a failed `update` (see `Project::update`).

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use super::sources::ProjectSources;

/// Stable identifier for a Project.
pub type ProjectId = Uuid;

/// Upper bound for `Project::description`, in UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count twice.
pub const MAX_DESCRIPTION_CHARS: usize = 10_000;

/// Validation failures for Project state.
///
/// Messages are fixed strings; callers and tests may match on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// Title is absent.
    MissingTitle,
    /// Description is absent.
    MissingDescription,
    /// Description exceeds `MAX_DESCRIPTION_CHARS`; `len` is in UTF-16 units.
    DescriptionTooLong { len: usize },
    /// Rehydrated id is the nil UUID.
    NilId,
}

impl ProjectValidationError {
    /// Stable metadata code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingTitle => "missing_title",
            Self::MissingDescription => "missing_description",
            Self::DescriptionTooLong { .. } => "description_too_long",
            Self::NilId => "nil_id",
        }
    }
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Title should not be empty or null"),
            Self::MissingDescription => write!(f, "Description should not be null"),
            Self::DescriptionTooLong { .. } => write!(
                f,
                "Description should not be greater than 10_000 characters long"
            ),
            Self::NilId => write!(f, "Id should not be nil"),
        }
    }
}

impl Error for ProjectValidationError {}

/// User-created workspace container.
///
/// Encoding runs [`Project::validate`] first, so a Project left invalid by a
/// failed `update` refuses to serialize instead of producing JSON that
/// decode would reject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    emoji: Option<String>,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a Project with a fresh random id and the current UTC time.
    ///
    /// `None` for `title` or `description` is rejected; no instance is built
    /// when validation fails.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        emoji: Option<String>,
    ) -> Result<Self, ProjectValidationError> {
        Self::new_with(ProjectSources::system(), title, description, emoji)
    }

    /// Same as [`Project::new`] with caller-provided clock and id generator.
    pub fn new_with(
        sources: ProjectSources<'_>,
        title: Option<String>,
        description: Option<String>,
        emoji: Option<String>,
    ) -> Result<Self, ProjectValidationError> {
        let result = build(sources.ids.next_id(), title, description, emoji, || {
            sources.clock.now()
        });
        log_outcome("project_create", result.as_ref().err());
        result
    }

    /// Rebuilds a Project whose identity and timestamp already exist.
    ///
    /// Used by import/storage paths owned by callers.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - Field validation errors in the same order as [`Project::validate`].
    pub fn from_parts(
        id: ProjectId,
        title: Option<String>,
        description: Option<String>,
        emoji: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ProjectValidationError> {
        if id.is_nil() {
            return Err(ProjectValidationError::NilId);
        }
        build(id, title, description, emoji, || created_at)
    }

    /// Replaces each field given as `Some`, keeps fields given as `None`,
    /// then re-validates.
    ///
    /// `None` never clears a field: the title cannot be emptied and the
    /// description cannot be reset to absent here.
    ///
    /// Replacements are applied before validation and are not rolled back on
    /// failure. An over-length description stays stored alongside any new
    /// title/emoji passed in the same call.
    pub fn update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        emoji: Option<String>,
    ) -> Result<(), ProjectValidationError> {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(emoji) = emoji {
            self.emoji = Some(emoji);
        }

        let result = self.validate();
        log_outcome("project_update", result.as_ref().err());
        result
    }

    /// Checks title presence, description presence and description length,
    /// in that order, reporting only the first failure.
    ///
    /// Title and description are always present on an existing instance, so
    /// only the length rule can fail here (after a failed `update`).
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        check_fields(Some(self.title.as_str()), Some(self.description.as_str()))
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn emoji(&self) -> Option<&str> {
        self.emoji.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Serialize for Project {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.validate().map_err(serde::ser::Error::custom)?;
        ProjectWire {
            id: self.id,
            title: &self.title,
            description: &self.description,
            emoji: self.emoji.as_deref(),
            created_at: self.created_at,
        }
        .serialize(serializer)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectWire<'a> {
    id: ProjectId,
    title: &'a str,
    description: &'a str,
    emoji: Option<&'a str>,
    created_at: DateTime<Utc>,
}

/// Wire shape accepted on decode, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecord {
    id: ProjectId,
    title: Option<String>,
    description: Option<String>,
    #[serde(default)]
    emoji: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectValidationError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        Project::from_parts(
            record.id,
            record.title,
            record.description,
            record.emoji,
            record.created_at,
        )
    }
}

fn build(
    id: ProjectId,
    title: Option<String>,
    description: Option<String>,
    emoji: Option<String>,
    created_at: impl FnOnce() -> DateTime<Utc>,
) -> Result<Project, ProjectValidationError> {
    let title = title.ok_or(ProjectValidationError::MissingTitle)?;
    let description = description.ok_or(ProjectValidationError::MissingDescription)?;
    check_fields(Some(title.as_str()), Some(description.as_str()))?;

    Ok(Project {
        id,
        title,
        description,
        emoji,
        created_at: created_at(),
    })
}

fn check_fields(
    title: Option<&str>,
    description: Option<&str>,
) -> Result<(), ProjectValidationError> {
    if title.is_none() {
        return Err(ProjectValidationError::MissingTitle);
    }
    let Some(description) = description else {
        return Err(ProjectValidationError::MissingDescription);
    };
    let len = description.encode_utf16().count();
    if len > MAX_DESCRIPTION_CHARS {
        return Err(ProjectValidationError::DescriptionTooLong { len });
    }
    Ok(())
}

fn log_outcome(event: &str, failure: Option<&ProjectValidationError>) {
    match failure {
        None => debug!("event={event} module=model status=ok"),
        Some(err) => warn!(
            "event={event} module=model status=error error_code={}",
            err.code()
        ),
    }
}
