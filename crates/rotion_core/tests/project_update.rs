use rotion_core::{Project, ProjectValidationError, MAX_DESCRIPTION_CHARS};

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn sample_project() -> Project {
    Project::new(
        text("Project name"),
        text("project description"),
        text("project emoji"),
    )
    .unwrap()
}

#[test]
fn update_replaces_all_fields() {
    let mut project = sample_project();

    project
        .update(text("New title"), text("new Description"), text("New Emoji"))
        .unwrap();

    assert_eq!(project.title(), "New title");
    assert_eq!(project.description(), "new Description");
    assert_eq!(project.emoji(), Some("New Emoji"));
}

#[test]
fn update_only_title_keeps_other_fields() {
    let mut project = sample_project();

    project.update(text("New title"), None, None).unwrap();

    assert_eq!(project.title(), "New title");
    assert_eq!(project.description(), "project description");
    assert_eq!(project.emoji(), Some("project emoji"));
}

#[test]
fn update_with_none_title_keeps_previous_title() {
    let mut project = sample_project();
    let before = project.clone();

    project.update(None, None, None).unwrap();

    assert_eq!(project, before);
}

#[test]
fn update_only_description_keeps_other_fields() {
    let mut project = sample_project();

    project.update(None, text("New Description"), None).unwrap();

    assert_eq!(project.description(), "New Description");
    assert_eq!(project.title(), "Project name");
    assert_eq!(project.emoji(), Some("project emoji"));
}

#[test]
fn update_accepts_empty_strings() {
    let mut project = sample_project();

    project.update(text(""), text(""), text("")).unwrap();

    assert_eq!(project.title(), "");
    assert_eq!(project.description(), "");
    assert_eq!(project.emoji(), Some(""));
}

#[test]
fn update_never_touches_identity() {
    let mut project = sample_project();
    let id = project.id();
    let created_at = project.created_at();

    project
        .update(text("renamed"), text("changed"), text("x"))
        .unwrap();

    assert_eq!(project.id(), id);
    assert_eq!(project.created_at(), created_at);
}

#[test]
fn update_rejects_description_over_limit() {
    let mut project = sample_project();
    let invalid = "a".repeat(MAX_DESCRIPTION_CHARS + 1);

    let err = project.update(None, Some(invalid), None).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Description should not be greater than 10_000 characters long"
    );
}

#[test]
fn failed_update_keeps_applied_fields() {
    let mut project = sample_project();
    let invalid = "a".repeat(MAX_DESCRIPTION_CHARS + 1);

    let err = project
        .update(text("New title"), Some(invalid.clone()), text("New Emoji"))
        .unwrap_err();

    assert!(matches!(err, ProjectValidationError::DescriptionTooLong { .. }));
    assert_eq!(project.title(), "New title");
    assert_eq!(project.emoji(), Some("New Emoji"));
    assert_eq!(project.description(), invalid);
    assert_eq!(project.validate(), Err(err));
}

#[test]
fn later_update_can_repair_failed_update() {
    let mut project = sample_project();
    let invalid = "a".repeat(MAX_DESCRIPTION_CHARS + 1);
    project.update(None, Some(invalid), None).unwrap_err();

    project.update(None, text("short again"), None).unwrap();

    assert_eq!(project.validate(), Ok(()));
    assert_eq!(project.description(), "short again");
}
