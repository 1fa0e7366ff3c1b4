use chrono::{TimeZone, Utc};
use rotion_core::{Project, MAX_DESCRIPTION_CHARS};
use uuid::Uuid;

fn fixture() -> Project {
    Project::from_parts(
        Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap(),
        Some("Roadmap".to_string()),
        Some("Q3 planning".to_string()),
        Some("🚀".to_string()),
        Utc.with_ymd_and_hms(2024, 2, 13, 10, 0, 0).unwrap(),
    )
    .unwrap()
}

#[test]
fn serialization_uses_camel_case_wire_fields() {
    let project = fixture();

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["title"], "Roadmap");
    assert_eq!(json["description"], "Q3 planning");
    assert_eq!(json["emoji"], "🚀");
    assert_eq!(json["createdAt"], "2024-02-13T10:00:00Z");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn deserialize_allows_missing_emoji() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "No emoji",
        "description": "",
        "createdAt": "2024-02-13T10:00:00Z"
    });

    let project: Project = serde_json::from_value(value).unwrap();
    assert_eq!(project.emoji(), None);
}

#[test]
fn deserialize_rejects_null_title() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": null,
        "description": "body",
        "emoji": null,
        "createdAt": "2024-02-13T10:00:00Z"
    });

    let err = serde_json::from_value::<Project>(value).unwrap_err();
    assert!(
        err.to_string().contains("Title should not be empty or null"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_over_limit_description() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "title",
        "description": "a".repeat(MAX_DESCRIPTION_CHARS + 1),
        "createdAt": "2024-02-13T10:00:00Z"
    });

    let err = serde_json::from_value::<Project>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("Description should not be greater than 10_000 characters long"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_nil_id() {
    let value = serde_json::json!({
        "id": Uuid::nil().to_string(),
        "title": "title",
        "description": "body",
        "createdAt": "2024-02-13T10:00:00Z"
    });

    let err = serde_json::from_value::<Project>(value).unwrap_err();
    assert!(err.to_string().contains("Id should not be nil"));
}

#[test]
fn serialize_rejects_state_left_by_failed_update() {
    let mut project = fixture();
    project
        .update(None, Some("a".repeat(MAX_DESCRIPTION_CHARS + 1)), None)
        .unwrap_err();

    let err = serde_json::to_string(&project).unwrap_err();
    assert!(
        err.to_string()
            .contains("Description should not be greater than 10_000 characters long"),
        "unexpected error: {err}"
    );

    project.update(None, Some("fixed".to_string()), None).unwrap();
    let json = serde_json::to_string(&project).unwrap();
    let decoded: Project = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, project);
}
