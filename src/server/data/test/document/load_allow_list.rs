use super::*;

/// Tests loading a well-formed allow-list.
///
/// Expected: entries in document order, display names preserved
#[tokio::test]
async fn loads_entries() {
    let test = TestBuilder::new()
        .with_users(serde_json::json!([
            factory::allow_list::allowed_user(11, Some("Alice")),
            factory::allow_list::allowed_user(22, None),
        ]))
        .build()
        .unwrap();
    let repo = DocumentRepository::new(&test.users_file, &test.channels_file);

    let users = repo.load_allow_list().await;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, UserId::new(11));
    assert_eq!(users[0].display_name.as_deref(), Some("Alice"));
    assert_eq!(users[1].display_name, None);
}

/// Tests loading a missing allow-list.
///
/// Expected: empty list, no error
#[tokio::test]
async fn missing_document_is_empty() {
    let test = TestBuilder::new().build().unwrap();
    let repo = DocumentRepository::new(&test.users_file, &test.channels_file);

    assert!(repo.load_allow_list().await.is_empty());
}

/// Tests loading an allow-list with the wrong shape.
///
/// Verifies that a document that is valid JSON but not a list of users degrades
/// to an empty list instead of failing startup.
///
/// Expected: empty list
#[tokio::test]
async fn malformed_document_is_empty() {
    let test = TestBuilder::new()
        .with_users(serde_json::json!({ "users": "everyone" }))
        .build()
        .unwrap();
    let repo = DocumentRepository::new(&test.users_file, &test.channels_file);

    assert!(repo.load_allow_list().await.is_empty());
}
