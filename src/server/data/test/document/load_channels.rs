use super::*;

/// Tests loading a channel document.
///
/// Expected: guilds and categories keyed as written, ping roles in order
#[tokio::test]
async fn loads_channels() {
    let test = TestBuilder::new()
        .with_channels(
            factory::channel::ChannelDocumentFactory::new()
                .channel(1, "announce", 10, &[100, 101])
                .channel(1, "start", 11, &[])
                .channel(2, "announce", 20, &[])
                .build(),
        )
        .build()
        .unwrap();
    let repo = DocumentRepository::new(&test.users_file, &test.channels_file);

    let document = repo.load_channels().await;

    assert_eq!(document.guilds.len(), 2);
    let announce = &document.guilds["1"]["announce"];
    assert_eq!(announce[0].id, ChannelId::new(10));
    assert_eq!(
        announce[0].ping_role_ids,
        vec![RoleId::new(100), RoleId::new(101)]
    );
    assert!(document.guilds["1"]["start"][0].ping_role_ids.is_empty());
}

/// Tests that `pingRoleIds` may be omitted.
///
/// Expected: channel loaded with no ping roles
#[tokio::test]
async fn ping_roles_default_to_empty() {
    let test = TestBuilder::new()
        .with_channels(serde_json::json!({ "1": { "announce": [{ "id": "10" }] } }))
        .build()
        .unwrap();
    let repo = DocumentRepository::new(&test.users_file, &test.channels_file);

    let document = repo.load_channels().await;

    assert!(document.guilds["1"]["announce"][0].ping_role_ids.is_empty());
}

/// Tests loading a channel document that is not JSON.
///
/// Expected: empty document
#[tokio::test]
async fn corrupt_document_is_empty() {
    let test = TestBuilder::new()
        .with_raw(test_utils::builder::CHANNELS_FILE, "announce: 10")
        .build()
        .unwrap();
    let repo = DocumentRepository::new(&test.users_file, &test.channels_file);

    assert!(repo.load_channels().await.guilds.is_empty());
}
