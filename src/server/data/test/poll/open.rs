use super::*;

/// Tests opening a store when nothing has been persisted yet.
///
/// Expected: empty table with counter 0
#[tokio::test]
async fn starts_empty_without_document() {
    let store = PollStore::open(Arc::new(MemoryBackend::default())).await;

    assert!(store.list_all().await.is_empty());
    assert_eq!(store.snapshot().await, PollDocument::default());
}

/// Tests opening a store over a corrupt document.
///
/// Verifies that the error is swallowed and the store starts empty instead of
/// refusing to start.
///
/// Expected: empty table
#[tokio::test]
async fn starts_empty_with_corrupt_document() {
    let store = PollStore::open(Arc::new(MemoryBackend::corrupt())).await;

    assert!(store.list_all().await.is_empty());
}

/// Tests that a persisted document is loaded with its counter.
///
/// Verifies that the next allocated ID continues after the persisted counter
/// rather than restarting at 1.
///
/// Expected: existing poll readable, next ID uses counter 6
#[tokio::test]
async fn loads_persisted_document() {
    let document: PollDocument = serde_json::from_value(
        factory::poll::PollDocumentFactory::new()
            .counter(5)
            .poll(
                factory::poll::PollRecordFactory::new(5)
                    .created_at(creation_time())
                    .clicked(&[7]),
            )
            .build(),
    )
    .unwrap();
    let store = PollStore::open(Arc::new(MemoryBackend::with_document(document))).await;

    let existing = PollId::new(5, creation_time());
    let poll = store.get(&existing).await.unwrap();
    assert_eq!(poll.clicked_users, vec![UserId::new(7)]);

    let next = store.allocate_id(creation_time()).await;
    assert_eq!(next, PollId::new(6, creation_time()));
}
