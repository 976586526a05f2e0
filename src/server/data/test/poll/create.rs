use super::*;

/// Tests creating a poll.
///
/// Verifies that the poll is readable afterwards and that the persisted document
/// carries both the poll and the advanced counter.
///
/// Expected: Ok, one save containing the poll with counter 1
#[tokio::test]
async fn creates_and_persists_poll() {
    let (backend, store, id) = store_with_poll().await;

    assert_eq!(id, PollId::new(1, creation_time()));
    assert_eq!(store.get(&id).await, Some(sample_poll(id.clone())));

    assert_eq!(backend.save_count(), 1);
    let saved = backend.last_saved().unwrap();
    assert_eq!(saved.poll_counter, 1);
    assert!(saved.polls.contains_key(id.as_str()));
}

/// Tests that allocated IDs are unique and increasing.
///
/// Expected: counters 1, 2, 3 at the same instant
#[tokio::test]
async fn allocates_increasing_ids() {
    let store = PollStore::open(Arc::new(MemoryBackend::default())).await;

    let ids = [
        store.allocate_id(creation_time()).await,
        store.allocate_id(creation_time()).await,
        store.allocate_id(creation_time()).await,
    ];

    assert_eq!(ids[0].as_str(), format!("poll_1_{}", creation_time().timestamp_millis()));
    assert_eq!(ids[2].as_str(), format!("poll_3_{}", creation_time().timestamp_millis()));
    assert_ne!(ids[0], ids[1]);
}

/// Tests creating a poll when the write fails.
///
/// Expected: Err, poll not stored in memory
#[tokio::test]
async fn failed_write_leaves_store_unchanged() {
    let backend = Arc::new(MemoryBackend::default());
    let store = PollStore::open(backend.clone()).await;
    backend.fail_saves(true);

    let id = store.allocate_id(creation_time()).await;
    let result = store.create(&sample_poll(id.clone())).await;

    assert!(matches!(result, Err(AppError::IoErr(_))));
    assert!(store.get(&id).await.is_none());
    assert!(store.list_all().await.is_empty());
}
