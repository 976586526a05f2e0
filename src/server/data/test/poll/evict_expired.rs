use super::*;

/// Tests eviction across the retention boundary.
///
/// Verifies that a poll created just over 7 days ago is removed while one created
/// just under 7 days ago is kept.
///
/// Expected: only the older poll evicted
#[tokio::test]
async fn evicts_only_polls_past_retention() {
    let backend = Arc::new(MemoryBackend::default());
    let store = PollStore::open(backend.clone()).await;
    let now = creation_time() + Duration::days(8);

    let old = store
        .allocate_id(now - Duration::days(7) - Duration::seconds(1))
        .await;
    store.create(&sample_poll(old.clone())).await.unwrap();
    let fresh = store
        .allocate_id(now - Duration::days(7) + Duration::seconds(1))
        .await;
    store.create(&sample_poll(fresh.clone())).await.unwrap();

    let evicted = store.evict_expired(now, retention()).await.unwrap();

    assert_eq!(evicted, vec![old.clone()]);
    assert!(store.get(&old).await.is_none());
    assert!(store.get(&fresh).await.is_some());
    assert!(!backend.last_saved().unwrap().polls.contains_key(old.as_str()));
}

/// Tests that an eviction pass with nothing expired does not write.
///
/// Expected: empty result, no extra save
#[tokio::test]
async fn skips_write_when_nothing_expired() {
    let (backend, store, _id) = store_with_poll().await;
    let saves = backend.save_count();

    let evicted = store
        .evict_expired(creation_time() + Duration::days(1), retention())
        .await
        .unwrap();

    assert!(evicted.is_empty());
    assert_eq!(backend.save_count(), saves);
}

/// Tests that polls with malformed IDs are never evicted.
///
/// Expected: poll kept after a pass far in the future
#[tokio::test]
async fn keeps_malformed_ids() {
    let store = PollStore::open(Arc::new(MemoryBackend::default())).await;
    let id = PollId::from("legacy-poll");
    store.create(&sample_poll(id.clone())).await.unwrap();

    let evicted = store
        .evict_expired(creation_time() + Duration::days(365), retention())
        .await
        .unwrap();

    assert!(evicted.is_empty());
    assert!(store.get(&id).await.is_some());
}

/// Tests that a failed eviction write keeps every poll.
///
/// Expected: Err, expired poll still readable
#[tokio::test]
async fn failed_write_keeps_polls() {
    let (backend, store, id) = store_with_poll().await;
    backend.fail_saves(true);

    let result = store
        .evict_expired(creation_time() + Duration::days(30), retention())
        .await;

    assert!(result.is_err());
    assert!(store.get(&id).await.is_some());
}
