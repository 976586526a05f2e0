use super::*;

/// Tests that a missing poll file is a fresh start.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_file_loads_as_none() {
    let test = TestBuilder::new().build().unwrap();
    let backend = JsonFileBackend::new(&test.polls_file);

    assert!(backend.load().await.unwrap().is_none());
}

/// Tests that a corrupt poll file is reported as an error.
///
/// Expected: Err(AppError::JsonErr)
#[tokio::test]
async fn corrupt_file_is_an_error() {
    let test = TestBuilder::new()
        .with_raw(test_utils::builder::POLLS_FILE, "{ \"polls\": [")
        .build()
        .unwrap();
    let backend = JsonFileBackend::new(&test.polls_file);

    assert!(matches!(backend.load().await, Err(AppError::JsonErr(_))));
}

/// Tests that a store written through the file backend survives a restart.
///
/// Verifies that the clicks and the counter are read back by a second store
/// opened on the same file, and that no temporary file is left behind.
///
/// Expected: reopened store holds the poll, its click and counter 1
#[tokio::test]
async fn store_survives_restart() {
    let test = TestBuilder::new().build().unwrap();

    let id = {
        let store = PollStore::open(Arc::new(JsonFileBackend::new(&test.polls_file))).await;
        let id = store.allocate_id(creation_time()).await;
        store.create(&sample_poll(id.clone())).await.unwrap();
        store.record_click(&id, UserId::new(7)).await.unwrap();
        id
    };

    let reopened = PollStore::open(Arc::new(JsonFileBackend::new(&test.polls_file))).await;
    let poll = reopened.get(&id).await.unwrap();
    assert_eq!(poll.clicked_users, vec![UserId::new(7)]);
    assert_eq!(reopened.snapshot().await.poll_counter, 1);

    let on_disk = test.read_json(test_utils::builder::POLLS_FILE).unwrap();
    assert_eq!(on_disk["pollCounter"], 1);
    assert_eq!(on_disk["polls"][id.as_str()]["clickedUsers"][0], "7");
    assert!(!test.path("polls.json.tmp").exists());
}
