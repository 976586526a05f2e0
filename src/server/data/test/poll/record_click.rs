use super::*;

/// Tests recording a first click.
///
/// Expected: Ok with already_clicked false and the user persisted
#[tokio::test]
async fn records_first_click() {
    let (backend, store, id) = store_with_poll().await;

    let recorded = store.record_click(&id, UserId::new(7)).await.unwrap();

    assert!(!recorded.already_clicked);
    assert_eq!(recorded.poll.clicked_users, vec![UserId::new(7)]);

    let saved = backend.last_saved().unwrap();
    assert_eq!(saved.polls[id.as_str()].clicked_users, vec![UserId::new(7)]);
}

/// Tests that a repeat click changes nothing.
///
/// Verifies that the clicker set is unchanged and no extra write happens.
///
/// Expected: Ok with already_clicked true, one clicker, no new save
#[tokio::test]
async fn repeat_click_is_idempotent() {
    let (backend, store, id) = store_with_poll().await;
    store.record_click(&id, UserId::new(7)).await.unwrap();
    let saves = backend.save_count();

    let recorded = store.record_click(&id, UserId::new(7)).await.unwrap();

    assert!(recorded.already_clicked);
    assert_eq!(recorded.poll.clicked_users.len(), 1);
    assert_eq!(backend.save_count(), saves);
}

/// Tests that clicks keep their arrival order.
///
/// Expected: clickers listed in click order
#[tokio::test]
async fn keeps_click_order() {
    let (_backend, store, id) = store_with_poll().await;

    for user in [9, 3, 5] {
        store.record_click(&id, UserId::new(user)).await.unwrap();
    }

    let poll = store.get(&id).await.unwrap();
    assert_eq!(
        poll.clicked_users,
        vec![UserId::new(9), UserId::new(3), UserId::new(5)]
    );
}

/// Tests clicking an unknown poll.
///
/// Expected: Err(PollError::NotFound)
#[tokio::test]
async fn fails_for_unknown_poll() {
    let (_backend, store, _id) = store_with_poll().await;

    let result = store
        .record_click(&PollId::from("poll_99_0"), UserId::new(7))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PollErr(PollError::NotFound(_)))
    ));
}

/// Tests recording a click when the write fails.
///
/// Expected: Err, click absent from memory afterwards
#[tokio::test]
async fn failed_write_drops_click() {
    let (backend, store, id) = store_with_poll().await;
    backend.fail_saves(true);

    let result = store.record_click(&id, UserId::new(7)).await;

    assert!(result.is_err());
    assert!(store.get(&id).await.unwrap().clicked_users.is_empty());
}
