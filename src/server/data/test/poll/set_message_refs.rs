use super::*;

fn copy_in(channel_id: u64) -> MessageRef {
    MessageRef {
        guild_id: GuildId::new(1),
        channel_id: ChannelId::new(channel_id),
        message_id: MessageId::new(channel_id * 1000),
        ping_role_ids: Vec::new(),
    }
}

/// Tests attaching the sent copies to a stored poll.
///
/// Verifies that the references replace the stored ones and are persisted.
///
/// Expected: Ok with both references, second save carries them
#[tokio::test]
async fn replaces_and_persists_refs() {
    let (backend, store, id) = store_with_poll().await;

    let poll = store
        .set_message_refs(&id, vec![copy_in(10), copy_in(11)])
        .await
        .unwrap();

    assert_eq!(poll.message_refs, vec![copy_in(10), copy_in(11)]);
    assert_eq!(store.get(&id).await.unwrap().message_refs.len(), 2);
    assert_eq!(backend.save_count(), 2);
    let saved = backend.last_saved().unwrap();
    assert_eq!(saved.polls[id.as_str()].message_refs.len(), 2);
}

/// Tests attaching references to an unknown poll.
///
/// Expected: Err(NotFound), nothing written
#[tokio::test]
async fn unknown_poll_is_not_found() {
    let (backend, store, _) = store_with_poll().await;

    let result = store
        .set_message_refs(&PollId::from("poll_9_0"), vec![copy_in(10)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::PollErr(PollError::NotFound(_)))
    ));
    assert_eq!(backend.save_count(), 1);
}

/// Tests attaching references when the write fails.
///
/// Expected: Err, stored references unchanged
#[tokio::test]
async fn failed_write_keeps_previous_refs() {
    let (backend, store, id) = store_with_poll().await;
    backend.fail_saves(true);

    let result = store.set_message_refs(&id, Vec::new()).await;

    assert!(matches!(result, Err(AppError::IoErr(_))));
    assert_eq!(
        store.get(&id).await.unwrap().message_refs,
        sample_poll(id.clone()).message_refs
    );
}
