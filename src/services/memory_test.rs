use super::*;

// =============================================================================
// store
// =============================================================================

#[tokio::test]
async fn store_appends_in_order() {
    let memory = ThreadMemory::new(10, 100);
    memory.store("t", Speaker::User, "hello").await;
    memory.store("t", Speaker::Assistant, "hi there").await;

    let messages = memory.messages("t").await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].speaker, Speaker::User);
    assert_eq!(messages[1].content, "hi there");
}

#[tokio::test]
async fn store_drops_oldest_past_limit() {
    let memory = ThreadMemory::new(2, 100);
    for text in ["one", "two", "three"] {
        memory.store("t", Speaker::User, text).await;
    }

    let contents: Vec<_> = memory.messages("t").await.into_iter().map(|m| m.content).collect();
    assert_eq!(contents, vec!["two", "three"]);
}

#[tokio::test]
async fn threads_are_isolated() {
    let memory = ThreadMemory::new(10, 100);
    memory.store("a", Speaker::User, "from a").await;
    memory.store("b", Speaker::User, "from b").await;

    assert_eq!(memory.messages("a").await.len(), 1);
    assert_eq!(memory.thread_count().await, 2);
    assert!(memory.messages("missing").await.is_empty());
}

#[tokio::test]
async fn zero_limit_still_keeps_latest_message() {
    let memory = ThreadMemory::new(0, 100);
    memory.store("t", Speaker::User, "a").await;
    memory.store("t", Speaker::User, "b").await;
    assert_eq!(memory.messages("t").await[0].content, "b");
}

// =============================================================================
// thread cap
// =============================================================================

#[tokio::test]
async fn distinct_thread_ids_stop_at_the_cap() {
    let memory = ThreadMemory::new(10, 50);
    for i in 0..500 {
        memory.store(&format!("thread-{i}"), Speaker::User, "hi").await;
    }

    assert_eq!(memory.thread_count().await, 50);
    assert!(memory.messages("thread-0").await.is_empty());
    assert_eq!(memory.messages("thread-499").await.len(), 1);
}

#[tokio::test]
async fn cap_evicts_least_recently_written_thread() {
    let memory = ThreadMemory::new(10, 2);
    memory.store("old", Speaker::User, "a").await;
    memory.store("busy", Speaker::User, "b").await;
    memory.store("old", Speaker::User, "c").await;
    memory.store("new", Speaker::User, "d").await;

    assert_eq!(memory.messages("old").await.len(), 2);
    assert!(memory.messages("busy").await.is_empty());
    assert_eq!(memory.messages("new").await.len(), 1);
}

#[tokio::test]
async fn writing_existing_thread_at_cap_evicts_nothing() {
    let memory = ThreadMemory::new(10, 2);
    memory.store("a", Speaker::User, "1").await;
    memory.store("b", Speaker::User, "2").await;
    memory.store("a", Speaker::Assistant, "3").await;

    assert_eq!(memory.thread_count().await, 2);
    assert_eq!(memory.messages("b").await.len(), 1);
}

// =============================================================================
// summary
// =============================================================================

#[tokio::test]
async fn summary_keeps_tail_and_counts_evicted_turns() {
    let memory = ThreadMemory::new(3, 100);
    memory.store("t", Speaker::System, "thread ID: t").await;
    memory.store("t", Speaker::User, "first").await;
    memory.store("t", Speaker::Assistant, "reply").await;
    memory.store("t", Speaker::User, "second").await;

    let summary = memory.summary("t", 2).await;
    assert_eq!(summary.user_turns, 2);
    assert_eq!(summary.recent.len(), 2);
    assert_eq!(summary.recent[0].content, "reply");
    assert_eq!(summary.render(), "assistant: reply\nuser: second\n");
}

#[tokio::test]
async fn summary_of_unknown_thread_is_empty() {
    let memory = ThreadMemory::new(3, 100);
    assert_eq!(memory.summary("nope", 6).await, ThreadSummary::default());
}

#[test]
fn previous_user_message_skips_latest() {
    let summary = ThreadSummary {
        user_turns: 2,
        recent: vec![
            ThreadMessage { speaker: Speaker::User, content: "work is hard".into() },
            ThreadMessage { speaker: Speaker::Assistant, content: "tell me more".into() },
            ThreadMessage { speaker: Speaker::User, content: "and sleep".into() },
        ],
    };
    assert_eq!(summary.previous_user_message(), Some("work is hard"));
    assert_eq!(ThreadSummary::default().previous_user_message(), None);
}
