use plenum::application::ports::MeetingRepository;
use plenum::domain::{MeetingDraft, MeetingId};
use plenum::infrastructure::persistence::{
    InMemoryMeetingRepository, SqliteMeetingRepository, create_pool,
};

fn draft(transcript: &str) -> MeetingDraft {
    MeetingDraft {
        transcript: transcript.to_string(),
        summary: "### Summary:\n- something happened".to_string(),
        action_items: "- follow up".to_string(),
        decisions: "- ship it".to_string(),
    }
}

async fn sqlite_repository() -> SqliteMeetingRepository {
    // A single connection keeps every query on the same in-memory database.
    let pool = create_pool("sqlite::memory:", 1).await.expect("pool");
    let repository = SqliteMeetingRepository::new(pool);
    repository.ensure_schema().await.expect("schema");
    repository
}

#[tokio::test]
async fn given_empty_store_when_inserting_then_ids_start_at_one_and_increase() {
    let repository = sqlite_repository().await;

    let first = repository.insert(&draft("alpha")).await.unwrap();
    let second = repository.insert(&draft("beta")).await.unwrap();

    assert_eq!(first.as_i64(), 1);
    assert_eq!(second.as_i64(), 2);
}

#[tokio::test]
async fn given_inserted_record_when_fetching_by_id_then_fields_round_trip() {
    let repository = sqlite_repository().await;

    let inserted = draft("the full transcript text");
    let id = repository.insert(&inserted).await.unwrap();
    let fetched = repository.get_by_id(id).await.unwrap().expect("record");

    assert_eq!(fetched.id, id);
    assert_eq!(fetched.transcript, inserted.transcript);
    assert_eq!(fetched.summary, inserted.summary);
    assert_eq!(fetched.action_items, inserted.action_items);
    assert_eq!(fetched.decisions, inserted.decisions);
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_none() {
    let repository = sqlite_repository().await;

    let result = repository.get_by_id(MeetingId::from_i64(42)).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn given_stored_records_when_searching_substring_then_only_matching_transcripts() {
    let repository = sqlite_repository().await;
    repository.insert(&draft("budget review for May")).await.unwrap();
    repository.insert(&draft("engineering standup")).await.unwrap();
    repository.insert(&draft("May planning session")).await.unwrap();

    let results = repository.search("May").await.unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.transcript.contains("May")));
}

#[tokio::test]
async fn given_stored_records_when_searching_empty_query_then_every_record_returned() {
    let repository = sqlite_repository().await;
    repository.insert(&draft("one")).await.unwrap();
    repository.insert(&draft("two")).await.unwrap();
    repository.insert(&draft("three")).await.unwrap();

    let results = repository.search("").await.unwrap();

    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn given_no_matching_transcript_when_searching_then_empty_result_not_error() {
    let repository = sqlite_repository().await;
    repository.insert(&draft("something")).await.unwrap();

    let results = repository.search("absent-token").await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn given_search_results_when_returned_then_ordered_by_id() {
    let repository = sqlite_repository().await;
    repository.insert(&draft("shared token a")).await.unwrap();
    repository.insert(&draft("shared token b")).await.unwrap();

    let results = repository.search("shared token").await.unwrap();

    assert_eq!(results.len(), 2);
    assert!(results[0].id.as_i64() < results[1].id.as_i64());
}

#[tokio::test]
async fn given_in_memory_store_when_inserting_and_fetching_then_behaves_like_sqlite() {
    let repository = InMemoryMeetingRepository::new();

    let id = repository.insert(&draft("in memory transcript")).await.unwrap();
    assert_eq!(id.as_i64(), 1);

    let fetched = repository.get_by_id(id).await.unwrap().expect("record");
    assert_eq!(fetched.transcript, "in memory transcript");

    let all = repository.search("").await.unwrap();
    assert_eq!(all.len(), 1);

    let none = repository.search("missing").await.unwrap();
    assert!(none.is_empty());
}
