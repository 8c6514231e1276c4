mod support;

use std::time::Duration;

use dashscan_engine::{EngineEvent, EngineHandle, ProgressEvent, SearchConfig, SearchError};
use support::{comment, mount_item, mount_user, settings_for};
use wiremock::MockServer;

fn collect_run(engine: &EngineHandle) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    while let Some(event) = engine.recv_timeout(Duration::from_secs(10)) {
        let done = matches!(event, EngineEvent::SearchCompleted { .. });
        events.push(event);
        if done {
            break;
        }
    }
    events
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_progress_then_result() {
    engine_logging::initialize_for_tests();
    let server = MockServer::start().await;
    mount_user(&server, "carol", &[7]).await;
    mount_item(&server, comment(7, "well \u{2014} then", 1_400_000_000)).await;

    let engine = EngineHandle::new(settings_for(&server)).unwrap();
    engine.submit(1, SearchConfig::new("carol"));
    let events = tokio::task::spawn_blocking(move || collect_run(&engine))
        .await
        .unwrap();

    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        EngineEvent::Progress {
            run_id: 1,
            event: ProgressEvent::Retrieving
        }
    );
    assert_eq!(
        events[1],
        EngineEvent::Progress {
            run_id: 1,
            event: ProgressEvent::Searching
        }
    );
    match &events[2] {
        EngineEvent::SearchCompleted { run_id, result } => {
            assert_eq!(*run_id, 1);
            let result = result.as_ref().unwrap();
            assert_eq!(result.matched_item().map(|item| item.id), Some(7));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_missing_user() {
    let server = MockServer::start().await;

    let engine = EngineHandle::new(settings_for(&server)).unwrap();
    engine.submit(9, SearchConfig::new("missing"));
    let events = tokio::task::spawn_blocking(move || collect_run(&engine))
        .await
        .unwrap();

    match events.last() {
        Some(EngineEvent::SearchCompleted { run_id: 9, result }) => {
            assert!(matches!(result, Err(SearchError::UserNotFound { .. })));
        }
        other => panic!("unexpected event {other:?}"),
    }
}
