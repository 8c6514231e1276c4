mod support;

use dashscan_engine::{FailureKind, ItemFetcher, ItemKind, SearchError, SubmissionLister};
use pretty_assertions::assert_eq;
use support::{client_for, comment, mount_item, mount_user};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn lists_submissions_oldest_first() {
    let server = MockServer::start().await;
    mount_user(&server, "alice", &[300, 200, 100]).await;

    let ids = client_for(&server).list_submissions("alice").await.unwrap();
    assert_eq!(ids, vec![100, 200, 300]);
}

#[tokio::test]
async fn user_without_submitted_field_has_no_submissions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/user/quiet.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id":"quiet","created":1300000000,"karma":1}"#,
        ))
        .mount(&server)
        .await;

    let ids = client_for(&server).list_submissions("quiet").await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn null_user_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/user/nobody.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_submissions("nobody").await.unwrap_err();
    assert!(matches!(err, SearchError::UserNotFound { ref username, .. } if username == "nobody"));
}

#[tokio::test]
async fn failed_user_lookup_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/user/broken.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).list_submissions("broken").await.unwrap_err();
    assert!(matches!(err, SearchError::UserNotFound { .. }));
}

#[tokio::test]
async fn fetches_item() {
    let server = MockServer::start().await;
    mount_item(&server, comment(42, "hello \u{2014} world", 1_500_000_000)).await;

    let item = client_for(&server).fetch_item(42).await.unwrap();
    assert_eq!(item.id, 42);
    assert_eq!(item.kind, ItemKind::Comment);
    assert_eq!(item.text.as_deref(), Some("hello \u{2014} world"));
    assert_eq!(item.time, 1_500_000_000);
    assert!(!item.deleted);
}

#[tokio::test]
async fn item_failures_map_to_kinds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/item/1.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v0/item/2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v0/item/3.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.fetch_item(1).await.unwrap_err().kind,
        FailureKind::HttpStatus(404)
    );
    assert_eq!(client.fetch_item(2).await.unwrap_err().kind, FailureKind::Missing);
    assert_eq!(client.fetch_item(3).await.unwrap_err().kind, FailureKind::Malformed);
}
