#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use dashscan_engine::{ClientSettings, HackerNewsClient, ProgressEvent, ProgressSink};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default, Clone)]
pub struct TestSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl TestSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn client_for(server: &MockServer) -> HackerNewsClient {
    HackerNewsClient::new(settings_for(server)).expect("client")
}

pub fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings {
        base_url: format!("{}/v0", server.uri()),
        ..ClientSettings::default()
    }
}

pub fn comment(id: u64, text: &str, time: i64) -> Value {
    json!({ "by": "tester", "id": id, "parent": 1, "text": text, "time": time, "type": "comment" })
}

pub fn story(id: u64, title: &str, time: i64) -> Value {
    json!({ "by": "tester", "id": id, "title": title, "score": 3, "time": time, "type": "story" })
}

/// Mounts `/v0/user/{username}.json`; ids are given newest first, as served.
pub async fn mount_user(server: &MockServer, username: &str, submitted: &[u64]) {
    Mock::given(method("GET"))
        .and(path(format!("/v0/user/{username}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": username,
            "created": 1_300_000_000,
            "karma": 12,
            "submitted": submitted,
        })))
        .mount(server)
        .await;
}

pub async fn mount_item(server: &MockServer, body: Value) {
    let id = body["id"].as_u64().expect("item id");
    Mock::given(method("GET"))
        .and(path(format!("/v0/item/{id}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
