#![allow(dead_code)]

use serde_json::{Value, json};
use tb_client::{Client, ClientOptions};
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> Client {
    Client::new(&ClientOptions::new(server.uri())).unwrap()
}

pub const DEFINITION: &str = r#"{"type":"object","properties":{"name":{"type":"string"}}}"#;

pub fn schema_json(id: i64, version: &str) -> Value {
    json!({
        "id": id,
        "subject": "test-subject",
        "version": version,
        "schema": DEFINITION,
    })
}
