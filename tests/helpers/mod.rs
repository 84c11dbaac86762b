#![allow(dead_code)]

use peeringdb::types::ApiUrl;
use peeringdb::{PeeringDbClient, PeeringDbClientBuilder};
use serde_json::{json, Value};
use wiremock::MockServer;

pub type AnyResult = Result<(), Box<dyn std::error::Error>>;

/// Client builder pointed at the `/api/` path of a stub server.
pub fn builder_for(server: &MockServer) -> PeeringDbClientBuilder {
    let url = format!("{}/api/", server.uri());
    PeeringDbClient::builder().url(ApiUrl::try_from(url.as_str()).unwrap())
}

pub fn client_for(server: &MockServer) -> PeeringDbClient {
    builder_for(server).build().unwrap()
}

pub fn envelope(data: Value) -> Value {
    json!({"meta": {}, "data": data})
}

pub fn test_net() -> Value {
    json!({"id": 42, "name": "Test Net", "asn": 65536})
}
