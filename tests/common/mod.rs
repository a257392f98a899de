#![allow(dead_code)]

use std::time::Duration;

use opennote::{Client, ClientBuilder};
use wiremock::MockServer;

pub const API_KEY: &str = "sk-on-test";

/// A client pointed at the mock server with an explicit key.
pub fn client(server: &MockServer) -> Client {
    ClientBuilder::new()
        .api_key(API_KEY)
        .base_url(server.uri())
        .build()
        .expect("client builds")
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> Client {
    ClientBuilder::new()
        .api_key(API_KEY)
        .base_url(server.uri())
        .timeout(timeout)
        .build()
        .expect("client builds")
}

/// Number of requests the mock server has seen so far.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|r| r.len())
        .unwrap_or(0)
}
