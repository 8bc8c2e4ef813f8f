#![allow(dead_code)]

use httpmock::MockServer;
use nanonets::Client;

pub const API_KEY: &str = "test-key";

/// `Basic base64("test-key:")`
pub const BASIC_AUTH: &str = "Basic dGVzdC1rZXk6";

pub fn client(server: &MockServer) -> Client {
    Client::builder(API_KEY)
        .base_url(server.base_url())
        .build()
        .expect("client should build")
}
