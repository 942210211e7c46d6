//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per album endpoint.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    // ========================================================================
    // Album Endpoints
    // ========================================================================

    pub async fn list_albums(&self) -> Response {
        self.client
            .get(format!("{}/v1/albums", self.base_url))
            .send()
            .await
            .expect("List albums request failed")
    }

    pub async fn list_albums_page(&self, page: usize, page_size: usize) -> Response {
        self.client
            .get(format!("{}/v1/albums", self.base_url))
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await
            .expect("List albums request failed")
    }

    pub async fn get_album(&self, id: &str) -> Response {
        self.client
            .get(format!("{}/v1/albums/{}", self.base_url, id))
            .send()
            .await
            .expect("Get album request failed")
    }

    pub async fn create_album(
        &self,
        title: &str,
        artist: &str,
        price: f64,
        content: &str,
    ) -> Response {
        self.create_album_raw(json!({
            "title": title,
            "artist": artist,
            "price": price,
            "content": content,
        }))
        .await
    }

    pub async fn create_album_raw(&self, body: Value) -> Response {
        self.client
            .post(format!("{}/v1/albums", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Create album request failed")
    }

    pub async fn delete_album(&self, id: &str) -> Response {
        self.client
            .delete(format!("{}/v1/albums/{}", self.base_url, id))
            .send()
            .await
            .expect("Delete album request failed")
    }
}
