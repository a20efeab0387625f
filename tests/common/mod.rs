#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use warehouse_api::{build_router, config::AppConfig, validation::Locale, AppState};

/// Router over fresh in-memory storage.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self::with_config(AppConfig {
            locale,
            ..AppConfig::default()
        })
    }

    fn with_config(config: AppConfig) -> Self {
        Self {
            router: build_router(AppState::in_memory(config)),
        }
    }

    /// Send a JSON request against the router.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let body = body.map(|json| serde_json::to_vec(&json).expect("failed to serialize json"));
        self.send(method, uri, body).await
    }

    /// Send raw bytes, for payloads that are not valid JSON.
    pub async fn request_raw(&self, method: Method, uri: &str, body: &str) -> Response {
        self.send(method, uri, Some(body.as_bytes().to_vec())).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Vec<u8>>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(bytes) => {
                builder = builder.header("content-type", "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).expect("failed to build request"))
            .await
            .expect("router error during test request")
    }

    /// POST `body` and return the created row's `data` object.
    pub async fn create(&self, uri: &str, body: Value) -> Value {
        let response = self.request(Method::POST, uri, Some(body)).await;
        assert_eq!(response.status(), 201, "create {uri} failed");
        let mut json = response_json(response).await;
        json["data"].take()
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not JSON")
}
