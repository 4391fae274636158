#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, FixedOffset, TimeZone};
use http_body_util::BodyExt;
use serde_json::Value;
use siteward_api::{create_api_routes, create_page_routes, AppState};
use siteward_application::commands::CommandDispatcher;
use siteward_application::ports::{Clock, ConfigStore};
use siteward_domain::Configuration;
use siteward_infrastructure::repositories::JsonFileConfigStore;
use siteward_infrastructure::system::InMemoryTabRegistry;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// 2026-10-14 is a Wednesday, 2026-10-17 a Saturday.
pub fn clock_at(day: u32, hour: u32, minute: u32) -> FixedClock {
    let offset = FixedOffset::east_opt(0).unwrap();
    FixedClock(
        offset
            .with_ymd_and_hms(2026, 10, day, hour, minute, 0)
            .unwrap(),
    )
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<JsonFileConfigStore>,
    pub tabs: Arc<InMemoryTabRegistry>,
    _dir: TempDir,
}

pub async fn test_app(clock: FixedClock) -> TestApp {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(
        JsonFileConfigStore::open(dir.path().join("siteward.json"))
            .await
            .unwrap(),
    );
    let tabs = Arc::new(InMemoryTabRegistry::new());
    let dispatcher = Arc::new(CommandDispatcher::from_ports(
        store.clone(),
        Arc::new(clock),
        tabs.clone(),
        "/blocked",
        30,
    ));

    let router = Router::new()
        .nest("/api", create_api_routes(AppState::new(dispatcher)))
        .merge(create_page_routes("/blocked"));

    TestApp {
        router,
        store,
        tabs,
        _dir: dir,
    }
}

pub async fn seed(app: &TestApp, config: Configuration) {
    app.store
        .update(Box::new(move |current| {
            *current = config;
            Ok(())
        }))
        .await
        .unwrap();
}

pub async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

pub async fn send_raw(app: &TestApp, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

impl TestApp {
    pub fn store_snapshot(&self) -> Configuration {
        self.store.snapshot().as_ref().clone()
    }
}
