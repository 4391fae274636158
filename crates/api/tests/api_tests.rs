use axum::http::StatusCode;
use serde_json::json;
use siteward_application::ports::BrowserTabs;
use siteward_domain::{BlockedDomainRule, Configuration, ExceptionRule, TimeWindow};

mod helpers;
use helpers::*;

fn youtube_configuration() -> Configuration {
    Configuration {
        blocked_domains: vec![BlockedDomainRule::new("youtube.com")],
        exception_urls: vec![ExceptionRule::new(
            "https://youtube.com/watch?v=1",
            vec![TimeWindow::new(vec![1, 2, 3, 4, 5], 8.0, 17.0)],
        )],
        site_notes: Vec::new(),
    }
}

// ── Health / config ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let app = test_app(clock_at(14, 10, 0)).await;

    let (status, body) = send(&app, "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_get_config_returns_camel_case_document() {
    let app = test_app(clock_at(14, 10, 0)).await;
    seed(&app, youtube_configuration()).await;

    let (status, body) = send(&app, "GET", "/api/config", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["blockedDomains"][0]["domain"], "youtube.com");
    assert_eq!(
        body["exceptionUrls"][0]["timeWindows"][0]["startHour"],
        8.0
    );
}

// ── Blocked domains / exceptions ──────────────────────────────────────────────

#[tokio::test]
async fn test_put_blocked_domains_normalizes_and_persists() {
    let app = test_app(clock_at(14, 10, 0)).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/blocked-domains",
        Some(json!(["Reddit.com", {"domain": "news.com", "title": "News"}])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["domain"], "reddit.com");
    assert_eq!(body[1]["title"], "News");

    let (_, listed) = send(&app, "GET", "/api/blocked-domains", None).await;
    assert_eq!(listed, body);
}

#[tokio::test]
async fn test_put_blocked_domains_rejects_invalid_rule() {
    let app = test_app(clock_at(14, 10, 0)).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/blocked-domains",
        Some(json!([{"domain": "news.com", "timeWindows": [{"days": [], "startHour": 8, "endHour": 9}]}])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid blocked domain"));
}

#[tokio::test]
async fn test_put_exception_urls() {
    let app = test_app(clock_at(14, 10, 0)).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/exception-urls",
        Some(json!([{"url": "https://a.com/x", "timeWindows": [{"days": [1], "startHour": 8, "endHour": 9}]}])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["url"], "https://a.com/x");
}

// ── Access checks ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_check_reports_time_restriction() {
    let app = test_app(clock_at(17, 10, 0)).await;
    seed(&app, youtube_configuration()).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/check",
        Some(json!({"url": "https://youtube.com/watch?v=1"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["blocked"], true);
    assert_eq!(body["reason"], "time");
    assert_eq!(
        body["message"],
        "This URL is only allowed during: Monday, Tuesday, Wednesday, Thursday, Friday from 8:00 to 17:00"
    );
    assert_eq!(body["matchedDomain"], "youtube.com");
}

#[tokio::test]
async fn test_navigation_redirects_and_registers_tab() {
    let app = test_app(clock_at(14, 10, 0)).await;
    seed(&app, youtube_configuration()).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/navigation",
        Some(json!({"tabId": 4, "url": "https://youtube.com/feed"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "redirect");
    let redirect = body["redirectUrl"].as_str().unwrap();
    assert!(redirect.starts_with("/blocked?reason=domain&"));

    let tabs = app.tabs.list_tabs().await.unwrap();
    assert_eq!(tabs.len(), 1);
    assert_eq!(tabs[0].url, redirect);
}

#[tokio::test]
async fn test_navigation_without_tab_only_decides() {
    let app = test_app(clock_at(14, 10, 0)).await;
    seed(&app, youtube_configuration()).await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/navigation",
        Some(json!({"url": "https://docs.rs/"})),
    )
    .await;

    assert_eq!(body, json!({"action": "proceed"}));
    assert!(app.tabs.is_empty().await);
}

#[tokio::test]
async fn test_sweep_redirects_tabs_after_blocklist_update() {
    let app = test_app(clock_at(14, 10, 0)).await;
    send(
        &app,
        "POST",
        "/api/navigation",
        Some(json!({"tabId": 1, "url": "https://reddit.com/"})),
    )
    .await;

    send(&app, "PUT", "/api/blocked-domains", Some(json!(["reddit.com"]))).await;

    let tabs = app.tabs.list_tabs().await.unwrap();
    assert!(tabs[0].url.starts_with("/blocked?"));

    let (status, body) = send(&app, "POST", "/api/tabs/sweep", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["redirected"], 0);
}

// ── Messages ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_message_check_url() {
    let app = test_app(clock_at(14, 10, 0)).await;
    seed(&app, youtube_configuration()).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/messages",
        Some(json!({"action": "checkUrl", "url": "https://youtube.com/watch?v=1"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"blocked": false}));
}

#[tokio::test]
async fn test_message_unknown_action_is_client_error() {
    let app = test_app(clock_at(14, 10, 0)).await;

    let (status, _) = send(&app, "POST", "/api/messages", Some(json!({"action": "nope"}))).await;

    assert!(status.is_client_error());
}

// ── Import / export ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_export_then_import() {
    let source = test_app(clock_at(14, 10, 0)).await;
    seed(&source, youtube_configuration()).await;
    let (status, exported) = send_raw(&source, "GET", "/api/export", "").await;
    assert_eq!(status, StatusCode::OK);

    let target = test_app(clock_at(14, 10, 0)).await;
    let (status, body) = send_raw(&target, "POST", "/api/import", &exported).await;

    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["blockedDomains"], 1);
    assert_eq!(body["exceptionUrls"], 1);
    assert_eq!(target.store_snapshot(), youtube_configuration());
}

#[tokio::test]
async fn test_import_invalid_json_is_bad_request() {
    let app = test_app(clock_at(14, 10, 0)).await;

    let (status, _) = send_raw(&app, "POST", "/api/import", "{ nope").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Site notes ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_site_note_crud() {
    let app = test_app(clock_at(14, 10, 0)).await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/site-notes/example.com",
        Some(json!({"text": "read later", "position": {"x": 5, "y": 6}})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["createdAt"], "2026-10-14T10:00:00+00:00");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/site-notes/example.com/{}", id),
        Some(json!({"color": "#000000"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["color"], "#000000");
    assert_eq!(updated["text"], "read later");

    let (_, listed) = send(&app, "GET", "/api/site-notes/example.com", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, deleted) = send(
        &app,
        "DELETE",
        &format!("/api/site-notes/example.com/{}", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["removed"], 1);

    let (_, listed) = send(&app, "GET", "/api/site-notes/example.com", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_site_note_update_on_unknown_domain_is_not_found() {
    let app = test_app(clock_at(14, 10, 0)).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/site-notes/nowhere.com/note-1",
        Some(json!({"text": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().is_some());
}

// ── Upcoming / block page ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_upcoming_unblocks() {
    // 2026-10-16 is a Friday.
    let app = test_app(clock_at(16, 11, 45)).await;
    seed(
        &app,
        Configuration {
            blocked_domains: vec![BlockedDomainRule::new("news.com")
                .with_time_windows(vec![TimeWindow::new(vec![5], 9.0, 12.0)])],
            ..Default::default()
        },
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/upcoming", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "label": "news.com",
            "minutesUntilFree": 15,
            "notification": "news.com will be available in 1 minute!"
        }])
    );
}

#[tokio::test]
async fn test_block_page_escapes_query_values() {
    let app = test_app(clock_at(14, 10, 0)).await;

    let (status, html) = send_raw(
        &app,
        "GET",
        "/blocked?reason=domain&message=This+domain+is+blocked.&url=https%3A%2F%2Fa.com%2F%3Cscript%3E",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("This domain is blocked."));
    assert!(html.contains("https://a.com/&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}
