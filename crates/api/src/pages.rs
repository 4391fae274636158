use axum::{extract::Query, response::Html};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct BlockedPageQuery {
    pub reason: Option<String>,
    pub message: Option<String>,
    pub url: Option<String>,
}

pub async fn blocked_page(Query(query): Query<BlockedPageQuery>) -> Html<String> {
    Html(render_blocked_page(&query))
}

pub fn render_blocked_page(query: &BlockedPageQuery) -> String {
    let heading = match query.reason.as_deref() {
        Some("time") => "Not available right now",
        _ => "Site blocked",
    };
    let message = query
        .message
        .as_deref()
        .unwrap_or("This page is blocked.");
    let url = query.url.as_deref().unwrap_or("");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{heading}</title>
<style>
body {{ font-family: sans-serif; max-width: 40rem; margin: 4rem auto; color: #333; }}
h1 {{ color: #c62828; }}
code {{ word-break: break-all; }}
</style>
</head>
<body>
<h1>{heading}</h1>
<p>{message}</p>
<p><code>{url}</code></p>
</body>
</html>
"#,
        heading = heading,
        message = escape_html(message),
        url = escape_html(url),
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
