use siteward_domain::{is_internal_url, Verdict};
use std::sync::Arc;
use url::{form_urlencoded, Url};

use super::CheckUrlUseCase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    Proceed,
    Redirect { url: String, verdict: Verdict },
}

impl NavigationAction {
    pub fn is_redirect(&self) -> bool {
        matches!(self, NavigationAction::Redirect { .. })
    }
}

/// Decides what happens to a top-level navigation before it commits.
pub struct InterceptNavigationUseCase {
    check_url: Arc<CheckUrlUseCase>,
    block_page: String,
}

impl InterceptNavigationUseCase {
    pub fn new(check_url: Arc<CheckUrlUseCase>, block_page: impl Into<String>) -> Self {
        Self {
            check_url,
            block_page: block_page.into(),
        }
    }

    pub fn block_page(&self) -> &str {
        &self.block_page
    }

    pub fn execute(&self, url: &str) -> NavigationAction {
        if is_internal_url(url) || self.is_block_page(url) {
            return NavigationAction::Proceed;
        }

        let verdict = self.check_url.execute(url).verdict;
        if !verdict.is_blocked() {
            return NavigationAction::Proceed;
        }

        NavigationAction::Redirect {
            url: block_page_url(&self.block_page, &verdict, url),
            verdict,
        }
    }

    /// Only the page this process serves is exempt: an absolute block page
    /// must match on origin and path, a relative one only matches relative
    /// navigations to that path.
    fn is_block_page(&self, url: &str) -> bool {
        match Url::parse(&self.block_page) {
            Ok(page) => Url::parse(url)
                .map(|target| target.origin() == page.origin() && target.path() == page.path())
                .unwrap_or(false),
            Err(_) => {
                let path = self.block_page.split('?').next().unwrap_or_default();
                url.strip_prefix(path)
                    .map(|rest| rest.is_empty() || rest.starts_with('?') || rest.starts_with('#'))
                    .unwrap_or(false)
            }
        }
    }
}

/// `<block_page>?reason=..&message=..&url=..`, form-urlencoded.
pub fn block_page_url(block_page: &str, verdict: &Verdict, original_url: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Verdict::Blocked { reason, message } = verdict {
        query.append_pair("reason", reason.to_str());
        query.append_pair("message", message);
    }
    query.append_pair("url", original_url);

    let separator = if block_page.contains('?') { '&' } else { '?' };
    format!("{}{}{}", block_page, separator, query.finish())
}
