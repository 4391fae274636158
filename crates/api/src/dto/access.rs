use serde::{Deserialize, Serialize};
use siteward_application::use_cases::NavigationAction;
use siteward_domain::Evaluation;

#[derive(Debug, Clone, Deserialize)]
pub struct CheckUrlRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckUrlResponse {
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub hostname: String,
    pub matched_domain: Option<String>,
}

impl CheckUrlResponse {
    pub fn from_domain(evaluation: Evaluation) -> Self {
        Self {
            blocked: evaluation.verdict.is_blocked(),
            reason: evaluation.verdict.reason().map(|r| r.to_str().to_string()),
            message: evaluation.verdict.message().map(str::to_string),
            hostname: evaluation.hostname,
            matched_domain: evaluation.matched_domain,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRequest {
    pub tab_id: Option<i64>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl NavigationResponse {
    pub fn from_domain(action: NavigationAction) -> Self {
        match action {
            NavigationAction::Proceed => Self {
                action: "proceed".to_string(),
                redirect_url: None,
            },
            NavigationAction::Redirect { url, .. } => Self {
                action: "redirect".to_string(),
                redirect_url: Some(url),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResponse {
    pub redirected: usize,
}
