use crate::time_window::TimeWindow;
use serde::{Deserialize, Serialize};

/// A full URL that stays reachable under a blocked domain during its windows.
///
/// Matching is exact string equality, so query strings and fragments count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionRule {
    pub url: String,

    #[serde(default)]
    pub time_windows: Vec<TimeWindow>,
}

impl ExceptionRule {
    pub fn new(url: impl Into<String>, time_windows: Vec<TimeWindow>) -> Self {
        Self {
            url: url.into(),
            time_windows,
        }
    }

    pub fn normalized(mut self) -> Self {
        self.url = self.url.trim().to_string();
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Exception URL cannot be empty".to_string());
        }
        if self.time_windows.is_empty() {
            return Err(format!(
                "Exception '{}' needs at least one time window",
                self.url
            ));
        }
        for window in &self.time_windows {
            window.validate().map_err(|e| format!("{}: {}", self.url, e))?;
        }
        Ok(())
    }
}
