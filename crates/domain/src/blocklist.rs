use crate::matcher::domain_matches;
use crate::time_window::TimeWindow;
use serde::{Deserialize, Serialize};

const MAX_DOMAIN_LEN: usize = 253;
const MAX_TITLE_LEN: usize = 200;

/// A hostname (or hostname suffix) that is blocked, optionally only during
/// the given windows. No windows means blocked at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedDomainRule {
    pub domain: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub time_windows: Vec<TimeWindow>,
}

impl BlockedDomainRule {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            title: None,
            time_windows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_time_windows(mut self, time_windows: Vec<TimeWindow>) -> Self {
        self.time_windows = time_windows;
        self
    }

    #[inline]
    pub fn matches(&self, hostname: &str) -> bool {
        domain_matches(hostname, &self.domain)
    }

    pub fn is_always_blocked(&self) -> bool {
        self.time_windows.is_empty()
    }

    /// Title when present, otherwise the domain itself.
    pub fn label(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.domain,
        }
    }

    /// Trims and lowercases the domain; blank titles become `None`.
    pub fn normalized(mut self) -> Self {
        self.domain = self.domain.trim().to_ascii_lowercase();
        self.title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }

    pub fn validate_domain(domain: &str) -> Result<(), String> {
        if domain.is_empty() {
            return Err("Domain cannot be empty".to_string());
        }
        if domain.len() > MAX_DOMAIN_LEN {
            return Err(format!(
                "Domain cannot exceed {} characters",
                MAX_DOMAIN_LEN
            ));
        }
        let valid = domain
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.' || c == '_');
        if !valid {
            return Err(format!(
                "Domain '{}' contains invalid characters (only lowercase letters, digits, hyphens, dots and underscores are allowed)",
                domain
            ));
        }
        Ok(())
    }

    pub fn validate_title(title: &Option<String>) -> Result<(), String> {
        if let Some(t) = title {
            if t.len() > MAX_TITLE_LEN {
                return Err(format!("Title cannot exceed {} characters", MAX_TITLE_LEN));
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        Self::validate_domain(&self.domain)?;
        Self::validate_title(&self.title)?;
        for window in &self.time_windows {
            window
                .validate()
                .map_err(|e| format!("{}: {}", self.domain, e))?;
        }
        Ok(())
    }
}

/// Blocklist entry as found in stored or imported documents: either a bare
/// domain string or a full rule object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockedDomainEntry {
    Plain(String),
    Rule(BlockedDomainRule),
}

impl From<BlockedDomainEntry> for BlockedDomainRule {
    fn from(entry: BlockedDomainEntry) -> Self {
        match entry {
            BlockedDomainEntry::Plain(domain) => BlockedDomainRule::new(domain),
            BlockedDomainEntry::Rule(rule) => rule,
        }
    }
}
