use crate::blocklist::{BlockedDomainEntry, BlockedDomainRule};
use crate::errors::DomainError;
use crate::exception::ExceptionRule;
use crate::site_notes::{DomainNotes, SiteNote};
use serde::{Deserialize, Serialize};

/// Blocklist, exception list and site notes, as persisted and exported.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub blocked_domains: Vec<BlockedDomainRule>,
    pub exception_urls: Vec<ExceptionRule>,
    pub site_notes: Vec<DomainNotes>,
}

impl Configuration {
    /// First rule in list order that matches `hostname`.
    pub fn find_blocked_rule(&self, hostname: &str) -> Option<&BlockedDomainRule> {
        self.blocked_domains.iter().find(|r| r.matches(hostname))
    }

    pub fn find_exception(&self, url: &str) -> Option<&ExceptionRule> {
        self.exception_urls.iter().find(|e| e.url == url)
    }

    pub fn notes_for(&self, domain: &str) -> Option<&DomainNotes> {
        self.site_notes.iter().find(|n| n.domain == domain)
    }

    pub fn notes_for_mut(&mut self, domain: &str) -> Option<&mut DomainNotes> {
        self.site_notes.iter_mut().find(|n| n.domain == domain)
    }

    pub fn validate_blocked_domains(rules: &[BlockedDomainRule]) -> Result<(), DomainError> {
        for rule in rules {
            rule.validate().map_err(DomainError::InvalidBlockedDomain)?;
        }
        Ok(())
    }

    pub fn validate_exception_urls(rules: &[ExceptionRule]) -> Result<(), DomainError> {
        for rule in rules {
            rule.validate().map_err(DomainError::InvalidExceptionUrl)?;
        }
        Ok(())
    }

    /// Edit-time validation of every rule. Evaluation never calls this.
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::validate_blocked_domains(&self.blocked_domains)?;
        Self::validate_exception_urls(&self.exception_urls)?;
        for site in &self.site_notes {
            if site.domain.is_empty() {
                return Err(DomainError::InvalidSiteNote(
                    "Site notes entry has an empty domain".to_string(),
                ));
            }
            for note in &site.notes {
                SiteNote::validate_text(&note.text)
                    .map_err(DomainError::InvalidSiteNote)?;
            }
        }
        Ok(())
    }

    /// Shape check for whole documents loaded from disk or imported.
    ///
    /// Looser than [`Configuration::validate`]: anything the evaluator can run
    /// on is accepted, including exceptions without windows and malformed
    /// windows (which never match). Only entries with no key are rejected.
    pub fn validate_document(&self) -> Result<(), DomainError> {
        if let Some(rule) = self.blocked_domains.iter().find(|r| r.domain.is_empty()) {
            return Err(DomainError::InvalidBlockedDomain(format!(
                "Blocked domain entry '{}' has an empty domain",
                rule.label()
            )));
        }
        if self.exception_urls.iter().any(|r| r.url.is_empty()) {
            return Err(DomainError::InvalidExceptionUrl(
                "Exception URL cannot be empty".to_string(),
            ));
        }
        if self.site_notes.iter().any(|site| site.domain.is_empty()) {
            return Err(DomainError::InvalidSiteNote(
                "Site notes entry has an empty domain".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::StorageError(e.to_string()))
    }
}

/// Lenient on-disk/imported shape. Bare-string blocklist entries and missing
/// lists are accepted here and normalized by [`ConfigDocument::into_configuration`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    #[serde(default)]
    pub blocked_domains: Vec<BlockedDomainEntry>,
    #[serde(default)]
    pub exception_urls: Vec<ExceptionRule>,
    #[serde(default)]
    pub site_notes: Vec<DomainNotes>,
}

impl ConfigDocument {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidImport(e.to_string()))
    }

    pub fn into_configuration(self) -> Configuration {
        Configuration {
            blocked_domains: self
                .blocked_domains
                .into_iter()
                .map(BlockedDomainRule::from)
                .collect(),
            exception_urls: self.exception_urls,
            site_notes: self.site_notes,
        }
    }
}
