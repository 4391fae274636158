//! Access decision for a single navigation.
//!
//! The decision is a pure function of `(url, configuration, now)`:
//!
//! 1. hostname of the URL (the raw input when it does not parse);
//! 2. first blocked-domain rule matching that hostname, else allowed;
//! 3. a rule with windows only blocks while one of them is active;
//! 4. an exception whose URL equals the input exactly, else blocked by domain;
//! 5. allowed while one of the exception's windows is active, else blocked
//!    by time with the allowed windows spelled out.

use crate::configuration::Configuration;
use crate::matcher::host_or_literal;
use crate::time_window::{format_time_windows, is_within_window, LocalInstant};
use crate::verdict::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    NotBlocked,
    OutsideBlockingWindow,
    ExceptionActive,
}

impl AllowReason {
    pub fn to_str(&self) -> &'static str {
        match self {
            AllowReason::NotBlocked => "domain not blocked",
            AllowReason::OutsideBlockingWindow => "outside blocking window",
            AllowReason::ExceptionActive => "exception window active",
        }
    }
}

/// A verdict plus the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub hostname: String,
    pub matched_domain: Option<String>,
    pub allow_reason: Option<AllowReason>,
}

impl Evaluation {
    fn allowed(hostname: String, matched_domain: Option<String>, reason: AllowReason) -> Self {
        Self {
            verdict: Verdict::Allowed,
            hostname,
            matched_domain,
            allow_reason: Some(reason),
        }
    }

    fn blocked(hostname: String, matched_domain: String, verdict: Verdict) -> Self {
        Self {
            verdict,
            hostname,
            matched_domain: Some(matched_domain),
            allow_reason: None,
        }
    }
}

pub fn evaluate(url: &str, config: &Configuration, now: LocalInstant) -> Verdict {
    evaluate_detailed(url, config, now).verdict
}

pub fn evaluate_detailed(url: &str, config: &Configuration, now: LocalInstant) -> Evaluation {
    let hostname = host_or_literal(url);

    let Some(rule) = config.find_blocked_rule(&hostname) else {
        return Evaluation::allowed(hostname, None, AllowReason::NotBlocked);
    };
    let matched = rule.domain.clone();

    if !rule.time_windows.is_empty() && !is_within_window(&rule.time_windows, now) {
        return Evaluation::allowed(hostname, Some(matched), AllowReason::OutsideBlockingWindow);
    }

    let Some(exception) = config.find_exception(url) else {
        return Evaluation::blocked(hostname, matched, Verdict::domain_blocked());
    };

    // An exception without windows counts as always active.
    if is_within_window(&exception.time_windows, now) {
        Evaluation::allowed(hostname, Some(matched), AllowReason::ExceptionActive)
    } else {
        let allowed_times = format_time_windows(&exception.time_windows);
        Evaluation::blocked(hostname, matched, Verdict::time_restricted(&allowed_times))
    }
}
