use crate::errors::DomainError;
use url::Url;

const INTERNAL_PREFIXES: [&str; 3] = ["about:", "moz-extension:", "chrome-extension:"];

/// Exact hostname equality or a proper dot-suffix match.
///
/// Inputs are expected to be lowercase already; no normalization happens here.
#[inline]
pub fn domain_matches(hostname: &str, rule_domain: &str) -> bool {
    if hostname == rule_domain {
        return true;
    }
    hostname.len() > rule_domain.len()
        && hostname.ends_with(rule_domain)
        && hostname.as_bytes()[hostname.len() - rule_domain.len() - 1] == b'.'
}

/// Hostname of an absolute URL. Host-less URLs such as `mailto:` yield an
/// empty hostname.
pub fn extract_domain(url: &str) -> Result<String, DomainError> {
    let parsed = Url::parse(url).map_err(|e| DomainError::InvalidUrl(format!("{}: {}", url, e)))?;
    Ok(parsed.host_str().unwrap_or_default().to_string())
}

/// Hostname of `url`, or the raw input when it does not parse.
pub fn host_or_literal(url: &str) -> String {
    extract_domain(url).unwrap_or_else(|_| url.to_string())
}

/// Browser-internal pages are never evaluated.
pub fn is_internal_url(url: &str) -> bool {
    url.is_empty() || INTERNAL_PREFIXES.iter().any(|p| url.starts_with(p))
}
