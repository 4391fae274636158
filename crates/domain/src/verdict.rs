use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DOMAIN_BLOCKED_MESSAGE: &str = "This domain is blocked.";

pub const TIME_RESTRICTED_PREFIX: &str = "This URL is only allowed during: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockReason {
    /// The domain is blocked and no exception covers the URL.
    Domain,
    /// An exception covers the URL but none of its windows is active.
    Time,
}

impl BlockReason {
    pub fn to_str(&self) -> &'static str {
        match self {
            BlockReason::Domain => "domain",
            BlockReason::Time => "time",
        }
    }
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for BlockReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "domain" => Ok(BlockReason::Domain),
            "time" => Ok(BlockReason::Time),
            other => Err(format!("Unknown block reason '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Blocked { reason: BlockReason, message: String },
}

impl Verdict {
    pub fn domain_blocked() -> Self {
        Verdict::Blocked {
            reason: BlockReason::Domain,
            message: DOMAIN_BLOCKED_MESSAGE.to_string(),
        }
    }

    pub fn time_restricted(allowed_times: &str) -> Self {
        Verdict::Blocked {
            reason: BlockReason::Time,
            message: format!("{}{}", TIME_RESTRICTED_PREFIX, allowed_times),
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Verdict::Blocked { .. })
    }

    pub fn reason(&self) -> Option<BlockReason> {
        match self {
            Verdict::Allowed => None,
            Verdict::Blocked { reason, .. } => Some(*reason),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Allowed => None,
            Verdict::Blocked { message, .. } => Some(message),
        }
    }
}
