//! Siteward Domain Layer
pub mod blocklist;
pub mod config;
pub mod configuration;
pub mod errors;
pub mod evaluator;
pub mod exception;
pub mod matcher;
pub mod site_notes;
pub mod time_window;
pub mod upcoming;
pub mod verdict;

pub use blocklist::{BlockedDomainEntry, BlockedDomainRule};
pub use config::{CliOverrides, Config, ConfigError};
pub use configuration::{ConfigDocument, Configuration};
pub use errors::DomainError;
pub use evaluator::{evaluate, evaluate_detailed, AllowReason, Evaluation};
pub use exception::ExceptionRule;
pub use matcher::{domain_matches, extract_domain, host_or_literal, is_internal_url};
pub use site_notes::{DomainNotes, NotePosition, SiteNote, SiteNoteDraft, SiteNoteUpdate};
pub use time_window::{format_time_windows, is_within_window, LocalInstant, TimeWindow};
pub use upcoming::{upcoming_unblocks, UpcomingUnblock};
pub use verdict::{BlockReason, Verdict};
