use siteward_domain::{DomainNotes, SiteNote};
use std::sync::Arc;

use crate::ports::ConfigStore;

pub struct GetSiteNotesUseCase {
    store: Arc<dyn ConfigStore>,
}

impl GetSiteNotesUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Notes for `domain`; empty when none were ever added.
    pub fn execute(&self, domain: &str) -> Vec<SiteNote> {
        self.store
            .snapshot()
            .notes_for(domain.trim())
            .map(|site| site.notes.clone())
            .unwrap_or_default()
    }

    pub fn get_all(&self) -> Vec<DomainNotes> {
        self.store.snapshot().site_notes.clone()
    }
}
