use siteward_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{modify_config, ConfigStore};

pub struct DeleteSiteNoteUseCase {
    store: Arc<dyn ConfigStore>,
}

impl DeleteSiteNoteUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Returns whether a note was removed. The domain entry goes away with
    /// its last note.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str, note_id: &str) -> Result<bool, DomainError> {
        let domain = domain.trim().to_string();
        let id = note_id.to_string();

        let key = domain.clone();
        let removed = modify_config(self.store.as_ref(), move |config| {
            let site = config
                .notes_for_mut(&key)
                .ok_or_else(|| DomainError::SiteNotesNotFound(key.clone()))?;

            let before = site.notes.len();
            site.notes.retain(|note| note.id != id);
            let removed = site.notes.len() != before;

            config.site_notes.retain(|site| !site.notes.is_empty());
            Ok(removed)
        })
        .await?;

        info!(domain = %domain, note_id = %note_id, removed = removed, "Site note delete processed");

        Ok(removed)
    }
}
