use siteward_domain::{DomainError, SiteNote, SiteNoteUpdate};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{modify_config, Clock, ConfigStore};

pub struct UpdateSiteNoteUseCase {
    store: Arc<dyn ConfigStore>,
    clock: Arc<dyn Clock>,
}

impl UpdateSiteNoteUseCase {
    pub fn new(store: Arc<dyn ConfigStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        note_id: &str,
        updates: SiteNoteUpdate,
    ) -> Result<SiteNote, DomainError> {
        updates.validate().map_err(DomainError::InvalidSiteNote)?;

        let domain = domain.trim().to_string();
        let id = note_id.to_string();
        let timestamp = self.clock.now().to_rfc3339();

        let key = domain.clone();
        let note = modify_config(self.store.as_ref(), move |config| {
            let site = config
                .notes_for_mut(&key)
                .ok_or_else(|| DomainError::SiteNotesNotFound(key.clone()))?;
            let note = site
                .find_mut(&id)
                .ok_or_else(|| DomainError::SiteNoteNotFound(id.clone()))?;

            note.apply(&updates, timestamp);
            Ok(note.clone())
        })
        .await?;

        info!(domain = %domain, note_id = %note.id, "Site note updated");

        Ok(note)
    }
}
