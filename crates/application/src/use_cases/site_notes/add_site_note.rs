use siteward_domain::site_notes::pick_note_color;
use siteward_domain::{DomainError, DomainNotes, SiteNote, SiteNoteDraft};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{modify_config, Clock, ConfigStore};

pub struct AddSiteNoteUseCase {
    store: Arc<dyn ConfigStore>,
    clock: Arc<dyn Clock>,
}

impl AddSiteNoteUseCase {
    pub fn new(store: Arc<dyn ConfigStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str, draft: SiteNoteDraft) -> Result<SiteNote, DomainError> {
        let domain = domain.trim().to_string();
        if domain.is_empty() {
            return Err(DomainError::InvalidSiteNote(
                "Domain cannot be empty".to_string(),
            ));
        }
        SiteNote::validate_text(&draft.text).map_err(DomainError::InvalidSiteNote)?;

        let now = self.clock.now();
        let millis = now.timestamp_millis();
        let timestamp = now.to_rfc3339();
        let color = match draft.color {
            Some(color) => {
                SiteNote::validate_color(&color).map_err(DomainError::InvalidSiteNote)?;
                color
            }
            None => pick_note_color(millis).to_string(),
        };

        let key = domain.clone();
        let note = modify_config(self.store.as_ref(), move |config| {
            if config.notes_for(&key).is_none() {
                config.site_notes.push(DomainNotes::new(key.clone()));
            }
            let site = config
                .notes_for_mut(&key)
                .ok_or_else(|| DomainError::SiteNotesNotFound(key.clone()))?;

            let note = SiteNote {
                id: site.next_note_id(millis),
                text: draft.text,
                color,
                position: draft.position,
                created_at: timestamp.clone(),
                updated_at: timestamp,
            };
            site.notes.push(note.clone());
            Ok(note)
        })
        .await?;

        info!(domain = %domain, note_id = %note.id, "Site note added");

        Ok(note)
    }
}
