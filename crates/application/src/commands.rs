//! Typed command surface for UI surfaces (popup, options page, block page).
//!
//! Every request is a [`Command`] tagged by its `action` field; the
//! [`CommandDispatcher`] routes each variant to exactly one handler.

use serde::{Deserialize, Serialize};
use siteward_domain::{
    BlockReason, BlockedDomainEntry, BlockedDomainRule, Configuration, DomainError, ExceptionRule,
    SiteNote, SiteNoteDraft, SiteNoteUpdate, Verdict,
};
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::ports::{BrowserTabs, Clock, ConfigStore};
use crate::use_cases::{
    AddSiteNoteUseCase, CheckAllTabsUseCase, CheckUrlUseCase, DeleteAllSiteNotesUseCase,
    DeleteSiteNoteUseCase, ExportConfigurationUseCase, GetBlockedDomainsUseCase,
    GetConfigurationUseCase, GetExceptionUrlsUseCase, GetSiteNotesUseCase,
    GetUpcomingUnblocksUseCase, HandleTabUpdateUseCase, ImportConfigurationUseCase,
    InterceptNavigationUseCase, UpdateBlockedDomainsUseCase, UpdateExceptionUrlsUseCase,
    UpdateSiteNoteUseCase,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Command {
    GetConfig,
    #[serde(rename_all = "camelCase")]
    UpdateConfig {
        #[serde(default)]
        blocked_domains: Option<Vec<BlockedDomainEntry>>,
        #[serde(default)]
        exception_urls: Option<Vec<ExceptionRule>>,
    },
    #[serde(rename_all = "camelCase")]
    ImportConfig { json_data: String },
    ExportConfig,
    CheckAllTabs,
    CheckUrl { url: String },
    GetSiteNotes { domain: String },
    AddSiteNote { domain: String, note: SiteNoteDraft },
    #[serde(rename_all = "camelCase")]
    UpdateSiteNote {
        domain: String,
        note_id: String,
        updates: SiteNoteUpdate,
    },
    #[serde(rename_all = "camelCase")]
    DeleteSiteNote { domain: String, note_id: String },
    DeleteSiteNotes { domain: String },
}

impl Command {
    pub fn action(&self) -> &'static str {
        match self {
            Command::GetConfig => "getConfig",
            Command::UpdateConfig { .. } => "updateConfig",
            Command::ImportConfig { .. } => "importConfig",
            Command::ExportConfig => "exportConfig",
            Command::CheckAllTabs => "checkAllTabs",
            Command::CheckUrl { .. } => "checkUrl",
            Command::GetSiteNotes { .. } => "getSiteNotes",
            Command::AddSiteNote { .. } => "addSiteNote",
            Command::UpdateSiteNote { .. } => "updateSiteNote",
            Command::DeleteSiteNote { .. } => "deleteSiteNote",
            Command::DeleteSiteNotes { .. } => "deleteSiteNotes",
        }
    }
}

/// Wire form of a [`Verdict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictView {
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<BlockReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerdictView {
    pub fn from_verdict(verdict: &Verdict) -> Self {
        Self {
            blocked: verdict.is_blocked(),
            reason: verdict.reason(),
            message: verdict.message().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandResponse {
    Config(Configuration),
    #[serde(rename_all = "camelCase")]
    ConfigUpdated {
        success: bool,
        blocked_domains: Vec<BlockedDomainRule>,
        exception_urls: Vec<ExceptionRule>,
    },
    Exported { json: String },
    TabsChecked { redirected: usize },
    Verdict(VerdictView),
    Notes(Vec<SiteNote>),
    Note(SiteNote),
    Deleted { success: bool, removed: usize },
    Success { success: bool },
}

impl CommandResponse {
    pub fn ok() -> Self {
        CommandResponse::Success { success: true }
    }
}

/// Use cases wired for one configuration store, clock and tab registry.
pub struct CommandDispatcher {
    pub get_configuration: Arc<GetConfigurationUseCase>,
    pub get_blocked_domains: Arc<GetBlockedDomainsUseCase>,
    pub update_blocked_domains: Arc<UpdateBlockedDomainsUseCase>,
    pub get_exception_urls: Arc<GetExceptionUrlsUseCase>,
    pub update_exception_urls: Arc<UpdateExceptionUrlsUseCase>,
    pub import_configuration: Arc<ImportConfigurationUseCase>,
    pub export_configuration: Arc<ExportConfigurationUseCase>,
    pub check_url: Arc<CheckUrlUseCase>,
    pub intercept_navigation: Arc<InterceptNavigationUseCase>,
    pub handle_tab_update: Arc<HandleTabUpdateUseCase>,
    pub check_all_tabs: Arc<CheckAllTabsUseCase>,
    pub get_site_notes: Arc<GetSiteNotesUseCase>,
    pub add_site_note: Arc<AddSiteNoteUseCase>,
    pub update_site_note: Arc<UpdateSiteNoteUseCase>,
    pub delete_site_note: Arc<DeleteSiteNoteUseCase>,
    pub delete_all_site_notes: Arc<DeleteAllSiteNotesUseCase>,
    pub get_upcoming_unblocks: Arc<GetUpcomingUnblocksUseCase>,
}

impl CommandDispatcher {
    pub fn from_ports(
        store: Arc<dyn ConfigStore>,
        clock: Arc<dyn Clock>,
        tabs: Arc<dyn BrowserTabs>,
        block_page: impl Into<String>,
        lead_minutes: u32,
    ) -> Self {
        let check_url = Arc::new(CheckUrlUseCase::new(store.clone(), clock.clone()));
        let intercept_navigation = Arc::new(InterceptNavigationUseCase::new(
            check_url.clone(),
            block_page,
        ));

        Self {
            get_configuration: Arc::new(GetConfigurationUseCase::new(store.clone())),
            get_blocked_domains: Arc::new(GetBlockedDomainsUseCase::new(store.clone())),
            update_blocked_domains: Arc::new(UpdateBlockedDomainsUseCase::new(store.clone())),
            get_exception_urls: Arc::new(GetExceptionUrlsUseCase::new(store.clone())),
            update_exception_urls: Arc::new(UpdateExceptionUrlsUseCase::new(store.clone())),
            import_configuration: Arc::new(ImportConfigurationUseCase::new(store.clone())),
            export_configuration: Arc::new(ExportConfigurationUseCase::new(store.clone())),
            handle_tab_update: Arc::new(HandleTabUpdateUseCase::new(
                tabs.clone(),
                intercept_navigation.clone(),
            )),
            check_all_tabs: Arc::new(CheckAllTabsUseCase::new(
                tabs,
                intercept_navigation.clone(),
            )),
            check_url,
            intercept_navigation,
            get_site_notes: Arc::new(GetSiteNotesUseCase::new(store.clone())),
            add_site_note: Arc::new(AddSiteNoteUseCase::new(store.clone(), clock.clone())),
            update_site_note: Arc::new(UpdateSiteNoteUseCase::new(store.clone(), clock.clone())),
            delete_site_note: Arc::new(DeleteSiteNoteUseCase::new(store.clone())),
            delete_all_site_notes: Arc::new(DeleteAllSiteNotesUseCase::new(store.clone())),
            get_upcoming_unblocks: Arc::new(GetUpcomingUnblocksUseCase::new(
                store,
                clock,
                lead_minutes,
            )),
        }
    }

    #[instrument(skip(self, command), fields(action = command.action()))]
    pub async fn dispatch(&self, command: Command) -> Result<CommandResponse, DomainError> {
        match command {
            Command::GetConfig => self.handle_get_config(),
            Command::UpdateConfig {
                blocked_domains,
                exception_urls,
            } => {
                self.handle_update_config(blocked_domains, exception_urls)
                    .await
            }
            Command::ImportConfig { json_data } => self.handle_import_config(&json_data).await,
            Command::ExportConfig => self.handle_export_config(),
            Command::CheckAllTabs => self.handle_check_all_tabs().await,
            Command::CheckUrl { url } => self.handle_check_url(&url),
            Command::GetSiteNotes { domain } => self.handle_get_site_notes(&domain),
            Command::AddSiteNote { domain, note } => {
                self.handle_add_site_note(&domain, note).await
            }
            Command::UpdateSiteNote {
                domain,
                note_id,
                updates,
            } => {
                self.handle_update_site_note(&domain, &note_id, updates)
                    .await
            }
            Command::DeleteSiteNote { domain, note_id } => {
                self.handle_delete_site_note(&domain, &note_id).await
            }
            Command::DeleteSiteNotes { domain } => self.handle_delete_site_notes(&domain).await,
        }
    }

    fn handle_get_config(&self) -> Result<CommandResponse, DomainError> {
        Ok(CommandResponse::Config(
            self.get_configuration.execute().as_ref().clone(),
        ))
    }

    async fn handle_update_config(
        &self,
        blocked_domains: Option<Vec<BlockedDomainEntry>>,
        exception_urls: Option<Vec<ExceptionRule>>,
    ) -> Result<CommandResponse, DomainError> {
        if let Some(entries) = blocked_domains {
            self.update_blocked_domains.execute(entries).await?;
        }
        if let Some(rules) = exception_urls {
            self.update_exception_urls.execute(rules).await?;
        }

        self.sweep_tabs().await;

        let config = self.get_configuration.execute();
        Ok(CommandResponse::ConfigUpdated {
            success: true,
            blocked_domains: config.blocked_domains.clone(),
            exception_urls: config.exception_urls.clone(),
        })
    }

    async fn handle_import_config(&self, json: &str) -> Result<CommandResponse, DomainError> {
        self.import_configuration.execute(json).await?;
        self.sweep_tabs().await;
        Ok(CommandResponse::ok())
    }

    fn handle_export_config(&self) -> Result<CommandResponse, DomainError> {
        let json = self.export_configuration.execute()?;
        Ok(CommandResponse::Exported { json })
    }

    async fn handle_check_all_tabs(&self) -> Result<CommandResponse, DomainError> {
        let redirected = self.check_all_tabs.execute().await?;
        Ok(CommandResponse::TabsChecked { redirected })
    }

    fn handle_check_url(&self, url: &str) -> Result<CommandResponse, DomainError> {
        let evaluation = self.check_url.execute(url);
        Ok(CommandResponse::Verdict(VerdictView::from_verdict(
            &evaluation.verdict,
        )))
    }

    fn handle_get_site_notes(&self, domain: &str) -> Result<CommandResponse, DomainError> {
        Ok(CommandResponse::Notes(self.get_site_notes.execute(domain)))
    }

    async fn handle_add_site_note(
        &self,
        domain: &str,
        draft: SiteNoteDraft,
    ) -> Result<CommandResponse, DomainError> {
        let note = self.add_site_note.execute(domain, draft).await?;
        Ok(CommandResponse::Note(note))
    }

    async fn handle_update_site_note(
        &self,
        domain: &str,
        note_id: &str,
        updates: SiteNoteUpdate,
    ) -> Result<CommandResponse, DomainError> {
        let note = self
            .update_site_note
            .execute(domain, note_id, updates)
            .await?;
        Ok(CommandResponse::Note(note))
    }

    async fn handle_delete_site_note(
        &self,
        domain: &str,
        note_id: &str,
    ) -> Result<CommandResponse, DomainError> {
        let removed = self.delete_site_note.execute(domain, note_id).await?;
        Ok(CommandResponse::Deleted {
            success: true,
            removed: usize::from(removed),
        })
    }

    async fn handle_delete_site_notes(&self, domain: &str) -> Result<CommandResponse, DomainError> {
        let removed = self.delete_all_site_notes.execute(domain).await?;
        Ok(CommandResponse::Deleted {
            success: true,
            removed,
        })
    }

    /// Re-applies the current rules to open tabs after an edit. A failed
    /// sweep does not fail the edit.
    pub async fn sweep_tabs(&self) {
        if let Err(e) = self.check_all_tabs.execute().await {
            warn!(error = %e, "Failed to re-check open tabs");
        }
    }
}
