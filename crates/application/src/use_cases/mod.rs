pub mod access;
pub mod blocked_domains;
pub mod config;
pub mod exceptions;
pub mod notifications;
pub mod site_notes;

pub use access::{
    CheckAllTabsUseCase, CheckUrlUseCase, HandleTabUpdateUseCase, InterceptNavigationUseCase,
    NavigationAction,
};
pub use blocked_domains::{GetBlockedDomainsUseCase, UpdateBlockedDomainsUseCase};
pub use config::{ExportConfigurationUseCase, GetConfigurationUseCase, ImportConfigurationUseCase};
pub use exceptions::{GetExceptionUrlsUseCase, UpdateExceptionUrlsUseCase};
pub use notifications::GetUpcomingUnblocksUseCase;
pub use site_notes::{
    AddSiteNoteUseCase, DeleteAllSiteNotesUseCase, DeleteSiteNoteUseCase, GetSiteNotesUseCase,
    UpdateSiteNoteUseCase,
};
