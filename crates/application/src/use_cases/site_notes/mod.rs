pub mod add_site_note;
pub mod delete_all_site_notes;
pub mod delete_site_note;
pub mod get_site_notes;
pub mod update_site_note;

pub use add_site_note::AddSiteNoteUseCase;
pub use delete_all_site_notes::DeleteAllSiteNotesUseCase;
pub use delete_site_note::DeleteSiteNoteUseCase;
pub use get_site_notes::GetSiteNotesUseCase;
pub use update_site_note::UpdateSiteNoteUseCase;
