pub mod access;
pub mod config;
pub mod site_notes;
pub mod upcoming;

pub use access::{
    CheckUrlRequest, CheckUrlResponse, NavigationRequest, NavigationResponse, SweepResponse,
};
pub use config::ImportResponse;
pub use site_notes::DeleteNotesResponse;
pub use upcoming::UpcomingUnblockResponse;
