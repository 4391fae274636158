pub mod dto;
pub mod errors;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod state;

pub use routes::{create_api_routes, create_page_routes};
pub use state::AppState;
