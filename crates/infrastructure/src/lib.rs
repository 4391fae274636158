pub mod repositories;
pub mod system;
