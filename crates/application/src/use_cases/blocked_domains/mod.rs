pub mod get_blocked_domains;
pub mod update_blocked_domains;

pub use get_blocked_domains::GetBlockedDomainsUseCase;
pub use update_blocked_domains::UpdateBlockedDomainsUseCase;
