pub mod get_upcoming_unblocks;

pub use get_upcoming_unblocks::GetUpcomingUnblocksUseCase;
