pub mod get_exception_urls;
pub mod update_exception_urls;

pub use get_exception_urls::GetExceptionUrlsUseCase;
pub use update_exception_urls::UpdateExceptionUrlsUseCase;
