pub mod check_all_tabs;
pub mod check_url;
pub mod handle_tab_update;
pub mod intercept_navigation;

pub use check_all_tabs::CheckAllTabsUseCase;
pub use check_url::CheckUrlUseCase;
pub use handle_tab_update::HandleTabUpdateUseCase;
pub use intercept_navigation::{block_page_url, InterceptNavigationUseCase, NavigationAction};
