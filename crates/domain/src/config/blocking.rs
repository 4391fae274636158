use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    /// Page blocked navigations are redirected to. Reason, message and the
    /// original URL are appended as query parameters.
    #[serde(default = "default_block_page")]
    pub block_page: String,
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            block_page: default_block_page(),
        }
    }
}

fn default_block_page() -> String {
    "/blocked".to_string()
}
