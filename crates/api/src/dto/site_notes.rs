use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteNotesResponse {
    pub success: bool,
    pub removed: usize,
}
