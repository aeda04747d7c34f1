use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: Option<String>,
    pub text_preview: Option<String>,
}

impl UploadResponse {
    pub fn preview(&self) -> Option<&str> {
        self.text_preview.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub error: Option<String>,
    pub message: Option<String>,
    pub total_chunks_stored: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Rejected(String),
    Processed {
        message: String,
        total_chunks: Option<u64>,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryRequest {
    pub user_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<String>,
}
