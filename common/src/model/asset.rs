use serde::{Deserialize, Serialize};

/// Metadata for one uploaded file after it has been persisted.
///
/// `original` and `mime` are whatever the client declared; only `stored_as`
/// and `url` are produced by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    pub original: Option<String>,
    pub stored_as: String,
    pub url: String,
    pub mime: Option<String>,
}

/// Response body for a whole upload batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSummary {
    pub count: usize,
    pub files: Vec<StoredFile>,
}
