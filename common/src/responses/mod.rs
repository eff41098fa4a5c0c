use crate::model::template::Template;
use serde::{Deserialize, Serialize};

/// Classification of the chosen preview asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewType {
    Video,
    Image,
    Placeholder,
}

/// Response body for the instant-edit endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstantEditResponse {
    pub template: Template,
    pub preview_type: PreviewType,
    pub preview_url: String,
    /// The client-supplied asset list, echoed back unchanged.
    pub used_assets: Vec<String>,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::PreviewType;

    #[test]
    fn preview_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PreviewType::Video).unwrap(),
            "\"video\""
        );
        assert_eq!(
            serde_json::to_string(&PreviewType::Placeholder).unwrap(),
            "\"placeholder\""
        );
    }
}
