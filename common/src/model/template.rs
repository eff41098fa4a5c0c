use serde::{Deserialize, Serialize};

/// A named, immutable preset describing stylistic defaults for a target
/// aspect ratio. The catalog of templates is fixed at process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub aspect_ratio: String,
    pub description: String,
    /// Opaque styling knobs (font, color, feature flags). Passed through to
    /// the client untouched, never interpreted by the backend.
    pub preset: serde_json::Value,
}
