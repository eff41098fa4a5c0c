use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
/// Request payload for the instant-edit endpoint.
/// Carries the target template, the asset references to pick a preview from
/// (order matters), and optional cosmetic overrides that a future rendering
/// stage may consume.
pub struct InstantEditRequest {
    pub template_id: String,
    pub assets: Vec<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub brand_color: Option<String>,
    pub logo_url: Option<String>,
}
