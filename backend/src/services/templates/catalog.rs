use common::model::template::Template;
use serde_json::json;

/// Read-only template catalog.
///
/// Built once in `main` and shared with every worker through `web::Data`;
/// nothing mutates it after startup. Lookups are exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// The built-in presets offered to the editing front end.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Template {
                id: "reel-916-bold".to_string(),
                name: "Reel 9:16 • Bold".to_string(),
                aspect_ratio: "9:16".to_string(),
                description: "Vertical format with bold headline and punchy cuts.".to_string(),
                preset: json!({
                    "font": "Inter ExtraBold",
                    "color": "#3b82f6",
                    "lower_third": true
                }),
            },
            Template {
                id: "corporate-169-clean".to_string(),
                name: "Corporate 16:9 • Clean".to_string(),
                aspect_ratio: "16:9".to_string(),
                description: "Clean lower-thirds, logo bug, subtle transitions.".to_string(),
                preset: json!({
                    "font": "Inter Medium",
                    "color": "#22d3ee",
                    "lower_third": true
                }),
            },
            Template {
                id: "event-11-pop".to_string(),
                name: "Event Montage 1:1 • Pop".to_string(),
                aspect_ratio: "1:1".to_string(),
                description: "Square montage with beat-matched cuts and stickers.".to_string(),
                preset: json!({
                    "font": "Inter Black",
                    "color": "#f59e0b",
                    "stickers": true
                }),
            },
        ])
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }
}

#[cfg(test)]
mod tests {
    use super::TemplateCatalog;
    use std::collections::HashSet;

    #[test]
    fn default_catalog_has_unique_ids() {
        let catalog = TemplateCatalog::with_defaults();
        let ids: HashSet<&str> = catalog.all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.all().len());
        assert_eq!(catalog.all().len(), 3);
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let catalog = TemplateCatalog::with_defaults();
        assert!(catalog.get("reel-916-bold").is_some());
        assert!(catalog.get("REEL-916-BOLD").is_none());
        assert!(catalog.get("reel-916").is_none());
    }
}
