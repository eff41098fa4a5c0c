use crate::error::ApiError;
use crate::services::templates::catalog::TemplateCatalog;
use actix_web::{web, HttpResponse, Responder};
use common::requests::InstantEditRequest;
use common::responses::{InstantEditResponse, PreviewType};

const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".mov", ".mkv", ".webm"];
const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// Shown when no submitted asset classifies as video or image.
const PLACEHOLDER_URL: &str = "https://placehold.co/1280x720?text=Instant+Preview";

const PREVIEW_NOTES: &str = "Instant edit applied. This preview uses your first uploaded media. \
     In a full pipeline, we would trim, add lower-thirds, color grade, \
     and export in the template's aspect ratio.";

/// HTTP handler wrapper for `POST /api/instant-edit`.
pub(crate) async fn process(
    catalog: web::Data<TemplateCatalog>,
    payload: web::Json<InstantEditRequest>,
) -> impl Responder {
    match select_preview(&catalog, payload.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.to_response(),
    }
}

/// Picks the representative preview for a set of asset references.
///
/// Pure function of the catalog and the request: the template must exist
/// (exact id match) and the asset list must be non-empty. The list is
/// scanned in order twice, videos first, then images; if neither pass
/// matches, the fixed placeholder stands in.
///
/// Matching is a raw suffix test on the lower-cased reference, so anything
/// after the extension (query string, fragment) defeats it. Known
/// limitation, kept deliberately.
fn select_preview(
    catalog: &TemplateCatalog,
    req: InstantEditRequest,
) -> Result<InstantEditResponse, ApiError> {
    let template = catalog
        .get(&req.template_id)
        .ok_or_else(|| ApiError::NotFound("Template not found".to_string()))?
        .clone();

    if req.assets.is_empty() {
        return Err(ApiError::Validation("No assets provided".to_string()));
    }

    let (preview_url, preview_type) = if let Some(url) = first_match(&req.assets, &VIDEO_EXTENSIONS)
    {
        (url.to_string(), PreviewType::Video)
    } else if let Some(url) = first_match(&req.assets, &IMAGE_EXTENSIONS) {
        (url.to_string(), PreviewType::Image)
    } else {
        (PLACEHOLDER_URL.to_string(), PreviewType::Placeholder)
    };

    Ok(InstantEditResponse {
        template,
        preview_type,
        preview_url,
        used_assets: req.assets,
        notes: PREVIEW_NOTES.to_string(),
    })
}

/// First reference whose lower-cased form ends with one of `extensions`.
fn first_match<'a>(assets: &'a [String], extensions: &[&str]) -> Option<&'a str> {
    assets
        .iter()
        .map(String::as_str)
        .find(|asset| {
            let lower = asset.to_lowercase();
            extensions.iter().any(|ext| lower.ends_with(ext))
        })
}
