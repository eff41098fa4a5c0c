//! # Instant Edit Service Module
//!
//! The mock processing endpoint behind the editor's "instant edit" button.
//! No real rendering happens: the service validates the request against the
//! template catalog and deterministically picks one of the submitted asset
//! references to act as the preview.

mod select;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/instant-edit";

/// Configures and returns the Actix scope for the instant-edit endpoint.
///
/// # Registered Routes:
///
/// *   **`POST /api/instant-edit`**:
///     - **Handler**: `select::process`
///     - **Description**: Resolves the requested template, picks a preview
///       asset from the submitted references (videos outrank images, first
///       match wins, fixed placeholder otherwise) and echoes the inputs back
///       with the classification.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(select::process))
}
