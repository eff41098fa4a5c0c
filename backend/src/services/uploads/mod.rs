//! Handles ingestion of raw media assets from the editing front end.
//!
//! Uploaded files are persisted under generated names in the configured
//! upload directory and become immediately reachable through the static
//! `/uploads/{stored_name}` mount registered in `main.rs`. Nothing here ever
//! overwrites or deletes an existing file.

mod store;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/upload";

/// Configures and returns the Actix scope for the upload endpoint.
///
/// # Registered Routes:
///
/// *   **`POST /api/upload`**:
///     - **Handler**: `store::process`
///     - **Description**: Accepts a multipart batch of files, streams each
///       one to disk under a fresh collision-resistant name, and returns the
///       stored metadata (original name, stored name, public URL, declared
///       mime type) for the whole batch.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(store::process))
}
