//! # Template Service Module
//!
//! Exposes the read-only template catalog to the editing front end. The
//! catalog is a fixed set of named presets constructed at process start; no
//! endpoint here mutates anything.
//!
//! ## Sub-modules:
//! - `catalog`: The `TemplateCatalog` lookup table injected as shared state.
//! - `list`: Handles the listing of every available template.

pub mod catalog;
mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`GET /api/templates`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns the full list of built-in templates, each
///       with its display metadata and opaque preset map.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(list::process))
}
