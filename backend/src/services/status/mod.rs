//! Best-effort process and database health reporting.
//!
//! The database is entirely optional: when `DATABASE_URL` points at a SQLite
//! file the report includes its table names, and when it does not the report
//! simply says so. The endpoint itself never fails.

mod report;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// Configures and returns the Actix scope for the diagnostics route.
///
/// # Registered Routes:
///
/// *   **`GET /test`**:
///     - **Handler**: `report::process`
///     - **Description**: Returns a health snapshot: backend liveness,
///       whether the database environment variables are set, and the result
///       of a best-effort connection probe.
pub fn configure_routes() -> Scope {
    scope("/test").route("", get().to(report::process))
}
