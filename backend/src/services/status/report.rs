use actix_web::{HttpResponse, Responder};
use rusqlite::Connection;
use serde::Serialize;
use std::env;

/// Health snapshot returned by `GET /test`.
#[derive(Debug, Serialize)]
struct StatusReport {
    backend: String,
    database: String,
    database_url: String,
    database_name: String,
    connection_status: String,
    tables: Vec<String>,
}

pub(crate) async fn process() -> impl Responder {
    HttpResponse::Ok().json(build_report())
}

fn build_report() -> StatusReport {
    let mut report = StatusReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: env_marker("DATABASE_URL"),
        database_name: env_marker("DATABASE_NAME"),
        connection_status: "Not Connected".to_string(),
        tables: Vec::new(),
    };

    let path = match env::var("DATABASE_URL") {
        Ok(path) => path,
        Err(_) => return report,
    };

    match list_tables(&path) {
        Ok(tables) => {
            report.database = "✅ Connected & Working".to_string();
            report.connection_status = "Connected".to_string();
            report.tables = tables;
        }
        Err(e) => {
            // Keep the error short; this is a status line, not a log.
            let short: String = e.to_string().chars().take(50).collect();
            report.database = format!("❌ Error: {}", short);
        }
    }

    report
}

fn env_marker(key: &str) -> String {
    if env::var(key).is_ok() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

/// Best-effort probe: opens the SQLite file and lists up to ten table names.
fn list_tables(path: &str) -> Result<Vec<String>, rusqlite::Error> {
    let conn = Connection::open(path)?;
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' LIMIT 10")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .filter_map(Result::ok)
        .collect();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::build_report;

    #[test]
    fn report_always_marks_backend_running() {
        let report = build_report();
        assert_eq!(report.backend, "✅ Running");
        // Whatever the environment, the probe must not panic and the report
        // must stay internally consistent.
        if report.connection_status == "Not Connected" {
            assert!(report.tables.is_empty());
        }
    }
}
