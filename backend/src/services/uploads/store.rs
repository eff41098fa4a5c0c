use crate::config::Config;
use crate::error::ApiError;
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::asset::{StoredFile, UploadSummary};
use futures_util::StreamExt;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use uuid::Uuid;

/// HTTP handler wrapper for `POST /api/upload`.
///
/// - On success: `200 OK` with the `UploadSummary` for the whole batch.
/// - On failure: the status mapped from the `ApiError` variant.
pub(crate) async fn process(
    req: HttpRequest,
    payload: Multipart,
    config: web::Data<Config>,
) -> impl Responder {
    match store_assets(&req, payload, &config).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => e.to_response(),
    }
}

/// Persists every file part of a multipart batch to the upload directory.
///
/// Each file is streamed chunk by chunk into a buffered writer, so the full
/// payload is never held in memory. Stored names are a fresh UUID hex token
/// plus the sanitized original extension; no uniqueness check is made against
/// existing files. The first write failure aborts the whole request, leaving
/// any files already written in place.
async fn store_assets(
    req: &HttpRequest,
    mut payload: Multipart,
    config: &Config,
) -> Result<UploadSummary, ApiError> {
    // Absolute URLs are built from however this request reached us, not from
    // a configured origin.
    let base = {
        let info = req.connection_info();
        format!("{}://{}", info.scheme(), info.host())
    };

    let mut saved: Vec<StoredFile> = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| ApiError::Validation(format!("Malformed upload payload: {}", e)))?;

        // Only parts carrying a filename are uploads; plain value fields are
        // ignored.
        let original = match field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
        {
            Some(name) => name,
            None => continue,
        };

        let mime = field.content_type().map(|m| m.to_string());

        let stored_as = format!(
            "{}{}",
            Uuid::new_v4().simple(),
            safe_extension(&original)
        );
        let path = Path::new(&config.upload_dir).join(&stored_as);

        let out = File::create(&path)?;
        let mut writer = BufWriter::new(out);
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| ApiError::Validation(format!("Malformed upload payload: {}", e)))?;
            writer.write_all(&chunk)?;
        }
        writer.flush()?;

        info!("stored upload {} as {}", original, stored_as);

        let url = format!("{}/uploads/{}", base, stored_as);
        saved.push(StoredFile {
            original: Some(original),
            stored_as,
            url,
            mime,
        });
    }

    if saved.is_empty() {
        return Err(ApiError::Validation("No files uploaded".to_string()));
    }

    Ok(UploadSummary {
        count: saved.len(),
        files: saved,
    })
}

/// Derives the stored-name suffix from an untrusted client filename.
///
/// Keeps the text after the last `.`, lower-cased, and only when both stem
/// and extension are non-empty and the extension is purely alphanumeric.
/// Anything else yields an empty suffix. The filename itself is never used
/// as a path.
fn safe_extension(original: &str) -> String {
    match original.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            format!(".{}", ext.to_lowercase())
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{process, safe_extension};
    use crate::config::Config;
    use actix_web::{web, App};
    use common::model::asset::UploadSummary;
    use tempfile::TempDir;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(safe_extension("CLIP.MP4"), ".mp4");
        assert_eq!(safe_extension("photo.JpEg"), ".jpeg");
    }

    #[test]
    fn missing_or_unsafe_extensions_are_dropped() {
        assert_eq!(safe_extension("noext"), "");
        assert_eq!(safe_extension("trailing."), "");
        assert_eq!(safe_extension(".gitignore"), "");
        assert_eq!(safe_extension("weird.p@th"), "");
        assert_eq!(safe_extension("spaced.m p4"), "");
    }

    #[test]
    fn only_the_last_segment_counts() {
        assert_eq!(safe_extension("archive.tar.gz"), ".gz");
        assert_eq!(safe_extension("../../evil.sh"), ".sh");
    }

    fn test_config(dir: &TempDir) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            upload_dir: dir.path().to_string_lossy().into_owned(),
        }
    }

    /// Builds a `multipart/form-data` body from `(filename, content_type,
    /// bytes)` parts, returning the content-type header value and the body.
    fn multipart_body(parts: &[(&str, &str, &[u8])]) -> (String, Vec<u8>) {
        let boundary = "------------------------abcdef0123456789";
        let mut body = Vec::new();
        for (filename, content_type, bytes) in parts {
            body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"files\"; filename=\"{}\"\r\n",
                    filename
                )
                .as_bytes(),
            );
            body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", boundary),
            body,
        )
    }

    #[actix_web::test]
    async fn stores_each_file_under_a_fresh_name() {
        use actix_web::test;
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(&dir)))
                .route("/api/upload", web::post().to(process)),
        )
        .await;

        let (content_type, body) = multipart_body(&[
            ("clip.MP4", "video/mp4", b"fake video bytes"),
            ("photo.png", "image/png", b"fake image bytes"),
        ]);
        let req = test::TestRequest::post()
            .uri("/api/upload")
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_request();
        let summary: UploadSummary = test::call_and_read_body_json(&app, req).await;

        assert_eq!(summary.count, 2);
        assert_eq!(summary.files.len(), 2);
        assert_ne!(summary.files[0].stored_as, summary.files[1].stored_as);
        assert!(summary.files[0].stored_as.ends_with(".mp4"));
        assert!(summary.files[1].stored_as.ends_with(".png"));
        assert_eq!(summary.files[0].original.as_deref(), Some("clip.MP4"));
        assert_eq!(summary.files[0].mime.as_deref(), Some("video/mp4"));

        for file in &summary.files {
            assert!(file.url.ends_with(&format!("/uploads/{}", file.stored_as)));
            assert!(dir.path().join(&file.stored_as).exists());
        }
        assert_eq!(
            std::fs::read(dir.path().join(&summary.files[0].stored_as)).unwrap(),
            b"fake video bytes"
        );
    }

    #[actix_web::test]
    async fn filename_without_extension_stores_bare_token() {
        use actix_web::test;
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(&dir)))
                .route("/api/upload", web::post().to(process)),
        )
        .await;

        let (content_type, body) =
            multipart_body(&[("rawdata", "application/octet-stream", b"bytes")]);
        let req = test::TestRequest::post()
            .uri("/api/upload")
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_request();
        let summary: UploadSummary = test::call_and_read_body_json(&app, req).await;

        assert_eq!(summary.count, 1);
        assert!(!summary.files[0].stored_as.contains('.'));
    }

    #[actix_web::test]
    async fn batch_without_files_is_rejected_and_writes_nothing() {
        use actix_web::test;
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config(&dir)))
                .route("/api/upload", web::post().to(process)),
        )
        .await;

        // A lone value field, no file parts.
        let boundary = "------------------------abcdef0123456789";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{b}--\r\n",
            b = boundary
        );
        let req = test::TestRequest::post()
            .uri("/api/upload")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            ))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
