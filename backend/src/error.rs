use actix_web::HttpResponse;
use log::error;
use std::fmt;

/// Error taxonomy shared by the API services.
///
/// `Validation` and `NotFound` are client errors and carry a short message
/// that is returned verbatim. `Io` is a storage failure; the underlying
/// error is logged and the caller only sees a generic body.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Io(std::io::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::Io(e) => write!(f, "storage error: {}", e),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Io(e)
    }
}

impl ApiError {
    pub fn to_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(msg) => HttpResponse::BadRequest().body(msg.clone()),
            ApiError::NotFound(msg) => HttpResponse::NotFound().body(msg.clone()),
            ApiError::Io(e) => {
                error!("storage failure: {}", e);
                HttpResponse::InternalServerError().body("Storage error")
            }
        }
    }
}
