use crate::errors::ServerError;
use crate::responses::json::json_builder;
use crate::scraper::ScraperError;
use astra::{Body, Response};
use serde_json::json;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a structured JSON error response.
///
/// Upstream trouble and markup drift both map to 502: from this service's
/// point of view the upstream failed to deliver usable listings.
pub fn error_to_response(err: ServerError) -> Response {
    let status = match &err {
        ServerError::NotFound => 404,
        ServerError::MethodNotAllowed => 405,
        ServerError::InternalError => 500,
        ServerError::Scrape(ScraperError::Selector(_)) => 500,
        ServerError::Scrape(_) => 502,
    };

    json_error_response(status, &err.to_string())
}

/// Build a JSON error body in the same shape as the success payload.
pub fn json_error_response(status: u16, message: &str) -> Response {
    let body = json!({ "success": false, "error": message }).to_string();
    json_builder(status, Body::from(body))
}
