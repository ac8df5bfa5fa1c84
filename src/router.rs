use crate::errors::ServerError;
use crate::responses::json_response;
use crate::responses::ResultResp;
use crate::scraper::models::JobsResponse;
use crate::scraper::query::build_query;
use crate::scraper::JobBoardScraper;
use astra::Request;

pub fn handle(req: Request, scraper: &JobBoardScraper) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/api/jobs") => {
            let pairs = parse_query_pairs(&req);
            let query = build_query(&pairs);
            let jobs = scraper.fetch_jobs(&query)?;

            json_response(&JobsResponse {
                success: true,
                jobs,
            })
        }
        (_, "/api/jobs") => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// Split the inbound query string into pairs, preserving document order so
/// the upstream body sees the parameters exactly as the caller sent them.
pub(crate) fn parse_query_pairs(req: &Request) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            if pair.is_empty() {
                continue;
            }
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            pairs.push((key.to_string(), value.to_string()));
        }
    }

    pairs
}
