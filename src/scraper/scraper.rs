// scraper.rs
use crate::scraper::models::{Company, Job, ListingsEnvelope};
use crate::scraper::normalize;
use crate::scraper::ScraperError;
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

#[derive(Clone)]
pub struct JobBoardScraper {
    client: Client,
    upstream_url: String,
}

impl JobBoardScraper {
    pub fn new(upstream_url: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScraperError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            upstream_url: upstream_url.to_string(),
        })
    }

    /// Run the whole pipeline for one translated query: fetch the upstream
    /// envelope, then extract one `Job` per listing node.
    pub fn fetch_jobs(&self, query: &str) -> Result<Vec<Job>, ScraperError> {
        let envelope = self.fetch_listings(query)?;
        extract_jobs(&envelope.html, Utc::now())
    }

    fn fetch_listings(&self, query: &str) -> Result<ListingsEnvelope, ScraperError> {
        use reqwest::header::{
            HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONTENT_TYPE, PRAGMA,
        };

        // The listings endpoint only answers browser-shaped AJAX requests.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-GB,en-US;q=0.9,en;q=0.8"),
        );
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=UTF-8"),
        );
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
        headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
        headers.insert("sec-fetch-site", HeaderValue::from_static("same-origin"));
        headers.insert("x-requested-with", HeaderValue::from_static("XMLHttpRequest"));

        let resp = self
            .client
            .post(&self.upstream_url)
            .headers(headers)
            .body(query.to_string())
            .send()
            .map_err(|e| ScraperError::Upstream(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScraperError::Upstream(e.to_string()))?;

        if !status.is_success() {
            return Err(ScraperError::Upstream(format!(
                "upstream HTTP {status}: {text}"
            )));
        }

        serde_json::from_str(&text).map_err(|e| ScraperError::Upstream(format!("bad envelope: {e}")))
    }
}

struct Selectors {
    listing: Selector,
    logo: Selector,
    map_link: Selector,
    date: Selector,
    job_type: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            listing: parse_selector(r#"li[id^="job_listing"]"#)?,
            logo: parse_selector("img")?,
            map_link: parse_selector(".google_map_link")?,
            date: parse_selector(".job_listing-date")?,
            job_type: parse_selector(".job_listing-type")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Selector(e.to_string()))
}

/// Extract every listing node in the fragment into a `Job`, preserving
/// document order.
///
/// `now` anchors relative dates and is captured once, so every listing in a
/// batch resolves against the same instant. A listing missing any required
/// attribute or sub-element fails the whole batch rather than producing a
/// half-filled record.
pub fn extract_jobs(html: &str, now: DateTime<Utc>) -> Result<Vec<Job>, ScraperError> {
    let selectors = Selectors::new()?;
    let fragment = Html::parse_fragment(html);

    let mut jobs = Vec::new();
    for (listing, element) in fragment.select(&selectors.listing).enumerate() {
        jobs.push(build_job(element, &selectors, listing, now)?);
    }

    Ok(jobs)
}

fn build_job(
    element: ElementRef,
    selectors: &Selectors,
    listing: usize,
    now: DateTime<Utc>,
) -> Result<Job, ScraperError> {
    let id = own_attr(element, "id", listing)?;
    let title = own_attr(element, "data-title", listing)?;
    let uri = own_attr(element, "data-href", listing)?;

    let logo = first_descendant(element, &selectors.logo, "img", listing)?;
    let company = Company {
        logo_uri: descendant_attr(logo, "src", "img src", listing)?,
        name: descendant_attr(logo, "alt", "img alt", listing)?,
    };

    let map_link = first_descendant(element, &selectors.map_link, "google_map_link", listing)?;
    let map_href = descendant_attr(map_link, "href", "google_map_link href", listing)?;
    let location = normalize::location_from_map_href(&map_href).ok_or(ScraperError::Parse {
        listing,
        field: "google_map_link location",
    })?;

    let date_el = first_descendant(element, &selectors.date, "job_listing-date", listing)?;
    let posted_date =
        normalize::posted_date(&inner_text(date_el), now).ok_or(ScraperError::Parse {
            listing,
            field: "job_listing-date age",
        })?;

    let type_el = first_descendant(element, &selectors.job_type, "job_listing-type", listing)?;
    let employment_type = normalize::classify_employment(&inner_text(type_el));

    Ok(Job {
        id,
        title,
        uri,
        employment_type,
        posted_date,
        location,
        company,
    })
}

/// Attribute lookup on the listing element itself. Empty values are
/// rejected: id, title and uri must all be non-empty in the output record.
fn own_attr(element: ElementRef, name: &'static str, listing: usize) -> Result<String, ScraperError> {
    match element.value().attr(name) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ScraperError::Parse {
            listing,
            field: name,
        }),
    }
}

fn first_descendant<'a>(
    element: ElementRef<'a>,
    selector: &Selector,
    field: &'static str,
    listing: usize,
) -> Result<ElementRef<'a>, ScraperError> {
    element
        .select(selector)
        .next()
        .ok_or(ScraperError::Parse { listing, field })
}

fn descendant_attr(
    element: ElementRef<'_>,
    name: &str,
    field: &'static str,
    listing: usize,
) -> Result<String, ScraperError> {
    element
        .value()
        .attr(name)
        .map(str::to_string)
        .ok_or(ScraperError::Parse { listing, field })
}

fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
