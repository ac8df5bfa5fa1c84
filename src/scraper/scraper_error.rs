use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Upstream(String),
    Selector(String),
    Parse { listing: usize, field: &'static str },
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Upstream(msg) => write!(f, "Upstream error: {msg}"),
            ScraperError::Selector(msg) => write!(f, "Selector error: {msg}"),
            ScraperError::Parse { listing, field } => {
                write!(f, "Parse error: listing {listing}: missing or malformed {field}")
            }
        }
    }
}

impl Error for ScraperError {}
