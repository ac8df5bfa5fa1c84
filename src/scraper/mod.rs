pub mod models;
pub mod normalize;
pub mod query;
mod scraper;
mod scraper_error;

pub use self::scraper::{extract_jobs, JobBoardScraper};
pub use scraper_error::ScraperError;
