use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::scraper::JobBoardScraper;
use astra::Server;

mod config;
mod errors;
mod responses;
mod router;
mod scraper;

#[cfg(test)]
mod tests;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let scraper = match JobBoardScraper::new(&config.upstream_url) {
        Ok(scraper) => scraper,
        Err(e) => {
            eprintln!("❌ HTTP client setup failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.addr;
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &scraper) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
