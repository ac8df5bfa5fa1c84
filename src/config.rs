use std::env;
use std::fmt;
use std::net::SocketAddr;
use url::Url;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_URL: &str = "https://euremotejobs.com/jm-ajax/get_listings/";

/// Process configuration, resolved once at startup and passed down
/// explicitly; nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub upstream_url: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidUpstreamUrl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(raw) => write!(f, "invalid port: {raw}"),
            ConfigError::InvalidUpstreamUrl(msg) => write!(f, "invalid upstream URL: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Resolve configuration: a `--port` flag beats the PORT env var beats
    /// the built-in default. The upstream URL comes from UPSTREAM_URL and
    /// is validated here so a bad value fails at startup, not per request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match arg_port() {
            Some(raw) => parse_port(&raw)?,
            None => match env::var("PORT") {
                Ok(raw) => parse_port(&raw)?,
                Err(_) => DEFAULT_PORT,
            },
        };

        let upstream_url =
            env::var("UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        Url::parse(&upstream_url)
            .map_err(|e| ConfigError::InvalidUpstreamUrl(format!("{upstream_url}: {e}")))?;

        Ok(Config {
            addr: SocketAddr::from(([127, 0, 0, 1], port)),
            upstream_url,
        })
    }
}

fn arg_port() -> Option<String> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--port" {
            return args.next();
        }
    }
    None
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}
