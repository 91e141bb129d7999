use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Server settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: String,
    pub origins: Vec<String>,
    pub timeout: Duration,
    pub workers: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    /// Build from any key-value source. Unparsable values fall back to
    /// their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();
        let timeout = lookup("SIMULATION_TIMEOUT")
            .and_then(|s| Self::parse("SIMULATION_TIMEOUT", &s))
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        let workers = lookup("SERVER_WORKERS")
            .and_then(|s| Self::parse("SERVER_WORKERS", &s))
            .map(|n| n as usize)
            .filter(|n| *n > 0)
            .unwrap_or_else(num_cpus::get);
        Self {
            bind,
            origins,
            timeout,
            workers,
        }
    }
    fn parse(key: &str, value: &str) -> Option<u64> {
        value
            .trim()
            .parse::<u64>()
            .inspect_err(|e| log::warn!("ignoring {}={:?}: {}", key, value, e))
            .ok()
    }
    /// Allow-list CORS policy. A lone `*` opens it to any origin.
    pub fn cors(&self) -> actix_cors::Cors {
        let cors = actix_cors::Cors::default()
            .allowed_methods(vec!["POST"])
            .allow_any_header()
            .max_age(3600);
        match self.origins.iter().any(|origin| origin == "*") {
            true => cors.allow_any_origin(),
            false => self
                .origins
                .iter()
                .fold(cors, |cors, origin| cors.allowed_origin(origin)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
