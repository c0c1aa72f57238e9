use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_FILENAME: &str = "audio.mp3";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Relay
    pub default_filename: String,
    pub allowed_hosts: Vec<String>,
    pub upstream_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Used when LOG_FORMAT is unset: JSON in production, pretty otherwise
    pub fn default_for(environment: &Environment) -> Self {
        match environment {
            Environment::Production => LogFormat::Json,
            Environment::Development => LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let environment = match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string())
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            log_format: match env::var("LOG_FORMAT").ok().as_deref() {
                Some("json") => LogFormat::Json,
                Some("pretty") => LogFormat::Pretty,
                _ => LogFormat::default_for(&environment),
            },
            environment,
            default_filename: env::var("RELAY_DEFAULT_FILENAME")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            allowed_hosts: parse_host_list(
                &env::var("RELAY_ALLOWED_HOSTS").unwrap_or_default(),
            ),
            upstream_timeout_secs: match env::var("RELAY_UPSTREAM_TIMEOUT_SECS") {
                Ok(raw) if !raw.trim().is_empty() => Some(raw.trim().parse()?),
                _ => None,
            },
        };

        Ok(config)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            default_filename: DEFAULT_FILENAME.to_string(),
            allowed_hosts: Vec::new(),
            upstream_timeout_secs: None,
        }
    }
}

/// Comma separated host names, lowercased, blanks dropped
fn parse_host_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|h| h.trim().trim_end_matches('.').to_ascii_lowercase())
        .filter(|h| !h.is_empty())
        .collect()
}
