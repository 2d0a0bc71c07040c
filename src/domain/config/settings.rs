use thiserror::Error;

const DEFAULT_OPTIMIZER_URL: &str = "http://localhost:8080";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("OPTIMIZER_URL must start with http:// or https://, got '{0}'")]
    InvalidOptimizerUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub optimizer_url: String,
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optimizer_url = lookup("OPTIMIZER_URL")
            .unwrap_or_else(|| DEFAULT_OPTIMIZER_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !optimizer_url.starts_with("http://") && !optimizer_url.starts_with("https://") {
            return Err(ConfigError::InvalidOptimizerUrl(optimizer_url));
        }

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                expected: "u16",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "MAX_UPLOAD_BYTES",
                    expected: "byte count",
                    value,
                })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            optimizer_url,
            host,
            port,
            max_upload_bytes,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
