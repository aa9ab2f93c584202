//! Configuration module
//!
//! Environment-driven configuration for the upload service. Every knob has a
//! default so the service starts with no environment at all; the defaults
//! mirror the deployment this service replaces (500 kB limit, `data/`
//! directory, `.gpx` uploads).

use std::env;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_MAX_FILESIZE: u64 = 500_000;
pub const DEFAULT_STORAGE_DIR: &str = "data";
pub const DEFAULT_ALLOWED_EXTENSION: &str = ".gpx";
/// Server-side script MIME type; uploads declaring it are rejected.
pub const DEFAULT_DISALLOWED_CONTENT_TYPE: &str = "application/x-httpd-php";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    /// Upper bound on the uploaded file size, in bytes
    pub max_filesize: u64,
    /// Directory uploads are stored in; must exist, never created
    pub storage_dir: PathBuf,
    /// Required filename suffix, compared case-sensitively
    pub allowed_extension: String,
    /// Declared content types that are rejected outright
    pub disallowed_content_types: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = match env::var("PORT") {
            Ok(v) => v.parse().context("PORT must be a valid port number")?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let max_filesize = match env::var("MAX_FILESIZE_BYTES") {
            Ok(v) => v
                .parse()
                .context("MAX_FILESIZE_BYTES must be a byte count")?,
            Err(_) => DEFAULT_MAX_FILESIZE,
        };

        let storage_dir = env::var("STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR));

        let allowed_extension =
            env::var("ALLOWED_EXTENSION").unwrap_or_else(|_| DEFAULT_ALLOWED_EXTENSION.to_string());

        let disallowed_content_types = env::var("DISALLOWED_CONTENT_TYPES")
            .unwrap_or_else(|_| DEFAULT_DISALLOWED_CONTENT_TYPE.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let config = Config {
            server_port,
            environment,
            max_filesize,
            storage_dir,
            allowed_extension,
            disallowed_content_types,
        };
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on configurations that can never accept an upload.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_filesize == 0 {
            anyhow::bail!("MAX_FILESIZE_BYTES must be greater than zero");
        }
        if !self.allowed_extension.starts_with('.') {
            anyhow::bail!(
                "ALLOWED_EXTENSION must start with '.', got '{}'",
                self.allowed_extension
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_SERVER_PORT,
            environment: "development".to_string(),
            max_filesize: DEFAULT_MAX_FILESIZE,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            allowed_extension: DEFAULT_ALLOWED_EXTENSION.to_string(),
            disallowed_content_types: vec![DEFAULT_DISALLOWED_CONTENT_TYPE.to_string()],
        }
    }
}
