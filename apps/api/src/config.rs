//! Application configuration loading from environment variables.
//!
//! All configuration is read once at startup. Nothing here is required: the
//! AWS settings fall back to the SDK's default region and credential chain.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "info,recognition_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `AWS_REGION`: Region of the Rekognition endpoint
//! - `REKOGNITION_ENDPOINT_URL`: Endpoint override, e.g. a LocalStack URL
//! - `REKOGNITION_ACCESS_KEY_ID`: Static access key (needs the secret below)
//! - `REKOGNITION_SECRET_ACCESS_KEY`: Static secret key
//! - `MAX_IMAGE_BYTES`: Largest accepted upload (default: 5 MiB)

use serde::Deserialize;

/// Rekognition rejects inline images above 5 MiB.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    pub aws_region: Option<String>,

    pub rekognition_endpoint_url: Option<String>,

    pub rekognition_access_key_id: Option<String>,

    pub rekognition_secret_access_key: Option<String>,

    /// Upper bound on the image part of an upload, in bytes
    pub max_image_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if only
    /// one half of the static credential pair is set.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            aws_region: env_optional("AWS_REGION"),
            rekognition_endpoint_url: env_optional("REKOGNITION_ENDPOINT_URL"),
            rekognition_access_key_id: env_optional("REKOGNITION_ACCESS_KEY_ID"),
            rekognition_secret_access_key: env_optional("REKOGNITION_SECRET_ACCESS_KEY"),
            max_image_bytes: env_or("MAX_IMAGE_BYTES", DEFAULT_MAX_IMAGE_BYTES)?,
        };
        config.static_credentials()?;
        Ok(config)
    }

    /// The static key pair, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if only one of the two keys is set.
    pub fn static_credentials(&self) -> anyhow::Result<Option<(String, String)>> {
        match (
            &self.rekognition_access_key_id,
            &self.rekognition_secret_access_key,
        ) {
            (Some(key), Some(secret)) => Ok(Some((key.clone(), secret.clone()))),
            (None, None) => Ok(None),
            _ => Err(anyhow::anyhow!(
                "REKOGNITION_ACCESS_KEY_ID and REKOGNITION_SECRET_ACCESS_KEY must be set together"
            )),
        }
    }
}

/// Load an optional environment variable, treating blank values as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
