//! Configuration module
//!
//! Environment-driven configuration with sensible defaults. Values are read
//! once at startup; a missing or unparseable variable falls back to the
//! default rather than failing the process.

use std::env;

use crate::constants::{AUTO_APPROVE_THRESHOLD, MAX_PHOTO_SIZE_BYTES};

/// Runtime configuration for photo validation and submission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Hard ceiling on accepted photo uploads, in bytes.
    pub max_photo_size_bytes: u64,
    /// Suspicion score below which photos bypass manual review.
    pub auto_approve_threshold: u8,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            max_photo_size_bytes: env_parse("MAX_PHOTO_SIZE_BYTES", MAX_PHOTO_SIZE_BYTES),
            auto_approve_threshold: env_parse("AUTO_APPROVE_THRESHOLD", AUTO_APPROVE_THRESHOLD),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_photo_size_bytes: MAX_PHOTO_SIZE_BYTES,
            auto_approve_threshold: AUTO_APPROVE_THRESHOLD,
            environment: "development".to_string(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
