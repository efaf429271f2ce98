//! Civicreport Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! shared constants used across all civicreport components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use models::{NewReport, PhotoAnalysis, Report, ValidationResult};
