//! Traceup Core Library
//!
//! This crate provides the configuration and error types shared by the
//! traceup upload service components.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{LogLevel, UploadError};
