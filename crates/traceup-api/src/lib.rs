//! Traceup API Library
//!
//! This crate provides the HTTP handler, validation pipeline, XML response
//! rendering, and application setup for the trace upload service.

// Module declarations
mod handlers;
mod services;
mod utils;

// Public modules
pub mod response;
pub mod setup;
pub mod state;
pub mod telemetry;
