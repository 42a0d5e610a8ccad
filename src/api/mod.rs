//! HTTP API layer for request/response handling.
//!
//! Translates HTTP requests into thumbnail resolutions and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Query parameters and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
