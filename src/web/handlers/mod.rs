//! HTML page handlers.

pub mod usage;

pub use usage::usage_handler;
