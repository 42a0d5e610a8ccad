//! Data Transfer Objects for request parsing and response serialization.

pub mod health;
pub mod thumbnail;
