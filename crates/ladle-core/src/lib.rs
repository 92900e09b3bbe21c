//! Shared ambient pieces for Ladle services: health handlers, serde helpers,
//! tracing init, and request-id middleware.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
