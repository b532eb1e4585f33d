//! HTTP protocol layer module
//!
//! Provides response builders shared by the request handler.

pub mod response;

// Re-export commonly used builders
pub use response::{build_text_response, build_yaml_response};
