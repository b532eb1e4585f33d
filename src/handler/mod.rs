//! Request handler module
//!
//! Adapts hyper requests to the config file gateway and its results back to responses.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
