//! API layer

pub mod http;

pub use http::{AppState, routes};
