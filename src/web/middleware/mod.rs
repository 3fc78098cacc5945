//! Middleware for Web API.

pub mod cors;
pub mod panic;

pub use cors::create_cors_layer;
pub use panic::create_catch_panic_layer;
