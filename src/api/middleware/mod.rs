// Middleware module - CORS and tracing setup

pub mod cors;
pub mod observability;

// Re-export for convenience
pub use cors::create_cors_layer;
pub use observability::init_tracing;
