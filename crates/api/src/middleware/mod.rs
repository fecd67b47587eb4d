//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. API path normalization (before routing)
//! 3. Panic catcher (generic 500 body)
//! 4. `TraceLayer` (request span)
//! 5. Request ID (recorded in the span)
//! 6. Origin guard (403 for origins outside the allow-list)
//! 7. CORS headers (`tower-http`)
//! 8. Body size limit

pub mod cors;
pub mod origin;
pub mod path;
pub mod request_id;

pub use cors::cors_layer;
pub use origin::origin_guard_middleware;
pub use path::normalize_path_middleware;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
