//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Request ID (`x-request-id`, recorded in the span and Sentry scope)
//! 4. Security headers (CSP, frame and referrer policies)
//! 5. Rate limiting (governor), on submission and API routes only

pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use rate_limit::{api_rate_limiter, submission_rate_limiter};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
