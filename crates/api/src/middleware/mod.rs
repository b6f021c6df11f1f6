//! HTTP middleware stack for the API.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Request ID (add unique ID to each request)
//! 3. CORS (permissive - this is a public JSON API)
//! 4. Rate limiting (governor, auth endpoints only)

pub mod auth;
pub mod rate_limit;
pub mod request_id;

pub use auth::{AUTH_TOKEN_HEADER, AuthUser};
pub use rate_limit::{api_rate_limiter, auth_rate_limiter};
pub use request_id::request_id_middleware;
