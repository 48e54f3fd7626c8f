//! HTTP middleware for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. `CorsLayer` (browser clients on other origins)
//! 4. Rate limiting on the checkout routes (governor)

pub mod rate_limit;

pub use rate_limit::checkout_rate_limiter;
