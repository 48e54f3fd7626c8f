//! Rate limiting middleware using governor and `tower_governor`.
//!
//! Only the checkout routes are limited: they are the security-sensitive
//! surface, and the budget (~100 requests per 15 minutes per client IP)
//! matches what a legitimate checkout flow needs with a wide margin.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

/// Key extractor that resolves the real client IP behind proxies.
///
/// Checks the standard forwarding headers in order; direct connections
/// without any of them share one bucket keyed on localhost, which is the
/// right behavior for single-host development setups.
#[derive(Clone, Copy)]
pub struct ProxyIpKeyExtractor;

impl tower_governor::key_extractor::KeyExtractor for ProxyIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let headers = req.headers();

        // Try X-Forwarded-For (first IP in the chain)
        if let Some(ip) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Try X-Real-IP
        if let Some(ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Try Fly-Client-IP (Fly.io's header)
        if let Some(ip) = headers
            .get("fly-client-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        Ok(IpAddr::V4(Ipv4Addr::LOCALHOST))
    }
}

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<ProxyIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create the checkout rate limiter: ~100 requests per 15 minutes per IP.
///
/// Configuration: 1 token every 9 seconds (replenish), burst of 100.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers (`per_second(9)` and `burst_size(100)`), which are always
/// accepted by `GovernorConfigBuilder`.
#[must_use]
pub fn checkout_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ProxyIpKeyExtractor)
        .per_second(9) // Replenish 1 token every 9 seconds (~100 per 15 minutes)
        .burst_size(100)
        .finish()
        .expect("rate limiter config with per_second(9) and burst_size(100) is valid");
    GovernorLayer::new(Arc::new(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tower_governor::key_extractor::KeyExtractor;

    fn request_with_header(name: &'static str, value: &'static str) -> Request<()> {
        Request::builder().header(name, value).body(()).unwrap()
    }

    #[test]
    fn test_forwarded_for_takes_first_ip() {
        let req = request_with_header("x-forwarded-for", "203.0.113.7, 10.0.0.1");
        let key = ProxyIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(key.to_string(), "203.0.113.7");
    }

    #[test]
    fn test_real_ip_fallback() {
        let req = request_with_header("x-real-ip", "198.51.100.4");
        let key = ProxyIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(key.to_string(), "198.51.100.4");
    }

    #[test]
    fn test_direct_connection_keys_on_localhost() {
        let req = Request::builder().body(()).unwrap();
        let key = ProxyIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(key, IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
}
