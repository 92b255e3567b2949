use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use http::{HeaderMap, header::ORIGIN, request::Parts};

use super::config::GATEWAY_TRUST_FORWARDED_FOR;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Caller metadata the gateway handlers need
///
/// * `origin` - Value of the `Origin` header
/// * `source_ip` - Socket peer address, available when the server was started
///   with connect info. With `GATEWAY_TRUST_FORWARDED_FOR` enabled, the last
///   `X-Forwarded-For` entry (the one the trusted proxy appended) wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    pub origin: Option<String>,
    pub source_ip: Option<String>,
}

impl RequestMeta {
    fn from_parts(parts: &Parts, trust_forwarded_for: bool) -> Self {
        let origin = header_str(&parts.headers, ORIGIN.as_str()).map(str::to_string);

        let forwarded = if trust_forwarded_for {
            last_forwarded_for(&parts.headers)
        } else {
            None
        };

        let source_ip = forwarded.or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        });

        Self { origin, source_ip }
    }
}

impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let meta = Self::from_parts(parts, *GATEWAY_TRUST_FORWARDED_FOR);
        tracing::debug!(
            "Request meta: origin={:?} source_ip={:?}",
            meta.origin,
            meta.source_ip
        );
        Ok(meta)
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

// Entries before the last one are whatever the client sent.
fn last_forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(X_FORWARDED_FOR)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .last()
        .map(str::to_string)
}
