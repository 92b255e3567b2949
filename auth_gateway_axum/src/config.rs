//! Central configuration for the auth_gateway_axum crate

use std::sync::LazyLock;

/// Path the gateway routes are mounted under
/// Default: "/oauth"
pub static GATEWAY_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| route_prefix(std::env::var("GATEWAY_ROUTE_PREFIX").ok().as_deref()));

/// Take the source IP from `X-Forwarded-For` instead of the socket peer.
/// Enable only behind a proxy that appends the client address to that header.
/// Default: false
pub static GATEWAY_TRUST_FORWARDED_FOR: LazyLock<bool> = LazyLock::new(|| {
    trust_forwarded_for(std::env::var("GATEWAY_TRUST_FORWARDED_FOR").ok().as_deref())
});

fn trust_forwarded_for(env_value: Option<&str>) -> bool {
    env_value.is_some_and(|val| val.trim().eq_ignore_ascii_case("true"))
}

fn route_prefix(env_value: Option<&str>) -> String {
    let prefix = env_value.unwrap_or("/oauth").trim_end_matches('/');
    if prefix.starts_with('/') {
        prefix.to_string()
    } else {
        format!("/{prefix}")
    }
}
