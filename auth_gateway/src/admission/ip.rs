use std::net::{IpAddr, Ipv6Addr};

use super::errors::AdmissionError;

/// Restrict requests to an allow-list of source IPs.
///
/// Without an allow-list every request is admitted. With one, the source IP
/// must be a well-formed IPv4 or IPv6 address that appears verbatim in the list.
/// An IPv6 address may carry a zone id, as in `fe80::1%eth0`.
pub fn check_source_ip(allowed: Option<&[String]>, ip: Option<&str>) -> Result<(), AdmissionError> {
    let Some(allowed) = allowed else {
        tracing::debug!("No IP restriction configured");
        return Ok(());
    };

    let ip = match ip {
        Some(ip) if is_valid_ip(ip) => ip,
        _ => {
            tracing::error!("Source IP {:?} is not a valid IP", ip);
            return Err(AdmissionError::InvalidIp(ip.map(str::to_string)));
        }
    };

    if allowed.iter().any(|entry| entry == ip) {
        tracing::debug!("Source IP {} is on the list", ip);
        Ok(())
    } else {
        tracing::error!("Source IP {} is NOT on the list", ip);
        Err(AdmissionError::IpNotAllowed(ip.to_string()))
    }
}

fn is_valid_ip(ip: &str) -> bool {
    match ip.split_once('%') {
        Some((addr, zone)) => !zone.is_empty() && addr.parse::<Ipv6Addr>().is_ok(),
        None => ip.parse::<IpAddr>().is_ok(),
    }
}
