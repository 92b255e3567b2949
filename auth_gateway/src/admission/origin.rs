use crate::config::{ConfigError, ENV_REDIRECT_URLS};

use super::errors::AdmissionError;

/// Pick the redirect URL that belongs to the requesting origin.
///
/// The first configured URL containing `origin` as a substring wins. An absent
/// or empty origin never matches, since an empty needle would be found in
/// every URL.
pub fn resolve_redirect_url<'a>(
    redirect_urls: &'a [String],
    origin: Option<&str>,
) -> Result<&'a str, AdmissionError> {
    if redirect_urls.is_empty() {
        return Err(ConfigError::Missing(ENV_REDIRECT_URLS.to_string()).into());
    }

    let origin = origin.filter(|o| !o.is_empty());

    let redirect_url = origin.and_then(|origin| {
        redirect_urls
            .iter()
            .find(|url| url.contains(origin))
            .map(String::as_str)
    });

    match redirect_url {
        Some(url) => {
            tracing::debug!("Origin {:?} resolved to redirect URL {}", origin, url);
            Ok(url)
        }
        None => {
            tracing::error!("Origin {:?} does not match any redirect URL", origin);
            Err(AdmissionError::OriginNotAllowed(origin.map(str::to_string)))
        }
    }
}
