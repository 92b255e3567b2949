use super::errors::AdmissionError;

/// Restrict logins to accounts ending in one of the allowed suffixes.
pub fn check_account_domain(
    allowed: Option<&[String]>,
    account: Option<&str>,
) -> Result<(), AdmissionError> {
    let Some(allowed) = allowed else {
        tracing::debug!("No domain restriction configured");
        return Ok(());
    };

    let account = account
        .filter(|a| !a.is_empty())
        .ok_or(AdmissionError::MissingAccount)?;

    if allowed.iter().any(|suffix| account.ends_with(suffix.as_str())) {
        tracing::debug!("{} is in an accepted domain", account);
        Ok(())
    } else {
        tracing::debug!("{} is NOT in an accepted domain", account);
        Err(AdmissionError::DomainNotAllowed(account.to_string()))
    }
}
