use crate::error::ActivityError;
use mhs_domain::constants::SCHOOL_DOMAIN;

/// Validates a signup email.
///
/// The format check is deliberately lax: it only requires an `@` and a `.`
/// somewhere in the part after the last `@`. Callers rely on this exact
/// behavior; do not tighten it to full RFC validation.
pub(crate) fn validate(email: &str) -> Result<(), ActivityError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Err(ActivityError::InvalidEmail);
    };

    if !domain.contains('.') {
        return Err(ActivityError::InvalidEmail);
    }

    if domain != SCHOOL_DOMAIN {
        return Err(ActivityError::WrongDomain);
    }

    Ok(())
}
