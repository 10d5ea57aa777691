use thiserror::Error;

use gatepass_core::LedgerError;

use crate::PrincipalId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("caller {caller} is not the organizer {organizer}")]
    NotOrganizer {
        caller: PrincipalId,
        organizer: PrincipalId,
    },
}

impl From<AuthzError> for LedgerError {
    fn from(_: AuthzError) -> Self {
        LedgerError::Unauthorized
    }
}

/// Organizer-only capability check.
///
/// Evaluated per call against the event's recorded organizer; this is a
/// capability predicate, not a role lookup.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn ensure_organizer(caller: PrincipalId, organizer: PrincipalId) -> Result<(), AuthzError> {
    if caller == organizer {
        Ok(())
    } else {
        Err(AuthzError::NotOrganizer { caller, organizer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organizer_passes_the_check() {
        let organizer = PrincipalId::new();
        assert!(ensure_organizer(organizer, organizer).is_ok());
    }

    #[test]
    fn any_other_principal_is_rejected() {
        let organizer = PrincipalId::new();
        let caller = PrincipalId::new();

        let err = ensure_organizer(caller, organizer).unwrap_err();
        assert_eq!(err, AuthzError::NotOrganizer { caller, organizer });
        assert_eq!(LedgerError::from(err), LedgerError::Unauthorized);
    }
}
