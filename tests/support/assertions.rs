//! Test assertion helpers.

use keyhole::{Denial, Error, ErrorKind, ResolvedSecret, Result};

/// Assert a resolution succeeded and return the secret.
pub fn assert_disclosed(result: Result<ResolvedSecret>) -> ResolvedSecret {
    match result {
        Ok(secret) => {
            assert!(secret.pull(), "pull flag must always be set");
            assert!(secret.fork(), "fork flag must always be set");
            secret
        }
        Err(e) => panic!("expected disclosure, got error: {}", e),
    }
}

/// Assert a resolution failed with the given kind.
pub fn assert_kind(result: Result<ResolvedSecret>, expected: ErrorKind) -> Error {
    match result {
        Ok(secret) => panic!("expected {:?}, got {:?}", expected, secret),
        Err(e) => {
            assert_eq!(e.kind(), expected, "unexpected error: {}", e);
            e
        }
    }
}

/// Assert a resolution was denied by the given filter.
pub fn assert_denied(result: Result<ResolvedSecret>, expected: Denial) {
    match assert_kind(result, ErrorKind::AccessDenied) {
        Error::AccessDenied(denial) => assert_eq!(denial, expected),
        other => panic!("expected denial, got {}", other),
    }
}
