//! Password hashing and verification

use crate::errors::{DomainError, DomainResult};

/// bcrypt cost used when none is configured
pub const DEFAULT_HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// Checks a plaintext password against a stored hash
pub trait PasswordVerifier: Send + Sync {
    /// Returns `Ok(false)` on mismatch and `Err` only when the stored hash
    /// itself is unusable
    fn verify(&self, plaintext: &str, hash: &str) -> DomainResult<bool>;
}

/// bcrypt-backed verifier
#[derive(Debug, Default, Clone, Copy)]
pub struct BcryptPasswordVerifier;

impl PasswordVerifier for BcryptPasswordVerifier {
    fn verify(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(plaintext, hash).map_err(|e| DomainError::Internal {
            message: format!("Stored password hash is unusable: {}", e),
        })
    }
}

/// Hashes a password with bcrypt at the given cost (4..=31)
pub fn hash_password(plaintext: &str, cost: u32) -> DomainResult<String> {
    bcrypt::hash(plaintext, cost).map_err(|e| DomainError::Internal {
        message: format!("Failed to hash password: {}", e),
    })
}

/// A syntactically valid bcrypt hash of the given cost that matches no password
///
/// Salt and digest are all-zero in bcrypt's base64 alphabet.
pub fn timing_hash(cost: u32) -> String {
    format!("$2b${:02}${}", cost, ".".repeat(53))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse", 4).unwrap();
        let verifier = BcryptPasswordVerifier;

        assert!(verifier.verify("correct horse", &hash).unwrap());
        assert!(!verifier.verify("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_unusable_hash_is_internal_error() {
        let result = BcryptPasswordVerifier.verify("anything", "not-a-bcrypt-hash");
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[test]
    fn test_timing_hash_is_checked_not_rejected() {
        let hash = timing_hash(4);
        assert_eq!(hash.len(), 60);
        assert!(hash.starts_with("$2b$04$"));

        assert!(!BcryptPasswordVerifier.verify("anything", &hash).unwrap());
        assert!(!BcryptPasswordVerifier.verify("", &hash).unwrap());
    }

    #[test]
    fn test_invalid_cost_is_rejected() {
        assert!(hash_password("pw", 2).is_err());
    }
}
