/**
 * Password Hashing and Verification
 *
 * Thin wrapper over bcrypt. Hashing salts per call, so the same plaintext
 * never produces the same hash twice; the cost factor is bcrypt's default,
 * which deliberately makes each call expensive.
 *
 * Verification never fails with an error: a malformed or non-bcrypt stored
 * hash simply does not verify.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::ApiError;

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    Ok(hash(plain, DEFAULT_COST)?)
}

/// Verify a plaintext password against a stored hash
///
/// Returns `false` for a mismatch or for malformed input; never errors.
pub fn verify_password(hashed: &str, plain: &str) -> bool {
    verify(plain, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_against_original_password() {
        let hashed = hash_password("Correct-Horse-1").unwrap();
        assert!(verify_password(&hashed, "Correct-Horse-1"));
        assert!(!verify_password(&hashed, "Correct-Horse-2"));
    }

    #[test]
    fn hashing_twice_salts_differently() {
        let first = hash_password("Same-Password-1!").unwrap();
        let second = hash_password("Same-Password-1!").unwrap();

        assert_ne!(first, second);
        assert!(verify_password(&first, "Same-Password-1!"));
        assert!(verify_password(&second, "Same-Password-1!"));
    }

    #[test]
    fn malformed_hash_does_not_verify() {
        assert!(!verify_password("not-a-bcrypt-hash", "anything"));
        assert!(!verify_password("", "anything"));
    }
}
