//! Password hashing for the account directory.
//!
//! Passwords are stored as `salt$digest` with both parts base64url-encoded
//! and the digest a SHA-256 over salt then password. The plaintext never
//! reaches storage.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::Rng;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

/// Hashes a password under a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut rng = rand::rng();
    let salt: Vec<u8> = (0..SALT_LEN).map(|_| rng.random::<u8>()).collect();
    let digest = digest_password(&salt, password);
    format!("{}${}", URL_SAFE_NO_PAD.encode(&salt), digest)
}

/// Verifies a password against a stored `salt$digest` value. Malformed
/// stored values never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, digest)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = URL_SAFE_NO_PAD.decode(salt) else {
        return false;
    };
    digest_password(&salt, password) == digest
}

fn digest_password(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let stored = hash_password("swordfish-123");

        assert!(verify_password("swordfish-123", &stored));
        assert!(!verify_password("swordfish-124", &stored));
    }

    #[test]
    fn test_salts_are_unique() {
        let first = hash_password("same-password");
        let second = hash_password("same-password");

        assert_ne!(first, second);
        assert!(verify_password("same-password", &first));
        assert!(verify_password("same-password", &second));
    }

    #[test]
    fn test_plaintext_absent_from_stored_value() {
        let stored = hash_password("swordfish-123");
        assert!(!stored.contains("swordfish-123"));
    }

    #[test]
    fn test_malformed_stored_value_never_verifies() {
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "no-separator"));
        assert!(!verify_password("anything", "!!notbase64!!$digest"));
    }
}
