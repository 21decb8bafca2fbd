//! Identifier generation and credential hashing.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Fixed salt appended to credentials before hashing. Must match the value
/// the management application uses when verifying logins.
const CREDENTIAL_SALT: &str = "pms";

/// Produces a new opaque identifier token.
///
/// UUID v4, rendered as the canonical hyphenated string. Collisions are
/// negligible at run scale (tens of thousands of rows).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Computes SHA-256 hash of the input and returns it as a hex string.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Derives the stored digest for a credential string.
///
/// Deterministic: the same password always yields the same digest, so the
/// default accounts seeded on every run keep working credentials.
pub fn password_digest(password: &str) -> String {
    sha256_hex(&format!("{}{}", password, CREDENTIAL_SALT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36); // hyphenated UUID
    }

    #[test]
    fn test_sha256_hex_known_vector() {
        assert_eq!(
            sha256_hex("test"),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_password_digest_deterministic() {
        assert_eq!(password_digest("admin123"), password_digest("admin123"));
    }

    #[test]
    fn test_password_digest_default_accounts() {
        // Digests the management application expects for the seeded accounts.
        assert_eq!(
            password_digest("admin123"),
            "dbdc835df4236f5c74682fb4f5c26cc7a82c5f91d9f81c6247d3939308fc8d46"
        );
        assert_eq!(
            password_digest("staff123"),
            "33e2cc8da964e4a4110ae37bee0f4a349e21233f02486f4149d9ffff867e6170"
        );
    }

    #[test]
    fn test_password_digest_is_salted() {
        assert_ne!(password_digest("admin123"), sha256_hex("admin123"));
    }
}
