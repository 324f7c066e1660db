use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the plaintext password.
///
/// Unsalted fast digest: every hash already stored in the users table was
/// produced this way and login compares digests directly. Switching to a
/// salted KDF (argon2) needs a rehash-on-login migration first.
pub fn hash_password(plain: &str) -> String {
    hex::encode(Sha256::digest(plain.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(hash_password("p1"), hash_password("p1"));
    }

    #[test]
    fn distinct_passwords_diverge() {
        assert_ne!(hash_password("p1"), hash_password("p2"));
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let digest = hash_password("anything");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn known_vector() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }
}
