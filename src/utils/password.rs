//! Salted password hashing and verification.
//!
//! Passwords are hashed with HMAC-SHA256 keyed by a per-user random salt.
//! The salt and the digest are both stored hex-encoded; the plaintext
//! password never touches storage.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Raw salt size before hex encoding.
const SALT_LENGTH_BYTES: usize = 16;

/// Hashes a password with the given salt, or a freshly generated one.
///
/// Returns `(salt_hex, hash_hex)`. The digest is deterministic in
/// `(password, salt)`, so verification recomputes it with the stored salt.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn hash_password(password: &str, salt: Option<&str>) -> (String, String) {
    let salt = match salt {
        Some(s) => s.to_string(),
        None => generate_salt(),
    };

    let mut mac = HmacSha256::new_from_slice(salt.as_bytes()).expect("HMAC accepts any key length");
    mac.update(password.as_bytes());
    let hash = hex::encode(mac.finalize().into_bytes());

    (salt, hash)
}

/// Verifies a password against a stored salt and digest in constant time.
///
/// An undecodable stored digest verifies as false rather than erroring;
/// it cannot match any password.
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    let Ok(expected) = hex::decode(expected_hash) else {
        return false;
    };

    let mut mac = HmacSha256::new_from_slice(salt.as_bytes()).expect("HMAC accepts any key length");
    mac.update(password.as_bytes());

    // Mac::verify_slice compares in constant time.
    mac.verify_slice(&expected).is_ok()
}

/// Generates a fresh hex-encoded random salt.
fn generate_salt() -> String {
    let mut buffer = [0u8; SALT_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}
