//! Short code generation and validation utilities.
//!
//! Provides random code generation over a URL-safe alphabet and validation
//! for caller-chosen codes. Uniqueness is enforced by the link store, not
//! here.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// URL-safe alphabet: 64 symbols, so sampling a byte index is uniform.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Codes that collide with routing and cannot be chosen by callers.
const RESERVED_CODES: &[&str] = &["user", "url", "health", "favicon.ico"];

/// Generates a random short code of the requested length.
///
/// Every character is drawn independently and uniformly from the URL-safe
/// alphabet (letters, digits, `-`, `_`).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(DEFAULT_CODE_LENGTH);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a caller-chosen short code.
///
/// # Rules
///
/// - Length: 4-32 characters
/// - Allowed characters: letters, digits, `-`, `_`
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < 4 || code.len() > 32 {
        return Err(AppError::bad_request(
            "Custom code must be 4-32 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
