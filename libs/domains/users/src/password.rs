//! Password hashing with Argon2id
//!
//! Digests are PHC strings carrying their own salt and parameters, so verification
//! needs nothing but the stored digest.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{UserError, UserResult};

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

/// Check a candidate password against a stored digest
///
/// A digest that cannot be parsed never matches.
pub fn verify_password(digest: &str, candidate: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(digest) else {
        tracing::warn!("Stored password digest is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed_hash)
        .is_ok()
}
