//! # Authentication Module
//!
//! Password hashing and verification for protected calendars, using Argon2
//! with a random salt per password.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use eyre::Result;

/// Hashes a password using the Argon2 algorithm
///
/// Called when a protected calendar is created. A fresh random salt is
/// generated for every call, so hashing the same password twice gives two
/// different strings.
///
/// # Arguments
///
/// * `password` - The plain text password to hash
///
/// # Returns
///
/// * `Result<String>` - The hash in PHC string format (algorithm, version,
///   parameters, salt and hash in one string), or an error if hashing fails
///
/// # Example
///
/// ```rust
/// use hangout_api::middleware::auth::hash_password;
///
/// let hashed = hash_password("board-games").unwrap();
/// assert!(hashed.starts_with("$argon2"));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks a password against a stored PHC hash
///
/// # Arguments
///
/// * `password` - Plain text password supplied by the participant
/// * `password_hash` - Hash previously produced by [`hash_password`]
///
/// # Returns
///
/// * `Result<bool>` - `true` if the password matches, `false` otherwise.
///   An error means the stored hash itself could not be parsed.
///
/// # Example
///
/// ```rust
/// use hangout_api::middleware::auth::{hash_password, verify_password};
///
/// let hashed = hash_password("board-games").unwrap();
/// assert!(verify_password("board-games", &hashed).unwrap());
/// assert!(!verify_password("chess", &hashed).unwrap());
/// ```
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| eyre::eyre!("Stored password hash is malformed: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
