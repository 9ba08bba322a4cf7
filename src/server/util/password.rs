//! Password hashing with PBKDF2-HMAC-SHA256.
//!
//! Each password gets a random 16 byte salt. Hash and salt are stored hex encoded in
//! separate columns of the user table.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::server::error::AppError;

#[cfg(not(test))]
const PBKDF2_ROUNDS: u32 = 600_000;
// Unoptimized test builds would spend seconds per hash at production strength.
#[cfg(test)]
const PBKDF2_ROUNDS: u32 = 1_000;

const HASH_LEN: usize = 32;
const SALT_LEN: usize = 16;

/// A derived password hash together with the salt used to derive it.
#[derive(Debug, Clone)]
pub struct PasswordHash {
    pub hash: String,
    pub salt: String,
}

/// Hashes a password with a freshly generated salt.
pub fn hash_password(password: &str) -> PasswordHash {
    let salt: [u8; SALT_LEN] = rand::random();

    PasswordHash {
        hash: hex::encode(derive(password, &salt)),
        salt: hex::encode(salt),
    }
}

/// Checks a password against a stored hash and salt.
///
/// Returns `false` for malformed stored values rather than failing, so a corrupt row
/// behaves like a wrong password.
pub fn verify_password(password: &str, hash: &str, salt: &str) -> bool {
    let (Ok(expected), Ok(salt)) = (hex::decode(hash), hex::decode(salt)) else {
        return false;
    };

    if expected.len() != HASH_LEN {
        return false;
    }

    let actual = derive(password, &salt);

    // Constant time comparison
    actual
        .iter()
        .zip(expected.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

/// Runs [`hash_password`] on the blocking thread pool.
pub async fn hash_password_blocking(password: String) -> Result<PasswordHash, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))
}

/// Runs [`verify_password`] on the blocking thread pool.
pub async fn verify_password_blocking(
    password: String,
    hash: String,
    salt: String,
) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash, &salt))
        .await
        .map_err(|e| AppError::InternalError(format!("Password check task failed: {}", e)))
}

fn derive(password: &str, salt: &[u8]) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ROUNDS, &mut out);
    out
}
