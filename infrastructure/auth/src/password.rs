use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use business::domain::user::errors::UserError;
use business::domain::user::services::PasswordHasher;

/// Argon2id with the crate's default parameters and a random salt per hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHashing(e.to_string()))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UserError> {
        let parsed = PasswordHash::new(password_hash)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(UserError::PasswordHashing(e.to_string())),
        }
    }
}
