mod error;
mod jwt;
mod password;

pub use error::AuthError;
pub use jwt::{Claims, JwtConfig, JwtTokenService, MIN_SECRET_LENGTH};
pub use password::Argon2PasswordHasher;
