//! Account registration and credential verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account, storing an Argon2id hash of the password.
    ///
    /// Field validation (format, length, uniqueness) happens before this call.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the created account
    /// - `Err(AppError::AuthErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, email: &str, password: &str) -> Result<i32, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| AuthError::PasswordHash(err.to_string()))?
            .to_string();

        let user = UserRepository::new(self.db).create(email, &hash).await?;

        Ok(user.id)
    }

    /// Verifies credentials and returns the account id on success.
    ///
    /// Unknown email and wrong password both resolve to `InvalidCredentials`
    /// so the response does not reveal which part was wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<i32, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let stored = PasswordHash::new(&user.password_hash)
            .map_err(|err| AuthError::PasswordHash(err.to_string()))?;

        match Argon2::default().verify_password(password.as_bytes(), &stored) {
            Ok(()) => Ok(user.id),
            Err(argon2::password_hash::Error::Password) => {
                Err(AuthError::InvalidCredentials.into())
            }
            Err(err) => Err(AuthError::PasswordHash(err.to_string()).into()),
        }
    }

    pub async fn profile(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        Ok(user.map(User::from_entity))
    }
}
