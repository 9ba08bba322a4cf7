//! Email and password authentication.

use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::server::{
    data::{invite::InviteRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterParams, User},
    util::{password, validate},
};

pub const MAX_NAME_LEN: usize = 100;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account and links invitations already sent to its email.
    ///
    /// The email is stored trimmed and lowercased. Pending invitations addressed to the
    /// bare email are linked to the new user in the same transaction as the insert.
    ///
    /// # Arguments
    /// - `params` - Email, display name and plaintext password from the client
    ///
    /// # Returns
    /// - `Ok(User)` - Newly registered user
    /// - `Err(AppError::BadRequest)` - Malformed email, empty name or short password
    /// - `Err(AppError::AuthErr(EmailTaken))` - An account already uses this email
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let email = validate::normalize_email(&params.email)?;
        let name = validate::required_text("Name", &params.name, MAX_NAME_LEN)?;
        validate::password("Password", &params.password)?;

        if UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken.into());
        }

        let hashed = password::hash_password_blocking(params.password).await?;

        let txn = self.db.begin().await?;

        let created = UserRepository::new(&txn)
            .create(CreateUserParams {
                email: email.clone(),
                name,
                password_hash: hashed.hash,
                password_salt: hashed.salt,
            })
            .await;

        // A concurrent registration can win the race past the lookup above
        let user = match created {
            Ok(user) => user,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AuthError::EmailTaken.into());
            }
            Err(err) => return Err(err.into()),
        };

        let linked = InviteRepository::new(&txn)
            .link_invitee(&email, user.id)
            .await?;

        txn.commit().await?;

        tracing::info!(user_id = user.id, linked_invites = linked, "Registered user");

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Unknown emails, malformed emails and wrong passwords all produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Ok(email) = validate::normalize_email(email) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = password::verify_password_blocking(
            password.to_string(),
            credentials.password_hash,
            credentials.password_salt,
        )
        .await?;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.user)
    }
}
