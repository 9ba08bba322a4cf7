//! User domain models and parameters.
//!
//! Provides the user model exposed to the rest of the service layer (without password
//! material) plus the credential view used only during login and password changes.

use chrono::{DateTime, Utc};

use crate::model::{
    auth::RegisterDto,
    user::{ChangePasswordDto, UpdateProfileDto, UserDto},
};

/// Registered user without password material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lowercased email, unique across users.
    pub email: String,
    pub name: String,
    /// Optional avatar URL.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            image: entity.image,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            image: self.image,
            created_at: self.created_at,
        }
    }
}

/// User together with their stored password hash and salt.
///
/// Only returned by repository methods used for credential checks.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
    pub password_salt: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        let password_salt = entity.password_salt.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
            password_salt,
        }
    }
}

/// Registration request as received from the client.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            password: dto.password,
        }
    }
}

/// Validated values for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub password_salt: String,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub user_id: i32,
    pub name: String,
    pub image: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(user_id: i32, dto: UpdateProfileDto) -> Self {
        Self {
            user_id,
            name: dto.name,
            image: dto.image,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChangePasswordParams {
    pub user_id: i32,
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordParams {
    pub fn from_dto(user_id: i32, dto: ChangePasswordDto) -> Self {
        Self {
            user_id,
            current_password: dto.current_password,
            new_password: dto.new_password,
        }
    }
}
