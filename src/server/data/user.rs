use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User, UserCredentials};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user. Fails with a unique constraint error if the email exists.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            password_hash: ActiveValue::Set(params.password_hash),
            password_salt: ActiveValue::Set(params.password_salt),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    /// Finds a user by their normalized (lowercased) email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(UserCredentials::from_entity))
    }

    pub async fn find_credentials_by_id(&self, id: i32) -> Result<Option<UserCredentials>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(UserCredentials::from_entity))
    }

    /// Fetches all users with the given IDs, ordered by ID. Unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Updates name and image.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(params.user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.image = ActiveValue::Set(params.image);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let user = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(user)))
    }

    pub async fn update_password(
        &self,
        user_id: i32,
        password_hash: String,
        password_salt: String,
    ) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            password_hash: ActiveValue::Set(password_hash),
            password_salt: ActiveValue::Set(password_salt),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes the user row only. Callers remove dependent rows first.
    pub async fn delete(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
