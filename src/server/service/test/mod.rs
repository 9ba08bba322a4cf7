use crate::server::{
    config::Config, error::AppError, service::notifier::InviteNotifier, util::password,
};
use sea_orm::DatabaseConnection;
use test_utils::factory::user::UserFactory;

mod cost;
mod notifier;
mod task;
mod user;

fn config(email_api_url: &str, email_api_key: Option<&str>) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        app_url: "http://localhost:3000".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        session_secure: false,
        email_api_url: email_api_url.to_string(),
        email_api_key: email_api_key.map(str::to_string),
        email_from: "Tripboard <noreply@tripboard.test>".to_string(),
    }
}

/// Notifier without an API key; every send is skipped.
fn disabled_notifier() -> InviteNotifier {
    InviteNotifier::new(
        reqwest::Client::new(),
        &config("http://127.0.0.1:9/emails", None),
    )
}

/// Notifier pointed at a closed local port; every send fails to connect.
fn failing_notifier() -> InviteNotifier {
    InviteNotifier::new(
        reqwest::Client::new(),
        &config("http://127.0.0.1:9/emails", Some("test-key")),
    )
}

/// Inserts a user whose stored hash matches `password`.
async fn create_user_with_password(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<entity::user::Model, AppError> {
    let hashed = password::hash_password(password);

    Ok(UserFactory::new(db)
        .email(email)
        .password(hashed.hash, hashed.salt)
        .build()
        .await?)
}
