use thiserror::Error;

/// Errors raised while preparing a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create the schema.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
