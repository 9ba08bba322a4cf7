use thiserror::Error;

/// Errors raised while delivering invitation emails.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The request to the email provider could not be completed.
    #[error("Failed to reach email provider: {0}")]
    Request(#[from] reqwest::Error),

    /// The email provider answered with a non-success status.
    #[error("Email provider rejected message with status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The configured application URL cannot be used to build an invite link.
    #[error("Invalid application URL: {0}")]
    InvalidAppUrl(#[from] url::ParseError),
}
