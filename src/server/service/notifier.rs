//! Invitation emails over a transactional email HTTP API.
//!
//! The request body follows the Resend `POST /emails` format (`from`, `to`, `subject`,
//! `html`) authenticated with a bearer key. Without a key the notifier is disabled and
//! only logs what it would have sent.

use serde::Serialize;
use url::Url;

use crate::server::{config::Config, error::notify::NotifyError, model::invite::TripInvite};

#[derive(Clone)]
pub struct InviteNotifier {
    http_client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    from: String,
    app_url: String,
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: String,
    html: String,
}

impl InviteNotifier {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            api_url: config.email_api_url.clone(),
            api_key: config.email_api_key.clone(),
            from: config.email_from.clone(),
            app_url: config.app_url.clone(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Emails the invitee a link to their pending invitations.
    ///
    /// # Arguments
    /// - `invite` - Freshly created invitation, carrying the trip and inviter names
    ///
    /// # Returns
    /// - `Ok(())` - Email accepted by the provider, or skipped because the notifier is disabled
    /// - `Err(NotifyError::Request)` - Provider unreachable or request failed
    /// - `Err(NotifyError::Rejected)` - Provider answered with a non-2xx status
    /// - `Err(NotifyError::InvalidAppUrl)` - `APP_URL` cannot be parsed into a link
    pub async fn send_invite(&self, invite: &TripInvite) -> Result<(), NotifyError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::info!(
                invite_id = invite.id,
                trip_id = invite.trip_id,
                "Email delivery disabled; skipping invitation email to {}",
                invite.email
            );
            return Ok(());
        };

        let link = invites_url(&self.app_url)?;

        let request = EmailRequest {
            from: &self.from,
            to: [&invite.email],
            subject: format!("{} invited you to {}", invite.inviter_name, invite.trip_name),
            html: render_invite_html(invite, link.as_str()),
        };

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(invite_id = invite.id, "Sent invitation email");

        Ok(())
    }
}

/// Builds the invitations page link under the application URL, keeping any base path.
fn invites_url(app_url: &str) -> Result<Url, url::ParseError> {
    let base = format!("{}/", app_url.trim_end_matches('/'));
    Url::parse(&base)?.join("invites")
}

fn render_invite_html(invite: &TripInvite, link: &str) -> String {
    format!(
        "<p><strong>{inviter}</strong> invited you to plan <strong>{trip}</strong> together on Tripboard.</p>\
         <p><a href=\"{link}\">View your invitations</a></p>\
         <p>If you don't have an account yet, sign up with this email address and the \
         invitation will be waiting for you.</p>",
        inviter = escape_html(&invite.inviter_name),
        trip = escape_html(&invite.trip_name),
        link = escape_html(link),
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_link_keeps_base_path() {
        assert_eq!(
            invites_url("https://example.com/app").unwrap().as_str(),
            "https://example.com/app/invites"
        );
        assert_eq!(
            invites_url("https://example.com/app/").unwrap().as_str(),
            "https://example.com/app/invites"
        );
        assert_eq!(
            invites_url("http://localhost:3000").unwrap().as_str(),
            "http://localhost:3000/invites"
        );
        assert!(invites_url("not a url").is_err());
    }

    #[test]
    fn escapes_markup_in_names() {
        assert_eq!(
            escape_html("<b>Tom & \"Jerry\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
    }
}
