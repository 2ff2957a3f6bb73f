//! Creates a valid Google session (access token) that we can use to call the gcal API

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use google_calendar::Client;
use tracing::warn;

use crate::credentials::{ClientSecret, Token};

pub struct Session {
    secret: ClientSecret,
    token: Token,
    token_path: PathBuf,
}

impl Session {
    /// Load credentials and token, refreshing the token if it has expired.
    pub async fn load_valid(credentials_path: &Path, token_path: &Path) -> Result<Self> {
        let mut session = Session {
            secret: ClientSecret::load(credentials_path)?,
            token: Token::load(token_path)?,
            token_path: token_path.to_path_buf(),
        };

        if session.token.is_expired() {
            session.refresh().await?;
        }

        Ok(session)
    }

    pub fn client(&self) -> Client {
        Client::new(
            self.secret.client_id.clone(),
            self.secret.client_secret.clone(),
            self.secret.redirect_uri(),
            self.token.access_token.clone(),
            self.token.refresh_token.clone(),
        )
    }

    async fn refresh(&mut self) -> Result<()> {
        if self.token.refresh_token.is_empty() {
            anyhow::bail!(
                "OAuth token in {} has expired and has no refresh token",
                self.token_path.display()
            );
        }

        warn!("Access token expired, refreshing...");

        let tokens = self
            .client()
            .refresh_access_token()
            .await
            .context("Failed to refresh token")?;

        self.token.access_token = tokens.access_token;
        // Google typically doesn't return a new refresh_token on refresh
        if !tokens.refresh_token.is_empty() {
            self.token.refresh_token = tokens.refresh_token;
        }
        if !tokens.token_type.is_empty() {
            self.token.token_type = tokens.token_type;
        }
        self.token.expiry = if tokens.expires_in > 0 {
            Some(Utc::now() + Duration::seconds(tokens.expires_in))
        } else {
            None
        };

        self.token.save(&self.token_path)
    }
}
