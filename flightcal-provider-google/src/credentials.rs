//! OAuth client secret and user token files.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Tokens are treated as expired this long before their actual expiry.
const EXPIRY_LEEWAY_SECS: i64 = 10;

/// OAuth client credentials from the Google Cloud console.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecret {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

/// The console wraps the credentials in "installed" or "web" depending on app type.
#[derive(Deserialize)]
struct ClientSecretFile {
    installed: Option<ClientSecret>,
    web: Option<ClientSecret>,
}

impl ClientSecret {
    pub fn from_json(contents: &str) -> Result<Self> {
        let file: ClientSecretFile =
            serde_json::from_str(contents).context("Invalid client secret JSON")?;

        match file.installed.or(file.web) {
            Some(secret) => Ok(secret),
            None => anyhow::bail!("Client secret must contain an \"installed\" or \"web\" section"),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Google credentials not found at {}.\n\n\
                Download an OAuth client (Desktop app) from\n\
                https://console.cloud.google.com/apis/credentials\n\
                and save it there.",
                path.display()
            );
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials from {}", path.display()))?;

        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse credentials from {}", path.display()))
    }

    /// Redirect URI registered for this client, if any.
    pub fn redirect_uri(&self) -> String {
        self.redirect_uris.first().cloned().unwrap_or_default()
    }
}

/// A user's OAuth token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
}

impl Token {
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Invalid token JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "OAuth token not found at {}.\n\
                Authorize the calendar scope once and store the resulting token there.",
                path.display()
            );
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read token from {}", path.display()))?;

        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse token from {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string(self).context("Failed to serialize token")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write token to {}", path.display()))?;

        // Owner-only, the file holds a refresh token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
        }

        Ok(())
    }

    /// Expiry time, if the token has one.
    ///
    /// A zero timestamp ("0001-01-01T00:00:00Z") means the token never expires.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expiry.filter(|t| t.year() > 1)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expiry) => now + Duration::seconds(EXPIRY_LEEWAY_SECS) >= expiry,
            None => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_client_secret_installed_app() {
        let json = r#"{"installed":{"client_id":"123.apps.googleusercontent.com","project_id":"flights","auth_uri":"https://accounts.google.com/o/oauth2/auth","token_uri":"https://oauth2.googleapis.com/token","client_secret":"shh","redirect_uris":["http://localhost"]}}"#;

        let secret = ClientSecret::from_json(json).unwrap();

        assert_eq!(secret.client_id, "123.apps.googleusercontent.com");
        assert_eq!(secret.client_secret, "shh");
        assert_eq!(secret.redirect_uri(), "http://localhost");
    }

    #[test]
    fn test_client_secret_web_app() {
        let json = r#"{"web":{"client_id":"abc","client_secret":"xyz"}}"#;

        let secret = ClientSecret::from_json(json).unwrap();

        assert_eq!(secret.client_id, "abc");
        assert_eq!(secret.redirect_uri(), "");
    }

    #[test]
    fn test_client_secret_requires_section() {
        let result = ClientSecret::from_json(r#"{"client_id":"abc","client_secret":"xyz"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_token_with_offset_expiry() {
        let json = r#"{"access_token":"ya29.a0","token_type":"Bearer","refresh_token":"1//0g","expiry":"2024-01-02T15:04:05.999+09:00"}"#;

        let token = Token::from_json(json).unwrap();

        assert_eq!(token.access_token, "ya29.a0");
        assert_eq!(token.refresh_token, "1//0g");
        let expiry = token.expires_at().unwrap();
        assert_eq!(expiry.timestamp(), Utc.with_ymd_and_hms(2024, 1, 2, 6, 4, 5).unwrap().timestamp());
    }

    #[test]
    fn test_token_zero_expiry_never_expires() {
        let json = r#"{"access_token":"a","token_type":"Bearer","refresh_token":"r","expiry":"0001-01-01T00:00:00Z"}"#;

        let token = Token::from_json(json).unwrap();

        assert!(token.expires_at().is_none());
        assert!(!token.is_expired());
    }

    #[test]
    fn test_token_expiry_with_leeway() {
        let expiry = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let token = Token {
            access_token: "a".to_string(),
            token_type: "Bearer".to_string(),
            refresh_token: "r".to_string(),
            expiry: Some(expiry),
        };

        assert!(!token.is_expired_at(expiry - Duration::minutes(5)));
        assert!(token.is_expired_at(expiry - Duration::seconds(5)));
        assert!(token.is_expired_at(expiry + Duration::hours(1)));
    }

    #[test]
    fn test_token_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        let token = Token {
            access_token: "a".to_string(),
            token_type: "Bearer".to_string(),
            refresh_token: "r".to_string(),
            expiry: Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()),
        };

        token.save(&path).unwrap();
        let loaded = Token::load(&path).unwrap();

        assert_eq!(loaded.access_token, "a");
        assert_eq!(loaded.refresh_token, "r");
        assert_eq!(loaded.expiry, token.expiry);
    }

    #[test]
    fn test_missing_token_file_is_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = Token::load(&dir.path().join("token.json")).unwrap_err();

        assert!(err.to_string().contains("OAuth token not found"));
    }
}
