/**
 * Server Configuration
 *
 * This module loads all process-wide configuration from the environment in
 * one place at startup. Nothing else in the crate reads environment
 * variables; services receive an explicit `Config` (or a piece of it).
 *
 * # Configuration Sources
 *
 * Variables are read from the process environment, with a `.env` file
 * loaded by the binary entry point beforehand.
 *
 * | Variable         | Required | Default        |
 * |------------------|----------|----------------|
 * | `JWT_SECRET`     | yes      | -              |
 * | `PORT`           | no       | `8080`         |
 * | `UPLOAD_DIR`     | no       | `public/img`   |
 * | `EMAIL_ADDRESS`  | no       | -              |
 * | `EMAIL_PASSWORD` | no       | -              |
 * | `SMTP_HOST`      | no       | `smtp.gmail.com` |
 * | `SMTP_PORT`      | no       | `587`          |
 *
 * # Error Handling
 *
 * A missing `JWT_SECRET` is fatal: the server must not start without a
 * signing key. Missing email credentials only disable the mailer; the
 * rest of the server runs without it.
 */

use std::path::PathBuf;

use crate::error::AppError;

/// SMTP transport settings
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP submission port
    pub smtp_port: u16,
    /// Account username (also the sender address)
    pub username: String,
    /// Account password
    pub password: String,
    /// Address shown in the From header
    pub from_address: String,
}

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds to
    pub port: u16,
    /// Token signing secret
    pub jwt_secret: String,
    /// Directory uploaded images are stored under
    pub upload_dir: PathBuf,
    /// SMTP settings; `None` disables the mailer
    pub email: Option<EmailConfig>,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `JWT_SECRET` is not set.
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| AppError::config("JWT_SECRET is not set"))?;

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public/img"));

        let email = match (
            std::env::var("EMAIL_ADDRESS"),
            std::env::var("EMAIL_PASSWORD"),
        ) {
            (Ok(address), Ok(password)) => Some(EmailConfig {
                smtp_host: std::env::var("SMTP_HOST")
                    .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                smtp_port: std::env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse::<u16>().ok())
                    .unwrap_or(587),
                username: address.clone(),
                password,
                from_address: address,
            }),
            _ => {
                tracing::warn!(
                    "EMAIL_ADDRESS / EMAIL_PASSWORD not set. Email features will be disabled."
                );
                None
            }
        };

        Ok(Self {
            port,
            jwt_secret,
            upload_dir,
            email,
        })
    }

    /// Fixed configuration for tests: ephemeral port, temp upload
    /// directory, no mailer
    pub fn for_tests() -> Self {
        Self {
            port: 0,
            jwt_secret: "test-signing-secret".to_string(),
            upload_dir: std::env::temp_dir().join("comercio-test-uploads"),
            email: None,
        }
    }
}
