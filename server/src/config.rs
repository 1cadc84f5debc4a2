use anyhow::{Context as _, Result};
use std::path::PathBuf;

/// Deployment knobs, all read from the environment. Everything has a dev
/// fallback except the relay credentials, which are only required once a
/// relay is configured.
#[derive(Clone, Debug)]
pub struct Config {
    pub content_dir: PathBuf,
    pub smtp: SmtpConfig,
}

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    /// TLS relay hostname. Unset means "deliver to a local catcher"
    /// (Mailpit and friends) on `local_host:local_port`.
    pub relay: Option<String>,
    pub username: String,
    pub password: String,
    pub local_host: String,
    pub local_port: u16,
    /// The mailbox the site sends as.
    pub from: String,
    /// The mailbox contact submissions are delivered to.
    pub to: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let content_dir = var_or("FOLIO_CONTENT_DIR", "content");
        let relay = std::env::var("FOLIO_SMTP_RELAY").ok();
        let (username, password) = if relay.is_some() {
            (
                std::env::var("FOLIO_SMTP_USERNAME")
                    .context("FOLIO_SMTP_USERNAME is required when FOLIO_SMTP_RELAY is set")?,
                std::env::var("FOLIO_SMTP_PASSWORD")
                    .context("FOLIO_SMTP_PASSWORD is required when FOLIO_SMTP_RELAY is set")?,
            )
        } else {
            (String::new(), String::new())
        };
        let local_port = var_or("FOLIO_SMTP_PORT", "1025")
            .parse::<u16>()
            .context("FOLIO_SMTP_PORT is not a port number")?;

        Ok(Self {
            content_dir: PathBuf::from(content_dir),
            smtp: SmtpConfig {
                relay,
                username,
                password,
                local_host: var_or("FOLIO_SMTP_HOST", "localhost"),
                local_port,
                from: var_or("FOLIO_MAIL_FROM", "Portfolio Contact <no-reply@localhost>"),
                to: var_or("FOLIO_MAIL_TO", "mertarcan8@gmail.com"),
            },
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        log::info!("{} is not set, using `{}'", name, default);
        String::from(default)
    })
}

#[cfg(test)]
mod tests {
    use super::Config;

    // Process-wide env mutation; keep every env-dependent assertion in one
    // test so cargo's parallel runner cannot interleave them.
    #[test]
    fn from_env_defaults_and_relay_requirements() {
        let unset = [
            "FOLIO_CONTENT_DIR",
            "FOLIO_SMTP_RELAY",
            "FOLIO_SMTP_USERNAME",
            "FOLIO_SMTP_PASSWORD",
            "FOLIO_SMTP_HOST",
            "FOLIO_SMTP_PORT",
            "FOLIO_MAIL_FROM",
            "FOLIO_MAIL_TO",
        ];
        for name in unset {
            std::env::remove_var(name);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(std::path::Path::new("content"), config.content_dir);
        assert!(config.smtp.relay.is_none());
        assert_eq!(1025, config.smtp.local_port);

        std::env::set_var("FOLIO_SMTP_RELAY", "smtp.example.com");
        assert!(Config::from_env().is_err());

        std::env::set_var("FOLIO_SMTP_USERNAME", "folio");
        std::env::set_var("FOLIO_SMTP_PASSWORD", "hunter2");
        let config = Config::from_env().unwrap();
        assert_eq!(Some(String::from("smtp.example.com")), config.smtp.relay);

        for name in unset {
            std::env::remove_var(name);
        }
    }
}
