use std::net::IpAddr;

pub const DEFAULT_ADMIN_TOKEN: &str = "admin-secret-key";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub db_max_connections: u32,
    pub admin_token: String,
    pub log_level: String,
    pub mail: Option<MailConfig>,
}

/// Outbound mail settings. Present only when both account credentials are set.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub notify_to: String,
    pub owner_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("PORTFOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_HOST: {e}"))?;

        let port: u16 = env_or("PORTFOLIO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_PORT: {e}"))?;

        let max_body_size: usize = env_or("PORTFOLIO_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_MAX_BODY_SIZE: {e}"))?;

        let db_max_connections: u32 = env_or("PORTFOLIO_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_DB_MAX_CONNECTIONS: {e}"))?;

        let admin_token = env_or("PORTFOLIO_ADMIN_TOKEN", DEFAULT_ADMIN_TOKEN);
        let log_level = env_or("PORTFOLIO_LOG_LEVEL", "info");

        let mail = match mail_credentials(
            std::env::var("EMAIL_USER").ok(),
            std::env::var("EMAIL_PASS").ok(),
        ) {
            Some((user, pass)) => Some(MailConfig {
                host: env_or("PORTFOLIO_SMTP_HOST", "smtp.gmail.com"),
                port: env_or("PORTFOLIO_SMTP_PORT", "587")
                    .parse()
                    .map_err(|e| format!("Invalid PORTFOLIO_SMTP_PORT: {e}"))?,
                notify_to: env_non_empty("PORTFOLIO_NOTIFY_TO").unwrap_or_else(|| user.clone()),
                owner_name: env_or("PORTFOLIO_OWNER_NAME", "Portfolio"),
                user,
                pass,
            }),
            None => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            db_max_connections,
            admin_token,
            log_level,
            mail,
        })
    }

    pub fn uses_default_admin_token(&self) -> bool {
        self.admin_token == DEFAULT_ADMIN_TOKEN
    }
}

/// Mail is only usable with both an account and its secret; a half-set pair
/// counts as unset.
pub fn mail_credentials(user: Option<String>, pass: Option<String>) -> Option<(String, String)> {
    let non_empty = |v: Option<String>| v.filter(|v| !v.trim().is_empty());
    Some((non_empty(user)?, non_empty(pass)?))
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
