//! Connection string handling.
//!
//! Two forms are accepted: `postgres://` URLs, which sqlx parses itself, and
//! libpq `key=value` strings such as
//!
//! ```text
//! user=postgres password=secret dbname=example sslmode=disable port=5432 host=/var/run/postgresql
//! ```
//!
//! The `key=value` grammar (quoting, escapes, unknown options) is left to
//! `tokio_postgres::Config`; the result is copied onto sqlx connect options.

use std::str::FromStr;

use sea_orm::sqlx::postgres::{PgConnectOptions, PgSslMode};
use tokio_postgres::config::{Config, Host, SslMode};

use crate::errors::{AppError, AppResult};

/// Parse either a URL or a `key=value` string into sqlx connect options.
pub fn parse_connect_options(input: &str) -> AppResult<PgConnectOptions> {
    let trimmed = input.trim();
    if trimmed.starts_with("postgres://") || trimmed.starts_with("postgresql://") {
        return PgConnectOptions::from_str(trimmed)
            .map_err(|e| AppError::connection(e.to_string()));
    }

    let config = Config::from_str(trimmed).map_err(|e| AppError::connection(e.to_string()))?;
    to_connect_options(&config)
}

/// Copy a parsed libpq config onto sqlx options. Unset fields fall back to
/// the `PG*` environment variables and libpq defaults. sqlx connects to a
/// single server, so only the first host and port are used.
fn to_connect_options(config: &Config) -> AppResult<PgConnectOptions> {
    let mut options = PgConnectOptions::new();

    match config.get_hosts().first() {
        Some(Host::Tcp(host)) => options = options.host(host),
        #[cfg(unix)]
        Some(Host::Unix(path)) => options = options.socket(path),
        None => {
            if let Some(addr) = config.get_hostaddrs().first() {
                options = options.host(&addr.to_string());
            }
        }
    }
    if let Some(port) = config.get_ports().first() {
        options = options.port(*port);
    }
    if let Some(user) = config.get_user() {
        options = options.username(user);
    }
    if let Some(password) = config.get_password() {
        let password = std::str::from_utf8(password)
            .map_err(|_| AppError::connection("password is not valid UTF-8"))?;
        options = options.password(password);
    }
    if let Some(dbname) = config.get_dbname() {
        options = options.database(dbname);
    }
    if let Some(name) = config.get_application_name() {
        options = options.application_name(name);
    }

    Ok(options.ssl_mode(ssl_mode(config.get_ssl_mode())))
}

fn ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Require => PgSslMode::Require,
        _ => PgSslMode::Prefer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiline_key_value_string() {
        let options = parse_connect_options(
            "
                user=postgres
                password=secret
                dbname=example
                sslmode=disable
                port=5432
                host=/var/run/postgresql
            ",
        )
        .unwrap();

        assert_eq!(options.get_username(), "postgres");
        assert_eq!(options.get_database(), Some("example"));
        assert_eq!(options.get_port(), 5432);
        assert_eq!(
            options.get_socket(),
            Some(&std::path::PathBuf::from("/var/run/postgresql"))
        );
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Disable));
    }

    #[test]
    fn test_parse_quoted_values() {
        let options =
            parse_connect_options(r"user='it\'s me' dbname='my db' host=db.internal").unwrap();

        assert_eq!(options.get_username(), "it's me");
        assert_eq!(options.get_database(), Some("my db"));
        assert_eq!(options.get_host(), "db.internal");
    }

    #[test]
    fn test_require_sslmode_is_kept() {
        let options = parse_connect_options("host=localhost sslmode=require").unwrap();
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Require));
    }

    #[test]
    fn test_first_host_and_port_are_used() {
        let options = parse_connect_options("host=primary,replica port=5433,5434").unwrap();

        assert_eq!(options.get_host(), "primary");
        assert_eq!(options.get_port(), 5433);
    }

    #[test]
    fn test_empty_string_is_accepted() {
        assert!(parse_connect_options("   ").is_ok());
    }

    #[test]
    fn test_missing_equals_is_rejected() {
        let err = parse_connect_options("user postgres").unwrap_err();
        assert!(matches!(err, AppError::Connection(_)));
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let err = parse_connect_options("user=postgres colour=blue").unwrap_err();
        assert!(matches!(err, AppError::Connection(_)));
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(parse_connect_options("port=abc").is_err());
        assert!(parse_connect_options("port=70000").is_err());
    }

    #[test]
    fn test_invalid_sslmode_is_rejected() {
        let err = parse_connect_options("sslmode=sometimes").unwrap_err();
        assert!(matches!(err, AppError::Connection(_)));
    }

    #[test]
    fn test_unterminated_quote_is_rejected() {
        assert!(parse_connect_options("password='open").is_err());
    }

    #[test]
    fn test_url_is_accepted() {
        let options = parse_connect_options("postgres://alice:pw@localhost:5432/example").unwrap();
        assert_eq!(options.get_username(), "alice");
        assert_eq!(options.get_database(), Some("example"));
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        let err = parse_connect_options("postgres://alice@localhost:notaport/example").unwrap_err();
        assert!(matches!(err, AppError::Connection(_)));
    }
}
