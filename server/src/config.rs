// storefront_server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  // From DATABASE_URL, or field by field from the DB_* variables.
  pub db_connect: PgConnectOptions,
  pub db_pool_size: u32,

  // Upsert the house products on startup.
  pub seed_db: bool,

  pub log_json: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "0.0.0.0");
    let server_port = get_or("PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;

    let db_connect = match lookup("DATABASE_URL") {
      Some(url) => url
        .parse::<PgConnectOptions>()
        .map_err(|e| AppError::Config(format!("Invalid DATABASE_URL: {}", e)))?,
      None => {
        let db_port = get_or("DB_PORT", "5432")
          .parse::<u16>()
          .map_err(|e| AppError::Config(format!("Invalid DB_PORT: {}", e)))?;
        let options = PgConnectOptions::new()
          .host(&get_or("DB_HOST", "localhost"))
          .port(db_port)
          .username(&get_or("DB_USER", "postgres"))
          .database(&get_or("DB_NAME", "elegance_chocolat"));
        match lookup("DB_PASS") {
          Some(pass) if !pass.is_empty() => options.password(&pass),
          _ => options,
        }
      }
    };

    let db_pool_size = get_or("DB_POOL_SIZE", "5")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_POOL_SIZE: {}", e)))?;
    if db_pool_size == 0 {
      return Err(AppError::Config("DB_POOL_SIZE must be at least 1".to_string()));
    }

    let seed_db = get_or("SEED_DB", "true")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    let log_json = match get_or("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
      "json" => true,
      "text" => false,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}': expected 'text' or 'json'", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      db_connect,
      db_pool_size,
      seed_db,
      log_json,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|name| vars.get(name).cloned())
  }

  #[test]
  fn defaults_target_a_local_database() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.bind_address(), "0.0.0.0:8080");
    assert_eq!(cfg.db_connect.get_host(), "localhost");
    assert_eq!(cfg.db_connect.get_port(), 5432);
    assert_eq!(cfg.db_connect.get_username(), "postgres");
    assert_eq!(cfg.db_connect.get_database(), Some("elegance_chocolat"));
    assert_eq!(cfg.db_pool_size, 5);
    assert!(cfg.seed_db);
    assert!(!cfg.log_json);
  }

  #[test]
  fn database_url_wins_over_parts() {
    let cfg = config_from(&[("DATABASE_URL", "postgres://u:p@db/shop"), ("DB_HOST", "ignored")]).unwrap();
    assert_eq!(cfg.db_connect.get_host(), "db");
    assert_eq!(cfg.db_connect.get_username(), "u");
    assert_eq!(cfg.db_connect.get_database(), Some("shop"));
  }

  #[test]
  fn reserved_characters_in_credentials_do_not_change_the_host() {
    let cfg = config_from(&[
      ("DB_USER", "shop@owner"),
      ("DB_PASS", "p@ss/w:rd"),
      ("DB_HOST", "db.internal"),
      ("DB_PORT", "6543"),
    ])
    .unwrap();
    assert_eq!(cfg.db_connect.get_host(), "db.internal");
    assert_eq!(cfg.db_connect.get_port(), 6543);
    assert_eq!(cfg.db_connect.get_username(), "shop@owner");
    assert_eq!(cfg.db_connect.get_database(), Some("elegance_chocolat"));
  }

  #[test]
  fn invalid_values_are_config_errors() {
    assert!(matches!(config_from(&[("PORT", "eighty")]), Err(AppError::Config(_))));
    assert!(matches!(config_from(&[("DB_POOL_SIZE", "0")]), Err(AppError::Config(_))));
    assert!(matches!(config_from(&[("SEED_DB", "maybe")]), Err(AppError::Config(_))));
    assert!(matches!(config_from(&[("LOG_FORMAT", "xml")]), Err(AppError::Config(_))));
    assert!(matches!(config_from(&[("DATABASE_URL", "not a url")]), Err(AppError::Config(_))));
  }
}
