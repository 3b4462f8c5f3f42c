//! Process-environment configuration
//!
//! All settings come from the environment at startup (after an optional
//! `.env` load). Lookup is injected so tests never touch the real
//! environment.

use sqlx::mysql::MySqlConnectOptions;

/// HTTP listen settings.
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MySQL connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Bound on concurrent connections; callers queue beyond it.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "patients".to_string(),
            max_connections: 10,
        }
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Full service configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub http: HttpServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset or unparsable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("SERVER_HOST") {
            config.http.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|v| v.parse().ok()) {
            config.http.port = port;
        }
        if let Some(host) = lookup("DB_HOST") {
            config.database.host = host;
        }
        if let Some(port) = lookup("DB_PORT").and_then(|v| v.parse().ok()) {
            config.database.port = port;
        }
        if let Some(user) = lookup("DB_USER") {
            config.database.user = user;
        }
        if let Some(password) = lookup("DB_PASSWORD") {
            config.database.password = password;
        }
        if let Some(database) = lookup("DB_NAME") {
            config.database.database = database;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 5001);
        assert_eq!(config.database.host, "127.0.0.1");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SERVER_PORT", "8080"),
            ("DB_HOST", "db.internal"),
            ("DB_USER", "clinic"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "clinic_db"),
        ]);
        let config = AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.http.port, 8080);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.user, "clinic");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.database, "clinic_db");
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        let config = AppConfig::from_lookup(|key| {
            (key == "SERVER_PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(config.http.port, 5001);
    }
}
