use std::env;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Absent means the service runs without a database.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Ok(Self {
            database_url,
            host: "0.0.0.0".to_string(),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
    }

    #[test]
    fn defaults_without_any_variables() {
        let config = config_from(&[]);
        assert!(config.database_url.is_none());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn reads_port_and_database_url() {
        let config = config_from(&[
            ("PORT", "9100"),
            ("DATABASE_URL", "postgres://localhost/shop"),
        ]);
        assert_eq!(config.port, 9100);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/shop")
        );
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "eighty")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn blank_database_url_counts_as_missing() {
        let config = config_from(&[("DATABASE_URL", "  ")]);
        assert!(config.database_url.is_none());
    }
}
