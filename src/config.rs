/// Runtime settings loaded from the environment, with development defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Seconds between dispatch ticks of the automation engine.
    pub poll_interval_secs: u64,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://workforce_transformer.db".to_string()),
            poll_interval_secs: std::env::var("AUTOMATION_POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Only checks fields no test environment is expected to override
        let settings = Settings::from_env();
        assert!(!settings.host.is_empty());
        assert!(settings.poll_interval_secs > 0);
    }
}
