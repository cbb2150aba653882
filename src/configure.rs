use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub catalog_url: String,
    pub http_timeout_secs: u64,
    pub log_level: String,
    pub log_to_file: bool,
    pub log_file: String,
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from("config/config.yaml")
}

pub fn load_config_from(path: &str) -> Result<AppConfig, ConfigError> {
    let s = Config::builder()
        // Set defaults
        .set_default("api_url", "http://localhost:8080/exec")?
        .set_default("catalog_url", "http://localhost:8080/exec?sheet=glass")?
        .set_default("http_timeout_secs", 10)?
        .set_default("log_level", "info")?
        .set_default("log_to_file", false)?
        .set_default("log_file", "log/glass_request.log")?
        // Add configuration from a file
        .add_source(File::with_name(path).required(false))
        // Add configuration from environment variables
        .add_source(config::Environment::with_prefix("GLASS"))
        .build()?;

    s.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config_from("config/does_not_exist").unwrap();
        assert_eq!(config.http_timeout_secs, 10);
        assert!(!config.log_to_file);
        assert_eq!(config.log_file, "log/glass_request.log");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("glass_request_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("override.yaml");
        let yaml = "catalog_url: \"http://sheets.test/catalog\"\nhttp_timeout_secs: 3\n";
        std::fs::write(&path, yaml).unwrap();

        let config = load_config_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.catalog_url, "http://sheets.test/catalog");
        assert_eq!(config.http_timeout_secs, 3);
        assert_eq!(config.log_level, "info");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
