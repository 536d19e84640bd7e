//! The embedded `agrifuture.toml`.

use std::sync::OnceLock;

use store::AppConfig;

const CONFIG_TOML: &str = include_str!("../agrifuture.toml");

/// Configuration parsed once from the file embedded at build time.
pub fn app_config() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(|| AppConfig::from_toml_or_default(CONFIG_TOML))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let parsed = AppConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(&parsed, app_config());
        assert_eq!(parsed, AppConfig::default());
    }
}
