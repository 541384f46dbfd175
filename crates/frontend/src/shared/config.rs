use contracts::shared::config::HeaderConfig;
use once_cell::sync::Lazy;

/// Header configuration shipped with the bundle
const HEADER_TOML: &str = include_str!("../../header.toml");

static HEADER_CONFIG: Lazy<HeaderConfig> = Lazy::new(|| load_header_config(HEADER_TOML));

/// Parsed once on first use.
pub fn header_config() -> &'static HeaderConfig {
    &HEADER_CONFIG
}

/// Falls back to the built-in defaults when `contents` is invalid.
fn load_header_config(contents: &str) -> HeaderConfig {
    match HeaderConfig::from_toml(contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("header.toml rejected, using built-in defaults: {err:#}");
            HeaderConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        assert_eq!(load_header_config(HEADER_TOML), HeaderConfig::default());
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = load_header_config("breakpoint = \"wide\"");
        assert_eq!(config, HeaderConfig::default());
    }
}
