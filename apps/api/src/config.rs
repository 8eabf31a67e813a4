use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding `index.html`, `styles.css` and `app.js`.
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            public_dir: default_public_dir(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            public_dir: default_public_dir(),
        }
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{value}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_3000() {
        assert_eq!(parse_port(None).unwrap(), 3000);
        assert_eq!(parse_port(Some("")).unwrap(), 3000);
    }

    #[test]
    fn test_port_parses_value() {
        assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
        assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
    }

    #[test]
    fn test_port_rejects_garbage() {
        let err = parse_port(Some("http")).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(parse_port(Some("70000")).is_err());
    }

    #[test]
    fn test_default_public_dir_points_at_assets() {
        assert!(Config::default().public_dir.ends_with("public"));
    }
}
