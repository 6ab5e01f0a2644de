use std::sync::LazyLock;

use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;

/// Runtime configuration, read once from `TRIVIA_`-prefixed environment
/// variables (after `dotenvy` has populated them from `.env`).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            listen_addr: default_listen_addr(),
            loglevel: default_loglevel(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite:trivia.sqlite".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::new()
        .merge(Env::prefixed("TRIVIA_"))
        .extract()
        .unwrap_or_else(|e| {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        })
});

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert!(cfg.database_url.starts_with("sqlite:"));
        assert_eq!(cfg.loglevel, "info");
        assert!(cfg.listen_addr.contains(':'));
    }
}
