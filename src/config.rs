use std::env;

use crate::forms::DEFAULT_IMAGE;
use crate::roster::Roster;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub default_image: String,
    pub empty_roster: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_owned(),
            default_image: DEFAULT_IMAGE.to_owned(),
            empty_roster: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Config {
            log_level: lookup("FRIENDSPLIT_LOG").unwrap_or(defaults.log_level),
            default_image: lookup("FRIENDSPLIT_DEFAULT_IMAGE")
                .filter(|image| !image.trim().is_empty())
                .unwrap_or(defaults.default_image),
            empty_roster: lookup("FRIENDSPLIT_EMPTY_ROSTER")
                .map(|flag| matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.empty_roster),
        }
    }

    pub fn initial_roster(&self) -> Roster {
        if self.empty_roster {
            Roster::default()
        } else {
            Roster::sample()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<_, _> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.initial_roster().len(), 3);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("FRIENDSPLIT_LOG", "debug"),
            ("FRIENDSPLIT_DEFAULT_IMAGE", "https://example.com/a.png"),
            ("FRIENDSPLIT_EMPTY_ROSTER", "TRUE"),
        ]);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_image, "https://example.com/a.png");
        assert!(config.initial_roster().is_empty());
    }

    #[test]
    fn blank_image_falls_back_to_default() {
        assert_eq!(config(&[("FRIENDSPLIT_DEFAULT_IMAGE", " ")]).default_image, DEFAULT_IMAGE);
    }
}
