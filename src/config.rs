//! Runtime settings, read from the environment (and an optional `.env` file).

use std::env;

use crate::error::{BotError, BotResult};
use crate::queries::birthday_queries::{DEFAULT_LOOKAHEAD_DAYS, MAX_LOOKAHEAD_DAYS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Filter directive for the stderr logger (default: "error").
    pub log_level: String,
    /// REPL prompt (default: ">>> ").
    pub prompt: String,
    /// Length of the upcoming-birthdays window in days (default: 7).
    pub lookahead_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "error".into(),
            prompt: ">>> ".into(),
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
        }
    }
}

impl Config {
    /// Optional environment variables:
    /// - `BOT_LOG_LEVEL`
    /// - `BOT_PROMPT`
    /// - `BOT_LOOKAHEAD_DAYS` (1 to 366)
    pub fn from_env() -> BotResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("BOT_LOG_LEVEL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_level);

        let prompt = lookup("BOT_PROMPT").unwrap_or(defaults.prompt);

        let lookahead_days = match lookup("BOT_LOOKAHEAD_DAYS") {
            None => defaults.lookahead_days,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if (1..=MAX_LOOKAHEAD_DAYS).contains(&n) => n,
                _ => {
                    return Err(BotError::Config {
                        var: "BOT_LOOKAHEAD_DAYS".into(),
                        reason: format!(
                            "must be between 1 and {}, got '{}'",
                            MAX_LOOKAHEAD_DAYS, raw
                        ),
                    })
                }
            },
        };

        Ok(Self {
            log_level,
            prompt,
            lookahead_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.lookahead_days, 7);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("BOT_LOG_LEVEL", "debug"),
            ("BOT_PROMPT", "> "),
            ("BOT_LOOKAHEAD_DAYS", "14"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.lookahead_days, 14);
    }

    #[test]
    fn rejects_zero_lookahead() {
        let result = Config::from_lookup(lookup_from(&[("BOT_LOOKAHEAD_DAYS", "0")]));
        assert!(matches!(result, Err(BotError::Config { .. })));
    }

    #[test]
    fn rejects_lookahead_over_a_year() {
        let result = Config::from_lookup(lookup_from(&[("BOT_LOOKAHEAD_DAYS", "100000000")]));
        assert!(matches!(result, Err(BotError::Config { .. })));
        assert!(Config::from_lookup(lookup_from(&[("BOT_LOOKAHEAD_DAYS", "367")])).is_err());
        let config = Config::from_lookup(lookup_from(&[("BOT_LOOKAHEAD_DAYS", "366")])).unwrap();
        assert_eq!(config.lookahead_days, 366);
    }

    #[test]
    fn rejects_non_numeric_lookahead() {
        assert!(Config::from_lookup(lookup_from(&[("BOT_LOOKAHEAD_DAYS", "week")])).is_err());
    }
}
