//! Runtime settings for the command line tool.
//!
//! Settings come from built-in defaults overridden by environment variables
//! prefixed with `RECOGNIZER_`:
//! * `RECOGNIZER_LOG` – a `tracing` filter directive, `warn` by default
//! * `RECOGNIZER_NOW` – fixed reference time such as `2017-06-01T10:15:00`,
//!   the local clock when unset
//! * `RECOGNIZER_PRETTY` – pretty print the action JSON, `true` by default

use chrono::{Local, NaiveDateTime};
use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub log: String,
    pub now: Option<NaiveDateTime>,
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: "warn".into(),
            now: None,
            pretty: true,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(Environment::with_prefix("RECOGNIZER"))
    }
    pub fn load_from(environment: Environment) -> Result<Self> {
        let defaults = Settings::default();
        let settings = Config::builder()
            .set_default("log", defaults.log)?
            .set_default("pretty", defaults.pretty)?
            .add_source(environment)
            .build()?;
        Ok(settings.try_deserialize()?)
    }
    /// The configured reference time, or the local clock.
    pub fn reference_time(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("RECOGNIZER").source(Some(source))
    }

    #[test]
    fn defaults_without_environment() {
        let settings = Settings::load_from(environment(&[])).expect("settings load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn environment_overrides() {
        let settings = Settings::load_from(environment(&[
            ("RECOGNIZER_LOG", "debug"),
            ("RECOGNIZER_NOW", "2017-06-01T10:15:00"),
            ("RECOGNIZER_PRETTY", "false"),
        ]))
        .expect("settings load");
        assert_eq!(settings.log, "debug");
        assert!(!settings.pretty);
        let now = settings.now.expect("now configured");
        assert_eq!(now.to_string(), "2017-06-01 10:15:00");
        assert_eq!(settings.reference_time(), now);
    }
}
