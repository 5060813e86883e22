//! Runtime settings shared by the binary and the wasm bindings.

use crate::error::SchemaError;
use crate::locale::Locale;
use crate::schema::Dialect;

pub const DIALECT_VAR: &str = "BREWSCHEMA_DIALECT";
pub const LOCALE_VAR: &str = "BREWSCHEMA_LOCALE";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub dialect: Dialect,
    pub locale: Locale,
    /// `tracing` filter directive, e.g. `warn` or `brewschema=debug`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::Sqlite,
            locale: Locale::C,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `BREWSCHEMA_DIALECT` and `BREWSCHEMA_LOCALE`
    /// (falling back to `LANG` for the locale).
    pub fn from_env() -> Result<Self, SchemaError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(get: F) -> Result<Self, SchemaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dialect) = get(DIALECT_VAR) {
            config.dialect = Dialect::from_str(&dialect)?;
        }
        if let Some(tag) = get(LOCALE_VAR).or_else(|| get("LANG")) {
            config.locale = Locale::from_tag(&tag);
        }
        Ok(config)
    }
}
