//! Target database backends.

use crate::error::SchemaError;

/// SQL dialect variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// SQLite, the default local store
    #[default]
    Sqlite,
    /// PostgreSQL
    PostgreSQL,
}

impl Dialect {
    /// Parse dialect from string.
    pub fn from_str(s: &str) -> Result<Self, SchemaError> {
        match s.to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "postgres" | "postgresql" | "pgsql" => Ok(Self::PostgreSQL),
            _ => Err(SchemaError::UnknownDialect(s.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::PostgreSQL => "postgresql",
        }
    }

    /// Column definition of the surrogate key every table carries.
    pub fn key_column(self) -> &'static str {
        match self {
            Self::Sqlite => "id INTEGER PRIMARY KEY autoincrement",
            Self::PostgreSQL => "id SERIAL PRIMARY KEY",
        }
    }

    /// Literal for a boolean default.
    pub fn bool_literal(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::Sqlite, true) => "1",
            (Self::Sqlite, false) => "0",
            (Self::PostgreSQL, true) => "true",
            (Self::PostgreSQL, false) => "false",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Dialect::from_str("SQLite"), Ok(Dialect::Sqlite));
        assert_eq!(Dialect::from_str("pgsql"), Ok(Dialect::PostgreSQL));
        assert_eq!(Dialect::from_str("postgres"), Ok(Dialect::PostgreSQL));
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(
            Dialect::from_str("mysql"),
            Err(SchemaError::UnknownDialect("mysql".to_string()))
        );
    }

    #[test]
    fn test_key_column() {
        assert!(Dialect::Sqlite.key_column().contains("autoincrement"));
        assert!(Dialect::PostgreSQL.key_column().contains("SERIAL"));
    }

    #[test]
    fn test_bool_literal() {
        assert_eq!(Dialect::Sqlite.bool_literal(true), "1");
        assert_eq!(Dialect::PostgreSQL.bool_literal(false), "false");
    }
}
