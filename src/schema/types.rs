//! Column types and their spelling in each dialect.

use super::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Boolean,
    Date,
    Timestamp,
}

/// Map a column type to its SQL type name.
pub fn map_type(typ: ColumnType, dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Sqlite => map_sqlite_type(typ),
        Dialect::PostgreSQL => map_postgres_type(typ),
    }
}

fn map_sqlite_type(typ: ColumnType) -> &'static str {
    match typ {
        ColumnType::Integer => "INTEGER",
        ColumnType::Real => "REAL",
        ColumnType::Text => "TEXT",
        // SQLite stores these as integers; the name is only an affinity hint
        ColumnType::Boolean => "BOOLEAN",
        ColumnType::Date => "DATE",
        ColumnType::Timestamp => "DATETIME",
    }
}

fn map_postgres_type(typ: ColumnType) -> &'static str {
    match typ {
        ColumnType::Integer => "INTEGER",
        ColumnType::Real => "REAL",
        ColumnType::Text => "TEXT",
        ColumnType::Boolean => "BOOLEAN",
        ColumnType::Date => "DATE",
        ColumnType::Timestamp => "TIMESTAMP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_types() {
        assert_eq!(map_type(ColumnType::Real, Dialect::Sqlite), "REAL");
        assert_eq!(map_type(ColumnType::Timestamp, Dialect::Sqlite), "DATETIME");
        assert_eq!(map_type(ColumnType::Boolean, Dialect::Sqlite), "BOOLEAN");
    }

    #[test]
    fn test_postgres_types() {
        assert_eq!(map_type(ColumnType::Integer, Dialect::PostgreSQL), "INTEGER");
        assert_eq!(map_type(ColumnType::Timestamp, Dialect::PostgreSQL), "TIMESTAMP");
        assert_eq!(map_type(ColumnType::Text, Dialect::PostgreSQL), "TEXT");
    }
}
