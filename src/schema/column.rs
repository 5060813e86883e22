use super::Dialect;
use super::types::{ColumnType, map_type};
use crate::table::DbTable;

/// Name of the surrogate key column present on every table.
pub const KEY_COLUMN: &str = "id";

/// Default value of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Integer(i64),
    Real(f64),
    Text(&'static str),
    Bool(bool),
    CurrentTimestamp,
}

impl DefaultValue {
    /// Render as an SQL literal for the given dialect.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Real(r) => format_real(*r),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Bool(b) => dialect.bool_literal(*b).to_string(),
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP".to_string(),
        }
    }
}

// Keep a decimal point so the literal reads as a real in both backends.
fn format_real(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Defines a column of a table, other than the key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub typ: ColumnType,
    pub nullable: bool,
    pub default: Option<DefaultValue>,
    /// Table whose key this column references.
    pub foreign_key: Option<DbTable>,
}

impl ColumnDef {
    pub const fn new(name: &'static str, typ: ColumnType) -> Self {
        Self {
            name,
            typ,
            nullable: true,
            default: None,
            foreign_key: None,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, ColumnType::Text).with_default(DefaultValue::Text(""))
    }

    pub const fn real(name: &'static str) -> Self {
        Self::new(name, ColumnType::Real).with_default(DefaultValue::Real(0.0))
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, ColumnType::Integer).with_default(DefaultValue::Integer(0))
    }

    pub const fn boolean(name: &'static str, value: bool) -> Self {
        Self::new(name, ColumnType::Boolean).with_default(DefaultValue::Bool(value))
    }

    /// Integer column referencing the key of `table`.
    pub const fn reference(name: &'static str, table: DbTable) -> Self {
        Self {
            foreign_key: Some(table),
            ..Self::new(name, ColumnType::Integer)
        }
    }

    pub const fn not_null(self) -> Self {
        Self {
            nullable: false,
            ..self
        }
    }

    pub const fn with_default(self, value: DefaultValue) -> Self {
        Self {
            default: Some(value),
            ..self
        }
    }

    /// Column definition as it appears inside CREATE TABLE.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        let mut sql = format!("{} {}", self.name, map_type(self.typ, dialect));
        if !self.nullable {
            sql.push_str(" NOT NULL");
        }
        if let Some(default) = &self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(&default.to_sql(dialect));
        }
        sql
    }
}
