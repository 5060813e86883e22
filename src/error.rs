use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
    #[error("Unknown table: {0}")]
    UnknownTable(String),
    #[error("Unknown table kind: {0}")]
    UnknownKind(String),
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("Unknown quantity: {0}")]
    UnknownQuantity(String),
    #[error("Unknown unit {unit:?} in {text:?}")]
    UnknownUnit { unit: String, text: String },
    #[error("Invalid filter pattern: {0}")]
    InvalidPattern(String),
}
