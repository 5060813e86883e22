pub mod config;
pub mod error;
pub mod listing;
pub mod locale;
pub mod schema;
pub mod table;
pub mod units;
pub mod yeast_filter;

use wasm_bindgen::prelude::*;

use error::SchemaError;
use locale::Locale;
use schema::{DatabaseSchema, Dialect};
use table::{DbTable, TableKind};
use units::{Amount, PhysicalQuantity};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// CREATE TABLE statement for a table, optionally under another name
#[wasm_bindgen(js_name = "createTableSql")]
pub fn create_table_sql(
    table: &str,
    name: Option<String>,
    dialect: Option<String>,
) -> Result<String, String> {
    with_table(table, dialect.as_deref(), |schema, t| {
        schema.generate_create_table(t, name.as_deref().unwrap_or(""))
    })
}

/// INSERT statement with named placeholders
#[wasm_bindgen(js_name = "insertRowSql")]
pub fn insert_row_sql(table: &str, dialect: Option<String>) -> Result<String, String> {
    with_table(table, dialect.as_deref(), |schema, t| schema.generate_insert_row(t))
}

/// UPDATE statement for the row with the given key
#[wasm_bindgen(js_name = "updateRowSql")]
pub fn update_row_sql(table: &str, key: i32, dialect: Option<String>) -> Result<String, String> {
    with_table(table, dialect.as_deref(), |schema, t| {
        schema.generate_update_row(t, i64::from(key))
    })
}

/// Statement copying a table into `dest` on the target backend
#[wasm_bindgen(js_name = "copyTableSql")]
pub fn copy_table_sql(table: &str, dest: &str, target: Option<String>) -> Result<String, String> {
    let target = parse_dialect(target.as_deref()).map_err(|e| e.to_string())?;
    with_table(table, None, |schema, t| schema.generate_copy_table(t, dest, target))
}

/// Names of every table, or of one kind of table
#[wasm_bindgen(js_name = "tableNames")]
pub fn table_names(kind: Option<String>) -> Result<js_sys::Array, String> {
    let names = names_of_kind(kind.as_deref()).map_err(|e| e.to_string())?;
    Ok(names.into_iter().map(JsValue::from).collect())
}

/// Quantity text such as "2 gal" in liters (or kilograms for mass),
/// read with the separators of `locale` (e.g. "de_DE")
#[wasm_bindgen(js_name = "quantityToSi")]
pub fn quantity_to_si(
    text: &str,
    quantity: Option<String>,
    locale: Option<String>,
) -> Result<f64, String> {
    let locale = locale.as_deref().map(Locale::from_tag).unwrap_or_default();
    to_si(text, quantity.as_deref(), &locale)
        .map(|amount| amount.quantity)
        .map_err(|e| e.to_string())
}

fn to_si(text: &str, quantity: Option<&str>, locale: &Locale) -> Result<Amount, SchemaError> {
    let quantity = match quantity {
        Some(q) => PhysicalQuantity::from_str(q)?,
        None => PhysicalQuantity::Volume,
    };
    units::string_to_si(text, quantity, locale)
}

fn parse_dialect(dialect: Option<&str>) -> Result<Dialect, SchemaError> {
    dialect.map(Dialect::from_str).transpose().map(Option::unwrap_or_default)
}

fn with_table<F>(table: &str, dialect: Option<&str>, generate: F) -> Result<String, String>
where
    F: FnOnce(&DatabaseSchema, DbTable) -> Option<String>,
{
    let schema = DatabaseSchema::new(parse_dialect(dialect).map_err(|e| e.to_string())?);
    let unknown = || SchemaError::UnknownTable(table.to_string()).to_string();
    let t = schema.table_by_name(table).ok_or_else(unknown)?.table;
    generate(&schema, t).ok_or_else(unknown)
}

fn names_of_kind(kind: Option<&str>) -> Result<Vec<&'static str>, SchemaError> {
    let schema = DatabaseSchema::default();
    let tables = match kind {
        Some(kind) => schema.tables_of_kind(TableKind::from_str(kind)?),
        None => schema.all_tables(),
    };
    Ok(tables.iter().map(|t| t.name).collect())
}
