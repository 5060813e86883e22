//! Table descriptors and per-table SQL generation.

use super::Dialect;
use super::catalog;
use super::column::{ColumnDef, KEY_COLUMN};
use super::types::ColumnType;
use crate::table::{DbTable, TableKind};

/// Metadata for one database table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub table: DbTable,
    pub name: &'static str,
    pub kind: TableKind,
    /// Domain type stored in this table, if any.
    pub class_name: Option<&'static str>,
    pub columns: &'static [ColumnDef],
    pub child_table: Option<DbTable>,
    pub in_recipe_table: Option<DbTable>,
    pub inventory_table: Option<DbTable>,
    pub internal_table: Option<DbTable>,
}

impl TableSchema {
    pub fn new(
        table: DbTable,
        name: &'static str,
        kind: TableKind,
        columns: &'static [ColumnDef],
    ) -> Self {
        Self {
            table,
            name,
            kind,
            class_name: None,
            columns,
            child_table: None,
            in_recipe_table: None,
            inventory_table: None,
            internal_table: None,
        }
    }

    pub fn with_class(mut self, class_name: &'static str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    pub fn with_child(mut self, table: DbTable) -> Self {
        self.child_table = Some(table);
        self
    }

    pub fn with_in_recipe(mut self, table: DbTable) -> Self {
        self.in_recipe_table = Some(table);
        self
    }

    pub fn with_inventory(mut self, table: DbTable) -> Self {
        self.inventory_table = Some(table);
        self
    }

    pub fn with_internal(mut self, table: DbTable) -> Self {
        self.internal_table = Some(table);
        self
    }

    pub fn is_base_table(&self) -> bool {
        self.kind == TableKind::Base
    }

    pub fn is_internal_table(&self) -> bool {
        self.kind == TableKind::Internal
    }

    pub fn is_in_recipe_table(&self) -> bool {
        self.kind == TableKind::InRecipe
    }

    pub fn is_child_table(&self) -> bool {
        self.kind == TableKind::Child
    }

    pub fn is_inventory_table(&self) -> bool {
        self.kind == TableKind::Inventory
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// CREATE TABLE statement. `name` replaces the table's own name when it
    /// is non-empty.
    pub fn generate_create_table(&self, name: &str, dialect: Dialect) -> String {
        let table_name = if name.is_empty() { self.name } else { name };

        let mut parts = vec![dialect.key_column().to_string()];
        parts.extend(self.columns.iter().map(|c| c.to_sql(dialect)));

        // Foreign keys trail the columns
        for column in self.columns {
            let Some(target) = column.foreign_key else {
                continue;
            };
            if let Some(target) = catalog::describe(target) {
                parts.push(format!(
                    "FOREIGN KEY({}) REFERENCES {}({})",
                    column.name, target.name, KEY_COLUMN
                ));
            }
        }

        format!("CREATE TABLE {} ({})", table_name, parts.join(", "))
    }

    /// INSERT with one named placeholder per non-key column.
    pub fn generate_insert_row(&self, _dialect: Dialect) -> String {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name).collect();
        let placeholders: Vec<String> = names.iter().map(|n| format!(":{}", n)).collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.name,
            names.join(", "),
            placeholders.join(", ")
        )
    }

    /// UPDATE of every non-key column for the row whose key is `key`.
    pub fn generate_update_row(&self, key: i64, _dialect: Dialect) -> String {
        let assignments: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("{} = :{}", c.name, c.name))
            .collect();

        format!(
            "UPDATE {} SET {} WHERE {} = {}",
            self.name,
            assignments.join(", "),
            KEY_COLUMN,
            key
        )
    }

    /// Copy every row, key included, into `dest`. The statement runs on the
    /// target database, reading a source table of the same shape.
    pub fn generate_copy_table(&self, dest: &str, dialect: Dialect) -> String {
        let mut targets = vec![KEY_COLUMN];
        targets.extend(self.columns.iter().map(|c| c.name));

        let mut sources = vec![KEY_COLUMN.to_string()];
        sources.extend(self.columns.iter().map(|c| match (c.typ, dialect) {
            // SQLite keeps booleans as 0/1
            (ColumnType::Boolean, Dialect::PostgreSQL) => {
                format!("CAST({} AS BOOLEAN)", c.name)
            }
            _ => c.name.to_string(),
        }));

        format!(
            "INSERT INTO {} ({}) SELECT {} FROM {}",
            dest,
            targets.join(", "),
            sources.join(", "),
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOP_COLUMNS: &[ColumnDef] = &[
        ColumnDef::text("name"),
        ColumnDef::real("alpha"),
        ColumnDef::boolean("display", true),
    ];

    const JUNCTION_COLUMNS: &[ColumnDef] = &[
        ColumnDef::reference("hop_id", DbTable::Hop),
        ColumnDef::reference("recipe_id", DbTable::Recipe),
    ];

    fn hop() -> TableSchema {
        TableSchema::new(DbTable::Hop, "hop", TableKind::Base, HOP_COLUMNS).with_class("Hop")
    }

    #[test]
    fn test_create_table_sqlite() {
        let sql = hop().generate_create_table("", Dialect::Sqlite);
        assert_eq!(
            sql,
            "CREATE TABLE hop (id INTEGER PRIMARY KEY autoincrement, name TEXT DEFAULT '', \
             alpha REAL DEFAULT 0.0, display BOOLEAN DEFAULT 1)"
        );
    }

    #[test]
    fn test_create_table_with_name_override() {
        let sql = hop().generate_create_table("hop_staging", Dialect::PostgreSQL);
        assert!(sql.starts_with("CREATE TABLE hop_staging (id SERIAL PRIMARY KEY, "));
        assert!(sql.ends_with("display BOOLEAN DEFAULT true)"));
    }

    #[test]
    fn test_create_table_foreign_keys() {
        let junction =
            TableSchema::new(DbTable::HopInRecipe, "hop_in_recipe", TableKind::InRecipe, JUNCTION_COLUMNS);
        let sql = junction.generate_create_table("", Dialect::Sqlite);
        assert!(sql.contains("FOREIGN KEY(hop_id) REFERENCES hop(id)"));
        assert!(sql.contains("FOREIGN KEY(recipe_id) REFERENCES recipe(id)"));
        // constraints follow every column
        let fk_at = sql.find("FOREIGN KEY").unwrap();
        assert!(sql.find("recipe_id INTEGER").unwrap() < fk_at);
    }

    #[test]
    fn test_insert_row() {
        let sql = hop().generate_insert_row(Dialect::Sqlite);
        assert_eq!(
            sql,
            "INSERT INTO hop (name, alpha, display) VALUES (:name, :alpha, :display)"
        );
    }

    #[test]
    fn test_update_row() {
        let sql = hop().generate_update_row(42, Dialect::Sqlite);
        assert_eq!(
            sql,
            "UPDATE hop SET name = :name, alpha = :alpha, display = :display WHERE id = 42"
        );
    }

    #[test]
    fn test_copy_table_sqlite() {
        let sql = hop().generate_copy_table("hop_backup", Dialect::Sqlite);
        assert_eq!(
            sql,
            "INSERT INTO hop_backup (id, name, alpha, display) SELECT id, name, alpha, display FROM hop"
        );
    }

    #[test]
    fn test_copy_table_postgres_casts_booleans() {
        let sql = hop().generate_copy_table("hop", Dialect::PostgreSQL);
        assert!(sql.contains("SELECT id, name, alpha, CAST(display AS BOOLEAN) FROM hop"));
    }

    #[test]
    fn test_predicates() {
        let t = hop();
        assert!(t.is_base_table());
        assert!(!t.is_inventory_table());
        assert!(!t.is_child_table());
        assert_eq!(t.column("alpha").map(|c| c.typ), Some(ColumnType::Real));
        assert!(t.column("missing").is_none());
    }
}
