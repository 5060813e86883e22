//! The schema registry.

use std::collections::HashMap;

use tracing::{debug, instrument};

use super::Dialect;
use super::catalog;
use super::table_schema::TableSchema;
use crate::table::{DbTable, TableKind};

/// Every table descriptor, positionally indexed by [`DbTable::index`].
///
/// Built once and read-only afterwards. Lookups never fail: an invalid id,
/// the sentinel or an unknown name yields `None`.
#[derive(Debug, Clone)]
pub struct DatabaseSchema {
    /// Slot 0 belongs to the sentinel and stays empty.
    tables: Vec<Option<TableSchema>>,
    by_name: HashMap<&'static str, DbTable>,
    dialect: Dialect,
}

impl Default for DatabaseSchema {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}

impl DatabaseSchema {
    pub fn new(dialect: Dialect) -> Self {
        let mut tables = Vec::with_capacity(DbTable::ALL.len() + 1);
        tables.push(catalog::describe(DbTable::None));
        tables.extend(DbTable::ALL.iter().map(|t| catalog::describe(*t)));

        let by_name = tables
            .iter()
            .flatten()
            .map(|t| (t.name, t.table))
            .collect();

        debug!(tables = DbTable::ALL.len(), dialect = dialect.as_str(), "built database schema");

        Self {
            tables,
            by_name,
            dialect,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Number of slots, sentinel included.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    pub fn table(&self, table: DbTable) -> Option<&TableSchema> {
        self.table_at(table.index())
    }

    /// Positional lookup. Index 0 and anything at or past [`len`](Self::len)
    /// yield `None`.
    pub fn table_at(&self, index: usize) -> Option<&TableSchema> {
        if index == 0 {
            return None;
        }
        self.tables.get(index)?.as_ref()
    }

    pub fn table_by_name(&self, name: &str) -> Option<&TableSchema> {
        self.by_name.get(name).and_then(|t| self.table(*t))
    }

    pub fn table_name(&self, table: DbTable) -> Option<&'static str> {
        self.table(table).map(|t| t.name)
    }

    /// CREATE TABLE for `table`, named `name` when non-empty.
    #[instrument(name = "schema::create_table", level = "trace", skip(self))]
    pub fn generate_create_table(&self, table: DbTable, name: &str) -> Option<String> {
        self.table(table)
            .map(|t| t.generate_create_table(name, self.dialect))
    }

    #[instrument(name = "schema::insert_row", level = "trace", skip(self))]
    pub fn generate_insert_row(&self, table: DbTable) -> Option<String> {
        self.table(table).map(|t| t.generate_insert_row(self.dialect))
    }

    #[instrument(name = "schema::update_row", level = "trace", skip(self))]
    pub fn generate_update_row(&self, table: DbTable, key: i64) -> Option<String> {
        self.table(table)
            .map(|t| t.generate_update_row(key, self.dialect))
    }

    /// Copy statement targeting `dialect`, which may differ from the
    /// registry's own when migrating between backends.
    #[instrument(name = "schema::copy_table", level = "trace", skip(self))]
    pub fn generate_copy_table(&self, src: DbTable, dest: &str, dialect: Dialect) -> Option<String> {
        self.table(src).map(|t| t.generate_copy_table(dest, dialect))
    }

    /// Every table, ordered so each one follows the tables its foreign keys
    /// reference. Inventory tables move ahead of the first ingredient.
    pub fn creation_order(&self) -> Vec<&TableSchema> {
        let (inventory, rest): (Vec<&TableSchema>, Vec<&TableSchema>) = self
            .tables
            .iter()
            .flatten()
            .partition(|t| t.is_inventory_table());
        let split = rest.iter().position(|t| t.inventory_table.is_some()).unwrap_or(rest.len());

        let mut order = rest[..split].to_vec();
        order.extend(inventory);
        order.extend_from_slice(&rest[split..]);
        order
    }

    /// Every table, in registry order.
    pub fn all_tables(&self) -> Vec<&TableSchema> {
        self.tables.iter().flatten().collect()
    }

    pub fn tables_where<F>(&self, predicate: F) -> Vec<&TableSchema>
    where
        F: Fn(&TableSchema) -> bool,
    {
        self.tables.iter().flatten().filter(|t| predicate(*t)).collect()
    }

    pub fn tables_of_kind(&self, kind: TableKind) -> Vec<&TableSchema> {
        self.tables_where(|t| t.kind == kind)
    }

    pub fn inventory_tables(&self) -> Vec<&TableSchema> {
        self.tables_where(TableSchema::is_inventory_table)
    }

    pub fn child_tables(&self) -> Vec<&TableSchema> {
        self.tables_where(TableSchema::is_child_table)
    }

    pub fn in_recipe_tables(&self) -> Vec<&TableSchema> {
        self.tables_where(TableSchema::is_in_recipe_table)
    }

    pub fn base_tables(&self) -> Vec<&TableSchema> {
        self.tables_where(TableSchema::is_base_table)
    }

    pub fn internal_tables(&self) -> Vec<&TableSchema> {
        self.tables_where(TableSchema::is_internal_table)
    }

    pub fn child_table(&self, table: DbTable) -> Option<&TableSchema> {
        self.related(table, |t| t.child_table)
    }

    pub fn in_recipe_table(&self, table: DbTable) -> Option<&TableSchema> {
        self.related(table, |t| t.in_recipe_table)
    }

    pub fn inventory_table(&self, table: DbTable) -> Option<&TableSchema> {
        self.related(table, |t| t.inventory_table)
    }

    pub fn internal_table(&self, table: DbTable) -> Option<&TableSchema> {
        self.related(table, |t| t.internal_table)
    }

    pub fn child_table_name(&self, table: DbTable) -> Option<&'static str> {
        self.child_table(table).map(|t| t.name)
    }

    pub fn in_recipe_table_name(&self, table: DbTable) -> Option<&'static str> {
        self.in_recipe_table(table).map(|t| t.name)
    }

    pub fn inventory_table_name(&self, table: DbTable) -> Option<&'static str> {
        self.inventory_table(table).map(|t| t.name)
    }

    pub fn internal_table_name(&self, table: DbTable) -> Option<&'static str> {
        self.internal_table(table).map(|t| t.name)
    }

    pub fn class_name_to_table(&self, class_name: &str) -> Option<DbTable> {
        self.find_class(class_name).map(|t| t.table)
    }

    pub fn class_name_to_table_name(&self, class_name: &str) -> Option<&'static str> {
        self.find_class(class_name).map(|t| t.name)
    }

    fn find_class(&self, class_name: &str) -> Option<&TableSchema> {
        self.tables
            .iter()
            .flatten()
            .find(|t| t.class_name == Some(class_name))
    }

    fn related<F>(&self, table: DbTable, relation: F) -> Option<&TableSchema>
    where
        F: Fn(&TableSchema) -> Option<DbTable>,
    {
        let related = relation(self.table(table)?)?;
        self.table(related)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_by_id_returns_matching_descriptor() {
        let schema = DatabaseSchema::default();
        for table in DbTable::ALL {
            assert_eq!(schema.table(table).unwrap().table, table);
        }
    }

    #[test]
    fn test_name_round_trip() {
        let schema = DatabaseSchema::default();
        for table in DbTable::ALL {
            let by_id = schema.table(table).unwrap();
            assert_eq!(schema.table_by_name(by_id.name), Some(by_id));
        }
    }

    #[test]
    fn test_out_of_range_lookups() {
        let schema = DatabaseSchema::default();
        assert!(schema.table(DbTable::None).is_none());
        assert!(schema.table_at(0).is_none());
        assert!(schema.table_at(schema.len()).is_none());
        assert!(schema.table_at(schema.len() + 10).is_none());
        assert_eq!(
            schema.table_at(schema.len() - 1).map(|t| t.table),
            Some(DbTable::YeastInventory)
        );
    }

    #[test]
    fn test_unknown_name() {
        let schema = DatabaseSchema::default();
        assert!(schema.table_by_name("none").is_none());
        assert!(schema.table_by_name("").is_none());
        assert!(schema.table_by_name("YEAST").is_none());
        assert_eq!(schema.table_name(DbTable::Yeast), Some("yeast"));
        assert_eq!(schema.table_name(DbTable::None), None);
    }

    #[test]
    fn test_inventory_subset_disjoint_from_base() {
        let schema = DatabaseSchema::default();
        let all: HashSet<DbTable> = schema.all_tables().iter().map(|t| t.table).collect();
        let inventory: HashSet<DbTable> = schema.inventory_tables().iter().map(|t| t.table).collect();
        let base: HashSet<DbTable> = schema.base_tables().iter().map(|t| t.table).collect();

        assert!(!inventory.is_empty());
        assert!(inventory.is_subset(&all));
        assert!(inventory.len() < all.len());
        assert!(inventory.is_disjoint(&base));
    }

    #[test]
    fn test_classification_partitions_tables() {
        let schema = DatabaseSchema::default();
        let total = schema.tables_of_kind(TableKind::Meta).len()
            + schema.base_tables().len()
            + schema.internal_tables().len()
            + schema.in_recipe_tables().len()
            + schema.child_tables().len()
            + schema.inventory_tables().len();
        assert_eq!(total, schema.all_tables().len());
        assert_eq!(schema.all_tables().len(), DbTable::ALL.len());
        assert_eq!(schema.inventory_tables().len(), 4);
        assert_eq!(schema.child_tables().len(), 8);
    }

    #[test]
    fn test_classification_keeps_registry_order() {
        let schema = DatabaseSchema::default();
        let names: Vec<&str> = schema.inventory_tables().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "fermentable_in_inventory",
                "hop_in_inventory",
                "misc_in_inventory",
                "yeast_in_inventory"
            ]
        );
    }

    #[test]
    fn test_relations() {
        let schema = DatabaseSchema::default();
        assert_eq!(schema.child_table_name(DbTable::Yeast), Some("yeast_children"));
        assert_eq!(schema.in_recipe_table_name(DbTable::Hop), Some("hop_in_recipe"));
        assert_eq!(
            schema.inventory_table(DbTable::Fermentable).map(|t| t.table),
            Some(DbTable::FermentableInventory)
        );
        assert_eq!(schema.internal_table_name(DbTable::Water), Some("bt_water"));
    }

    #[test]
    fn test_relations_absent() {
        let schema = DatabaseSchema::default();
        // no inventory for equipment, and relation tables have no relations themselves
        assert!(schema.inventory_table(DbTable::Equipment).is_none());
        assert!(schema.child_table(DbTable::YeastInventory).is_none());
        assert!(schema.internal_table(DbTable::None).is_none());
        assert_eq!(schema.in_recipe_table_name(DbTable::Style), None);
    }

    #[test]
    fn test_class_name_lookup() {
        let schema = DatabaseSchema::default();
        assert_eq!(schema.class_name_to_table("Yeast"), Some(DbTable::Yeast));
        assert_eq!(schema.class_name_to_table_name("BrewNote"), Some("brewnote"));
        assert_eq!(schema.class_name_to_table("Fermenter"), None);
        assert_eq!(schema.class_name_to_table_name(""), None);
    }

    #[test]
    fn test_generate_uses_registry_dialect() {
        let schema = DatabaseSchema::new(Dialect::PostgreSQL);
        assert_eq!(schema.dialect(), Dialect::PostgreSQL);
        let sql = schema.generate_create_table(DbTable::Hop, "").unwrap();
        assert!(sql.starts_with("CREATE TABLE hop (id SERIAL PRIMARY KEY"));

        let sql = schema.generate_create_table(DbTable::Hop, "hop_tmp").unwrap();
        assert!(sql.starts_with("CREATE TABLE hop_tmp ("));
    }

    #[test]
    fn test_create_table_links_inventory() {
        let schema = DatabaseSchema::default();
        let sql = schema.generate_create_table(DbTable::Hop, "").unwrap();
        assert!(sql.contains("inventory_id INTEGER"));
        assert!(sql.ends_with("FOREIGN KEY(inventory_id) REFERENCES hop_in_inventory(id))"));

        let sql = schema.generate_create_table(DbTable::Yeast, "").unwrap();
        assert!(sql.contains("FOREIGN KEY(inventory_id) REFERENCES yeast_in_inventory(id)"));
    }

    #[test]
    fn test_creation_order_creates_targets_first() {
        let schema = DatabaseSchema::default();
        let order: Vec<DbTable> = schema.creation_order().iter().map(|t| t.table).collect();
        assert_eq!(order.len(), DbTable::ALL.len());

        let position = |table| order.iter().position(|t| *t == table).unwrap();
        for table in schema.all_tables() {
            for column in table.columns {
                if let Some(target) = column.foreign_key {
                    assert!(position(target) < position(table.table), "{}.{}", table.name, column.name);
                }
            }
        }
        assert_eq!(order[0], DbTable::Meta);
    }

    #[test]
    fn test_generate_for_sentinel_is_none() {
        let schema = DatabaseSchema::default();
        assert!(schema.generate_create_table(DbTable::None, "x").is_none());
        assert!(schema.generate_insert_row(DbTable::None).is_none());
        assert!(schema.generate_update_row(DbTable::None, 1).is_none());
        assert!(schema.generate_copy_table(DbTable::None, "x", Dialect::Sqlite).is_none());
    }

    #[test]
    fn test_generate_rows() {
        let schema = DatabaseSchema::default();
        let insert = schema.generate_insert_row(DbTable::YeastInventory).unwrap();
        assert_eq!(insert, "INSERT INTO yeast_in_inventory (quanta) VALUES (:quanta)");

        let update = schema.generate_update_row(DbTable::HopInventory, 7).unwrap();
        assert_eq!(update, "UPDATE hop_in_inventory SET amount = :amount WHERE id = 7");
    }

    #[test]
    fn test_generate_copy_to_other_dialect() {
        let schema = DatabaseSchema::new(Dialect::Sqlite);
        let sql = schema
            .generate_copy_table(DbTable::Instruction, "instruction", Dialect::PostgreSQL)
            .unwrap();
        assert!(sql.starts_with("INSERT INTO instruction (id, name, directions, hastimer"));
        assert!(sql.contains("CAST(hastimer AS BOOLEAN)"));
        assert!(sql.ends_with("FROM instruction"));
    }

    #[test]
    fn test_every_table_generates_sql() {
        let schema = DatabaseSchema::default();
        for table in schema.all_tables() {
            let create = schema.generate_create_table(table.table, "").unwrap();
            assert!(create.starts_with(&format!("CREATE TABLE {} (", table.name)));
            assert!(schema.generate_insert_row(table.table).is_some());
        }
    }
}
