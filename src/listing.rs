//! Plain-text listing of catalog tables.

use unicode_width::UnicodeWidthStr;

use crate::schema::{DatabaseSchema, TableSchema};

const HEADERS: [&str; 4] = ["#", "table", "kind", "relations"];

/// Render one line per table with aligned columns.
pub fn render_listing(tables: &[&TableSchema]) -> String {
    let rows: Vec<[String; 4]> = tables
        .iter()
        .map(|t| {
            [
                t.table.index().to_string(),
                t.name.to_string(),
                t.kind.as_str().to_string(),
                relations(t).join(" "),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();
    push_line(&mut output, &HEADERS, &widths);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&mut output, &cells, &widths);
    }
    output
}

/// Describe the relations of one table, resolving ids to names.
pub fn render_relations(schema: &DatabaseSchema, table: &TableSchema) -> String {
    let entries = [
        ("child", schema.child_table_name(table.table)),
        ("in_recipe", schema.in_recipe_table_name(table.table)),
        ("inventory", schema.inventory_table_name(table.table)),
        ("internal", schema.internal_table_name(table.table)),
    ];

    let label_width = entries.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    let mut output = format!("{}\n", table.name);
    for (label, name) in entries {
        let pad = label_width - label.width();
        output.push_str(&format!("  {}{} {}\n", label, " ".repeat(pad), name.unwrap_or("-")));
    }
    output
}

fn relations(table: &TableSchema) -> Vec<String> {
    let mut out = Vec::new();
    if table.child_table.is_some() {
        out.push("child".to_string());
    }
    if table.in_recipe_table.is_some() {
        out.push("in_recipe".to_string());
    }
    if table.inventory_table.is_some() {
        out.push("inventory".to_string());
    }
    if table.internal_table.is_some() {
        out.push("internal".to_string());
    }
    out
}

fn push_line(output: &mut String, cells: &[&str], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        output.push_str(cell);
        if i < last {
            // pad by display width, not byte length
            output.push_str(&" ".repeat(width - cell.width() + 2));
        }
    }
    output.push('\n');
}
