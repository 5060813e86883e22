use brewschema::config::Config;
use brewschema::listing::{render_listing, render_relations};
use brewschema::locale::Locale;
use brewschema::schema::{DatabaseSchema, Dialect};
use brewschema::table::TableKind;
use brewschema::units::{string_to_si, PhysicalQuantity};
use std::env;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <command> [args] [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  create <table> [name]          CREATE TABLE statement");
    eprintln!("  create-all                     CREATE TABLE for every table, referenced tables first");
    eprintln!("  insert <table>                 INSERT statement");
    eprintln!("  update <table> <key>           UPDATE statement for one row");
    eprintln!("  copy <table> <dest> [dialect]  Copy rows into dest on the target backend");
    eprintln!("  tables [kind]                  List tables (meta, base, internal, in_recipe, child, inventory)");
    eprintln!("  relations <table>              Show related tables");
    eprintln!("  quantity <text> [volume|mass]  Convert a quantity such as \"2 gal\" to SI");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -d, --dialect <name>  sqlite or postgresql (default: sqlite)");
    eprintln!("  -l, --locale <tag>    Number format for quantities, e.g. de_DE (default: LANG)");
    eprintln!("      --log <filter>    Log filter, e.g. debug (default: warn, or RUST_LOG)");
    process::exit(1);
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

/// Value following the option at `args[i]`.
fn option_value(args: &[String], i: usize) -> Result<&str, String> {
    match args.get(i + 1) {
        Some(value) => Ok(value.as_str()),
        None => Err(format!("Missing value for {}", args[i])),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("brewschema");

    let mut config = Config::from_env().unwrap_or_else(|e| fail(e));
    let mut positional: Vec<String> = Vec::new();
    let mut log_override: Option<String> = None;

    let value = |i: usize| {
        option_value(&args, i).unwrap_or_else(|e| {
            eprintln!("{}", e);
            usage(program)
        })
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-d" | "--dialect" => {
                config.dialect = Dialect::from_str(value(i)).unwrap_or_else(|e| fail(e));
                i += 1;
            }
            "-l" | "--locale" => {
                config.locale = Locale::from_tag(value(i));
                i += 1;
            }
            "--log" => {
                log_override = Some(value(i).to_string());
                i += 1;
            }
            "-h" | "--help" => usage(program),
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                process::exit(1);
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    if let Some(level) = log_override {
        config.log_level = level;
    }
    init_logging(&config.log_level);
    debug!(?config, "starting");

    let Some((command, rest)) = positional.split_first() else {
        usage(program);
    };

    let schema = DatabaseSchema::new(config.dialect);
    let lookup = |name: Option<&String>| {
        let Some(name) = name else { usage(program) };
        schema
            .table_by_name(name)
            .unwrap_or_else(|| fail(format!("Unknown table: {}", name)))
    };

    let output = match command.as_str() {
        "create" => {
            let table = lookup(rest.first());
            let name = rest.get(1).map(String::as_str).unwrap_or("");
            schema.generate_create_table(table.table, name)
        }
        "create-all" => {
            let statements: Vec<String> = schema
                .creation_order()
                .iter()
                .filter_map(|t| schema.generate_create_table(t.table, ""))
                .map(|sql| format!("{};\n", sql))
                .collect();
            Some(statements.concat())
        }        "insert" => schema.generate_insert_row(lookup(rest.first()).table),
        "update" => {
            let table = lookup(rest.first());
            let key = match rest.get(1).map(|k| k.parse::<i64>()) {
                Some(Ok(key)) => key,
                Some(Err(_)) => fail(format!("Invalid key: {}", rest[1])),
                None => usage(program),
            };
            schema.generate_update_row(table.table, key)
        }
        "copy" => {
            let table = lookup(rest.first());
            let Some(dest) = rest.get(1) else { usage(program) };
            let target = match rest.get(2) {
                Some(d) => Dialect::from_str(d).unwrap_or_else(|e| fail(e)),
                None => schema.dialect(),
            };
            schema.generate_copy_table(table.table, dest, target)
        }
        "tables" => {
            let tables = match rest.first() {
                Some(kind) => {
                    let kind = TableKind::from_str(kind).unwrap_or_else(|e| fail(e));
                    schema.tables_of_kind(kind)
                }
                None => schema.all_tables(),
            };
            Some(render_listing(&tables))
        }
        "relations" => Some(render_relations(&schema, lookup(rest.first()))),
        "quantity" => {
            let Some(text) = rest.first() else { usage(program) };
            let quantity = match rest.get(1) {
                Some(q) => PhysicalQuantity::from_str(q).unwrap_or_else(|e| fail(e)),
                None => PhysicalQuantity::Volume,
            };
            let amount = string_to_si(text, quantity, &config.locale).unwrap_or_else(|e| fail(e));
            Some(format!("{} {}\n", amount.quantity, amount.unit.symbol()))
        }
        other => {
            eprintln!("Unknown command: {}", other);
            usage(program);
        }
    };

    match output {
        Some(text) if text.ends_with('\n') => print!("{}", text),
        Some(text) => println!("{};", text),
        None => fail("No statement generated"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_option_value() {
        let args = args(&["brewschema", "create", "hop", "-d", "postgres", "--log"]);
        assert_eq!(option_value(&args, 3), Ok("postgres"));
        assert_eq!(option_value(&args, 5), Err("Missing value for --log".to_string()));
    }
}
