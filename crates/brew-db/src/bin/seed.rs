//! # Seed Data Generator
//!
//! Populates the base, syrup and creamer catalogs for development.
//!
//! ## Usage
//! ```bash
//! # Seed $BREW_DB_PATH, or ./brew_dev.db when it is unset
//! cargo run -p brew-db --bin seed
//!
//! # Specify database path
//! cargo run -p brew-db --bin seed -- --db ./data/brew.db
//! ```
//!
//! The session reads `BREW_DB_PATH` too and otherwise opens the platform
//! data directory, not `./brew_dev.db`. Point both at the same file:
//! ```bash
//! export BREW_DB_PATH=./brew_dev.db
//! cargo run -p brew-db --bin seed
//! ```
//!
//! A catalog that already has documents is left alone, so running the
//! seed twice does not duplicate anything. Saved beverages are never seeded.

use std::env;

use serde_json::{json, Value};

use brew_core::{BASES_COLLECTION, CREAMERS_COLLECTION, SYRUPS_COLLECTION};
use brew_db::{Database, DbConfig, DocumentStore, Fields};

/// (name, color) pairs per catalog.
const BASES: &[(&str, &str)] = &[
    ("Black Tea", "#8B4513"),
    ("Green Tea", "#C8E6C9"),
    ("Coffee", "#6F4E37"),
];

const SYRUPS: &[(&str, &str)] = &[
    ("No Syrup", "transparent"),
    ("Vanilla", "#FFEFD5"),
    ("Caramel", "#DAA520"),
    ("Hazelnut", "#6B4423"),
];

const CREAMERS: &[(&str, &str)] = &[
    ("No Cream", "transparent"),
    ("Milk", "AliceBlue"),
    ("Cream", "#F5F5DC"),
    ("Half & Half", "#FFFACD"),
];

/// Database used when neither `--db` nor `BREW_DB_PATH` is given.
const DEFAULT_DB_PATH: &str = "./brew_dev.db";

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct SeedArgs {
    db_path: String,
    help: bool,
}

/// Parses `args` (program name first). `env_path` is the value of
/// `BREW_DB_PATH`; an explicit `--db` wins over it.
fn parse_args(args: &[String], env_path: Option<String>) -> SeedArgs {
    let mut parsed = SeedArgs {
        db_path: env_path
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
        help: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    parsed.db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => parsed.help = true,
            _ => {}
        }
        i += 1;
    }

    parsed
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let SeedArgs { db_path, help } = parse_args(&args, env::var("BREW_DB_PATH").ok());

    if help {
        println!("Brew Mug Seed Data Generator");
        println!();
        println!("Usage: seed [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --db <PATH>    Database file path");
        println!("                     (default: $BREW_DB_PATH, else {})", DEFAULT_DB_PATH);
        println!("  -h, --help         Show this help message");
        println!();
        println!("Run the session with the same BREW_DB_PATH to see the seeded catalogs.");
        return Ok(());
    }

    println!("Brew Mug Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    for (collection, items) in [
        (BASES_COLLECTION, BASES),
        (SYRUPS_COLLECTION, SYRUPS),
        (CREAMERS_COLLECTION, CREAMERS),
    ] {
        let existing = db.documents().count(collection).await?;
        if existing > 0 {
            println!("⚠ {} already has {} documents, skipping", collection, existing);
            continue;
        }

        let mut inserted = 0;
        for (name, color) in items {
            if let Err(e) = db.insert_document(collection, item_fields(name, color)).await {
                eprintln!("Failed to insert {} into {}: {}", name, collection, e);
                continue;
            }
            inserted += 1;
        }

        println!("✓ Seeded {} {}", inserted, collection);
    }

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds the field map of one catalog item. The key comes from the store.
fn item_fields(name: &str, color: &str) -> Fields {
    match json!({ "name": name, "color": color }) {
        Value::Object(fields) => fields,
        _ => Fields::new(),
    }
}
