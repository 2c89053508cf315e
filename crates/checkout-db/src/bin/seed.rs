//! # Seed Data Generator
//!
//! Populates the database with catalog items for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p checkout-db --bin seed
//!
//! # Specify database path
//! cargo run -p checkout-db --bin seed -- --db ./data/checkout.db
//! ```

use std::env;

use checkout_core::Money;
use checkout_db::{Database, DbConfig};

/// Catalog items to seed: name, description, price in cents.
const CATALOG: &[(&str, &str, i64)] = &[
    ("Widget", "A standard widget", 1000),
    ("Premium Widget", "A widget with a brushed finish", 2499),
    ("Gadget", "An entry-level gadget", 250),
    ("Deluxe Gadget", "A gadget with all the trimmings", 4999),
    ("Gizmo", "Pairs well with any widget", 333),
    ("Sprocket", "Sold individually", 99),
    ("Cog", "Standard 12-tooth cog", 149),
    ("Flywheel", "Keeps everything spinning", 7500),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./checkout_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Checkout Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./checkout_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Checkout Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing catalog
    let existing = db.items().list().await?;
    if !existing.is_empty() {
        println!("⚠ Database already has {} items", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    for (name, description, price_cents) in CATALOG {
        let item = db.items().create(name, description, *price_cents).await?;
        println!("  {:>3}  {:<16} {}", item.id, item.name, Money::from_cents(item.price_cents));
    }

    println!();
    println!("✓ Seeded {} items", CATALOG.len());

    Ok(())
}
