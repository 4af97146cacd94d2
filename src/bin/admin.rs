//! CLI administration tool for address-book.
//!
//! Manages addresses and checks the database without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all addresses
//! cargo run --bin admin -- address list
//!
//! # Add an address
//! cargo run --bin admin -- address add --name "Office" --lat 52.52 --lon 13.405
//!
//! # Find addresses within 25 km of a point
//! cargo run --bin admin -- address nearby --lat 52.5 --lon 13.4 --radius 25
//!
//! # Delete an address
//! cargo run --bin admin -- address delete 7
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use address_book::application::services::AddressService;
use address_book::domain::entities::{Address, NewAddress};
use address_book::domain::geo::GeoPoint;
use address_book::domain::proximity::ProximityQuery;
use address_book::infrastructure::persistence::PgAddressRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing address-book.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage addresses
    Address {
        #[command(subcommand)]
        action: AddressAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Address management subcommands.
#[derive(Subcommand)]
enum AddressAction {
    /// List all addresses
    List,

    /// Add a new address
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Latitude in degrees (-90..=90)
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees (-180..=180)
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// Delete an address
    Delete {
        /// Address id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List addresses within a radius of a point
    Nearby {
        /// Reference latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Reference longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Radius in kilometers
        #[arg(short, long)]
        radius: f64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Address { action } => handle_address_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches address management commands.
async fn handle_address_action(action: AddressAction, pool: &PgPool) -> Result<()> {
    let repository = Arc::new(PgAddressRepository::new(Arc::new(pool.clone())));
    let service = AddressService::new(repository);

    match action {
        AddressAction::List => {
            let addresses = service
                .list_addresses()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list addresses: {}", e))?;
            println!("{}", "📋 Addresses".bright_blue().bold());
            println!();
            print_addresses(&addresses);
        }
        AddressAction::Add { name, lat, lon } => {
            let new_address = NewAddress::new(name, lat, lon)?;
            let address = service
                .create_address(new_address)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create address: {}", e))?;
            println!(
                "{} {}",
                "✅ Address created with id".green().bold(),
                address.id.to_string().bright_white().bold()
            );
        }
        AddressAction::Delete { id, yes } => {
            delete_address(&service, id, yes).await?;
        }
        AddressAction::Nearby { lat, lon, radius } => {
            let query = ProximityQuery::new(GeoPoint::new(lat, lon)?, radius)?;
            let addresses = service
                .find_nearby(&query)
                .await
                .map_err(|e| anyhow::anyhow!("Proximity search failed: {}", e))?;
            println!(
                "{}",
                format!("📍 Within {radius} km of ({lat}, {lon})")
                    .bright_blue()
                    .bold()
            );
            println!();
            print_addresses(&addresses);
        }
    }

    Ok(())
}

/// Deletes an address after showing it and asking for confirmation.
async fn delete_address(service: &AddressService, id: i64, skip_confirm: bool) -> Result<()> {
    let address = service
        .get_address(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Name:     {}", address.name.cyan());
    println!(
        "  Location: {}, {}",
        address.latitude(),
        address.longitude()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this address?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_address(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete address: {}", e))?;

    println!("{}", "✅ Address deleted".green().bold());
    Ok(())
}

fn print_addresses(addresses: &[Address]) {
    if addresses.is_empty() {
        println!("{}", "  No addresses found".yellow());
        return;
    }

    println!(
        "  {:<6} {:<30} {:>12} {:>12}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Latitude".bright_white().bold(),
        "Longitude".bright_white().bold()
    );
    println!("  {}", "─".repeat(63).bright_black());

    for address in addresses {
        println!(
            "  {:<6} {:<30} {:>12.6} {:>12.6}",
            address.id.to_string().bright_black(),
            address.name.cyan(),
            address.latitude(),
            address.longitude()
        );
    }

    println!();
    println!(
        "  Total: {}",
        addresses.len().to_string().bright_white().bold()
    );
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let addresses: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Addresses:  {}",
                addresses.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
