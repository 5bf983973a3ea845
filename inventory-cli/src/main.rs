//! Inventory CLI Tool
//!
//! Command-line interface for building and listing asset collections.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inventory_core::{Asset, AssetCollection, Division, ItemKind};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "inventory")]
#[command(about = "Inventory tracker - list, add and remove tracked assets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample scenario: add three assets, list, remove one, list again
    Demo {
        /// Do not print the elapsed time line
        #[arg(long)]
        no_timing: bool,
    },

    /// Build a collection from asset specs and print it
    List {
        /// Asset spec, e.g. "item:laptop:Dell XPS 13:Alice" or "document:it:IT Policy:Charlie"
        #[arg(short, long = "asset", value_name = "SPEC")]
        assets: Vec<Asset>,

        /// 0-based index to remove after all assets are added (repeatable, applied in order)
        #[arg(short, long = "remove", value_name = "INDEX")]
        removals: Vec<usize>,

        /// Print the collection as JSON instead of listing lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let env = env_logger::Env::default()
        .filter_or("INVENTORY_LOG_LEVEL", "warn")
        .write_style_or("INVENTORY_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo { no_timing } => run_demo(&mut out, !no_timing)?,

        Commands::List {
            assets,
            removals,
            json,
        } => list_assets(&mut out, assets, &removals, json)?,
    }

    Ok(())
}

/// The three assets used by the sample scenario
fn demo_assets() -> [Asset; 3] {
    [
        Asset::item(ItemKind::Laptop, "Dell XPS 13", "Alice"),
        Asset::item(ItemKind::IdCard, "ID12345", "Bob"),
        Asset::document(Division::It, "IT Policy", "Charlie"),
    ]
}

fn run_demo<W: Write>(out: &mut W, timing: bool) -> Result<()> {
    let start = Instant::now();

    let mut collection = AssetCollection::new();
    for asset in demo_assets() {
        collection.push(asset).context("Failed to add asset")?;
    }

    writeln!(out, "Initial asset list:")?;
    collection
        .write_listing(&mut *out)
        .context("Failed to display asset list")?;

    writeln!(out, "\nRemoving second asset...")?;
    collection.remove_at(1).context("Failed to remove asset")?;

    writeln!(out, "\nUpdated asset list:")?;
    collection
        .write_listing(&mut *out)
        .context("Failed to display asset list after removal")?;

    if timing {
        writeln!(
            out,
            "\nElapsed time: {} microseconds",
            start.elapsed().as_micros()
        )?;
    }

    Ok(())
}

fn list_assets<W: Write>(
    out: &mut W,
    assets: Vec<Asset>,
    removals: &[usize],
    json: bool,
) -> Result<()> {
    let mut collection = AssetCollection::with_capacity(assets.len());
    for asset in assets {
        collection.push(asset).context("Failed to add asset")?;
    }
    log::debug!("Built collection of {} assets", collection.len());

    for &index in removals {
        collection
            .remove_at(index)
            .with_context(|| format!("Failed to remove asset at index {}", index))?;
    }

    if json {
        let json = collection.to_json().context("Failed to serialize asset list")?;
        writeln!(out, "{}", json)?;
    } else {
        collection
            .write_listing(&mut *out)
            .context("Failed to display asset list")?;
    }

    Ok(())
}
