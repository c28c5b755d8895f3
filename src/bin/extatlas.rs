//! Query the PHP extension catalog from the command line.
//!
//! Usage:
//!   extatlas list
//!   extatlas show curl
//!   extatlas category "Graphics & Media"
//!   extatlas search image --json
//!   extatlas popular
//!   extatlas framework Laravel
//!   extatlas validate --file catalogs/php_extensions_v1.json

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use extatlas::{ExtensionId, ExtensionIndex, ExtensionRecord, validate_catalog_document};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "extatlas")]
#[command(about = "Query the bundled PHP extension reference catalog")]
struct Cli {
    /// Optional catalog file; uses the bundled catalog when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Emit full records as JSON instead of one-line summaries.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every extension name in catalog order.
    List,
    /// Show one extension record.
    Show { name: String },
    /// Extensions listed under a category label (exact match).
    Category { label: String },
    /// Case-insensitive substring search over names, descriptions,
    /// use cases and frameworks.
    Search { query: String },
    /// The ten most popular extensions.
    Popular,
    /// Extensions relevant to a framework, including universal ones.
    Framework { name: String },
    /// Validate a catalog document against the bundled schema.
    Validate {
        /// Optional input file; reads stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn read_input(file: Option<PathBuf>) -> Result<Value> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(&path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for input JSON")?;
    }
    let value: Value = serde_json::from_str(&buf).context("parsing input JSON")?;
    Ok(value)
}

fn print_records(records: &[&ExtensionRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    for rec in records {
        println!(
            "{:<12} {:<24} popularity {:>2}  {}",
            rec.name, rec.display_name, rec.popularity, rec.category
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded;
    let index: &ExtensionIndex = match &cli.catalog {
        Some(path) => {
            loaded = ExtensionIndex::load(path)?;
            &loaded
        }
        None => ExtensionIndex::builtin(),
    };

    match cli.command {
        Command::List => {
            for name in index.names() {
                println!("{name}");
            }
        }
        Command::Show { name } => {
            let id = ExtensionId(name);
            let Some(rec) = index.extension(&id) else {
                bail!("no extension named '{}' in catalog {}", id, index.key());
            };
            println!("{}", serde_json::to_string_pretty(rec)?);
        }
        Command::Category { label } => {
            print_records(&index.by_category(&label), cli.json)?;
        }
        Command::Search { query } => {
            print_records(&index.search(&query), cli.json)?;
        }
        Command::Popular => {
            print_records(&index.popular(), cli.json)?;
        }
        Command::Framework { name } => {
            print_records(&index.by_framework(&name), cli.json)?;
        }
        Command::Validate { file } => {
            let input = read_input(file)?;
            validate_catalog_document(&input)?;
            println!("ok");
        }
    }

    Ok(())
}
