//! itemtrack - command-line front end for the item catalog engine
//!
//! # Usage
//!
//! ```bash
//! itemtrack normalize Wooden_Sword Lv5Sword      # Print canonical labels
//! itemtrack durability 57 100 --name "Iron Axe"  # Rounded bucket and price multiplier
//! itemtrack sort items.json --field "Unit Price" --order Descending
//! itemtrack filter items.json --search axe --bucket 76-100
//! itemtrack suggest sword --icons ItemPNGS --catalog items.json
//! itemtrack verify items.json --icons ItemPNGS   # List icons no item uses
//! ```
//!
//! Catalog and icon folder default to `catalog_path` / `icon_dir` from
//! `config.json` in the data directory.

use clap::{Parser, Subcommand};
use itemtrack::config::{self, AppConfig};
use itemtrack::core::catalog::{filter_items, find_unused_icons, totals_text};
use itemtrack::core::durability;
use itemtrack::core::normalize::normalize;
use itemtrack::core::ordering::sort_items;
use itemtrack::utils::{self, truncate_string};
use itemtrack::{DurabilityRangeBucket, Item, SortSpec, SuggestionIndex};
use std::path::PathBuf;
use std::process::ExitCode;

/// Width of the name column in item tables
const NAME_COLUMN_WIDTH: usize = 32;

#[derive(Parser)]
#[command(name = "itemtrack")]
#[command(about = "Game item catalog: sorting, durability pricing and icon names", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Config file to use instead of the one in the data directory
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert raw icon file names into item labels
    Normalize {
        #[arg(required = true)]
        raw: Vec<String>,
    },
    /// Round a durability reading and show the price compensation
    Durability {
        #[arg(allow_negative_numbers = true)]
        current: i64,
        #[arg(allow_negative_numbers = true)]
        max: i64,
        /// Item name to attach the durability suffix to
        #[arg(short, long)]
        name: Option<String>,
        /// Unit price to adjust
        #[arg(short, long)]
        price: Option<f64>,
    },
    /// Print the catalog sorted by a field
    Sort {
        catalog: Option<PathBuf>,
        /// Name, "Unit Price", "Price per Stack" or "Price per kg"
        #[arg(short, long)]
        field: Option<String>,
        /// Ascending or Descending
        #[arg(short, long)]
        order: Option<String>,
    },
    /// Print catalog items matching a search and durability range
    Filter {
        catalog: Option<PathBuf>,
        #[arg(short, long, default_value = "")]
        search: String,
        /// All, 1-25, 26-50, 51-75, 76-100 or 100
        #[arg(short, long, default_value = "All")]
        bucket: DurabilityRangeBucket,
    },
    /// Suggest item names from the icon folder
    Suggest {
        query: String,
        #[arg(long, value_name = "DIR")]
        icons: Option<PathBuf>,
        /// Catalog used to pick a template item for the top suggestion
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        #[arg(short, long)]
        limit: Option<usize>,
        /// Rank by fuzzy score instead of substring match
        #[arg(long)]
        fuzzy: bool,
    },
    /// List icon files that no catalog item references
    Verify {
        catalog: Option<PathBuf>,
        #[arg(long, value_name = "DIR")]
        icons: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create Tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(handle_cli(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(e.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn report_error(e: &(dyn std::error::Error + 'static)) {
    if let Some(err) = e.downcast_ref::<itemtrack::Error>() {
        let translation = err.translate();
        eprintln!("Error: {}", translation.user_message);
        for suggestion in translation.suggestions {
            eprintln!("  - {suggestion}");
        }
    } else {
        eprintln!("Error: {e}");
    }
}

async fn handle_cli(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(cli.config.as_deref()).await;

    match cli.command {
        Commands::Normalize { raw } => {
            for name in raw {
                println!("{}", normalize(&name));
            }
        }
        Commands::Durability {
            current,
            max,
            name,
            price,
        } => {
            let result = durability::derive(Some(current), Some(max))?;
            if let Some(label) = &result.bucket_label {
                println!("Durability: {label}");
            }
            println!("Multiplier: {:.4}", result.price_multiplier);
            if let Some(price) = price {
                println!("Price:      {price:.2} -> {:.2}", result.adjust_price(price));
            }
            if let Some(name) = name {
                println!("Name:       {}", result.canonical_name(&name));
            }
        }
        Commands::Sort {
            catalog,
            field,
            order,
        } => {
            let spec = match (field, order) {
                (None, None) => config.default_sort,
                (field, order) => SortSpec::parse(
                    field.as_deref().unwrap_or(config.default_sort.field.as_ref()),
                    order
                        .as_deref()
                        .unwrap_or(config.default_sort.direction.as_ref()),
                )?,
            };
            let mut items = utils::read_catalog(&catalog_path(catalog, &config)?).await?;
            sort_items(&mut items, spec);
            print_items(items.iter());
            println!("{}", spec.describe());
        }
        Commands::Filter {
            catalog,
            search,
            bucket,
        } => {
            let mut items = utils::read_catalog(&catalog_path(catalog, &config)?).await?;
            sort_items(&mut items, config.default_sort);
            let visible = filter_items(&items, &search, bucket);
            print_items(visible.iter().copied());
            println!("{}", totals_text(items.len(), visible.len()));
        }
        Commands::Suggest {
            query,
            icons,
            catalog,
            limit,
            fuzzy,
        } => {
            let icon_dir = icon_dir(icons, &config)?;
            let index = SuggestionIndex::from_paths(utils::list_icon_files(&icon_dir).await?);
            let limit = limit.unwrap_or(config.suggestion_limit);
            let labels = if fuzzy {
                index.fuzzy_query(&query, limit)
            } else {
                index.query(&query, limit)
            };

            if labels.is_empty() {
                println!("No suggestions for '{query}'");
                return Ok(());
            }
            for label in &labels {
                println!("{label}");
            }

            let catalog = catalog.or_else(|| config.catalog_path.clone());
            if let Some(path) = catalog {
                let items = utils::read_catalog(&path).await?;
                match index.template_for(labels[0], &items) {
                    Some(template) => println!(
                        "Template: {} (stack {}, weight {:.3}, max durability {})",
                        template.name,
                        template.stack_size,
                        template.weight_per_item,
                        template
                            .max_durability
                            .map_or_else(|| "-".to_string(), |d| d.to_string())
                    ),
                    None => println!("Template: none"),
                }
            }
        }
        Commands::Verify { catalog, icons } => {
            let icon_dir = icon_dir(icons, &config)?;
            let items = utils::read_catalog(&catalog_path(catalog, &config)?).await?;
            let files = utils::list_icon_files(&icon_dir).await?;
            let unused = find_unused_icons(&items, files.iter().map(|p| p.to_string_lossy()));

            println!("Unused images: {}", unused.len());
            if unused.is_empty() {
                println!(
                    "All images in {} are referenced by the catalog.",
                    icon_dir.display()
                );
            }
            for name in unused {
                println!("  {name}");
            }
        }
    }
    Ok(())
}

fn catalog_path(arg: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf, Box<dyn std::error::Error>> {
    arg.or_else(|| config.catalog_path.clone())
        .ok_or_else(|| "No catalog file given and no catalog_path in config".into())
}

fn icon_dir(arg: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf, Box<dyn std::error::Error>> {
    arg.or_else(|| config.icon_dir.clone())
        .ok_or_else(|| "No icon folder given and no icon_dir in config".into())
}

fn print_items<'a>(items: impl Iterator<Item = &'a Item>) {
    println!(
        "{:<NAME_COLUMN_WIDTH$} {:>10} {:>6} {:>12} {:>10} {:>10}",
        "Name", "Unit Price", "Stack", "Price/Stack", "Price/kg", "Durability"
    );
    for item in items {
        let wear = item
            .rounded_durability_percentage()
            .map_or_else(String::new, |pct| format!("{pct}%"));
        println!(
            "{:<NAME_COLUMN_WIDTH$} {:>10.2} {:>6} {:>12.2} {:>10.2} {:>10}",
            truncate_string(&item.name, NAME_COLUMN_WIDTH),
            item.unit_price,
            item.stack_size,
            item.price_per_stack(),
            item.price_per_kg(),
            wear
        );
    }
}
