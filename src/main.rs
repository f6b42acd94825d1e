//! Breadcrumb inspection CLI for the admin console route tree.
//!
//! # Architecture Overview
//!
//! ```text
//!     routes.toml ──▶ config::loader ──▶ RouteTree (immutable)
//!                                            │
//!     location ─────────────────────────────▶│
//!                                            ▼
//!                                  routing::breadcrumb
//!                                  (walk + matcher)
//!                                            │
//!                                            ▼
//!                                  BreadcrumbTrail ──▶ stdout
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use route_breadcrumbs::config::load_config;
use route_breadcrumbs::observability::init_logging;
use route_breadcrumbs::routing::{resolve, BreadcrumbItem, RouteTree};

#[derive(Parser)]
#[command(name = "breadcrumbs")]
#[command(about = "Resolve admin console breadcrumb trails from a route tree", long_about = None)]
struct Cli {
    /// Route tree configuration file.
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Overrides the configured log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the breadcrumb trail for each location
    Resolve {
        #[arg(required = true)]
        locations: Vec<String>,

        /// Print each trail as a JSON array
        #[arg(long)]
        json: bool,

        /// Substitute captured parameter values into targets
        #[arg(long)]
        concrete: bool,
    },
    /// List every composed path template in declaration order
    Paths,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    init_logging(&config.observability);

    let tree = config.routes;
    tracing::info!(
        path = %cli.config.display(),
        routes = tree.node_count(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Resolve {
            locations,
            json,
            concrete,
        } => {
            for location in &locations {
                let items = trail_items(&tree, location, concrete);
                if items.is_none() {
                    tracing::warn!(location, "No breadcrumb trail for location");
                }
                if json {
                    println!("{}", render_json(items.as_deref())?);
                } else if let Some(items) = items {
                    println!("{}", render_trail(&items));
                }
            }
        }
        Commands::Paths => {
            for line in render_paths(&tree) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Items to print for a location. `None` when nothing matched or the
/// matching node contributed no visible entry.
fn trail_items(tree: &RouteTree, location: &str, concrete: bool) -> Option<Vec<BreadcrumbItem>> {
    let resolution = resolve(tree, location)?;
    if resolution.trail.is_empty() {
        return None;
    }

    let params = resolution.params;
    let items = resolution
        .trail
        .into_iter()
        .map(|item| {
            if concrete {
                let target = item.concrete_target(&params);
                BreadcrumbItem { target, ..item }
            } else {
                item
            }
        })
        .collect();
    Some(items)
}

/// `Label (target) > Label`; inert entries carry no parentheses.
fn render_trail(items: &[BreadcrumbItem]) -> String {
    items
        .iter()
        .map(|item| match &item.target {
            Some(target) => format!("{} ({})", item.label, target),
            None => item.label.clone(),
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

fn render_json(items: Option<&[BreadcrumbItem]>) -> serde_json::Result<String> {
    serde_json::to_string(items.unwrap_or_default())
}

fn render_paths(tree: &RouteTree) -> Vec<String> {
    tree.entries()
        .into_iter()
        .map(|entry| {
            let indent = "  ".repeat(entry.depth);
            let kind = if entry.is_group { " [group]" } else { "" };
            match &entry.title {
                Some(title) => format!("{indent}{}  {title}{kind}", entry.path),
                None => format!("{indent}{}{kind}", entry.path),
            }
        })
        .collect()
}
