mod config;
mod error;
mod grocery;
mod model;
mod output;
mod parser;
mod scan;
mod select;

use std::path::PathBuf;

use anyhow::bail;
use chrono::Local;
use clap::{Parser, Subcommand};

use config::Settings;
use select::Selection;

#[derive(Parser)]
#[command(
    name = "batchcook",
    about = "Batch-cooking planner: recipe markdown in, grocery list and cooking guide out"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick recipes interactively, then write the grocery list and cooking guide
    Plan {
        /// Recipe directory (default: $BATCHCOOK_RECIPES_DIR, then ./recipes)
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Output directory (default: $BATCHCOOK_OUTPUT_DIR, then ./output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parsed recipes overview
    List {
        /// Recipe directory (default: $BATCHCOOK_RECIPES_DIR, then ./recipes)
        #[arg(short, long)]
        path: Option<PathBuf>,
        /// Dump the full parsed records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { path, output } => plan(Settings::resolve(path, output)),
        Commands::List { path, json } => list(Settings::resolve(path, None), json),
    }
}

fn plan(settings: Settings) -> anyhow::Result<()> {
    let recipes = load(&settings)?;

    let selected = match select::select_recipes(&recipes)? {
        Selection::Generate(selected) if !selected.is_empty() => selected,
        Selection::Generate(_) | Selection::Cancelled => {
            println!("No recipes selected, nothing to do.");
            return Ok(());
        }
    };

    let entries = grocery::aggregate(&selected);
    let today = Local::now().date_naive();
    let groceries = output::write_grocery_list(&entries, &settings.output_dir, today)?;
    let guide = output::write_cooking_guide(&selected, &settings.output_dir, today)?;

    println!("Wrote {}", groceries.display());
    println!("Wrote {}", guide.display());
    Ok(())
}

fn list(settings: Settings, json: bool) -> anyhow::Result<()> {
    let recipes = load(&settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    println!(
        "{:>3} | {:<28} | {:>8} | {:>5} | {:>5} | {:>5} | {:>4}",
        "#", "Recipe", "Portions", "Prep", "Cook", "Kcal", "Ingr"
    );
    println!("{}", "-".repeat(78));
    for (i, r) in recipes.iter().enumerate() {
        println!(
            "{:>3} | {:<28} | {:>8} | {:>4}m | {:>4}m | {:>5} | {:>4}",
            i + 1,
            truncate(&r.name, 28),
            r.portions,
            r.prep_time.as_secs() / 60,
            r.cook_time.as_secs() / 60,
            r.macros.kcal,
            r.ingredients.len()
        );
    }
    println!("\n{} recipes", recipes.len());
    Ok(())
}

fn load(settings: &Settings) -> anyhow::Result<Vec<model::Recipe>> {
    let recipes = scan::load_recipes(&settings.recipes_dir)?;
    if recipes.is_empty() {
        bail!(
            "no recipes could be parsed from {}",
            settings.recipes_dir.display()
        );
    }
    Ok(recipes)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
