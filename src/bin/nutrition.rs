//! CLI binary for nutrition lookups.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fdc_search::Resolution;
use nutrition_profile::AppConfig;
use nutrition_profile::report::{default_save_path, format_profile, format_ranking, save_profile};
use tracing_subscriber::EnvFilter;

/// Generic ingredient nutrition profiles from USDA FoodData Central.
#[derive(Parser)]
#[command(name = "nutrition", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data.gov API key for this run (overrides config and USDA_API_KEY).
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up the nutrition profile of an ingredient.
    Lookup {
        /// Ingredient name, e.g. `whole milk`.
        #[arg(required = true)]
        query: Vec<String>,

        /// Print the profile as JSON instead of a report.
        #[arg(long)]
        json: bool,

        /// Save the profile as JSON, to PATH or `<query>_nutrition_profile.json`.
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        save: Option<Option<PathBuf>>,
    },

    /// Show every candidate considered for an ingredient, best first.
    Rank {
        /// Ingredient name.
        #[arg(required = true)]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nutrition_profile=info,fdc_search=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let credential = cli.api_key.as_deref();

    match cli.command {
        Command::Lookup { query, json, save } => {
            let query = query.join(" ");
            let resolution = fdc_search::resolve(&query, &config.fdc, credential).await?;
            let profile = match resolution {
                Resolution::Found(profile) => profile,
                Resolution::NotFound { query } => {
                    println!("Sorry, no generic nutrition data found for '{query}'.");
                    println!(
                        "Try searching with a different name or check if the ingredient exists in the USDA database."
                    );
                    return Ok(ExitCode::FAILURE);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print!("{}", format_profile(&profile));
            }

            if let Some(path) = save {
                let path = path.unwrap_or_else(|| default_save_path(&query));
                save_profile(&profile, &path)?;
                eprintln!("Nutrition profile saved to: {}", path.display());
            }
        }
        Command::Rank { query } => {
            let explanation = fdc_search::explain(&query.join(" "), &config.fdc, credential).await?;
            print!("{}", format_ranking(&explanation));
        }
    }

    Ok(ExitCode::SUCCESS)
}
