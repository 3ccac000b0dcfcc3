use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use stockroom::config::Config;
use stockroom::logging::init_tracing;
use stockroom::persistence::{FilePersistence, Persistence};
use stockroom::replay::{parse_events, replay};
use stockroom::store::Store;
use stockroom::ui::summary::render_summary;
use stockroom::ui::{TableVariant, Variant};

#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about = "Inspect stock management client state")]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay recorded lifecycle events into a fresh store and print it.
    Replay {
        /// JSON file with an array of recorded events.
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Table variant key; unknown keys use the configured default.
        #[arg(long)]
        variant: Option<String>,

        #[arg(long, default_value_t = 100)]
        width: u16,
    },
    /// Print the resolved configuration.
    Config,
    /// Clear the persisted session.
    Logout,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Table,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    match cli.command {
        Command::Replay {
            file,
            format,
            variant,
            width,
        } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let intents = parse_events(&content)?;

            let store = Store::new();
            replay(&store, intents);
            let state = store.snapshot();

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&state)?),
                Format::Table => {
                    let variant = variant
                        .as_deref()
                        .map(TableVariant::resolve)
                        .unwrap_or_else(|| config.ui.table_variant());
                    println!("{}", render_summary(&state, variant, width));
                    for (kind, error) in state.errors() {
                        eprintln!("{}: {}", kind, error);
                    }
                }
            }
        }
        Command::Config => {
            println!("# {}", config_path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
        Command::Logout => {
            let storage = FilePersistence::new(config.session_storage_path());
            storage.clear()?;
            println!("Cleared session at {}", storage.path().display());
        }
    }

    Ok(())
}
