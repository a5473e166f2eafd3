use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ledgerboard::cli::{
    handle_config_command, handle_export_command, handle_show_command, ExportFormat, FilterArgs,
    InputArgs,
};
use ledgerboard::config::{LedgerboardPaths, Settings};

#[derive(Parser)]
#[command(
    name = "ledgerboard",
    version,
    about = "Project-ledger reporting dashboard",
    long_about = "ledgerboard loads a project expense/revenue ledger exported \
                  from a spreadsheet, filters it by month, project, and expense \
                  type, and renders or exports the fixed set of aggregate views."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dashboard views for a ledger file
    Show {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export the dashboard views to CSV files or JSON
    Export {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (json) or directory (csv)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Show { input, filters }) => {
            handle_show_command(&settings, &input, &filters)?;
        }
        Some(Commands::Export {
            input,
            filters,
            format,
            output,
        }) => {
            handle_export_command(&settings, &input, &filters, format, &output)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
        None => {
            // Bare invocation renders the configured ledger with every value selected
            handle_show_command(&settings, &InputArgs::default(), &FilterArgs::default())?;
        }
    }

    Ok(())
}
