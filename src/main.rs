//! menu-order CLI
//!
//! Terminal demo of a food-ordering menu flow. Running with no arguments
//! launches the interactive TUI at the Home screen.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use menu_order::catalog::catalog;
use menu_order::report::format_menu;
use menu_order::tui;
use menu_order::types::OutputFormat;

#[derive(Parser)]
#[command(name = "menu-order")]
#[command(about = "Terminal demo of a food-ordering menu flow")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu flow (the default)
    Tui,

    /// Print the menu catalog and payment methods without entering the TUI
    Menu {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Tui) => cmd_tui(),
        Some(Commands::Menu { format }) => cmd_menu(format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui() -> Result<(), String> {
    tui::run().map_err(|e| e.to_string())
}

fn cmd_menu(format: OutputFormat) -> Result<(), String> {
    print!("{}", format_menu(catalog(), format));
    Ok(())
}
