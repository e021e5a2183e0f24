use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_dash::cli::{handle_export_command, handle_report_command, ExportArgs, ReportCommands};
use expense_dash::config::{DashPaths, Settings};
use expense_dash::logging::{init_logging, LogTarget};

#[derive(Parser)]
#[command(
    name = "expense-dash",
    author = "Kaylee Beyene",
    version,
    about = "Terminal dashboard for monthly expenses per project",
    long_about = "expense-dash loads expense records from an HTTP endpoint or a JSON \
                  file, aggregates them per project and month, and shows the result \
                  as an interactive dashboard or as plain reports."
)]
struct Cli {
    /// Data source URL or JSON file (overrides the configured source)
    #[arg(long, global = true, env = "EXPENSE_DASH_SOURCE")]
    source: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Report(ReportCommands),

    /// Export the projected data to a file
    Export(ExportArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DashPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let is_tui = matches!(cli.command, None | Some(Commands::Tui));
    let target = if is_tui {
        LogTarget::File(paths.log_file())
    } else {
        LogTarget::Stderr
    };
    init_logging(&settings.log_filter, target)?;

    let source_location = cli
        .source
        .clone()
        .unwrap_or_else(|| settings.data_source.clone());

    match cli.command {
        None | Some(Commands::Tui) => {
            let source = expense_dash::source::open(&source_location, &settings)?;
            expense_dash::tui::run_tui(settings, source)?;
        }
        Some(Commands::Report(cmd)) => {
            let source = expense_dash::source::open(&source_location, &settings)?;
            handle_report_command(source.as_ref(), &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let source = expense_dash::source::open(&source_location, &settings)?;
            handle_export_command(source.as_ref(), args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense-dash at: {}", paths.base_dir().display());
            if paths.is_initialized() {
                println!("Settings already exist, keeping them.");
            } else {
                settings.save(&paths)?;
                println!("Default settings written to {}", paths.settings_file().display());
            }
            println!();
            println!("Run 'expense-dash --help' for usage information.");
        }
        Some(Commands::Config) => {
            println!("expense-dash Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Data source:        {}", source_location);
            println!("  Request timeout:    {}s", settings.request_timeout_secs);
            println!("  Reconnect interval: {}s", settings.reconnect_interval_secs);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Log filter:         {}", settings.log_filter);
            println!("  Chart title:        {}", settings.chart_title);
        }
    }

    Ok(())
}
