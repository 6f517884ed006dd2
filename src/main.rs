use anyhow::Result;
use clap::{Parser, Subcommand};

use statement_sorter::cli::{handle_sort_command, SortArgs};
use statement_sorter::config::{Settings, SorterPaths};

#[derive(Parser)]
#[command(
    name = "statement-sorter",
    author = "Kaylee Beyene",
    version,
    about = "Sort credit-card statements into period spending reports",
    long_about = "statement-sorter reads Discover statement workbooks from a folder, \
                  filters transactions to a date range, groups them into weekly, \
                  biweekly, or monthly periods, and writes per-category spending \
                  summaries as an xlsx workbook or csv files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort statements into period reports
    Sort(SortArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SorterPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Sort(args)) => {
            handle_sort_command(&paths, settings, args)?;
        }
        Some(Commands::Config) => {
            println!("statement-sorter Configuration");
            println!("==============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Last folder:   {:?}", settings.last_input_folder);
            println!("  Date range:    {:?} to {:?}", settings.start_date, settings.end_date);
            println!("  Grouping:      {}", settings.grouping);
            println!("  Output format: {:?}", settings.output_format);
            println!("  Chart:         {:?}", settings.chart);
        }
        None => {
            println!("statement-sorter - Sort credit-card statements into period reports");
            println!();
            println!("Run 'statement-sorter --help' for usage information.");
            println!("Run 'statement-sorter sort --help' to see sorting options.");
        }
    }

    Ok(())
}
