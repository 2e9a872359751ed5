//! tasklens: Lists TODO-style keyword comments across a project

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tasklens_cli::commands::{keywords, scan, settings};
use tasklens_cli::{setup_logging, KeywordCommands, OutputFormat};
use tasklens_core::JsonSettingsStore;

#[derive(Parser)]
#[command(name = "tasklens")]
#[command(author, version, about = "Keyword comment task list", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file to use instead of the per-user one
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a project directory for keyword comments
    Scan {
        /// Project root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Project name shown in the results (defaults to the directory name)
        #[arg(long)]
        project: Option<String>,

        /// Keyword to look for; repeat to scan for several (defaults to the configured set)
        #[arg(short, long = "keyword", value_name = "KEYWORD")]
        keywords: Vec<String>,

        /// Only scan files of this extension's language (e.g. rs, cpp); repeatable
        #[arg(short, long = "language", value_name = "EXT")]
        languages: Vec<String>,

        /// Scan every file, not just C-style comment languages
        #[arg(long)]
        all_files: bool,

        /// Show full file paths instead of file names
        #[arg(long)]
        absolute_paths: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Scan files one at a time on the main thread
        #[arg(long)]
        sequential: bool,
    },

    /// Manage the keyword vocabulary
    Keywords {
        #[command(subcommand)]
        command: KeywordCommands,
    },

    /// Show the settings file
    Settings {
        /// Show full file paths in scan results
        #[arg(long, value_name = "BOOL")]
        absolute_paths: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let store = match cli.config {
        Some(path) => JsonSettingsStore::new(path),
        None => JsonSettingsStore::at_default_location()?,
    };

    match cli.command {
        Commands::Scan {
            path,
            project,
            keywords,
            languages,
            all_files,
            absolute_paths,
            format,
            sequential,
        } => {
            let args = scan::ScanArgs {
                path,
                project,
                keywords,
                languages,
                all_files,
                absolute_paths,
                format,
                sequential,
            };
            scan::run(args, &store).await?;
        }
        Commands::Keywords { command } => {
            keywords::run(&command, &store)?;
        }
        Commands::Settings { absolute_paths } => {
            settings::run(&store, absolute_paths)?;
        }
    }

    Ok(())
}
