//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::{resolve_db_path, use_color, DB_PATH_ENV};


/// Equipment Visualizer - text dashboards for chemical equipment datasets
#[derive(Parser)]
#[command(name = "eqv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset library location (default: ~/.equipment-viz/library.db)
    #[arg(long, global = true, env = DB_PATH_ENV)]
    db: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Import an equipment CSV or JSON file into the library
    Import {
        /// File to import (.csv or .json)
        file: PathBuf,

        /// Dataset name (default: file name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List stored datasets
    List,

    /// Show the analysis dashboard for a stored dataset
    Show {
        /// Dataset id (see 'eqv list')
        id: i64,

        /// Include the equipment data table
        #[arg(long)]
        table: bool,

        /// Rebuild the dashboard every 5 seconds
        #[arg(long)]
        live: bool,
    },

    /// Render a dashboard directly from a file
    Render {
        /// Equipment file (.csv or .json)
        file: PathBuf,

        /// Precomputed summary JSON (default: derived from the records)
        #[arg(short, long)]
        summary: Option<PathBuf>,

        /// Include the equipment data table
        #[arg(long)]
        table: bool,
    },

    /// Export a dataset dashboard as PNG or SVG
    Export {
        /// Dataset id (see 'eqv list')
        id: i64,

        /// Export as SVG instead of PNG
        #[arg(long)]
        svg: bool,

        /// Open file after export
        #[arg(long)]
        open: bool,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove datasets or the whole library
    Remove {
        #[command(subcommand)]
        command: RemoveCommands,
    },

    /// Restore from backup
    Restore {
        #[command(subcommand)]
        command: RestoreCommands,
    },
}


#[derive(Subcommand)]
enum RemoveCommands {
    /// Remove a single dataset
    Dataset {
        /// Dataset id
        id: i64,
    },

    /// Remove the dataset library database
    Library {
        /// Force deletion without confirmation
        #[arg(short, long)]
        force: bool,
    },
}


#[derive(Subcommand)]
enum RestoreCommands {
    /// Restore the dataset library from its backup file
    Library,
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db);
    let colored = use_color(cli.plain);

    log::debug!("Using dataset library at {}", db_path.display());

    match cli.command {
        Some(Commands::Import { file, name }) => {
            commands::import::run(&db_path, &file, name.as_deref(), colored)?;
        }
        Some(Commands::List) => {
            commands::list::run(&db_path)?;
        }
        Some(Commands::Show { id, table, live }) => {
            commands::show::run(&db_path, id, table, live, colored)?;
        }
        Some(Commands::Render { file, summary, table }) => {
            commands::render::run(&file, summary.as_deref(), table, colored)?;
        }
        Some(Commands::Export { id, svg, open, output }) => {
            commands::export::run(&db_path, id, svg, open, output, colored)?;
        }
        Some(Commands::Remove { command }) => match command {
            RemoveCommands::Dataset { id } => commands::remove::dataset(&db_path, id, colored)?,
            RemoveCommands::Library { force } => commands::remove::library(&db_path, force, colored)?,
        },
        Some(Commands::Restore { command }) => match command {
            RestoreCommands::Library => commands::restore::library(&db_path, colored)?,
        },
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
