//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use todobox::config::Config;
use todobox::domain::models::TodoPatch;
use todobox::output::OutputMode;

/// todobox - a small to-do list service
#[derive(Parser, Debug)]
#[command(
    name = "todobox",
    version,
    about = "A small to-do list service",
    long_about = "Keep a to-do list in a local SQLite database.\n\n\
                  Every operation is available as a subcommand here and as a\n\
                  GET endpoint once `todobox serve` is running."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// SQLite database path (`:memory:` for a throwaway store)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all to-do items
    All,

    /// List items in a category
    ByCategory {
        /// Category to match exactly
        category: String,
    },

    /// List items assigned to a person
    ByAssignee {
        /// Assignee to match exactly
        assignee: String,
    },

    /// Show one item
    Get {
        /// Item ID
        id: i64,
    },

    /// Add an item to the list
    Add {
        /// What needs to be done
        text: String,

        /// Person responsible
        #[arg(short, long)]
        assignee: Option<String>,

        /// Grouping label
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete an item
    Delete {
        /// Item ID
        id: i64,
    },

    /// Change the supplied fields of an item
    Update {
        /// Item ID
        id: i64,

        /// New task text
        #[arg(short, long)]
        text: Option<String>,

        /// New assignee
        #[arg(short, long)]
        assignee: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// Mark completed (true) or open (false)
        #[arg(long, value_name = "BOOL")]
        completed: Option<bool>,
    },

    /// Serve every operation over HTTP
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Say hello
    Hello {
        /// Name to greet
        name: String,
    },

    /// Add two or three numbers
    AddNumbers {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        num_a: i64,
        /// Second operand
        #[arg(allow_negative_numbers = true)]
        num_b: i64,
        /// Optional third operand
        #[arg(allow_negative_numbers = true)]
        num_c: Option<i64>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.database.path = db;
    }
    let db_path = config.database.path.as_path();

    match cli.command {
        Some(Command::All) => commands::all(db_path, output_mode),
        Some(Command::ByCategory { category }) => {
            commands::by_category(db_path, &category, output_mode)
        },
        Some(Command::ByAssignee { assignee }) => {
            commands::by_assignee(db_path, &assignee, output_mode)
        },
        Some(Command::Get { id }) => commands::get(db_path, id, output_mode),
        Some(Command::Add {
            text,
            assignee,
            category,
        }) => commands::add(db_path, text, assignee, category, output_mode),
        Some(Command::Delete { id }) => commands::delete(db_path, id, output_mode),
        Some(Command::Update {
            id,
            text,
            assignee,
            category,
            completed,
        }) => {
            let patch = TodoPatch {
                text,
                assignee,
                category,
                completed,
            };
            commands::update(db_path, id, &patch, output_mode)
        },
        Some(Command::Serve { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve(&config)
        },
        Some(Command::Hello { name }) => {
            commands::hello(&name, output_mode);
            Ok(())
        },
        Some(Command::AddNumbers {
            num_a,
            num_b,
            num_c,
        }) => commands::add_numbers(num_a, num_b, num_c, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("todobox v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("todobox v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'todobox --help' for usage");
                println!("Run 'todobox add \"Buy milk\"' to get started");
            }
            Ok(())
        },
    }
}
