//! Tangle CLI - Command-line interface for Tangle
//!
//! Loads a DOT graph description and answers structural questions about it:
//! tree views, value search, degree hotspots, reachability and connectivity.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "tangle")]
#[command(author = "Tangle Contributors")]
#[command(version)]
#[command(about = "Structural queries over directed graphs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the per-user config if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Where to write it (defaults to the per-user config path)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print a single vertex
    Vertex {
        /// Graph description (DOT)
        file: PathBuf,

        /// Vertex index or value
        vertex: String,
    },

    /// Print the tree of children below a vertex
    Children {
        /// Graph description (DOT)
        file: PathBuf,

        /// Vertex index or value
        vertex: String,

        /// Levels to expand (defaults to the configured depth)
        #[arg(short, long)]
        depth: Option<usize>,
    },

    /// List vertices whose value starts with a prefix
    Search {
        /// Graph description (DOT)
        file: PathBuf,

        /// Value prefix (case-sensitive)
        query: String,
    },

    /// Rank vertices by degree
    Hotspots {
        /// Graph description (DOT)
        file: PathBuf,

        /// Rank by in-degree instead of out-degree
        #[arg(long)]
        incoming: bool,

        /// Number of vertices to list (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List descendants two vertices have in common
    Shared {
        /// Graph description (DOT)
        file: PathBuf,

        /// First vertex index or value
        a: String,

        /// Second vertex index or value
        b: String,
    },

    /// List every vertex reachable from a vertex, itself included
    Reach {
        /// Graph description (DOT)
        file: PathBuf,

        /// Vertex index or value
        vertex: String,
    },

    /// Check whether one of the given vertices reaches all the others
    Connected {
        /// Graph description (DOT)
        file: PathBuf,

        /// Vertex values
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Translate vertex values to indexes
    Resolve {
        /// Graph description (DOT)
        file: PathBuf,

        /// Indexes or values (a leading '.' or other symbols are ignored)
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Write the subgraph reachable from a vertex as DOT
    Subgraph {
        /// Graph description (DOT)
        file: PathBuf,

        /// Vertex index or value
        vertex: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the graph to JSON
    Export {
        /// Graph description (DOT)
        file: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show graph statistics
    Stats {
        /// Graph description (DOT)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    if !config.color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Init { path, force } => commands::init(path.as_deref(), force, &mut out),
        Commands::Vertex { file, vertex } => {
            commands::load_graph(&file).and_then(|g| commands::vertex(&g, &vertex, &mut out))
        }
        Commands::Children {
            file,
            vertex,
            depth,
        } => {
            let depth = depth.unwrap_or(config.default_depth);
            commands::load_graph(&file)
                .and_then(|g| commands::children(&g, &vertex, depth, &mut out))
        }
        Commands::Search { file, query } => {
            commands::load_graph(&file).and_then(|g| commands::search(&g, &query, &mut out))
        }
        Commands::Hotspots {
            file,
            incoming,
            limit,
        } => {
            let limit = limit.unwrap_or(config.hotspot_limit);
            commands::load_graph(&file)
                .and_then(|g| commands::hotspots(&g, incoming, limit, &mut out))
        }
        Commands::Shared { file, a, b } => {
            commands::load_graph(&file).and_then(|g| commands::shared(&g, &a, &b, &mut out))
        }
        Commands::Reach { file, vertex } => {
            commands::load_graph(&file).and_then(|g| commands::reach(&g, &vertex, &mut out))
        }
        Commands::Connected { file, values } => {
            commands::load_graph(&file).and_then(|g| commands::connected(&g, &values, &mut out))
        }
        Commands::Resolve { file, tokens } => {
            commands::load_graph(&file).and_then(|g| commands::resolve(&g, &tokens, &mut out))
        }
        Commands::Subgraph {
            file,
            vertex,
            output,
        } => commands::load_graph(&file)
            .and_then(|g| commands::subgraph(&g, &vertex, output.as_deref(), &mut out)),
        Commands::Export { file, output } => commands::load_graph(&file)
            .and_then(|g| commands::export(&g, output.as_deref(), &mut out)),
        Commands::Stats { file } => {
            commands::load_graph(&file).and_then(|g| commands::stats(&g, &mut out))
        }
    };

    if let Err(e) = result.and_then(|()| out.flush().map_err(Into::into)) {
        fail(e.as_ref());
    }
}

fn fail(e: &dyn std::error::Error) -> ! {
    eprintln!("{} {}", "error:".red().bold(), e);
    std::process::exit(1);
}
