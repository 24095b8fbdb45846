//! segment-router CLI.
//!
//! ```text
//!   routes.toml ──▶ config::loader ──▶ config::validation ──▶ routing::Router
//!                                                                  │
//!   match <PATH>...  ─────────────────────────────────────────────▶│ resolve
//!   watch (stdin)    ──▶ routing::SharedRouter ◀── config::watcher ┘ (hot swap)
//! ```

use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use segment_router::config::{ConfigWatcher, RouteConfig};
use segment_router::lifecycle::{session, signals, startup};
use segment_router::routing::output::{self, MatchOutput};
use segment_router::routing::{Router, SharedRouter};

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "Resolve paths against a segment-tree route table", long_about = None)]
struct Cli {
    /// Route table file.
    #[arg(short, long, default_value = "config/routes.toml")]
    config: PathBuf,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve paths and print one JSON line per path
    Match {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Validate the route table
    Check,
    /// List registered routes
    Routes,
    /// Resolve paths read from stdin while hot-reloading the route table
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = startup::init(&cli.config, cli.log_level.as_deref())?;
    let router = startup::build_router(&config);

    match cli.command {
        Commands::Match { paths } => {
            let mut stdout = io::stdout().lock();
            for path in &paths {
                MatchOutput::new(path, router.resolve(path)).write_line(&mut stdout)?;
            }
        }
        Commands::Check => {
            println!("{}", output::check_summary(&cli.config, router.len()));
        }
        Commands::Routes => {
            for (pattern, route) in router.routes() {
                println!("{}", output::route_line(pattern, route));
            }
        }
        Commands::Watch => watch(cli.config, router).await?,
    }

    Ok(())
}

async fn watch(config_path: PathBuf, router: Router<RouteConfig>) -> Result<(), Box<dyn std::error::Error>> {
    let shared = SharedRouter::new(router);

    let (watcher, updates) = ConfigWatcher::new(&config_path);
    // Dropping the handle stops the watch.
    let _watch_handle = watcher.run()?;

    let lines = session::spawn_line_reader(BufReader::new(io::stdin()));
    session::run(&shared, lines, updates, signals::ctrl_c(), &mut io::stdout()).await?;
    Ok(())
}
