use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weekstrip_core::{calendar, AppConfig, SurfaceKind};

mod commands;

#[derive(Parser)]
#[command(name = "weekstrip")]
#[command(author, version, about = "A swipeable week strip date navigator for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Date to open on (YYYY-MM-DD), defaults to today
    #[arg(short = 'd', long, global = true)]
    date: Option<String>,

    /// First day of the week: monday or sunday
    #[arg(long, global = true)]
    week_start: Option<String>,

    /// Days per page (1 to 7)
    #[arg(short = 'w', long, global = true)]
    page_width: Option<usize>,

    /// JSON file with a list of events to show on the strip
    #[arg(short = 'e', long, global = true)]
    events: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive navigator
    Run {
        /// Page through the strip like a table instead of a free scroll
        #[arg(long)]
        discrete: bool,
    },
    /// Print the pages around a date
    Pages {
        /// Pages to show on each side of the date's page
        #[arg(short = 'n', long, default_value_t = 2)]
        count: usize,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show which page a date lands on
    Resolve {
        /// Date to resolve (YYYY-MM-DD)
        date: String,
    },
    /// Print the effective configuration
    Config {
        /// Print only the config file location
        #[arg(long)]
        path: bool,
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration and apply command line overrides
    let mut config = AppConfig::load()?;
    if let Some(week_start) = &cli.week_start {
        config.grid.week_start = week_start.clone();
    }
    if let Some(page_width) = cli.page_width {
        config.grid.page_width = page_width;
    }

    let interactive = matches!(cli.command, None | Some(Commands::Run { .. }));
    init_logging(&config, interactive)?;

    let date = match &cli.date {
        Some(s) => calendar::parse_date(s)?,
        None => calendar::today(),
    };
    let events = match &cli.events {
        Some(path) => commands::load_events(path)?,
        None => Vec::new(),
    };

    match cli.command {
        Some(Commands::Run { discrete }) => {
            if discrete {
                config.ui.surface = SurfaceKind::Discrete;
            }
            commands::run::run(config, date, events)
        }
        None => commands::run::run(config, date, events),
        Some(Commands::Pages { count, json }) => {
            commands::pages::run(&config, date, events, count, json)
        }
        Some(Commands::Resolve { date: target }) => {
            let target = calendar::parse_date(&target)?;
            commands::resolve::run(&config, date, target)
        }
        Some(Commands::Config { path, init }) => commands::config::run(&config, path, init),
    }
}

/// Log to a file while the TUI owns the terminal, to stderr otherwise
fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    let (file_layer, stderr_layer) = if interactive {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file));
        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}
