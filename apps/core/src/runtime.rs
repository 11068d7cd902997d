use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{self, ConfigError};
use crate::contract::{OverviewSnapshotDto, ResolveResultDto, SearchPathsDto};
use crate::core_service::{CoreService, ServiceError, Snapshot};
use crate::logging::{self, LogTarget};

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    #[error("failed to initialize logging: {0}")]
    Logging(std::io::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "appsview-core",
    version,
    about = "Match open windows to application icons for a launcher grid"
)]
pub struct CliOptions {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log to stderr at debug level instead of the log file
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List open windows with their resolved icons (default)
    List {
        #[arg(long)]
        json: bool,
    },
    /// Resolve an icon for a window title without querying the window list
    Resolve {
        #[arg(long)]
        title: String,
        /// Window class, e.g. "Navigator.Firefox"
        #[arg(long)]
        class: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the active theme and icon search roots
    Paths,
    /// Raise a window by id
    Focus { id: String },
    /// Write the default config file if none exists
    InitConfig,
}

impl CliOptions {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::List { json: false })
    }
}

/// Parse arguments without the program name. `--help` and `--version` come
/// back as errors whose `exit()` prints them and exits cleanly.
pub fn parse_cli_args(args: &[String]) -> Result<CliOptions, clap::Error> {
    let argv = std::iter::once("appsview-core".to_string()).chain(args.iter().cloned());
    CliOptions::try_parse_from(argv)
}

pub fn run_with_options(options: CliOptions) -> Result<(), RuntimeError> {
    let config = config::load(options.config.as_deref())?;

    let (level, target) = if options.verbose {
        ("debug", LogTarget::Stderr)
    } else {
        (config.log_level.as_str(), LogTarget::File(logging::logs_dir()))
    };
    logging::init(level, target).map_err(RuntimeError::Logging)?;
    tracing::info!(
        event = "core.runtime.started",
        config_path = %config.config_path.display(),
        command = ?options.command()
    );

    let mut stdout = std::io::stdout().lock();

    match options.command() {
        Command::InitConfig => {
            if config.config_path.exists() {
                writeln!(stdout, "config already exists at {}", config.config_path.display())?;
            } else {
                config::save(&config)?;
                writeln!(stdout, "wrote default config to {}", config.config_path.display())?;
            }
        }
        Command::List { json } => {
            let service = CoreService::new(config)?;
            let snapshot = service.snapshot();
            if json {
                let dto = OverviewSnapshotDto::from(snapshot);
                writeln!(stdout, "{}", serde_json::to_string_pretty(&dto)?)?;
            } else {
                write_listing(&mut stdout, &snapshot)?;
            }
        }
        Command::Resolve { title, class, json } => {
            let service = CoreService::new(config)?;
            let dto = ResolveResultDto::from(service.resolve_one(&title, class.as_deref()));
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&dto)?)?;
            } else {
                writeln!(stdout, "{}", dto.icon_path.as_deref().unwrap_or(PLACEHOLDER_LABEL))?;
            }
        }
        Command::Paths => {
            let service = CoreService::new(config)?;
            let (theme, paths) = service.search_paths();
            let dto = SearchPathsDto::new(theme, &paths);
            writeln!(stdout, "theme: {}", dto.theme)?;
            for root in &dto.roots {
                writeln!(stdout, "  {root}")?;
            }
        }
        Command::Focus { id } => {
            let service = CoreService::new(config)?;
            service.focus(&id);
        }
    }

    Ok(())
}

const PLACEHOLDER_LABEL: &str = "(placeholder)";

fn write_listing(out: &mut impl Write, snapshot: &Snapshot) -> std::io::Result<()> {
    writeln!(out, "theme: {}", snapshot.theme)?;
    for entry in &snapshot.entries {
        let icon = entry
            .icon
            .path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string());
        writeln!(out, "{}\t{}\t{}", entry.window.id, icon, entry.window.title)?;
    }
    Ok(())
}
