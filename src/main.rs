//! Demo Console - CLI entry point
//!
//! Runs the interactive demo page, plays a scenario headlessly, lists the
//! configured scenarios or manages the configuration file.

use clap::{Parser, Subcommand};
use demo_console::config::{default, Config, ConfigLoader, LoggingConfig};
use demo_console::logging::{self, LogMode};
use demo_console::scheduler::{self, StepTiming, WriterSurface};
use demo_console::tui::app::App;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Scripted demo console and toast notifications
#[derive(Parser)]
#[command(name = "demo-console")]
#[command(version, about = "Scripted demo console and toast notifications")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the demo-console CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal user interface
    Tui,

    /// Play a scenario on stdout without the TUI
    Play {
        /// Scenario id (see `demo-console scenarios`)
        scenario: String,
        /// Skip all delays
        #[arg(long)]
        instant: bool,
    },

    /// List configured scenarios
    Scenarios {
        /// Print the scenarios as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration management actions
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing config (keeps a .toml.backup copy)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Config { action } => {
            logging::init(&LoggingConfig::default(), LogMode::Headless)?;
            match action {
                ConfigAction::Init { force } => {
                    let path = default::create_default_config(config_path, force)?;
                    println!("Created configuration at {}", path.display());
                }
                ConfigAction::Path => {
                    println!("{}", ConfigLoader::resolve_path(config_path).display());
                }
                ConfigAction::Validate => {
                    let config = ConfigLoader::load(config_path)?;
                    println!("Configuration is valid");
                    println!("{config:#?}");
                }
            }
            Ok(())
        }
        Commands::Tui => {
            let config = ConfigLoader::load(config_path)?;
            logging::init(&config.logging, LogMode::Tui)?;
            let mut app = App::new(&config)?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(app.run())?;
            Ok(())
        }
        Commands::Play { scenario, instant } => {
            let config = ConfigLoader::load(config_path)?;
            logging::init(&config.logging, LogMode::Headless)?;
            play(&config, &scenario, instant)
        }
        Commands::Scenarios { json } => {
            let config = ConfigLoader::load(config_path)?;
            logging::init(&config.logging, LogMode::Headless)?;
            print_scenarios(&config, json)
        }
    }
}

/// Plays one scenario to stdout, one `$ <line>` per reveal.
fn play(config: &Config, id: &str, instant: bool) -> Result<(), Box<dyn Error>> {
    let scenario = config.scenario(id)?;
    let timing = if instant {
        StepTiming::instant()
    } else {
        config.timing.step_timing()?
    };

    let mut stdout = io::stdout();
    writeln!(stdout, "Demo: {}", scenario.title)?;
    stdout.flush()?;

    let rt = tokio::runtime::Runtime::new()?;
    let mut surface = WriterSurface::new(stdout);
    rt.block_on(scheduler::run_to_surface(
        scenario.steps.clone().into(),
        timing,
        &mut surface,
    ));
    tracing::debug!(scenario = %scenario.id, "playback finished");
    Ok(())
}

fn print_scenarios(config: &Config, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.scenarios)?);
        return Ok(());
    }
    if config.scenarios.is_empty() {
        println!("No scenarios configured");
        return Ok(());
    }
    let width = config
        .scenarios
        .iter()
        .map(|s| s.id.len())
        .max()
        .unwrap_or(0);
    for scenario in &config.scenarios {
        println!(
            "{:<width$}  {} ({} steps)",
            scenario.id,
            scenario.title,
            scenario.steps.len(),
            width = width
        );
    }
    Ok(())
}
