//! Portfolio CLI - serve the portfolio site and manage its configuration

use clap::{Parser, Subcommand};
use portfolio_core::config::Config;
use tracing::info;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(author, version, about = "Personal portfolio project listings server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        /// Host to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
        /// Start with an empty project list
        #[arg(long)]
        no_seed: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_seed,
        } => cmd_serve(host, port, no_seed, cli.quiet).await,

        Commands::Config { action } => cmd_config(action, cli.quiet),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

/// Apply command-line overrides on top of the loaded configuration
fn apply_overrides(
    config: &mut Config,
    host: Option<String>,
    port: Option<u16>,
    no_seed: bool,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.set("server.host", &host)?;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if no_seed {
        config.storage.seed_demo_project = false;
    }
    Ok(())
}

async fn cmd_serve(
    host: Option<String>,
    port: Option<u16>,
    no_seed: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, host, port, no_seed)?;

    if !quiet {
        println!("Server running on http://{}", config.server.bind_address());
    }
    portfolio_web::serve(&config).await?;
    info!("Server stopped");
    Ok(())
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, config.get(&key)?);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for (key, value) in config.list()? {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults");
            }
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
    }
    Ok(())
}
