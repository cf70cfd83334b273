use anyhow::Result;
use clap::{Parser, Subcommand};

/// habitrack - Personal habit tracking
#[derive(Parser)]
#[command(name = "habitrack")]
#[command(about = "Track daily, weekly, monthly and weekday habits", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Print the habits due on a day
    Due {
        /// Day as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = habitrack::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    habitrack::observability::init_observability(
        "habitrack",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        &config.observability.format,
    )?;

    match cli.command {
        Commands::Serve { host, port } => habitrack::cli::serve(config, host, port).await,
        Commands::Migrate => habitrack::cli::migrate(config).await,
        Commands::Reset => habitrack::cli::reset(config).await,
        Commands::Due { date } => habitrack::cli::due(config, date).await,
    }
}
