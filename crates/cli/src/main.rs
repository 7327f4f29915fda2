//! # Vigia CLI
//!
//! Command-line interface for the Vigia vector-control dashboard service.
//!
//! ## Usage
//!
//! ```bash
//! vigia serve     # Start the API server
//! vigia validate  # Verify configuration
//! vigia --help    # Show help
//! ```

use clap::{Args, CommandFactory as _, Parser, Subcommand};
use error::Result;

mod config;
mod server;

/// Vigia - vector-control field operations dashboard
#[derive(Parser, Debug)]
#[command(name = "vigia")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "VIGIA_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the API server
    Serve(ServeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Verify configuration
    Validate,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Server host to bind to
    #[arg(long, env = "VIGIA_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port to bind to
    #[arg(short, long, env = "VIGIA_PORT", default_value = "3000")]
    pub port: u16,

    /// Directory for the degraded local record cache
    #[arg(long, env = "VIGIA_CACHE_DIR", default_value = "./cache")]
    pub cache_dir: String,
}

#[derive(Args, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: clap_complete::Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logging::init(&cli.log_level, &cli.log_format, None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    logging::info!(target: "app", command = ?cli.command, "Vigia CLI starting...");

    match cli.command {
        Commands::Serve(args) => serve(&args).await?,
        Commands::Completions(args) => completions(&args)?,
        Commands::Validate => validate()?,
    }

    logging::info!(target: "app", "Vigia CLI completed successfully");
    Ok(())
}

async fn serve(args: &ServeArgs) -> Result<()> {
    logging::info!(target: "serve",
        host = %args.host,
        port = %args.port,
        cache_dir = %args.cache_dir,
        "Starting API server..."
    );

    // Load database configuration
    let db_config = config::DatabaseConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Invalid database configuration: {}", e))?;

    logging::info!(target: "serve",
        host = %db_config.host,
        port = %db_config.port,
        database = %db_config.database,
        "Connecting to database..."
    );

    server::serve(&db_config, args).await
}

fn completions(args: &CompletionsArgs) -> Result<()> {
    clap_complete::generate(
        args.shell,
        &mut Cli::command(),
        "vigia",
        &mut std::io::stdout(),
    );
    Ok(())
}

fn validate() -> Result<()> {
    logging::info!(target: "validate", "Validating configuration...");

    // Database configuration must parse
    let db_config = config::DatabaseConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Invalid database configuration: {}", e))?;
    logging::info!(target: "validate",
        host = %db_config.host,
        database = %db_config.database,
        "Database configuration OK"
    );

    // Bind address must parse
    let host = std::env::var("VIGIA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("VIGIA_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .map_err(|e| anyhow::anyhow!("Invalid VIGIA_PORT: {}", e))?;
    config::parse_socket_addr(&host, port).map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;
    logging::info!(target: "validate", %host, %port, "Bind address OK");

    // Access policy loads (empty rule lists are valid)
    let _policy = access::AccessPolicy::from_env();
    logging::info!(target: "validate", "Access policy OK");

    logging::info!(target: "validate", "Configuration valid");
    Ok(())
}
