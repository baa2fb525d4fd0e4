use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use venval::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for venval::AppCommand {
    fn from(cmd: Commands) -> venval::AppCommand {
        match cmd {
            Commands::Value => venval::AppCommand::Value,
            Commands::Rebuild => venval::AppCommand::Rebuild,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the Ven valuation of every configured asset
    Value,
    /// Rebuild today's historical rate rows, one asset at a time
    Rebuild,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => venval::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = venval::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
assets:
  - id: 1
    hash: "d9b1d7db4cd6e70935368a1efb10e377"
    title: "Gold & Loonie"
    category: "commodity"
    ticker_symbol: "uGLD"
    num_assets: 1000
    is_approved: 1
    is_featured: 0
    user_id: 1
    weighting_type: "currency_combo"
    weightings: '[{"type":"XAU","amount":80},{"type":"CAD","amount":20}]'
    created_at: "2018-02-18 00:00:00"

# Rate amounts are strings so decimal precision survives YAML parsing.
rates:
  - symbol: "XAU"
    amount: "0.0000762543"
  - symbol: "CAD"
    amount: "0.1262628972"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
