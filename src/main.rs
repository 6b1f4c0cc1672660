//! draftdesk - Meeting invite and email drafting with Gemini
//!
//! Entry point for the draftdesk CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use draftdesk::cli::{Cli, Commands, RuntimeCommand};
use draftdesk::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            draftdesk::cli::completions::print(shell);
        }
        Commands::Runtime(command) => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;
            init_logging(&settings, cli.verbose);

            // Execute command
            match command {
                RuntimeCommand::Schedule(args) => {
                    draftdesk::cli::commands::generate_schedule(&settings, &args).await?;
                }
                RuntimeCommand::Email(args) => {
                    draftdesk::cli::commands::generate_email(&settings, &args).await?;
                }
                RuntimeCommand::Tui => {
                    draftdesk::tui::run(&settings).await?;
                }
                RuntimeCommand::Config(config_cmd) => {
                    draftdesk::cli::commands::config_command(&settings, config_cmd)?;
                }
            }
        }
    }

    Ok(())
}

/// Initialize logging; RUST_LOG wins over the configured level.
fn init_logging(settings: &Settings, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        settings.general.log_level.as_str()
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
