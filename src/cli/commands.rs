//! CLI command implementations

use anyhow::Result;

use crate::cli::args::{ConfigCommand, EmailArgs, ScheduleArgs};
use crate::config::Settings;
use crate::llm::{build_generator, generate_draft};
use crate::prompt::PromptRequest;

/// Generate a meeting invite and print it to stdout
pub async fn generate_schedule(settings: &Settings, args: &ScheduleArgs) -> Result<()> {
    let request = args.to_request();
    if args.dry_run {
        println!("{}", request.build_prompt());
        return Ok(());
    }

    run_generation(
        settings,
        &request,
        "Generating your meeting invite...",
        "Invite generated successfully!",
    )
    .await
}

/// Generate an email draft and print it to stdout
pub async fn generate_email(settings: &Settings, args: &EmailArgs) -> Result<()> {
    let request = args.to_request();
    if args.dry_run {
        println!("{}", request.build_prompt());
        return Ok(());
    }

    run_generation(
        settings,
        &request,
        "Drafting your email...",
        "Email generated successfully!",
    )
    .await
}

/// Send one request and report the outcome.
///
/// Status lines go to stderr so stdout carries only the generated text.
async fn run_generation<R: PromptRequest + Sync>(
    settings: &Settings,
    request: &R,
    pending: &str,
    done: &str,
) -> Result<()> {
    settings.require_api_key()?;
    let generator = build_generator(settings)?;

    eprintln!("{}", pending);
    let text = generate_draft(generator.as_ref(), request).await?;
    eprintln!("{}", done);
    println!("{}", text);

    Ok(())
}

/// Handle configuration subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut redacted = settings.clone();
            if !redacted.llm.api_key.is_empty() {
                redacted.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&redacted)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
