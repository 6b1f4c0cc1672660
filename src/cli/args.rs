//! CLI argument definitions using clap

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::prompt::{EmailLength, EmailRequest, EmailTone, ScheduleRequest, ScheduleTone};

/// draftdesk - Draft meeting invites and emails with Gemini
#[derive(Parser, Debug)]
#[command(name = "draftdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Runtime(RuntimeCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Commands that need loaded settings
#[derive(Subcommand, Debug)]
pub enum RuntimeCommand {
    /// Generate a meeting invite and calendar entry
    Schedule(ScheduleArgs),

    /// Generate a professional email draft
    Email(EmailArgs),

    /// Launch the interactive form TUI
    Tui,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Meeting title
    #[arg(long, default_value = "Project Sync Meeting")]
    pub title: String,

    /// Meeting date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Start time, e.g. "3:00 PM"
    #[arg(long, default_value = "3:00 PM")]
    pub time: String,

    /// Duration in minutes
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: u32,

    /// Attendees (comma-separated)
    #[arg(long, default_value = "john@example.com, jane@example.com")]
    pub attendees: String,

    /// Location or meeting link
    #[arg(long, default_value = "Zoom: https://zoom.us/...")]
    pub location: String,

    /// Additional details
    #[arg(long, default_value = "Weekly catch-up on progress and blockers.")]
    pub details: String,

    /// Tone of the invite
    #[arg(long, value_enum, default_value_t = ScheduleTone::Professional)]
    pub tone: ScheduleTone,

    /// Print the prompt instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl ScheduleArgs {
    pub fn to_request(&self) -> ScheduleRequest {
        ScheduleRequest {
            title: self.title.clone(),
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            time: self.time.clone(),
            duration: self.duration,
            attendees: self.attendees.clone(),
            location: self.location.clone(),
            details: self.details.clone(),
            tone: self.tone,
        }
    }
}

#[derive(Args, Debug)]
pub struct EmailArgs {
    /// Recipient name
    #[arg(long, default_value = "Alex")]
    pub recipient_name: String,

    /// Recipient role / company
    #[arg(long, default_value = "Marketing Manager at XYZ Co.")]
    pub recipient_role: String,

    /// Subject hint
    #[arg(long, default_value = "Inquiry about collaboration")]
    pub subject_hint: String,

    /// Purpose of the email
    #[arg(
        long,
        default_value = "To discuss potential collaboration on upcoming campaign."
    )]
    pub purpose: String,

    /// Key points to cover
    #[arg(
        long,
        default_value = "introduce myself, explain project, request a short call"
    )]
    pub key_points: String,

    /// Tone of the email
    #[arg(long, value_enum, default_value_t = EmailTone::Professional)]
    pub tone: EmailTone,

    /// Desired length
    #[arg(long, value_enum, default_value_t = EmailLength::Medium)]
    pub length: EmailLength,

    /// Print the prompt instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl EmailArgs {
    pub fn to_request(&self) -> EmailRequest {
        EmailRequest {
            recipient_name: self.recipient_name.clone(),
            recipient_role: self.recipient_role.clone(),
            subject_hint: self.subject_hint.clone(),
            purpose: self.purpose.clone(),
            key_points: self.key_points.clone(),
            tone: self.tone,
            length: self.length,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
