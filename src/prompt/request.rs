//! Form records for the two drafting modes

use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tone options offered by the schedule creator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleTone {
    #[default]
    Professional,
    Friendly,
    Formal,
    Casual,
}

impl ScheduleTone {
    pub const ALL: [ScheduleTone; 4] = [
        ScheduleTone::Professional,
        ScheduleTone::Friendly,
        ScheduleTone::Formal,
        ScheduleTone::Casual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleTone::Professional => "Professional",
            ScheduleTone::Friendly => "Friendly",
            ScheduleTone::Formal => "Formal",
            ScheduleTone::Casual => "Casual",
        }
    }
}

impl fmt::Display for ScheduleTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone options offered by the email generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmailTone {
    #[default]
    Professional,
    Friendly,
    Persuasive,
    Concise,
}

impl EmailTone {
    pub const ALL: [EmailTone; 4] = [
        EmailTone::Professional,
        EmailTone::Friendly,
        EmailTone::Persuasive,
        EmailTone::Concise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailTone::Professional => "Professional",
            EmailTone::Friendly => "Friendly",
            EmailTone::Persuasive => "Persuasive",
            EmailTone::Concise => "Concise",
        }
    }
}

impl fmt::Display for EmailTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Desired email length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmailLength {
    Short,
    #[default]
    Medium,
    Detailed,
}

impl EmailLength {
    pub const ALL: [EmailLength; 3] = [EmailLength::Short, EmailLength::Medium, EmailLength::Detailed];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailLength::Short => "Short",
            EmailLength::Medium => "Medium",
            EmailLength::Detailed => "Detailed",
        }
    }
}

impl fmt::Display for EmailLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meeting details collected by the schedule creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub title: String,
    pub date: NaiveDate,
    /// Free-form, e.g. "3:00 PM"
    pub time: String,
    /// Minutes
    pub duration: u32,
    /// Comma-separated emails, not validated
    pub attendees: String,
    pub location: String,
    pub details: String,
    pub tone: ScheduleTone,
}

impl Default for ScheduleRequest {
    fn default() -> Self {
        Self {
            title: "Project Sync Meeting".to_string(),
            date: Local::now().date_naive(),
            time: "3:00 PM".to_string(),
            duration: 30,
            attendees: "john@example.com, jane@example.com".to_string(),
            location: "Zoom: https://zoom.us/...".to_string(),
            details: "Weekly catch-up on progress and blockers.".to_string(),
            tone: ScheduleTone::default(),
        }
    }
}

/// Email details collected by the email draft generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub recipient_name: String,
    /// Role and/or company of the recipient
    pub recipient_role: String,
    pub subject_hint: String,
    pub purpose: String,
    pub key_points: String,
    pub tone: EmailTone,
    pub length: EmailLength,
}

impl Default for EmailRequest {
    fn default() -> Self {
        Self {
            recipient_name: "Alex".to_string(),
            recipient_role: "Marketing Manager at XYZ Co.".to_string(),
            subject_hint: "Inquiry about collaboration".to_string(),
            purpose: "To discuss potential collaboration on upcoming campaign.".to_string(),
            key_points: "introduce myself, explain project, request a short call".to_string(),
            tone: EmailTone::default(),
            length: EmailLength::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_display_capitalized_names() {
        assert_eq!(ScheduleTone::Formal.to_string(), "Formal");
        assert_eq!(EmailTone::Persuasive.to_string(), "Persuasive");
        assert_eq!(EmailLength::Detailed.to_string(), "Detailed");
    }

    #[test]
    fn defaults_match_form_presets() {
        let schedule = ScheduleRequest::default();
        assert_eq!(schedule.tone, ScheduleTone::Professional);
        assert_eq!(schedule.duration, 30);

        let email = EmailRequest::default();
        assert_eq!(email.tone, EmailTone::Professional);
        assert_eq!(email.length, EmailLength::Medium);
    }

    #[test]
    fn tones_parse_from_lowercase_cli_values() {
        assert_eq!(
            ScheduleTone::from_str("casual", true).unwrap(),
            ScheduleTone::Casual
        );
        assert_eq!(EmailLength::from_str("short", true).unwrap(), EmailLength::Short);
    }
}
