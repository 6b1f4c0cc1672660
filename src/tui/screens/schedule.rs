//! Schedule creator - meeting invite form

use chrono::NaiveDate;

use crate::prompt::{ScheduleRequest, ScheduleTone};
use crate::tui::screens::form::{FormField, FormScreen};
use crate::{DraftdeskError, Result};

/// Build the schedule form pre-filled from `defaults`.
pub fn schedule_form(defaults: &ScheduleRequest) -> FormScreen {
    let tone_index = ScheduleTone::ALL
        .iter()
        .position(|t| *t == defaults.tone)
        .unwrap_or(0);

    FormScreen::new(
        "Create a Meeting Invite",
        vec![
            FormField::text("title", "Meeting Title", defaults.title.as_str()),
            FormField::text(
                "date",
                "Date (YYYY-MM-DD)",
                defaults.date.format("%Y-%m-%d").to_string(),
            ),
            FormField::text("time", "Time (e.g. 3:00 PM)", defaults.time.as_str()),
            FormField::text("duration", "Duration (minutes)", defaults.duration.to_string()),
            FormField::text("attendees", "Attendees (comma-separated)", defaults.attendees.as_str()),
            FormField::text("location", "Location / Link", defaults.location.as_str()),
            FormField::text("details", "Additional Details", defaults.details.as_str()),
            FormField::choice(
                "tone",
                "Tone",
                ScheduleTone::ALL.iter().map(|t| t.as_str()).collect(),
                tone_index,
            ),
        ],
    )
}

/// Read a `ScheduleRequest` back out of the form.
///
/// Only the date and duration need parsing; text fields pass through as typed.
pub fn schedule_request(form: &FormScreen) -> Result<ScheduleRequest> {
    let raw_date = form.text("date").trim();
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
        DraftdeskError::InvalidInput(format!("Date must be YYYY-MM-DD, got '{}'", raw_date))
    })?;

    let raw_duration = form.text("duration").trim();
    let duration = match raw_duration.parse::<u32>() {
        Ok(minutes) if minutes > 0 => minutes,
        _ => {
            return Err(DraftdeskError::InvalidInput(format!(
                "Duration must be a positive number of minutes, got '{}'",
                raw_duration
            )))
        }
    };

    Ok(ScheduleRequest {
        title: form.text("title").to_string(),
        date,
        time: form.text("time").to_string(),
        duration,
        attendees: form.text("attendees").to_string(),
        location: form.text("location").to_string(),
        details: form.text("details").to_string(),
        tone: ScheduleTone::ALL
            .get(form.choice("tone"))
            .copied()
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn select(form: &mut FormScreen, key: &str) {
        for _ in 0..16 {
            if form.selected().map(|f| f.key) == Some(key) {
                return;
            }
            form.next();
        }
        panic!("field {key} not found");
    }

    fn clear_and_type(form: &mut FormScreen, key: &str, value: &str) {
        select(form, key);
        for _ in 0..64 {
            form.handle_key(KeyCode::Backspace);
        }
        for c in value.chars() {
            form.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn defaults_round_trip_through_the_form() {
        let defaults = ScheduleRequest {
            tone: ScheduleTone::Formal,
            ..ScheduleRequest::default()
        };
        let form = schedule_form(&defaults);
        assert_eq!(schedule_request(&form).unwrap(), defaults);
    }

    #[test]
    fn edited_values_are_read_back() {
        let mut form = schedule_form(&ScheduleRequest::default());
        clear_and_type(&mut form, "title", "Sync");
        clear_and_type(&mut form, "date", "2024-01-01");
        clear_and_type(&mut form, "duration", "45");
        select(&mut form, "tone");
        form.handle_key(KeyCode::Left);

        let request = schedule_request(&form).unwrap();
        assert_eq!(request.title, "Sync");
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(request.duration, 45);
        assert_eq!(request.tone, ScheduleTone::Casual);
    }

    #[test]
    fn bad_date_is_invalid_input() {
        let mut form = schedule_form(&ScheduleRequest::default());
        clear_and_type(&mut form, "date", "next tuesday");

        let err = schedule_request(&form).unwrap_err();
        assert!(matches!(err, DraftdeskError::InvalidInput(_)));
        assert!(err.to_string().contains("next tuesday"));
    }

    #[test]
    fn zero_duration_is_invalid_input() {
        let mut form = schedule_form(&ScheduleRequest::default());
        clear_and_type(&mut form, "duration", "0");

        assert!(matches!(
            schedule_request(&form),
            Err(DraftdeskError::InvalidInput(_))
        ));
    }
}
