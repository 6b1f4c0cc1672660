//! Email draft generator form

use crate::prompt::{EmailLength, EmailRequest, EmailTone};
use crate::tui::screens::form::{FormField, FormScreen};

/// Build the email form pre-filled from `defaults`.
pub fn email_form(defaults: &EmailRequest) -> FormScreen {
    let tone_index = EmailTone::ALL
        .iter()
        .position(|t| *t == defaults.tone)
        .unwrap_or(0);
    let length_index = EmailLength::ALL
        .iter()
        .position(|l| *l == defaults.length)
        .unwrap_or(0);

    FormScreen::new(
        "Draft a Professional Email",
        vec![
            FormField::text("recipient_name", "Recipient Name", defaults.recipient_name.as_str()),
            FormField::text(
                "recipient_role",
                "Recipient Role / Company",
                defaults.recipient_role.as_str(),
            ),
            FormField::text("subject_hint", "Subject Hint", defaults.subject_hint.as_str()),
            FormField::text("purpose", "Purpose of Email", defaults.purpose.as_str()),
            FormField::text("key_points", "Key Points", defaults.key_points.as_str()),
            FormField::choice(
                "tone",
                "Tone",
                EmailTone::ALL.iter().map(|t| t.as_str()).collect(),
                tone_index,
            ),
            FormField::choice(
                "length",
                "Length",
                EmailLength::ALL.iter().map(|l| l.as_str()).collect(),
                length_index,
            ),
        ],
    )
}

/// Read an `EmailRequest` back out of the form. Every field is free text or a
/// closed choice, so this cannot fail.
pub fn email_request(form: &FormScreen) -> EmailRequest {
    EmailRequest {
        recipient_name: form.text("recipient_name").to_string(),
        recipient_role: form.text("recipient_role").to_string(),
        subject_hint: form.text("subject_hint").to_string(),
        purpose: form.text("purpose").to_string(),
        key_points: form.text("key_points").to_string(),
        tone: EmailTone::ALL
            .get(form.choice("tone"))
            .copied()
            .unwrap_or_default(),
        length: EmailLength::ALL
            .get(form.choice("length"))
            .copied()
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn defaults_round_trip_through_the_form() {
        let defaults = EmailRequest::default();
        assert_eq!(email_request(&email_form(&defaults)), defaults);
    }

    #[test]
    fn empty_fields_are_accepted() {
        let mut form = email_form(&EmailRequest::default());
        for _ in 0..16 {
            form.handle_key(KeyCode::Backspace);
        }

        let request = email_request(&form);
        assert_eq!(request.recipient_name, "");
    }

    #[test]
    fn length_choice_is_read_back() {
        let mut form = email_form(&EmailRequest::default());
        while form.selected().map(|f| f.key) != Some("length") {
            form.next();
        }
        form.handle_key(KeyCode::Right);

        assert_eq!(email_request(&form).length, EmailLength::Detailed);
    }
}
