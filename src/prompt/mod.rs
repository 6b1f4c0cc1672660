//! Prompt module for draftdesk
//!
//! Turns schedule and email form input into the text sent to the model.

mod request;
mod templates;

pub use request::{EmailLength, EmailRequest, EmailTone, ScheduleRequest, ScheduleTone};
pub use templates::{build_email_prompt, build_schedule_prompt};

/// A form record that can be rendered into a prompt.
pub trait PromptRequest {
    fn build_prompt(&self) -> String;
}

impl PromptRequest for ScheduleRequest {
    fn build_prompt(&self) -> String {
        build_schedule_prompt(self)
    }
}

impl PromptRequest for EmailRequest {
    fn build_prompt(&self) -> String {
        build_email_prompt(self)
    }
}
