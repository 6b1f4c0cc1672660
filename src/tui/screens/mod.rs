//! TUI screens

mod email;
mod form;
mod schedule;

pub use email::{email_form, email_request};
pub use form::{FieldValue, FormField, FormScreen};
pub use schedule::{schedule_form, schedule_request};
