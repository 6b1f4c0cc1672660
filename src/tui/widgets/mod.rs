//! TUI widgets

mod help;
mod output;

pub use help::HelpPopup;
pub use output::{OutputPane, OutputState};
