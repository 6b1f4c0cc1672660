//! LLM module for draftdesk
//!
//! Sends built prompts to the Gemini API and reports typed failures.

mod client;
mod error;
mod gemini;

pub use client::{
    build_generator, display_outcome, generate_draft, GenerationResult, TextGenerator,
};
pub use error::{GenerationError, GenerationErrorKind};
pub use gemini::GeminiClient;
