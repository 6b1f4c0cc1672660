use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::error::GenerationError;
use crate::llm::gemini::GeminiClient;
use crate::prompt::PromptRequest;

/// Outcome of one generation request.
pub type GenerationResult = std::result::Result<String, GenerationError>;

/// A text-generation backend. One call, one outbound request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> GenerationResult;

    /// Model identifier reported in logs and the UI.
    fn model(&self) -> &str;
}

/// Build a text generator from runtime settings.
pub fn build_generator(settings: &Settings) -> Result<Box<dyn TextGenerator>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::new(&settings.llm)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ),
    }
}

/// Build the prompt for `request` and send it through `generator`.
pub async fn generate_draft<R>(generator: &dyn TextGenerator, request: &R) -> GenerationResult
where
    R: PromptRequest + ?Sized,
{
    let prompt = request.build_prompt();
    tracing::info!(model = generator.model(), "Generating draft");

    let result = generator.generate(&prompt).await;
    if let Err(e) = &result {
        tracing::warn!(kind = %e.kind, "Draft generation failed: {}", e);
    }
    result
}

/// Collapse a result into the text shown to the user.
pub fn display_outcome(result: &GenerationResult) -> String {
    match result {
        Ok(text) => text.clone(),
        Err(e) => format!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::GenerationErrorKind;
    use crate::prompt::EmailRequest;
    use std::sync::Mutex;

    struct CannedGenerator {
        reply: GenerationResult,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        fn new(reply: GenerationResult) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str) -> GenerationResult {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }

        fn model(&self) -> &str {
            "canned"
        }
    }

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();
        settings.llm.api_key = "key".to_string();

        let err = match build_generator(&settings) {
            Ok(_) => panic!("expected generator creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported llm.provider"));
    }

    #[test]
    fn gemini_provider_requires_api_key() {
        let settings = Settings::default();

        let err = match build_generator(&settings) {
            Ok(_) => panic!("expected generator creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Gemini API key is missing"));
    }

    #[test]
    fn gemini_provider_is_built_with_configured_model() {
        let mut settings = Settings::default();
        settings.llm.api_key = "key".to_string();
        settings.llm.model = "gemini-1.5-flash".to_string();

        let generator = build_generator(&settings).unwrap();
        assert_eq!(generator.model(), "gemini-1.5-flash");
    }

    #[test]
    fn successful_text_is_displayed_unchanged() {
        let generator = CannedGenerator::new(Ok("Hello".to_string()));
        let result = tokio_test::block_on(generator.generate("prompt"));
        assert_eq!(display_outcome(&result), "Hello");
    }

    #[tokio::test]
    async fn generate_draft_sends_built_prompt_once() {
        let generator = CannedGenerator::new(Ok("Drafted".to_string()));
        let request = EmailRequest::default();

        let result = generate_draft(&generator, &request).await;

        assert_eq!(result.unwrap(), "Drafted");
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], request.build_prompt());
    }

    #[test]
    fn failures_are_displayed_with_error_prefix() {
        let generator = CannedGenerator::new(Err(GenerationError::network("connection refused")));
        let result = tokio_test::block_on(generator.generate("prompt"));

        assert_eq!(
            result.as_ref().unwrap_err().kind,
            GenerationErrorKind::Network
        );
        assert_eq!(display_outcome(&result), "Error: connection refused");
    }
}
