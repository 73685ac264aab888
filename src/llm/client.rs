use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;
use crate::NotesError;

/// Notes extraction request payload.
pub struct NotesRequest<'a> {
    pub transcript: &'a str,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Ask the model for section-keyed notes; returns the raw reply text.
    async fn extract_notes(&self, request: NotesRequest<'_>) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => Err(NotesError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("Unsupported llm.provider"));
        assert!(matches!(
            err.downcast_ref::<NotesError>(),
            Some(NotesError::Config(_))
        ));
    }

    #[test]
    fn gemini_provider_requires_api_key() {
        let settings = Settings::default();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("Gemini API key is missing"));
        assert!(matches!(
            err.downcast_ref::<NotesError>(),
            Some(NotesError::Config(_))
        ));
    }

    #[test]
    fn provider_name_is_case_insensitive() {
        let mut settings = Settings::default();
        settings.llm.provider = "Gemini".to_string();
        settings.llm.api_key = "test-key".to_string();

        assert!(build_provider(&settings).is_ok());
    }
}
