//! AI Adapters.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - OpenAI-compatible chat completions (OpenAI, Gemini)
//! - `MockAIProvider` - Configurable mock for testing
//! - `LlmContentJudge` - Content judge that prompts a provider and falls back on failure

mod llm_judge;
mod mock_provider;
mod openai_provider;

pub use llm_judge::{build_prompt, parse_judgment, LlmContentJudge, CONTENT_PREVIEW_CHARS};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{
    OpenAIConfig, OpenAIProvider, GEMINI_BASE_URL, GEMINI_MODEL, OPENAI_BASE_URL,
};
