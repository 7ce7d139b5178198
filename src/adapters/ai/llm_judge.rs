//! LLM Content Judge - AI Judgment Adapter backed by an [`AIProvider`].
//!
//! Builds a prompt from the page signals, asks the model for a strict JSON
//! verdict, and normalizes the reply into an [`AiJudgment`]. Every failure
//! path (no provider, provider error, reply without usable JSON) returns
//! [`AiJudgment::fallback`], so callers never see an error.
//!
//! The judge is constructed once per process. Whether a provider is present
//! is the capability flag; there is no lazily initialized global client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt::Write as _;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::foundation::{BehavioralDriver, DriverPersona};
use crate::domain::judgment::{AiJudgment, Aspect, CriterionJudgment, DriverPersonaJudgment};
use crate::domain::signals::Signals;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, ContentJudge, MessageRole, RequestMetadata,
};

/// Characters of page text included in the prompt.
pub const CONTENT_PREVIEW_CHARS: usize = 3000;

const MAX_TOKENS: u32 = 4096;
const TEMPERATURE: f32 = 0.2;

const SYSTEM_PROMPT: &str = "You are a website quality analyzer for startup landing pages. \
You answer with a single JSON object and nothing else.";

static JSON_OBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

pub struct LlmContentJudge {
    provider: Option<Arc<dyn AIProvider>>,
}

impl LlmContentJudge {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A judge that always returns the fallback judgment.
    pub fn disabled() -> Self {
        Self { provider: None }
    }

    fn request(analysis_id: Uuid, url: &str, signals: &Signals) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(analysis_id, url))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, build_prompt(url, signals))
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(TEMPERATURE)
    }
}

#[async_trait]
impl ContentJudge for LlmContentJudge {
    async fn judge(&self, analysis_id: Uuid, url: &str, signals: &Signals) -> AiJudgment {
        let Some(provider) = &self.provider else {
            tracing::debug!(%analysis_id, "AI provider not configured, using fallback judgment");
            return AiJudgment::fallback();
        };

        let request = Self::request(analysis_id, url, signals);
        let outcome = match provider.complete(request).await {
            Ok(response) => parse_judgment(&response.content, Utc::now()),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(judgment) => {
                tracing::info!(%analysis_id, model = %provider.provider_info().model, "AI judgment received");
                judgment
            }
            Err(err) => {
                tracing::error!(%analysis_id, error = %err, "AI analysis failed, using fallback judgment");
                AiJudgment::fallback()
            }
        }
    }

    fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }
}

/// The user prompt: a content summary plus the exact JSON shape expected back.
pub fn build_prompt(url: &str, signals: &Signals) -> String {
    let text = &signals.text_content;
    let preview: String = text.full_text.chars().take(CONTENT_PREVIEW_CHARS).collect();
    let title = signals.metadata.title.as_deref().unwrap_or("No title");

    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Analyze this startup landing page and rate it on the criteria below.\n"
    );
    let _ = writeln!(prompt, "URL: {url}\n");
    let _ = writeln!(prompt, "Website Content Summary:");
    let _ = writeln!(prompt, "- Title: {title}");
    let _ = writeln!(prompt, "- Main headings: {}", text.headings_summary);
    let _ = writeln!(prompt, "- Value proposition: {}", text.value_proposition);
    let _ = writeln!(prompt, "- Word count: {}", text.word_count);
    let _ = writeln!(prompt, "- Calls to action: {}", signals.ctas.count);
    let _ = writeln!(
        prompt,
        "\nFull content preview (first {CONTENT_PREVIEW_CHARS} chars):\n{preview}\n"
    );

    let _ = writeln!(
        prompt,
        "Rate every criterion from 1 to 10. For each criterion return an object \
         {{\"score\": <1-10>, \"explanation\": \"<brief>\", \"strengths\": [..], \
         \"weaknesses\": [..], \"suggestion\": \"<one concrete fix>\"}} under these keys:"
    );
    for aspect in Aspect::ALL {
        let _ = writeln!(prompt, "- \"{}\": {}", aspect.key(), aspect_question(aspect));
    }

    let _ = writeln!(
        prompt,
        "\nAlso return \"topSuggestions\": an array of the three most impactful improvements."
    );
    let _ = writeln!(
        prompt,
        "\nFinally return \"behavioralDrivers\": for each driver key below, an object with keys \
         \"user\", \"buyer\" and \"investor\", each {{\"score\": <1-10>, \"strengths\": [..], \
         \"weaknesses\": [..]}} rating how well the page serves that persona under that driver:"
    );
    for driver in BehavioralDriver::ALL {
        let _ = writeln!(prompt, "- \"{}\": {}", driver.key(), driver.description());
    }

    let _ = write!(prompt, "\nReturn ONLY valid JSON, no other text.");
    prompt
}

fn aspect_question(aspect: Aspect) -> &'static str {
    match aspect {
        Aspect::ValueProposition => "is it immediately clear what the product does and for whom?",
        Aspect::CtaStrength => "are the calls to action clear, specific and compelling?",
        Aspect::SocialProof => "do testimonials, logos and metrics build credibility?",
        Aspect::Readability => "is the copy clear and easy to scan?",
        Aspect::SeoQuality => "are keywords well-targeted and relevant?",
        Aspect::GlobalReach => "does the page serve an international audience?",
        Aspect::Informativeness => "does it provide valuable, useful information?",
        Aspect::Engagement => "is it interesting and compelling?",
        Aspect::Uniqueness => "is this information unique or commonly available elsewhere?",
        Aspect::OverallQuality => "overall assessment",
    }
}

/// Extracts and normalizes the JSON verdict from a model reply.
///
/// The first `{` through the last `}` is taken as the object, so prose or
/// code fences around it are tolerated. Scores are rounded and clamped to
/// 1-10; a missing or non-numeric score becomes 0 (no score).
pub fn parse_judgment(content: &str, analyzed_at: DateTime<Utc>) -> Result<AiJudgment, AIError> {
    let raw = JSON_OBJECT_RE
        .find(content)
        .ok_or_else(|| AIError::parse("Could not parse AI response: no JSON object found"))?;

    let value: Value = serde_json::from_str(raw.as_str())
        .map_err(|e| AIError::parse(format!("Could not parse AI response: {e}")))?;
    let root = value
        .as_object()
        .ok_or_else(|| AIError::parse("Could not parse AI response: not an object"))?;

    let mut judgment = AiJudgment::judged(analyzed_at);

    for aspect in Aspect::ALL {
        if let Some(entry) = root.get(aspect.key()).and_then(Value::as_object) {
            judgment.set_aspect(aspect, criterion_judgment(entry));
        }
    }

    judgment.top_suggestions = string_list(root.get("topSuggestions"));

    if let Some(drivers) = root.get("behavioralDrivers").and_then(Value::as_object) {
        for driver in BehavioralDriver::ALL {
            let Some(personas) = drivers.get(driver.key()).and_then(Value::as_object) else {
                continue;
            };
            for persona in DriverPersona::ALL {
                if let Some(entry) = personas.get(persona.key()).and_then(Value::as_object) {
                    judgment = judgment.with_driver(driver, persona, driver_judgment(entry));
                }
            }
        }
    }

    Ok(judgment)
}

fn criterion_judgment(entry: &Map<String, Value>) -> CriterionJudgment {
    CriterionJudgment {
        score: normalized_score(entry.get("score")),
        explanation: entry
            .get("explanation")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        strengths: string_list(entry.get("strengths")),
        weaknesses: string_list(entry.get("weaknesses")),
        suggestion: entry
            .get("suggestion")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

fn driver_judgment(entry: &Map<String, Value>) -> DriverPersonaJudgment {
    DriverPersonaJudgment {
        score: normalized_score(entry.get("score")),
        strengths: string_list(entry.get("strengths")),
        weaknesses: string_list(entry.get("weaknesses")),
    }
}

/// Accepts numbers and numeric strings; anything else is 0.
fn normalized_score(value: Option<&Value>) -> u8 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => n.round().clamp(1.0, 10.0) as u8,
        _ => 0,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
