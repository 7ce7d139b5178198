//! The structured content-quality judgment returned by the AI adapter.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::text_metrics::{KeywordMetrics, ReadabilityMetrics, TextMetrics};
use crate::domain::foundation::{BehavioralDriver, DriverPersona, Score};

/// A judged aspect of the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Aspect {
    ValueProposition,
    CtaStrength,
    SocialProof,
    Readability,
    SeoQuality,
    GlobalReach,
    Informativeness,
    Engagement,
    Uniqueness,
    OverallQuality,
}

impl Aspect {
    pub const ALL: [Aspect; 10] = [
        Aspect::ValueProposition,
        Aspect::CtaStrength,
        Aspect::SocialProof,
        Aspect::Readability,
        Aspect::SeoQuality,
        Aspect::GlobalReach,
        Aspect::Informativeness,
        Aspect::Engagement,
        Aspect::Uniqueness,
        Aspect::OverallQuality,
    ];

    /// Key used in the model reply and serialized judgment.
    pub fn key(&self) -> &'static str {
        match self {
            Aspect::ValueProposition => "valueProposition",
            Aspect::CtaStrength => "ctaStrength",
            Aspect::SocialProof => "socialProof",
            Aspect::Readability => "readability",
            Aspect::SeoQuality => "seoQuality",
            Aspect::GlobalReach => "globalReach",
            Aspect::Informativeness => "informativeness",
            Aspect::Engagement => "engagement",
            Aspect::Uniqueness => "uniqueness",
            Aspect::OverallQuality => "overallQuality",
        }
    }
}

/// Model assessment of one aspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionJudgment {
    /// 1-10 when judged; 0 means the model gave no usable score.
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl CriterionJudgment {
    pub fn new(score: u8, explanation: impl Into<String>) -> Self {
        Self {
            score,
            explanation: explanation.into(),
            ..Default::default()
        }
    }

    /// The judged score, or the neutral 5 when none was given.
    pub fn score_or_neutral(&self) -> Score {
        match self.score {
            0 => Score::NEUTRAL,
            score => Score::new(score),
        }
    }

    /// The explanation, if the model gave a non-blank one.
    pub fn explanation(&self) -> Option<&str> {
        let trimmed = self.explanation.trim();
        (!trimmed.is_empty()).then_some(self.explanation.as_str())
    }
}

/// Model assessment of one behavioral driver from one persona's viewpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPersonaJudgment {
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

impl DriverPersonaJudgment {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            ..Default::default()
        }
    }
}

pub type DriverJudgments = BTreeMap<BehavioralDriver, BTreeMap<DriverPersona, DriverPersonaJudgment>>;

const FALLBACK_MESSAGE: &str = "AI analysis not available. Using basic heuristics.";
const FALLBACK_EXPLANATION: &str = "AI not configured";

/// Structured content-quality judgment for one page.
///
/// Either a successful model judgment or the neutral fallback; both have
/// the same shape. Auxiliary metrics are attached through [`AiJudgment::enrich`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiJudgment {
    pub success: bool,
    pub ai_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_proposition: Option<CriterionJudgment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_strength: Option<CriterionJudgment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_proof: Option<CriterionJudgment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readability: Option<CriterionJudgment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_quality: Option<CriterionJudgment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_reach: Option<CriterionJudgment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub informativeness: Option<CriterionJudgment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<CriterionJudgment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniqueness: Option<CriterionJudgment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_quality: Option<CriterionJudgment>,

    #[serde(default)]
    pub top_suggestions: Vec<String>,
    #[serde(default)]
    pub behavioral_drivers: DriverJudgments,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readability_metrics: Option<ReadabilityMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_metrics: Option<KeywordMetrics>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<DateTime<Utc>>,
}

impl AiJudgment {
    /// A successful judgment with no aspects filled in yet.
    pub fn judged(analyzed_at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            ai_enabled: true,
            message: None,
            value_proposition: None,
            cta_strength: None,
            social_proof: None,
            readability: None,
            seo_quality: None,
            global_reach: None,
            informativeness: None,
            engagement: None,
            uniqueness: None,
            overall_quality: None,
            top_suggestions: Vec::new(),
            behavioral_drivers: BTreeMap::new(),
            readability_metrics: None,
            keyword_metrics: None,
            analyzed_at: Some(analyzed_at),
        }
    }

    /// The neutral judgment used whenever the model is unavailable or its
    /// reply is unusable. Every aspect and driver scores 5.
    pub fn fallback() -> Self {
        let mut judgment = Self::judged(Utc::now());
        judgment.success = false;
        judgment.ai_enabled = false;
        judgment.analyzed_at = None;
        judgment.message = Some(FALLBACK_MESSAGE.to_string());

        for aspect in Aspect::ALL {
            let explanation = match aspect {
                Aspect::Readability => {
                    "AI not configured - set an AI API key to enable detailed analysis"
                }
                _ => FALLBACK_EXPLANATION,
            };
            judgment.set_aspect(aspect, CriterionJudgment::new(5, explanation));
        }

        judgment.top_suggestions = vec![
            "Configure an AI API key to get AI-powered insights".to_string(),
            "Set STARTUP_BOOST__AI__API_KEY in your environment or .env file".to_string(),
            "Technical signal scores are still computed without AI".to_string(),
        ];

        judgment.behavioral_drivers = BehavioralDriver::ALL
            .into_iter()
            .map(|driver| {
                let personas = DriverPersona::ALL
                    .into_iter()
                    .map(|persona| (persona, DriverPersonaJudgment::new(5)))
                    .collect();
                (driver, personas)
            })
            .collect();

        judgment
    }

    /// The judgment for `aspect`, whether or not the call succeeded.
    pub fn aspect(&self, aspect: Aspect) -> Option<&CriterionJudgment> {
        match aspect {
            Aspect::ValueProposition => self.value_proposition.as_ref(),
            Aspect::CtaStrength => self.cta_strength.as_ref(),
            Aspect::SocialProof => self.social_proof.as_ref(),
            Aspect::Readability => self.readability.as_ref(),
            Aspect::SeoQuality => self.seo_quality.as_ref(),
            Aspect::GlobalReach => self.global_reach.as_ref(),
            Aspect::Informativeness => self.informativeness.as_ref(),
            Aspect::Engagement => self.engagement.as_ref(),
            Aspect::Uniqueness => self.uniqueness.as_ref(),
            Aspect::OverallQuality => self.overall_quality.as_ref(),
        }
    }

    /// The judgment for `aspect`, only when the model call succeeded.
    pub fn successful(&self, aspect: Aspect) -> Option<&CriterionJudgment> {
        if self.success {
            self.aspect(aspect)
        } else {
            None
        }
    }

    pub fn set_aspect(&mut self, aspect: Aspect, judgment: CriterionJudgment) {
        let slot = match aspect {
            Aspect::ValueProposition => &mut self.value_proposition,
            Aspect::CtaStrength => &mut self.cta_strength,
            Aspect::SocialProof => &mut self.social_proof,
            Aspect::Readability => &mut self.readability,
            Aspect::SeoQuality => &mut self.seo_quality,
            Aspect::GlobalReach => &mut self.global_reach,
            Aspect::Informativeness => &mut self.informativeness,
            Aspect::Engagement => &mut self.engagement,
            Aspect::Uniqueness => &mut self.uniqueness,
            Aspect::OverallQuality => &mut self.overall_quality,
        };
        *slot = Some(judgment);
    }

    /// Builder-style variant of [`AiJudgment::set_aspect`].
    pub fn with_aspect(mut self, aspect: Aspect, judgment: CriterionJudgment) -> Self {
        self.set_aspect(aspect, judgment);
        self
    }

    pub fn with_driver(
        mut self,
        driver: BehavioralDriver,
        persona: DriverPersona,
        judgment: DriverPersonaJudgment,
    ) -> Self {
        self.behavioral_drivers
            .entry(driver)
            .or_default()
            .insert(persona, judgment);
        self
    }

    pub fn driver(&self, driver: BehavioralDriver, persona: DriverPersona) -> Option<&DriverPersonaJudgment> {
        self.behavioral_drivers
            .get(&driver)
            .and_then(|personas| personas.get(&persona))
    }

    /// The driver score for a persona, or the neutral 5 when absent or zero.
    pub fn driver_score(&self, driver: BehavioralDriver, persona: DriverPersona) -> Score {
        match self.driver(driver, persona).map(|j| j.score) {
            None | Some(0) => Score::NEUTRAL,
            Some(score) => Score::new(score),
        }
    }

    /// Attaches auxiliary text metrics, producing a new judgment.
    ///
    /// Absent metrics leave the corresponding field untouched.
    pub fn enrich(self, metrics: TextMetrics) -> Self {
        let TextMetrics {
            readability,
            keywords,
        } = metrics;

        Self {
            readability_metrics: readability.or(self.readability_metrics),
            keyword_metrics: keywords.or(self.keyword_metrics),
            ..self
        }
    }
}
