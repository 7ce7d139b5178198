//! Main Criteria Scorer - six bounded 0-10 scores from signals and AI judgment.
//!
//! Each criterion tallies technical points from signals with additive rules,
//! rescales the tally to 0-10 against a per-criterion maximum, then blends
//! it with the AI score using a fixed technical/AI split.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Criterion, Score};
use crate::domain::judgment::{AiJudgment, Aspect};
use crate::domain::signals::Signals;

/// Maximum strengths and weaknesses kept per criterion.
pub const MAX_BULLETS: usize = 3;

const BENEFIT_KEYWORDS: &[&str] = &[
    "save", "grow", "increase", "improve", "boost", "help", "solve", "easy", "simple", "fast",
    "free", "better",
];

const ACTION_VERBS: &[&str] = &[
    "start", "get", "try", "book", "join", "sign", "buy", "download", "learn", "discover",
    "explore", "request",
];

const URGENCY_WORDS: &[&str] = &["free", "now", "today", "instant", "trial"];

static SUCCESS_METRIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+[,.]?\d*\s*(users|customers|companies|downloads|reviews|stars?)")
        .expect("valid regex")
});

/// Technical maximum and weight split for one criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub technical_max: f64,
    pub technical_weight: f64,
    pub ai_weight: f64,
}

impl BlendWeights {
    /// The tuned constants for `criterion`. The maxima are independent per
    /// criterion and are not meant to follow a common rule.
    pub const fn for_criterion(criterion: Criterion) -> Self {
        let (technical_max, technical_weight, ai_weight) = match criterion {
            Criterion::ValueProposition => (6.25, 0.4, 0.6),
            Criterion::CtaStrength => (7.0, 0.5, 0.5),
            Criterion::SocialProof => (9.0, 0.4, 0.6),
            Criterion::VisualReadability => (3.0, 0.3, 0.7),
            Criterion::SeoDiscoverability => (4.0, 0.4, 0.6),
            Criterion::GlobalReach => (4.0, 0.4, 0.6),
        };
        Self {
            technical_max,
            technical_weight,
            ai_weight,
        }
    }

    /// Technical points rescaled to 0-10, capped at the maximum.
    pub fn rescale(&self, points: f64) -> f64 {
        points.clamp(0.0, self.technical_max) / self.technical_max * 10.0
    }

    /// `round(rescaled * technical_weight + ai * ai_weight)`, clamped to 0-10.
    pub fn blend(&self, points: f64, ai: Score) -> Score {
        Score::from_f64(self.rescale(points) * self.technical_weight + ai.as_f64() * self.ai_weight)
    }
}

/// Technical and AI components of a score, both on the 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub technical: Score,
    pub ai: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub ai_insight: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub score: Score,
    pub breakdown: Breakdown,
    pub analysis: CriterionAnalysis,
}

/// Scores for all six criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainCriteriaScores {
    pub value_proposition: CriterionScore,
    pub cta_strength: CriterionScore,
    pub social_proof: CriterionScore,
    pub visual_readability: CriterionScore,
    pub seo_discoverability: CriterionScore,
    pub global_reach: CriterionScore,
}

impl MainCriteriaScores {
    pub fn get(&self, criterion: Criterion) -> &CriterionScore {
        match criterion {
            Criterion::ValueProposition => &self.value_proposition,
            Criterion::CtaStrength => &self.cta_strength,
            Criterion::SocialProof => &self.social_proof,
            Criterion::VisualReadability => &self.visual_readability,
            Criterion::SeoDiscoverability => &self.seo_discoverability,
            Criterion::GlobalReach => &self.global_reach,
        }
    }

    /// Final scores in weight-matrix column order.
    pub fn score_vector(&self) -> [Score; 6] {
        Criterion::ALL.map(|criterion| self.get(criterion).score)
    }
}

/// Running total of technical points and their bullets.
#[derive(Debug, Default)]
struct Tally {
    points: f64,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
}

impl Tally {
    fn award(&mut self, points: f64, strength: impl Into<String>) {
        self.points += points;
        self.strengths.push(strength.into());
    }

    fn award_quietly(&mut self, points: f64) {
        self.points += points;
    }

    fn strength(&mut self, strength: impl Into<String>) {
        self.strengths.push(strength.into());
    }

    fn weakness(&mut self, weakness: impl Into<String>) {
        self.weaknesses.push(weakness.into());
    }
}

/// The AI half of a criterion: score, insight and AI-sourced bullets.
#[derive(Debug)]
struct AiSide {
    score: Score,
    insight: String,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    suggestion: Option<String>,
}

impl AiSide {
    fn from_judgment(judgment: &AiJudgment, aspect: Aspect, default_insight: &str) -> Self {
        match judgment.successful(aspect) {
            Some(judged) => Self {
                score: judged.score_or_neutral(),
                insight: judged.explanation().unwrap_or(default_insight).to_string(),
                strengths: judged.strengths.clone(),
                weaknesses: judged.weaknesses.clone(),
                suggestion: judged.suggestion.clone().filter(|s| !s.trim().is_empty()),
            },
            None => Self {
                score: Score::NEUTRAL,
                insight: default_insight.to_string(),
                strengths: Vec::new(),
                weaknesses: Vec::new(),
                suggestion: None,
            },
        }
    }
}

/// Stateless scorer for the six main criteria.
pub struct MainCriteriaScorer;

impl MainCriteriaScorer {
    /// Scores every criterion independently.
    pub fn score(signals: &Signals, judgment: &AiJudgment) -> MainCriteriaScores {
        MainCriteriaScores {
            value_proposition: Self::value_proposition(signals, judgment),
            cta_strength: Self::cta_strength(signals, judgment),
            social_proof: Self::social_proof(signals, judgment),
            visual_readability: Self::visual_readability(signals, judgment),
            seo_discoverability: Self::seo_discoverability(signals, judgment),
            global_reach: Self::global_reach(signals, judgment),
        }
    }

    fn finish(criterion: Criterion, tally: Tally, ai: AiSide, default_suggestion: &str) -> CriterionScore {
        let weights = BlendWeights::for_criterion(criterion);
        let Tally {
            points,
            mut strengths,
            mut weaknesses,
        } = tally;

        strengths.extend(ai.strengths);
        weaknesses.extend(ai.weaknesses);
        strengths.truncate(MAX_BULLETS);
        weaknesses.truncate(MAX_BULLETS);

        CriterionScore {
            score: weights.blend(points, ai.score),
            breakdown: Breakdown {
                technical: Score::from_f64(weights.rescale(points)),
                ai: ai.score,
            },
            analysis: CriterionAnalysis {
                strengths,
                weaknesses,
                ai_insight: ai.insight,
                suggestion: ai
                    .suggestion
                    .unwrap_or_else(|| default_suggestion.to_string()),
            },
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Value Proposition Clarity
    // ════════════════════════════════════════════════════════════════════════════

    fn value_proposition(signals: &Signals, judgment: &AiJudgment) -> CriterionScore {
        let mut tally = Tally::default();
        let startup = &signals.startup_signals;
        let value_prop = &signals.text_content.value_proposition;

        match signals.headings.h1.first() {
            Some(h1) => {
                let len = h1.chars().count();
                if (5..=100).contains(&len) {
                    tally.award(1.0, "Clear H1 heading present");
                } else if len > 100 {
                    tally.weakness("H1 is too long and may not be scannable");
                } else {
                    tally.weakness("H1 is too short to convey value");
                }
            }
            None => tally.weakness("No H1 heading found"),
        }

        let value_lower = value_prop.to_lowercase();
        let h1_lower = signals.headings.h1.join(" ").to_lowercase();
        let has_benefit_words = BENEFIT_KEYWORDS
            .iter()
            .any(|word| value_lower.contains(word) || h1_lower.contains(word));
        if has_benefit_words {
            tally.award(1.0, "Uses benefit-focused language");
        } else {
            tally.weakness("Could emphasize user benefits more clearly");
        }

        if value_prop.chars().count() > 20 {
            tally.award(1.0, "Value proposition stated early");
        } else {
            tally.weakness("Value proposition not immediately clear");
        }

        if signals
            .metadata
            .description
            .as_ref()
            .is_some_and(|d| d.chars().count() >= 50)
        {
            tally.award(1.0, "Descriptive subtitle present");
        }

        if startup.has_pricing && startup.pricing_visible {
            tally.award(0.5, "Pricing is transparent and visible");
        } else if startup.has_pricing {
            tally.award_quietly(0.25);
        }

        if startup.has_screenshot || startup.has_demo_video {
            tally.award(0.5, "Shows product visually");
        }
        if startup.has_use_cases {
            tally.award(0.5, "Clarifies target audience");
        }
        if startup.has_feature_list {
            tally.award(0.5, "Lists specific features/benefits");
        }

        let ai = AiSide::from_judgment(judgment, Aspect::ValueProposition, "AI analysis not available");
        Self::finish(
            Criterion::ValueProposition,
            tally,
            ai,
            "Make your value proposition more specific and benefit-focused",
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // CTA Strength & Placement
    // ════════════════════════════════════════════════════════════════════════════

    fn cta_strength(signals: &Signals, judgment: &AiJudgment) -> CriterionScore {
        let mut tally = Tally::default();
        let startup = &signals.startup_signals;
        let ctas: Vec<String> = signals
            .ctas
            .items
            .iter()
            .map(|cta| cta.text.to_lowercase())
            .collect();
        let count = ctas.len();

        if count > 0 {
            tally.award(1.0, format!("{count} CTA(s) found"));
        } else {
            tally.weakness("No clear calls-to-action found");
        }

        let has_action_verb = ctas
            .iter()
            .any(|cta| ACTION_VERBS.iter().any(|verb| cta.contains(verb)));
        if has_action_verb {
            tally.award(1.5, "Uses action-oriented language");
        } else if count > 0 {
            tally.weakness("CTAs could use stronger action verbs");
        }

        if count >= 2 {
            tally.award(1.0, "Multiple CTAs for different stages");
        } else if count == 1 {
            tally.weakness("Only one CTA - consider adding more touchpoints");
        }

        let unique: HashSet<&str> = ctas.iter().map(String::as_str).collect();
        if unique.len() > 1 && unique.len() < count {
            tally.award(1.0, "Good CTA repetition and variety");
        }

        let has_urgency = ctas
            .iter()
            .any(|cta| URGENCY_WORDS.iter().any(|word| cta.contains(word)));
        if has_urgency {
            tally.award(0.5, "CTAs create urgency");
        }

        if startup.has_free_trial {
            let offer = match startup.trial_length {
                Some(days) => format!("Free trial offer ({days} days)"),
                None => "Free trial offer".to_string(),
            };
            tally.award(1.0, offer);
        }
        if startup.has_demo {
            tally.award(0.5, "Demo available");
        }
        if startup.has_chat_widget {
            tally.award(0.5, "Live chat support available");
        }

        let ai = AiSide::from_judgment(judgment, Aspect::CtaStrength, "AI analysis not available");
        Self::finish(
            Criterion::CtaStrength,
            tally,
            ai,
            "Use action verbs and create urgency in your CTAs",
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Social Proof & Trust
    // ════════════════════════════════════════════════════════════════════════════

    fn social_proof(signals: &Signals, judgment: &AiJudgment) -> CriterionScore {
        let mut tally = Tally::default();
        let trust = &signals.trust_signals;
        let contact = &signals.contact_info;
        let startup = &signals.startup_signals;

        if trust.has_testimonials {
            tally.award(1.0, "Customer testimonials present");
        } else {
            tally.weakness("No testimonials found");
        }

        if trust.has_trust_badges || trust.has_security_badges {
            tally.award(0.75, "Trust badges/certifications displayed");
        }
        if trust.has_privacy_policy {
            tally.award(0.5, "Privacy policy available");
        }

        if trust.has_https {
            tally.award(0.5, "Secure HTTPS connection");
        } else {
            tally.weakness("Not using HTTPS - major trust issue");
        }

        let contact_points = [
            contact.has_email,
            contact.has_phone,
            contact.has_address,
            contact.has_contact_form,
        ]
        .iter()
        .filter(|present| **present)
        .count() as f64
            * 0.25;
        tally.award_quietly(contact_points);
        if contact_points >= 0.5 {
            tally.strength("Contact information available");
        } else {
            tally.weakness("Limited contact information");
        }

        let platforms = signals.social_media.total_platforms;
        if platforms >= 2 {
            tally.award(0.5, format!("Connected to {platforms} social platforms"));
        }

        if SUCCESS_METRIC_RE.is_match(&signals.text_content.full_text) {
            tally.award(0.5, "Shows quantifiable success metrics");
        } else {
            tally.weakness("Could add specific numbers/metrics");
        }

        if startup.has_customer_logos {
            tally.award(
                1.0,
                format!("{} customer logos displayed", startup.customer_logo_count),
            );
        }
        if startup.has_brand_names {
            tally.award(0.75, "Recognized brands mentioned");
        }
        if startup.has_media_mentions {
            tally.award(
                0.75,
                format!("Featured in {} media outlet(s)", startup.media_count),
            );
        }
        if let Some(metric) = startup.metrics.first().filter(|_| startup.has_metrics) {
            tally.award(0.5, format!("Metrics: {metric}"));
        }
        if startup.has_team_section {
            tally.award(0.5, "Team/About page builds trust");
        }
        if startup.has_funding_info {
            tally.award(0.5, "Investor backing mentioned");
        }
        if startup.has_awards {
            tally.award(0.5, "Awards/recognition displayed");
        }

        let ai = AiSide::from_judgment(judgment, Aspect::SocialProof, "AI analysis not available");
        Self::finish(
            Criterion::SocialProof,
            tally,
            ai,
            "Add customer testimonials and success metrics",
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Visual Legibility & Readability
    // ════════════════════════════════════════════════════════════════════════════

    fn visual_readability(signals: &Signals, judgment: &AiJudgment) -> CriterionScore {
        let mut tally = Tally::default();
        let headings = &signals.headings;

        match (!headings.h1.is_empty(), !headings.h2.is_empty()) {
            (true, true) => tally.award(1.0, "Good heading hierarchy"),
            (true, false) => {
                tally.award_quietly(0.5);
                tally.weakness("Could use more H2/H3 subheadings");
            }
            (false, _) => tally.weakness("Missing proper heading structure"),
        }

        let word_count = signals.text_content.word_count;
        if word_count > 100 {
            tally.award(1.0, "Sufficient content present");
        }
        if word_count > 50 && word_count < 2000 {
            tally.award(0.5, "Content length is scannable");
        } else if word_count >= 2000 {
            tally.weakness("Long content - consider breaking into sections");
        }

        let images = signals.content.image_count;
        if (1..=10).contains(&images) {
            tally.award(0.5, "Good use of visual elements");
        } else if images > 10 {
            tally.weakness("Many images - ensure they enhance understanding");
        }

        let mut ai = AiSide::from_judgment(judgment, Aspect::Readability, "AI readability analysis");

        if let Some(metrics) = &judgment.readability_metrics {
            if metrics.readability_score > 0 {
                ai.score = Score::new(metrics.readability_score);
            }
            ai.strengths.push(format!(
                "Flesch Reading Ease: {} ({})",
                metrics.flesch_reading_ease,
                metrics.difficulty.label()
            ));
            if metrics.is_optimal {
                ai.strengths
                    .push("Optimal readability for startup content".to_string());
            } else {
                ai.weaknesses.push(metrics.recommendation.clone());
            }
            ai.insight = format!("{} | Metrics: {}", ai.insight, metrics.recommendation);
        }

        Self::finish(
            Criterion::VisualReadability,
            tally,
            ai,
            "Use shorter sentences and more subheadings",
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // SEO & Discoverability
    // ════════════════════════════════════════════════════════════════════════════

    fn seo_discoverability(signals: &Signals, judgment: &AiJudgment) -> CriterionScore {
        let mut tally = Tally::default();
        let metadata = &signals.metadata;
        let seo = &signals.seo;

        match metadata.title.as_ref().map(|t| t.chars().count()) {
            Some(len) if (30..=60).contains(&len) => tally.award(1.0, "Optimized title length"),
            Some(len) if len > 60 => {
                tally.award_quietly(0.5);
                tally.weakness("Title too long (may be truncated)");
            }
            Some(len) if len > 0 => {
                tally.award_quietly(0.5);
                tally.weakness("Title too short");
            }
            _ => tally.weakness("Missing title tag"),
        }

        match metadata.description.as_ref().map(|d| d.chars().count()) {
            Some(len) if (120..=160).contains(&len) => {
                tally.award(1.0, "Well-optimized meta description")
            }
            Some(len) if len > 0 => {
                tally.award_quietly(0.5);
                tally.weakness("Meta description could be optimized");
            }
            _ => tally.weakness("Missing meta description"),
        }

        match signals.headings.h1.len() {
            1 => tally.award(0.5, "Single H1 tag (SEO best practice)"),
            0 => {}
            _ => {
                tally.award_quietly(0.25);
                tally.weakness("Multiple H1 tags (should be one)");
            }
        }

        if seo.open_graph_tags.any() {
            tally.award(0.5, "Open Graph tags for social sharing");
        }

        if seo.has_structured_data {
            tally.award(0.5, "Structured data present");
        } else {
            tally.weakness("Could add structured data (Schema.org)");
        }

        if seo.meta_keywords.as_ref().is_some_and(|k| !k.is_empty()) {
            tally.award(0.5, "Meta keywords defined");
        }

        let ai = AiSide::from_judgment(judgment, Aspect::SeoQuality, "AI SEO analysis");
        Self::finish(
            Criterion::SeoDiscoverability,
            tally,
            ai,
            "Optimize title, description, and add structured data",
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Global Reach & Accessibility
    // ════════════════════════════════════════════════════════════════════════════

    fn global_reach(signals: &Signals, judgment: &AiJudgment) -> CriterionScore {
        let mut tally = Tally::default();
        let reach = &signals.global_reach;

        if reach.has_language_selector {
            tally.award(1.0, "Language selector available");
        } else {
            tally.weakness("No language selector found");
        }

        if reach.has_hreflang_tags {
            tally.award(
                1.5,
                format!("Hreflang tags present ({} languages)", reach.hreflang_count),
            );
        } else {
            tally.weakness("No hreflang tags for international SEO");
        }

        if reach.has_currency_switcher {
            tally.award(1.0, "Currency switcher available");
        } else if reach.currencies.len() > 1 {
            tally.award(
                0.5,
                format!("Multiple currencies mentioned ({})", reach.currencies.join(", ")),
            );
        } else {
            tally.weakness("No currency options for international users");
        }

        if reach.has_international_shipping {
            tally.award(0.5, "International shipping mentioned");
        }
        if reach.mentions_time_zones {
            tally.award(0.5, "Time zone awareness");
        }
        if reach.has_global_payment_methods {
            tally.award(0.5, "Global payment methods supported");
        }

        let ai = AiSide::from_judgment(
            judgment,
            Aspect::GlobalReach,
            "Analyze international focus and market mentions",
        );
        Self::finish(
            Criterion::GlobalReach,
            tally,
            ai,
            "Add language selector, hreflang tags, and currency options",
        )
    }
}
