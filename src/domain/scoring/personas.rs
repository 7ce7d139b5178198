//! Persona Scorer - five fixed viewpoints on a 0-100 scale.
//!
//! Each persona adds capped points per rule. The content-quality seeker and
//! SEO optimizer use the AI judgment when it succeeded and fall back to a
//! reduced signal-only rule set otherwise. The ad-hater starts at 100 and
//! loses points per annoyance.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, Score};
use crate::domain::judgment::{AiJudgment, Aspect};
use crate::domain::signals::Signals;

/// Maximum score for every persona.
pub const PERSONA_MAX_SCORE: u8 = 100;

/// AI sub-scores behind the content-quality seeker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAiScores {
    pub readability: Score,
    pub informativeness: Score,
    pub engagement: Score,
    pub uniqueness: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaScore {
    pub score: Percentage,
    pub max_score: u8,
    pub percentage: Percentage,
    pub insights: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_powered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_scores: Option<ContentAiScores>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaScores {
    pub impatient_user: PersonaScore,
    pub skeptical_user: PersonaScore,
    pub content_quality_seeker: PersonaScore,
    pub ad_hater: PersonaScore,
    pub seo_optimizer: PersonaScore,
}

impl PersonaScores {
    pub fn all(&self) -> [&PersonaScore; 5] {
        [
            &self.impatient_user,
            &self.skeptical_user,
            &self.content_quality_seeker,
            &self.ad_hater,
            &self.seo_optimizer,
        ]
    }
}

/// Point total and insights for one persona.
#[derive(Debug, Default)]
struct Card {
    points: i32,
    insights: Vec<String>,
}

impl Card {
    fn starting_at(points: i32) -> Self {
        Self {
            points,
            insights: Vec::new(),
        }
    }

    fn add(&mut self, points: i32, insight: impl Into<String>) {
        self.points += points;
        self.insights.push(insight.into());
    }

    fn note(&mut self, insight: impl Into<String>) {
        self.insights.push(insight.into());
    }

    fn finish(self, description: &str) -> PersonaScore {
        let score = Percentage::from_points(self.points);
        PersonaScore {
            score,
            max_score: PERSONA_MAX_SCORE,
            percentage: Percentage::of(u32::from(score.value()), u32::from(PERSONA_MAX_SCORE)),
            insights: self.insights,
            description: description.to_string(),
            ai_powered: None,
            ai_scores: None,
        }
    }
}

/// Stateless scorer for the five legacy personas.
pub struct PersonaScorer;

impl PersonaScorer {
    pub fn score(signals: &Signals, judgment: Option<&AiJudgment>) -> PersonaScores {
        PersonaScores {
            impatient_user: Self::impatient_user(signals),
            skeptical_user: Self::skeptical_user(signals),
            content_quality_seeker: Self::content_quality_seeker(signals, judgment),
            ad_hater: Self::ad_hater(signals),
            seo_optimizer: Self::seo_optimizer(signals, judgment),
        }
    }

    fn impatient_user(signals: &Signals) -> PersonaScore {
        let mut card = Card::default();

        match signals.headings.h1.len() {
            1 => card.add(20, "✓ Has a clear main heading"),
            0 => card.note("✗ Missing main heading (H1)"),
            _ => card.add(10, "⚠ Multiple H1 headings may be confusing"),
        }

        match signals.ctas.count {
            n if n >= 3 => card.add(30, "✓ Multiple clear calls-to-action"),
            n if n >= 1 => card.add(20, "⚠ Has CTAs but could use more prominent ones"),
            _ => card.note("✗ No clear calls-to-action found"),
        }

        let content = &signals.content;
        let avg_paragraph = if content.paragraph_count > 0 {
            content.total_text_length as f64 / content.paragraph_count as f64
        } else {
            0.0
        };
        if avg_paragraph > 0.0 && avg_paragraph < 200.0 {
            card.add(20, "✓ Content is concise and scannable");
        } else if (200.0..400.0).contains(&avg_paragraph) {
            card.add(10, "⚠ Paragraphs are a bit long");
        } else if avg_paragraph >= 400.0 {
            card.note("✗ Very long paragraphs may lose impatient readers");
        }

        if signals.headings.total >= 3 {
            card.add(15, "✓ Good use of headings for scanning");
        } else {
            card.note("⚠ Could use more headings to break up content");
        }

        if content.image_count > 0 || content.has_video {
            card.add(15, "✓ Has visual elements to engage quickly");
        } else {
            card.note("⚠ No images or videos found");
        }

        card.finish("An impatient user wants quick value, clear CTAs, and easy-to-scan content")
    }

    fn skeptical_user(signals: &Signals) -> PersonaScore {
        let mut card = Card::default();
        let contact = &signals.contact_info;

        let contact_rules = [
            (contact.has_email, "✓ Email address found"),
            (contact.has_phone, "✓ Phone number found"),
            (contact.has_address, "✓ Address information found"),
            (contact.has_contact_form, "✓ Contact form available"),
        ];
        let mut contact_points = 0;
        for (present, insight) in contact_rules {
            if present {
                contact_points += 10;
                card.add(10, insight);
            }
        }
        if contact_points == 0 {
            card.note("✗ No contact information found - major trust issue");
        } else if contact_points < 20 {
            card.note("⚠ Limited contact information");
        }

        let metadata = &signals.metadata;
        if metadata.title.is_some() {
            card.add(10, "✓ Has page title");
        } else {
            card.note("✗ Missing page title");
        }
        if metadata.description.is_some() {
            card.add(10, "✓ Has meta description");
        } else {
            card.note("⚠ Missing meta description");
        }
        if metadata.has_favicon {
            card.add(5, "✓ Has favicon");
        }
        if metadata.has_og_image {
            card.add(5, "✓ Has social media image");
        }

        match signals.content.paragraph_count {
            n if n >= 5 => card.add(15, "✓ Substantial content provided"),
            n if n >= 2 => card.add(8, "⚠ Limited content"),
            _ => card.note("✗ Very little content - may seem incomplete"),
        }
        if signals.content.total_text_length > 500 {
            card.add(15, "✓ Adequate text content for credibility");
        } else {
            card.note("⚠ Sparse text content");
        }

        card.finish("A skeptical user looks for trust signals, contact information, and credibility")
    }

    fn content_quality_seeker(signals: &Signals, judgment: Option<&AiJudgment>) -> PersonaScore {
        let mut card = Card::default();

        let Some(judgment) = judgment.filter(|j| j.success) else {
            if signals.text_content.word_count > 300 {
                card.add(25, "✓ Has substantial content");
            }
            if signals.headings.total >= 3 {
                card.add(25, "✓ Well-structured with headings");
            }
            if signals.blog_features.has_blog {
                card.add(25, "✓ Has blog for ongoing content");
            }
            card.note("⚠ AI analysis not available - limited evaluation");

            let mut score = card.finish(
                "A content seeker who values readability, informativeness, and engaging writing",
            );
            score.ai_powered = Some(false);
            return score;
        };

        let tiers = [
            ContentTier {
                aspect: Aspect::Readability,
                points: [25, 18, 10],
                labels: ["Excellent readability", "Good readability", "Poor readability"],
                defaults: ["Clear and engaging", "Acceptable clarity", "Could be clearer"],
            },
            ContentTier {
                aspect: Aspect::Informativeness,
                points: [30, 20, 10],
                labels: ["Highly informative", "Moderately informative", "Low informativeness"],
                defaults: ["Rich content", "Adequate information", "Limited depth"],
            },
            ContentTier {
                aspect: Aspect::Engagement,
                points: [25, 18, 10],
                labels: ["Highly engaging", "Moderately engaging", "Not very engaging"],
                defaults: ["Captivating content", "Holds attention", "Could be more compelling"],
            },
            ContentTier {
                aspect: Aspect::Uniqueness,
                points: [20, 12, 5],
                labels: ["Unique content", "Somewhat unique", "Common content"],
                defaults: ["Distinctive value", "Some differentiation", "Similar to others"],
            },
        ];

        let mut judged = [Score::NEUTRAL; 4];
        for (slot, tier) in judged.iter_mut().zip(&tiers) {
            *slot = tier.apply(judgment, &mut card);
        }

        let mut score = card.finish(
            "A content seeker who values readability, informativeness, engaging writing, and unique information",
        );
        score.ai_powered = Some(true);
        score.ai_scores = Some(ContentAiScores {
            readability: judged[0],
            informativeness: judged[1],
            engagement: judged[2],
            uniqueness: judged[3],
        });
        score
    }

    fn ad_hater(signals: &Signals) -> PersonaScore {
        let mut card = Card::starting_at(i32::from(PERSONA_MAX_SCORE));
        let ads = &signals.ads_and_annoyances;

        if ads.likely_ad_iframes > 0 {
            let penalty = (ads.likely_ad_iframes.min(4) * 10) as i32;
            card.add(
                -penalty,
                format!(
                    "✗ {} ad iframe(s) detected (-{penalty} pts)",
                    ads.likely_ad_iframes
                ),
            );
        } else {
            card.note("✓ No obvious ad iframes detected");
        }

        if ads.has_autoplay_video {
            card.add(-20, "✗ Auto-play video detected (-20 pts)");
        } else {
            card.note("✓ No auto-play videos");
        }

        if ads.has_popups {
            card.add(-15, "✗ Popup/modal detected (-15 pts)");
        } else {
            card.note("✓ No popups detected");
        }

        if ads.has_cookie_banner {
            card.add(-5, "⚠ Cookie banner present (-5 pts)");
        }

        if ads.annoyance_score == 0 {
            card.note("✓ Clean, distraction-free experience!");
        }

        card.finish("An ad-hater who wants a clean, distraction-free browsing experience")
    }

    fn seo_optimizer(signals: &Signals, judgment: Option<&AiJudgment>) -> PersonaScore {
        let mut card = Card::default();
        let metadata = &signals.metadata;
        let seo = &signals.seo;

        if metadata.title.is_some() {
            card.add(10, "✓ Has page title");
        } else {
            card.note("✗ Missing page title");
        }
        if metadata.description.is_some() {
            card.add(10, "✓ Has meta description");
        } else {
            card.note("✗ Missing meta description");
        }
        if seo.has_meta_keywords {
            card.add(5, "✓ Has meta keywords");
        }
        if seo.has_viewport {
            card.add(5, "✓ Mobile-friendly viewport tag");
        } else {
            card.note("✗ Missing viewport tag");
        }

        let og = &seo.open_graph_tags;
        let og_points = [&og.og_title, &og.og_description, &og.og_image, &og.og_url]
            .iter()
            .filter(|tag| tag.is_some())
            .count() as i32
            * 5;
        if og_points >= 15 {
            card.add(og_points, "✓ Good Open Graph tags for social sharing");
        } else if og_points > 0 {
            card.add(og_points, "⚠ Partial Open Graph tags");
        } else {
            card.note("✗ Missing Open Graph tags");
        }

        if seo.has_structured_data {
            card.add(10, "✓ Has structured data (schema.org)");
        } else {
            card.note("⚠ No structured data detected");
        }
        if seo.has_canonical_url {
            card.add(5, "✓ Has canonical URL");
        }

        match signals.headings.h1.len() {
            1 => card.add(10, "✓ Exactly one H1 tag (SEO best practice)"),
            0 => card.note("✗ No H1 tag found"),
            _ => card.add(5, "⚠ Multiple H1 tags (not ideal for SEO)"),
        }
        if signals.headings.total >= 5 {
            card.add(5, "✓ Good heading hierarchy");
        }

        let successful = judgment.filter(|j| j.success);
        match successful.and_then(|j| j.aspect(Aspect::SeoQuality)) {
            Some(seo_quality) => {
                let value = seo_quality.score_or_neutral().value();
                let explanation = seo_quality.explanation.as_str();
                if value >= 8 {
                    card.add(20, format!("✓ Excellent SEO quality ({value}/10): {explanation}"));
                } else if value >= 6 {
                    card.add(12, format!("⚠ Good SEO quality ({value}/10): {explanation}"));
                } else {
                    card.add(5, format!("✗ Poor SEO quality ({value}/10): {explanation}"));
                }
            }
            None => card.note("⚠ AI keyword analysis not available"),
        }

        let mut score = card.finish(
            "An SEO optimizer who cares about search visibility and technical SEO best practices",
        );
        score.ai_powered = Some(successful.is_some());
        score
    }
}

/// Three-tier rule for one AI-judged aspect of content quality.
struct ContentTier {
    aspect: Aspect,
    /// Points for scores >= 8, >= 6 and below.
    points: [i32; 3],
    labels: [&'static str; 3],
    /// Explanations used when the model gave none.
    defaults: [&'static str; 3],
}

impl ContentTier {
    fn apply(&self, judgment: &AiJudgment, card: &mut Card) -> Score {
        let judged = judgment.aspect(self.aspect);
        let score = judged.map(|j| j.score_or_neutral()).unwrap_or(Score::NEUTRAL);
        let tier = match score.value() {
            8.. => 0,
            6..=7 => 1,
            _ => 2,
        };
        let marker = ["✓", "⚠", "✗"][tier];
        let explanation = judged
            .and_then(|j| j.explanation())
            .unwrap_or(self.defaults[tier]);

        card.add(
            self.points[tier],
            format!(
                "{marker} {} ({}/10): {explanation}",
                self.labels[tier],
                score.value()
            ),
        );
        score
    }
}
