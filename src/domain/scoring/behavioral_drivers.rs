//! Behavioral Driver Scorer - 6 drivers x 3 personas.
//!
//! The technical half of each score comes from one of two strategies:
//! a weighted sum of the main-criteria scores (preferred) or additive rules
//! over raw signals (used when main criteria are unavailable). The AI half
//! is the model's per-driver-per-persona score, neutral when absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::main_criteria::{Breakdown, MainCriteriaScores};
use crate::domain::foundation::{BehavioralDriver, DriverPersona, Score};
use crate::domain::judgment::AiJudgment;
use crate::domain::signals::Signals;

/// Weights over the six main criteria, in [`Criterion::ALL`] order.
///
/// [`Criterion::ALL`]: crate::domain::foundation::Criterion::ALL
pub type WeightRow = [f64; 6];

/// Weight rows indexed by `[driver][persona]`. Every row sums to 1.0.
pub const DRIVER_WEIGHTS: [[WeightRow; 3]; 6] = [
    // Impatient
    [
        [0.25, 0.50, 0.05, 0.20, 0.00, 0.00],
        [0.30, 0.40, 0.10, 0.20, 0.00, 0.00],
        [0.40, 0.30, 0.10, 0.10, 0.10, 0.00],
    ],
    // Skeptical
    [
        [0.10, 0.05, 0.60, 0.10, 0.05, 0.10],
        [0.10, 0.05, 0.65, 0.05, 0.05, 0.10],
        [0.15, 0.00, 0.55, 0.05, 0.15, 0.10],
    ],
    // Analytical
    [
        [0.30, 0.05, 0.15, 0.30, 0.15, 0.05],
        [0.35, 0.05, 0.20, 0.20, 0.10, 0.10],
        [0.30, 0.00, 0.20, 0.10, 0.25, 0.15],
    ],
    // Indecisive
    [
        [0.20, 0.35, 0.30, 0.15, 0.00, 0.00],
        [0.20, 0.30, 0.35, 0.10, 0.00, 0.05],
        [0.25, 0.15, 0.40, 0.05, 0.05, 0.10],
    ],
    // Cognitive-Ease
    [
        [0.25, 0.15, 0.05, 0.50, 0.05, 0.00],
        [0.30, 0.15, 0.05, 0.45, 0.05, 0.00],
        [0.35, 0.10, 0.05, 0.40, 0.10, 0.00],
    ],
    // Value-Seeking
    [
        [0.45, 0.15, 0.25, 0.05, 0.05, 0.05],
        [0.45, 0.10, 0.30, 0.05, 0.00, 0.10],
        [0.35, 0.05, 0.25, 0.00, 0.15, 0.20],
    ],
];

/// The weight row for one driver and persona.
pub fn weight_row(driver: BehavioralDriver, persona: DriverPersona) -> &'static WeightRow {
    &DRIVER_WEIGHTS[driver as usize][persona as usize]
}

/// Where the technical half of a driver score comes from.
#[derive(Debug, Clone, Copy)]
pub enum TechnicalStrategy<'a> {
    /// Weighted sum of the main-criteria scores.
    Weighted(&'a MainCriteriaScores),
    /// Driver-specific additive rules over raw signals, starting from 5.
    Fallback(&'a Signals),
}

impl TechnicalStrategy<'_> {
    /// Technical score on the 0-10 scale.
    pub fn technical(&self, driver: BehavioralDriver, persona: DriverPersona) -> Score {
        match self {
            TechnicalStrategy::Weighted(criteria) => weighted_technical(criteria, driver, persona),
            TechnicalStrategy::Fallback(signals) => fallback_technical(signals, driver),
        }
    }
}

fn weighted_technical(
    criteria: &MainCriteriaScores,
    driver: BehavioralDriver,
    persona: DriverPersona,
) -> Score {
    let total: f64 = weight_row(driver, persona)
        .iter()
        .zip(criteria.score_vector())
        .map(|(weight, score)| weight * score.as_f64())
        .sum();
    Score::from_f64(total)
}

/// Signal rules per driver. The persona does not change the outcome.
fn fallback_technical(signals: &Signals, driver: BehavioralDriver) -> Score {
    let startup = &signals.startup_signals;
    let trust = &signals.trust_signals;
    let paragraphs = signals.content.paragraph_count;
    let ctas = signals.ctas.count;

    let points: &[(bool, u8)] = &match driver {
        BehavioralDriver::Impatient => [
            (startup.has_pricing, 1),
            (startup.pricing_visible, 1),
            (startup.has_free_trial, 1),
            (ctas > 5, 1),
            (paragraphs < 20, 1),
        ],
        BehavioralDriver::Skeptical => [
            (trust.has_testimonials, 1),
            (startup.customer_logo_count > 3, 1),
            (startup.has_media_mentions, 1),
            (trust.has_https, 1),
            (trust.has_privacy_policy, 1),
        ],
        BehavioralDriver::Analytical => [
            (startup.has_feature_list, 1),
            (startup.has_comparison_table, 1),
            (signals.seo.has_structured_data, 1),
            (paragraphs > 15, 1),
            (startup.has_demo, 1),
        ],
        BehavioralDriver::Indecisive => [
            (startup.has_free_trial, 2),
            (trust.has_money_back_guarantee, 2),
            (startup.has_demo || startup.has_demo_video, 1),
            (startup.customer_logo_count > 0, 1),
            (false, 0),
        ],
        BehavioralDriver::CognitiveEase => [
            (signals.headings.h1.len() == 1, 1),
            (paragraphs < 25, 1),
            (signals.headings.total < 30, 1),
            (ctas > 0 && ctas < 8, 1),
            (!signals.ads_and_annoyances.has_popups, 1),
        ],
        BehavioralDriver::ValueSeeking => [
            (startup.has_pricing, 1),
            (startup.has_metrics, 1),
            (startup.has_use_cases, 1),
            (startup.has_customer_logos, 1),
            (startup.has_media_mentions, 1),
        ],
    };

    let earned: u8 = points
        .iter()
        .filter(|(holds, _)| *holds)
        .map(|(_, points)| points)
        .sum();
    Score::new(Score::NEUTRAL.value() + earned)
}

/// One driver scored from one persona's viewpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverScore {
    pub score: Score,
    pub breakdown: Breakdown,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// One driver across all three personas, with its static metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverReport {
    pub name: String,
    pub description: String,
    pub user: DriverScore,
    pub buyer: DriverScore,
    pub investor: DriverScore,
}

impl DriverReport {
    pub fn persona(&self, persona: DriverPersona) -> &DriverScore {
        match persona {
            DriverPersona::User => &self.user,
            DriverPersona::Buyer => &self.buyer,
            DriverPersona::Investor => &self.investor,
        }
    }
}

/// All 18 driver scores, keyed by driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BehavioralDriverScores(BTreeMap<BehavioralDriver, DriverReport>);

impl BehavioralDriverScores {
    pub fn driver(&self, driver: BehavioralDriver) -> Option<&DriverReport> {
        self.0.get(&driver)
    }

    pub fn get(&self, driver: BehavioralDriver, persona: DriverPersona) -> Option<&DriverScore> {
        self.driver(driver).map(|report| report.persona(persona))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BehavioralDriver, &DriverReport)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Stateless scorer for behavioral drivers.
pub struct BehavioralDriverScorer;

impl BehavioralDriverScorer {
    /// Scores every driver for every persona.
    pub fn score(strategy: TechnicalStrategy<'_>, judgment: &AiJudgment) -> BehavioralDriverScores {
        let drivers = BehavioralDriver::ALL
            .into_iter()
            .map(|driver| {
                let persona = |p| Self::score_one(&strategy, judgment, driver, p);
                let report = DriverReport {
                    name: driver.name().to_string(),
                    description: driver.description().to_string(),
                    user: persona(DriverPersona::User),
                    buyer: persona(DriverPersona::Buyer),
                    investor: persona(DriverPersona::Investor),
                };
                (driver, report)
            })
            .collect();
        BehavioralDriverScores(drivers)
    }

    /// `round((technical + ai) / 2)`, clamped to 0-10.
    pub fn combine(technical: Score, ai: Score) -> Score {
        Score::from_f64((technical.as_f64() + ai.as_f64()) / 2.0)
    }

    fn score_one(
        strategy: &TechnicalStrategy<'_>,
        judgment: &AiJudgment,
        driver: BehavioralDriver,
        persona: DriverPersona,
    ) -> DriverScore {
        let technical = strategy.technical(driver, persona);
        let ai = judgment.driver_score(driver, persona);
        let (strengths, weaknesses) = judgment
            .driver(driver, persona)
            .map(|j| (j.strengths.clone(), j.weaknesses.clone()))
            .unwrap_or_default();

        DriverScore {
            score: Self::combine(technical, ai),
            breakdown: Breakdown { technical, ai },
            strengths,
            weaknesses,
        }
    }
}
