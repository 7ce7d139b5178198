//! Scoring Module - Pure functions from signals and judgment to scores.
//!
//! # Components
//!
//! - `MainCriteriaScorer` - Six 0-10 criteria blending technical and AI scores
//! - `BehavioralDriverScorer` - Six drivers rated for three personas
//! - `PersonaScorer` - Five legacy personas on a 0-100 scale
//!
//! Scoring never fails. Missing inputs degrade to neutral values.

mod behavioral_drivers;
mod main_criteria;
mod personas;

use serde::{Deserialize, Serialize};

use crate::domain::judgment::AiJudgment;
use crate::domain::signals::Signals;

pub use behavioral_drivers::{
    weight_row, BehavioralDriverScorer, BehavioralDriverScores, DriverReport, DriverScore,
    TechnicalStrategy, WeightRow, DRIVER_WEIGHTS,
};
pub use main_criteria::{
    BlendWeights, Breakdown, CriterionAnalysis, CriterionScore, MainCriteriaScorer,
    MainCriteriaScores, MAX_BULLETS,
};
pub use personas::{ContentAiScores, PersonaScore, PersonaScorer, PersonaScores, PERSONA_MAX_SCORE};

/// Every score computed for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub main_criteria: MainCriteriaScores,
    pub behavioral_drivers: BehavioralDriverScores,
    pub personas: PersonaScores,
}

/// Runs all three scorers.
///
/// Driver technical scores are derived from the main criteria, so the
/// criteria are scored first.
pub fn score_page(signals: &Signals, judgment: &AiJudgment) -> Scorecard {
    let main_criteria = MainCriteriaScorer::score(signals, judgment);
    let behavioral_drivers =
        BehavioralDriverScorer::score(TechnicalStrategy::Weighted(&main_criteria), judgment);
    let personas = PersonaScorer::score(signals, Some(judgment));

    Scorecard {
        main_criteria,
        behavioral_drivers,
        personas,
    }
}
