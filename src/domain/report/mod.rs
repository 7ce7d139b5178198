//! Report Module - The aggregate analysis result returned to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::judgment::AiJudgment;
use crate::domain::scoring::{BehavioralDriverScores, MainCriteriaScores, PersonaScores, Scorecard};
use crate::domain::signals::Signals;

/// Everything known about one analyzed page.
///
/// Serializes directly to the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Final URL after redirects.
    pub url: String,
    pub status_code: u16,
    pub analyzed_at: DateTime<Utc>,
    pub main_criteria: MainCriteriaScores,
    pub behavioral_drivers: BehavioralDriverScores,
    pub signals: Signals,
    pub ai_analysis: AiJudgment,
    pub personas: PersonaScores,
}

impl AnalysisReport {
    pub fn assemble(
        url: impl Into<String>,
        status_code: u16,
        analyzed_at: DateTime<Utc>,
        signals: Signals,
        ai_analysis: AiJudgment,
        scorecard: Scorecard,
    ) -> Self {
        let Scorecard {
            main_criteria,
            behavioral_drivers,
            personas,
        } = scorecard;

        Self {
            url: url.into(),
            status_code,
            analyzed_at,
            main_criteria,
            behavioral_drivers,
            signals,
            ai_analysis,
            personas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::score_page;

    #[test]
    fn report_serializes_with_camel_case_top_level_keys() {
        let signals = Signals::default();
        let judgment = AiJudgment::fallback();
        let scorecard = score_page(&signals, &judgment);
        let report = AnalysisReport::assemble(
            "https://example.com/",
            200,
            Utc::now(),
            signals,
            judgment,
            scorecard,
        );

        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "url",
            "statusCode",
            "analyzedAt",
            "mainCriteria",
            "behavioralDrivers",
            "signals",
            "aiAnalysis",
            "personas",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["mainCriteria"]["valueProposition"]["score"], 3);
        assert_eq!(json["behavioralDrivers"]["cognitiveEase"]["name"], "Cognitive-Ease");
        assert_eq!(json["personas"]["adHater"]["maxScore"], 100);
        assert_eq!(json["aiAnalysis"]["success"], false);
    }
}
