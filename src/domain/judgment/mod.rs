//! Judgment Module - AI assessment and auxiliary text metrics.
//!
//! The judgment is read-only input to the scorers. The only permitted
//! change after construction is [`AiJudgment::enrich`], which returns a new
//! value carrying auxiliary readability and keyword metrics.

mod ai_judgment;
mod text_metrics;

pub use ai_judgment::{AiJudgment, Aspect, CriterionJudgment, DriverJudgments, DriverPersonaJudgment};
pub use text_metrics::{
    is_optimal_reading_ease, readability_score_for, Difficulty, KeywordDensity, KeywordMetrics,
    KeywordStatistics, ReadabilityMetrics, TargetKeyword, TextMetrics, OPTIMAL_KEYWORD_DENSITY,
    OPTIMAL_READING_EASE, OVERUSE_DENSITY_PERCENT,
};
