//! Auxiliary readability and keyword metrics.

use serde::{Deserialize, Serialize};

/// Flesch Reading Ease window considered ideal for startup copy.
pub const OPTIMAL_READING_EASE: (f64, f64) = (60.0, 80.0);

/// Keyword density above which the top keyword is flagged as overused.
pub const OVERUSE_DENSITY_PERCENT: f64 = 3.0;

/// Target-keyword density window considered optimal, in percent.
pub const OPTIMAL_KEYWORD_DENSITY: (f64, f64) = (0.5, 2.5);

/// Qualitative reading difficulty derived from Flesch Reading Ease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    #[serde(rename = "Easy")]
    Easy,
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    #[serde(rename = "Difficult")]
    Difficult,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl Difficulty {
    /// Classifies a Flesch Reading Ease value.
    pub fn from_reading_ease(ease: f64) -> Self {
        if ease >= 80.0 {
            Difficulty::VeryEasy
        } else if ease >= 60.0 {
            Difficulty::Easy
        } else if ease >= 50.0 {
            Difficulty::FairlyDifficult
        } else if ease >= 30.0 {
            Difficulty::Difficult
        } else {
            Difficulty::VeryDifficult
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "Very Easy",
            Difficulty::Easy => "Easy",
            Difficulty::FairlyDifficult => "Fairly Difficult",
            Difficulty::Difficult => "Difficult",
            Difficulty::VeryDifficult => "Very Difficult",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "Perfect for general audience",
            Difficulty::Easy => "Good for most readers",
            Difficulty::FairlyDifficult => "Requires some concentration",
            Difficulty::Difficult => "Consider simplifying language",
            Difficulty::VeryDifficult => "Too complex - simplify significantly",
        }
    }
}

/// Maps Flesch Reading Ease onto the 0-10 readability scale.
///
/// The 60-80 window scores highest; easier text is penalized less than
/// harder text.
pub fn readability_score_for(ease: f64) -> u8 {
    if (60.0..=80.0).contains(&ease) {
        10
    } else if (50.0..60.0).contains(&ease) || (ease > 80.0 && ease <= 90.0) {
        8
    } else if (40.0..50.0).contains(&ease) {
        6
    } else if ease > 90.0 && ease <= 100.0 {
        7
    } else if (30.0..40.0).contains(&ease) {
        4
    } else {
        2
    }
}

/// Whether a reading-ease value falls in the optimal window.
pub fn is_optimal_reading_ease(ease: f64) -> bool {
    ease >= OPTIMAL_READING_EASE.0 && ease <= OPTIMAL_READING_EASE.1
}

/// Readability metrics for a page's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityMetrics {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub difficulty: Difficulty,
    pub recommendation: String,
    /// 0-10 readability score; takes precedence over the AI readability score.
    pub readability_score: u8,
    pub sentence_count: usize,
    pub word_count: usize,
    pub is_optimal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDensity {
    pub keyword: String,
    pub count: usize,
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetKeyword {
    pub keyword: String,
    pub count: usize,
    pub density: f64,
    pub is_optimal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStatistics {
    pub total_words: usize,
    pub unique_words: usize,
    /// Unique words as a percentage of total words.
    pub vocabulary_richness: f64,
}

/// Keyword frequency and density for a page's text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMetrics {
    pub top_keywords: Vec<KeywordDensity>,
    #[serde(default)]
    pub target_keywords: Vec<TargetKeyword>,
    pub statistics: KeywordStatistics,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Everything the auxiliary text-metrics calls produced. Either half may be
/// absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextMetrics {
    pub readability: Option<ReadabilityMetrics>,
    pub keywords: Option<KeywordMetrics>,
}

impl TextMetrics {
    pub fn new(readability: Option<ReadabilityMetrics>, keywords: Option<KeywordMetrics>) -> Self {
        Self {
            readability,
            keywords,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.readability.is_none() && self.keywords.is_none()
    }
}
