//! In-process readability and keyword analysis.
//!
//! Reading ease uses the Flesch formulas with a vowel-group syllable count.
//! Keyword density counts lower-cased words of three or more letters, minus
//! a fixed stop-word list.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::domain::judgment::{
    is_optimal_reading_ease, readability_score_for, Difficulty, KeywordDensity, KeywordMetrics,
    KeywordStatistics, ReadabilityMetrics, TargetKeyword, OPTIMAL_KEYWORD_DENSITY,
    OVERUSE_DENSITY_PERCENT,
};
use crate::ports::TextMetricsService;

/// Shortest text worth a readability estimate.
pub const MIN_READABILITY_CHARS: usize = 50;

const TOP_KEYWORDS_COUNTED: usize = 20;
const TOP_KEYWORDS_RETURNED: usize = 10;

static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("valid regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
        "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
        "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
        "is",
    ]
    .into_iter()
    .collect()
});

/// Text metrics computed locally, without a remote service.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTextAnalyzer;

impl LocalTextAnalyzer {
    pub fn readability_of(text: &str) -> Option<ReadabilityMetrics> {
        if text.chars().count() < MIN_READABILITY_CHARS {
            return None;
        }

        let sentence_count = SENTENCE_SPLIT_RE
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count();
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() || sentence_count == 0 {
            return None;
        }

        let word_count = words.len() as f64;
        let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();
        let words_per_sentence = word_count / sentence_count as f64;
        let syllables_per_word = syllables as f64 / word_count;

        let reading_ease = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
        let grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;
        let letters: usize = words.iter().map(|w| w.chars().count()).sum();
        let difficulty = Difficulty::from_reading_ease(reading_ease);

        Some(ReadabilityMetrics {
            flesch_reading_ease: round_to(reading_ease, 1),
            flesch_kincaid_grade: round_to(grade, 1),
            avg_sentence_length: round_to(words_per_sentence, 1),
            avg_word_length: round_to(letters as f64 / word_count, 1),
            difficulty,
            recommendation: difficulty.recommendation().to_string(),
            readability_score: readability_score_for(reading_ease),
            sentence_count,
            word_count: words.len(),
            is_optimal: is_optimal_reading_ease(reading_ease),
        })
    }

    pub fn keywords_of(text: &str, target_keywords: &[String]) -> Option<KeywordMetrics> {
        if text.is_empty() {
            return None;
        }
        let lowered = text.to_lowercase();

        let words: Vec<&str> = KEYWORD_RE
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|w| !STOP_WORDS.contains(w))
            .collect();
        let total_words = words.len();

        // First-seen order breaks count ties.
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &word in &words {
            let count = counts.entry(word).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }
        let mut ranked: Vec<(&str, usize)> = order.iter().map(|w| (*w, counts[w])).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(TOP_KEYWORDS_COUNTED);

        let density = |count: usize| {
            if total_words > 0 {
                round_to(count as f64 / total_words as f64 * 100.0, 2)
            } else {
                0.0
            }
        };

        let top_keywords: Vec<KeywordDensity> = ranked
            .iter()
            .map(|(word, count)| KeywordDensity {
                keyword: word.to_string(),
                count: *count,
                density: density(*count),
            })
            .collect();

        let target_keywords = target_keywords
            .iter()
            .map(|keyword| {
                let count = lowered.matches(keyword.to_lowercase().as_str()).count();
                let density = density(count);
                TargetKeyword {
                    keyword: keyword.clone(),
                    count,
                    density,
                    is_optimal: density >= OPTIMAL_KEYWORD_DENSITY.0
                        && density <= OPTIMAL_KEYWORD_DENSITY.1,
                }
            })
            .collect();

        let recommendations = match top_keywords.first() {
            None => vec!["Add more descriptive content".to_string()],
            Some(top) if top.density > OVERUSE_DENSITY_PERCENT => vec![format!(
                "Keyword '{}' may be overused (density: {}%)",
                top.keyword, top.density
            )],
            Some(_) => Vec::new(),
        };

        let unique_words = counts.len();
        Some(KeywordMetrics {
            top_keywords: top_keywords
                .into_iter()
                .take(TOP_KEYWORDS_RETURNED)
                .collect(),
            target_keywords,
            statistics: KeywordStatistics {
                total_words,
                unique_words,
                vocabulary_richness: if total_words > 0 {
                    round_to(unique_words as f64 / total_words as f64 * 100.0, 1)
                } else {
                    0.0
                },
            },
            recommendations,
        })
    }
}

#[async_trait]
impl TextMetricsService for LocalTextAnalyzer {
    async fn readability(&self, text: &str) -> Option<ReadabilityMetrics> {
        Self::readability_of(text)
    }

    async fn keywords(&self, text: &str, target_keywords: &[String]) -> Option<KeywordMetrics> {
        Self::keywords_of(text, target_keywords)
    }

    async fn is_available(&self) -> bool {
        true
    }
}

/// Vowel groups in the word, ignoring a trailing silent `e`; at least one
/// for any word containing a letter.
fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    let silent_e = n > 2 && letters[n - 1] == 'e' && !is_vowel(letters[n - 2]) && letters[n - 2] != 'l';
    if silent_e && groups > 1 {
        groups -= 1;
    }
    groups.max(1)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
