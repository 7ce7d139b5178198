//! Behavioral drivers and the personas they are scored for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A psychological purchase-decision driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BehavioralDriver {
    Impatient,
    Skeptical,
    Analytical,
    Indecisive,
    CognitiveEase,
    ValueSeeking,
}

impl BehavioralDriver {
    pub const ALL: [BehavioralDriver; 6] = [
        BehavioralDriver::Impatient,
        BehavioralDriver::Skeptical,
        BehavioralDriver::Analytical,
        BehavioralDriver::Indecisive,
        BehavioralDriver::CognitiveEase,
        BehavioralDriver::ValueSeeking,
    ];

    /// Key used in serialized reports and model replies.
    pub fn key(&self) -> &'static str {
        match self {
            BehavioralDriver::Impatient => "impatient",
            BehavioralDriver::Skeptical => "skeptical",
            BehavioralDriver::Analytical => "analytical",
            BehavioralDriver::Indecisive => "indecisive",
            BehavioralDriver::CognitiveEase => "cognitiveEase",
            BehavioralDriver::ValueSeeking => "valueSeeking",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BehavioralDriver::Impatient => "Impatient",
            BehavioralDriver::Skeptical => "Skeptical",
            BehavioralDriver::Analytical => "Analytical",
            BehavioralDriver::Indecisive => "Indecisive",
            BehavioralDriver::CognitiveEase => "Cognitive-Ease",
            BehavioralDriver::ValueSeeking => "Value-Seeking",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BehavioralDriver::Impatient => "Wants immediate value and quick decisions",
            BehavioralDriver::Skeptical => "Needs proof and credibility before trusting",
            BehavioralDriver::Analytical => "Wants detailed data and thorough information",
            BehavioralDriver::Indecisive => "Needs guidance and low-risk options",
            BehavioralDriver::CognitiveEase => "Prefers simplicity and clarity",
            BehavioralDriver::ValueSeeking => "Focused on ROI and tangible benefits",
        }
    }
}

impl fmt::Display for BehavioralDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Viewpoint a behavioral driver is scored from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverPersona {
    User,
    Buyer,
    Investor,
}

impl DriverPersona {
    pub const ALL: [DriverPersona; 3] = [
        DriverPersona::User,
        DriverPersona::Buyer,
        DriverPersona::Investor,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DriverPersona::User => "user",
            DriverPersona::Buyer => "buyer",
            DriverPersona::Investor => "investor",
        }
    }
}

impl fmt::Display for DriverPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_keys_match_serde_names() {
        for driver in BehavioralDriver::ALL {
            let json = serde_json::to_string(&driver).unwrap();
            assert_eq!(json, format!("\"{}\"", driver.key()));
        }
    }

    #[test]
    fn persona_keys_match_serde_names() {
        for persona in DriverPersona::ALL {
            let json = serde_json::to_string(&persona).unwrap();
            assert_eq!(json, format!("\"{}\"", persona.key()));
        }
    }

    #[test]
    fn cognitive_ease_has_hyphenated_name() {
        assert_eq!(BehavioralDriver::CognitiveEase.name(), "Cognitive-Ease");
        assert_eq!(BehavioralDriver::CognitiveEase.key(), "cognitiveEase");
    }
}
