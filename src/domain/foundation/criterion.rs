//! The six main quality criteria.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level quality dimension of a landing page.
///
/// Declaration order is the column order of the behavioral-driver weight
/// matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    ValueProposition,
    CtaStrength,
    SocialProof,
    VisualReadability,
    SeoDiscoverability,
    GlobalReach,
}

impl Criterion {
    /// All criteria in weight-matrix column order.
    pub const ALL: [Criterion; 6] = [
        Criterion::ValueProposition,
        Criterion::CtaStrength,
        Criterion::SocialProof,
        Criterion::VisualReadability,
        Criterion::SeoDiscoverability,
        Criterion::GlobalReach,
    ];

    /// Column index in the weight matrix.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Key used in serialized reports.
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::ValueProposition => "valueProposition",
            Criterion::CtaStrength => "ctaStrength",
            Criterion::SocialProof => "socialProof",
            Criterion::VisualReadability => "visualReadability",
            Criterion::SeoDiscoverability => "seoDiscoverability",
            Criterion::GlobalReach => "globalReach",
        }
    }

    /// Returns the display label for this criterion.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::ValueProposition => "Value Proposition Clarity",
            Criterion::CtaStrength => "CTA Strength & Placement",
            Criterion::SocialProof => "Social Proof & Trust",
            Criterion::VisualReadability => "Visual Legibility & Readability",
            Criterion::SeoDiscoverability => "SEO & Discoverability",
            Criterion::GlobalReach => "Global Reach & Accessibility",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
