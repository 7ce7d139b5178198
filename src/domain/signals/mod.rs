//! Signals Module - Structural and textual facts extracted from a page.
//!
//! Every sub-extractor is a pure function of the parsed [`Document`]: no
//! network access, no randomness. Pattern detectors run against the body
//! text and are satisfied by the first match.
//!
//! # Components
//!
//! - `Document` - Parsed HTML with selector helpers
//! - `Signals` - The per-page bundle and its sub-groups
//! - `SignalExtractor` - Runs every sub-extractor and assembles the bundle

mod document;
mod global_reach;
mod startup;
mod structure;
mod types;

pub use document::Document;
pub use structure::{FULL_TEXT_LIMIT, MAX_CTA_ITEMS, VALUE_PROPOSITION_LIMIT};
pub use types::{
    AdsAndAnnoyances, BlogFeatures, ContactInfo, ContentStats, Cta, Ctas, GlobalReach, Headings,
    Metadata, OpenGraphTags, Seo, Signals, SocialMedia, SocialPlatforms, StartupSignals,
    TextContent, TrustSignals,
};

/// Extracts the full [`Signals`] bundle from a document.
pub struct SignalExtractor;

impl SignalExtractor {
    /// Runs every sub-extractor against `doc`.
    pub fn extract(doc: &Document) -> Signals {
        Signals {
            headings: structure::extract_headings(doc),
            ctas: structure::extract_ctas(doc),
            contact_info: structure::extract_contact_info(doc),
            content: structure::extract_content(doc),
            metadata: structure::extract_metadata(doc),
            social_media: structure::extract_social_media(doc),
            trust_signals: structure::extract_trust_signals(doc),
            startup_signals: startup::extract_startup_signals(doc),
            ads_and_annoyances: structure::extract_ads_and_annoyances(doc),
            seo: structure::extract_seo(doc),
            blog_features: structure::extract_blog_features(doc),
            text_content: structure::extract_text_content(doc),
            global_reach: global_reach::extract_global_reach(doc),
        }
    }

    /// Parses `html` and extracts its signals.
    ///
    /// The parsed tree is dropped before returning, so callers in async
    /// code never hold it across an await point.
    pub fn extract_html(html: &str) -> Signals {
        Self::extract(&Document::parse(html))
    }
}
