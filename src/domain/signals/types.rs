//! The signal bundle produced for one analyzed page.

use serde::{Deserialize, Serialize};

/// Every structural and textual fact extracted from a page.
///
/// Created once per analysis and only ever modified through
/// [`Signals::with_https`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signals {
    pub headings: Headings,
    pub ctas: Ctas,
    pub contact_info: ContactInfo,
    pub content: ContentStats,
    pub metadata: Metadata,
    pub social_media: SocialMedia,
    pub trust_signals: TrustSignals,
    pub startup_signals: StartupSignals,
    pub ads_and_annoyances: AdsAndAnnoyances,
    pub seo: Seo,
    pub blog_features: BlogFeatures,
    pub text_content: TextContent,
    pub global_reach: GlobalReach,
}

impl Signals {
    /// Returns the bundle with the https flag taken from the final,
    /// post-redirect URL scheme.
    pub fn with_https(mut self, https: bool) -> Self {
        self.trust_signals.has_https = https;
        self
    }
}

/// Non-empty heading texts per level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub total: usize,
}

/// Call-to-action elements: the first ten plus the uncapped total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ctas {
    pub count: usize,
    pub items: Vec<Cta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    pub text: String,
    /// Tag name of the element (`button`, `a`, `input`).
    #[serde(rename = "type")]
    pub kind: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_address: bool,
    pub has_contact_form: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStats {
    pub paragraph_count: usize,
    pub image_count: usize,
    pub link_count: usize,
    /// Sum of trimmed paragraph text lengths, in characters.
    pub total_text_length: usize,
    pub has_video: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub has_og_image: bool,
    pub has_favicon: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub platforms: SocialPlatforms,
    pub total_platforms: usize,
    pub has_social_share_buttons: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPlatforms {
    pub facebook: bool,
    pub twitter: bool,
    pub linkedin: bool,
    pub instagram: bool,
    pub youtube: bool,
    pub tiktok: bool,
}

impl SocialPlatforms {
    /// Number of platforms linked from the page.
    pub fn linked_count(&self) -> usize {
        [
            self.facebook,
            self.twitter,
            self.linkedin,
            self.instagram,
            self.youtube,
            self.tiktok,
        ]
        .iter()
        .filter(|linked| **linked)
        .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustSignals {
    pub has_https: bool,
    pub has_privacy_policy: bool,
    pub has_terms_of_service: bool,
    pub has_cookie_consent: bool,
    pub has_security_badges: bool,
    pub has_money_back_guarantee: bool,
    pub has_testimonials: bool,
    pub has_customer_count: bool,
    pub has_trust_badges: bool,
}

/// Startup-specific cues: pricing, trials, proof, product and company info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupSignals {
    pub has_pricing: bool,
    pub pricing_page_link: Option<String>,
    pub pricing_visible: bool,

    pub has_free_trial: bool,
    pub trial_length: Option<u32>,
    pub has_demo: bool,
    pub has_demo_video: bool,

    pub has_customer_logos: bool,
    pub customer_logo_count: usize,
    pub has_brand_names: bool,
    pub has_media_mentions: bool,
    /// Number of distinct press keywords present, not occurrences.
    pub media_count: usize,
    pub has_awards: bool,
    pub has_metrics: bool,
    pub metrics: Vec<String>,

    pub has_screenshot: bool,
    pub has_feature_list: bool,
    pub feature_list_count: usize,
    pub has_use_cases: bool,
    pub use_case_matches: Vec<String>,
    pub has_comparison_table: bool,

    pub has_team_section: bool,
    pub has_founder_info: bool,
    pub has_funding_info: bool,

    pub has_chat_widget: bool,
    pub has_jobs_page: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdsAndAnnoyances {
    pub iframe_count: usize,
    pub likely_ad_iframes: usize,
    pub has_popups: bool,
    pub has_autoplay_video: bool,
    pub has_cookie_banner: bool,
    pub annoyance_score: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub has_meta_keywords: bool,
    pub meta_keywords: Option<String>,
    pub has_canonical_url: bool,
    pub canonical_url: Option<String>,
    pub has_structured_data: bool,
    pub open_graph_tags: OpenGraphTags,
    pub has_twitter_card: bool,
    pub has_viewport: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphTags {
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_url: Option<String>,
}

impl OpenGraphTags {
    /// Whether at least one Open Graph tag carries a value.
    pub fn any(&self) -> bool {
        self.og_title.is_some()
            || self.og_description.is_some()
            || self.og_image.is_some()
            || self.og_url.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFeatures {
    pub has_blog: bool,
    pub has_search: bool,
    pub has_categories: bool,
    pub has_tags: bool,
    pub has_comments: bool,
    pub post_count: usize,
    pub recent_post_titles: Vec<String>,
}

/// Text excerpts handed to the AI judgment and text-metrics calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    /// Whitespace-collapsed body text, at most 5000 characters.
    pub full_text: String,
    /// First paragraph longer than 50 characters, at most 500 characters.
    pub value_proposition: String,
    /// Up to ten heading texts joined with `" | "`.
    pub headings_summary: String,
    pub word_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalReach {
    pub has_language_selector: bool,
    pub language_selector_count: usize,
    pub has_hreflang_tags: bool,
    pub hreflang_count: usize,
    pub has_currency_switcher: bool,
    pub has_international_shipping: bool,
    pub mentions_time_zones: bool,
    pub has_global_payment_methods: bool,
    /// Language codes from hreflang tags, `x-default` excluded.
    pub languages: Vec<String>,
    pub currencies: Vec<String>,
}
