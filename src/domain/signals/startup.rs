//! Startup-specific signals: pricing, trials, social proof, product and team.

use once_cell::sync::Lazy;
use regex::Regex;

use super::document::{element_text, Document};
use super::types::StartupSignals;

const LOGO_SELECTORS: &[&str] = &[
    r#"[class*="customer-logo"]"#,
    r#"[class*="client-logo"]"#,
    r#"[class*="trusted-by"]"#,
    r#"[class*="used-by"]"#,
    r#"[alt*="logo"]"#,
];

const MEDIA_KEYWORDS: &[&str] = &[
    "techcrunch",
    "forbes",
    "wired",
    "venturebeat",
    "mashable",
    "the verge",
    "business insider",
    "wall street journal",
    "nytimes",
    "featured in",
    "as seen in",
    "press",
    "coverage",
];

const PRODUCT_IMAGE_SELECTORS: &[&str] = &[
    r#"[alt*="screenshot"]"#,
    r#"[alt*="dashboard"]"#,
    r#"[alt*="interface"]"#,
    r#"[class*="product-image"]"#,
    r#"[class*="app-screenshot"]"#,
];

const USE_CASE_KEYWORDS: &[&str] = &[
    "for developers",
    "for marketers",
    "for designers",
    "for teams",
    "for startups",
    "for enterprise",
    "for agencies",
    "for freelancers",
    "use case",
    "perfect for",
    "ideal for",
    "built for",
];

const CHAT_WIDGET_SELECTORS: &[&str] = &[
    r#"[class*="intercom"]"#,
    r#"[id*="intercom"]"#,
    r#"[class*="drift"]"#,
    r#"[class*="crisp"]"#,
    r#"[class*="tawk"]"#,
    r#"iframe[src*="intercom"]"#,
    r#"iframe[src*="drift"]"#,
];

/// A page needs at least this many logo matches to claim customer logos.
const MIN_CUSTOMER_LOGOS: usize = 3;

/// A page needs more list items than this to claim a feature list.
const FEATURE_LIST_MIN_ITEMS: usize = 5;

const PRICING_LINKS: &str = r#"a[href*="pricing"], a[href*="plans"]"#;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

static PRICING_RE: Lazy<Regex> = Lazy::new(|| re(r"(?i)pricing|plans|subscribe"));
static PRICE_VISIBLE_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)\$\d+|€\d+|£\d+|free|month|year|annual"));
static FREE_TRIAL_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)free\s+trial|try\s+free|14[\s-]day|30[\s-]day|no\s+credit\s+card"));
static DEMO_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)book\s+demo|schedule\s+demo|request\s+demo|watch\s+demo"));
static TRIAL_LENGTH_RE: Lazy<Regex> = Lazy::new(|| re(r"(?i)(\d+)[\s-]day[\s-]trial"));
static BRAND_CONTEXT_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)trusted\s+by|used\s+by|powering|customers\s+include"));
static BRAND_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)google|amazon|microsoft|apple|facebook|netflix|spotify|uber|airbnb")
});
static FEATURE_WORDS_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)feature|benefit|included|what you get"));
static TEAM_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)our\s+team|meet\s+the\s+team|about\s+us|founded\s+by"));
static FOUNDER_RE: Lazy<Regex> = Lazy::new(|| re(r"(?i)founder|ceo|co-founder"));
static FUNDING_RE: Lazy<Regex> = Lazy::new(|| {
    re(r"(?i)backed\s+by|funded\s+by|investors?|series\s+[a-z]|venture|y\s+combinator|ycombinator|500\s+startups|andreessen|sequoia")
});
static AWARDS_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)winner|award|recognition|product\s+hunt|#1\s+on|top\s+\d+"));
static HIRING_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)we're\s+hiring|join\s+our\s+team|open\s+positions"));
static METRIC_RES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        re(r"(?i)(\d+[,.]?\d*[kmb]?\+?)\s*(users|customers|companies|downloads)"),
        re(r"(?i)(\d+[,.]?\d*)\s*%\s*(faster|more|increase|growth)"),
        re(r"(?i)(\d+[,.]?\d*[kmb]?)\s*\+?\s*(reviews|ratings|stars)"),
    ]
});
static COMPARISON_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)vs\s+\w+|compare|alternative\s+to|better\s+than"));
static COMPETITOR_RE: Lazy<Regex> =
    Lazy::new(|| re(r"(?i)competitor|alternative|comparison"));

pub fn extract_startup_signals(doc: &Document) -> StartupSignals {
    let text = doc.body_text().to_lowercase();
    let markup = doc.body_html().to_lowercase();

    let has_pricing = doc.exists(PRICING_LINKS) || PRICING_RE.is_match(&text);
    let pricing_page_link = doc.first_attr(PRICING_LINKS, "href");
    let pricing_visible =
        PRICE_VISIBLE_RE.is_match(&doc.text_of(r#"main, .pricing, [class*="price"]"#));

    let has_free_trial = FREE_TRIAL_RE.is_match(&text);
    let demo_button = doc
        .select("button")
        .iter()
        .any(|button| element_text(button).contains("demo"));
    let has_demo = doc.exists(r#"a[href*="demo"]"#) || demo_button || DEMO_RE.is_match(&text);
    let trial_length = TRIAL_LENGTH_RE
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|days| days.as_str().parse().ok());

    let customer_logo_count: usize = LOGO_SELECTORS.iter().map(|css| doc.count(css)).sum();
    let has_brand_names = BRAND_CONTEXT_RE.is_match(&text) && BRAND_NAME_RE.is_match(&text);

    let has_media_mentions = MEDIA_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword) || markup.contains(keyword));
    let media_count = MEDIA_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count();

    let has_screenshot = PRODUCT_IMAGE_SELECTORS.iter().any(|css| doc.exists(css));
    let has_demo_video = doc.exists(
        r#"video, iframe[src*="youtube"], iframe[src*="vimeo"], iframe[src*="loom"]"#,
    );

    let use_case_matches: Vec<String> = USE_CASE_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    let feature_list_count = doc.count("ul li, ol li");
    let has_feature_list =
        feature_list_count > FEATURE_LIST_MIN_ITEMS && FEATURE_WORDS_RE.is_match(&text);

    let metrics: Vec<String> = METRIC_RES
        .iter()
        .filter_map(|pattern| pattern.find(&text))
        .map(|found| found.as_str().to_string())
        .collect();

    let has_comparison_table = COMPARISON_RE.is_match(&text)
        || (doc.exists("table") && COMPETITOR_RE.is_match(&text));

    StartupSignals {
        has_pricing,
        pricing_page_link,
        pricing_visible,

        has_free_trial,
        trial_length,
        has_demo,
        has_demo_video,

        has_customer_logos: customer_logo_count >= MIN_CUSTOMER_LOGOS,
        customer_logo_count,
        has_brand_names,
        has_media_mentions,
        media_count,
        has_awards: AWARDS_RE.is_match(&text),
        has_metrics: !metrics.is_empty(),
        metrics,

        has_screenshot,
        has_feature_list,
        feature_list_count,
        has_use_cases: !use_case_matches.is_empty(),
        use_case_matches: use_case_matches.into_iter().take(3).collect(),
        has_comparison_table,

        has_team_section: doc.exists(r#"a[href*="team"], a[href*="about"]"#)
            || TEAM_RE.is_match(&text),
        has_founder_info: FOUNDER_RE.is_match(&text),
        has_funding_info: FUNDING_RE.is_match(&text),

        has_chat_widget: CHAT_WIDGET_SELECTORS.iter().any(|css| doc.exists(css)),
        has_jobs_page: doc.exists(r#"a[href*="career"], a[href*="jobs"], a[href*="hiring"]"#)
            || HIRING_RE.is_match(&text),
    }
}
