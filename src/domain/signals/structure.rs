//! Sub-extractors for page structure, contact, trust, SEO and text signals.

use once_cell::sync::Lazy;
use regex::Regex;

use super::document::{element_text, first_descendant_text, Document};
use super::types::{
    AdsAndAnnoyances, BlogFeatures, ContactInfo, ContentStats, Cta, Ctas, Headings, Metadata,
    OpenGraphTags, Seo, SocialMedia, SocialPlatforms, TextContent, TrustSignals,
};

/// Maximum number of CTA items kept in the bundle.
pub const MAX_CTA_ITEMS: usize = 10;

/// Maximum characters of body text forwarded for AI analysis.
pub const FULL_TEXT_LIMIT: usize = 5000;

/// Maximum characters of the value-proposition paragraph.
pub const VALUE_PROPOSITION_LIMIT: usize = 500;

const CTA_SELECTOR: &str = r#"button, a.button, a.btn, input[type="submit"]"#;

const CTA_KEYWORDS: &[&str] = &[
    "sign up",
    "signup",
    "register",
    "get started",
    "try",
    "buy",
    "purchase",
    "subscribe",
    "join",
    "download",
    "learn more",
    "contact",
    "demo",
    "free trial",
];

const ADDRESS_KEYWORDS: &[&str] = &["address", "location", "street", "avenue", "road"];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex")
});
static MONEY_BACK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)money.{0,10}back|guarantee").expect("valid regex"));
static TESTIMONIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)testimonial|review|customer\s+says").expect("valid regex"));
static CUSTOMER_COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+[,\d]*\+?\s*(customers|users|companies|clients)").expect("valid regex")
});
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

pub fn extract_headings(doc: &Document) -> Headings {
    let level = |css: &str| -> Vec<String> {
        doc.select(css)
            .iter()
            .map(|el| element_text(el).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    };

    let h1 = level("h1");
    let h2 = level("h2");
    let h3 = level("h3");
    let total = h1.len() + h2.len() + h3.len();

    Headings { h1, h2, h3, total }
}

/// Collects CTA candidates in document order.
///
/// Any candidate with visible text is kept; an empty-text candidate is kept
/// only when its href names a CTA keyword. Submit inputs have no text
/// content, so their `value` attribute stands in for it.
pub fn extract_ctas(doc: &Document) -> Ctas {
    let mut items = Vec::new();

    for el in doc.select(CTA_SELECTOR) {
        let kind = el.value().name().to_string();
        let raw_text = if kind == "input" {
            el.value().attr("value").unwrap_or_default().to_string()
        } else {
            element_text(&el)
        };
        let text = raw_text.trim().to_string();
        let href = el.value().attr("href").unwrap_or_default();

        if text.is_empty() && href.is_empty() {
            continue;
        }

        let lower_text = text.to_lowercase();
        let lower_href = href.to_lowercase();
        let names_keyword = CTA_KEYWORDS
            .iter()
            .any(|keyword| lower_text.contains(keyword) || lower_href.contains(keyword));

        if names_keyword || !text.is_empty() {
            items.push(Cta {
                text,
                kind,
                href: (!href.is_empty()).then(|| href.to_string()),
            });
        }
    }

    let count = items.len();
    items.truncate(MAX_CTA_ITEMS);
    Ctas { count, items }
}

pub fn extract_contact_info(doc: &Document) -> ContactInfo {
    let text = doc.body_text();
    let lower = text.to_lowercase();

    ContactInfo {
        has_email: EMAIL_RE.is_match(text),
        has_phone: PHONE_RE.is_match(text),
        has_address: ADDRESS_KEYWORDS.iter().any(|keyword| lower.contains(keyword)),
        has_contact_form: doc.exists("form")
            && (doc.exists(r#"input[type="email"]"#) || doc.exists("textarea")),
    }
}

pub fn extract_content(doc: &Document) -> ContentStats {
    let paragraphs = doc.select("p");
    let total_text_length = paragraphs
        .iter()
        .map(|p| element_text(p).trim().chars().count())
        .sum();

    ContentStats {
        paragraph_count: paragraphs.len(),
        image_count: doc.count("img"),
        link_count: doc.count("a"),
        total_text_length,
        has_video: doc.exists(r#"video, iframe[src*="youtube"], iframe[src*="vimeo"]"#),
    }
}

pub fn extract_metadata(doc: &Document) -> Metadata {
    let title = doc
        .select("title")
        .first()
        .map(|el| element_text(el).trim().to_string())
        .filter(|title| !title.is_empty());

    Metadata {
        title,
        description: doc.first_attr(r#"meta[name="description"]"#, "content"),
        has_og_image: doc.exists(r#"meta[property="og:image"]"#),
        has_favicon: doc.exists(r#"link[rel="icon"], link[rel="shortcut icon"]"#),
    }
}

pub fn extract_social_media(doc: &Document) -> SocialMedia {
    let platforms = SocialPlatforms {
        facebook: doc.exists(r#"a[href*="facebook.com"]"#),
        twitter: doc.exists(r#"a[href*="twitter.com"], a[href*="x.com"]"#),
        linkedin: doc.exists(r#"a[href*="linkedin.com"]"#),
        instagram: doc.exists(r#"a[href*="instagram.com"]"#),
        youtube: doc.exists(r#"a[href*="youtube.com"]"#),
        tiktok: doc.exists(r#"a[href*="tiktok.com"]"#),
    };
    let total_platforms = platforms.linked_count();

    SocialMedia {
        platforms,
        total_platforms,
        has_social_share_buttons: doc.exists(r#"[class*="share"], [class*="social-share"]"#),
    }
}

/// Trust markers. `has_https` starts true and is patched from the final URL.
pub fn extract_trust_signals(doc: &Document) -> TrustSignals {
    let lower = doc.body_text().to_lowercase();

    TrustSignals {
        has_https: true,
        has_privacy_policy: doc.exists(r#"a[href*="privacy"]"#),
        has_terms_of_service: doc.exists(r#"a[href*="terms"]"#),
        has_cookie_consent: lower.contains("cookie") && lower.contains("consent"),
        has_security_badges: doc.exists(r#"[alt*="secure"], [alt*="ssl"], [alt*="verified"]"#),
        has_money_back_guarantee: MONEY_BACK_RE.is_match(&lower),
        has_testimonials: TESTIMONIAL_RE.is_match(&lower),
        has_customer_count: CUSTOMER_COUNT_RE.is_match(&lower),
        has_trust_badges: doc.exists(r#"[alt*="bbb"], [alt*="norton"], [alt*="mcafee"]"#),
    }
}

pub fn extract_ads_and_annoyances(doc: &Document) -> AdsAndAnnoyances {
    let likely_ad_iframes = doc.count(r#"iframe[src*="ads"], iframe[src*="doubleclick"]"#);
    let autoplay_videos = doc.count("video[autoplay]");

    AdsAndAnnoyances {
        iframe_count: doc.count("iframe"),
        likely_ad_iframes,
        has_popups: doc.exists(r#"[class*="popup"], [class*="modal"][class*="promo"]"#),
        has_autoplay_video: autoplay_videos > 0,
        has_cookie_banner: doc.exists(r#"[class*="cookie"], [id*="cookie"]"#),
        annoyance_score: likely_ad_iframes + autoplay_videos * 2,
    }
}

pub fn extract_seo(doc: &Document) -> Seo {
    let meta_keywords = doc.first_attr(r#"meta[name="keywords"]"#, "content");
    let og = |property: &str| doc.first_attr(&format!(r#"meta[property="{property}"]"#), "content");

    Seo {
        has_meta_keywords: meta_keywords.is_some(),
        meta_keywords,
        has_canonical_url: doc.exists(r#"link[rel="canonical"]"#),
        canonical_url: doc.first_attr(r#"link[rel="canonical"]"#, "href"),
        has_structured_data: doc.exists(r#"script[type="application/ld+json"]"#),
        open_graph_tags: OpenGraphTags {
            og_title: og("og:title"),
            og_description: og("og:description"),
            og_image: og("og:image"),
            og_url: og("og:url"),
        },
        has_twitter_card: doc.exists(r#"meta[name="twitter:card"]"#),
        has_viewport: doc.exists(r#"meta[name="viewport"]"#),
    }
}

pub fn extract_blog_features(doc: &Document) -> BlogFeatures {
    let posts = doc.select(r#"article, [class*="post"]"#);
    let recent_post_titles = posts
        .iter()
        .take(5)
        .filter_map(|post| first_descendant_text(post, "h1, h2, h3"))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .collect();

    BlogFeatures {
        has_blog: doc.exists(r#"a[href*="blog"]"#),
        has_search: doc.exists(r#"input[type="search"], input[name*="search"]"#),
        has_categories: doc.exists(r#"[class*="categor"], a[href*="category"]"#),
        has_tags: doc.exists(r#"[class*="tag"]"#),
        has_comments: doc.exists(r#"[class*="comment"]"#),
        post_count: posts.len(),
        recent_post_titles,
    }
}

pub fn extract_text_content(doc: &Document) -> TextContent {
    let collapsed = WHITESPACE_RE.replace_all(doc.body_text(), " ");
    let main_text = collapsed.trim();

    let value_proposition = doc
        .select("p")
        .iter()
        .map(|p| element_text(p).trim().to_string())
        .find(|text| text.chars().count() > 50)
        .map(|text| truncate_chars(&text, VALUE_PROPOSITION_LIMIT))
        .unwrap_or_default();

    let headings_summary = doc
        .select("h1, h2, h3")
        .iter()
        .map(|h| element_text(h).trim().to_string())
        .filter(|text| !text.is_empty())
        .take(10)
        .collect::<Vec<_>>()
        .join(" | ");

    TextContent {
        full_text: truncate_chars(main_text, FULL_TEXT_LIMIT),
        value_proposition,
        headings_summary,
        word_count: main_text.split_whitespace().count(),
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Document {
        Document::parse(&format!("<html><head></head><body>{body}</body></html>"))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Headings
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn headings_skip_empty_elements() {
        let d = doc("<h1>Main</h1><h1>  </h1><h2>A</h2><h2>B</h2><h3>C</h3>");
        let headings = extract_headings(&d);
        assert_eq!(headings.h1, vec!["Main"]);
        assert_eq!(headings.h2, vec!["A", "B"]);
        assert_eq!(headings.total, 4);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // CTAs
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn ctas_cap_items_but_count_all() {
        let body: String = (0..15).map(|i| format!("<button>Go {i}</button>")).collect();
        let ctas = extract_ctas(&doc(&body));
        assert_eq!(ctas.count, 15);
        assert_eq!(ctas.items.len(), 10);
        assert_eq!(ctas.items[0].text, "Go 0");
        assert_eq!(ctas.items[9].text, "Go 9");
    }

    #[test]
    fn ctas_keep_non_keyword_text() {
        let ctas = extract_ctas(&doc("<button>Banana</button>"));
        assert_eq!(ctas.count, 1);
        assert_eq!(ctas.items[0].kind, "button");
    }

    #[test]
    fn ctas_keep_empty_text_with_keyword_href() {
        let ctas = extract_ctas(&doc(
            r#"<a class="btn" href="/signup"></a><a class="btn" href="/about"></a>"#,
        ));
        assert_eq!(ctas.count, 1);
        assert_eq!(ctas.items[0].href.as_deref(), Some("/signup"));
        assert_eq!(ctas.items[0].kind, "a");
    }

    #[test]
    fn ctas_ignore_plain_links() {
        let ctas = extract_ctas(&doc(r#"<a href="/signup">Sign up</a>"#));
        assert_eq!(ctas.count, 0);
    }

    #[test]
    fn ctas_read_submit_input_value() {
        let ctas = extract_ctas(&doc(r#"<form><input type="submit" value="Join now"></form>"#));
        assert_eq!(ctas.count, 1);
        assert_eq!(ctas.items[0].text, "Join now");
        assert_eq!(ctas.items[0].kind, "input");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Contact and content
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn contact_info_detects_patterns() {
        let info = extract_contact_info(&doc(
            "<p>Mail hello@acme.io or call (555) 123-4567. Our address is here.</p>",
        ));
        assert!(info.has_email);
        assert!(info.has_phone);
        assert!(info.has_address);
        assert!(!info.has_contact_form);
    }

    #[test]
    fn contact_form_requires_email_or_textarea() {
        let without = extract_contact_info(&doc(r#"<form><input type="text"></form>"#));
        assert!(!without.has_contact_form);
        let with = extract_contact_info(&doc("<form><textarea></textarea></form>"));
        assert!(with.has_contact_form);
    }

    #[test]
    fn content_counts_elements_and_text() {
        let stats = extract_content(&doc(
            r#"<p> abc </p><p>de</p><img src="a.png"><a href="/">x</a><iframe src="https://youtube.com/embed/1"></iframe>"#,
        ));
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.image_count, 1);
        assert_eq!(stats.link_count, 1);
        assert_eq!(stats.total_text_length, 5);
        assert!(stats.has_video);
    }

    #[test]
    fn metadata_reads_head_tags() {
        let d = Document::parse(
            r#"<html><head><title> Acme </title>
               <meta name="description" content="Fast deploys">
               <link rel="icon" href="/f.ico"></head><body></body></html>"#,
        );
        let meta = extract_metadata(&d);
        assert_eq!(meta.title.as_deref(), Some("Acme"));
        assert_eq!(meta.description.as_deref(), Some("Fast deploys"));
        assert!(meta.has_favicon);
        assert!(!meta.has_og_image);
    }

    #[test]
    fn social_media_counts_platforms() {
        let social = extract_social_media(&doc(
            r#"<a href="https://x.com/acme">x</a><a href="https://linkedin.com/co/acme">in</a>"#,
        ));
        assert!(social.platforms.twitter);
        assert!(social.platforms.linkedin);
        assert_eq!(social.total_platforms, 2);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Trust, ads, SEO
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn trust_signals_match_phrases() {
        let trust = extract_trust_signals(&doc(
            r#"<p>30-day money back guarantee. Read a testimonial. 10,000+ customers.</p>
               <a href="/privacy">Privacy</a><img alt="ssl secured">"#,
        ));
        assert!(trust.has_https);
        assert!(trust.has_privacy_policy);
        assert!(!trust.has_terms_of_service);
        assert!(trust.has_money_back_guarantee);
        assert!(trust.has_testimonials);
        assert!(trust.has_customer_count);
        assert!(trust.has_security_badges);
    }

    #[test]
    fn ads_score_weights_autoplay_double() {
        let ads = extract_ads_and_annoyances(&doc(
            r#"<iframe src="https://ads.example.com/x"></iframe><iframe src="/map"></iframe>
               <video autoplay></video><div class="cookie-bar"></div>"#,
        ));
        assert_eq!(ads.iframe_count, 2);
        assert_eq!(ads.likely_ad_iframes, 1);
        assert!(ads.has_autoplay_video);
        assert!(ads.has_cookie_banner);
        assert!(!ads.has_popups);
        assert_eq!(ads.annoyance_score, 3);
    }

    #[test]
    fn seo_reads_open_graph_and_canonical() {
        let d = Document::parse(
            r#"<html><head>
               <meta name="keywords" content="deploy, ci">
               <link rel="canonical" href="https://acme.io/">
               <meta property="og:title" content="Acme">
               <script type="application/ld+json">{}</script>
               <meta name="viewport" content="width=device-width">
               </head><body></body></html>"#,
        );
        let seo = extract_seo(&d);
        assert!(seo.has_meta_keywords);
        assert_eq!(seo.meta_keywords.as_deref(), Some("deploy, ci"));
        assert_eq!(seo.canonical_url.as_deref(), Some("https://acme.io/"));
        assert_eq!(seo.open_graph_tags.og_title.as_deref(), Some("Acme"));
        assert!(seo.open_graph_tags.og_image.is_none());
        assert!(seo.has_structured_data);
        assert!(seo.has_viewport);
        assert!(!seo.has_twitter_card);
    }

    #[test]
    fn blog_features_collect_post_titles() {
        let blog = extract_blog_features(&doc(
            r#"<a href="/blog">Blog</a>
               <article><h2>First</h2></article>
               <article><p>untitled</p></article>
               <div class="post"><h3>Second</h3></div>"#,
        ));
        assert!(blog.has_blog);
        assert_eq!(blog.post_count, 3);
        assert_eq!(blog.recent_post_titles, vec!["First", "Second"]);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Text content
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn text_content_collapses_whitespace_and_counts_words() {
        let text = extract_text_content(&doc("<h1>Hello</h1>\n\n<p>big   world</p>"));
        assert_eq!(text.full_text, "Hello big world");
        assert_eq!(text.word_count, 3);
        assert_eq!(text.headings_summary, "Hello");
    }

    #[test]
    fn text_content_picks_first_long_paragraph() {
        let long = "a".repeat(60);
        let text = extract_text_content(&doc(&format!("<p>short</p><p>{long}</p>")));
        assert_eq!(text.value_proposition, long);
    }

    #[test]
    fn text_content_truncates_full_text() {
        let body = "word ".repeat(2000);
        let text = extract_text_content(&doc(&format!("<p>{body}</p>")));
        assert_eq!(text.full_text.chars().count(), FULL_TEXT_LIMIT);
        assert_eq!(text.word_count, 2000);
    }

    #[test]
    fn empty_body_has_zero_words() {
        let text = extract_text_content(&doc(""));
        assert_eq!(text.word_count, 0);
        assert!(text.full_text.is_empty());
    }
}
