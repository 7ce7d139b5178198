//! Global reach cues: languages, currencies, shipping, time zones, payments.

use super::document::Document;
use super::types::GlobalReach;

const CURRENCY_TOKENS: &[&str] = &["USD", "EUR", "GBP", "JPY", "CAD", "AUD", "€", "£", "¥"];

const SHIPPING_KEYWORDS: &[&str] = &[
    "international shipping",
    "worldwide shipping",
    "global shipping",
    "ships worldwide",
    "available globally",
];

const TIMEZONE_KEYWORDS: &[&str] = &["GMT", "UTC", "EST", "PST", "CET", "time zone", "timezone"];

const PAYMENT_METHODS: &[&str] = &[
    "PayPal",
    "Stripe",
    "Apple Pay",
    "Google Pay",
    "Alipay",
    "WeChat Pay",
];

/// Extracts global reach signals.
///
/// Currency, time zone and payment tokens are matched case-sensitively
/// against the raw body text; shipping phrases are matched lower-cased.
pub fn extract_global_reach(doc: &Document) -> GlobalReach {
    let language_selector_count = doc.count(
        r#"[class*="lang"], [id*="lang"], [class*="language"], [id*="language"], select[name*="lang"]"#,
    );

    let hreflang_tags = doc.select("link[hreflang]");
    let languages = hreflang_tags
        .iter()
        .filter_map(|link| link.value().attr("hreflang"))
        .filter(|lang| !lang.is_empty() && *lang != "x-default")
        .map(str::to_string)
        .collect();

    let text = doc.body_text();
    let lower = text.to_lowercase();

    let currencies = CURRENCY_TOKENS
        .iter()
        .filter(|token| text.contains(*token))
        .map(|token| token.to_string())
        .collect();

    GlobalReach {
        has_language_selector: language_selector_count > 0,
        language_selector_count,
        has_hreflang_tags: !hreflang_tags.is_empty(),
        hreflang_count: hreflang_tags.len(),
        has_currency_switcher: doc
            .exists(r#"[class*="currency"], [id*="currency"], select[name*="currency"]"#),
        has_international_shipping: SHIPPING_KEYWORDS.iter().any(|kw| lower.contains(kw)),
        mentions_time_zones: TIMEZONE_KEYWORDS.iter().any(|kw| text.contains(kw)),
        has_global_payment_methods: PAYMENT_METHODS.iter().any(|method| text.contains(method)),
        languages,
        currencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hreflang_languages_skip_x_default() {
        let doc = Document::parse(
            r#"<html><head>
               <link rel="alternate" hreflang="en" href="/en">
               <link rel="alternate" hreflang="de" href="/de">
               <link rel="alternate" hreflang="x-default" href="/">
               </head><body></body></html>"#,
        );
        let reach = extract_global_reach(&doc);
        assert!(reach.has_hreflang_tags);
        assert_eq!(reach.hreflang_count, 3);
        assert_eq!(reach.languages, vec!["en", "de"]);
    }

    #[test]
    fn currency_and_payment_tokens_are_case_sensitive() {
        let doc = Document::parse(
            "<html><body><p>Pay in EUR or £ via PayPal. paypal and usd are ignored.</p></body></html>",
        );
        let reach = extract_global_reach(&doc);
        assert_eq!(reach.currencies, vec!["EUR", "£"]);
        assert!(reach.has_global_payment_methods);
    }

    #[test]
    fn shipping_and_timezones() {
        let doc = Document::parse(
            "<html><body><p>Ships Worldwide. Support 9-5 CET.</p></body></html>",
        );
        let reach = extract_global_reach(&doc);
        assert!(reach.has_international_shipping);
        assert!(reach.mentions_time_zones);
    }

    #[test]
    fn language_selector_counts_unique_elements() {
        let doc = Document::parse(
            r#"<html><body><div class="language-picker" id="lang"></div><select name="lang"></select></body></html>"#,
        );
        let reach = extract_global_reach(&doc);
        assert!(reach.has_language_selector);
        assert_eq!(reach.language_selector_count, 2);
        assert!(!reach.has_currency_switcher);
    }
}
