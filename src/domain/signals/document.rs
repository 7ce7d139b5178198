//! Queryable HTML document used by the signal extractors.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page plus its body text.
///
/// The body text is computed once at parse time because nearly every
/// sub-extractor pattern-matches against it.
pub struct Document {
    html: Html,
    body_text: String,
    body_html: String,
}

impl Document {
    /// Parses a full HTML document. Parsing is lenient and never fails.
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        let (body_text, body_html) = match Selector::parse("body")
            .ok()
            .and_then(|body| html.select(&body).next())
        {
            Some(body) => (element_text(&body), body.inner_html()),
            None => (html.root_element().text().collect(), html.root_element().inner_html()),
        };

        Self {
            html,
            body_text,
            body_html,
        }
    }

    /// Raw text of the body, all descendant text nodes concatenated.
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    /// Markup of the body.
    pub fn body_html(&self) -> &str {
        &self.body_html
    }

    /// All elements matching `css`, in document order.
    ///
    /// An invalid selector matches nothing.
    pub fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(err) => {
                tracing::warn!(selector = css, error = ?err, "Invalid CSS selector");
                Vec::new()
            }
        }
    }

    /// Number of elements matching `css`.
    pub fn count(&self, css: &str) -> usize {
        self.select(css).len()
    }

    /// Whether any element matches `css`.
    pub fn exists(&self, css: &str) -> bool {
        self.count(css) > 0
    }

    /// Attribute value of the first element matching `css`.
    ///
    /// Like a jQuery-style `.attr()`, this only looks at the first match
    /// and treats an empty value as absent.
    pub fn first_attr(&self, css: &str, attr: &str) -> Option<String> {
        self.select(css)
            .first()
            .and_then(|el| el.value().attr(attr))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Concatenated text of every element matching `css`.
    pub fn text_of(&self, css: &str) -> String {
        self.select(css).iter().map(element_text).collect()
    }
}

/// Full text content of an element.
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Full text content of the first descendant of `el` matching `css`.
pub fn first_descendant_text(el: &ElementRef<'_>, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    el.select(&selector).next().map(|found| element_text(&found))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
          <head><title>Acme</title><meta name="description" content=""></head>
          <body>
            <h1>Ship <em>faster</em></h1>
            <p class="a">One</p>
            <p class="b">Two</p>
          </body>
        </html>
    "#;

    #[test]
    fn body_text_concatenates_descendants() {
        let doc = Document::parse(PAGE);
        assert!(doc.body_text().contains("Ship faster"));
        assert!(!doc.body_text().contains("Acme"));
    }

    #[test]
    fn count_and_exists_follow_selector() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.count("p"), 2);
        assert!(doc.exists("p.b"));
        assert!(!doc.exists("table"));
    }

    #[test]
    fn invalid_selector_matches_nothing() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.count("p[["), 0);
    }

    #[test]
    fn first_attr_treats_empty_as_absent() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.first_attr("meta[name=\"description\"]", "content"), None);
        assert_eq!(doc.first_attr("p", "class"), Some("a".to_string()));
    }

    #[test]
    fn text_of_joins_all_matches() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.text_of("p"), "OneTwo");
    }

    #[test]
    fn body_text_is_empty_for_empty_document() {
        let doc = Document::parse("");
        assert_eq!(doc.body_text().trim(), "");
    }
}
