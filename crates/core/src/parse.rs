//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and querying the DOM tree by CSS selector, id, or class token.
//!
//! # Example
//!
//! ```rust
//! use similis_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <button id="save" class="button success">Save</button>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let target = doc.select_by_id("save").unwrap().unwrap();
//! assert_eq!(target.tag_name(), "button");
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{Result, SimilisError};

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors. Parsing is lenient (html5ever recovers from malformed
/// markup), so `parse` itself does not fail on bad input.
///
/// # Example
///
/// ```rust
/// use similis_core::parse::Document;
///
/// let html = r#"<p class="note">First</p><p class="note">Second</p>"#;
/// let doc = Document::parse(html).unwrap();
/// assert_eq!(doc.select_by_class("note").unwrap().len(), 2);
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document from a string.
    ///
    /// The parser synthesizes the standard `html`/`head`/`body` skeleton
    /// when the input omits it.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Parses an HTML fragment from a string.
    ///
    /// Fragment children are attached directly under a synthetic `<html>`
    /// root, with no implicit `<body>`. Useful when the exact ancestor
    /// chain of a node matters.
    pub fn parse_fragment(html: &str) -> Result<Self> {
        let html = Html::parse_fragment(html);
        Ok(Self { html })
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`SimilisError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| SimilisError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the element carrying the given id, if any.
    ///
    /// Uses CSS `#id` semantics: the first match wins, which is the only
    /// match in a well-formed document.
    pub fn select_by_id(&'_ self, id: &str) -> Result<Option<Element<'_>>> {
        Ok(self.select(&format!("#{}", id))?.into_iter().next())
    }

    /// Selects all elements carrying the given class token, in document order.
    ///
    /// Uses CSS `.class` semantics: exact token match against the element's
    /// own class attribute, not inherited from ancestors.
    pub fn select_by_class(&'_ self, class: &str) -> Result<Vec<Element<'_>>> {
        self.select(&format!(".{}", class))
    }

    /// Gets the entire HTML as a string.
    pub fn as_string(&self) -> String {
        self.html.html()
    }
}

/// A wrapper around scraper's ElementRef for attribute and ancestor access.
///
/// Element represents a single node in the HTML document tree. Equality is
/// node identity within a tree, so an element reached through two different
/// queries compares equal to itself.
///
/// # Example
///
/// ```rust
/// use similis_core::parse::Document;
///
/// let html = r#"<a href="/save" class="button success">Save</a>"#;
/// let doc = Document::parse(html).unwrap();
/// let link = doc.select("a").unwrap()[0];
///
/// assert_eq!(link.attr("href"), Some("/save"));
/// assert_eq!(link.class_tokens(), vec!["button", "success"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the tag name of this element.
    ///
    /// Returns the lowercase local name (e.g., "div", "a", "span").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Gets the element's class tokens.
    ///
    /// The class attribute is split on whitespace; empty tokens are
    /// excluded, order is preserved, and duplicates are kept. An absent
    /// class attribute yields an empty list.
    pub fn class_tokens(&self) -> Vec<&'a str> {
        self.attr("class")
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Gets the parent element, if any.
    ///
    /// Returns `None` at the root element (the document node above it is
    /// not an element).
    pub fn parent(&self) -> Option<Element<'a>> {
        self.element
            .parent()
            .and_then(ElementRef::wrap)
            .map(|element| Element { element })
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.element.id() == other.element.id()
    }
}

impl Eq for Element<'_> {}
