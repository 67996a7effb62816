//! Cross-revision element matching.
//!
//! This module provides the primary API for re-locating an element across
//! a page revision. The main entry point is the [`SimilarityMatcher`]
//! struct, along with the convenience function [`fetch_and_match`].
//!
//! # Example
//!
//! ```rust
//! use similis_core::{Document, SimilarityMatcher};
//!
//! let original = Document::parse(
//!     r#"<button id="save" class="button success" title="Save">Save</button>"#,
//! ).unwrap();
//! let diff = Document::parse(r#"<span class="button success">Save</span>"#).unwrap();
//!
//! let matcher = SimilarityMatcher::new();
//! let paths = matcher.find_similar_elements(&original, &diff, "save").unwrap();
//! assert_eq!(paths.len(), 1);
//! ```

use crate::parse::{Document, Element};
use crate::path::node_path;
use crate::scoring::{ScorePolicy, similarity_score};
use crate::{Result, SimilisError};

#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_source};

/// Locates elements in a revised document that resemble a reference
/// element in the original document.
///
/// The reference element is identified by id in the original document.
/// Candidates are diff-document elements sharing at least one of its
/// class tokens; each candidate is scored once against the reference
/// using the configured [`ScorePolicy`], and candidates with a strictly
/// positive score are reported by their ancestor-chain path label.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatcher {
    policy: ScorePolicy,
}

impl SimilarityMatcher {
    /// Creates a matcher with the default scoring policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher with a custom scoring policy.
    pub fn with_policy(policy: ScorePolicy) -> Self {
        Self { policy }
    }

    /// Finds elements in `diff` similar to the element with id
    /// `element_id` in `original`.
    ///
    /// Returns the path labels of retained candidates, ordered by first
    /// sighting across (original class-token order, then diff document
    /// order within each class). An empty vector is a valid outcome: the
    /// reference element may carry no class attribute, or no candidate
    /// may score positively.
    ///
    /// # Errors
    ///
    /// Returns [`SimilisError::ElementNotFound`] when `element_id`
    /// resolves to no element in the original document.
    pub fn find_similar_elements(
        &self,
        original: &Document,
        diff: &Document,
        element_id: &str,
    ) -> Result<Vec<String>> {
        let target = original
            .select_by_id(element_id)?
            .ok_or_else(|| SimilisError::ElementNotFound(element_id.to_string()))?;

        let original_classes = target.class_tokens();

        let mut checked: Vec<Element<'_>> = Vec::new();
        let mut result = Vec::new();

        for class in original_classes {
            for candidate in diff.select_by_class(class)? {
                if checked.contains(&candidate) {
                    continue;
                }
                checked.push(candidate);

                if similarity_score(&target, &candidate, &self.policy) > 0 {
                    result.push(node_path(&candidate));
                }
            }
        }

        Ok(result)
    }
}

/// Fetches both documents and runs the matcher with the default policy.
///
/// Sources may be `http://`/`https://` URLs or local file paths. The
/// original document is fetched and parsed strictly before the diff
/// document; a fetch or parse failure of either is fatal for the call.
#[cfg(feature = "fetch")]
pub async fn fetch_and_match(
    original_source: &str,
    diff_source: &str,
    element_id: &str,
    config: &FetchConfig,
) -> Result<Vec<String>> {
    let original_html = fetch_source(original_source, config).await?;
    let original = Document::parse(&original_html)?;

    let diff_html = fetch_source(diff_source, config).await?;
    let diff = Document::parse(&diff_html)?;

    SimilarityMatcher::new().find_similar_elements(&original, &diff, element_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGINAL: &str = r#"
        <html><body>
            <button id="btn" class="button success" title="Save">Save</button>
        </body></html>
    "#;

    #[test]
    fn test_missing_id_is_fatal() {
        let original = Document::parse(ORIGINAL).unwrap();
        let diff = Document::parse("<div></div>").unwrap();
        let matcher = SimilarityMatcher::new();

        let result = matcher.find_similar_elements(&original, &diff, "other");
        assert!(matches!(result, Err(SimilisError::ElementNotFound(id)) if id == "other"));
    }

    #[test]
    fn test_no_class_on_target_yields_empty_result() {
        let original = Document::parse(r#"<button id="btn" title="Save">Save</button>"#).unwrap();
        let diff = Document::parse(r#"<span class="button success" title="Save">Save</span>"#).unwrap();
        let matcher = SimilarityMatcher::new();

        let result = matcher.find_similar_elements(&original, &diff, "btn").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_zero_score_candidate_excluded() {
        // class -1 (danger), title +1 (contains "Save") => total 0, dropped
        let original = Document::parse(ORIGINAL).unwrap();
        let diff = Document::parse(r#"<span class="button danger" title="Save changes">Save</span>"#).unwrap();
        let matcher = SimilarityMatcher::new();

        let result = matcher.find_similar_elements(&original, &diff, "btn").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_positive_score_candidate_included() {
        // class +1 (success), title absent on candidate => total 1, kept
        let original = Document::parse(ORIGINAL).unwrap();
        let diff = Document::parse(r#"<span class="button success">Save</span>"#).unwrap();
        let matcher = SimilarityMatcher::new();

        let result = matcher.find_similar_elements(&original, &diff, "btn").unwrap();
        assert_eq!(result, vec!["span.'button success' > body > html"]);
    }

    #[test]
    fn test_candidate_scored_once_across_classes() {
        // The span carries both original tokens; it must be reported once.
        let original = Document::parse(ORIGINAL).unwrap();
        let diff = Document::parse(r#"<span class="button success" title="Save">Save</span>"#).unwrap();
        let matcher = SimilarityMatcher::new();

        let result = matcher.find_similar_elements(&original, &diff, "btn").unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_result_order_follows_class_then_document_order() {
        let original = Document::parse(ORIGINAL).unwrap();
        let diff = Document::parse(
            r#"
            <div id="a" class="success extra"></div>
            <div id="b" class="button success"></div>
            <div id="c" class="success"></div>
            "#,
        )
        .unwrap();
        let matcher = SimilarityMatcher::new();

        // "button" is queried first: only #b. Then "success": #a, #c (#b already checked).
        let result = matcher.find_similar_elements(&original, &diff, "btn").unwrap();
        assert_eq!(
            result,
            vec![
                "div.'button success' > body > html",
                "div.'success extra' > body > html",
                "div.'success' > body > html",
            ]
        );
    }

    #[test]
    fn test_custom_policy_vocabulary() {
        let original = Document::parse(r#"<a id="lnk" class="nav ok" href="/x"></a>"#).unwrap();
        let diff = Document::parse(r#"<a class="nav ok" href="/x/y"></a>"#).unwrap();

        let matcher = SimilarityMatcher::with_policy(ScorePolicy {
            positive_class_marker: "ok".to_string(),
            negative_class_markers: vec!["bad".to_string()],
            ..Default::default()
        });

        let result = matcher.find_similar_elements(&original, &diff, "lnk").unwrap();
        assert_eq!(result.len(), 1);
    }
}
