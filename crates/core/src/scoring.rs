use crate::parse::Element;

/// Configuration for the attribute similarity heuristic.
///
/// The defaults encode Bootstrap CSS conventions: a class token containing
/// "success" is treated as positive evidence, tokens containing "danger" or
/// "warning" as negative evidence. The vocabulary is configuration, not
/// hardwired logic, so tests and callers can substitute their own markers.
#[derive(Debug, Clone)]
pub struct ScorePolicy {
    /// Substring marking a class token as positive evidence.
    pub positive_class_marker: String,
    /// Substrings marking a class token as negative evidence.
    pub negative_class_markers: Vec<String>,
    /// Ordered list of attributes compared between original and candidate.
    pub attributes: Vec<String>,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            positive_class_marker: "success".to_string(),
            negative_class_markers: vec!["danger".to_string(), "warning".to_string()],
            attributes: vec![
                "class".to_string(),
                "title".to_string(),
                "href".to_string(),
                "onclick".to_string(),
            ],
        }
    }
}

/// Score the candidate's class attribute against the policy markers.
///
/// The candidate's class tokens are scanned in order and the first token
/// carrying a marker decides the score: +1 for the positive marker, -1 for
/// any negative marker. A positive token short-circuits even when a later
/// token would score negative. No class attribute, or no marked token,
/// scores 0.
pub fn class_score(candidate: &Element<'_>, policy: &ScorePolicy) -> i32 {
    for token in candidate.class_tokens() {
        if token.contains(&policy.positive_class_marker) {
            return 1;
        }
        if policy.negative_class_markers.iter().any(|marker| token.contains(marker)) {
            return -1;
        }
    }
    0
}

/// Score one attribute by substring containment.
///
/// When either side lacks the attribute there is no evidence and the score
/// is 0. Otherwise the candidate value must contain the original value as a
/// substring for +1; a present-but-unrelated value scores -1.
pub fn attribute_score(original: Option<&str>, candidate: Option<&str>) -> i32 {
    match (original, candidate) {
        (Some(original), Some(candidate)) => {
            if candidate.contains(original) {
                1
            } else {
                -1
            }
        }
        _ => 0,
    }
}

/// Compute the total similarity score of a candidate against the original
/// element.
///
/// Sums the per-attribute contributions over `policy.attributes` in order.
/// The `class` attribute is scored from the candidate alone via
/// [`class_score`]; every other attribute compares both elements via
/// [`attribute_score`]. A candidate is worth keeping iff the total is
/// strictly positive.
pub fn similarity_score(original: &Element<'_>, candidate: &Element<'_>, policy: &ScorePolicy) -> i32 {
    policy
        .attributes
        .iter()
        .map(|attribute| {
            if attribute == "class" {
                class_score(candidate, policy)
            } else {
                attribute_score(original.attr(attribute), candidate.attr(attribute))
            }
        })
        .sum()
}
