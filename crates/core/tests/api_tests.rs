//! Library API integration tests
use similis_core::*;

const ORIGINAL: &str = r#"
    <!DOCTYPE html>
    <html>
    <body>
        <nav class="menu">
            <a href="/home">Home</a>
        </nav>
        <button id="btn" class="button success" title="Save">Save</button>
    </body>
    </html>
"#;

#[test]
fn test_scenario_zero_total_excluded() {
    // class: "button" unmarked, "danger" negative => -1.
    // title: "Save changes" contains "Save" => +1.
    // href/onclick absent on both => 0 each. Total 0, excluded.
    let original = Document::parse(ORIGINAL).expect("should parse");
    let diff = Document::parse(r#"<span class="button danger" title="Save changes">Save</span>"#)
        .expect("should parse");

    let matcher = SimilarityMatcher::new();
    let paths = matcher.find_similar_elements(&original, &diff, "btn").expect("should match");
    assert!(paths.is_empty());
}

#[test]
fn test_scenario_positive_total_included() {
    // class: "success" positive => +1. title absent on candidate => 0. Total 1.
    let original = Document::parse(ORIGINAL).expect("should parse");
    let diff = Document::parse(r#"<span class="button success">Save</span>"#).expect("should parse");

    let matcher = SimilarityMatcher::new();
    let paths = matcher.find_similar_elements(&original, &diff, "btn").expect("should match");
    assert_eq!(paths, vec!["span.'button success' > body > html"]);
}

#[test]
fn test_scenario_classless_target_empty_for_any_diff() {
    let original = Document::parse(r#"<button id="btn" title="Save">Save</button>"#).expect("should parse");
    let diffs = [
        r#"<span class="button success" title="Save">Save</span>"#,
        r#"<div class="success"></div>"#,
        "<p>nothing relevant</p>",
    ];

    let matcher = SimilarityMatcher::new();
    for diff_html in diffs {
        let diff = Document::parse(diff_html).expect("should parse");
        let paths = matcher.find_similar_elements(&original, &diff, "btn").expect("should match");
        assert!(paths.is_empty(), "diff {:?} should yield no matches", diff_html);
    }
}

#[test]
fn test_element_not_found_for_any_diff() {
    let original = Document::parse(ORIGINAL).expect("should parse");
    let diff = Document::parse(r#"<span class="button success"></span>"#).expect("should parse");

    let matcher = SimilarityMatcher::new();
    let result = matcher.find_similar_elements(&original, &diff, "absent-id");
    assert!(matches!(result, Err(SimilisError::ElementNotFound(_))));
}

#[test]
fn test_dedup_across_shared_class_tokens() {
    let original = Document::parse(ORIGINAL).expect("should parse");
    // Both tokens of the original class list hit the same two spans.
    let diff = Document::parse(
        r#"
        <span class="button success" title="Save">first</span>
        <span class="button success" title="Save">second</span>
        "#,
    )
    .expect("should parse");

    let matcher = SimilarityMatcher::new();
    let paths = matcher.find_similar_elements(&original, &diff, "btn").expect("should match");
    assert_eq!(paths.len(), 2);
}

#[test]
fn test_duplicate_path_labels_accepted() {
    let original = Document::parse(ORIGINAL).expect("should parse");
    let diff = Document::parse(
        r#"
        <span class="success">twin</span>
        <span class="success">twin</span>
        "#,
    )
    .expect("should parse");

    let matcher = SimilarityMatcher::new();
    let paths = matcher.find_similar_elements(&original, &diff, "btn").expect("should match");

    // Indistinguishable siblings produce identical labels; both are reported.
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0], paths[1]);
}

#[test]
fn test_onclick_counts_like_other_attributes() {
    let original =
        Document::parse(r#"<button id="btn" class="button" onclick="save()">Save</button>"#).expect("should parse");

    let matcher = SimilarityMatcher::new();

    let matching = Document::parse(r#"<span class="button" onclick="save(); log()"></span>"#).expect("should parse");
    let paths = matcher.find_similar_elements(&original, &matching, "btn").expect("should match");
    assert_eq!(paths.len(), 1);

    let mismatching = Document::parse(r#"<span class="button" onclick="discard()"></span>"#).expect("should parse");
    let paths = matcher.find_similar_elements(&original, &mismatching, "btn").expect("should match");
    assert!(paths.is_empty());
}

#[cfg(feature = "fetch")]
#[test]
fn test_fetch_and_match_rejects_missing_file() {
    let result = std::thread::spawn(|| {
        tokio::runtime::Runtime::new().unwrap().block_on(fetch_and_match(
            "/nonexistent/original.html",
            "/nonexistent/diff.html",
            "btn",
            &FetchConfig::default(),
        ))
    })
    .join()
    .unwrap();

    assert!(matches!(result, Err(SimilisError::FileNotFound(_))));
}
