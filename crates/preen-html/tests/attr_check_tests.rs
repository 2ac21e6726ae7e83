//! Integration tests for the attribute checkers and dispatch.

use preen_common::report::DiagnosticCode;
use preen_dom::{AttVal, Node, Versions};
use preen_html::{AttrCheck, Configuration, Lexer, check_attribute, checker_for};

/// Helper to run one checker over one attribute occurrence.
fn run(checker: AttrCheck, element: &str, attval: &mut AttVal) -> Lexer {
    let mut lexer = Lexer::new(Configuration::default());
    let node = Node::new(element);
    checker.check(&mut lexer, &node, attval);
    lexer
}

// Missing values
// "For every checker, missing value => exactly one MissingAttrValue
//  diagnostic and no value mutation."

#[test]
fn test_missing_value_url() {
    let mut attval = AttVal::minimized("href");
    let lexer = run(AttrCheck::Url, "a", &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::MissingAttrValue]);
    assert_eq!(lexer.report.diagnostics()[0].subject, "href");
    assert_eq!(attval.value, None);
}

#[test]
fn test_missing_value_align() {
    let mut attval = AttVal::minimized("align");
    let lexer = run(AttrCheck::Align, "p", &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::MissingAttrValue]);
    assert_eq!(lexer.report.diagnostics()[0].subject, "align");
    assert_eq!(attval.value, None);
}

#[test]
fn test_missing_value_valign() {
    let mut attval = AttVal::minimized("valign");
    let lexer = run(AttrCheck::Valign, "td", &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::MissingAttrValue]);
    assert_eq!(attval.value, None);
}

#[test]
fn test_missing_value_id() {
    let mut attval = AttVal::minimized("id");
    let lexer = run(AttrCheck::Id, "div", &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::MissingAttrValue]);
    assert_eq!(attval.value, None);
}

// URL checker

#[test]
fn test_url_backslash_fix_is_idempotent() {
    let mut attval = AttVal::new("src", "a\\b\\c");
    let lexer = run(AttrCheck::Url, "img", &mut attval);
    assert!(lexer.report.is_empty());
    assert_eq!(attval.value.as_deref(), Some("a/b/c"));

    // Second run must be a no-op.
    let lexer = run(AttrCheck::Url, "img", &mut attval);
    assert!(lexer.report.is_empty());
    assert_eq!(attval.value.as_deref(), Some("a/b/c"));
}

#[test]
fn test_url_fix_replaces_every_backslash() {
    // Leading, trailing, and consecutive backslashes all normalize.
    let mut attval = AttVal::new("href", "\\docs\\\\sub\\page\\");
    let lexer = run(AttrCheck::Url, "a", &mut attval);
    assert!(lexer.report.is_empty());
    assert_eq!(attval.value.as_deref(), Some("/docs//sub/page/"));
}

#[test]
fn test_url_flag_disabled_never_mutates() {
    let mut lexer = Lexer::new(Configuration {
        fix_backslash: false,
    });
    let node = Node::new("a");
    let mut attval = AttVal::new("href", "a\\b\\c");
    AttrCheck::Url.check(&mut lexer, &node, &mut attval);
    assert!(lexer.report.is_empty());
    assert_eq!(attval.value.as_deref(), Some("a\\b\\c"));
}

// Align checker

#[test]
fn test_align_accepts_mixed_case_keyword() {
    let mut attval = AttVal::new("align", "Center");
    let lexer = run(AttrCheck::Align, "p", &mut attval);
    assert!(lexer.report.is_empty());
    assert_eq!(attval.value.as_deref(), Some("Center"));
}

#[test]
fn test_align_rejects_vertical_keyword_on_non_image() {
    let mut attval = AttVal::new("align", "top");
    let lexer = run(AttrCheck::Align, "p", &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::BadAttributeValue]);
    // The offending value, not the attribute name, is the subject.
    assert_eq!(lexer.report.diagnostics()[0].subject, "top");
    assert_eq!(attval.value.as_deref(), Some("top"));
}

#[test]
fn test_align_on_image_like_delegates_to_valign() {
    // For every value, Align on an image-like element must behave exactly
    // like Valign called directly on the same inputs.
    for value in ["top", "left", "absmiddle", "justify", "garbage", "Middle"] {
        let mut via_align = AttVal::new("align", value);
        let align_lexer = run(AttrCheck::Align, "img", &mut via_align);

        let mut direct = AttVal::new("align", value);
        let valign_lexer = run(AttrCheck::Valign, "img", &mut direct);

        assert_eq!(
            align_lexer.report.diagnostics(),
            valign_lexer.report.diagnostics(),
            "delegation diverged for value {value:?}"
        );
        assert_eq!(align_lexer.versions, valign_lexer.versions);
        assert_eq!(via_align, direct);
    }
}

// Valign checker

#[test]
fn test_valign_standard_keywords_accepted_anywhere() {
    for value in ["top", "Middle", "BOTTOM", "baseline"] {
        let mut attval = AttVal::new("valign", value);
        let lexer = run(AttrCheck::Valign, "p", &mut attval);
        assert!(lexer.report.is_empty(), "rejected {value:?}");
    }
}

#[test]
fn test_valign_side_keywords_need_image_context() {
    let mut attval = AttVal::new("align", "left");
    let lexer = run(AttrCheck::Valign, "img", &mut attval);
    assert!(lexer.report.is_empty());

    let mut attval = AttVal::new("valign", "left");
    let lexer = run(AttrCheck::Valign, "td", &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::BadAttributeValue]);
    assert_eq!(lexer.report.diagnostics()[0].subject, "left");
}

#[test]
fn test_valign_proprietary_keyword_narrows_versions() {
    let mut attval = AttVal::new("align", "AbsMiddle");
    let lexer = run(AttrCheck::Valign, "img", &mut attval);
    assert_eq!(
        lexer.report.codes(),
        vec![DiagnosticCode::ProprietaryAttrValue]
    );
    assert_eq!(lexer.report.diagnostics()[0].subject, "AbsMiddle");
    // The mask must have been narrowed to a strict subset of ALL.
    assert!(lexer.versions.is_subset_of(Versions::ALL));
    assert_ne!(lexer.versions, Versions::ALL);
    assert_eq!(lexer.versions, Versions::PROPRIETARY);
}

#[test]
fn test_valign_proprietary_fires_regardless_of_element() {
    // Element context gates the side keywords, not the proprietary ones.
    let mut attval = AttVal::new("valign", "texttop");
    let lexer = run(AttrCheck::Valign, "td", &mut attval);
    assert_eq!(
        lexer.report.codes(),
        vec![DiagnosticCode::ProprietaryAttrValue]
    );
}

#[test]
fn test_valign_unknown_keyword_rejected() {
    let mut attval = AttVal::new("valign", "sideways");
    let lexer = run(AttrCheck::Valign, "td", &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::BadAttributeValue]);
    assert_eq!(lexer.report.diagnostics()[0].subject, "sideways");
    // Invalid values are reported, never replaced.
    assert_eq!(attval.value.as_deref(), Some("sideways"));
}

// Id checker

#[test]
fn test_id_rejects_digit_first() {
    let mut attval = AttVal::new("id", "1id");
    let lexer = run(AttrCheck::Id, "div", &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::InvalidIdValue]);
}

#[test]
fn test_id_rejects_empty() {
    let mut attval = AttVal::new("id", "");
    let lexer = run(AttrCheck::Id, "div", &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::InvalidIdValue]);
}

#[test]
fn test_id_accepts_full_name_grammar() {
    let mut attval = AttVal::new("id", "id-1.name");
    let lexer = run(AttrCheck::Id, "div", &mut attval);
    assert!(lexer.report.is_empty());
}

#[test]
fn test_id_reports_first_violation_only() {
    // Two violating characters; the scan must stop at the first, so only
    // one diagnostic fires.
    let mut attval = AttVal::new("id", "id 1!");
    let lexer = run(AttrCheck::Id, "div", &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::InvalidIdValue]);
}

// Dictionary and dispatch

#[test]
fn test_dictionary_resolves_semantic_classes() {
    assert_eq!(checker_for("href"), Some(AttrCheck::Url));
    assert_eq!(checker_for("SRC"), Some(AttrCheck::Url));
    assert_eq!(checker_for("align"), Some(AttrCheck::Align));
    assert_eq!(checker_for("valign"), Some(AttrCheck::Valign));
    assert_eq!(checker_for("id"), Some(AttrCheck::Id));
    assert_eq!(checker_for("name"), Some(AttrCheck::Name));
    assert_eq!(checker_for("onclick"), Some(AttrCheck::Script));
    assert_eq!(checker_for("disabled"), Some(AttrCheck::Bool));
    assert_eq!(checker_for("data-custom"), None);
}

#[test]
fn test_dispatch_runs_resolved_checker() {
    let mut lexer = Lexer::new(Configuration::default());
    let node = Node::new("p");
    let mut attval = AttVal::new("align", "sideways");
    check_attribute(&mut lexer, &node, &mut attval);
    assert_eq!(lexer.report.codes(), vec![DiagnosticCode::BadAttributeValue]);
}

#[test]
fn test_dispatch_ignores_unknown_attributes() {
    let mut lexer = Lexer::new(Configuration::default());
    let node = Node::new("div");
    let mut attval = AttVal::new("data-custom", "anything \\ at all");
    check_attribute(&mut lexer, &node, &mut attval);
    assert!(lexer.report.is_empty());
    assert_eq!(attval.value.as_deref(), Some("anything \\ at all"));
}

#[test]
fn test_diagnostics_accumulate_across_attributes() {
    // Collect-all-continue: several bad attributes on one document all get
    // reported through the same context.
    let mut lexer = Lexer::new(Configuration::default());
    let p = Node::new("p");

    let mut align = AttVal::new("align", "top");
    check_attribute(&mut lexer, &p, &mut align);

    let mut id = AttVal::new("id", "9lives");
    check_attribute(&mut lexer, &p, &mut id);

    let mut href = AttVal::minimized("href");
    check_attribute(&mut lexer, &p, &mut href);

    assert_eq!(
        lexer.report.codes(),
        vec![
            DiagnosticCode::BadAttributeValue,
            DiagnosticCode::InvalidIdValue,
            DiagnosticCode::MissingAttrValue,
        ]
    );
}
