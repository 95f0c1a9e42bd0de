//! Tests for post composition.

use crier_core::PostComposer;

#[test]
fn test_appends_fallback_when_no_hashtag() {
    let composer = PostComposer::new(250, "#VR #AR");
    let post = composer.compose("This is a tweet without hashtags.");

    assert!(post.text().ends_with(" #VR #AR"));
    assert!(post.char_len() <= 250);
    assert!(post.has_hashtag());
}

#[test]
fn test_compliant_post_unchanged() {
    let composer = PostComposer::new(250, "#VR #AR");
    let raw = "This is a tweet with #VR hashtag.";
    let post = composer.compose(raw);

    assert_eq!(post.text(), raw);
}

#[test]
fn test_idempotent_on_composed_output() {
    let composer = PostComposer::new(250, "#News");
    let first = composer.compose("Some plain announcement without tags");
    let second = composer.compose(first.text());

    assert_eq!(first.text(), second.text());
}

#[test]
fn test_empty_input_yields_fallback_alone() {
    let composer = PostComposer::new(250, "#VR #AR");

    assert_eq!(composer.compose("").text(), "#VR #AR");
    assert_eq!(composer.compose("   \n   ").text(), "#VR #AR");
}

#[test]
fn test_truncation_lands_exactly_at_max() {
    let composer = PostComposer::new(280, "#News");
    let raw = format!("#Tech {}", "a".repeat(294));
    let post = composer.compose(&raw);

    assert_eq!(post.char_len(), 280);
    assert!(post.text().ends_with("..."));
    assert!(post.has_hashtag());
}

#[test]
fn test_cap_holds_after_fallback_append() {
    let composer = PostComposer::new(280, "#News");
    let raw = "a".repeat(300);
    let post = composer.compose(&raw);

    assert!(post.char_len() <= 280);
    assert!(post.text().ends_with(" #News"));
}

#[test]
fn test_hashtag_lost_to_truncation_gets_fallback() {
    let composer = PostComposer::new(280, "#News");
    // The only hashtag sits past the truncation point.
    let raw = format!("{}#Late", "a".repeat(290));
    let post = composer.compose(&raw);

    assert!(post.char_len() <= 280);
    assert!(post.has_hashtag());
    assert!(post.text().ends_with(" #News"));
}

#[test]
fn test_multiline_selects_first_content_line() {
    let composer = PostComposer::new(250, "#News");
    let raw = "**Option 1**\n\nGreat post about #AI\nAnother line entirely";
    let post = composer.compose(raw);

    assert_eq!(post.text(), "Great post about #AI");
}

#[test]
fn test_single_line_not_filtered() {
    let composer = PostComposer::new(250, "#News");
    let raw = "**Bold start** but a single line with #Tag";
    let post = composer.compose(raw);

    assert_eq!(post.text(), raw);
}

#[test]
fn test_multibyte_truncation_counts_characters() {
    let composer = PostComposer::new(250, "#News");
    let raw = "€".repeat(300);
    let post = composer.compose(&raw);

    assert!(post.char_len() <= 250);
    assert!(post.has_hashtag());
}

#[test]
fn test_length_bound_holds_for_assorted_inputs() {
    let composer = PostComposer::new(250, "#VR #AR");
    let inputs = [
        "short".to_string(),
        "with #tag".to_string(),
        "x".repeat(250),
        "y".repeat(251),
        format!("{} #end", "z".repeat(260)),
        "**header**\nbody line".to_string(),
    ];

    for raw in &inputs {
        let post = composer.compose(raw);
        assert!(post.char_len() <= 250, "over budget for input {raw:?}");
        assert!(post.has_hashtag(), "no hashtag for input {raw:?}");
    }
}
