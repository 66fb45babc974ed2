//! The feedback flow is two-phase: scoring a comment is a pure computation
//! that persists nothing, and only the explicit create call writes a record.
//! These tests pin the scoring half of that contract.

use pretty_assertions::assert_eq;
use server::sentiment;

#[test]
fn scoring_is_deterministic() {
    let comment = "The trainer was extremely helpful and the pacing was great";
    let first = sentiment::analyze(comment);
    let second = sentiment::analyze(comment);
    assert_eq!(first, second);
}

#[test]
fn praise_maps_to_positive_label_and_high_scale() {
    let result = sentiment::analyze("Outstanding session, truly excellent trainer!");
    assert_eq!(result.sentiment_label, "Positive");
    assert!(result.sentiment_score > 0.05);
    assert!(result.sentiment_score_1_5 >= 4);
}

#[test]
fn complaints_map_to_negative_label_and_low_scale() {
    let result = sentiment::analyze("Terrible material, the whole week was useless and frustrating");
    assert_eq!(result.sentiment_label, "Negative");
    assert!(result.sentiment_score < -0.05);
    assert!(result.sentiment_score_1_5 <= 2);
}

#[test]
fn factual_statements_stay_neutral_at_midpoint() {
    let result = sentiment::analyze("The session ran from nine to five in room B");
    assert_eq!(result.sentiment_label, "Neutral");
    assert_eq!(result.sentiment_score_1_5, 3);
}

#[test]
fn compound_score_is_bounded() {
    for comment in [
        "best best best amazing outstanding wonderful excellent",
        "worst worst awful terrible dreadful hate",
        "",
        "just some words with no valence at all",
    ] {
        let score = sentiment::compound_score(comment);
        assert!((-1.0..=1.0).contains(&score), "{comment} -> {score}");
    }
}

#[test]
fn negated_praise_flips_to_criticism() {
    let praised = sentiment::analyze("the onboarding was helpful");
    let negated = sentiment::analyze("the onboarding was not helpful");
    assert!(praised.sentiment_score > 0.0);
    assert!(negated.sentiment_score < 0.0);
}
