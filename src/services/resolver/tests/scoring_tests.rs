use super::*;

#[test]
fn identical_strings_score_100() {
    assert_eq!(token_sort_ratio("parking is terrible", "parking is terrible"), 100.0);
}

#[test]
fn token_order_is_ignored() {
    assert_eq!(token_sort_ratio("world hello", "hello world"), 100.0);
}

#[test]
fn case_and_punctuation_are_ignored() {
    assert_eq!(token_sort_ratio("Parking, is TERRIBLE!", "parking is terrible"), 100.0);
}

#[test]
fn rewordings_score_above_threshold() {
    // One-letter typo survives well above the cutoff.
    let score = token_sort_ratio("parking is terrible", "parking is terible");
    assert!(score >= MATCH_THRESHOLD, "expected >= 85, got {score}");

    // A quote embedded in a slightly longer element stays above it too.
    let score = token_sort_ratio("Parking is terrible here", "parking is terrible");
    assert!(score >= MATCH_THRESHOLD, "expected >= 85, got {score}");
}

#[test]
fn unrelated_strings_score_low() {
    let score = token_sort_ratio("Totally unrelated reply", "parking is terrible");
    assert!(score < 50.0, "expected < 50, got {score}");
}

#[test]
fn empty_sides_never_cross_the_threshold() {
    assert_eq!(token_sort_ratio("", "parking is terrible"), 0.0);
    assert_eq!(token_sort_ratio("parking is terrible", ""), 0.0);
    // Symbols-only normalizes to empty as well.
    assert_eq!(token_sort_ratio("?!...", "parking is terrible"), 0.0);
    assert_eq!(token_sort_ratio("", ""), 100.0);
}

#[test]
fn threshold_boundary_is_inclusive() {
    // 21 chars vs 18+3: bigram overlap 2*17/40 = 85.0 exactly.
    let at = token_sort_ratio(&"x".repeat(21), &format!("{}bbb", "x".repeat(18)));
    assert!((at - 85.0).abs() < 1e-9, "expected 85.0, got {at}");
    assert!(at >= MATCH_THRESHOLD);

    // 26 chars vs 22+4: bigram overlap 2*21/50 = 84.0, just below.
    let below = token_sort_ratio(&"x".repeat(26), &format!("{}bbbb", "x".repeat(22)));
    assert!((below - 84.0).abs() < 1e-9, "expected 84.0, got {below}");
    assert!(below < MATCH_THRESHOLD);
}
