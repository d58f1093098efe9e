use super::*;

#[test]
fn test_from_bounds_computes_length() {
    let span = TextSpan::from_bounds(4, 10);
    assert_eq!(span.start, 4);
    assert_eq!(span.length, 6);
    assert_eq!(span.end(), 10);
}

#[test]
fn test_from_bounds_inverted_is_empty() {
    let span = TextSpan::from_bounds(10, 4);
    assert!(span.is_empty());
    assert_eq!(span.start, 10);
}

#[test]
fn test_contains_is_half_open() {
    let span = TextSpan::new(2, 3);
    assert!(!span.contains(1));
    assert!(span.contains(2));
    assert!(span.contains(4));
    assert!(!span.contains(5));
}

#[test]
fn test_intersects_with_overlapping_range() {
    let span = TextSpan::new(10, 10);
    assert!(span.intersects_with(5, 10));
    assert!(span.intersects_with(12, 2));
    assert!(span.intersects_with(0, 100));
}

#[test]
fn test_intersects_with_touching_ends() {
    let span = TextSpan::new(10, 10);
    // Ends exactly at span start
    assert!(span.intersects_with(5, 5));
    // Starts exactly at span end
    assert!(span.intersects_with(20, 3));
}

#[test]
fn test_intersects_with_disjoint_range() {
    let span = TextSpan::new(10, 10);
    assert!(!span.intersects_with(0, 9));
    assert!(!span.intersects_with(21, 4));
}

#[test]
fn test_everything_intersects_any_range() {
    let span = TextSpan::everything();
    assert!(span.intersects_with(0, 0));
    assert!(span.intersects_with(1_000_000, 10));
    assert_eq!(span.end(), u32::MAX);
}

#[test]
fn test_span_serializes_as_start_length() {
    let span = TextSpan::new(3, 7);
    let json = serde_json::to_value(span).unwrap();
    assert_eq!(json, serde_json::json!({ "start": 3, "length": 7 }));
}
