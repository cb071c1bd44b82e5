use zetascan_core::{grid_point_count, ScanRange, ZetaError};

// ============================================================================
// from_strings() + validate()
// ============================================================================

#[test]
fn cli_style_strings_produce_valid_range() {
    let range = ScanRange::from_strings("14.0", "30.0", Some("0.01"), Some("1e-14")).unwrap();
    assert_eq!(range, ScanRange::default());
    assert!(range.validate().is_ok());
}

#[test]
fn whitespace_is_tolerated() {
    let range = ScanRange::from_strings(" 20 ", "25", None, None).unwrap();
    assert_eq!(range.start, 20.0);
}

#[test]
fn parse_errors_name_the_field() {
    let err = ScanRange::from_strings("14", "30", Some("fast"), None).unwrap_err();
    assert!(err.to_string().contains("step"));
    assert!(err.to_string().contains("fast"));
}

#[test]
fn parsed_zero_step_fails_validation() {
    let range = ScanRange::from_strings("14", "30", Some("0"), None).unwrap();
    let err = range.validate().unwrap_err();
    assert!(matches!(err, ZetaError::InvalidRange { .. }));
    assert!(!err.is_recoverable());
}

// ============================================================================
// Grid sizing
// ============================================================================

#[test]
fn grid_len_counts_both_ends() {
    let range = ScanRange::default();
    assert_eq!(range.grid_len().unwrap(), 1601);
}

#[test]
fn grid_len_for_unaligned_end() {
    // 14.0 .. 14.05 at 0.02 → 14.00, 14.02, 14.04
    let range = ScanRange::new(14.0, 14.05, 0.02, 1e-14);
    assert_eq!(range.grid_len().unwrap(), 3);
}

#[test]
fn grid_count_matches_floor_formula_for_decimal_steps() {
    for (start, end, step, expected) in [
        (14.0, 30.0, 0.1, 161),
        (14.0, 30.0, 0.05, 321),
        (10.0, 100.0, 0.01, 9001),
        (0.5, 1.0, 0.1, 6),
        (1.0, 2.0, 0.3, 4),
    ] {
        assert_eq!(
            grid_point_count(start, end, step).unwrap(),
            expected,
            "[{start}, {end}] step {step}"
        );
    }
}

#[test]
fn last_grid_point_is_close_to_end_when_aligned() {
    let range = ScanRange::default();
    let last = range.point(range.grid_len().unwrap() - 1);
    assert!((last - range.end).abs() < 1e-12);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn scan_range_serializes_field_names() {
    let json = serde_json::to_string(&ScanRange::default()).unwrap();
    assert!(json.contains("\"start\":14.0"));
    assert!(json.contains("\"step\":0.01"));
}
