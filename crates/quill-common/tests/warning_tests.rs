//! Integration tests for the warning system.

use quill_common::warning::{clear_warnings, has_warned, set_quiet, warn_once, warning_count};

// The registry is process-wide, so everything runs in one test.
#[test]
fn test_warnings_are_deduplicated() {
    set_quiet(true);
    clear_warnings();

    warn_once("CSS", "unsupported unit 'q'");
    warn_once("CSS", "unsupported unit 'q'");
    warn_once("CSS", "unsupported unit 'furlong'");
    // Same message from another component is distinct
    warn_once("CLI", "unsupported unit 'q'");
    assert_eq!(warning_count(), 3);
    assert!(has_warned("CLI", "unsupported unit 'q'"));
    assert!(!has_warned("CLI", "unsupported unit 'furlong'"));

    clear_warnings();
    assert_eq!(warning_count(), 0);
    warn_once("CSS", "unsupported unit 'q'");
    assert_eq!(warning_count(), 1);
}
