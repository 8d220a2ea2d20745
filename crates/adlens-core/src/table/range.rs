// ── Range validator ──
//
// Boundary validation for user-entered numeric range text. Invalid
// input never reaches a `FilterState`; callers keep the last valid
// range until a valid edit arrives.

use super::filter::NumericRange;

/// Validate a min/max pair of raw input strings.
///
/// Empty on both sides is valid (no constraint). A non-empty side must
/// parse as a finite number ≥ 0. When both sides parse, min must be
/// ≤ max.
pub fn validate_range(min_text: &str, max_text: &str) -> bool {
    parse_range(min_text, max_text).is_some()
}

/// Parse a min/max pair into a [`NumericRange`], or `None` when the
/// input is invalid under the [`validate_range`] rules.
pub fn parse_range(min_text: &str, max_text: &str) -> Option<NumericRange> {
    let min = parse_bound(min_text)?;
    let max = parse_bound(max_text)?;
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return None;
        }
    }
    Some(NumericRange { min, max })
}

/// One side of the range: empty means unbounded, otherwise a finite
/// non-negative number. The outer `Option` is validity.
fn parse_bound(text: &str) -> Option<Option<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Some(None);
    }
    let value: f64 = text.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_both_sides_is_valid() {
        assert!(validate_range("", ""));
        assert_eq!(parse_range("", ""), Some(NumericRange::default()));
    }

    #[test]
    fn ordered_pair_is_valid() {
        assert!(validate_range("50", "100"));
        let range = parse_range("50", "100").expect("valid range");
        assert_eq!(range.min, Some(50.0));
        assert_eq!(range.max, Some(100.0));
    }

    #[test]
    fn inverted_pair_is_invalid() {
        assert!(!validate_range("100", "50"));
        assert_eq!(parse_range("100", "50"), None);
    }

    #[test]
    fn negative_bound_is_invalid() {
        assert!(!validate_range("-5", ""));
        assert!(!validate_range("", "-1"));
    }

    #[test]
    fn non_numeric_and_non_finite_are_invalid() {
        assert!(!validate_range("abc", ""));
        assert!(!validate_range("", "1e999"));
        assert!(!validate_range("NaN", ""));
        assert!(!validate_range("inf", ""));
    }

    #[test]
    fn single_sided_ranges_are_valid() {
        let range = parse_range("1000", "").expect("valid range");
        assert_eq!(range.min, Some(1000.0));
        assert_eq!(range.max, None);

        let range = parse_range("", "9000").expect("valid range");
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(9000.0));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(validate_range(" 50 ", " 100 "));
    }

    #[test]
    fn equal_bounds_are_valid() {
        assert!(validate_range("75", "75"));
    }
}
