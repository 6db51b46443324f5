//! Device command parsing.
//!
//! The device speaks one line-oriented command:
//!
//! ```text
//! GOTO <x> <y>
//! ```
//!
//! where `x` and `y` are fractions of the screen size. Range is not checked
//! here; [`crate::mapping::MotionBounds`] clamps later.

use serde::{Deserialize, Serialize};

/// Keyword of the only command the device sends.
pub const GOTO_KEYWORD: &str = "GOTO";

/// Fractional screen position, nominally in `[0.0, 1.0]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCoordinate {
    pub x: f64,
    pub y: f64,
}

impl NormalizedCoordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Parse a `GOTO x y` line.
///
/// Returns `None` for anything that is not exactly three whitespace-separated
/// fields with the `GOTO` keyword and two floats. Callers drop such lines.
pub fn parse_goto(line: &str) -> Option<NormalizedCoordinate> {
    let mut fields = line.split_whitespace();

    let keyword = fields.next()?;
    let x = fields.next()?;
    let y = fields.next()?;
    if fields.next().is_some() || keyword != GOTO_KEYWORD {
        return None;
    }

    let x = x.parse::<f64>().ok()?;
    let y = y.parse::<f64>().ok()?;
    Some(NormalizedCoordinate::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parses_well_formed_line() {
        assert_eq!(
            parse_goto("GOTO 0.25 0.75"),
            Some(NormalizedCoordinate::new(0.25, 0.75))
        );
    }

    #[test]
    fn test_tolerates_surrounding_whitespace() {
        assert_eq!(
            parse_goto("  GOTO\t0.5   0.5\r\n"),
            Some(NormalizedCoordinate::new(0.5, 0.5))
        );
    }

    #[test]
    fn test_does_not_clamp() {
        assert_eq!(
            parse_goto("GOTO 2 -1.5"),
            Some(NormalizedCoordinate::new(2.0, -1.5))
        );
        assert_eq!(
            parse_goto("GOTO 1e3 -2E-1"),
            Some(NormalizedCoordinate::new(1000.0, -0.2))
        );
    }

    #[test]
    fn test_rejects_wrong_keyword() {
        assert_eq!(parse_goto("MOVE 1 2"), None);
        assert_eq!(parse_goto("goto 0.1 0.2"), None);
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        assert_eq!(parse_goto(""), None);
        assert_eq!(parse_goto("   "), None);
        assert_eq!(parse_goto("GOTO"), None);
        assert_eq!(parse_goto("GOTO 0.5"), None);
        assert_eq!(parse_goto("GOTO 0.5 0.5 0.5"), None);
    }

    #[test]
    fn test_rejects_non_numeric_fields() {
        assert_eq!(parse_goto("GOTO x 0.5"), None);
        assert_eq!(parse_goto("GOTO 0.5 y"), None);
        assert_eq!(parse_goto("GOTO 0,5 0,5"), None);
    }

    proptest! {
        #[test]
        fn prop_well_formed_lines_round_trip(x in -10.0f64..10.0, y in -10.0f64..10.0) {
            let parsed = parse_goto(&format!("GOTO {x} {y}"));
            prop_assert_eq!(parsed, Some(NormalizedCoordinate::new(x, y)));
        }

        #[test]
        fn prop_other_keywords_rejected(
            keyword in "[A-Za-z]{1,8}",
            x in 0.0f64..1.0,
            y in 0.0f64..1.0,
        ) {
            prop_assume!(keyword != GOTO_KEYWORD);
            prop_assert_eq!(parse_goto(&format!("{keyword} {x} {y}")), None);
        }
    }
}
