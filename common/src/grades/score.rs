//! Score values held by the grade grid.

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// A cell value: either a number inside `[MIN_SCORE, MAX_SCORE]` or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Score {
    #[default]
    Empty,
    Value(f64),
}

impl Score {
    /// Interprets what was typed into a grade cell.
    ///
    /// - blank input clears the cell (`Some(Score::Empty)`);
    /// - text that is not a decimal number yields `None`, meaning "keep the
    ///   previous value"; this includes the words `NaN` and `inf`;
    /// - numbers are clamped into `[MIN_SCORE, MAX_SCORE]`, even literals
    ///   that overflow to infinity such as `1e400`.
    pub fn parse_input(raw: &str) -> Option<Score> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(Score::Empty);
        }
        if trimmed
            .chars()
            .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
        {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if !value.is_nan() => Some(Score::Value(clamp(value))),
            _ => None,
        }
    }

    /// Wraps a value received from the server. Stored as-is, without clamping,
    /// so the baseline mirrors server truth.
    pub fn from_server(score: Option<f64>) -> Score {
        match score {
            Some(value) => Score::Value(value),
            None => Score::Empty,
        }
    }

    /// Normalized form used for comparisons and for the update payload.
    pub fn normalized(self) -> Option<f64> {
        match self {
            Score::Empty => None,
            Score::Value(value) => Some(value),
        }
    }

    /// Text shown in a grid input: `""` for empty, `70` rather than `70.0`.
    pub fn input_value(self) -> String {
        match self {
            Score::Empty => String::new(),
            Score::Value(value) => value.to_string(),
        }
    }
}

/// Clamps into the score range; `-0.0` comes out as `0.0`.
pub fn clamp(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE) + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_input_is_clamped() {
        assert_eq!(Score::parse_input("150"), Some(Score::Value(100.0)));
        assert_eq!(Score::parse_input("-3"), Some(Score::Value(0.0)));
        assert_eq!(Score::parse_input("87.5"), Some(Score::Value(87.5)));
        assert_eq!(Score::parse_input(" 70 "), Some(Score::Value(70.0)));
    }

    #[test]
    fn blank_input_clears() {
        assert_eq!(Score::parse_input(""), Some(Score::Empty));
        assert_eq!(Score::parse_input("   "), Some(Score::Empty));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        for raw in ["abc", "7o", "NaN", "nan", "inf", "-inf", "infinity", "e", "1e"] {
            assert_eq!(Score::parse_input(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn overflowing_literals_clamp_to_the_range_ends() {
        assert_eq!(Score::parse_input("1e400"), Some(Score::Value(100.0)));
        assert_eq!(Score::parse_input("-1e400"), Some(Score::Value(0.0)));
        assert_eq!(Score::parse_input("2.5E1"), Some(Score::Value(25.0)));
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let score = Score::parse_input("-0").unwrap();
        match score {
            Score::Value(value) => assert!(value == 0.0 && value.is_sign_positive()),
            Score::Empty => panic!("expected a value"),
        }
        assert_eq!(score.input_value(), "0");
        assert!(clamp(-0.0).is_sign_positive());
    }

    #[test]
    fn input_value_drops_trailing_zero_fraction() {
        assert_eq!(Score::Value(70.0).input_value(), "70");
        assert_eq!(Score::Value(82.25).input_value(), "82.25");
        assert_eq!(Score::Empty.input_value(), "");
    }
}
