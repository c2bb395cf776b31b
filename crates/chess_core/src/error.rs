use std::fmt;

use thiserror::Error;

/// One of the two board axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// A coordinate fell outside `MIN_COORD..=MAX_COORD`.
    #[error("{axis} coordinate must be between 0 and 7, got {value}")]
    OutOfBounds { axis: Axis, value: i8 },
    /// Algebraic notation other than a file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid algebraic notation: '{0}'")]
    InvalidNotation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn out_of_bounds_message_names_axis_and_value() {
        let err = PositionError::OutOfBounds { axis: Axis::Y, value: -1 };
        assert_eq!(err.to_string(), "y coordinate must be between 0 and 7, got -1");
    }

    #[test]
    fn invalid_notation_message_quotes_input() {
        let err = PositionError::InvalidNotation("z9".to_string());
        assert_eq!(err.to_string(), "invalid algebraic notation: 'z9'");
    }
}
