use itertools::Itertools as _;
use std::fmt;

/// Errors returned while configuring or generating clusters.
///
/// All variants but [`Error::ZeroVector`] are raised before any random value
/// is drawn.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The shape name is not one of [`crate::Shape::NAMES`].
    UnknownShape { name: String },

    /// Line and curve shapes need one parametric function per cluster.
    MissingParametric { shape: crate::Shape },

    /// A count that must be strictly positive was zero.
    NotPositive { field: &'static str },

    /// A per-cluster (or per-axis) sequence has the wrong length.
    LenMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A cluster radius is not a finite, strictly positive number.
    InvalidRadius { cluster: usize, radius: f64 },

    /// A limit is not a finite, strictly positive number.
    InvalidLimit { axis: usize, limit: f64 },

    /// The mean distance of centers must be finite and non-negative.
    InvalidDistance { distance: f64 },

    /// Opposite placement was requested for curve-shaped centers.
    OppositeRequiresPoint,

    /// Opposite placement only works with exactly two centers.
    OppositeCenterCount { actual: usize },

    /// The option name is not one of [`crate::OPTION_NAMES`].
    UnknownOption { name: String },

    /// The option value could not be parsed.
    InvalidOptionValue { name: String, value: String },

    /// A parametric function returned a matrix of the wrong shape.
    ParametricShape {
        cluster: usize,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A vector with a zero (or non-finite) norm cannot be normalized.
    ZeroVector { row: usize },
}

impl Error {
    /// Whether the error comes from the arguments given by the caller, as
    /// opposed to a numeric failure during generation.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Error::ZeroVector { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownShape { name } => write!(
                f,
                "unknown cluster center shape {name:?} (expected one of {})",
                crate::Shape::NAMES.iter().format(", "),
            ),
            Error::MissingParametric { shape } => write!(
                f,
                "cluster center shape \"{shape}\" requires a parametric function",
            ),
            Error::NotPositive { field } => write!(f, "{field} must be greater than zero"),
            Error::LenMismatch {
                field,
                expected,
                actual,
            } => write!(f, "expected {expected} items for {field}, got {actual}"),
            Error::InvalidRadius { cluster, radius } => write!(
                f,
                "radius of cluster {cluster} must be finite and positive, got {radius}",
            ),
            Error::InvalidLimit { axis, limit } => write!(
                f,
                "limit on axis {axis} must be finite and positive, got {limit}",
            ),
            Error::InvalidDistance { distance } => write!(
                f,
                "center distance must be finite and non-negative, got {distance}",
            ),
            Error::OppositeRequiresPoint => {
                write!(f, "opposite placement requires point-shaped centers")
            }
            Error::OppositeCenterCount { actual } => write!(
                f,
                "opposite placement requires exactly 2 centers, got {actual}",
            ),
            Error::UnknownOption { name } => write!(
                f,
                "unknown option {name:?} (accepted options: {})",
                crate::OPTION_NAMES.iter().format(", "),
            ),
            Error::InvalidOptionValue { name, value } => {
                write!(f, "invalid value {value:?} for option {name:?}")
            }
            Error::ParametricShape {
                cluster,
                expected,
                actual,
            } => write!(
                f,
                "parametric function of cluster {cluster} returned a {}x{} matrix, expected {}x{}",
                actual.0, actual.1, expected.0, expected.1,
            ),
            Error::ZeroVector { row } => write!(f, "cannot normalize zero vector at row {row}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_shape_lists_names() {
        let err = Error::UnknownShape {
            name: "triangle".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("triangle"));
        for name in crate::Shape::NAMES {
            assert!(message.contains(name), "{message:?} lacks {name:?}");
        }
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_zero_vector_is_numeric() {
        assert!(!Error::ZeroVector { row: 3 }.is_invalid_argument());
    }
}
