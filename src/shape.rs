use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Shape of the cluster centers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shape {
    /// Each cluster is scattered around a single point.
    #[default]
    Point,

    /// Each cluster is scattered along a line, given by a parametric function.
    Linear,

    /// Each cluster is scattered along a curve, given by a parametric function.
    Curve,
}

impl Shape {
    /// Names accepted by [`Shape::from_str`].
    pub const NAMES: [&'static str; 5] = ["point", "linear", "line", "curve", "nonlinear"];

    /// Whether cluster centers are traced by parametric functions.
    pub fn is_parametric(self) -> bool {
        matches!(self, Shape::Linear | Shape::Curve)
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match s {
            "point" => Shape::Point,
            "linear" | "line" => Shape::Linear,
            "curve" | "nonlinear" => Shape::Curve,
            _ => {
                return Err(Error::UnknownShape {
                    name: s.to_string(),
                })
            }
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Point => "point",
            Shape::Linear => "linear",
            Shape::Curve => "curve",
        })
    }
}
