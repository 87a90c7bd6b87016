//! Textual configuration of [`Clusters`].
//!
//! Options are written `name=value` and separated by commas, for example
//! `center_count=3,datapoints=10:20:30,shape=point`.  Per-cluster and per-axis
//! options take either one value or a colon-separated list.

use crate::Clusters;
use crate::Error;
use crate::OneOrMany;
use std::str::FromStr;

/// Names of the options accepted by [`Clusters::set_option`].
pub const OPTION_NAMES: [&str; 9] = [
    "center_count",
    "datapoints",
    "limit",
    "shape",
    "dimensions",
    "radii",
    "shuffle",
    "distance",
    "opposite",
];

fn invalid(name: &str, value: &str) -> Error {
    Error::InvalidOptionValue {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn parse_arg<T>(name: &str, value: &str) -> Result<T, Error>
where
    T: FromStr,
{
    value.trim().parse().map_err(|_| invalid(name, value))
}

fn parse_f64_arg(name: &str, value: &str) -> Result<f64, Error> {
    let f: f64 = parse_arg(name, value)?;
    if !f.is_finite() {
        return Err(invalid(name, value));
    }
    Ok(f)
}

fn parse_list<T>(
    name: &str,
    value: &str,
    parse_item: impl Fn(&str, &str) -> Result<T, Error>,
) -> Result<OneOrMany<T>, Error> {
    let mut items = value
        .split(':')
        .map(|item| parse_item(name, item))
        .collect::<Result<Vec<T>, Error>>()?;
    if items.len() == 1 {
        return Ok(OneOrMany::One(items.remove(0)));
    }
    Ok(OneOrMany::Many(items))
}

impl Clusters {
    /// Set the option called `name` from its textual `value`.
    ///
    /// Values are only parsed here; they are checked against each other when
    /// clusters are generated.  Parametric functions cannot be given this way.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), nuage::Error> {
    /// let mut clusters = nuage::Clusters::default();
    /// clusters.set_option("radii", "0.5:2")?;
    ///
    /// assert_eq!(clusters.radii, nuage::OneOrMany::Many(vec![0.5, 2.0]));
    /// assert!(clusters.set_option("colour", "blue").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), Error> {
        match name {
            "center_count" => self.center_count = parse_arg(name, value)?,
            "datapoints" => self.datapoints = parse_list(name, value, parse_arg)?,
            "limit" => {
                self.limit = match value.trim() {
                    "none" => None,
                    _ => Some(parse_list(name, value, parse_f64_arg)?),
                }
            }
            "shape" => self.shape = value.trim().parse()?,
            "dimensions" => self.dimensions = parse_arg(name, value)?,
            "radii" => self.radii = parse_list(name, value, parse_f64_arg)?,
            "shuffle" => self.shuffle = parse_arg(name, value)?,
            "distance" => self.distance = parse_f64_arg(name, value)?,
            "opposite" => self.opposite = parse_arg(name, value)?,
            _ => {
                return Err(Error::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

/// Parse a comma-separated list of options, starting from the defaults.
impl FromStr for Clusters {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut clusters = Clusters::default();
        for option in s.split(',').map(str::trim).filter(|option| !option.is_empty()) {
            let (name, value) = option
                .split_once('=')
                .ok_or_else(|| invalid(option, ""))?;
            clusters.set_option(name.trim(), value)?;
        }
        Ok(clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    #[test]
    fn test_parse() {
        let clusters: Clusters = "center_count=3, datapoints=10:20:30, dimensions=4, \
            shape=line, radii=0.5, shuffle=false, distance=2.5, limit=8:8:8:9"
            .parse()
            .unwrap();

        assert_eq!(clusters.center_count, 3);
        assert_eq!(clusters.datapoints, OneOrMany::Many(vec![10, 20, 30]));
        assert_eq!(clusters.dimensions, 4);
        assert_eq!(clusters.shape, Shape::Linear);
        assert_eq!(clusters.radii, OneOrMany::One(0.5));
        assert!(!clusters.shuffle);
        assert_eq!(clusters.distance, 2.5);
        assert_eq!(
            clusters.limit,
            Some(OneOrMany::Many(vec![8.0, 8.0, 8.0, 9.0])),
        );
        assert!(clusters.parametric.is_none());
    }

    #[test]
    fn test_empty_is_default() {
        let clusters: Clusters = "".parse().unwrap();
        let default = Clusters::default();

        assert_eq!(clusters.center_count, default.center_count);
        assert_eq!(clusters.datapoints, default.datapoints);
        assert_eq!(clusters.shape, default.shape);
        assert_eq!(clusters.shuffle, default.shuffle);
    }

    #[test]
    fn test_limit_none() {
        let mut clusters: Clusters = "limit=3".parse().unwrap();
        assert_eq!(clusters.limit, Some(OneOrMany::One(3.0)));
        clusters.set_option("limit", "none").unwrap();
        assert_eq!(clusters.limit, None);
    }

    #[test]
    fn test_unknown_option() {
        let err = "center_count=2,colour=blue".parse::<Clusters>().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownOption {
                name: "colour".to_string()
            },
        );
        let message = err.to_string();
        for name in OPTION_NAMES {
            assert!(message.contains(name), "{message:?} lacks {name:?}");
        }
    }

    #[test]
    fn test_unknown_shape() {
        let err = "shape=triangle".parse::<Clusters>().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownShape {
                name: "triangle".to_string()
            },
        );
        assert!(err.to_string().contains("point"));
    }

    #[test]
    fn test_invalid_values() {
        for (options, name) in [
            ("center_count=-1", "center_count"),
            ("datapoints=10:x", "datapoints"),
            ("radii=inf", "radii"),
            ("opposite=yes", "opposite"),
            ("distance", "distance"),
        ] {
            let err = options.parse::<Clusters>().unwrap_err();
            assert!(
                matches!(&err, Error::InvalidOptionValue { name: n, .. } if n == name),
                "{options:?} gave {err:?}",
            );
        }
    }
}
