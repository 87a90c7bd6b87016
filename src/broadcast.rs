use crate::Error;

/// A value given either once for all clusters (or axes), or once for each.
#[derive(Clone, Debug, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T>
where
    T: Clone,
{
    /// Expand the value into exactly `len` items.
    ///
    /// A single value, or a sequence of one item, is repeated `len` times.
    /// Otherwise the sequence must already have `len` items.  `field` names
    /// the option in the returned error.
    pub fn broadcast(&self, field: &'static str, len: usize) -> Result<Vec<T>, Error> {
        match self {
            OneOrMany::One(value) => Ok(vec![value.clone(); len]),
            OneOrMany::Many(values) if values.len() == len => Ok(values.clone()),
            OneOrMany::Many(values) if values.len() == 1 => Ok(vec![values[0].clone(); len]),
            OneOrMany::Many(values) => Err(Error::LenMismatch {
                field,
                expected: len,
                actual: values.len(),
            }),
        }
    }
}

impl From<usize> for OneOrMany<usize> {
    fn from(value: usize) -> Self {
        OneOrMany::One(value)
    }
}

impl From<f64> for OneOrMany<f64> {
    fn from(value: f64) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(values: [T; N]) -> Self {
        OneOrMany::Many(Vec::from(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_scalar() {
        let datapoints = OneOrMany::from(50_usize);
        assert_eq!(datapoints.broadcast("datapoints", 3), Ok(vec![50, 50, 50]));
    }

    #[test]
    fn test_broadcast_sequence() {
        let datapoints = OneOrMany::from([10_usize, 20, 30]);
        assert_eq!(datapoints.broadcast("datapoints", 3), Ok(vec![10, 20, 30]));
    }

    #[test]
    fn test_broadcast_single_item() {
        let radii = OneOrMany::from(vec![0.5]);
        assert_eq!(radii.broadcast("radii", 4), Ok(vec![0.5; 4]));
    }

    #[test]
    fn test_broadcast_mismatch() {
        let radii = OneOrMany::from([1.0, 2.0]);
        assert_eq!(
            radii.broadcast("radii", 3),
            Err(Error::LenMismatch {
                field: "radii",
                expected: 3,
                actual: 2,
            }),
        );
    }

    #[test]
    fn test_broadcast_empty() {
        let radii: OneOrMany<f64> = OneOrMany::Many(Vec::new());
        assert!(matches!(
            radii.broadcast("radii", 2),
            Err(Error::LenMismatch { actual: 0, .. }),
        ));
    }
}
