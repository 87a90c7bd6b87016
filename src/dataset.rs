use nalgebra::DMatrix;
use nalgebra::DVector;

/// Generated points and the cluster each of them belongs to.
///
/// Row `i` of [`Dataset::data`] belongs to the cluster [`Dataset::labels`]`[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    /// One point per row, one column per dimension.
    pub data: DMatrix<f64>,

    /// Cluster index of each row of `data`, stored as whole numbers.
    pub labels: DVector<f64>,

    /// Center of each cluster, one per row, for point-shaped centers.
    ///
    /// `None` when centers are traced by parametric functions, since each
    /// point then has its own center.
    pub centers: Option<DMatrix<f64>>,
}

impl Dataset {
    /// Number of generated points.
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimension of the embedding space.
    pub fn dimensions(&self) -> usize {
        self.data.ncols()
    }

    /// Cluster indices as integers.
    pub fn cluster_ids(&self) -> Vec<usize> {
        self.labels.iter().map(|label| *label as usize).collect()
    }

    /// Number of points in each of the `center_count` clusters.
    ///
    /// Labels outside of `0..center_count` are not counted.
    pub fn cluster_sizes(&self, center_count: usize) -> Vec<usize> {
        let mut sizes = vec![0; center_count];
        for cluster in self.cluster_ids() {
            if let Some(size) = sizes.get_mut(cluster) {
                *size += 1;
            }
        }
        sizes
    }

    /// Split the dataset into its coordinates and labels.
    pub fn into_parts(self) -> (DMatrix<f64>, DVector<f64>) {
        (self.data, self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset {
            data: DMatrix::from_row_slice(4, 2, &[0.0, 0.1, 5.0, 5.1, 0.2, 0.0, 4.9, 5.0]),
            labels: DVector::from_vec(vec![0.0, 1.0, 0.0, 1.0]),
            centers: None,
        }
    }

    #[test]
    fn test_accessors() {
        let dataset = dataset();
        assert_eq!(dataset.len(), 4);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.dimensions(), 2);
        assert_eq!(dataset.cluster_ids(), [0, 1, 0, 1]);
        assert_eq!(dataset.cluster_sizes(2), [2, 2]);
        assert_eq!(dataset.cluster_sizes(1), [2]);
    }

    #[test]
    fn test_into_parts() {
        let (data, labels) = dataset().into_parts();
        assert_eq!(data.shape(), (4, 2));
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[1], 1.0);
    }
}
