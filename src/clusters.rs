//! Generation of labeled clusters of points.
//!
//! Points of a cluster are sampled in two steps.  First, a direction is drawn
//! for each point by warping uniform values through a tangent and normalizing
//! them.  This favors some directions over others, which makes clusters look
//! less regular than a uniform ball would.  Second, each coordinate is
//! multiplied by a uniform value in `[-1, 1)` so that points fill the cluster
//! instead of lying on its shell.
//!
//! The resulting cloud is then scaled by the cluster radius and translated by
//! the cluster center, which is either a single point or, for each point, a
//! point of a parametric curve.

use crate::normalize::normalize_rows_mut;
use crate::Dataset;
use crate::Error;
use crate::OneOrMany;
use crate::Parametric;
use crate::Shape;
use nalgebra::DMatrix;
use nalgebra::DVector;
use nalgebra::RowDVector;
use rand::seq::SliceRandom as _;
use rand::Rng;
use rand_distr::Distribution as _;
use rand_distr::Normal;
use std::fmt;

const WARP_SCALE: f64 = 1.5708;
const WARP_SHIFT: f64 = 0.5;

fn warp(u: f64) -> f64 {
    f64::tan(WARP_SCALE * u - WARP_SHIFT)
}

/// Unit vectors whose directions are skewed by the tangent warp, one per row.
fn warped_directions<R>(rng: &mut R, count: usize, dimensions: usize) -> Result<DMatrix<f64>, Error>
where
    R: Rng + ?Sized,
{
    let mut directions = DMatrix::from_fn(count, dimensions, |_, _| warp(rng.gen()));
    normalize_rows_mut(&mut directions)?;
    Ok(directions)
}

/// Offsets of the points of a cluster, before scaling and translation.
///
/// Every coordinate lies in `(-1, 1)`.
fn sample_cloud<R>(rng: &mut R, point_count: usize, dimensions: usize) -> Result<DMatrix<f64>, Error>
where
    R: Rng + ?Sized,
{
    let directions = warped_directions(rng, point_count, dimensions)?;
    let fill = DMatrix::from_fn(point_count, dimensions, |_, _| rng.gen_range(-1.0..1.0));
    Ok(directions.component_mul(&fill))
}

/// A center at `signum(distance) * distance²` from the origin, in a warped
/// random direction.
fn random_center<R>(rng: &mut R, dimensions: usize, distance: f64) -> Result<RowDVector<f64>, Error>
where
    R: Rng + ?Sized,
{
    let direction = warped_directions(rng, 1, dimensions)?;
    Ok(direction.row(0) * (distance.signum() * f64::powi(distance, 2)))
}

/// One of two centers mirrored across the origin, at `distance²` from it.
///
/// Directions are drawn with non-negative coordinates, so the first center
/// lies in the positive orthant and the second one in the negative orthant.
fn opposite_center<R>(
    rng: &mut R,
    dimensions: usize,
    distance: f64,
    cluster: usize,
) -> Result<RowDVector<f64>, Error>
where
    R: Rng + ?Sized,
{
    let mut direction = DMatrix::from_fn(1, dimensions, |_, _| rng.gen());
    normalize_rows_mut(&mut direction)?;
    let norm = f64::powi(distance, 2);
    let norm = if cluster == 0 { norm } else { -norm };
    Ok(direction.row(0) * norm)
}

/// Map offsets from `(-1, 1)` to `(-3 radius, radius)` and move them around
/// `center`.
fn surround(cloud: &mut DMatrix<f64>, radius: f64, center: &RowDVector<f64>) {
    cloud.apply(|v| *v = f64::mul_add(*v, 2.0 * radius, -radius));
    for (axis, mut column) in cloud.column_iter_mut().enumerate() {
        column.add_scalar_mut(center[axis]);
    }
}

/// How cluster centers are placed, resolved from the configuration.
#[derive(Clone, Copy)]
enum Placement<'a> {
    /// Centers at random distances and directions from the origin.
    Point,

    /// Two centers mirrored across the origin.
    Opposite,

    /// One center per point, traced by the parametric function of the
    /// cluster.
    Curve(&'a [Box<dyn Parametric>]),
}

/// Validated, per-cluster arguments.
struct Plan<'a> {
    datapoints: Vec<usize>,
    radii: Vec<f64>,
    placement: Placement<'a>,
}

/// # Cluster generator
///
/// Generates `center_count` clusters of points in a space of `dimensions`
/// dimensions, along with the index of the cluster of each point.
///
/// Options that are given per cluster (`datapoints` and `radii`) accept either
/// a single value, used for every cluster, or one value per cluster.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), nuage::Error> {
/// use rand::SeedableRng as _;
///
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
/// let dataset = nuage::Clusters {
///     center_count: 3,
///     datapoints: vec![10, 20, 30].into(),
///     dimensions: 3,
///     distance: 2.0,
///     ..Default::default()
/// }
/// .generate(&mut rng)?;
///
/// assert_eq!(dataset.data.shape(), (60, 3));
/// assert_eq!(dataset.cluster_sizes(3), [10, 20, 30]);
/// # Ok(())
/// # }
/// ```
pub struct Clusters {
    /// Number of clusters.
    pub center_count: usize,

    /// Number of points in each cluster.
    pub datapoints: OneOrMany<usize>,

    /// Bound of the coordinates on each axis.
    ///
    /// Validated but not applied: generated points may lie beyond it.
    pub limit: Option<OneOrMany<f64>>,

    /// Shape of the cluster centers.
    pub shape: Shape,

    /// Dimension of the embedding space.
    pub dimensions: usize,

    /// How far points deviate from their cluster center.
    pub radii: OneOrMany<f64>,

    /// Whether rows are shuffled, otherwise clusters come one after the other.
    pub shuffle: bool,

    /// Mean distance between the origin and the cluster centers, for
    /// point-shaped centers.
    ///
    /// Center norms are about the square of this distance.
    pub distance: f64,

    /// Whether the two point-shaped centers of a two-cluster dataset are
    /// placed on opposite sides of the origin.
    pub opposite: bool,

    /// One function per cluster that traces its center, for line and curve
    /// shapes.
    pub parametric: Option<Vec<Box<dyn Parametric>>>,
}

impl Default for Clusters {
    fn default() -> Self {
        Self {
            center_count: 2,
            datapoints: OneOrMany::One(50),
            limit: None,
            shape: Shape::Point,
            dimensions: 2,
            radii: OneOrMany::One(1.0),
            shuffle: true,
            distance: 1.0,
            opposite: false,
            parametric: None,
        }
    }
}

impl fmt::Debug for Clusters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clusters")
            .field("center_count", &self.center_count)
            .field("datapoints", &self.datapoints)
            .field("limit", &self.limit)
            .field("shape", &self.shape)
            .field("dimensions", &self.dimensions)
            .field("radii", &self.radii)
            .field("shuffle", &self.shuffle)
            .field("distance", &self.distance)
            .field("opposite", &self.opposite)
            .field("parametric", &self.parametric.as_ref().map(Vec::len))
            .finish()
    }
}

impl Clusters {
    /// Check the options and expand per-cluster ones.
    fn plan(&self) -> Result<Plan<'_>, Error> {
        if self.center_count == 0 {
            return Err(Error::NotPositive {
                field: "center_count",
            });
        }
        if self.dimensions == 0 {
            return Err(Error::NotPositive {
                field: "dimensions",
            });
        }

        let datapoints = self.datapoints.broadcast("datapoints", self.center_count)?;
        if datapoints.contains(&0) {
            return Err(Error::NotPositive {
                field: "datapoints",
            });
        }

        let radii = self.radii.broadcast("radii", self.center_count)?;
        if let Some((cluster, &radius)) = radii
            .iter()
            .enumerate()
            .find(|(_, radius)| !radius.is_finite() || **radius <= 0.0)
        {
            return Err(Error::InvalidRadius { cluster, radius });
        }

        if let Some(limit) = &self.limit {
            let limit = limit.broadcast("limit", self.dimensions)?;
            if let Some((axis, &limit)) = limit
                .iter()
                .enumerate()
                .find(|(_, limit)| !limit.is_finite() || **limit <= 0.0)
            {
                return Err(Error::InvalidLimit { axis, limit });
            }
            tracing::debug!(?limit, "limit is not applied to generated points");
        }

        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(Error::InvalidDistance {
                distance: self.distance,
            });
        }

        let placement = match self.shape {
            Shape::Point if self.opposite => {
                if self.center_count != 2 {
                    return Err(Error::OppositeCenterCount {
                        actual: self.center_count,
                    });
                }
                Placement::Opposite
            }
            Shape::Point => Placement::Point,
            Shape::Linear | Shape::Curve => {
                if self.opposite {
                    return Err(Error::OppositeRequiresPoint);
                }
                let parametric = self
                    .parametric
                    .as_deref()
                    .ok_or(Error::MissingParametric { shape: self.shape })?;
                if parametric.len() != self.center_count {
                    return Err(Error::LenMismatch {
                        field: "parametric",
                        expected: self.center_count,
                        actual: parametric.len(),
                    });
                }
                Placement::Curve(parametric)
            }
        };

        Ok(Plan {
            datapoints,
            radii,
            placement,
        })
    }

    /// Signed distance between the origin and each point-shaped center.
    ///
    /// Magnitudes follow a normal law centered on `distance`, whose spread
    /// grows with it.
    fn center_distances<R>(&self, rng: &mut R) -> Result<Vec<f64>, Error>
    where
        R: Rng + ?Sized,
    {
        let spread = self.distance / 3.0 - 0.2 * self.distance;
        let normal = Normal::new(self.distance, spread).map_err(|_| Error::InvalidDistance {
            distance: self.distance,
        })?;

        let mut distances = Vec::with_capacity(self.center_count);
        for _ in 0..self.center_count {
            let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
            distances.push(sign * normal.sample(rng));
        }
        Ok(distances)
    }

    /// Generate the clusters.
    ///
    /// All options are checked before `rng` is used.  On error, nothing is
    /// returned.
    pub fn generate<R>(&self, rng: &mut R) -> Result<Dataset, Error>
    where
        R: Rng + ?Sized,
    {
        let Plan {
            datapoints,
            radii,
            placement,
        } = self.plan()?;

        let span = tracing::info_span!(
            "generate clusters",
            center_count = self.center_count,
            dimensions = self.dimensions,
            shape = %self.shape,
        );
        let _enter = span.enter();

        let point_count: usize = datapoints.iter().sum();
        let mut data = DMatrix::zeros(point_count, self.dimensions);
        let mut labels = DVector::zeros(point_count);
        let mut centers = match placement {
            Placement::Point | Placement::Opposite => {
                Some(DMatrix::zeros(self.center_count, self.dimensions))
            }
            Placement::Curve(_) => None,
        };

        let distances = match placement {
            Placement::Point => self.center_distances(rng)?,
            Placement::Opposite | Placement::Curve(_) => Vec::new(),
        };

        let mut offset = 0;
        for (cluster, (&cluster_len, &radius)) in datapoints.iter().zip(&radii).enumerate() {
            tracing::debug!(cluster, point_count = cluster_len, radius, "sampling cluster");

            let mut cloud = sample_cloud(rng, cluster_len, self.dimensions)?;

            match placement {
                Placement::Point => {
                    let center = random_center(rng, self.dimensions, distances[cluster])?;
                    surround(&mut cloud, radius, &center);
                    if let Some(centers) = &mut centers {
                        centers.row_mut(cluster).copy_from(&center);
                    }
                }
                Placement::Opposite => {
                    let center = opposite_center(rng, self.dimensions, self.distance, cluster)?;
                    surround(&mut cloud, radius, &center);
                    if let Some(centers) = &mut centers {
                        centers.row_mut(cluster).copy_from(&center);
                    }
                }
                Placement::Curve(parametric) => {
                    cloud *= radius;

                    let t = DVector::from_fn(cluster_len, |_, _| rng.gen());
                    let curve = parametric[cluster].trace(&t);
                    if curve.shape() != cloud.shape() {
                        return Err(Error::ParametricShape {
                            cluster,
                            expected: cloud.shape(),
                            actual: curve.shape(),
                        });
                    }
                    cloud += curve;
                }
            }

            data.rows_mut(offset, cluster_len).copy_from(&cloud);
            labels.rows_mut(offset, cluster_len).fill(cluster as f64);
            offset += cluster_len;
        }

        if self.shuffle {
            let mut permutation: Vec<usize> = (0..point_count).collect();
            permutation.shuffle(rng);
            data = data.select_rows(permutation.iter());
            labels = labels.select_rows(permutation.iter());
        }

        tracing::info!(point_count, "generated clusters");

        Ok(Dataset {
            data,
            labels,
            centers,
        })
    }
}
