#![warn(missing_docs)]
//! Rectangular, evenly-spaced grid distribution
use super::PointDistribution;
use crate::{
    config::AxisBounds,
    error::{CgResult, CoordGenError},
    point::Dimension,
    utils::{f64_to_usize, usize_to_f64},
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Relative tolerance for including the axis maximum in a grid sequence.
pub const GRID_EPSILON: f64 = 1e-9;

/// Rectangular, evenly-spaced grid distribution
///
/// Every axis is sampled from its minimum in steps of `spacing` up to (and including, within
/// [`GRID_EPSILON`]) its maximum. The points are enumerated axis-major: the first axis varies
/// slowest, the last axis fastest. At most `max_nr_of_points` points are produced.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Grid {
    bounds: Vec<AxisBounds>,
    spacing: f64,
    max_nr_of_points: usize,
}

impl Grid {
    /// Create a new [`Grid`] distribution generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - `bounds` does not contain 2 or 3 axes.
    ///  - one of the `bounds` is invalid (see [`AxisBounds::new`]).
    ///  - the `spacing` is not > 0 and finite.
    pub fn new(bounds: Vec<AxisBounds>, spacing: f64, max_nr_of_points: usize) -> CgResult<Self> {
        if bounds.len() != 2 && bounds.len() != 3 {
            return Err(CoordGenError::InvalidConfiguration(format!(
                "grid needs 2 or 3 axes, got {}",
                bounds.len()
            )));
        }
        for b in &bounds {
            b.validate()?;
        }
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(CoordGenError::InvalidConfiguration(format!(
                "spacing must be > 0 and finite in grid mode, got {spacing}"
            )));
        }
        Ok(Self {
            bounds,
            spacing,
            max_nr_of_points,
        })
    }
    /// Returns the spacing between neighbouring grid points.
    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }
    /// Returns the maximum number of points generated.
    #[must_use]
    pub const fn max_nr_of_points(&self) -> usize {
        self.max_nr_of_points
    }
    /// Returns the coordinate values along one axis (0 = x, 1 = y, 2 = z).
    ///
    /// Returns an empty vector if the axis does not exist.
    #[must_use]
    pub fn axis_values(&self, axis: usize) -> Vec<f64> {
        self.bounds
            .get(axis)
            .map_or_else(Vec::new, |b| axis_sequence(*b, self.spacing).collect())
    }
    /// Returns the number of points of the complete (untruncated) grid.
    #[must_use]
    pub fn full_nr_of_points(&self) -> usize {
        self.bounds
            .iter()
            .map(|b| nr_of_steps(*b, self.spacing))
            .fold(1, usize::saturating_mul)
    }
    /// Returns the number of points [`PointDistribution::generate`] will produce.
    #[must_use]
    pub fn nr_of_points(&self) -> usize {
        self.full_nr_of_points().min(self.max_nr_of_points)
    }
}

fn nr_of_steps(bounds: AxisBounds, spacing: f64) -> usize {
    f64_to_usize((bounds.width() / spacing + GRID_EPSILON).floor()).saturating_add(1)
}

// values are computed from the index, so rounding errors do not accumulate along the axis
fn axis_sequence(bounds: AxisBounds, spacing: f64) -> impl Iterator<Item = f64> + Clone {
    (0..nr_of_steps(bounds, spacing))
        .map(move |i| usize_to_f64(i).mul_add(spacing, bounds.min).min(bounds.max))
}

impl PointDistribution for Grid {
    fn dimension(&self) -> Dimension {
        if self.bounds.len() == 2 {
            Dimension::Two
        } else {
            Dimension::Three
        }
    }
    fn generate(&self) -> Vec<Vec<f64>> {
        self.bounds
            .iter()
            .map(|b| axis_sequence(*b, self.spacing))
            .multi_cartesian_product()
            .take(self.max_nr_of_points)
            .collect()
    }
}

impl From<Grid> for super::Generator {
    fn from(grid: Grid) -> Self {
        Self::Grid(grid)
    }
}
