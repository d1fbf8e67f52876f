#![warn(missing_docs)]
//! Rectangular, uniform random distribution
use super::PointDistribution;
use crate::{
    config::AxisBounds,
    error::{CgResult, CoordGenError},
    point::Dimension,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rectangular, uniform random distribution
///
/// Each coordinate is drawn independently from a continuous uniform distribution over the
/// `[min, max]` range of its axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Random {
    bounds: Vec<AxisBounds>,
    nr_of_points: usize,
}
impl Random {
    /// Create a new [`Random`] distribution generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - `bounds` does not contain 2 or 3 axes.
    ///   - one of the `bounds` is invalid (see [`AxisBounds::new`]).
    ///   - `nr_of_points` is zero.
    pub fn new(bounds: Vec<AxisBounds>, nr_of_points: usize) -> CgResult<Self> {
        if bounds.len() != 2 && bounds.len() != 3 {
            return Err(CoordGenError::InvalidConfiguration(format!(
                "random distribution needs 2 or 3 axes, got {}",
                bounds.len()
            )));
        }
        for b in &bounds {
            b.validate()?;
        }
        if nr_of_points == 0 {
            return Err(CoordGenError::InvalidConfiguration(
                "number of points must be > 0 in random mode".into(),
            ));
        }
        Ok(Self {
            bounds,
            nr_of_points,
        })
    }
    /// Returns the number of points generated.
    #[must_use]
    pub const fn nr_of_points(&self) -> usize {
        self.nr_of_points
    }
    /// Generate the points using the given random number generator.
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Vec<Vec<f64>> {
        let mut points: Vec<Vec<f64>> = Vec::with_capacity(self.nr_of_points);
        for _ in 0..self.nr_of_points {
            points.push(
                self.bounds
                    .iter()
                    .map(|b| rng.random_range(b.min..=b.max))
                    .collect(),
            );
        }
        points
    }
}
impl PointDistribution for Random {
    fn dimension(&self) -> Dimension {
        if self.bounds.len() == 2 {
            Dimension::Two
        } else {
            Dimension::Three
        }
    }
    fn generate(&self) -> Vec<Vec<f64>> {
        self.generate_with_rng(&mut rand::rng())
    }
}
impl From<Random> for super::Generator {
    fn from(random: Random) -> Self {
        Self::Random(random)
    }
}
