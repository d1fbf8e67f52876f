#![warn(missing_docs)]
//! Labeled coordinate points and ordered point sets of fixed dimensionality.
//!
//! ## Example
//!
//! ```rust
//! use coordgen::point::{Dimension, PointSet};
//!
//! let set = PointSet::from_coordinates(
//!     Dimension::Two,
//!     vec![vec![0.0, 0.0], vec![1.0, 2.0]],
//!     None,
//! )
//! .unwrap();
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.get(1).unwrap().label(), "P2");
//! ```
use crate::error::{CgResult, CoordGenError};
use log::warn;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum::{Display as StrumDisplay, EnumIter};

/// Names of the coordinate axes in the order they are stored.
pub const AXIS_NAMES: [&str; 3] = ["X", "Y", "Z"];

/// Dimensionality of a [`PointSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, StrumDisplay, EnumIter)]
pub enum Dimension {
    /// planar points (X, Y)
    #[strum(serialize = "2D")]
    Two,
    /// spatial points (X, Y, Z)
    #[strum(serialize = "3D")]
    Three,
}

impl Dimension {
    /// Returns the number of coordinate axes of this [`Dimension`].
    #[must_use]
    pub const fn nr_of_axes(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
    /// Returns the axis names ("X", "Y"[, "Z"]) of this [`Dimension`].
    #[must_use]
    pub fn axis_names(self) -> &'static [&'static str] {
        &AXIS_NAMES[..self.nr_of_axes()]
    }
    /// Determine the [`Dimension`] from a number of axes.
    ///
    /// # Errors
    ///
    /// This function will return an error if `nr_of_axes` is neither 2 nor 3.
    pub fn from_nr_of_axes(nr_of_axes: usize) -> CgResult<Self> {
        match nr_of_axes {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            n => Err(CoordGenError::ShapeMismatch(format!(
                "points must have 2 or 3 coordinates, found {n}"
            ))),
        }
    }
}

/// Sequential label of the point at `index` ("P1" for index 0).
#[must_use]
pub fn sequential_label(index: usize) -> String {
    format!("P{}", index + 1)
}

/// A labeled coordinate tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    label: String,
    name: Option<String>,
    coords: DVector<f64>,
}

impl Point {
    /// Create a new [`Point`] with the given label and coordinates.
    ///
    /// # Errors
    ///
    /// This function will return an error if the number of coordinates is neither 2 nor 3.
    pub fn new(label: &str, coords: &[f64]) -> CgResult<Self> {
        Dimension::from_nr_of_axes(coords.len())?;
        Ok(Self {
            label: label.to_owned(),
            name: None,
            coords: DVector::from_column_slice(coords),
        })
    }
    /// Returns the label of this [`Point`].
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
    /// Returns the user-supplied name of this [`Point`], if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    /// Sets the user-supplied name of this [`Point`]. An empty string removes the name.
    pub fn set_name(&mut self, name: &str) {
        self.name = if name.is_empty() {
            None
        } else {
            Some(name.to_owned())
        };
    }
    /// Text shown next to the point in plots: the name if given, the label otherwise.
    #[must_use]
    pub fn annotation(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.label)
    }
    /// Returns the coordinates of this [`Point`].
    #[must_use]
    pub fn coords(&self) -> &[f64] {
        self.coords.as_slice()
    }
    /// Returns the [`Dimension`] of this [`Point`].
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        if self.coords.len() == 2 {
            Dimension::Two
        } else {
            Dimension::Three
        }
    }
    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords[0]
    }
    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords[1]
    }
    /// Returns the z coordinate or `None` for a planar point.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        self.coords.get(2).copied()
    }
    fn set_coords(&mut self, coords: &[f64]) {
        self.coords = DVector::from_column_slice(coords);
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let coords = self
            .coords
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} ({coords})", self.annotation())
    }
}

/// An ordered, index-addressable sequence of [`Point`]s with one fixed [`Dimension`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    dimension: Dimension,
    points: Vec<Point>,
}

impl PointSet {
    /// Create a new, empty [`PointSet`].
    #[must_use]
    pub const fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            points: Vec::new(),
        }
    }
    /// Create a [`PointSet`] from coordinate rows.
    ///
    /// The points are labeled "P1".."PN" unless `labels` has exactly one entry per row. A
    /// label list of any other length is ignored.
    ///
    /// # Errors
    ///
    /// This function will return [`CoordGenError::ShapeMismatch`] if a row does not have the
    /// number of coordinates of `dimension`.
    pub fn from_coordinates(
        dimension: Dimension,
        rows: Vec<Vec<f64>>,
        labels: Option<Vec<String>>,
    ) -> CgResult<Self> {
        let labels = match labels {
            Some(labels) if labels.len() == rows.len() => Some(labels),
            Some(labels) => {
                warn!(
                    "{} labels given for {} points. Using sequential labels instead.",
                    labels.len(),
                    rows.len()
                );
                None
            }
            None => None,
        };
        let mut set = Self::new(dimension);
        set.points.reserve(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let label = labels
                .as_ref()
                .map_or_else(|| sequential_label(i), |l| l[i].clone());
            set.push(Point::new(&label, row)?)?;
        }
        Ok(set)
    }
    /// Append a [`Point`] to the end of this [`PointSet`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the point's dimension differs from the set's.
    pub fn push(&mut self, point: Point) -> CgResult<()> {
        self.check_dimension(point.coords().len())?;
        self.points.push(point);
        Ok(())
    }
    fn check_dimension(&self, nr_of_coords: usize) -> CgResult<()> {
        if nr_of_coords == self.dimension.nr_of_axes() {
            Ok(())
        } else {
            Err(CoordGenError::ShapeMismatch(format!(
                "expected {} coordinates for a {} point set, found {nr_of_coords}",
                self.dimension.nr_of_axes(),
                self.dimension
            )))
        }
    }
    fn check_index(&self, index: usize) -> CgResult<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(CoordGenError::InvalidConfiguration(format!(
                "point index {} out of range (1..={})",
                index.saturating_add(1),
                self.points.len()
            )))
        }
    }
    /// Returns the [`Dimension`] of this [`PointSet`].
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }
    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Returns `true` if this [`PointSet`] contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Returns the point at `index` (zero-based).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }
    /// Iterate over all points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
    /// Returns the coordinate tuples of all points in order.
    #[must_use]
    pub fn coordinates(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(|p| p.coords().to_vec()).collect()
    }
    /// Returns the labels of all points in order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(Point::label).collect()
    }
    /// Returns the coordinates as a matrix with one row per point and one column per axis.
    #[must_use]
    pub fn to_matrix(&self) -> DMatrix<f64> {
        let nr_of_axes = self.dimension.nr_of_axes();
        DMatrix::from_row_iterator(
            self.points.len(),
            nr_of_axes,
            self.points.iter().flat_map(|p| p.coords().iter().copied()),
        )
    }
    /// Returns the (min, max) range covered by the points along each axis.
    ///
    /// Returns `None` for an empty set.
    #[must_use]
    pub fn extent(&self) -> Option<Vec<(f64, f64)>> {
        if self.is_empty() {
            return None;
        }
        let matrix = self.to_matrix();
        Some(
            matrix
                .column_iter()
                .map(|column| (column.min(), column.max()))
                .collect(),
        )
    }
    /// Replace the coordinates of the point at `index`.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - `index` is out of range.
    ///   - the number of coordinates does not match the set's dimension.
    pub fn set_coords(&mut self, index: usize, coords: &[f64]) -> CgResult<()> {
        self.check_index(index)?;
        self.check_dimension(coords.len())?;
        self.points[index].set_coords(coords);
        Ok(())
    }
    /// Set the user-supplied name of the point at `index`.
    ///
    /// # Errors
    ///
    /// This function will return an error if `index` is out of range.
    pub fn set_name(&mut self, index: usize, name: &str) -> CgResult<()> {
        self.check_index(index)?;
        self.points[index].set_name(name);
        Ok(())
    }
    /// Remove the point at `index` and return it. Remaining labels are not renumbered.
    ///
    /// # Errors
    ///
    /// This function will return an error if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> CgResult<Point> {
        self.check_index(index)?;
        Ok(self.points.remove(index))
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
