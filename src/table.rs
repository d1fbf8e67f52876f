#![warn(missing_docs)]
//! Tabular view of a [`PointSet`] with editing and a single undo slot.
use crate::{
    error::{CgResult, CoordGenError},
    point::{Point, PointSet},
};
use std::fmt::Display;

/// One row of a [`PointTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<'a> {
    /// 1-based row number as shown to the user
    pub number: usize,
    /// the point shown in this row
    pub point: &'a Point,
}

/// A [`PointSet`] as shown in a table, remembering the state before its last modification.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTable {
    points: PointSet,
    undo_slot: Option<PointSet>,
}

impl PointTable {
    /// Create a new [`PointTable`] showing the given points.
    #[must_use]
    pub const fn new(points: PointSet) -> Self {
        Self {
            points,
            undo_slot: None,
        }
    }
    /// Returns the points currently shown.
    #[must_use]
    pub const fn points(&self) -> &PointSet {
        &self.points
    }
    /// Show a new [`PointSet`]. The undo slot is cleared.
    pub fn replace(&mut self, points: PointSet) {
        self.points = points;
        self.undo_slot = None;
    }
    /// Enumerate the rows of the table in order.
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.points.iter().enumerate().map(|(i, point)| TableRow {
            number: i + 1,
            point,
        })
    }
    fn row_index(number: usize) -> CgResult<usize> {
        number.checked_sub(1).ok_or_else(|| {
            CoordGenError::InvalidConfiguration("row numbers start at 1".into())
        })
    }
    fn modify<F>(&mut self, f: F) -> CgResult<()>
    where
        F: FnOnce(&mut PointSet) -> CgResult<()>,
    {
        let mut modified = self.points.clone();
        f(&mut modified)?;
        self.undo_slot = Some(std::mem::replace(&mut self.points, modified));
        Ok(())
    }
    /// Replace the coordinates of the point in row `number` (1-based).
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the row does not exist.
    ///   - the number of coordinates does not match the dimension of the table.
    pub fn edit(&mut self, number: usize, coords: &[f64]) -> CgResult<()> {
        self.modify(|points| points.set_coords(Self::row_index(number)?, coords))
    }
    /// Set the user-supplied name of the point in row `number` (1-based).
    ///
    /// # Errors
    ///
    /// This function will return an error if the row does not exist.
    pub fn rename(&mut self, number: usize, name: &str) -> CgResult<()> {
        self.modify(|points| points.set_name(Self::row_index(number)?, name))
    }
    /// Delete row `number` (1-based).
    ///
    /// # Errors
    ///
    /// This function will return an error if the row does not exist.
    pub fn remove(&mut self, number: usize) -> CgResult<()> {
        self.modify(|points| points.remove(Self::row_index(number)?).map(|_| ()))
    }
    /// Restore the state before the last modification.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.undo_slot.take().map_or(false, |previous| {
            self.points = previous;
            true
        })
    }
    /// Returns `true` if the last modification can be undone.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.undo_slot.is_some()
    }
}

impl Display for PointTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let axis_names = self.points.dimension().axis_names();
        let label_width = self
            .points
            .iter()
            .map(|p| p.annotation().chars().count())
            .max()
            .unwrap_or(0)
            .max("Label".len());
        write!(f, "{:>4}  {:<label_width$}", "#", "Label")?;
        for axis in axis_names {
            write!(f, " {axis:>12}")?;
        }
        writeln!(f)?;
        for row in self.rows() {
            write!(f, "{:>4}  {:<label_width$}", row.number, row.point.annotation())?;
            for value in row.point.coords() {
                write!(f, " {value:>12.4}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
