#![warn(missing_docs)]
//! Export of [`PointSet`]s into delimited text files and import of CSV files.
//!
//! Files have a header row followed by one row per point with the columns `Label,X,Y[,Z]`.
//! Numbers are written with the default `f64` formatting, which round-trips exactly.
use crate::{
    error::{CgResult, CoordGenError},
    point::{Dimension, Point, PointSet},
};
use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

/// File name used if no export file is given.
pub const DEFAULT_CSV_FILE_NAME: &str = "koordinat_output.csv";
/// File name used for the tab-delimited export if no file is given.
pub const DEFAULT_TEXT_FILE_NAME: &str = "koordinat_output.txt";

/// Column separator of an exported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `,` separated values
    Comma,
    /// `\t` separated values
    Tab,
}

impl Delimiter {
    const fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }
}

/// Returns the header columns of a file with points of the given [`Dimension`].
#[must_use]
pub fn header(dimension: Dimension) -> Vec<&'static str> {
    let mut columns = vec!["Label"];
    columns.extend_from_slice(dimension.axis_names());
    columns
}

/// Write a [`PointSet`] as delimited text into `writer`.
///
/// # Errors
///
/// This function will return an error if writing fails.
pub fn write_delimited<W: Write>(
    points: &PointSet,
    writer: W,
    delimiter: Delimiter,
) -> CgResult<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .from_writer(writer);
    writer.write_record(header(points.dimension()))?;
    for point in points {
        let mut record = vec![point.label().to_owned()];
        record.extend(point.coords().iter().map(ToString::to_string));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn save(points: &PointSet, path: &Path, delimiter: Delimiter) -> CgResult<()> {
    let file = File::create(path).map_err(|e| {
        CoordGenError::IoFailure(format!("cannot create file {} : {e}", path.display()))
    })?;
    write_delimited(points, file, delimiter)?;
    info!("Saved {} points to {}", points.len(), path.display());
    Ok(())
}

/// Save a [`PointSet`] as CSV file.
///
/// # Errors
///
/// This function will return [`CoordGenError::IoFailure`] if the file cannot be created or
/// written.
pub fn save_csv(points: &PointSet, path: &Path) -> CgResult<()> {
    save(points, path, Delimiter::Comma)
}

/// Save a [`PointSet`] as tab-delimited text file.
///
/// # Errors
///
/// This function will return [`CoordGenError::IoFailure`] if the file cannot be created or
/// written.
pub fn save_text(points: &PointSet, path: &Path) -> CgResult<()> {
    save(points, path, Delimiter::Tab)
}

/// Read a [`PointSet`] from CSV data.
///
/// The first row is treated as header. If `dimension` is `None` it is derived from the number
/// of header columns.
///
/// # Errors
///
/// This function will return
///   - [`CoordGenError::ShapeMismatch`] if the header or a row does not have the expected
///     number of columns.
///   - [`CoordGenError::InvalidConfiguration`] if a coordinate is not a number.
///   - [`CoordGenError::IoFailure`] if reading fails.
pub fn read_csv<R: Read>(reader: R, dimension: Option<Dimension>) -> CgResult<PointSet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let nr_of_columns = reader.headers()?.len();
    let dimension = match dimension {
        Some(d) => d,
        None => Dimension::from_nr_of_axes(nr_of_columns.saturating_sub(1))?,
    };
    let expected_columns = dimension.nr_of_axes() + 1;
    if nr_of_columns != expected_columns {
        return Err(CoordGenError::ShapeMismatch(format!(
            "expected {expected_columns} columns for {dimension} points, found {nr_of_columns}"
        )));
    }
    let mut points = PointSet::new(dimension);
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != expected_columns {
            return Err(CoordGenError::ShapeMismatch(format!(
                "row {} has {} columns, expected {expected_columns}",
                row + 1,
                record.len()
            )));
        }
        let mut coords = Vec::with_capacity(dimension.nr_of_axes());
        for cell in record.iter().skip(1) {
            coords.push(cell.trim().parse::<f64>().map_err(|_| {
                CoordGenError::InvalidConfiguration(format!(
                    "row {}: '{cell}' is not a number",
                    row + 1
                ))
            })?);
        }
        points.push(Point::new(&record[0], &coords)?)?;
    }
    Ok(points)
}

/// Load a [`PointSet`] from a CSV file. See [`read_csv`].
///
/// # Errors
///
/// This function will return [`CoordGenError::IoFailure`] if the file cannot be opened and the
/// errors of [`read_csv`] otherwise.
pub fn load_csv(path: &Path, dimension: Option<Dimension>) -> CgResult<PointSet> {
    let file = File::open(path).map_err(|e| {
        CoordGenError::IoFailure(format!("cannot read file {} : {e}", path.display()))
    })?;
    let points = read_csv(file, dimension)?;
    info!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}
