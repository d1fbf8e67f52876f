#![warn(missing_docs)]
//! Scatter plots of [`PointSet`]s.
//!
//! A [`ScatterPlot`] draws every point as marker with its label next to it. Planar point sets
//! are drawn on a 2D chart, spatial point sets on a 3D chart with the Z axis pointing upwards.
//! The result of a rendering is a [`Figure`], either a file or an image buffer owned by the
//! caller.
use crate::{
    error::{CgResult, CoordGenError},
    point::{Dimension, PointSet},
};
use approx::relative_eq;
use image::RgbImage;
use log::{info, warn};
use plotters::{
    backend::{DrawingBackend, PixelFormat, RGBPixel},
    chart::ChartBuilder,
    coord::Shift,
    element::{Circle, Text},
    prelude::{BitMapBackend, DrawingArea, IntoDrawingArea, SVGBackend},
    style::{Color, IntoFont, RGBAColor, WHITE},
};
use std::{
    f64::consts::PI,
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Title of plots of spatial point sets.
pub const PLOT_TITLE_3D: &str = "3D Coordinate Scatter Plot";
/// Title of plots of planar point sets.
pub const PLOT_TITLE_2D: &str = "2D Coordinate Scatter Plot";

///Enum to describe which type of plotting backend should be used
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PltBackEnd {
    /// `BitmapBackend`. Used to create .png, .bmp, .jpg
    #[default]
    BMP,
    /// `SVGBackend`. Used to create .svg
    SVG,
    /// Buffered Backend. Used to buffer the image data into an image buffer.
    Buf,
}

impl PltBackEnd {
    /// Determine the file backend from the extension of `path`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the extension is not one of `png`, `bmp`, `jpg`,
    /// `jpeg` or `svg`.
    pub fn from_path(path: &Path) -> CgResult<Self> {
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png" | "bmp" | "jpg" | "jpeg") => Ok(Self::BMP),
            Some("svg") => Ok(Self::SVG),
            _ => Err(CoordGenError::InvalidConfiguration(format!(
                "cannot plot into {}. Use a png, bmp, jpg or svg file",
                path.display()
            ))),
        }
    }
}

/// Struct that holds the maximum and minimum values of an axis
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct AxLims {
    /// minimum value of the axis
    pub min: f64,
    /// maximum value of the axis
    pub max: f64,
}

impl AxLims {
    /// Axis limits covering the data range `extent` with a 5 % margin on each side.
    ///
    /// A data range of zero width is widened by 0.5 on each side. Without data, the axis spans
    /// `[0, 1]`. The margin is omitted if the widened limits would not be finite.
    #[must_use]
    pub fn from_extent(extent: Option<(f64, f64)>) -> Self {
        match extent {
            None => Self { min: 0.0, max: 1.0 },
            Some((min, max)) if relative_eq!(min, max) => Self {
                min: min - 0.5,
                max: max + 0.5,
            },
            Some((min, max)) => {
                // scaled before subtracting, so the margin stays finite for huge ranges
                let margin = 0.05f64.mul_add(max, -0.05 * min);
                let lims = Self {
                    min: min - margin,
                    max: max + margin,
                };
                if lims.min.is_finite() && lims.max.is_finite() {
                    lims
                } else {
                    Self { min, max }
                }
            }
        }
    }
}

/// Styling of a [`ScatterPlot`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlotParameters {
    /// figure size in pixels (width, height)
    pub fig_size: (u32, u32),
    /// marker radius in pixels
    pub marker_size: i32,
    /// marker color
    pub marker_color: RGBAColor,
    /// font size of point labels and axis ticks
    pub font_size: f64,
}

impl Default for PlotParameters {
    fn default() -> Self {
        Self {
            fig_size: (1000, 800),
            marker_size: 4,
            marker_color: RGBAColor(0, 0, 255, 0.8),
            font_size: 15.0,
        }
    }
}

/// A rendered plot.
///
/// Whoever renders a plot owns the resulting [`Figure`]. Rendering again yields a new figure,
/// which replaces the previous one.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    /// the plot was written to a file
    File {
        /// path of the file
        path: PathBuf,
        /// backend used for drawing
        backend: PltBackEnd,
    },
    /// the plot was drawn into an image buffer
    Image(RgbImage),
}

impl Figure {
    /// Returns the image buffer of an in-memory figure.
    #[must_use]
    pub const fn image(&self) -> Option<&RgbImage> {
        match self {
            Self::Image(img) => Some(img),
            Self::File { .. } => None,
        }
    }
    /// Returns the file path of a figure written to disk.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path.as_path()),
            Self::Image(_) => None,
        }
    }
}

/// Scatter plot of a [`PointSet`] with one text annotation per point.
pub struct ScatterPlot<'a> {
    points: &'a PointSet,
    params: PlotParameters,
}

impl<'a> ScatterPlot<'a> {
    /// Create a new [`ScatterPlot`] with default [`PlotParameters`].
    #[must_use]
    pub fn new(points: &'a PointSet) -> Self {
        Self::with_params(points, PlotParameters::default())
    }
    /// Create a new [`ScatterPlot`] with the given [`PlotParameters`].
    #[must_use]
    pub const fn with_params(points: &'a PointSet, params: PlotParameters) -> Self {
        Self { points, params }
    }
    /// Returns the fixed title of this plot.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.points.dimension() {
            Dimension::Two => PLOT_TITLE_2D,
            Dimension::Three => PLOT_TITLE_3D,
        }
    }
    /// Returns the axis limits of this plot in the order x, y[, z].
    #[must_use]
    pub fn axes_limits(&self) -> Vec<AxLims> {
        let nr_of_axes = self.points.dimension().nr_of_axes();
        let Some(extent) = self.points.extent() else {
            warn!("No points to plot. Drawing empty chart.");
            return vec![AxLims::from_extent(None); nr_of_axes];
        };
        extent
            .into_iter()
            .zip(self.points.dimension().axis_names())
            .map(|(range, axis)| {
                if relative_eq!(range.0, range.1) {
                    warn!("All points share the same {axis} coordinate. Widening {axis} axis.");
                }
                AxLims::from_extent(Some(range))
            })
            .collect()
    }
    /// Draw the plot into a file. The backend is chosen from the file extension.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the file extension is not supported.
    ///   - the drawing fails or the file cannot be written.
    pub fn to_file(&self, path: &Path) -> CgResult<Figure> {
        let backend = PltBackEnd::from_path(path)?;
        match backend {
            PltBackEnd::SVG => {
                let root = SVGBackend::new(path, self.params.fig_size).into_drawing_area();
                self.draw(&root)?;
            }
            _ => {
                let root = BitMapBackend::new(path, self.params.fig_size).into_drawing_area();
                self.draw(&root)?;
            }
        }
        info!("Plot written to {}", path.display());
        Ok(Figure::File {
            path: path.to_path_buf(),
            backend,
        })
    }
    /// Draw the plot into an in-memory RGB image.
    ///
    /// # Errors
    ///
    /// This function will return an error if drawing fails.
    pub fn to_buffer(&self) -> CgResult<Figure> {
        let (width, height) = self.params.fig_size;
        let buffer_size = usize::try_from(u64::from(width) * u64::from(height))
            .ok()
            .and_then(|nr_of_pixels| nr_of_pixels.checked_mul(RGBPixel::PIXEL_SIZE))
            .ok_or_else(|| {
                CoordGenError::Plot(format!("figure size {width}x{height} is too large"))
            })?;
        let mut image_buffer = vec![0; buffer_size];
        {
            let root =
                BitMapBackend::with_buffer(&mut image_buffer, (width, height)).into_drawing_area();
            self.draw(&root)?;
        }
        let img = RgbImage::from_raw(width, height, image_buffer)
            .ok_or_else(|| CoordGenError::Plot("image buffer size too small".into()))?;
        Ok(Figure::Image(img))
    }
    fn draw<B: DrawingBackend>(&self, root: &DrawingArea<B, Shift>) -> CgResult<()> {
        root.fill(&WHITE).map_err(plot_error)?;
        let chart_area = root
            .titled(self.title(), ("sans-serif", 30.0).into_font())
            .map_err(plot_error)?;
        let lims = self.axes_limits();
        match self.points.dimension() {
            Dimension::Two => self.draw_2d(&chart_area, &lims)?,
            Dimension::Three => self.draw_3d(&chart_area, &lims)?,
        }
        root.present().map_err(plot_error)
    }
    fn draw_2d<B: DrawingBackend>(
        &self,
        root: &DrawingArea<B, Shift>,
        lims: &[AxLims],
    ) -> CgResult<()> {
        let font = ("sans-serif", self.params.font_size).into_font();
        let mut chart = ChartBuilder::on(root)
            .margin(30)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(lims[0].min..lims[0].max, lims[1].min..lims[1].max)
            .map_err(plot_error)?;
        chart
            .configure_mesh()
            .x_desc("X")
            .y_desc("Y")
            .label_style(font.clone())
            .draw()
            .map_err(plot_error)?;
        let marker_style = self.params.marker_color.filled();
        chart
            .draw_series(
                self.points
                    .iter()
                    .map(|p| Circle::new((p.x(), p.y()), self.params.marker_size, marker_style)),
            )
            .map_err(plot_error)?;
        chart
            .draw_series(
                self.points
                    .iter()
                    .map(|p| Text::new(p.annotation().to_owned(), (p.x(), p.y()), font.clone())),
            )
            .map_err(plot_error)?;
        Ok(())
    }
    fn draw_3d<B: DrawingBackend>(
        &self,
        root: &DrawingArea<B, Shift>,
        lims: &[AxLims],
    ) -> CgResult<()> {
        let font = ("sans-serif", self.params.font_size).into_font();
        // plotters has its vertical axis in the second place. Data z is drawn upwards.
        let (x, y, z) = (lims[0], lims[1], lims[2]);
        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .build_cartesian_3d(x.min..x.max, z.min..z.max, y.min..y.max)
            .map_err(plot_error)?;
        chart.with_projection(
            |mut pb: plotters::coord::ranged3d::ProjectionMatrixBuilder| {
                pb.pitch = 30. / 180. * PI;
                pb.yaw = 35. / 180. * PI;
                pb.scale = 0.8;
                pb.into_matrix()
            },
        );
        chart
            .configure_axes()
            .label_style(font.clone())
            .draw()
            .map_err(plot_error)?;
        let marker_style = self.params.marker_color.filled();
        chart
            .draw_series(self.points.iter().map(|p| {
                Circle::new(
                    (p.x(), p.z().unwrap_or_default(), p.y()),
                    self.params.marker_size,
                    marker_style,
                )
            }))
            .map_err(plot_error)?;
        chart
            .draw_series(self.points.iter().map(|p| {
                Text::new(
                    p.annotation().to_owned(),
                    (p.x(), p.z().unwrap_or_default(), p.y()),
                    font.clone(),
                )
            }))
            .map_err(plot_error)?;
        // 3d axes have no descriptions, so the axis names are placed at the axis ends
        let axis_font = ("sans-serif", self.params.font_size + 5.0).into_font();
        chart
            .draw_series([
                Text::new("X", (x.max, z.min, y.min), axis_font.clone()),
                Text::new("Y", (x.min, z.min, y.max), axis_font.clone()),
                Text::new("Z", (x.min, z.max, y.min), axis_font),
            ])
            .map_err(plot_error)?;
        Ok(())
    }
}

fn plot_error<E: std::fmt::Display>(err: E) -> CoordGenError {
    CoordGenError::Plot(err.to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_helper::test_helper::check_logs;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use tempfile::tempdir;
    fn points_3d() -> PointSet {
        PointSet::from_coordinates(
            Dimension::Three,
            vec![vec![0.0, 0.0, 0.0], vec![10.0, 5.0, -2.0]],
            None,
        )
        .unwrap()
    }
    #[test]
    fn backend_from_path() {
        assert_eq!(
            PltBackEnd::from_path(Path::new("plot.png")).unwrap(),
            PltBackEnd::BMP
        );
        assert_eq!(
            PltBackEnd::from_path(Path::new("plot.JPG")).unwrap(),
            PltBackEnd::BMP
        );
        assert_eq!(
            PltBackEnd::from_path(Path::new("dir/plot.svg")).unwrap(),
            PltBackEnd::SVG
        );
        assert_matches!(
            PltBackEnd::from_path(Path::new("plot.csv")),
            Err(CoordGenError::InvalidConfiguration(_))
        );
        assert!(PltBackEnd::from_path(Path::new("plot")).is_err());
    }
    #[test]
    fn ax_lims() {
        assert_eq!(AxLims::from_extent(None), AxLims { min: 0.0, max: 1.0 });
        assert_eq!(
            AxLims::from_extent(Some((2.0, 2.0))),
            AxLims { min: 1.5, max: 2.5 }
        );
        assert_eq!(
            AxLims::from_extent(Some((0.0, 10.0))),
            AxLims {
                min: -0.5,
                max: 10.5
            }
        );
    }
    #[test]
    fn ax_lims_huge_range() {
        let lims = AxLims::from_extent(Some((-1.0e308, 1.0e308)));
        assert_relative_eq!(lims.min, -1.1e308);
        assert_relative_eq!(lims.max, 1.1e308);
        assert_eq!(
            AxLims::from_extent(Some((f64::MIN, f64::MAX))),
            AxLims {
                min: f64::MIN,
                max: f64::MAX
            }
        );
    }
    #[test]
    fn title() {
        assert_eq!(ScatterPlot::new(&points_3d()).title(), PLOT_TITLE_3D);
        let points = PointSet::new(Dimension::Two);
        assert_eq!(ScatterPlot::new(&points).title(), PLOT_TITLE_2D);
    }
    #[test]
    fn axes_limits() {
        let points = points_3d();
        let lims = ScatterPlot::new(&points).axes_limits();
        assert_eq!(lims.len(), 3);
        assert_eq!(lims[0], AxLims::from_extent(Some((0.0, 10.0))));
        assert_eq!(lims[2], AxLims::from_extent(Some((-2.0, 0.0))));
    }
    #[test]
    fn axes_limits_empty() {
        testing_logger::setup();
        let points = PointSet::new(Dimension::Two);
        let lims = ScatterPlot::new(&points).axes_limits();
        assert_eq!(lims, vec![AxLims { min: 0.0, max: 1.0 }; 2]);
        check_logs(log::Level::Warn, vec!["No points to plot. Drawing empty chart."]);
    }
    #[test]
    fn axes_limits_degenerate() {
        testing_logger::setup();
        let points =
            PointSet::from_coordinates(Dimension::Two, vec![vec![1.0, 0.0], vec![1.0, 3.0]], None)
                .unwrap();
        let lims = ScatterPlot::new(&points).axes_limits();
        assert_eq!(lims[0], AxLims { min: 0.5, max: 1.5 });
        check_logs(
            log::Level::Warn,
            vec!["All points share the same X coordinate. Widening X axis."],
        );
    }
    #[test]
    fn to_file_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let points = points_3d();
        let figure = ScatterPlot::new(&points).to_file(&path).unwrap();
        assert_eq!(figure.path(), Some(path.as_path()));
        assert!(figure.image().is_none());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
    }
    #[test]
    fn to_file_wrong_extension() {
        let dir = tempdir().unwrap();
        let points = points_3d();
        assert_matches!(
            ScatterPlot::new(&points).to_file(&dir.path().join("plot.txt")),
            Err(CoordGenError::InvalidConfiguration(_))
        );
    }
    #[test]
    fn to_buffer() {
        let points =
            PointSet::from_coordinates(Dimension::Two, vec![vec![1.0, 2.0], vec![3.0, 1.0]], None)
                .unwrap();
        let params = PlotParameters {
            fig_size: (400, 300),
            ..PlotParameters::default()
        };
        let figure = ScatterPlot::with_params(&points, params).to_buffer().unwrap();
        let img = figure.image().unwrap();
        assert_eq!(img.dimensions(), (400, 300));
        assert!(figure.path().is_none());
    }
    #[test]
    fn to_buffer_too_large() {
        let points = points_3d();
        let params = PlotParameters {
            fig_size: (u32::MAX, u32::MAX),
            ..PlotParameters::default()
        };
        assert_matches!(
            ScatterPlot::with_params(&points, params).to_buffer(),
            Err(CoordGenError::Plot(_))
        );
    }
}
