//! Handling the coordgen CLI
//!
//! This module handles the command line parsing. Generation parameters that are neither given
//! on the command line nor in a config file are asked for on the terminal.
use crate::{
    config::{
        parse_count, parse_f64, parse_spacing, AxisBounds, GenerationConfig, GenerationMode,
    },
    error::{CgResult, CoordGenError},
    get_version,
    point::{Dimension, AXIS_NAMES},
};
use clap::{builder::Str, Parser};
use rprompt::prompt_reply_from_bufread;
use std::{
    io::{stdin, stdout, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};
use strum::IntoEnumIterator;

/// Number of invalid answers accepted for a single prompt.
pub const MAX_ATTEMPTS: usize = 3;

/// Complete command line arguments of the coordgen application.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// validated generation parameters
    pub config: GenerationConfig,
    /// labels of the generated points
    pub labels: Option<Vec<String>>,
    /// CSV file to export the points into
    pub output: Option<PathBuf>,
    /// tab-delimited text file to export the points into
    pub text: Option<PathBuf>,
    /// image file to plot the points into
    pub plot: Option<PathBuf>,
    /// enter the interactive command loop after generation
    pub interactive: bool,
}

/// Command line arguments as typed. Missing generation parameters are prompted for.
#[derive(Parser, Debug, Default)]
#[command(author, version = Str::from(get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// lower limit of the x axis
    #[arg(long, allow_negative_numbers = true)]
    xmin: Option<String>,
    /// upper limit of the x axis
    #[arg(long, allow_negative_numbers = true)]
    xmax: Option<String>,
    /// lower limit of the y axis
    #[arg(long, allow_negative_numbers = true)]
    ymin: Option<String>,
    /// upper limit of the y axis
    #[arg(long, allow_negative_numbers = true)]
    ymax: Option<String>,
    /// lower limit of the z axis (3D only)
    #[arg(long, allow_negative_numbers = true)]
    zmin: Option<String>,
    /// upper limit of the z axis (3D only)
    #[arg(long, allow_negative_numbers = true)]
    zmax: Option<String>,
    /// number of points (upper limit in grid mode)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<String>,
    /// distance between grid points
    #[arg(short, long)]
    spacing: Option<String>,
    /// generation mode: grid or random
    #[arg(short, long)]
    mode: Option<String>,
    /// YAML file with generation parameters. Command line values take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
    /// number of axes: 2 or 3
    #[arg(short, long)]
    dimension: Option<String>,
    /// comma separated point labels
    #[arg(short, long)]
    labels: Option<String>,
    /// CSV file to write the points into
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// tab-delimited text file to write the points into
    #[arg(short, long)]
    text: Option<PathBuf>,
    /// image file (png, bmp, jpg or svg) to plot the points into
    #[arg(short, long)]
    plot: Option<PathBuf>,
    /// enter the interactive command loop after generation
    #[arg(short, long)]
    interactive: bool,
}

/// Parse a dimension given as "2", "3", "2d" or "3d".
///
/// # Errors
///
/// This function will return [`CoordGenError::InvalidConfiguration`] for any other input.
pub fn parse_dimension(input: &str) -> CgResult<Dimension> {
    match input.trim().to_ascii_lowercase().as_str() {
        "2" | "2d" => Ok(Dimension::Two),
        "3" | "3d" => Ok(Dimension::Three),
        _ => Err(CoordGenError::InvalidConfiguration(format!(
            "dimension must be 2 or 3, got '{input}'"
        ))),
    }
}

/// Split a comma separated label list. Surrounding whitespace is removed.
#[must_use]
pub fn parse_labels(input: &str) -> Vec<String> {
    input.split(',').map(|l| l.trim().to_owned()).collect()
}

fn mode_prompt() -> String {
    let modes: Vec<String> = GenerationMode::iter().map(|m| m.to_string()).collect();
    format!("Generation mode ({}): ", modes.join(" or "))
}

/// Ask for a value until `eval` accepts the answer.
///
/// After [`MAX_ATTEMPTS`] rejected answers a [`CoordGenError::Console`] error is returned.
fn prompt_arg<T>(
    eval: &impl Fn(&str) -> CgResult<T>,
    prompt: &str,
    init_str: &str,
    attempts_left: usize,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> CgResult<T> {
    let input = prompt_reply_from_bufread(reader, writer, format!("{init_str}{prompt}"))
        .map_err(|e| CoordGenError::Console(format!("cannot read input: {e}")))?;
    match eval(&input) {
        Ok(arg) => Ok(arg),
        Err(e) if attempts_left > 1 => prompt_arg(
            eval,
            prompt,
            &format!("Invalid input! {e}\n"),
            attempts_left - 1,
            reader,
            writer,
        ),
        Err(e) => Err(CoordGenError::Console(format!(
            "too many invalid inputs ({MAX_ATTEMPTS}). Last error: {e}"
        ))),
    }
}

/// Extract an argument: a command line value is evaluated once, a missing one is prompted for.
fn get_arg<T>(
    eval: impl Fn(&str) -> CgResult<T>,
    input: Option<&str>,
    prompt: &str,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> CgResult<T> {
    input.map_or_else(
        || prompt_arg(&eval, prompt, "", MAX_ATTEMPTS, reader, writer),
        &eval,
    )
}

impl PartialArgs {
    fn bound_input(&self, index: usize) -> Option<&str> {
        [
            &self.xmin, &self.xmax, &self.ymin, &self.ymax, &self.zmin, &self.zmax,
        ][index]
            .as_deref()
    }
    /// Complete these arguments, reading missing values from `reader` and writing the prompts
    /// into `writer`.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - a value given on the command line or in the config file is invalid.
    ///   - a prompted value is invalid [`MAX_ATTEMPTS`] times.
    ///   - the assembled config is invalid.
    pub fn complete(self, reader: &mut impl BufRead, writer: &mut impl Write) -> CgResult<Args> {
        let file_config = self
            .config
            .as_deref()
            .map(GenerationConfig::from_yaml_file)
            .transpose()?;
        let dimension = match (&self.dimension, &file_config) {
            (Some(d), _) => parse_dimension(d)?,
            (None, Some(config)) => config.dimension()?,
            (None, None) => Dimension::Three,
        };
        let mut bounds = Vec::with_capacity(dimension.nr_of_axes());
        for (axis, name) in AXIS_NAMES.iter().enumerate().take(dimension.nr_of_axes()) {
            let from_file = file_config.as_ref().and_then(|c| c.bounds.get(axis));
            let (min_label, max_label) = (format!("{name} min"), format!("{name} max"));
            let min = match (self.bound_input(2 * axis), from_file) {
                (None, Some(b)) => b.min,
                (input, _) => get_arg(
                    |s| parse_f64(s, &min_label),
                    input,
                    &format!("{min_label}: "),
                    reader,
                    writer,
                )?,
            };
            // the range is checked for each answer, so an inverted range is asked for again
            let axis_bounds = match (self.bound_input(2 * axis + 1), from_file) {
                (None, Some(b)) => AxisBounds::new(min, b.max)?,
                (input, _) => get_arg(
                    |s| AxisBounds::new(min, parse_f64(s, &max_label)?),
                    input,
                    &format!("{max_label}: "),
                    reader,
                    writer,
                )?,
            };
            bounds.push(axis_bounds);
        }
        let count = match (self.count.as_deref(), &file_config) {
            (None, Some(config)) => config.count,
            (input, _) => get_arg(parse_count, input, "Number of points: ", reader, writer)?,
        };
        let mode = match (self.mode.as_deref(), &file_config) {
            (None, Some(config)) => config.mode,
            (input, _) => get_arg(GenerationMode::parse, input, &mode_prompt(), reader, writer)?,
        };
        let default_spacing = file_config
            .as_ref()
            .map_or_else(|| GenerationConfig::default().spacing, |c| c.spacing);
        let spacing = match (self.spacing.as_deref(), mode) {
            (Some(input), GenerationMode::Random) => parse_f64(input, "spacing")?,
            (None, GenerationMode::Random) => default_spacing,
            (None, GenerationMode::Grid) if file_config.is_some() => default_spacing,
            (input, GenerationMode::Grid) => {
                get_arg(parse_spacing, input, "Grid spacing: ", reader, writer)?
            }
        };
        Ok(Args {
            config: GenerationConfig::new(bounds, count, spacing, mode)?,
            labels: self.labels.as_deref().map(parse_labels),
            output: self.output,
            text: self.text,
            plot: self.plot,
            interactive: self.interactive,
        })
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = CoordGenError;

    fn try_from(part_args: PartialArgs) -> CgResult<Self> {
        let mut reader = BufReader::new(stdin().lock());
        let mut writer = BufWriter::new(stdout().lock());
        //intro only shown when neither the help, nor the version flag is specified
        show_intro();
        part_args.complete(&mut reader, &mut writer)
    }
}

fn create_intro() -> String {
    let title = "coordgen - coordinate point generator";
    let rule = "=".repeat(title.len() + 4);
    format!("{rule}\n  {title}\n{rule}\n")
}

/// Show the application banner and the version information.
pub fn show_intro() {
    println!("{}version {}\n", create_intro(), get_version());
}
