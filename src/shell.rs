#![warn(missing_docs)]
//! Interactive command loop working on a [`PointTable`].
//!
//! Each input line holds one [`Command`]. Errors of a command are reported and the loop
//! continues with the next line.
use crate::{
    config::{parse_f64, GenerationConfig},
    error::{CgResult, CoordGenError},
    export::{load_csv, save_csv, save_text, DEFAULT_CSV_FILE_NAME, DEFAULT_TEXT_FILE_NAME},
    plottable::{Figure, ScatterPlot},
    point::PointSet,
    point_distributions::generate,
    table::PointTable,
};
use std::{
    io::{BufRead, Write},
    path::PathBuf,
    str::FromStr,
};

const HELP: &str = "Commands:
  show                       print the point table
  generate                   generate a new point set
  edit <n> <x> <y> [<z>]     change the coordinates of row n
  name <n> <text>            name the point in row n
  delete <n>                 delete row n
  undo                       revert the last change of the table
  save [path]                export the table as CSV file
  text [path]                export the table as tab-delimited text file
  load <path>                replace the table by the points of a CSV file
  plot [path]                plot the points into an image file or into memory
  help                       show this help
  quit                       leave the program
";

/// A command of the interactive shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// print the table
    Show,
    /// generate a new point set with the current config
    Generate,
    /// replace the coordinates of a row
    Edit(usize, Vec<f64>),
    /// set the name of the point in a row
    Name(usize, String),
    /// delete a row
    Delete(usize),
    /// revert the last change
    Undo,
    /// export as CSV
    Save(Option<PathBuf>),
    /// export as tab-delimited text
    Text(Option<PathBuf>),
    /// import a CSV file
    Load(PathBuf),
    /// plot into a file or, without a path, into an image buffer
    Plot(Option<PathBuf>),
    /// print the command overview
    Help,
    /// leave the loop
    Quit,
}

fn parse_row(input: Option<&str>) -> CgResult<usize> {
    let input =
        input.ok_or_else(|| CoordGenError::InvalidConfiguration("row number missing".into()))?;
    input.parse::<usize>().map_err(|_| {
        CoordGenError::InvalidConfiguration(format!("invalid row number '{input}'"))
    })
}

impl FromStr for Command {
    type Err = CoordGenError;

    fn from_str(line: &str) -> CgResult<Self> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_lowercase();
        let path = |p: Option<&str>| p.map(PathBuf::from);
        let cmd = match command.as_str() {
            "show" => Self::Show,
            "generate" => Self::Generate,
            "edit" => {
                let row = parse_row(words.next())?;
                let coords = words
                    .map(|w| parse_f64(w, "coordinate"))
                    .collect::<CgResult<Vec<f64>>>()?;
                Self::Edit(row, coords)
            }
            "name" => {
                let row = parse_row(words.next())?;
                Self::Name(row, words.collect::<Vec<_>>().join(" "))
            }
            "delete" => Self::Delete(parse_row(words.next())?),
            "undo" => Self::Undo,
            "save" => Self::Save(path(words.next())),
            "text" => Self::Text(path(words.next())),
            "load" => Self::Load(path(words.next()).ok_or_else(|| {
                CoordGenError::InvalidConfiguration("load needs a file name".into())
            })?),
            "plot" => Self::Plot(path(words.next())),
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(CoordGenError::InvalidConfiguration(format!(
                    "unknown command '{other}'. Type 'help' for a list of commands"
                )))
            }
        };
        Ok(cmd)
    }
}

/// Write the number of points and the range of each axis.
///
/// # Errors
///
/// This function will return an error if writing fails.
pub fn write_summary(points: &PointSet, writer: &mut impl Write) -> CgResult<()> {
    writeln!(writer, "{} {} points", points.len(), points.dimension())?;
    if let Some(extent) = points.extent() {
        for ((min, max), axis) in extent.iter().zip(points.dimension().axis_names()) {
            writeln!(writer, "  {axis}: {min} .. {max}")?;
        }
    }
    Ok(())
}

/// State of an interactive session.
pub struct Shell {
    config: GenerationConfig,
    labels: Option<Vec<String>>,
    table: PointTable,
    figure: Option<Figure>,
}

impl Shell {
    /// Create a new [`Shell`] showing `points`.
    ///
    /// `config` and `labels` are used by the `generate` command.
    #[must_use]
    pub const fn new(
        config: GenerationConfig,
        labels: Option<Vec<String>>,
        points: PointSet,
    ) -> Self {
        Self {
            config,
            labels,
            table: PointTable::new(points),
            figure: None,
        }
    }
    /// Returns the [`PointTable`] of this session.
    #[must_use]
    pub const fn table(&self) -> &PointTable {
        &self.table
    }
    /// Returns the last rendered [`Figure`], if any.
    #[must_use]
    pub const fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }
    /// Execute a single [`Command`]. Returns `false` if the session should end.
    ///
    /// # Errors
    ///
    /// This function will return an error if the command fails. The state of the session is
    /// unchanged in this case.
    pub fn execute(&mut self, command: Command, writer: &mut impl Write) -> CgResult<bool> {
        match command {
            Command::Show => write!(writer, "{}", self.table)?,
            Command::Generate => {
                let points = generate(&self.config, self.labels.clone())?;
                write_summary(&points, writer)?;
                self.table.replace(points);
                self.figure = None;
            }
            Command::Edit(row, coords) => self.table.edit(row, &coords)?,
            Command::Name(row, name) => self.table.rename(row, &name)?,
            Command::Delete(row) => self.table.remove(row)?,
            Command::Undo => {
                if !self.table.undo() {
                    writeln!(writer, "Nothing to undo")?;
                }
            }
            Command::Save(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_FILE_NAME));
                save_csv(self.table.points(), &path)?;
                writeln!(writer, "Saved to {}", path.display())?;
            }
            Command::Text(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_TEXT_FILE_NAME));
                save_text(self.table.points(), &path)?;
                writeln!(writer, "Saved to {}", path.display())?;
            }
            Command::Load(path) => {
                let points = load_csv(&path, None)?;
                write_summary(&points, writer)?;
                self.table.replace(points);
                self.figure = None;
            }
            Command::Plot(path) => {
                let plot = ScatterPlot::new(self.table.points());
                let figure = match path {
                    Some(path) => plot.to_file(&path)?,
                    None => plot.to_buffer()?,
                };
                match &figure {
                    Figure::File { path, .. } => writeln!(writer, "Plot saved to {}", path.display())?,
                    Figure::Image(img) => {
                        writeln!(writer, "Plot rendered ({}x{})", img.width(), img.height())?;
                    }
                }
                self.figure = Some(figure);
            }
            Command::Help => write!(writer, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
    /// Run the command loop until `quit` or the end of the input.
    ///
    /// # Errors
    ///
    /// This function will return an error if reading from `reader` or writing into `writer`
    /// fails. Failing commands are reported into `writer` and do not end the loop.
    pub fn run(&mut self, reader: &mut impl BufRead, writer: &mut impl Write) -> CgResult<()> {
        let mut line = String::new();
        loop {
            write!(writer, "> ")?;
            writer.flush()?;
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>().and_then(|c| self.execute(c, writer)) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) => writeln!(writer, "Error: {e}")?,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        config::{AxisBounds, GenerationMode},
        point::Dimension,
    };
    use assert_matches::assert_matches;
    use std::io::BufReader;
    use tempfile::tempdir;

    fn shell() -> Shell {
        let config = GenerationConfig::new(
            vec![AxisBounds::new(0.0, 1.0).unwrap(); 2],
            10,
            1.0,
            GenerationMode::Grid,
        )
        .unwrap();
        let points = generate(&config, None).unwrap();
        Shell::new(config, None, points)
    }
    fn run(shell: &mut Shell, input: &str) -> String {
        let mut reader = BufReader::new(input.as_bytes());
        let mut writer = Vec::new();
        shell.run(&mut reader, &mut writer).unwrap();
        String::from_utf8(writer).unwrap()
    }
    #[test]
    fn parse_commands() {
        assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
        assert_eq!(" UNDO ".parse::<Command>().unwrap(), Command::Undo);
        assert_eq!(
            "edit 2 1.5 -3".parse::<Command>().unwrap(),
            Command::Edit(2, vec![1.5, -3.0])
        );
        assert_eq!(
            "name 1 north corner".parse::<Command>().unwrap(),
            Command::Name(1, "north corner".into())
        );
        assert_eq!("delete 3".parse::<Command>().unwrap(), Command::Delete(3));
        assert_eq!("save".parse::<Command>().unwrap(), Command::Save(None));
        assert_eq!(
            "text out.txt".parse::<Command>().unwrap(),
            Command::Text(Some(PathBuf::from("out.txt")))
        );
        assert_eq!(
            "plot a.svg".parse::<Command>().unwrap(),
            Command::Plot(Some(PathBuf::from("a.svg")))
        );
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }
    #[test]
    fn parse_invalid_commands() {
        assert_matches!(
            "spin".parse::<Command>(),
            Err(CoordGenError::InvalidConfiguration(_))
        );
        assert!("edit".parse::<Command>().is_err());
        assert!("edit x 1 2".parse::<Command>().is_err());
        assert!("edit 1 1 y".parse::<Command>().is_err());
        assert!("delete -1".parse::<Command>().is_err());
        assert!("load".parse::<Command>().is_err());
    }
    #[test]
    fn summary() {
        let points = PointSet::from_coordinates(
            Dimension::Two,
            vec![vec![0.0, 5.0], vec![2.0, -1.0]],
            None,
        )
        .unwrap();
        let mut writer = Vec::new();
        write_summary(&points, &mut writer).unwrap();
        assert_eq!(
            String::from_utf8(writer).unwrap(),
            "2 2D points\n  X: 0 .. 2\n  Y: -1 .. 5\n"
        );
    }
    #[test]
    fn edit_and_undo() {
        let mut shell = shell();
        let output = run(&mut shell, "edit 1 0.5 0.5\nshow\nundo\nundo\nquit\nshow\n");
        assert!(output.contains("0.5000"));
        assert!(output.contains("Nothing to undo"));
        assert_eq!(shell.table().points().get(0).unwrap().coords(), &[0.0, 0.0]);
    }
    #[test]
    fn errors_do_not_end_loop() {
        let mut shell = shell();
        let output = run(&mut shell, "delete 9\nfly\nedit 1 1 2 3\ndelete 1\n");
        assert!(output.contains("Error: InvalidConfiguration:point index 9 out of range (1..=4)"));
        assert!(output.contains("Error: InvalidConfiguration:unknown command 'fly'"));
        assert!(output.contains("Error: ShapeMismatch:"));
        assert_eq!(shell.table().points().len(), 3);
    }
    #[test]
    fn name_and_generate() {
        let mut shell = shell();
        run(&mut shell, "name 2 well A\n");
        assert_eq!(
            shell.table().points().get(1).unwrap().annotation(),
            "well A"
        );
        let output = run(&mut shell, "generate\n");
        assert!(output.contains("4 2D points"));
        assert_eq!(shell.table().points().get(1).unwrap().name(), None);
        assert!(!shell.table().can_undo());
    }
    #[test]
    fn save_load_and_plot() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("points.csv");
        let txt = dir.path().join("points.txt");
        let svg = dir.path().join("points.svg");
        let mut shell = shell();
        let input = format!(
            "delete 4\nsave {}\ntext {}\nplot {}\nload {}\n",
            csv.display(),
            txt.display(),
            svg.display(),
            csv.display()
        );
        let output = run(&mut shell, &input);
        assert!(output.contains("3 2D points"), "{output}");
        assert!(txt.exists());
        assert_eq!(shell.table().points().labels(), vec!["P1", "P2", "P3"]);
        assert!(shell.figure().is_none());
        run(&mut shell, &format!("plot {}\n", svg.display()));
        assert_eq!(shell.figure().unwrap().path(), Some(svg.as_path()));
    }
    #[test]
    fn plot_into_memory() {
        let mut shell = shell();
        let output = run(&mut shell, "plot\n");
        assert!(output.contains("Plot rendered (1000x800)"));
        assert!(shell.figure().unwrap().image().is_some());
    }
    #[test]
    fn help() {
        let mut shell = shell();
        let output = run(&mut shell, "help\n");
        assert!(output.contains("edit <n> <x> <y> [<z>]"));
    }
}
