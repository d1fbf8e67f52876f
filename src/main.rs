use clap::Parser;
use coordgen::{
    console::{Args, PartialArgs},
    error::CgResult,
    export::{save_csv, save_text},
    plottable::ScatterPlot,
    point_distributions::generate,
    shell::{write_summary, Command, Shell},
};
use env_logger::Env;
use std::io::{self, Write};

fn main() -> CgResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    //parse CLI arguments and ask for missing ones
    let args = Args::try_from(PartialArgs::parse())?;

    let points = generate(&args.config, args.labels.clone())?;
    let mut stdout = io::stdout().lock();
    write_summary(&points, &mut stdout)?;
    writeln!(stdout)?;

    if let Some(path) = &args.output {
        save_csv(&points, path)?;
    }
    if let Some(path) = &args.text {
        save_text(&points, path)?;
    }
    if let Some(path) = &args.plot {
        ScatterPlot::new(&points).to_file(path)?;
    }

    let mut shell = Shell::new(args.config, args.labels, points);
    shell.execute(Command::Show, &mut stdout)?;
    if args.interactive {
        writeln!(stdout, "\nType 'help' for a list of commands.")?;
        shell.run(&mut io::stdin().lock(), &mut stdout)?;
    }
    Ok(())
}
