use std::io::{self, Write};

use clap::Parser;

use cachegen::{AppError, paths_from_args, paths_from_reader, render_source};

#[derive(Parser)]
#[command(name = "cachegen")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Package paths to blank-import. When none are given, paths are
    /// read from stdin, one per line.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    paths: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = run(&cli.paths);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), AppError> {
    // Any argument, even one that trims to empty, selects argument
    // mode; stdin is only consulted when there are no arguments.
    let paths = if args.is_empty() {
        paths_from_reader(io::stdin().lock())?
    } else {
        paths_from_args(args)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(render_source(&paths).as_bytes())?;
    Ok(())
}
