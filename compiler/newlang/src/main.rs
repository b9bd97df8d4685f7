use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use newlang::{Engine, Error};

#[derive(Debug, Parser)]
#[command(
    name = "newlang",
    version,
    about = "Runs a NewLanguage program",
    long_about = "newlang parses a NewLanguage source file and evaluates it.\n\n\
        A program is a comma-separated list of commands; its value is the\n\
        value of the last command.\n\n\
        EXAMPLES:\n\
        \n  newlang prog.nl                Run a program, discarding its value\n\
        \n  newlang --print prog.nl        Run a program and print its value\n\
        \n  newlang --emit-ast prog.nl     Print the parsed tree as JSON"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the program's value to stdout
    #[arg(long)]
    print: bool,

    /// Print the parsed tree as JSON instead of running the program
    #[arg(long)]
    emit_ast: bool,

    /// Source file to run
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logger(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .try_init();
}

/// Runs the command described by `cli`, returning what should go to stdout.
fn execute(cli: &Cli) -> Result<Option<String>, Error> {
    let engine = Engine::from_source_path(&cli.input)?;
    if cli.emit_ast {
        return engine.ast_json().map(Some);
    }

    let value = engine.run()?;
    Ok(cli.print.then(|| value.to_string()))
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match execute(&cli) {
        Ok(Some(out)) => {
            println!("{out}");
            0
        }
        Ok(None) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn main() {
    std::process::exit(run_cli());
}
