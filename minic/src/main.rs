mod cli;
mod repl;

use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use cli::{init_tracing, install_interrupt_handler, print_error, print_finished, print_running};
use mini_core::{
    session::{parse_file, Session},
    utils::prelude::Error,
};

#[derive(Parser)]
enum Command {
    /// Executes a program and prints the final variable bindings
    Run {
        /// Path of source file
        path: PathBuf,
        /// Print the parsed program before running it
        #[arg(long, default_value_t = false)]
        print_ast: bool,
        /// Do not print the final bindings
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },
    /// Evaluates a single expression and prints its value
    Eval {
        /// Expression source, e.g. "(3 + 4) * 2 - 1"
        expression: String,
    },
    /// Runs Read Eval Print Loop
    Repl
}

fn main() -> ExitCode {
    init_tracing();
    install_interrupt_handler();

    let result = match Command::parse() {
        Command::Run { path, print_ast, quiet } => run(path, print_ast, quiet),
        Command::Eval { expression } => Session::new()
            .evaluate(&expression)
            .map(|value| println!("{value}")),
        Command::Repl => repl::start().map_err(Error::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err);

            ExitCode::FAILURE
        }
    }
}

/// Bindings made before a runtime error are still printed.
fn run(path: PathBuf, print_ast: bool, quiet: bool) -> Result<(), Error> {
    print_running(&path.display().to_string());
    let start = Instant::now();

    let program = parse_file(&path)?;

    if print_ast {
        println!("{program}");
    }

    let mut session = Session::new();
    let result = session.execute(&program);

    if !quiet {
        print!("{}", session.environment());
    }

    print_finished(start.elapsed());

    result
}
