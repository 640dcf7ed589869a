use std::{io::BufReader, path::{Path, PathBuf}};

use tracing::debug;
use utf8_chars::BufReadCharsExt;

use crate::{
    ast::prelude::Statement,
    environment::prelude::{Environment, Value},
    eval::prelude::{evaluate, execute, execute_all},
    parser::prelude::{parse_expression, parse_input, parse_program, parse_program_from_stream, Input, ParseError},
    utils::prelude::Error,
};

/// Name under which in-memory sources appear in diagnostics.
pub const INPUT_NAME: &str = "<input>";

/// Owns the environment of one evaluation session. Bindings persist across
/// calls until [`Session::reset`].
#[derive(Debug, Default, Clone)]
pub struct Session {
    env: Environment,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(env: Environment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }

    pub fn reset(&mut self) {
        self.env.clear()
    }

    pub fn execute(&mut self, statement: &Statement) -> Result<(), Error> {
        execute(statement, &mut self.env)?;

        Ok(())
    }

    /// Parses and executes a whole program.
    pub fn run(&mut self, src: &str) -> Result<(), Error> {
        let program = parse_program(src)
            .map_err(|error| parse_failure(INPUT_NAME, src, error))?;

        self.execute(&program)
    }

    pub fn run_file(&mut self, path: &Path) -> Result<(), Error> {
        let program = parse_file(path)?;

        self.execute(&program)
    }

    /// Evaluates one expression against the session bindings.
    pub fn evaluate(&self, src: &str) -> Result<Value, Error> {
        let expression = parse_expression(src)
            .map_err(|error| parse_failure(INPUT_NAME, src, error))?;

        Ok(evaluate(&expression, &self.env)?)
    }

    /// Handles one line of interactive input: statements are executed,
    /// a lone expression is evaluated and its value returned.
    pub fn feed(&mut self, src: &str) -> Result<Option<Value>, Error> {
        let input = parse_input(src)
            .map_err(|error| parse_failure(INPUT_NAME, src, error))?;

        match input {
            Input::Statements(statements) => {
                execute_all(&statements, &mut self.env)?;

                Ok(None)
            },
            Input::Expression(expression) => Ok(Some(evaluate(&expression, &self.env)?))
        }
    }
}

/// Streams `path` through the parser without reading it into memory first.
/// The consumed text is kept so parse errors can point into it.
pub fn parse_file(path: &Path) -> Result<Statement, Error> {
    let file = std::fs::File::open(path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut io_error = None;
    let mut reader = BufReader::new(file);

    let mut stream = reader.chars()
        .map_while(|c| match c {
            Ok(c) => {
                src.push(c);
                Some(c)
            },
            Err(err) => {
                io_error = Some(err);
                None
            }
        });

    let parsed = parse_program_from_stream(stream.by_ref());
    stream.for_each(drop);

    if let Some(err) = io_error {
        return Err(err.into());
    }

    debug!(path = %path.display(), bytes = src.len(), "parsed source file");

    parsed.map_err(|error| parse_failure(path, &src, error))
}

fn parse_failure(path: impl Into<PathBuf>, src: &str, error: ParseError) -> Error {
    Error::Parse {
        path: path.into(),
        src: src.to_string(),
        error
    }
}

#[cfg(test)]
mod tests;
