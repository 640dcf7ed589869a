use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::prelude::RuntimeError,
    parser::prelude::{ParseError, ParseErrorType},
    utils::prelude::SrcSpan,
};
use super::diagnostic::{Diagnostic, Snippet};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse source code")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("execution failed")]
    Runtime {
        #[from]
        error: RuntimeError
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8_lossy(&nocolor.into_inner()).into_owned()
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        self.to_diagnostic().write(buf);
        writeln!(buf).expect("write new line diagnostic");
    }

    pub fn to_diagnostic(&self) -> Diagnostic<'_> {
        match self {
            Error::Parse { path, src, error } => {
                let (label, notes) = error.details();

                // End of input is shown right after the last character; any
                // other span is clamped to the text that was actually read.
                let end = src.len() as u32;
                let span = if matches!(error.error, ParseErrorType::UnexpectedEof) {
                    SrcSpan::point(end)
                } else {
                    SrcSpan::new(error.span.start.min(end), error.span.end.min(end))
                };

                let notes = match notes.is_empty() {
                    true => vec![],
                    false => vec![notes.join("\n")],
                };

                Diagnostic::Spanned {
                    title: "Syntax error".into(),
                    notes,
                    snippet: Snippet { path, src, span, label },
                }
            },
            Error::Runtime { error } => Diagnostic::Plain {
                title: error.title().into(),
                text: error.to_string(),
            },
            Error::StdIo { err } => Diagnostic::Plain {
                title: "Standard IO error".into(),
                text: err.to_string(),
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::StdIo { err: err.kind() }
    }
}
