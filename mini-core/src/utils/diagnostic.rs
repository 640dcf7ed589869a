use std::{io::Write, path::Path};

use codespan_reporting::{
    diagnostic::{Diagnostic as Report, Label},
    files::SimpleFile,
    term::{self, Config},
};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use super::src_span::SrcSpan;

/// Where a syntax error points: one span in one source text.
pub struct Snippet<'a> {
    pub path: &'a Path,
    pub src: &'a str,
    pub span: SrcSpan,
    pub label: &'static str,
}

pub enum Diagnostic<'a> {
    /// Rendered by codespan with the offending source lines.
    Spanned {
        title: String,
        notes: Vec<String>,
        snippet: Snippet<'a>,
    },
    /// Runtime and I/O failures have no source position.
    Plain {
        title: String,
        text: String,
    },
}

impl Diagnostic<'_> {
    pub fn write(&self, buf: &mut Buffer) {
        match self {
            Diagnostic::Spanned { title, notes, snippet } => write_snippet(buf, title, notes, snippet),
            Diagnostic::Plain { title, text } => write_plain(buf, title, text),
        }
    }
}

fn write_snippet(buf: &mut Buffer, title: &str, notes: &[String], snippet: &Snippet) {
    let file = SimpleFile::new(snippet.path.display().to_string(), snippet.src);

    let report = Report::error()
        .with_message(title)
        .with_labels(vec![Label::primary((), snippet.span).with_message(snippet.label)])
        .with_notes(notes.to_vec());

    term::emit(buf, &Config::default(), &file, &report)
        .expect("write_snippet");
}

fn write_plain(buf: &mut Buffer, title: &str, text: &str) {
    buf.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Red)))
        .expect("write_plain_color");
    write!(buf, "error").expect("write_plain_kind");

    buf.set_color(ColorSpec::new().set_bold(true))
        .expect("write_plain_title_color");
    writeln!(buf, ": {title}").expect("write_plain_title");

    buf.reset().expect("write_plain_reset");

    if !text.is_empty() {
        writeln!(buf, "  {text}").expect("write_plain_text");
    }
}
