use std::{
    io::{IsTerminal, Write},
    sync::Once,
    time::Duration,
};
use mini_core::utils::prelude::Error;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `mini_core=trace`.
pub const LOG_VAR: &str = "MINI_LOG";

pub const INTERRUPTED_EXIT_CODE: i32 = 130;

static INIT_TRACING: Once = Once::new();

pub(crate) fn print_running(text: &str) {
    print_colourful_prefix("Running", Color::Magenta, text)
}

pub(crate) fn print_finished(duration: Duration) {
    print_colourful_prefix("Finished", Color::Green, &format!("in {}", seconds(duration)))
}

pub(crate) fn print_interrupted() {
    print_colourful_prefix("Interrupted", Color::Yellow, "stopped by Ctrl-C")
}

pub fn seconds(duration: Duration) -> String {
    format!("{:.2}s", duration.as_millis() as f32 / 1000.)
}

pub fn print_colourful_prefix(prefix: &str, color: Color, text: &str) {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();
    buffer
        .set_color(
            ColorSpec::new()
                .set_intense(true)
                .set_bold(true)
                .set_fg(Some(color)),
        )
        .expect("print_colourful_prefix");
    write!(buffer, "{prefix: >11}").expect("print_colourful_prefix");
    buffer
        .set_color(&ColorSpec::new())
        .expect("print_colourful_prefix");
    writeln!(buffer, " {text}").expect("print_colourful_prefix");
    buffer_writer.print(&buffer).expect("print_colourful_prefix");
}

pub fn print_error(error: &Error) {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();
    error.pretty(&mut buffer);
    buffer_writer
        .print(&buffer)
        .expect("Writing error to stderr");
}

pub fn stderr_buffer_writer() -> BufferWriter {
    BufferWriter::stderr(color_choice())
}

/// Installs a stderr subscriber when `MINI_LOG` is set. Later calls are no-ops.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let Ok(filter) = std::env::var(LOG_VAR) else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .with_ansi(color_choice() != ColorChoice::Never)
            .try_init();
    });
}

/// Ctrl-C ends the process with exit code 130. Evaluation itself is not
/// cancellable, so this is the only way out of a non-terminating loop.
pub fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        print_interrupted();
        std::process::exit(INTERRUPTED_EXIT_CODE);
    });

    if let Err(err) = result {
        tracing::warn!(%err, "could not install Ctrl-C handler");
    }
}

fn colour_forced() -> bool {
    if let Ok(force) = std::env::var("FORCE_COLOR") {
        !force.is_empty()
    } else {
        false
    }
}

fn color_choice() -> ColorChoice {
    if colour_forced() {
        ColorChoice::Always
    } else if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
