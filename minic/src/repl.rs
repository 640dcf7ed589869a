use std::io::Write;

use mini_core::session::Session;

use crate::cli::print_error;

const PROMPT: &str = ">> ";

/// Reads lines until `.exit` or end of input. Statements update the session,
/// a bare expression prints its value. Errors are reported and the loop goes on.
pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();
	let mut session = Session::new();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			println!();
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.trim() {
			"" => {},
			".exit" => return Ok(()),
			".env" => print!("{}", session.environment()),
			".reset" => session.reset(),
			line => match session.feed(line) {
				Ok(Some(value)) => println!("{value}"),
				Ok(None) => {},
				Err(err) => print_error(&err)
			}
		}
	}
}
