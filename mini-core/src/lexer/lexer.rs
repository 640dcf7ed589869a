use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

pub fn str_to_keyword(word: &str) -> Option<Token> {
	Some(match word {
		"var" => Token::Var,
		"if" => Token::If,
		"else" => Token::Else,
		"while" => Token::While,
		_ => return None
	})
}

/// Turns `(byte offset, char)` pairs into spanned tokens.
///
/// Yields exactly one [`Token::Eof`] and then stops.
#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,
	finished: bool,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		let mut lexer = Self {
			position: 0,
			next_position: 0,
			ch: None,
			next_ch: None,
			input,
			finished: false,
		};

		lexer.next_char();
		lexer.next_char();

		lexer
	}

	pub fn next_token(&mut self) -> LexResult {
		loop {
			let span = match self.ch {
				Some(ch) => match ch {
					'(' => self.eat_one_char(Token::LParen),
					')' => self.eat_one_char(Token::RParen),
					'{' => self.eat_one_char(Token::LBrace),
					'}' => self.eat_one_char(Token::RBrace),
					';' => self.eat_one_char(Token::Semicolon),
					'+' => self.eat_one_char(Token::Plus),
					'-' => self.eat_one_char(Token::Minus),
					'*' => self.eat_one_char(Token::Star),
					'/' if self.next_ch == Some('/') => self.lex_comment(),
					'/' => self.eat_one_char(Token::Slash),
					'=' => self.eat_with_equals(Token::Assign, Token::Equal),
					'<' => self.eat_with_equals(Token::LessThan, Token::LessThanOrEqual),
					'>' => self.eat_with_equals(Token::GreaterThan, Token::GreaterThanOrEqual),
					'!' if self.next_ch == Some('=') => self.eat_two_chars(Token::NotEqual),
					'a'..='z' | 'A'..='Z' | '_' => self.lex_ident(),
					'0'..='9' => return self.lex_number(),
					c if c.is_whitespace() => {
						let _ = self.next_char();
						continue;
					},
					c => {
						let start = self.position;
						let _ = self.next_char();

						return Err(LexicalError {
							error: LexicalErrorType::UnrecognizedToken { tok: c },
							location: SrcSpan::new(start, self.position),
						});
					}
				},
				None => (self.position, Token::Eof, self.position)
			};

			return Ok(span);
		}
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		self.position = self.next_position;
		self.ch = self.next_ch;

		match self.input.next() {
			Some((pos, next)) => {
				self.next_position = pos;
				self.next_ch = Some(next);
			},
			None => {
				self.next_position = self.position + self.ch.map_or(0, |ch| ch.len_utf8() as u32);
				self.next_ch = None;
			}
		}

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn eat_two_chars(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn eat_with_equals(&mut self, single: Token, with_equals: Token) -> Spanned {
		match self.next_ch {
			Some('=') => self.eat_two_chars(with_equals),
			_ => self.eat_one_char(single)
		}
	}

	fn lex_ident(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut ident = String::new();

		while let Some(ch) = self.ch.filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_') {
			ident.push(ch);
			self.next_char();
		}

		let end_pos = self.position;

		match str_to_keyword(&ident) {
			Some(keyword) => (start_pos, keyword, end_pos),
			None => (start_pos, Token::Ident(ident), end_pos)
		}
	}

	fn lex_number(&mut self) -> LexResult {
		let start_pos = self.position;
		let mut value = String::new();

		while let Some(ch) = self.ch.filter(char::is_ascii_digit) {
			value.push(ch);
			self.next_char();
		}

		let end_pos = self.position;

		match value.parse::<i64>() {
			Ok(value) => Ok((start_pos, Token::Int(value), end_pos)),
			Err(_) => Err(LexicalError {
				error: LexicalErrorType::IntegerOverflow,
				location: SrcSpan::new(start_pos, end_pos)
			})
		}
	}

	fn lex_comment(&mut self) -> Spanned {
		let start_pos = self.position;

		while !matches!(self.ch, None | Some('\n')) {
			self.next_char();
		}

		let end_pos = self.position;

		(start_pos, Token::Comment, end_pos)
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let token = self.next_token();

		if matches!(token, Ok((_, Token::Eof, _))) {
			self.finished = true;
		}

		Some(token)
	}
}
