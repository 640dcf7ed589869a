use crate::{
    ast::prelude::{Expression, Statement},
    lexer::prelude::{LexResult, LexicalError, Lexer, Spanned, Token},
    utils::prelude::SrcSpan,
};
use super::error::{ParseError, ParseErrorType};

pub trait Parse<T: Iterator<Item = LexResult>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError>;
}

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Statements(Vec<Statement>),
    Expression(Expression),
}

/// Deepest allowed nesting of parentheses and statements. Statements are
/// executed recursively, so the bound keeps every tree the parser returns
/// within reach of the evaluator.
pub const MAX_NESTING: usize = 256;

pub struct Parser<T: Iterator<Item = LexResult>> {
    pub current_token: Option<Spanned>,
    pub next_token: Option<Spanned>,
    pub lex_errors: Vec<LexicalError>,

    depth: usize,
    previous_end: u32,
    tokens: T,
}

impl<T: Iterator<Item = LexResult>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: None,
            next_token: None,
            lex_errors: vec![],

            depth: 0,
            previous_end: 0,
            tokens: input,
        };

        parser.step();
        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    /// Consumes the current token. Comments are skipped and the first lexical
    /// error stops the token stream.
    pub fn next_token(&mut self) -> Option<Spanned> {
        let t = self.current_token.take();
        let mut next = None;

        while self.lex_errors.is_empty() {
            match self.tokens.next() {
                Some(Ok((_, Token::Comment, _))) => {},
                Some(Err(err)) => {
                    self.lex_errors.push(err);

                    break;
                },
                Some(Ok(tok)) => {
                    next = Some(tok);

                    break;
                },
                None => {
                    break;
                }
            }
        }

        if let Some((_, _, end)) = &t {
            self.previous_end = *end;
        }

        self.current_token = self.next_token.take();
        self.next_token = next;

        t
    }

    pub fn is_at_end(&self) -> bool {
        matches!(self.current_token, None | Some((_, Token::Eof, _)))
    }

    pub fn current_is(&self, token: &Token) -> bool {
        matches!(&self.current_token, Some((_, current, _)) if current == token)
    }

    pub fn current_precedence(&self) -> Precedence {
        match &self.current_token {
            Some((_, token, _)) => Precedence::from(token),
            None => Precedence::Lowest
        }
    }

    /// Whether the upcoming tokens open a statement rather than an expression.
    pub fn starts_statement(&self) -> bool {
        match (&self.current_token, &self.next_token) {
            (Some((_, Token::Var | Token::If | Token::While | Token::LBrace, _)), _) => true,
            (Some((_, Token::Ident(_), _)), Some((_, Token::Assign, _))) => true,
            _ => false
        }
    }

    pub fn parse_program(&mut self) -> Result<Statement, ParseError> {
        let statements = self.parse_statements();

        self.finish(statements.map(Statement::block))
    }

    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let expression = Expression::parse(self, None)
            .and_then(|expression| {
                self.expect_end()?;

                Ok(expression)
            });

        self.finish(expression)
    }

    /// Blank input counts as an empty statement list.
    pub fn parse_input(&mut self) -> Result<Input, ParseError> {
        if self.starts_statement() || self.is_at_end() {
            let statements = self.parse_statements();

            self.finish(statements.map(Input::Statements))
        } else {
            self.parse_expression().map(Input::Expression)
        }
    }

    fn parse_statements(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = vec![];

        while !self.is_at_end() {
            statements.push(Statement::parse(self, None)?);
        }

        Ok(statements)
    }

    /// A lexical error truncates the token stream, so it takes priority over
    /// whatever the parser concluded from the truncated input.
    fn finish<R>(&self, result: Result<R, ParseError>) -> Result<R, ParseError> {
        match self.lex_errors.first() {
            Some(error) => parse_error(
                ParseErrorType::LexError { error: *error },
                error.location
            ),
            None => result
        }
    }

    /// Enters one level of nesting; pair with [`Parser::ascend`].
    pub fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            let span = match &self.current_token {
                Some((start, _, end)) => SrcSpan::new(*start, *end),
                None => SrcSpan::point(self.previous_end)
            };

            return parse_error(ParseErrorType::TooDeeplyNested, span);
        }

        self.depth += 1;

        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn unexpected(&self, expected: &[&str]) -> ParseError {
        match &self.current_token {
            Some((start, Token::Eof, end)) => ParseError {
                error: ParseErrorType::UnexpectedEof,
                span: SrcSpan { start: *start, end: *end }
            },
            Some((start, token, end)) => ParseError {
                error: ParseErrorType::UnexpectedToken {
                    token: token.clone(),
                    expected: expected.iter().map(|s| s.to_string()).collect(),
                },
                span: SrcSpan { start: *start, end: *end }
            },
            None => ParseError {
                error: ParseErrorType::UnexpectedEof,
                span: SrcSpan::point(self.previous_end)
            }
        }
    }

    pub fn expect_one(&mut self, token: Token) -> Result<(u32, u32), ParseError> {
        match &self.current_token {
            Some((start, tok, end)) if *tok == token => {
                let span = (*start, *end);
                self.step();

                Ok(span)
            },
            _ => Err(self.unexpected(&[&format!("`{}`", token.as_literal())]))
        }
    }

    pub fn expect_ident(&mut self) -> Result<(u32, String, u32), ParseError> {
        if let Some((start, Token::Ident(value), end)) = &self.current_token {
            let ident = (*start, value.clone(), *end);
            self.step();

            return Ok(ident);
        }

        match &self.current_token {
            Some((start, Token::Eof, end)) => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: *start, end: *end }
            ),
            Some((start, _, end)) => parse_error(
                ParseErrorType::ExpectedIdent,
                SrcSpan { start: *start, end: *end }
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan::point(self.previous_end)
            )
        }
    }

    /// Statements end with `;`. A missing one is reported right after the
    /// last consumed token.
    pub fn expect_semicolon(&mut self) -> Result<u32, ParseError> {
        match self.current_token {
            Some((_, Token::Semicolon, end)) => {
                self.step();

                Ok(end)
            },
            _ => parse_error(
                ParseErrorType::MissingSemicolon,
                SrcSpan::point(self.previous_end)
            )
        }
    }

    pub fn expect_end(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            return Ok(());
        }

        Err(self.unexpected(&["an operator", "end of input"]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
}

impl From<&Token> for Precedence {
    fn from(value: &Token) -> Self {
        match value {
            Token::Equal | Token::NotEqual => Self::Equals,
            Token::LessThan | Token::GreaterThan |
            Token::LessThanOrEqual | Token::GreaterThanOrEqual => Self::LessGreater,
            Token::Plus | Token::Minus => Self::Sum,
            Token::Slash | Token::Star => Self::Product,
            _ => Self::Lowest,
        }
    }
}

fn lex_str(src: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
    Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)))
}

fn lex_stream(stream: impl Iterator<Item = char>) -> Lexer<impl Iterator<Item = (u32, char)>> {
    Lexer::new(stream
        .scan(0, |pos, c| {
            *pos += c.len_utf8() as u32;
            Some((*pos - c.len_utf8() as u32, c))
        })
    )
}

/// Parses a whole program. The root is a [`Statement::Block`].
pub fn parse_program(src: &str) -> Result<Statement, ParseError> {
    Parser::new(lex_str(src)).parse_program()
}

pub fn parse_program_from_stream(stream: impl Iterator<Item = char>) -> Result<Statement, ParseError> {
    Parser::new(lex_stream(stream)).parse_program()
}

/// Parses input that must consist of exactly one expression.
pub fn parse_expression(src: &str) -> Result<Expression, ParseError> {
    Parser::new(lex_str(src)).parse_expression()
}

pub fn parse_input(src: &str) -> Result<Input, ParseError> {
    Parser::new(lex_str(src)).parse_input()
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
