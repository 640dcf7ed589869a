use crate::ast::prelude::BinaryOperator;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // <letter>{<letter>|<digit>}
    Ident(String),
    // <digit>{<digit>}
    Int(i64),
    // // line comment
    Comment,

    // Keywords
    Var, // var
    If, // if
    Else, // else
    While, // while

    // Arithmetic
    Plus, // +
    Minus, // -
    Star, // *
    Slash, // /

    // Relations
    Equal, // ==
    NotEqual, // !=
    LessThan, // <
    GreaterThan, // >
    LessThanOrEqual, // <=
    GreaterThanOrEqual, // >=

    Assign, // =

    // Delimiters
    Semicolon, // ;
    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }

    Eof,
}

impl Token {
    pub fn is_reserved_word(&self) -> bool {
        matches!(self, Token::Var | Token::If | Token::Else | Token::While)
    }

    pub fn binary_operator(&self) -> Option<BinaryOperator> {
        Some(match self {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Subtract,
            Token::Star => BinaryOperator::Multiply,
            Token::Slash => BinaryOperator::Divide,
            Token::Equal => BinaryOperator::Equal,
            Token::NotEqual => BinaryOperator::NotEqual,
            Token::LessThan => BinaryOperator::LessThan,
            Token::GreaterThan => BinaryOperator::GreaterThan,
            Token::LessThanOrEqual => BinaryOperator::LessThanOrEqual,
            Token::GreaterThanOrEqual => BinaryOperator::GreaterThanOrEqual,
            _ => return None
        })
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Int(value) => value.to_string(),
            Token::Comment => "comment".to_string(),

            Token::Var => "var".to_string(),
            Token::If => "if".to_string(),
            Token::Else => "else".to_string(),
            Token::While => "while".to_string(),

            Token::Assign => "=".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::LBrace => "{".to_string(),
            Token::RBrace => "}".to_string(),

            Token::Eof => "end of input".to_string(),

            Token::Plus
            | Token::Minus
            | Token::Star
            | Token::Slash
            | Token::Equal
            | Token::NotEqual
            | Token::LessThan
            | Token::GreaterThan
            | Token::LessThanOrEqual
            | Token::GreaterThanOrEqual => self.binary_operator()
                .map(|operator| operator.symbol().to_string())
                .unwrap_or_default(),
        }
    }
}
