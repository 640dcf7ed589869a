use pretty_assertions::assert_eq;

use crate::utils::prelude::SrcSpan;
use super::prelude::{Lexer, LexResult, LexicalError, LexicalErrorType, Spanned, Token};

fn lex(input: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
    Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)))
}

fn tokens(input: &str) -> Result<Vec<Token>, LexicalError> {
    lex(input)
        .map(|token| token.map(|(_, token, _)| token))
        .collect()
}

#[test]
fn test_statements() -> Result<(), LexicalError> {
    let input = r#"
        var x = 10;
        while (x >= 1) {
            x = x - 1;
        }
        if (x != 0) var y; else var z;
    "#;

    let expected = vec![
        Token::Var,
        Token::Ident("x".to_string()),
        Token::Assign,
        Token::Int(10),
        Token::Semicolon,
        Token::While,
        Token::LParen,
        Token::Ident("x".to_string()),
        Token::GreaterThanOrEqual,
        Token::Int(1),
        Token::RParen,
        Token::LBrace,
        Token::Ident("x".to_string()),
        Token::Assign,
        Token::Ident("x".to_string()),
        Token::Minus,
        Token::Int(1),
        Token::Semicolon,
        Token::RBrace,
        Token::If,
        Token::LParen,
        Token::Ident("x".to_string()),
        Token::NotEqual,
        Token::Int(0),
        Token::RParen,
        Token::Var,
        Token::Ident("y".to_string()),
        Token::Semicolon,
        Token::Else,
        Token::Var,
        Token::Ident("z".to_string()),
        Token::Semicolon,
        Token::Eof,
    ];

    assert_eq!(tokens(input)?, expected);

    Ok(())
}

#[test]
fn test_operators() -> Result<(), LexicalError> {
    let expected = vec![
        Token::Plus,
        Token::Minus,
        Token::Star,
        Token::Slash,
        Token::Equal,
        Token::NotEqual,
        Token::LessThan,
        Token::GreaterThan,
        Token::LessThanOrEqual,
        Token::GreaterThanOrEqual,
        Token::Assign,
        Token::Eof,
    ];

    assert_eq!(tokens("+ - * / == != < > <= >= =")?, expected);

    // Two-character operators win over their one-character prefixes.
    assert_eq!(
        tokens("a<=b==c")?,
        vec![
            Token::Ident("a".to_string()),
            Token::LessThanOrEqual,
            Token::Ident("b".to_string()),
            Token::Equal,
            Token::Ident("c".to_string()),
            Token::Eof,
        ]
    );

    Ok(())
}

#[test]
fn test_operator_tokens_map_to_binary_operators() {
    for token in [Token::Plus, Token::Slash, Token::Equal, Token::GreaterThanOrEqual] {
        assert_eq!(token.binary_operator().map(|operator| operator.symbol().to_string()), Some(token.as_literal()));
    }

    for token in [Token::Assign, Token::Semicolon, Token::Var, Token::Eof] {
        assert_eq!(token.binary_operator(), None, "{token:?}");
    }
}

#[test]
fn test_identifiers_and_keywords() -> Result<(), LexicalError> {
    assert_eq!(
        tokens("variable var _tmp if2 if else while whiles x1_y")?,
        vec![
            Token::Ident("variable".to_string()),
            Token::Var,
            Token::Ident("_tmp".to_string()),
            Token::Ident("if2".to_string()),
            Token::If,
            Token::Else,
            Token::While,
            Token::Ident("whiles".to_string()),
            Token::Ident("x1_y".to_string()),
            Token::Eof,
        ]
    );

    Ok(())
}

#[test]
fn test_numbers() -> Result<(), LexicalError> {
    assert_eq!(
        tokens("0 007 42 9223372036854775807")?,
        vec![
            Token::Int(0),
            Token::Int(7),
            Token::Int(42),
            Token::Int(i64::MAX),
            Token::Eof,
        ]
    );

    // A digit run stops at the first letter.
    assert_eq!(
        tokens("12ab")?,
        vec![Token::Int(12), Token::Ident("ab".to_string()), Token::Eof]
    );

    Ok(())
}

#[test]
fn test_integer_overflow() {
    let result: Vec<LexResult> = lex("x = 9223372036854775808;").collect();

    assert_eq!(
        result[2],
        Err(LexicalError {
            error: LexicalErrorType::IntegerOverflow,
            location: SrcSpan::new(4, 23),
        })
    );
}

#[test]
fn test_comments() -> Result<(), LexicalError> {
    let input = "var x; // declares x\n// whole line\nx = 1; //";

    assert_eq!(
        tokens(input)?,
        vec![
            Token::Var,
            Token::Ident("x".to_string()),
            Token::Semicolon,
            Token::Comment,
            Token::Comment,
            Token::Ident("x".to_string()),
            Token::Assign,
            Token::Int(1),
            Token::Semicolon,
            Token::Comment,
            Token::Eof,
        ]
    );

    Ok(())
}

#[test]
fn test_spans() -> Result<(), LexicalError> {
    let spans = lex("var ab = 12;\n// c")
        .collect::<Result<Vec<Spanned>, LexicalError>>()?;

    assert_eq!(
        spans,
        vec![
            (0, Token::Var, 3),
            (4, Token::Ident("ab".to_string()), 6),
            (7, Token::Assign, 8),
            (9, Token::Int(12), 11),
            (11, Token::Semicolon, 12),
            (13, Token::Comment, 17),
            (17, Token::Eof, 17),
        ]
    );

    Ok(())
}

#[test]
fn test_spans_count_bytes() -> Result<(), LexicalError> {
    // `é` takes two bytes, so the newline sits at byte 5.
    let spans = lex("// é\nx")
        .collect::<Result<Vec<Spanned>, LexicalError>>()?;

    assert_eq!(
        spans,
        vec![
            (0, Token::Comment, 5),
            (6, Token::Ident("x".to_string()), 7),
            (7, Token::Eof, 7),
        ]
    );

    Ok(())
}

#[test]
fn test_unrecognized_characters() {
    let fails: Vec<LexicalError> = lex("a # b ! c $")
        .filter_map(Result::err)
        .collect();

    assert_eq!(
        fails,
        vec![
            LexicalError {
                error: LexicalErrorType::UnrecognizedToken { tok: '#' },
                location: SrcSpan::new(2, 3),
            },
            LexicalError {
                error: LexicalErrorType::UnrecognizedToken { tok: '!' },
                location: SrcSpan::new(6, 7),
            },
            LexicalError {
                error: LexicalErrorType::UnrecognizedToken { tok: '$' },
                location: SrcSpan::new(10, 11),
            },
        ]
    );
}

#[test]
fn test_single_eof() {
    let mut lexer = lex("  ");

    assert_eq!(lexer.next(), Some(Ok((2, Token::Eof, 2))));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}
