use crate::{
    ast::prelude::{Assignment, Block, Conditional, Declaration, Expression, Loop, Statement},
    lexer::prelude::{LexResult, Token},
    utils::prelude::SrcSpan,
};
use super::{
    error::{ParseError, ParseErrorType},
    parser::{parse_error, Parse, Parser, Precedence},
};

// statement -> <declaration> | <assignment> | <conditional> | <loop> | <block>
impl<T: Iterator<Item = LexResult>> Parse<T> for Statement {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        parser.descend()?;

        let res = match &parser.current_token {
            Some((_, token, _)) => match token {
                Token::Var => Self::Declaration(Declaration::parse(parser, None)?),
                Token::Ident(_) => Self::Assignment(Assignment::parse(parser, None)?),
                Token::If => Self::Conditional(Conditional::parse(parser, None)?),
                Token::While => Self::Loop(Loop::parse(parser, None)?),
                Token::LBrace => Self::Block(Block::parse(parser, None)?),
                _ => return Err(parser.unexpected(&["`var`", "`if`", "`while`", "`{`", "an Identifier"]))
            },
            None => return Err(parser.unexpected(&[]))
        };

        parser.ascend();

        Ok(res)
    }
}

// declaration -> var <identifier> [= <expression>] ;
impl<T: Iterator<Item = LexResult>> Parse<T> for Declaration {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        parser.expect_one(Token::Var)?;

        let (_, name, _) = parser.expect_ident()?;

        let initializer = if parser.current_is(&Token::Assign) {
            parser.step();

            Some(Expression::parse(parser, None)?)
        } else {
            None
        };

        parser.expect_semicolon()?;

        Ok(Self {
            name,
            initializer
        })
    }
}

// assignment -> <identifier> = <expression> ;
impl<T: Iterator<Item = LexResult>> Parse<T> for Assignment {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (_, name, _) = parser.expect_ident()?;

        parser.expect_one(Token::Assign)?;

        let value = Expression::parse(parser, None)?;

        parser.expect_semicolon()?;

        Ok(Self {
            name,
            value
        })
    }
}

// conditional -> if ( <expression> ) <statement> [else <statement>]
impl<T: Iterator<Item = LexResult>> Parse<T> for Conditional {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        parser.expect_one(Token::If)?;

        let condition = parse_condition(parser)?;
        let resolution = Box::new(Statement::parse(parser, None)?);

        let alternative = if parser.current_is(&Token::Else) {
            parser.step();

            Some(Box::new(Statement::parse(parser, None)?))
        } else {
            None
        };

        Ok(Self {
            condition,
            resolution,
            alternative
        })
    }
}

// loop -> while ( <expression> ) <statement>
impl<T: Iterator<Item = LexResult>> Parse<T> for Loop {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        parser.expect_one(Token::While)?;

        let condition = parse_condition(parser)?;
        let body = Box::new(Statement::parse(parser, None)?);

        Ok(Self {
            condition,
            body
        })
    }
}

// block -> { {<statement>} }
impl<T: Iterator<Item = LexResult>> Parse<T> for Block {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        parser.expect_one(Token::LBrace)?;

        let mut statements = vec![];

        while !parser.current_is(&Token::RBrace) && !parser.is_at_end() {
            statements.push(Statement::parse(parser, None)?);
        }

        parser.expect_one(Token::RBrace)?;

        Ok(Self { statements })
    }
}

fn parse_condition<T: Iterator<Item = LexResult>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    parser.expect_one(Token::LParen)?;

    let condition = Expression::parse(parser, None)?;

    parser.expect_one(Token::RParen)?;

    Ok(condition)
}

// expression -> <primary> {<binary_operator> <primary>}
impl<T: Iterator<Item = LexResult>> Parse<T> for Expression {
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let mut expr = parse_primary(parser)?;

        while precedence.unwrap_or(Precedence::Lowest) < parser.current_precedence() {
            let operator = match &parser.current_token {
                Some((_, token, _)) => match token.binary_operator() {
                    Some(operator) => operator,
                    None => break
                },
                None => break
            };

            let operator_precedence = parser.current_precedence();
            parser.step();

            let right = Expression::parse(parser, Some(operator_precedence))?;

            expr = Expression::binary(operator, expr, right);
        }

        Ok(expr)
    }
}

// primary -> <integer> | <identifier> | ( <expression> )
fn parse_primary<T: Iterator<Item = LexResult>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    match &parser.current_token {
        Some((_, Token::Int(value), _)) => {
            let value = *value;
            parser.step();

            Ok(Expression::Integer(value))
        },
        Some((_, Token::Ident(_), _)) => {
            let (_, name, _) = parser.expect_ident()?;

            Ok(Expression::Variable(name))
        },
        Some((_, Token::LParen, _)) => {
            parser.descend()?;
            parser.step();

            let expression = Expression::parse(parser, None)?;

            parser.expect_one(Token::RParen)?;
            parser.ascend();

            Ok(expression)
        },
        Some((start, token, end)) if *token != Token::Eof => parse_error(
            ParseErrorType::ExpectedExpression,
            SrcSpan { start: *start, end: *end }
        ),
        _ => Err(parser.unexpected(&[]))
    }
}
