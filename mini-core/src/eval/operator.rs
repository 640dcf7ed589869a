use std::str::FromStr;

use crate::ast::prelude::BinaryOperator;
use super::error::RuntimeError;

/// Operator tags handed over by external tree builders. An unknown tag is a
/// malformed expression.
impl FromStr for BinaryOperator {
    type Err = RuntimeError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
            .find(|operator| operator.symbol() == symbol)
            .ok_or_else(|| RuntimeError::MalformedExpression {
                operator: symbol.to_string()
            })
    }
}

// Single-character arithmetic tags: + - * /
impl TryFrom<char> for BinaryOperator {
    type Error = RuntimeError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            _ => Err(RuntimeError::MalformedExpression {
                operator: tag.to_string()
            })
        }
    }
}
