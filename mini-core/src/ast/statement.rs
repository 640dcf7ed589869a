use std::fmt::Display;

use super::expression::Expression;

// statement -> <declaration> | <assignment> | <conditional> | <loop> | <block>
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Declaration(Declaration),
    Assignment(Assignment),
    Conditional(Conditional),
    Loop(Loop),
    Block(Block),
}

impl Statement {
    /// `var name;`
    pub fn declare(name: impl Into<String>) -> Self {
        Self::Declaration(Declaration {
            name: name.into(),
            initializer: None,
        })
    }

    /// `var name = initializer;`
    pub fn declare_with(name: impl Into<String>, initializer: Expression) -> Self {
        Self::Declaration(Declaration {
            name: name.into(),
            initializer: Some(initializer),
        })
    }

    pub fn assign(name: impl Into<String>, value: Expression) -> Self {
        Self::Assignment(Assignment {
            name: name.into(),
            value,
        })
    }

    pub fn if_then(condition: Expression, resolution: Statement) -> Self {
        Self::Conditional(Conditional {
            condition,
            resolution: Box::new(resolution),
            alternative: None,
        })
    }

    pub fn if_else(condition: Expression, resolution: Statement, alternative: Statement) -> Self {
        Self::Conditional(Conditional {
            condition,
            resolution: Box::new(resolution),
            alternative: Some(Box::new(alternative)),
        })
    }

    pub fn while_loop(condition: Expression, body: Statement) -> Self {
        Self::Loop(Loop {
            condition,
            body: Box::new(body),
        })
    }

    pub fn block(statements: impl IntoIterator<Item = Statement>) -> Self {
        Self::Block(Block {
            statements: statements.into_iter().collect(),
        })
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Declaration(declaration) => write!(f, "{declaration}"),
            Self::Assignment(assignment) => write!(f, "{assignment}"),
            Self::Conditional(conditional) => write!(f, "{conditional}"),
            Self::Loop(loop_) => write!(f, "{loop_}"),
            Self::Block(block) => write!(f, "{block}"),
        }
    }
}

// declaration -> var <identifier> [= <expression>] ;
/// Binds `name` in the environment, replacing any earlier binding.
/// Without an initializer the variable starts at `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub initializer: Option<Expression>,
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.initializer {
            Some(initializer) => write!(f, "var {} = {};", self.name, initializer),
            None => write!(f, "var {};", self.name),
        }
    }
}

// assignment -> <identifier> = <expression> ;
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: Expression,
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {};", self.name, self.value)
    }
}

// conditional -> if ( <expression> ) <statement> [else <statement>]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional {
    pub condition: Expression,
    pub resolution: Box<Statement>,
    pub alternative: Option<Box<Statement>>,
}

impl Display for Conditional {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} {}", Condition(&self.condition), self.resolution)?;

        match &self.alternative {
            Some(alternative) => write!(f, " else {alternative}"),
            None => Ok(())
        }
    }
}

// loop -> while ( <expression> ) <statement>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    pub condition: Expression,
    pub body: Box<Statement>,
}

impl Display for Loop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "while {} {}", Condition(&self.condition), self.body)
    }
}

// block -> { {<statement>} }
/// Statements run in order against the same environment; a block opens no scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }

        let statements = self.statements.iter()
            .map(|statement| statement.to_string())
            .collect::<Vec<String>>();

        write!(f, "{{ {} }}", statements.join(" "))
    }
}

/// Binary expressions already render their own parentheses.
struct Condition<'a>(&'a Expression);

impl Display for Condition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Expression::Binary(binary) => write!(f, "{binary}"),
            expression => write!(f, "({expression})"),
        }
    }
}
