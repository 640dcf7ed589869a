use std::fmt::Display;

// binary_operator -> + | - | * | / | == | != | < | > | <= | >=
/// Operators of a [`Binary`] expression.
///
/// Arithmetic wraps on overflow (two's complement), so `i64::MIN / -1`
/// evaluates to `i64::MIN`. Division truncates toward zero. Comparisons
/// produce `1` for true and `0` for false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 10] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Equal,
        Self::NotEqual,
        Self::LessThan,
        Self::GreaterThan,
        Self::LessThanOrEqual,
        Self::GreaterThanOrEqual,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
        }
    }

    pub fn is_comparison(&self) -> bool {
        !matches!(self, Self::Add | Self::Subtract | Self::Multiply | Self::Divide)
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// expression -> <integer> | <variable> | <binary> | "(" <expression> ")"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Integer(i64),
    Variable(String),
    Binary(Binary),
}

impl Expression {
    pub fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Self::Binary(Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render(f, Piece::Expression(self))
    }
}

// binary -> <expression> <binary_operator> <expression>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl Display for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render(f, Piece::Binary(self))
    }
}

/// Children are detached onto a worklist first, so dropping a long operator
/// chain does not recurse once per node.
impl Drop for Binary {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_binary(&mut self.left, &mut pending);
        detach_binary(&mut self.right, &mut pending);

        while let Some(mut expression) = pending.pop() {
            if let Expression::Binary(binary) = &mut expression {
                detach_binary(&mut binary.left, &mut pending);
                detach_binary(&mut binary.right, &mut pending);
            }
        }
    }
}

fn detach_binary(expression: &mut Expression, pending: &mut Vec<Expression>) {
    if let Expression::Binary(_) = expression {
        pending.push(std::mem::replace(expression, Expression::Integer(0)));
    }
}

enum Piece<'a> {
    Expression(&'a Expression),
    Binary(&'a Binary),
    Text(&'static str),
}

// Renders with an explicit stack; parser output may nest thousands of binaries deep.
fn render(f: &mut std::fmt::Formatter<'_>, root: Piece<'_>) -> std::fmt::Result {
    let mut pending = vec![root];

    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Text(text) => f.write_str(text)?,
            Piece::Expression(Expression::Integer(value)) => write!(f, "{value}")?,
            Piece::Expression(Expression::Variable(name)) => f.write_str(name)?,
            Piece::Expression(Expression::Binary(binary)) => pending.push(Piece::Binary(binary)),
            Piece::Binary(binary) => {
                pending.extend([
                    Piece::Text(")"),
                    Piece::Expression(&*binary.right),
                    Piece::Text(" "),
                    Piece::Text(binary.operator.symbol()),
                    Piece::Text(" "),
                    Piece::Expression(&*binary.left),
                    Piece::Text("("),
                ]);
            }
        }
    }

    Ok(())
}
