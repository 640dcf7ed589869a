use thiserror::Error;

/// Failures raised while evaluating or executing. Every one of them aborts
/// the current run; statements that completed before it keep their effects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Read of a name with no binding.
    #[error("variable `{name}` is not defined")]
    UndefinedVariable {
        name: String
    },
    /// Assignment to a name that was never declared.
    #[error("cannot assign to `{name}`: variable was never declared")]
    UndeclaredAssignment {
        name: String
    },
    #[error("attempt to divide by zero")]
    DivisionByZero,
    /// An operator tag that names no known operator.
    #[error("unknown operator `{operator}`")]
    MalformedExpression {
        operator: String
    },
}

impl RuntimeError {
    pub fn title(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "Undefined variable",
            Self::UndeclaredAssignment { .. } => "Assignment to undeclared variable",
            Self::DivisionByZero => "Division by zero",
            Self::MalformedExpression { .. } => "Malformed expression",
        }
    }
}
