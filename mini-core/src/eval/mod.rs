pub mod error;
mod operator;

pub mod prelude {
    pub use super::{
        error::*,
        apply, evaluate, execute, execute_all
    };
}


use tracing::{debug, trace};

use crate::{
    ast::prelude::{Assignment, BinaryOperator, Conditional, Declaration, Expression, Loop, Statement},
    environment::prelude::{from_bool, is_truthy, Environment, Value, DEFAULT_VALUE},
};
use self::error::RuntimeError;

/// Computes the value of `expression`. The left operand of a binary
/// expression is always evaluated before the right one.
///
/// Operands are walked with an explicit stack, so the depth of the tree is
/// bounded by memory rather than by the call stack.
pub fn evaluate(expression: &Expression, env: &Environment) -> Result<Value, RuntimeError> {
    let mut tasks = vec![Task::Visit(expression)];
    let mut values: Vec<Value> = vec![];

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(Expression::Integer(value)) => values.push(*value),
            Task::Visit(Expression::Variable(name)) => values.push(lookup(name, env)?),
            Task::Visit(Expression::Binary(binary)) => {
                tasks.push(Task::Apply(binary.operator));
                tasks.push(Task::Visit(&*binary.right));
                tasks.push(Task::Visit(&*binary.left));
            },
            Task::Apply(operator) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    unreachable!("both operands are evaluated before `{operator}`");
                };

                values.push(apply(operator, left, right)?);
            }
        }
    }

    match values.pop() {
        Some(value) => Ok(value),
        None => unreachable!("an expression always yields a value"),
    }
}

enum Task<'a> {
    Visit(&'a Expression),
    Apply(BinaryOperator),
}

fn lookup(name: &str, env: &Environment) -> Result<Value, RuntimeError> {
    env.get(name).ok_or_else(|| {
        debug!(name = %name, "read of undefined variable");

        RuntimeError::UndefinedVariable { name: name.to_string() }
    })
}

/// Applies `operator` to already evaluated operands.
pub fn apply(operator: BinaryOperator, left: Value, right: Value) -> Result<Value, RuntimeError> {
    let value = match operator {
        BinaryOperator::Add => left.wrapping_add(right),
        BinaryOperator::Subtract => left.wrapping_sub(right),
        BinaryOperator::Multiply => left.wrapping_mul(right),
        BinaryOperator::Divide => {
            if right == 0 {
                debug!(left, "division by zero");

                return Err(RuntimeError::DivisionByZero);
            }

            left.wrapping_div(right)
        },
        BinaryOperator::Equal => from_bool(left == right),
        BinaryOperator::NotEqual => from_bool(left != right),
        BinaryOperator::LessThan => from_bool(left < right),
        BinaryOperator::GreaterThan => from_bool(left > right),
        BinaryOperator::LessThanOrEqual => from_bool(left <= right),
        BinaryOperator::GreaterThanOrEqual => from_bool(left >= right),
    };

    Ok(value)
}

/// Runs `statement` against `env`. The first failure stops execution and is
/// returned as is.
pub fn execute(statement: &Statement, env: &mut Environment) -> Result<(), RuntimeError> {
    match statement {
        Statement::Declaration(declaration) => exec_declaration(declaration, env),
        Statement::Assignment(assignment) => exec_assignment(assignment, env),
        Statement::Conditional(conditional) => exec_conditional(conditional, env),
        Statement::Loop(loop_) => exec_loop(loop_, env),
        Statement::Block(block) => execute_all(&block.statements, env),
    }
}

/// Runs `statements` in order, stopping at the first failure.
pub fn execute_all(statements: &[Statement], env: &mut Environment) -> Result<(), RuntimeError> {
    statements.iter()
        .try_for_each(|statement| execute(statement, env))
}

fn exec_declaration(declaration: &Declaration, env: &mut Environment) -> Result<(), RuntimeError> {
    let value = match &declaration.initializer {
        Some(initializer) => evaluate(initializer, env)?,
        None => DEFAULT_VALUE,
    };

    match env.declare(declaration.name.clone(), value) {
        Some(previous) => trace!(name = %declaration.name, previous, value, "redeclared variable"),
        None => trace!(name = %declaration.name, value, "declared variable"),
    }

    Ok(())
}

fn exec_assignment(assignment: &Assignment, env: &mut Environment) -> Result<(), RuntimeError> {
    if !env.contains(&assignment.name) {
        debug!(name = %assignment.name, "assignment to undeclared variable");

        return Err(RuntimeError::UndeclaredAssignment {
            name: assignment.name.clone()
        });
    }

    let value = evaluate(&assignment.value, env)?;
    env.set(&assignment.name, value);

    trace!(name = %assignment.name, value, "assigned variable");

    Ok(())
}

fn exec_conditional(conditional: &Conditional, env: &mut Environment) -> Result<(), RuntimeError> {
    let condition = evaluate(&conditional.condition, env)?;

    if is_truthy(condition) {
        trace!(condition, "taking then branch");

        return execute(&conditional.resolution, env);
    }

    match &conditional.alternative {
        Some(alternative) => {
            trace!(condition, "taking else branch");

            execute(alternative, env)
        },
        None => Ok(())
    }
}

// No iteration bound: a condition that never becomes zero keeps the loop running.
fn exec_loop(loop_: &Loop, env: &mut Environment) -> Result<(), RuntimeError> {
    let mut iterations: u64 = 0;

    while is_truthy(evaluate(&loop_.condition, env)?) {
        execute(&loop_.body, env)?;
        iterations += 1;
    }

    debug!(iterations, "loop finished");

    Ok(())
}
