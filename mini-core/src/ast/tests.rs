use pretty_assertions::assert_eq;

use super::prelude::{Binary, BinaryOperator, Expression, Statement};

#[test]
fn test_binary_constructor_boxes_children() {
    let expression = Expression::binary(
        BinaryOperator::Add,
        Expression::integer(1),
        Expression::variable("x")
    );

    assert_eq!(
        expression,
        Expression::Binary(Binary {
            operator: BinaryOperator::Add,
            left: Box::new(Expression::Integer(1)),
            right: Box::new(Expression::Variable("x".to_string())),
        })
    );
}

#[test]
fn test_comparison_classification() {
    let comparisons = BinaryOperator::ALL.iter()
        .filter(|operator| operator.is_comparison())
        .count();

    assert_eq!(comparisons, 6);
    assert!(!BinaryOperator::Divide.is_comparison());
    assert!(BinaryOperator::GreaterThanOrEqual.is_comparison());
}

#[test]
fn test_display() {
    let program = Statement::block([
        Statement::declare("i"),
        Statement::declare_with("sum", Expression::integer(0)),
        Statement::while_loop(
            Expression::binary(BinaryOperator::LessThan, Expression::variable("i"), Expression::integer(5)),
            Statement::block([
                Statement::assign("sum", Expression::binary(
                    BinaryOperator::Add,
                    Expression::variable("sum"),
                    Expression::variable("i")
                )),
            ])
        ),
        Statement::if_else(
            Expression::variable("sum"),
            Statement::assign("i", Expression::integer(1)),
            Statement::block([])
        ),
        Statement::if_then(Expression::integer(0), Statement::declare("never")),
    ]);

    assert_eq!(
        program.to_string(),
        "{ var i; var sum = 0; while (i < 5) { sum = (sum + i); } \
         if (sum) i = 1; else { } if (0) var never; }"
    );
}

#[test]
fn test_display_nested_binary() {
    let expression = Expression::binary(
        BinaryOperator::Subtract,
        Expression::binary(
            BinaryOperator::Multiply,
            Expression::binary(BinaryOperator::Add, Expression::integer(3), Expression::integer(4)),
            Expression::integer(2)
        ),
        Expression::integer(1)
    );

    assert_eq!(expression.to_string(), "(((3 + 4) * 2) - 1)");
}

#[test]
fn test_deep_chain_renders_and_drops() {
    let expression = (0..100_000).fold(Expression::integer(0), |left, i| {
        Expression::binary(BinaryOperator::Add, left, Expression::integer(i % 10))
    });

    let rendered = expression.to_string();

    assert!(rendered.starts_with("((("));
    assert!(rendered.ends_with(" + 9)"));
    assert_eq!(rendered.matches(" + ").count(), 100_000);

    drop(expression);
}
