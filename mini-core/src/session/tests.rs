use std::path::PathBuf;

use pretty_assertions::assert_eq;

use crate::{
    environment::prelude::Environment,
    eval::prelude::RuntimeError,
    parser::prelude::ParseErrorType,
    utils::prelude::Error,
};
use super::{parse_file, Session, INPUT_NAME};

fn run(src: &str) -> Result<Environment, Error> {
    let mut session = Session::new();
    session.run(src)?;

    Ok(session.into_environment())
}

struct TempSource {
    path: PathBuf,
}

impl TempSource {
    fn new(name: &str, contents: &str) -> std::io::Result<Self> {
        let path = std::env::temp_dir()
            .join(format!("mini-core-{}-{name}.mini", std::process::id()));
        std::fs::write(&path, contents)?;

        Ok(Self { path })
    }
}

impl Drop for TempSource {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[test]
fn test_sum_program() -> Result<(), Error> {
    let env = run("var x = 10; var y = 20; var sum = x + y;")?;

    assert_eq!(env, Environment::from_iter([("x", 10), ("y", 20), ("sum", 30)]));

    Ok(())
}

#[test]
fn test_loop_program() -> Result<(), Error> {
    let src = r#"
        var i = 0;
        var sum = 0;
        while (i < 5) {
            sum = sum + i;
            i = i + 1;
        }
    "#;

    assert_eq!(run(src)?, Environment::from_iter([("i", 5), ("sum", 10)]));

    Ok(())
}

#[test]
fn test_conditional_program() -> Result<(), Error> {
    let src = r#"
        var x = 7;
        if (x > 5) { var y = 1; } else { var y = 2; }
    "#;

    let env = run(src)?;

    assert_eq!(env.get("y"), Some(1));
    assert_eq!(env.len(), 2);

    Ok(())
}

#[test]
fn test_expression_evaluation() -> Result<(), Error> {
    let session = Session::new();

    assert_eq!(session.evaluate("(3 + 4) * 2 - 1")?, 13);
    assert!(matches!(session.evaluate("7 / -2"), Err(Error::Parse { .. })));
    assert_eq!(session.evaluate("0 - 7 / 2")?, -3);
    assert_eq!(session.evaluate("2 < 3 == 1")?, 1);

    Ok(())
}

#[test]
fn test_undefined_variable() {
    let session = Session::new();

    assert_eq!(
        session.evaluate("z"),
        Err(Error::Runtime {
            error: RuntimeError::UndefinedVariable { name: "z".to_string() }
        })
    );
}

#[test]
fn test_long_expressions() -> Result<(), Error> {
    for terms in [1_000, 10_000, 50_000] {
        let env = run(&format!("var x = {};", vec!["1"; terms].join(" + ")))?;

        assert_eq!(env.get("x"), Some(terms as i64));
    }

    Ok(())
}

#[test]
fn test_deep_nesting_is_a_syntax_error() {
    let src = format!("var x = {}1{};", "(".repeat(10_000), ")".repeat(10_000));

    match run(&src) {
        Err(Error::Parse { error, .. }) => assert_eq!(error.error, ParseErrorType::TooDeeplyNested),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_bindings_persist_across_runs() -> Result<(), Error> {
    let mut session = Session::new();

    session.run("var counter = 1;")?;
    session.run("counter = counter * 10;")?;

    assert_eq!(session.evaluate("counter + 1")?, 11);

    session.reset();

    assert!(session.environment().is_empty());
    assert!(matches!(session.evaluate("counter"), Err(Error::Runtime { .. })));

    Ok(())
}

#[test]
fn test_failed_run_keeps_earlier_effects() {
    let mut session = Session::new();

    let result = session.run("var a = 4; var b = a / 0; var c = 1;");

    assert_eq!(result, Err(Error::Runtime { error: RuntimeError::DivisionByZero }));
    assert_eq!(session.environment(), &Environment::from_iter([("a", 4)]));
}

#[test]
fn test_parse_errors_leave_bindings_untouched() {
    let mut session = Session::with_environment(Environment::from_iter([("x", 1)]));

    match session.run("x = 2; x = ;") {
        Err(Error::Parse { path, error, .. }) => {
            assert_eq!(path, PathBuf::from(INPUT_NAME));
            assert_eq!(error.error, ParseErrorType::ExpectedExpression);
        },
        other => panic!("unexpected result {other:?}"),
    }

    assert_eq!(session.environment().get("x"), Some(1));
}

#[test]
fn test_feed() -> Result<(), Error> {
    let mut session = Session::new();

    assert_eq!(session.feed("var x = 3;")?, None);
    assert_eq!(session.feed("x = x * x; var y = x - 1;")?, None);
    assert_eq!(session.feed("x + y")?, Some(17));
    assert_eq!(session.feed("// just a comment")?, None);

    assert_eq!(
        session.feed("w = 1;"),
        Err(Error::Runtime {
            error: RuntimeError::UndeclaredAssignment { name: "w".to_string() }
        })
    );

    Ok(())
}

#[test]
fn test_run_file() -> Result<(), Error> {
    let source = TempSource::new(
        "run",
        "// counts down\nvar n = 3;\nvar steps = 0;\nwhile (n > 0) { n = n - 1; steps = steps + 1; }\n"
    )?;

    let mut session = Session::new();
    session.run_file(&source.path)?;

    assert_eq!(session.into_environment(), Environment::from_iter([("n", 0), ("steps", 3)]));

    Ok(())
}

#[test]
fn test_parse_file_reports_path() -> Result<(), Error> {
    let source = TempSource::new("broken", "var x = 1;\nvar y = x +;\n")?;

    match parse_file(&source.path) {
        Err(error @ Error::Parse { .. }) => {
            let report = error.pretty_string();

            assert!(report.contains("Expected expression"), "{report}");
            assert!(report.contains(&source.path.display().to_string()), "{report}");
        },
        other => panic!("unexpected result {other:?}"),
    }

    Ok(())
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("mini-core-this-file-does-not-exist.mini");

    assert_eq!(
        Session::new().run_file(&path),
        Err(Error::StdIo { err: std::io::ErrorKind::NotFound })
    );
}
