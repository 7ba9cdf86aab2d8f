//! Integration tests for mlisp-std crate.

use mlisp_eval::Evaluator;
use mlisp_reader::read_all;
use mlisp_std::{literals, root_environment, stdlib};
use mlisp_value::{Error, Value};
use pretty_assertions::assert_eq;

fn eval_source(source: &str) -> Result<Value, Error> {
    let forms = read_all(source)?;
    Evaluator::new(root_environment()).eval_all(&forms)
}

fn render(source: &str) -> String {
    eval_source(source).unwrap().render()
}

// ============================================================================
// 根环境
// ============================================================================

#[test]
fn test_std_root_contains_every_builtin() {
    let env = root_environment();
    for (name, _) in stdlib().into_iter().chain(literals()) {
        assert!(env.lookup(name).is_ok(), "{name} missing from root");
    }
}

#[test]
fn test_std_builtin_table() {
    let names: Vec<&str> = stdlib().into_iter().map(|(name, _)| name).collect();
    for expected in [
        "+", "-", "*", "/", "**", "=", "!=", "<", "<=", ">", ">=", "not", "list", "list?",
        "empty?", "count", "type?", "prn", "nvector", "matrix", "eye", "zeros", "randmat",
        "randmatf", "transpose",
    ] {
        assert!(names.contains(&expected), "{expected} not in stdlib");
    }
}

// ============================================================================
// 算术
// ============================================================================

#[test]
fn test_std_arithmetic_requires_two_args() {
    assert_eq!(
        eval_source("(+ 1 2 3)").unwrap_err(),
        Error::Type("'+' takes 2 args, but 3 were given".to_string())
    );
    assert!(matches!(eval_source("(- 1)"), Err(Error::Type(_))));
}

#[test]
fn test_std_arithmetic_tower() {
    assert_eq!(render("(/ 6 4)"), "3/2");
    assert_eq!(render("(+ 1/2 1/2)"), "1/1");
    assert_eq!(render("(* 2 0.5)"), "1.0");
    assert_eq!(render("(- 1/2 0.25)"), "0.25");
}

#[test]
fn test_std_arithmetic_type_error() {
    assert!(matches!(eval_source("(+ 1 'a)"), Err(Error::Type(_))));
}

#[test]
fn test_std_overflow() {
    assert!(matches!(
        eval_source("(* 9223372036854775807 2)"),
        Err(Error::OutOfRange(_))
    ));
}

// ============================================================================
// 比较
// ============================================================================

#[test]
fn test_std_comparisons() {
    assert_eq!(eval_source("(< 1 2)").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(<= 2 2.0)").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(> 1/2 0.6)").unwrap(), Value::Bool(false));
    assert_eq!(eval_source("(>= 3 1)").unwrap(), Value::Bool(true));
    assert!(matches!(eval_source("(< 'a 1)"), Err(Error::Type(_))));
}

#[test]
fn test_std_equality() {
    assert_eq!(eval_source("(= 1 1.0)").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(= 1/2 0.5)").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(= '(1 2) [1 2])").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(= 'a 'a)").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(= nil false)").unwrap(), Value::Bool(false));
    assert_eq!(eval_source("(!= 1 2)").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(= + +)").unwrap(), Value::Bool(true));
}

#[test]
fn test_std_not() {
    assert_eq!(eval_source("(not nil)").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(not false)").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(not 0)").unwrap(), Value::Bool(false));
    assert_eq!(eval_source("(not [])").unwrap(), Value::Bool(false));
}

// ============================================================================
// 序列
// ============================================================================

#[test]
fn test_std_list() {
    assert_eq!(render("(list 1 (+ 1 1) 'x)"), "(1 2 x)");
    assert_eq!(render("(list)"), "()");
}

#[test]
fn test_std_list_predicate() {
    assert_eq!(eval_source("(list? (list 1))").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(list? [1])").unwrap(), Value::Bool(false));
    assert_eq!(eval_source("(list? nil)").unwrap(), Value::Bool(false));
}

#[test]
fn test_std_count() {
    assert_eq!(eval_source("(count nil)").unwrap(), Value::Int(0));
    assert_eq!(eval_source("(count '(1 2 3))").unwrap(), Value::Int(3));
    assert_eq!(eval_source("(count [1 2])").unwrap(), Value::Int(2));
    assert_eq!(eval_source("(count {a 1})").unwrap(), Value::Int(1));
    assert_eq!(eval_source("(count (nvector [1 2 3 4]))").unwrap(), Value::Int(4));
    assert_eq!(eval_source("(count (zeros 3 2))").unwrap(), Value::Int(3));
    assert!(matches!(eval_source("(count 5)"), Err(Error::Type(_))));
}

#[test]
fn test_std_empty() {
    assert_eq!(eval_source("(empty? nil)").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(empty? ())").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("(empty? [1])").unwrap(), Value::Bool(false));
    assert!(matches!(eval_source("(empty? 1)"), Err(Error::Type(_))));
}

#[test]
fn test_std_type_names() {
    let cases = [
        ("(type? 1)", "<Integer>"),
        ("(type? 1.5)", "<Float>"),
        ("(type? 1/3)", "<Rational>"),
        ("(type? 'a)", "<Symbol>"),
        ("(type? true)", "<Bool>"),
        ("(type? nil)", "<Nil>"),
        ("(type? '(1))", "<List>"),
        ("(type? [1])", "<Vector>"),
        ("(type? {})", "<HashMap>"),
        ("(type? type?)", "<Function>"),
        ("(type? (fn* [] 1))", "<Function>"),
        ("(type? (nvector [1]))", "<Nvector>"),
        ("(type? (zeros 2 3))", "Matrix(2,3)"),
    ];
    for (source, expected) in cases {
        assert_eq!(render(source), expected, "{source}");
    }
}

#[test]
fn test_std_prn_returns_nil() {
    assert_eq!(eval_source("(prn 1 [2] 'x)").unwrap(), Value::Nil);
    assert_eq!(eval_source("(prn)").unwrap(), Value::Nil);
}
