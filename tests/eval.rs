//! Integration tests for mlisp-eval crate.
//!
//! Programs are read, then evaluated in a fresh root environment.

use mlisp_eval::{Evaluator, SpecialForm, apply, eval};
use mlisp_reader::read_all;
use mlisp_std::root_environment;
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
// 基本求值
// ============================================================================

#[test]
fn test_eval_integer_addition() {
    assert_eq!(eval_source("(+ 2 3)").unwrap(), Value::Int(5));
    assert!(matches!(eval_source("(+ 2 3)"), Ok(Value::Int(5))));
}

#[test]
fn test_eval_nested_arithmetic() {
    assert_eq!(eval_source("(* (+ 1 2) (- 10 4))").unwrap(), Value::Int(18));
}

#[test]
fn test_eval_division_by_zero() {
    assert!(matches!(eval_source("(/ 1 0)"), Err(Error::DivisionByZero(_))));
    assert!(matches!(eval_source("(/ 1.0 0.0)"), Err(Error::DivisionByZero(_))));
}

#[test]
fn test_eval_literals() {
    assert_eq!(eval_source("true").unwrap(), Value::Bool(true));
    assert_eq!(eval_source("false").unwrap(), Value::Bool(false));
    assert_eq!(eval_source("nil").unwrap(), Value::Nil);
    assert_eq!(eval_source(";").unwrap(), Value::symbol(";"));
}

#[test]
fn test_eval_unbound_symbol() {
    let err = eval_source("nope").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(err.message().contains("nope"));
}

#[test]
fn test_eval_empty_list_is_itself() {
    assert_eq!(render("()"), "()");
}

#[test]
fn test_eval_vector_elements() {
    assert_eq!(render("[1 (+ 1 1) [(* 3 1)]]"), "[1 2 [3]]");
}

#[test]
fn test_eval_map_values() {
    assert_eq!(render("{a (+ 1 2)}"), "{a 3}");
}

// ============================================================================
// def! 与 let*
// ============================================================================

#[test]
fn test_eval_def_returns_value() {
    assert_eq!(eval_source("(def! x (+ 1 2))").unwrap(), Value::Int(3));
    assert_eq!(eval_source("(def! x 3) (* x x)").unwrap(), Value::Int(9));
}

#[test]
fn test_eval_def_can_shadow_builtin() {
    assert_eq!(eval_source("(def! + -) (+ 5 3)").unwrap(), Value::Int(2));
}

#[test]
fn test_eval_let_sequential() {
    assert_eq!(
        eval_source("(let* [x 1 y (+ x 1)] (+ x y))").unwrap(),
        Value::Int(3)
    );
}

#[test]
fn test_eval_let_list_bindings() {
    assert_eq!(eval_source("(let* (a 2 b 5) (* a b))").unwrap(), Value::Int(10));
}

#[test]
fn test_eval_let_shadows_outer() {
    assert_eq!(
        eval_source("(def! x 10) (let* [x 1] x)").unwrap(),
        Value::Int(1)
    );
    assert_eq!(
        eval_source("(def! x 10) (let* [x 1] x) x").unwrap(),
        Value::Int(10)
    );
}

#[test]
fn test_eval_def_inside_let_stays_local() {
    assert!(matches!(
        eval_source("(let* [] (def! inner 1)) inner"),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_eval_let_odd_bindings() {
    assert!(matches!(eval_source("(let* [x 1 y] x)"), Err(Error::Syntax(_))));
    assert!(matches!(eval_source("(let* [x 1])"), Err(Error::Syntax(_))));
}

// ============================================================================
// do 与 if
// ============================================================================

#[test]
fn test_eval_do() {
    assert_eq!(eval_source("(do 1 2 3)").unwrap(), Value::Int(3));
    assert_eq!(eval_source("(do)").unwrap(), Value::Nil);
    assert_eq!(eval_source("(do (def! a 4) (+ a 1))").unwrap(), Value::Int(5));
}

#[test]
fn test_eval_if() {
    assert_eq!(eval_source("(if false 1 2)").unwrap(), Value::Int(2));
    assert_eq!(eval_source("(if false 1)").unwrap(), Value::Nil);
    assert_eq!(eval_source("(if nil 1 2)").unwrap(), Value::Int(2));
    assert_eq!(eval_source("(if true 1 2)").unwrap(), Value::Int(1));
}

#[test]
fn test_eval_if_truthiness() {
    assert_eq!(eval_source("(if 0 1 2)").unwrap(), Value::Int(1));
    assert_eq!(eval_source("(if 0.0 1 2)").unwrap(), Value::Int(1));
    assert_eq!(eval_source("(if () 1 2)").unwrap(), Value::Int(1));
}

#[test]
fn test_eval_if_only_evaluates_taken_branch() {
    assert_eq!(eval_source("(if true 1 (undefined))").unwrap(), Value::Int(1));
}

#[test]
fn test_eval_if_malformed() {
    assert!(matches!(eval_source("(if true)"), Err(Error::Syntax(_))));
    assert!(matches!(eval_source("(if 1 2 3 4)"), Err(Error::Syntax(_))));
}

// ============================================================================
// fn* 与闭包
// ============================================================================

#[test]
fn test_eval_fn_application() {
    assert_eq!(eval_source("((fn* [a b] (+ a b)) 1 2)").unwrap(), Value::Int(3));
}

#[test]
fn test_eval_fn_arity_mismatch() {
    assert!(matches!(
        eval_source("((fn* [a b] (+ a b)) 1 2 3)"),
        Err(Error::Type(_))
    ));
    assert!(matches!(
        eval_source("((fn* [a b] (+ a b)) 1)"),
        Err(Error::Type(_))
    ));
}

#[test]
fn test_eval_closure_captures_defining_env() {
    let source = "
        (def! make-adder (fn* [n] (fn* [x] (+ x n))))
        (def! add5 (make-adder 5))
        (add5 10)
    ";
    assert_eq!(eval_source(source).unwrap(), Value::Int(15));
}

#[test]
fn test_eval_closure_outlives_let() {
    let source = "
        (def! f (let* [secret 42] (fn* [] secret)))
        (f)
    ";
    assert_eq!(eval_source(source).unwrap(), Value::Int(42));
}

#[test]
fn test_eval_recursion() {
    let source = "
        (def! fact (fn* [n] (if (<= n 1) 1 (* n (fact (- n 1))))))
        (fact 10)
    ";
    assert_eq!(eval_source(source).unwrap(), Value::Int(3628800));
}

#[test]
fn test_eval_closure_renders_as_function() {
    assert_eq!(render("(fn* [x] x)"), "#<Function>");
    assert_eq!(render("+"), "#<Function:+>");
}

#[test]
fn test_eval_fn_params_must_be_symbols() {
    assert!(matches!(eval_source("(fn* [1] 1)"), Err(Error::Syntax(_))));
}

// ============================================================================
// quote 与调用
// ============================================================================

#[test]
fn test_eval_quote() {
    assert_eq!(render("'(a b c)"), "(a b c)");
    assert_eq!(render("(quote undefined-symbol)"), "undefined-symbol");
}

#[test]
fn test_eval_quasiquote_is_not_a_special_form() {
    assert!(matches!(eval_source("`x"), Err(Error::NotFound(_))));
}

#[test]
fn test_eval_apply_non_function() {
    assert_eq!(
        eval_source("(1 2 3)").unwrap_err(),
        Error::NotFound("<function> 1()".to_string())
    );
}

#[test]
fn test_eval_head_is_evaluated() {
    assert_eq!(eval_source("((if true + -) 4 1)").unwrap(), Value::Int(5));
}

#[test]
fn test_eval_arguments_left_to_right() {
    let source = "
        (def! log (list))
        (list (def! log 1) (def! log 2))
        log
    ";
    assert_eq!(eval_source(source).unwrap(), Value::Int(2));
}

#[test]
fn test_eval_and_apply_entry_points() {
    let env = root_environment();
    let plus = eval(&Value::symbol("+"), &env).unwrap();
    assert_eq!(apply(&plus, &[Value::Int(1), Value::Int(2)], &env).unwrap(), Value::Int(3));
}

#[test]
fn test_special_form_names() {
    for name in ["def!", "let*", "do", "if", "fn*", "quote"] {
        let form = SpecialForm::from_symbol(name).unwrap();
        assert_eq!(form.name(), name);
    }
    assert_eq!(SpecialForm::from_symbol("defn"), None);
}
