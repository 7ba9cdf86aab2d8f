//! Integration tests for the numeric vector and matrix builtins.

use mlisp_eval::Evaluator;
use mlisp_reader::read_all;
use mlisp_std::root_environment;
use mlisp_value::{Error, Matrix, Value};
use pretty_assertions::assert_eq;

fn eval_source(source: &str) -> Result<Value, Error> {
    let forms = read_all(source)?;
    Evaluator::new(root_environment()).eval_all(&forms)
}

fn matrix(source: &str) -> Matrix {
    match eval_source(source).unwrap() {
        Value::Matrix(m) => (*m).clone(),
        other => panic!("expected a matrix, got {other}"),
    }
}

fn assert_value_error(source: &str) {
    assert!(
        matches!(eval_source(source), Err(Error::Value(_))),
        "{source} should fail with a value error"
    );
}

// ============================================================================
// 构造
// ============================================================================

#[test]
fn test_matrix_from_rows() {
    let m = matrix("(matrix [1 2 ; 3 4])");
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.row(1), &[3.0, 4.0]);
}

#[test]
fn test_matrix_rows_from_expressions() {
    let m = matrix("(def! a 5) (matrix [a (+ a 1) ; 1/2 0.25])");
    assert_eq!(m.row(0), &[5.0, 6.0]);
    assert_eq!(m.row(1), &[0.5, 0.25]);
}

#[test]
fn test_matrix_ragged_rows() {
    assert_value_error("(matrix [1 2 ; 3])");
    assert_value_error("(matrix [1 2 ;])");
}

#[test]
fn test_matrix_non_numeric_element() {
    assert!(matches!(eval_source("(matrix ['a 1])"), Err(Error::Type(_))));
    assert!(matches!(eval_source("(matrix 1)"), Err(Error::Type(_))));
}

#[test]
fn test_matrix_single_row_and_empty() {
    assert_eq!(matrix("(matrix [1 2 3])").shape(), (1, 3));
    assert_eq!(matrix("(matrix [])").shape(), (0, 0));
}

#[test]
fn test_matrix_render() {
    let rendered = eval_source("(matrix [1 2 ; 3 4])").unwrap().render();
    assert_eq!(rendered, "[1 2\n 3 4]");
    let rendered = eval_source("(matrix [1 -20 ; 300 4])").unwrap().render();
    assert_eq!(rendered, "[  1 -20\n 300   4]");
}

#[test]
fn test_nvector() {
    let v = eval_source("(nvector [1 2.5 1/2])").unwrap();
    assert_eq!(v, Value::num_vector(vec![1.0, 2.5, 0.5]));
    assert_eq!(v.render(), "[1 2.5 0.5]");
    assert!(matches!(eval_source("(nvector [nil])"), Err(Error::Type(_))));
}

// ============================================================================
// eye / zeros / transpose
// ============================================================================

#[test]
fn test_eye() {
    let m = matrix("(eye 3)");
    assert_eq!(m.shape(), (3, 3));
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(m.get(i, j), Some(if i == j { 1.0 } else { 0.0 }));
        }
    }
    assert_eq!(eval_source("(= (eye 3) (eye 3))").unwrap(), Value::Bool(true));
}

#[test]
fn test_eye_requires_integer() {
    assert!(matches!(eval_source("(eye 2.0)"), Err(Error::Type(_))));
    assert_value_error("(eye -1)");
}

#[test]
fn test_zeros() {
    assert_eq!(matrix("(zeros 2)").shape(), (2, 2));
    let m = matrix("(zeros 2 3)");
    assert_eq!(m.shape(), (2, 3));
    assert!(m.row_iter().flatten().all(|x| *x == 0.0));
    assert!(matches!(eval_source("(zeros)"), Err(Error::Type(_))));
}

#[test]
fn test_transpose() {
    let m = matrix("(transpose (matrix [1 2 3 ; 4 5 6]))");
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.row(0), &[1.0, 4.0]);
    assert!(matches!(eval_source("(transpose [1])"), Err(Error::Type(_))));
}

#[test]
fn test_oversized_dimensions() {
    for source in [
        "(zeros 4294967296 4294967296)",
        "(eye 4294967296)",
        "(zeros 1 4294967296)",
        "(randmat 100000 100000)",
        "(randmat 4294967296 4294967296 0 1)",
        "(randmatf 1 4294967296)",
        "(randmatf 4294967296)",
    ] {
        assert!(
            matches!(eval_source(source), Err(Error::OutOfRange(_))),
            "{source} should fail with out of range"
        );
    }
}

#[test]
fn test_empty_dimension_is_allowed() {
    assert_eq!(matrix("(zeros 0 3)").shape(), (0, 3));
    assert_eq!(matrix("(eye 0)").shape(), (0, 0));
}

// ============================================================================
// 运算
// ============================================================================

#[test]
fn test_dot_identity() {
    let source = "(= (** (matrix [1 2 ; 3 4]) (matrix [1 0 ; 0 1])) (matrix [1 2 ; 3 4]))";
    assert_eq!(eval_source(source).unwrap(), Value::Bool(true));
}

#[test]
fn test_dot_shapes() {
    let m = matrix("(** (matrix [1 2 3 ; 4 5 6]) (transpose (matrix [1 2 3 ; 4 5 6])))");
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.row(0), &[14.0, 32.0]);
    assert_value_error("(** (zeros 2 3) (zeros 2 3))");
}

#[test]
fn test_dot_nvectors() {
    assert_eq!(
        eval_source("(** (nvector [1 2 3]) (nvector [4 5 6]))").unwrap(),
        Value::Float(32.0)
    );
    assert!(matches!(eval_source("(** 1 2)"), Err(Error::Type(_))));
}

#[test]
fn test_matrix_arithmetic() {
    let m = matrix("(+ (eye 2) (eye 2))");
    assert_eq!(m.row(0), &[2.0, 0.0]);
    let m = matrix("(* (matrix [1 2 ; 3 4]) 10)");
    assert_eq!(m.row(1), &[30.0, 40.0]);
    assert_value_error("(- (eye 2) (eye 3))");
    assert!(matches!(eval_source("(/ (eye 2) 0)"), Err(Error::DivisionByZero(_))));
}

#[test]
fn test_scalar_on_the_left_is_a_type_error() {
    assert!(matches!(eval_source("(* 2 (eye 2))"), Err(Error::Type(_))));
}

// ============================================================================
// 随机矩阵
// ============================================================================

#[test]
fn test_randmat_shape_and_range() {
    let m = matrix("(randmat 3 4 -5 5)");
    assert_eq!(m.shape(), (3, 4));
    for x in m.row_iter().flatten() {
        assert!((-5.0..5.0).contains(x), "{x} out of range");
        assert_eq!(x.fract(), 0.0);
    }
}

#[test]
fn test_randmat_defaults() {
    let m = matrix("(randmat 2)");
    assert_eq!(m.shape(), (2, 2));
    assert!(m.row_iter().flatten().all(|x| *x >= 0.0 && *x < 2147483647.0));
}

#[test]
fn test_randmat_equal_bounds() {
    let m = matrix("(randmat 2 2 7 7)");
    assert!(m.row_iter().flatten().all(|x| *x == 7.0));
}

#[test]
fn test_randmat_bad_arguments() {
    assert_value_error("(randmat 2 2 5 1)");
    assert_value_error("(randmat -2)");
    assert!(matches!(eval_source("(randmat 2 2 0.5)"), Err(Error::Type(_))));
    assert!(matches!(eval_source("(randmat)"), Err(Error::Type(_))));
    assert!(matches!(eval_source("(randmat 1 1 0 1 2)"), Err(Error::Type(_))));
}

#[test]
fn test_randmatf_shape_and_range() {
    let m = matrix("(randmatf 5 2)");
    assert_eq!(m.shape(), (5, 2));
    assert!(m.row_iter().flatten().all(|x| (0.0..1.0).contains(x)));

    let m = matrix("(randmatf 2 3 -1/2 1/2)");
    assert!(m.row_iter().flatten().all(|x| (-0.5..0.5).contains(x)));
    assert_value_error("(randmatf 2 2 1.0 0.0)");
}
