//! Tests for binary operator dispatch.

use brewin_ir::BinaryOp;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::operators::{checked_floor_div, evaluate_binary};
use crate::{ErrorType, EvalErrorKind, Type, Value};

fn eval(left: Value, op: BinaryOp, right: Value) -> Result<Value, crate::EvalError> {
    evaluate_binary(&left, &right, op)
}

fn error_type(left: Value, op: BinaryOp, right: Value) -> Option<ErrorType> {
    eval(left, op, right).err().map(|e| e.error_type())
}

#[test]
fn test_int_arithmetic() {
    assert_eq!(eval(Value::int(2), BinaryOp::Add, Value::int(3)), Ok(Value::int(5)));
    assert_eq!(eval(Value::int(5), BinaryOp::Sub, Value::int(8)), Ok(Value::int(-3)));
    assert_eq!(eval(Value::int(4), BinaryOp::Mul, Value::int(-3)), Ok(Value::int(-12)));
    assert_eq!(eval(Value::int(7), BinaryOp::Div, Value::int(2)), Ok(Value::int(3)));
}

#[test]
fn test_int_division_floors() {
    assert_eq!(eval(Value::int(-7), BinaryOp::Div, Value::int(2)), Ok(Value::int(-4)));
    assert_eq!(eval(Value::int(7), BinaryOp::Div, Value::int(-2)), Ok(Value::int(-4)));
    assert_eq!(eval(Value::int(-7), BinaryOp::Div, Value::int(-2)), Ok(Value::int(3)));
    assert_eq!(eval(Value::int(-8), BinaryOp::Div, Value::int(2)), Ok(Value::int(-4)));
    assert_eq!(eval(Value::int(0), BinaryOp::Div, Value::int(-5)), Ok(Value::int(0)));
}

#[test]
fn test_int_faults() {
    assert_eq!(
        eval(Value::int(1), BinaryOp::Div, Value::int(0)).map_err(|e| e.kind),
        Err(EvalErrorKind::DivisionByZero)
    );
    assert_eq!(
        error_type(Value::int(i64::MIN), BinaryOp::Div, Value::int(-1)),
        Some(ErrorType::Fault)
    );
    assert_eq!(
        error_type(Value::int(i64::MAX), BinaryOp::Add, Value::int(1)),
        Some(ErrorType::Fault)
    );
    assert_eq!(
        error_type(Value::int(i64::MIN), BinaryOp::Sub, Value::int(1)),
        Some(ErrorType::Fault)
    );
    assert_eq!(
        error_type(Value::int(i64::MAX), BinaryOp::Mul, Value::int(2)),
        Some(ErrorType::Fault)
    );
}

#[test]
fn test_int_comparisons() {
    assert_eq!(eval(Value::int(1), BinaryOp::Lt, Value::int(2)), Ok(Value::Bool(true)));
    assert_eq!(eval(Value::int(2), BinaryOp::LtEq, Value::int(2)), Ok(Value::Bool(true)));
    assert_eq!(eval(Value::int(1), BinaryOp::Gt, Value::int(2)), Ok(Value::Bool(false)));
    assert_eq!(eval(Value::int(3), BinaryOp::GtEq, Value::int(2)), Ok(Value::Bool(true)));
    assert_eq!(eval(Value::int(3), BinaryOp::Eq, Value::int(3)), Ok(Value::Bool(true)));
    assert_eq!(eval(Value::int(3), BinaryOp::NotEq, Value::int(3)), Ok(Value::Bool(false)));
}

#[test]
fn test_int_rejects_logical_ops() {
    assert_eq!(
        eval(Value::int(1), BinaryOp::And, Value::int(1)).map_err(|e| e.kind),
        Err(EvalErrorKind::InvalidBinaryOp {
            op: BinaryOp::And,
            type_name: Type::Int,
        })
    );
}

#[test]
fn test_bool_operations() {
    let t = || Value::Bool(true);
    let f = || Value::Bool(false);
    assert_eq!(eval(t(), BinaryOp::And, f()), Ok(f()));
    assert_eq!(eval(t(), BinaryOp::Or, f()), Ok(t()));
    assert_eq!(eval(f(), BinaryOp::Or, f()), Ok(f()));
    assert_eq!(eval(t(), BinaryOp::Eq, t()), Ok(t()));
    assert_eq!(eval(t(), BinaryOp::NotEq, f()), Ok(t()));
    assert_eq!(error_type(t(), BinaryOp::Add, t()), Some(ErrorType::Type));
    assert_eq!(error_type(t(), BinaryOp::Lt, f()), Some(ErrorType::Type));
}

#[test]
fn test_string_operations() {
    assert_eq!(
        eval(Value::string("foo"), BinaryOp::Add, Value::string("bar")),
        Ok(Value::string("foobar"))
    );
    assert_eq!(
        eval(Value::string("a"), BinaryOp::Eq, Value::string("a")),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        eval(Value::string("a"), BinaryOp::NotEq, Value::string("b")),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        error_type(Value::string("a"), BinaryOp::Lt, Value::string("b")),
        Some(ErrorType::Type)
    );
    assert_eq!(
        error_type(Value::string("a"), BinaryOp::Sub, Value::string("b")),
        Some(ErrorType::Type)
    );
}

#[test]
fn test_nil_operations() {
    assert_eq!(eval(Value::Nil, BinaryOp::Eq, Value::Nil), Ok(Value::Bool(true)));
    assert_eq!(eval(Value::Nil, BinaryOp::NotEq, Value::Nil), Ok(Value::Bool(false)));
    assert_eq!(error_type(Value::Nil, BinaryOp::Add, Value::Nil), Some(ErrorType::Type));
}

#[test]
fn test_mixed_types() {
    assert_eq!(
        eval(Value::int(1), BinaryOp::Eq, Value::string("1")),
        Ok(Value::Bool(false))
    );
    assert_eq!(
        eval(Value::Nil, BinaryOp::NotEq, Value::int(0)),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        eval(Value::int(1), BinaryOp::Add, Value::string("1")).map_err(|e| e.kind),
        Err(EvalErrorKind::BinaryTypeMismatch {
            op: BinaryOp::Add,
            left: Type::Int,
            right: Type::String,
        })
    );
    assert_eq!(
        error_type(Value::Bool(true), BinaryOp::And, Value::int(1)),
        Some(ErrorType::Type)
    );
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{0,8}".prop_map(Value::Str),
        Just(Value::Nil),
    ]
}

proptest! {
    #[test]
    fn mismatched_types_are_never_equal(left in any_value(), right in any_value()) {
        prop_assume!(left.value_type() != right.value_type());
        prop_assert_eq!(eval(left.clone(), BinaryOp::Eq, right.clone()), Ok(Value::Bool(false)));
        prop_assert_eq!(eval(left, BinaryOp::NotEq, right), Ok(Value::Bool(true)));
    }

    #[test]
    fn mismatched_types_reject_other_ops(left in any_value(), right in any_value()) {
        prop_assume!(left.value_type() != right.value_type());
        for op in [BinaryOp::Add, BinaryOp::Div, BinaryOp::Lt, BinaryOp::Or] {
            prop_assert_eq!(error_type(left.clone(), op, right.clone()), Some(ErrorType::Type));
        }
    }

    #[test]
    fn equality_is_reflexive(value in any_value()) {
        prop_assert_eq!(eval(value.clone(), BinaryOp::Eq, value), Ok(Value::Bool(true)));
    }

    #[test]
    fn floor_division_law(a in -1_000_000i64..1_000_000, b in -1_000i64..1_000) {
        prop_assume!(b != 0);
        let q = checked_floor_div(a, b);
        prop_assert!(q.is_some());
        let q = q.unwrap_or_default();
        // a = q*b + r with r carrying the divisor's sign (or zero) and |r| < |b|
        let r = a.checked_sub(q.checked_mul(b).unwrap_or_default()).unwrap_or_default();
        prop_assert!(r == 0 || (r < 0) == (b < 0));
        prop_assert!(r.unsigned_abs() < b.unsigned_abs());
    }
}
