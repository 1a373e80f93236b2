//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for binary operations. The value set
//! is fixed, so pattern matching is preferred over trait objects.
//!
//! Equality is total: `==` and `!=` accept any pair of values, and values of
//! different types are never equal. Every other operator requires both
//! operands to share a type that supports it.

use brewin_ir::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op, EvalResult,
};
use crate::{Type, Value};

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(op_name))
}

/// Integer division rounding toward negative infinity.
///
/// Returns `None` when `b` is zero or the quotient overflows (`i64::MIN / -1`).
pub fn checked_floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    let r = a.checked_rem(b)?;
    // Truncation rounded toward zero; step down when the exact quotient was negative.
    if r != 0 && ((r < 0) != (b < 0)) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

// Direct Dispatch Function

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Nil, Value::Nil) => eval_nil_binary(op),
        _ => eval_mixed_binary(left, right, op),
    }
}

// Type-Specific Evaluation Functions

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(checked_floor_div(a, b), "division")
            }
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::And | BinaryOp::Or => Err(invalid_binary_op(op, Type::Int)),
    }
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(invalid_binary_op(op, Type::Bool)),
    }
}

fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len().saturating_add(b.len()));
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(joined))
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(invalid_binary_op(op, Type::String)),
    }
}

fn eval_nil_binary(op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(true)),
        BinaryOp::NotEq => Ok(Value::Bool(false)),
        _ => Err(invalid_binary_op(op, Type::Nil)),
    }
}

/// Operands of different types: only equality is defined.
fn eval_mixed_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(false)),
        BinaryOp::NotEq => Ok(Value::Bool(true)),
        _ => Err(binary_type_mismatch(
            op,
            left.value_type(),
            right.value_type(),
        )),
    }
}
