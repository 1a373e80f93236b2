//! Unary operator implementations for the evaluator.

use brewin_ir::UnaryOp;

use crate::errors::{integer_overflow, invalid_unary_op, EvalResult};
use crate::Value;

/// Evaluate a unary operation on an already-evaluated operand.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        _ => Err(invalid_unary_op(op, value.value_type())),
    }
}
