//! Evaluation errors.
//!
//! Every error the evaluator raises is built by one of the `#[cold]` factory
//! functions below, which keeps message wording in one place. All errors are
//! fatal: they propagate with `?` to [`Interpreter::run`](crate::Interpreter::run)
//! and no further statement executes.
//!
//! # Categories
//!
//! Each [`EvalErrorKind`] belongs to exactly one [`ErrorType`]:
//! - `Name`: unresolved variable or function, arity mismatch, duplicate declaration
//! - `Type`: operator/type mismatch, non-bool condition, malformed `for` clause
//! - `Fault`: arithmetic the host cannot represent (division by zero, overflow)

use std::fmt;

use brewin_ir::{BinaryOp, UnaryOp};

use crate::{Type, Value};

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Error category reported to the host.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorType {
    Name,
    Type,
    Fault,
}

impl ErrorType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorType::Name => "NAME_ERROR",
            ErrorType::Type => "TYPE_ERROR",
            ErrorType::Fault => "FAULT_ERROR",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed error category with structured payloads.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Names
    #[error("variable `{name}` is not defined")]
    UndefinedVariable { name: String },
    #[error("cannot assign to undeclared variable `{name}`")]
    UndeclaredAssignment { name: String },
    #[error("duplicate definition for variable `{name}`")]
    DuplicateDefinition { name: String },
    #[error("function `{name}` is not defined")]
    UndefinedFunction { name: String },
    #[error("no overload of `{name}` takes {got} argument(s)")]
    ArityMismatch { name: String, got: usize },
    #[error("`{name}` takes at most one argument, got {got}")]
    TooManyInputArgs { name: String, got: usize },
    #[error("no `main` function taking zero arguments")]
    MissingMain,

    // Types
    #[error("incompatible types for `{op}`: {left} and {right}")]
    BinaryTypeMismatch { op: BinaryOp, left: Type, right: Type },
    #[error("operator `{op}` cannot be applied to {type_name}")]
    InvalidBinaryOp { op: BinaryOp, type_name: Type },
    #[error("unary `{op}` cannot be applied to {type_name}")]
    InvalidUnaryOp { op: UnaryOp, type_name: Type },
    #[error("{construct} condition must evaluate to bool, got {got}")]
    NonBoolCondition { construct: &'static str, got: Type },
    #[error("for-loop {clause} must be an assignment, got `{got}`")]
    ForClauseNotAssignment {
        clause: &'static str,
        got: &'static str,
    },
    #[error("input `{input}` is not an integer")]
    InvalidIntInput { input: String },

    // Faults
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
}

impl EvalErrorKind {
    /// The category the host reports for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            Self::UndefinedVariable { .. }
            | Self::UndeclaredAssignment { .. }
            | Self::DuplicateDefinition { .. }
            | Self::UndefinedFunction { .. }
            | Self::ArityMismatch { .. }
            | Self::TooManyInputArgs { .. }
            | Self::MissingMain => ErrorType::Name,

            Self::BinaryTypeMismatch { .. }
            | Self::InvalidBinaryOp { .. }
            | Self::InvalidUnaryOp { .. }
            | Self::NonBoolCondition { .. }
            | Self::ForClauseNotAssignment { .. }
            | Self::InvalidIntInput { .. } => ErrorType::Type,

            Self::DivisionByZero | Self::IntegerOverflow { .. } => ErrorType::Fault,
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    #[inline]
    pub fn error_type(&self) -> ErrorType {
        self.kind.error_type()
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Name Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn undeclared_assignment(name: &str) -> EvalError {
    EvalErrorKind::UndeclaredAssignment {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn duplicate_definition(name: &str) -> EvalError {
    EvalErrorKind::DuplicateDefinition {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn arity_mismatch(name: &str, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        got,
    }
    .into()
}

#[cold]
pub fn too_many_input_args(name: &str, got: usize) -> EvalError {
    EvalErrorKind::TooManyInputArgs {
        name: name.to_string(),
        got,
    }
    .into()
}

#[cold]
pub fn missing_main() -> EvalError {
    EvalErrorKind::MissingMain.into()
}

// Type Errors

/// Operands of a non-equality binary operator have different types.
#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: Type, right: Type) -> EvalError {
    EvalErrorKind::BinaryTypeMismatch { op, left, right }.into()
}

/// Both operands share a type that does not support the operator.
#[cold]
pub fn invalid_binary_op(op: BinaryOp, type_name: Type) -> EvalError {
    EvalErrorKind::InvalidBinaryOp { op, type_name }.into()
}

#[cold]
pub fn invalid_unary_op(op: UnaryOp, type_name: Type) -> EvalError {
    EvalErrorKind::InvalidUnaryOp { op, type_name }.into()
}

/// `construct` is `"if"` or `"for"`.
#[cold]
pub fn non_bool_condition(construct: &'static str, got: Type) -> EvalError {
    EvalErrorKind::NonBoolCondition { construct, got }.into()
}

/// `clause` is `"initializer"` or `"update"`; `got` is the offending node's `elem_type`.
#[cold]
pub fn for_clause_not_assignment(clause: &'static str, got: &'static str) -> EvalError {
    EvalErrorKind::ForClauseNotAssignment { clause, got }.into()
}

#[cold]
pub fn invalid_int_input(input: &str) -> EvalError {
    EvalErrorKind::InvalidIntInput {
        input: input.to_string(),
    }
    .into()
}

// Faults

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}
