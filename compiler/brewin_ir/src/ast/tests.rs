use pretty_assertions::assert_eq;

use super::*;
use crate::StringInterner;

#[test]
fn binary_symbols_round_trip() {
    let ops = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
        BinaryOp::And,
        BinaryOp::Or,
    ];
    for op in ops {
        assert_eq!(BinaryOp::from_symbol(op.as_symbol()), Some(op));
    }
    assert_eq!(BinaryOp::from_symbol("%"), None);
}

#[test]
fn unary_symbols_match_parser_tags() {
    assert_eq!(UnaryOp::from_symbol("neg"), Some(UnaryOp::Neg));
    assert_eq!(UnaryOp::from_symbol("!"), Some(UnaryOp::Not));
    assert_eq!(UnaryOp::from_symbol("-"), None);
    assert_eq!(UnaryOp::Neg.to_string(), "neg");
}

#[test]
fn only_eq_and_ne_are_equality() {
    assert!(BinaryOp::Eq.is_equality());
    assert!(BinaryOp::NotEq.is_equality());
    assert!(!BinaryOp::Lt.is_equality());
    assert!(!BinaryOp::And.is_equality());
}

#[test]
fn elem_types_follow_parser_tags() {
    let mut interner = StringInterner::new();
    let x = interner.intern("x");

    assert_eq!(Expr::Int(1).elem_type(), "int");
    assert_eq!(Expr::Nil.elem_type(), "nil");
    assert_eq!(Expr::Var(x).elem_type(), "var");
    assert_eq!(
        Expr::binary(BinaryOp::LtEq, Expr::Int(1), Expr::Int(2)).elem_type(),
        "<="
    );
    assert_eq!(Expr::unary(UnaryOp::Neg, Expr::Int(1)).elem_type(), "neg");

    assert_eq!(Stmt::assign(x, Expr::Int(1)).elem_type(), "=");
    assert_eq!(Stmt::VarDef { name: x }.elem_type(), "vardef");
    assert_eq!(Stmt::Return { expr: None }.elem_type(), "return");
}

#[test]
fn function_arity_counts_params() {
    let mut interner = StringInterner::new();
    let foo = interner.intern("foo");
    let a = interner.intern("a");
    let b = interner.intern("b");

    let def = FunctionDef::new(foo, vec![a, b], Vec::new());
    assert_eq!(def.arity(), 2);

    let call = CallExpr::new(foo, vec![Expr::Int(1)]);
    assert_eq!(call.arity(), 1);
}
