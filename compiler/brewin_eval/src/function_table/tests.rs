use super::*;
use brewin_ir::{Expr, Stmt, StringInterner};
use pretty_assertions::assert_eq;

fn def(name: Name, params: &[Name], body: Vec<Stmt>) -> FunctionDef {
    FunctionDef::new(name, params.to_vec(), body)
}

#[test]
fn resolves_by_name_and_arity() {
    let mut interner = StringInterner::new();
    let foo = interner.intern("foo");
    let a = interner.intern("a");
    let b = interner.intern("b");

    let program = Program::new(vec![def(foo, &[], vec![]), def(foo, &[a, b], vec![])]);
    let table = FunctionTable::from_program(&program, &interner);

    assert_eq!(table.resolve(foo, 0).map(FunctionDef::arity), Ok(0));
    assert_eq!(table.resolve(foo, 2).map(FunctionDef::arity), Ok(2));
    assert_eq!(table.overloads(foo), vec![0, 2]);
}

#[test]
fn distinguishes_unknown_name_from_arity_mismatch() {
    let mut interner = StringInterner::new();
    let foo = interner.intern("foo");
    let bar = interner.intern("bar");
    let a = interner.intern("a");

    let program = Program::new(vec![def(foo, &[a], vec![])]);
    let table = FunctionTable::from_program(&program, &interner);

    assert_eq!(
        table.resolve(foo, 2).err(),
        Some(LookupError::NoMatchingArity)
    );
    assert_eq!(table.resolve(bar, 0).err(), Some(LookupError::UnknownName));
    assert_eq!(table.overloads(bar), Vec::<usize>::new());
}

#[test]
fn later_duplicate_wins() {
    let interner = StringInterner::new();

    let first = def(Name::MAIN, &[], vec![Stmt::call(Name::PRINT, vec![Expr::Int(1)])]);
    let second = def(Name::MAIN, &[], vec![Stmt::call(Name::PRINT, vec![Expr::Int(2)])]);
    let program = Program::new(vec![first, second.clone()]);
    let table = FunctionTable::from_program(&program, &interner);

    assert_eq!(table.overloads(Name::MAIN), vec![0]);
    assert_eq!(table.resolve(Name::MAIN, 0), Ok(&second));
}

#[test]
fn empty_program() {
    let interner = StringInterner::new();
    let program = Program::default();
    let table = FunctionTable::from_program(&program, &interner);

    assert_eq!(
        table.resolve(Name::MAIN, 0).err(),
        Some(LookupError::UnknownName)
    );
}
