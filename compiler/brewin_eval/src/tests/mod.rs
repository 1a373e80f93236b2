//! Crate-level tests that span several modules.

mod operators_tests;
