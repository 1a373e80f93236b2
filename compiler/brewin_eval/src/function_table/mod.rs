//! Function table: user definitions keyed by `(name, arity)`.
//!
//! Built once per run from the program's definitions and read-only
//! afterwards. Overloading is by parameter count only.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use brewin_ir::{FunctionDef, Name, Program, StringLookup};

/// Why [`FunctionTable::resolve`] found nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No definition uses this name at all.
    UnknownName,
    /// The name exists, but not with this many parameters.
    NoMatchingArity,
}

/// Lookup from `(name, arity)` to the definition, borrowed from the program.
pub struct FunctionTable<'a> {
    by_signature: FxHashMap<(Name, usize), &'a FunctionDef>,
    names: FxHashSet<Name>,
}

impl<'a> FunctionTable<'a> {
    /// Index every definition in `program`.
    ///
    /// A later definition with the same name and arity replaces an earlier
    /// one.
    pub fn from_program(program: &'a Program, interner: &dyn StringLookup) -> Self {
        let mut by_signature =
            FxHashMap::with_capacity_and_hasher(program.functions.len(), Default::default());
        let mut names = FxHashSet::default();

        for def in &program.functions {
            if by_signature.insert((def.name, def.arity()), def).is_some() {
                warn!(
                    function = interner.lookup(def.name),
                    arity = def.arity(),
                    "duplicate function definition; the later one wins"
                );
            }
            names.insert(def.name);
        }

        debug!(
            definitions = by_signature.len(),
            names = names.len(),
            "built function table"
        );
        FunctionTable {
            by_signature,
            names,
        }
    }

    /// Find the definition called as `name` with `arity` arguments.
    pub fn resolve(&self, name: Name, arity: usize) -> Result<&'a FunctionDef, LookupError> {
        match self.by_signature.get(&(name, arity)) {
            Some(def) => Ok(def),
            None if self.names.contains(&name) => Err(LookupError::NoMatchingArity),
            None => Err(LookupError::UnknownName),
        }
    }

    /// Arities defined for `name`, ascending.
    pub fn overloads(&self, name: Name) -> Vec<usize> {
        let mut arities: Vec<usize> = self
            .by_signature
            .keys()
            .filter(|(n, _)| *n == name)
            .map(|(_, arity)| *arity)
            .collect();
        arities.sort_unstable();
        arities
    }
}

#[cfg(test)]
mod tests;
