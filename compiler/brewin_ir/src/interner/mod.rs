//! String interner for identifier storage.
//!
//! Names are interned while a program is loaded and only looked up after
//! that, so interning takes `&mut self` and lookup hands out `&str` borrowed
//! from the interner. Every string is freed when the interner is dropped.

use rustc_hash::FxHashMap;

use super::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More strings than a `Name` can index.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Strings pre-interned at fixed indices, matching the `Name` constants.
const PRE_INTERNED: [(Name, &str); 5] = [
    (Name::EMPTY, ""),
    (Name::MAIN, "main"),
    (Name::PRINT, "print"),
    (Name::INPUTI, "inputi"),
    (Name::INPUTS, "inputs"),
];

/// Owning string interner.
pub struct StringInterner {
    /// Map from string content to its `Name`.
    map: FxHashMap<Box<str>, Name>,
    /// String contents, indexed by `Name`.
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create an interner holding the empty string, `main` and the built-in
    /// function names.
    pub fn new() -> Self {
        let mut interner = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        for (_, s) in PRE_INTERNED {
            interner.intern(s);
        }
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.map.get(s) {
            return Ok(name);
        }

        let count = self.strings.len();
        let index = u32::try_from(count).map_err(|_| InternError::Overflow { count })?;
        let name = Name::from_raw(index);
        self.strings.push(s.into());
        self.map.insert(s.into(), name);
        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` strings are interned.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if `name` was produced by a different interner.
    pub fn lookup(&self, name: Name) -> &str {
        &self.strings[name.index()]
    }

    /// Look up a string without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Number of interned strings, pre-interned ones included.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether nothing beyond the pre-interned strings has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= PRE_INTERNED.len()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned string names.
///
/// Lets diagnostics code accept any name source without depending on
/// `StringInterner` directly.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}
