//! The three per-type symbol tables.
//!
//! One aggregate owned by the interpreter instance and passed explicitly to
//! reader/evaluator operations — never captured as ambient state. Names are
//! unique within a table but the same name may exist in all three tables
//! simultaneously without collision. Redefinition is last-write-wins; no
//! deletion exists, so a variable lives until the instance is discarded.

use rustc_hash::FxHashMap;

/// The boolean, number, and string tables of one interpreter instance.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    booleans: FxHashMap<String, bool>,
    numbers: FxHashMap<String, i64>,
    strings: FxHashMap<String, String>,
}

impl Bindings {
    /// Create an empty set of tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or overwrite a boolean variable.
    #[inline]
    pub fn define_boolean(&mut self, name: String, value: bool) {
        self.booleans.insert(name, value);
    }

    /// Look up a boolean variable.
    #[inline]
    pub fn lookup_boolean(&self, name: &str) -> Option<bool> {
        self.booleans.get(name).copied()
    }

    /// Define or overwrite a number variable.
    #[inline]
    pub fn define_number(&mut self, name: String, value: i64) {
        self.numbers.insert(name, value);
    }

    /// Look up a number variable.
    #[inline]
    pub fn lookup_number(&self, name: &str) -> Option<i64> {
        self.numbers.get(name).copied()
    }

    /// Define or overwrite a string variable.
    #[inline]
    pub fn define_string(&mut self, name: String, value: String) {
        self.strings.insert(name, value);
    }

    /// Look up a string variable.
    #[inline]
    pub fn lookup_string(&self, name: &str) -> Option<&str> {
        self.strings.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn define_then_lookup() {
        let mut bindings = Bindings::new();
        bindings.define_number("x".to_string(), 42);
        assert_eq!(bindings.lookup_number("x"), Some(42));
        assert_eq!(bindings.lookup_number("y"), None);
    }

    #[test]
    fn redefinition_is_last_write_wins() {
        let mut bindings = Bindings::new();
        bindings.define_string("s".to_string(), "first".to_string());
        bindings.define_string("s".to_string(), "second".to_string());
        assert_eq!(bindings.lookup_string("s"), Some("second"));
    }

    #[test]
    fn same_name_lives_in_all_three_tables() {
        let mut bindings = Bindings::new();
        bindings.define_boolean("x".to_string(), false);
        bindings.define_number("x".to_string(), 1);
        bindings.define_string("x".to_string(), "a".to_string());

        assert_eq!(bindings.lookup_boolean("x"), Some(false));
        assert_eq!(bindings.lookup_number("x"), Some(1));
        assert_eq!(bindings.lookup_string("x"), Some("a"));
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut bindings = Bindings::new();
        bindings.define_number("count".to_string(), 1);
        assert_eq!(bindings.lookup_number("Count"), None);
    }
}
