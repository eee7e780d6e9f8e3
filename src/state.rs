use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::RwLock;

use ahash::{HashMap, HashMapExt};
use append_only_vec::AppendOnlyVec;
use once_cell::sync::Lazy;
use smartstring::alias::String;

static STATE: Lazy<RwLock<State>> = Lazy::new(|| RwLock::new(State::new()));
static ID_TO_STR: AppendOnlyVec<String> = AppendOnlyVec::<String>::new();

/// An interned variable name. Symbols are cheap to copy and compare;
/// the name itself lives in a global append-only table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: u32,
}

impl Symbol {
    /// Get the symbol for `name`, registering it if needed.
    pub fn new<S: AsRef<str>>(name: S) -> Symbol {
        State::get_symbol(name)
    }

    /// Get the name of the symbol.
    pub fn name(&self) -> &'static str {
        State::get_name(*self)
    }

    pub(crate) fn get_id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Symbols order lexicographically by name, so that renderings that sort
/// factors by symbol are stable across runs.
impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.id == other.id {
            Ordering::Equal
        } else {
            self.name().cmp(other.name())
        }
    }
}

/// A global state, that stores mappings from variable names to ids.
pub struct State {
    str_to_id: HashMap<String, Symbol>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    fn new() -> State {
        State {
            str_to_id: HashMap::new(),
        }
    }

    /// Get the symbol for a certain name if the name is already registered,
    /// else register it and return a new symbol.
    pub fn get_symbol<S: AsRef<str>>(name: S) -> Symbol {
        STATE.write().unwrap().get_symbol_impl(name.as_ref())
    }

    pub(crate) fn get_symbol_impl(&mut self, name: &str) -> Symbol {
        match self.str_to_id.entry(name.into()) {
            Entry::Occupied(o) => *o.get(),
            Entry::Vacant(v) => {
                if ID_TO_STR.len() == u32::MAX as usize - 1 {
                    panic!("Too many variables defined");
                }

                // there is no synchronization issue since only one thread can insert at a time
                // as the state itself is behind a mutex
                let id = ID_TO_STR.push(name.into());

                let new_symbol = Symbol { id: id as u32 };
                v.insert(new_symbol);
                new_symbol
            }
        }
    }

    /// Get the name for a given symbol.
    pub fn get_name(id: Symbol) -> &'static str {
        &ID_TO_STR[id.get_id() as usize]
    }

    /// Iterate over all defined symbols.
    pub fn symbol_iter() -> impl Iterator<Item = &'static str> {
        ID_TO_STR.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::{State, Symbol};

    #[test]
    fn interning() {
        let x1 = Symbol::new("x");
        let x2 = State::get_symbol("x");
        assert_eq!(x1, x2);
        assert_eq!(x1.name(), "x");
    }

    #[test]
    fn name_order() {
        let a = Symbol::new("alpha");
        let z = Symbol::new("zeta");
        assert!(a < z);
        assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
    }
}
