/*!
A database of symbols, relating each internal [atom](crate::structures::atom) to its external name.

Atoms are given in order of interning, so the first name interned is atom 0, the second atom 1, and so on.
Interning a name a second time returns the atom already given.

```rust
# use catalog_closure::db::symbol::SymbolDB;
let mut symbols = SymbolDB::default();

let property = symbols.intern("property").unwrap();
let again = symbols.intern("property").unwrap();
assert_eq!(property, again);

assert_eq!(symbols.name(property), Some("property"));
assert_eq!(symbols.get("flow_control"), None);
```

During closure the symbol database is read-only, and so the atoms of a context are fixed.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::atom::{Atom, ATOM_MAX},
    types::err::{self},
};

/// The symbol database.
#[derive(Clone, Debug, Default)]
pub struct SymbolDB {
    /// Names indexed by atom.
    names: Vec<String>,

    /// A map from names to atoms.
    atoms: HashMap<String, Atom>,
}

impl SymbolDB {
    /// The atom named `name`, interning `name` as a fresh atom if required.
    pub fn intern(&mut self, name: &str) -> Result<Atom, err::SymbolDBError> {
        if let Some(atom) = self.atoms.get(name) {
            return Ok(*atom);
        }

        let atom = match Atom::try_from(self.names.len()) {
            Ok(atom) if atom < ATOM_MAX => atom,
            _ => {
                log::error!(target: targets::FACT_DB, "Atoms exhausted at {name}");
                return Err(err::SymbolDBError::AtomsExhausted);
            }
        };

        self.names.push(name.to_string());
        self.atoms.insert(name.to_string(), atom);
        Ok(atom)
    }

    /// The atom named `name`, if `name` has been interned.
    pub fn get(&self, name: &str) -> Option<Atom> {
        self.atoms.get(name).copied()
    }

    /// The name of `atom`, if `atom` has been interned.
    pub fn name(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(|name| name.as_str())
    }

    /// Whether `atom` has been interned.
    pub fn contains(&self, atom: Atom) -> bool {
        (atom as usize) < self.names.len()
    }

    /// The name of `atom`, or `#` followed by the atom if `atom` has no name.
    pub fn name_or_index(&self, atom: Atom) -> String {
        match self.name(atom) {
            Some(name) => name.to_string(),
            None => format!("#{atom}"),
        }
    }

    /// The integer named by `atom`, if the name of `atom` is an integer.
    pub fn integer_of(&self, atom: Atom) -> Option<i64> {
        self.name(atom)?.parse().ok()
    }

    /// A count of interned atoms.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// An iterator over (atom, name) pairs, in order of interning.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (index as Atom, name.as_str()))
    }
}
