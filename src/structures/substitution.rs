/*!
Substitutions, from placeholders to atoms.

A substitution is built incrementally while the conditions of a rule are evaluated in order, with each condition extending the substitution given by the conditions before it.

Internally, a substitution is a vector indexed by placeholders, where the placeholder at index *i* is bound to the atom at index *i*, if any.
As a rule knows how many placeholders it uses, a substitution of the right size can be made up front with [with_capacity](Substitution::with_capacity).
Still, binding a placeholder beyond the current size of a substitution grows the substitution as required.

```rust
# use catalog_closure::structures::substitution::Substitution;
let mut substitution = Substitution::with_capacity(2);
substitution.bind(1, 7);

assert_eq!(substitution.get(0), None);
assert_eq!(substitution.get(1), Some(7));
assert_eq!(substitution.get(5), None);
assert_eq!(substitution.bound_count(), 1);
```
*/

use super::{atom::Atom, term::Placeholder};

/// A (partial) map from placeholders to atoms.
#[derive(Clone, Debug, Default)]
pub struct Substitution {
    bindings: Vec<Option<Atom>>,
}

impl Substitution {
    /// An empty substitution, with space for `count` placeholders.
    pub fn with_capacity(count: usize) -> Self {
        Substitution {
            bindings: vec![None; count],
        }
    }

    /// The atom bound to `placeholder`, if any.
    pub fn get(&self, placeholder: Placeholder) -> Option<Atom> {
        self.bindings.get(placeholder as usize).copied().flatten()
    }

    /// Whether `placeholder` is bound to some atom.
    pub fn is_bound(&self, placeholder: Placeholder) -> bool {
        self.get(placeholder).is_some()
    }

    /// Binds `placeholder` to `atom`, replacing any previous binding.
    pub fn bind(&mut self, placeholder: Placeholder, atom: Atom) {
        let index = placeholder as usize;
        if self.bindings.len() <= index {
            self.bindings.resize(index + 1, None);
        }
        self.bindings[index] = Some(atom);
    }

    /// A count of bound placeholders.
    pub fn bound_count(&self) -> usize {
        self.bindings.iter().flatten().count()
    }

    /// An iterator over (placeholder, atom) pairs, in order of placeholder.
    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, Atom)> + '_ {
        self.bindings
            .iter()
            .enumerate()
            .filter_map(|(index, binding)| binding.map(|atom| (index as Placeholder, atom)))
    }
}

/// Substitutions are equal when they bind the same placeholders to the same atoms, regardless of capacity.
impl PartialEq for Substitution {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Substitution {}
