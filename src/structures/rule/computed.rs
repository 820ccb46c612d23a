/*!
Computed conditions.

Most conditions of a rule are [templates](crate::structures::template::Template), satisfied by matching some stored fact.
A computed condition is instead satisfied by a function of atoms already bound by earlier conditions.

There are two kinds of [Computation]:
- A [test](Computation::Test), which accepts or rejects a substitution.
- A [bind](Computation::Bind), which produces an atom for an output placeholder, or rejects the substitution.
  If the output placeholder is already bound, the substitution is accepted only if the produced atom is the bound atom.

Computations read the [symbol database](crate::db::symbol::SymbolDB) but cannot extend it.
Any atom produced by a bind which is not in the symbol database rejects the substitution.
So, a computation only ever produces an atom which already exists, and closure over a finite collection of atoms remains finite.

For example, the predecessor of the atom `3` is the atom `2`, if `2` is an atom, and otherwise there is no predecessor.

```rust
# use catalog_closure::db::symbol::SymbolDB;
# use catalog_closure::structures::{substitution::Substitution, term::Term};
# use catalog_closure::structures::rule::computed::ComputedCondition;
# use catalog_closure::structures::rule::library;
let mut symbols = SymbolDB::default();
let one = symbols.intern("1").unwrap();
let zero = symbols.intern("0").unwrap();

let predecessor = ComputedCondition::bind("predecessor", library::predecessor, vec![Term::Placeholder(0)], 1);

let mut substitution = Substitution::default();
substitution.bind(0, one);

let extended = predecessor.apply(&substitution, &symbols).unwrap();
assert_eq!(extended.get(1), Some(zero));

substitution.bind(0, zero);
assert!(predecessor.apply(&substitution, &symbols).is_none());
```
*/

use crate::{
    db::symbol::SymbolDB,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        substitution::Substitution,
        term::{Placeholder, Term},
    },
};

/// A function which accepts or rejects some atoms.
pub type TestFn = fn(&[Atom], &SymbolDB) -> bool;

/// A function which produces an atom from some atoms, if possible.
pub type BindFn = fn(&[Atom], &SymbolDB) -> Option<Atom>;

/// The function of a computed condition.
#[derive(Clone, Copy)]
pub enum Computation {
    Test(TestFn),
    Bind(BindFn),
}

/// Computations are equal when of the same kind and with the same function address.
///
/// Distinct functions never share an address, though copies of a function may not.
impl PartialEq for Computation {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Test(a), Self::Test(b)) => *a as usize == *b as usize,
            (Self::Bind(a), Self::Bind(b)) => *a as usize == *b as usize,
            _ => false,
        }
    }
}

impl Eq for Computation {}

/// A condition satisfied by a computation over bound placeholders.
#[derive(Clone)]
pub struct ComputedCondition {
    name: String,
    computation: Computation,
    inputs: Vec<Term>,
    output: Option<Placeholder>,
}

impl ComputedCondition {
    /// A computed condition, without any check on whether the output is appropriate for the computation.
    ///
    /// Checks are made when a rule containing the condition is registered.
    pub fn new(
        name: impl Into<String>,
        computation: Computation,
        inputs: impl Into<Vec<Term>>,
        output: Option<Placeholder>,
    ) -> Self {
        ComputedCondition {
            name: name.into(),
            computation,
            inputs: inputs.into(),
            output,
        }
    }

    /// A test of `inputs`.
    pub fn test(name: impl Into<String>, function: TestFn, inputs: impl Into<Vec<Term>>) -> Self {
        Self::new(name, Computation::Test(function), inputs, None)
    }

    /// A binding of `output` to the result of `function` on `inputs`.
    pub fn bind(
        name: impl Into<String>,
        function: BindFn,
        inputs: impl Into<Vec<Term>>,
        output: Placeholder,
    ) -> Self {
        Self::new(name, Computation::Bind(function), inputs, Some(output))
    }

    /// The name of the computation.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn computation(&self) -> Computation {
        self.computation
    }

    pub fn inputs(&self) -> &[Term] {
        &self.inputs
    }

    pub fn output(&self) -> Option<Placeholder> {
        self.output
    }

    /// The placeholders read by the computation.
    pub fn input_placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.inputs.iter().filter_map(|term| term.placeholder())
    }

    /// Applies the computation to the atoms bound by `substitution`, returning the (possibly extended) substitution on acceptance.
    ///
    /// Rejects if some input placeholder is unbound, or if the output does not fit the computation.
    pub fn apply(&self, substitution: &Substitution, symbols: &SymbolDB) -> Option<Substitution> {
        let mut atoms = Vec::with_capacity(self.inputs.len());
        for input in &self.inputs {
            match input {
                Term::Atom(atom) => atoms.push(*atom),
                Term::Placeholder(placeholder) => atoms.push(substitution.get(*placeholder)?),
            }
        }

        match (self.computation, self.output) {
            (Computation::Test(function), None) => {
                function(&atoms, symbols).then(|| substitution.clone())
            }

            (Computation::Bind(function), Some(output)) => {
                let result = function(&atoms, symbols)?;
                if !symbols.contains(result) {
                    log::warn!(target: targets::MATCHING, "{} produced unknown atom {result}", self.name);
                    return None;
                }
                match substitution.get(output) {
                    Some(bound) => (bound == result).then(|| substitution.clone()),
                    None => {
                        let mut extended = substitution.clone();
                        extended.bind(output, result);
                        Some(extended)
                    }
                }
            }

            (Computation::Test(_), Some(_)) | (Computation::Bind(_), None) => None,
        }
    }
}

/// Computed conditions are compared by name, computation, inputs, and output.
impl PartialEq for ComputedCondition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.computation == other.computation
            && self.inputs == other.inputs
            && self.output == other.output
    }
}

impl Eq for ComputedCondition {}

impl std::fmt::Debug for ComputedCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputedCondition")
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .field("output", &self.output)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::rule::library;

    fn next(atoms: &[Atom], _symbols: &SymbolDB) -> Option<Atom> {
        atoms.first().map(|atom| atom + 1)
    }

    fn accept_all(_atoms: &[Atom], _symbols: &SymbolDB) -> bool {
        true
    }

    fn reject_all(_atoms: &[Atom], _symbols: &SymbolDB) -> bool {
        false
    }

    #[test]
    fn bind_outside_symbols() {
        let mut symbols = SymbolDB::default();
        let zero = symbols.intern("zero").unwrap();
        let one = symbols.intern("one").unwrap();

        let condition = ComputedCondition::bind("next", next, vec![Term::Placeholder(0)], 1);

        let mut substitution = Substitution::default();
        substitution.bind(0, zero);
        let extended = condition.apply(&substitution, &symbols).unwrap();
        assert_eq!(extended.get(1), Some(one));

        substitution.bind(0, one);
        assert!(condition.apply(&substitution, &symbols).is_none());
    }

    #[test]
    fn equality_by_function() {
        let accept = ComputedCondition::test("filter", accept_all, vec![Term::Placeholder(0)]);
        let reject = ComputedCondition::test("filter", reject_all, vec![Term::Placeholder(0)]);
        assert_eq!(accept, accept.clone());
        assert_ne!(accept, reject);

        let bind = ComputedCondition::new(
            "filter",
            Computation::Bind(library::successor),
            vec![Term::Placeholder(0)],
            None,
        );
        assert_ne!(bind, accept);
    }
}
