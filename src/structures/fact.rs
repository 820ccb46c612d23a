/*!
Facts, ground tuples recording a relation holding over some atoms.

A fact is a relation together with an ordered sequence of atoms, and the arity of a fact is the length of the sequence.
The relation of a fact does not determine the arity of the fact, so `(property if flow_control)` and `(property if flow_control Deterministic)` may be stored together.

Facts are written as s-expressions, e.g. `(property if flow_control)`, and [as_string](Fact::as_string) writes a fact this way, given the [symbol database](crate::db::symbol::SymbolDB) the atoms of the fact belong to.
*/

use crate::db::{symbol::SymbolDB, FactKey, RuleKey};

use super::atom::Atom;

/// A ground fact.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fact {
    relation: Atom,
    args: Vec<Atom>,
}

impl Fact {
    pub fn new(relation: Atom, args: impl Into<Vec<Atom>>) -> Self {
        Fact {
            relation,
            args: args.into(),
        }
    }

    /// The relation of the fact.
    pub fn relation(&self) -> Atom {
        self.relation
    }

    /// The arguments of the fact.
    pub fn args(&self) -> &[Atom] {
        &self.args
    }

    /// The arity of the fact.
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// The fact written as an s-expression, with atoms replaced by their names in `symbols`.
    ///
    /// Any atom without a name is written `#` followed by the atom.
    pub fn as_string(&self, symbols: &SymbolDB) -> String {
        let mut string = String::from("(");
        string.push_str(&symbols.name_or_index(self.relation));
        for arg in &self.args {
            string.push(' ');
            string.push_str(&symbols.name_or_index(*arg));
        }
        string.push(')');
        string
    }
}

/// The source of a stored fact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactSource {
    /// The fact was added to the context directly.
    Original,

    /// The fact was derived by a rule, from the facts matched by the conditions of the rule.
    ///
    /// Premises are in order of the conditions matched, and are empty if premises are not [recorded](crate::config::Config::record_premises).
    Derived {
        rule: RuleKey,
        premises: Vec<FactKey>,
    },
}

impl FactSource {
    /// Whether the fact was derived by some rule.
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Derived { .. })
    }
}
