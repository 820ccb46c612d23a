/*!
Declared arities of relations.

Relations do not have a fixed arity, and without any declaration facts of any arity may be stored under a relation.
Though, a relation may be declared to have some arity, after which:
- Each fact added with the relation must have the declared arity, else [MalformedFact::ArityMismatch](err::MalformedFact::ArityMismatch).
- Each template of a registered rule with the relation must have the declared arity, else [MalformedRule::ArityMismatch](err::MalformedRule::ArityMismatch).

Declarations are not retroactive, and so facts or rules added before a declaration are not checked.
*/

use std::collections::HashMap;

use crate::{
    structures::{atom::Atom, fact::Fact, template::Template},
    types::err::{self},
};

/// Declared arities, indexed by relation.
#[derive(Clone, Debug, Default)]
pub struct Signatures {
    arities: HashMap<Atom, usize>,
}

impl Signatures {
    /// Declares `relation` to have arity `arity`.
    ///
    /// Repeating a declaration is fine, but declaring a different arity for the same relation is an error.
    pub fn declare(&mut self, relation: Atom, arity: usize) -> Result<(), err::MalformedFact> {
        match self.arities.get(&relation) {
            Some(&declared) if declared != arity => Err(err::MalformedFact::ConflictingDeclaration {
                relation,
                declared,
                requested: arity,
            }),

            Some(_) => Ok(()),

            None => {
                self.arities.insert(relation, arity);
                Ok(())
            }
        }
    }

    /// The declared arity of `relation`, if any.
    pub fn arity_of(&self, relation: Atom) -> Option<usize> {
        self.arities.get(&relation).copied()
    }

    pub fn check_fact(&self, fact: &Fact) -> Result<(), err::MalformedFact> {
        match self.arity_of(fact.relation()) {
            Some(expected) if expected != fact.arity() => Err(err::MalformedFact::ArityMismatch {
                relation: fact.relation(),
                expected,
                found: fact.arity(),
            }),
            _ => Ok(()),
        }
    }

    pub fn check_template(&self, template: &Template) -> Result<(), err::MalformedRule> {
        match self.arity_of(template.relation()) {
            Some(expected) if expected != template.arity() => {
                Err(err::MalformedRule::ArityMismatch {
                    relation: template.relation(),
                    expected,
                    found: template.arity(),
                })
            }
            _ => Ok(()),
        }
    }
}
