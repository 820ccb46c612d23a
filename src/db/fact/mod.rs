/*!
A database of facts.

Facts are stored in order of insertion and accessed by [FactKey]s.
Alongside each fact the database records the [source](FactSource) of the fact: either original, or derived by some rule from some premises.

The database is a set, and so contains at most one instance of any fact.
Inserting a fact already present is a no-op, and the source of the fact stored first is kept.

# Matching

Facts are indexed by relation and arity.
So, when [matching](FactDB::matches) a template only those facts with the relation and arity of the template are considered.

```rust
# use catalog_closure::db::fact::FactDB;
# use catalog_closure::structures::{fact::Fact, substitution::Substitution, template::Template, term::Term};
let (property, if_, eval, flow_control, evaluation) = (0, 1, 2, 3, 4);

let mut fact_db = FactDB::default();
assert!(fact_db.insert(Fact::new(property, vec![if_, flow_control])));
assert!(fact_db.insert(Fact::new(property, vec![eval, evaluation])));
assert!(!fact_db.insert(Fact::new(property, vec![if_, flow_control])));

let template = Template::new(property, vec![Term::Placeholder(0), Term::Atom(flow_control)]);
let matches = fact_db
    .matches(&template, &Substitution::default())
    .map(|(_, substitution)| substitution.get(0))
    .collect::<Vec<_>>();
assert_eq!(matches, vec![Some(if_)]);
```
*/

mod matches;
pub use matches::Matches;

use std::collections::HashMap;

use crate::{
    db::FactKey,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        fact::{Fact, FactSource},
        substitution::Substitution,
        template::Template,
    },
};

/// The fact database.
#[derive(Clone, Debug, Default)]
pub struct FactDB {
    /// Facts, indexed by key.
    facts: Vec<Fact>,

    /// The source of each fact, indexed by key.
    sources: Vec<FactSource>,

    /// A map from facts to keys, to ensure each fact is stored at most once.
    keys: HashMap<Fact, FactKey>,

    /// Keys of facts with a given relation and arity, in order of insertion.
    index: HashMap<(Atom, usize), Vec<FactKey>>,

    /// A count of original facts.
    original_count: usize,
}

impl FactDB {
    /// Inserts `fact` as an original fact, returning true if the fact was not already present.
    pub fn insert(&mut self, fact: Fact) -> bool {
        self.insert_with_source(fact, FactSource::Original).is_some()
    }

    /// Inserts `fact` with the given source, returning the key of the fact if the fact was not already present.
    pub fn insert_with_source(&mut self, fact: Fact, source: FactSource) -> Option<FactKey> {
        if self.keys.contains_key(&fact) {
            log::trace!(target: targets::FACT_DB, "Duplicate {fact:?}");
            return None;
        }

        let key = FactKey(self.facts.len());
        log::trace!(target: targets::FACT_DB, "Stored {key}: {fact:?} from {source:?}");

        if !source.is_derived() {
            self.original_count += 1;
        }

        self.index
            .entry((fact.relation(), fact.arity()))
            .or_default()
            .push(key);
        self.keys.insert(fact.clone(), key);
        self.facts.push(fact);
        self.sources.push(source);

        Some(key)
    }

    /// Whether `fact` is stored.
    pub fn contains(&self, fact: &Fact) -> bool {
        self.keys.contains_key(fact)
    }

    /// The key of `fact`, if stored.
    pub fn key_of(&self, fact: &Fact) -> Option<FactKey> {
        self.keys.get(fact).copied()
    }

    /// The fact at `key`, if any.
    pub fn get(&self, key: FactKey) -> Option<&Fact> {
        self.facts.get(key.0)
    }

    /// The source of the fact at `key`, if any.
    pub fn source(&self, key: FactKey) -> Option<&FactSource> {
        self.sources.get(key.0)
    }

    /// The premises of the fact at `key`, if any fact is stored at `key`.
    ///
    /// Original facts have no premises.
    pub fn premises(&self, key: FactKey) -> Option<&[FactKey]> {
        match self.sources.get(key.0)? {
            FactSource::Original => Some(&[]),
            FactSource::Derived { premises, .. } => Some(premises),
        }
    }

    /// A count of all stored facts.
    pub fn count(&self) -> usize {
        self.facts.len()
    }

    /// A count of original facts.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// A count of derived facts.
    pub fn derived_count(&self) -> usize {
        self.facts.len() - self.original_count
    }

    /// An iterator over all stored facts, in order of insertion.
    pub fn iter(&self) -> impl Iterator<Item = (FactKey, &Fact)> {
        self.facts
            .iter()
            .enumerate()
            .map(|(index, fact)| (FactKey(index), fact))
    }

    /// An iterator over stored facts with the given relation and arity, in order of insertion.
    pub fn with_relation(
        &self,
        relation: Atom,
        arity: usize,
    ) -> impl Iterator<Item = (FactKey, &Fact)> {
        self.candidates(relation, arity)
            .iter()
            .map(|key| (*key, &self.facts[key.0]))
    }

    /// A lazy iterator over each extension of `substitution` under which `template` matches some stored fact, paired with the key of the fact.
    ///
    /// Extensions are given in order of insertion of the matched fact.
    pub fn matches<'a>(
        &'a self,
        template: &'a Template,
        substitution: &'a Substitution,
    ) -> Matches<'a> {
        Matches::new(
            &self.facts,
            self.candidates(template.relation(), template.arity()),
            template,
            substitution,
        )
    }

    fn candidates(&self, relation: Atom, arity: usize) -> &[FactKey] {
        match self.index.get(&(relation, arity)) {
            Some(keys) => keys,
            None => &[],
        }
    }
}
