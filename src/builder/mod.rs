/*!
Tools for building a context.

# Basic methods

The library has three basic methods for building a context:
- [atom](crate::context::Context::atom), to obtain the atom of some name.
- [add_fact](crate::context::Context::add_fact), to add a fact.
- [add_rule](crate::context::Context::add_rule), to register a rule.

Facts and rules may be built from atoms and the canonical [structures](crate::structures), or read from strings through [fact_from_string](crate::context::Context::fact_from_string) and [rule_from_string](crate::context::Context::rule_from_string).
A whole catalog may be read through [read_catalog](crate::context::Context::read_catalog).

Facts and rules may only be added before the first closure of a context.

# Examples

A fact and rule built using basic methods.

```rust
# use catalog_closure::context::Context;
# use catalog_closure::config::Config;
# use catalog_closure::builder::FactOk;
# use catalog_closure::structures::{fact::Fact, rule::{Condition, Rule}, template::Template, term::Term};
let mut the_context = Context::from_config(Config::default());
let property = the_context.atom("property").unwrap();
let if_ = the_context.atom("if").unwrap();
let flow_control = the_context.atom("flow_control").unwrap();
let backtrack = the_context.atom("OnFailBacktrack").unwrap();

let fact = Fact::new(property, vec![if_, flow_control]);
assert_eq!(the_context.add_fact(fact.clone()), Ok(FactOk::Added));
assert_eq!(the_context.add_fact(fact), Ok(FactOk::Duplicate));

let rule = Rule::new(
    vec![Condition::Match(Template::new(property, vec![Term::Placeholder(0), Term::Atom(flow_control)]))],
    Template::new(property, vec![Term::Placeholder(0), Term::Atom(backtrack)]),
);
assert!(the_context.add_rule(rule).is_ok());

assert!(the_context.closure().is_ok());
assert!(the_context.holds(&Fact::new(property, vec![if_, backtrack])));
```

The same, using strings.

```rust
# use catalog_closure::context::Context;
# use catalog_closure::config::Config;
let mut the_context = Context::from_config(Config::default());

let fact = the_context.fact_from_string("(property if flow_control)").unwrap();
assert!(the_context.add_fact(fact).is_ok());

let rule = the_context
    .rule_from_string("(==> (property $P flow_control) (property $P OnFailBacktrack))")
    .unwrap();
assert!(the_context.add_rule(rule).is_ok());

assert!(the_context.closure().is_ok());
assert_eq!(the_context.holds_from_string("(property if OnFailBacktrack)"), Ok(true));
```
*/

mod catalog;
pub use catalog::CatalogSummary;
pub mod parse;
pub mod rules;

use crate::{
    config::Config,
    context::{Context, ContextState},
    db::{symbol::SymbolDB, RuleKey},
    misc::log::targets::{self},
    structures::{atom::Atom, fact::Fact, rule::Rule},
    types::err::ErrorKind,
};

/// Ok results of adding a fact to a context.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FactOk {
    /// The fact was added to the context.
    Added,

    /// The fact was already stored (and so was not added again).
    Duplicate,
}

impl Context {
    /// Creates a context from some configuration, symbols, facts, and rules.
    ///
    /// The atoms of `facts` and `rules` are read relative to `symbol_db`.
    pub fn load(
        config: Config,
        symbol_db: SymbolDB,
        facts: impl IntoIterator<Item = Fact>,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Result<Self, ErrorKind> {
        let mut the_context = Self::from_config(config);
        the_context.symbol_db = symbol_db;

        the_context.add_facts(facts)?;
        for rule in rules {
            the_context.add_rule(rule)?;
        }

        Ok(the_context)
    }

    /// The atom named `name`, interning `name` if required.
    pub fn atom(&mut self, name: &str) -> Result<Atom, ErrorKind> {
        self.check_input_state()?;
        self.state = ContextState::Input;
        Ok(self.symbol_db.intern(name)?)
    }

    /// Declares `relation` to have arity `arity`, so any fact or rule with a different arity for `relation` is rejected.
    pub fn declare_arity(&mut self, relation: Atom, arity: usize) -> Result<(), ErrorKind> {
        self.check_input_state()?;
        self.state = ContextState::Input;
        self.signatures.declare(relation, arity)?;
        log::debug!(target: targets::FACT_DB, "Declared arity {arity} for {relation}");
        Ok(())
    }

    /// Adds a fact to the context.
    pub fn add_fact(&mut self, fact: Fact) -> Result<FactOk, ErrorKind> {
        self.check_input_state()?;
        self.signatures.check_fact(&fact)?;
        self.state = ContextState::Input;

        match self.fact_db.insert(fact) {
            true => Ok(FactOk::Added),
            false => Ok(FactOk::Duplicate),
        }
    }

    /// Adds each fact to the context, returning a count of facts added.
    ///
    /// Facts before the first malformed fact are added, and no fact after.
    pub fn add_facts(&mut self, facts: impl IntoIterator<Item = Fact>) -> Result<usize, ErrorKind> {
        let mut added = 0;
        for fact in facts {
            if self.add_fact(fact)? == FactOk::Added {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Registers a rule with the context.
    pub fn add_rule(&mut self, rule: Rule) -> Result<RuleKey, ErrorKind> {
        self.check_input_state()?;
        self.state = ContextState::Input;
        Ok(self.rule_db.register(rule, &self.signatures)?)
    }
}
