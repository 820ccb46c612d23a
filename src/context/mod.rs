/*!
The context --- to which facts and rules are added and within which closures take place, etc.

A context owns:
- A [configuration](crate::config).
- The [symbol](crate::db::symbol), [fact](crate::db::fact), and [rule](crate::db::rule) databases, together with any declared [signatures](crate::db::signatures).
- [Counters] for the most recent closure.
- Any [callbacks].

A context is built through the methods of the [builder](crate::builder), closed through [closure](crate::procedures::closure), and queried through the methods of [query](crate::procedures::query).

# Example
```rust
# use catalog_closure::context::Context;
# use catalog_closure::config::Config;
# use catalog_closure::reports::Report;
let mut the_context = Context::from_config(Config::default());

let fact = the_context.fact_from_string("(property if flow_control)").unwrap();
assert!(the_context.add_fact(fact).is_ok());

let rule = the_context
    .rule_from_string("(==> (property $P flow_control) (property $P OnFailBacktrack))")
    .unwrap();
assert!(the_context.add_rule(rule).is_ok());

assert_eq!(the_context.closure(), Ok(Report::Fixpoint));
assert_eq!(the_context.holds_from_string("(property if OnFailBacktrack)"), Ok(true));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;

use callbacks::CallbackDerived;

use crate::{
    config::{Config, PassCount, RuleSchedule},
    db::{fact::FactDB, rule::RuleDB, signatures::Signatures, symbol::SymbolDB},
    reports::Report,
    types::err::{self},
};

/// The state of a context.
///
/// States are ordered, and a context only moves to a later state.
/// The one exception is a repeated closure, which moves a context from [Closed](ContextState::Closed) to [Closing](ContextState::Closing) and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A closure is in progress, or the most recent closure stopped before a fixpoint.
    Closing,

    /// Some closure has reached a fixpoint.
    Closed,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Closing => write!(f, "Closing"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub(crate) config: Config,

    /// Counters related to the most recent closure.
    pub(crate) counters: Counters,

    /// The symbol database.
    /// See [db::symbol](crate::db::symbol) for details.
    pub(crate) symbol_db: SymbolDB,

    /// The fact database.
    /// See [db::fact](crate::db::fact) for details.
    pub(crate) fact_db: FactDB,

    /// The rule database.
    /// See [db::rule](crate::db::rule) for details.
    pub(crate) rule_db: RuleDB,

    /// Declared arities.
    pub(crate) signatures: Signatures,

    /// The status of the context.
    pub(crate) state: ContextState,

    /// Called on each fact derived during a closure.
    pub(super) callback_derived: Option<Box<CallbackDerived>>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,

            counters: Counters::default(),

            symbol_db: SymbolDB::default(),
            fact_db: FactDB::default(),
            rule_db: RuleDB::default(),
            signatures: Signatures::default(),

            state: ContextState::Configuration,

            callback_derived: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn symbol_db(&self) -> &SymbolDB {
        &self.symbol_db
    }

    pub fn fact_db(&self) -> &FactDB {
        &self.fact_db
    }

    pub fn rule_db(&self) -> &RuleDB {
        &self.rule_db
    }

    pub fn signatures(&self) -> &Signatures {
        &self.signatures
    }

    /// An error if facts or rules may no longer be added.
    pub(crate) fn check_input_state(&self) -> Result<(), err::StateError> {
        match self.state {
            ContextState::Configuration | ContextState::Input => Ok(()),
            ContextState::Closing | ContextState::Closed => Err(err::StateError::Closed),
        }
    }
}

/// Revisions to the configuration of a context.
impl Context {
    pub fn set_pass_limit(&mut self, limit: PassCount) -> Result<(), err::ConfigError> {
        self.config.pass_limit.set(limit, &self.state)
    }

    pub fn set_record_premises(&mut self, record: bool) -> Result<(), err::ConfigError> {
        self.config.record_premises.set(record, &self.state)
    }

    pub fn set_rule_schedule(&mut self, schedule: RuleSchedule) -> Result<(), err::ConfigError> {
        self.config.rule_schedule.set(schedule, &self.state)
    }

    /// Sets the option named `name` to the value read from `value`.
    ///
    /// See [Config::set_from_str].
    pub fn set_config_from_str(&mut self, name: &str, value: &str) -> Result<(), err::ConfigError> {
        self.config.set_from_str(name, value, &self.state)
    }
}
