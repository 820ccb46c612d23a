//! Closes the facts of a context under the rules of the context.
//!
//! # Overview
//!
//! A closure is a sequence of passes, where each pass evaluates every registered rule once, in the order given by the configured [schedule](crate::config::RuleSchedule).
//!
//! Within a pass, the [derivations](crate::procedures::evaluate) of a rule are found against the stored facts and then stored before the next rule is evaluated.
//! So, a fact derived early in a pass may be used by any rule evaluated later in the same pass.
//!
//! A pass is productive if some derived fact was not already stored, and closure ends with the first pass which is not productive.
//! At this point the stored facts are a fixpoint: each rule derives only facts already stored.
//!
//! Roughly, and abstracting from bookkeeping, closure is:
//!
//! ```rust,ignore
//! loop {
//!     let mut added = 0;
//!     for key in schedule {
//!         for derivation in derivations(rule(key), facts) {
//!             if facts.insert(derivation) {
//!                 added += 1;
//!             }
//!         }
//!     }
//!     if added == 0 {
//!         break;
//!     }
//! }
//! ```
//!
//! # Termination
//!
//! Closure always terminates.
//! For, rules only ever add facts, and each fact is built from the relations and atoms of a context, of which there are finitely many, as computed conditions do not introduce atoms.
//! Further, as each productive pass adds some fact, the count of passes is at most one more than the count of derived facts.
//!
//! Still, a limit on passes may be [configured](crate::config::Config::pass_limit), in which case closure returns [ClosureDidNotConverge](ErrorKind::ClosureDidNotConverge) if the last permitted pass was productive.
//!
//! # Example
//!
//! ```rust
//! # use catalog_closure::config::Config;
//! # use catalog_closure::context::Context;
//! # use catalog_closure::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! for fact in ["(property if flow_control)", "(property eval evaluation_execution)"] {
//!     let fact = the_context.fact_from_string(fact).unwrap();
//!     assert!(the_context.add_fact(fact).is_ok());
//! }
//!
//! let backtrack = the_context.category_rule("flow_control", "OnFailBacktrack").unwrap();
//! let deterministic = the_context.category_rule("OnFailBacktrack", "Deterministic").unwrap();
//! assert!(the_context.add_rule(deterministic).is_ok());
//! assert!(the_context.add_rule(backtrack).is_ok());
//!
//! assert_eq!(the_context.closure(), Ok(Report::Fixpoint));
//! assert_eq!(the_context.holds_from_string("(property if Deterministic)"), Ok(true));
//! assert_eq!(the_context.holds_from_string("(property eval Deterministic)"), Ok(false));
//! assert_eq!(the_context.counters().derived_facts, 2);
//! assert_eq!(the_context.counters().passes, 3);
//! ```

use crate::{
    context::{Context, ContextState, Counters},
    db::RuleKey,
    misc::log::targets::{self},
    procedures::evaluate,
    reports::Report,
    structures::fact::FactSource,
    types::err::ErrorKind,
};

impl Context {
    /// Closes the facts of the context under the rules of the context.
    pub fn closure(&mut self) -> Result<Report, ErrorKind> {
        let total_time = std::time::Instant::now();

        self.state = ContextState::Closing;
        self.counters = Counters::default();

        let schedule = self.rule_db.schedule(self.config.rule_schedule.value);
        let pass_limit = self.config.pass_limit.value;

        log::info!(target: targets::CLOSURE,
            "Closing {} facts under {} rules", self.fact_db.count(), self.rule_db.count());

        'pass_loop: loop {
            self.counters.passes += 1;
            let added = self.pass(&schedule);

            log::info!(target: targets::CLOSURE,
                "Pass {} derived {added} facts", self.counters.passes);

            if added == 0 {
                break 'pass_loop;
            }
            self.counters.productive_passes += 1;

            if self.counters.passes >= pass_limit {
                self.counters.time = total_time.elapsed();
                log::warn!(target: targets::CLOSURE, "Pass limit of {pass_limit} reached");
                return Err(ErrorKind::ClosureDidNotConverge(self.counters.passes));
            }
        }

        self.counters.time = total_time.elapsed();
        self.state = ContextState::Closed;

        log::info!(target: targets::CLOSURE,
            "Fixpoint after {} passes with {} derived facts", self.counters.passes, self.counters.derived_facts);

        Ok(self.report())
    }

    /// Evaluates each rule of `schedule` once, returning a count of facts added.
    fn pass(&mut self, schedule: &[RuleKey]) -> usize {
        let record_premises = self.config.record_premises.value;
        let mut added = 0;

        for &rule_key in schedule {
            let Some(rule) = self.rule_db.get(rule_key) else {
                log::error!(target: targets::CLOSURE, "Missing rule {rule_key}");
                continue;
            };

            let derivations =
                evaluate::derivations(rule, &self.fact_db, &self.symbol_db, record_premises);

            for derivation in derivations {
                self.counters.firings += 1;

                let source = FactSource::Derived {
                    rule: rule_key,
                    premises: derivation.premises,
                };

                if let Some(fact_key) = self.fact_db.insert_with_source(derivation.fact, source) {
                    added += 1;
                    self.counters.derived_facts += 1;

                    if let Some(callback) = &mut self.callback_derived {
                        if let Some(fact) = self.fact_db.get(fact_key) {
                            callback(fact, rule_key);
                        }
                    }
                }
            }
        }

        added
    }
}
