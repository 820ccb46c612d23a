//! A library for closing catalogs of facts under implication rules.
//!
//! catalog_closure is a forward-chaining closure engine for symbolic catalogs: a collection of named atoms tagged with categorical properties, together with a small set of generic implication rules which propagate attributes from categories to the atoms that belong to them, or relate constructs by their declared arities.
//!
//! Given some ground facts, e.g. `(property if flow_control)` or `(p_arity UnaryPredicate 1)`, and some rules, e.g. `(==> (property $P flow_control) (property $P OnFailBacktrack))`, the library computes every fact derivable from the facts by the rules, and answers queries against the result.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config).
//! Facts and rules may be added through the [catalog](crate::context::Context::read_catalog) representation of a collection of facts and rules, from [strings](crate::builder::parse), or [programatically](crate::context::Context::add_fact).
//!
//! Internally, and at a high-level, a closure is viewed in terms of a handful of databases:
//! - Names of atoms are stored in a [symbol database](crate::db::symbol).
//! - Facts are stored in a [fact database](crate::db::fact), together with the source of each fact.
//! - Rules are stored in a [rule database](crate::db::rule).
//!
//! A [closure](crate::procedures::closure) repeatedly [evaluates](crate::procedures::evaluate) each rule against the fact database, and stores each derived fact, until no rule derives a fact which is not already stored.
//!
//! Useful starting points, then, may be:
//! - The [closure procedure](crate::procedures::closure) to inspect the dynamics of a closure.
//! - The [database module](crate::db) to inspect the data considered during a closure.
//! - The [structures] to familiarise yourself with the elements of a catalog and their representation (facts, templates, rules, etc.)
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Propagate attributes from categories.
//!
//! ```rust
//! # use catalog_closure::config::Config;
//! # use catalog_closure::context::Context;
//! # use catalog_closure::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! for fact in ["(property if flow_control)", "(property if arithmetic_operations)"] {
//!     let fact = the_context.fact_from_string(fact).unwrap();
//!     assert!(the_context.add_fact(fact).is_ok());
//! }
//!
//! for (category, attribute) in [("flow_control", "OnFailBacktrack"), ("arithmetic_operations", "Deterministic")] {
//!     let rule = the_context.category_rule(category, attribute).unwrap();
//!     assert!(the_context.add_rule(rule).is_ok());
//! }
//!
//! assert_eq!(the_context.closure(), Ok(Report::Fixpoint));
//!
//! let attributes = the_context
//!     .query_from_string("(property if $Tag)")
//!     .unwrap()
//!     .iter()
//!     .map(|fact| fact.as_string(the_context.symbol_db()))
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(
//!     attributes,
//!     vec![
//!         "(property if flow_control)",
//!         "(property if arithmetic_operations)",
//!         "(property if OnFailBacktrack)",
//!         "(property if Deterministic)",
//!     ]
//! );
//! ```
//!
//! + Read and close a catalog.
//!
//! ```rust
//! # use catalog_closure::context::Context;
//! # use catalog_closure::config::Config;
//! # use catalog_closure::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let catalog = b"
//! (p_arity UnaryPredicate 1)
//! (p_arity BinaryPredicate 2)
//! (f_arity NullaryFunction 0)
//! (f_arity UnaryFunction 1)
//!
//! (==> (, (p_arity $P $N) (#predecessor $N -> $M) (f_arity $F $M))
//!      (equivalentTypes $P $F))
//! ";
//!
//! assert!(the_context.read_catalog(catalog.as_slice()).is_ok());
//! assert_eq!(the_context.closure(), Ok(Report::Fixpoint));
//!
//! assert_eq!(the_context.query_by_name("equivalentTypes", &[None, None]).len(), 2);
//! assert_eq!(the_context.holds_from_string("(equivalentTypes BinaryPredicate UnaryFunction)"), Ok(true));
//! assert_eq!(the_context.holds_from_string("(equivalentTypes BinaryPredicate NullaryFunction)"), Ok(false));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the fact database](crate::db::fact) can be filtered with `RUST_LOG=fact_db …` or,
//! - A summary of each pass of a closure can be found with `RUST_LOG=closure=info …`

#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;
pub mod reports;

pub mod misc;
