//! Databases for holding information relevant to a closure.
//!
//! - [The symbol database](crate::db::symbol)
//!   + Names of atoms, and the atoms of names.
//! - [The fact database](crate::db::fact)
//!   + A set of facts, each indexed by a fact key. \
//!     From an external perspective there are two kinds of fact:
//!     * Original facts \
//!       Facts added to the context from some external source (e.g. directly or through some catalog).
//!     * Derived facts \
//!       Facts added to the context by a closure.
//!       Every derived fact is a consequence of the original facts and the registered rules.
//! - [The rule database](crate::db::rule)
//!   + A list of rules, each indexed by a rule key.
//! - [Signatures](crate::db::signatures)
//!   + Declared arities of relations.

pub mod fact;
mod keys;
pub use keys::*;
pub mod rule;
pub mod signatures;
pub mod symbol;
