/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the targets below.
For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) installed:
- `RUST_LOG=closure=info …` reports each pass of a closure.
- `RUST_LOG=fact_db=trace …` reports every fact stored.

Note, no log implementation is provided.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [fact database](crate::db::fact)
    pub const FACT_DB: &str = "fact_db";

    /// Logs related to the [rule database](crate::db::rule)
    pub const RULE_DB: &str = "rule_db";

    /// Logs related to [closure](crate::procedures::closure)
    pub const CLOSURE: &str = "closure";

    /// Logs related to [evaluation](crate::procedures::evaluate) of rule conditions
    pub const MATCHING: &str = "matching";

    /// Logs related to reading facts and rules from strings
    pub const PARSE: &str = "parse";
}
