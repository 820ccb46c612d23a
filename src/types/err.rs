//! Error types used in the library.
//!
//! - Rules are checked on registration, and a malformed rule is rejected with a [MalformedRule].
//! - Facts are checked against declared arities, and so a [MalformedFact] is only possible after some declaration, or when reading a fact without arguments.
//! - Strings and catalogs may fail to read with a [ParseError], wrapped with a line in [ErrorKind::Catalog] when reading a catalog.
//! - Closure does not fail, unless a pass limit has been configured and is reached before a fixpoint, in which case [ErrorKind::ClosureDidNotConverge] is returned.
//!
//! Most error enums are named after the database or structure they concern, and so the module is imported as `err` and types are written `err::MalformedRule`, etc.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    MalformedFact(MalformedFact),
    MalformedRule(MalformedRule),
    Parse(ParseError),
    State(StateError),
    SymbolDB(SymbolDBError),

    /// An error found while reading some line of a catalog.
    Catalog {
        line: usize,
        error: Box<ErrorKind>,
    },

    /// A closure performed the configured limit of passes, with the last pass adding some fact.
    ClosureDidNotConverge(u32),
}

/// Issues with the structure of a rule, noted when a rule is registered.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedRule {
    /// A rule without any conditions.
    NoConditions,

    /// The (named) placeholder appears in the conclusion of a rule, but is not bound by any condition.
    UnboundConclusion(String),

    /// The (named) placeholder is read by a computed condition before any condition binds it.
    UnboundInput(String),

    /// A computation which binds some atom was given no placeholder to bind.
    MissingOutput(String),

    /// A computation which tests a substitution was given a placeholder to bind.
    UnexpectedOutput(String),

    /// Some template of the rule conflicts with the declared arity of its relation.
    ArityMismatch {
        relation: Atom,
        expected: usize,
        found: usize,
    },
}

impl From<MalformedRule> for ErrorKind {
    fn from(e: MalformedRule) -> Self {
        ErrorKind::MalformedRule(e)
    }
}

/// Issues with a fact, relative to declarations made by the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedFact {
    /// The fact has a different arity to the declared arity of its relation.
    ArityMismatch {
        relation: Atom,
        expected: usize,
        found: usize,
    },

    /// A relation was declared with two different arities.
    ConflictingDeclaration {
        relation: Atom,
        declared: usize,
        requested: usize,
    },

    /// A fact without any arguments.
    NoArguments,
}

impl From<MalformedFact> for ErrorKind {
    fn from(e: MalformedFact) -> Self {
        ErrorKind::MalformedFact(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// More closing parentheses than opening parentheses, or the reverse.
    UnbalancedParentheses,

    /// Something follows a complete expression.
    TrailingInput,

    /// A list was expected, but a symbol was found.
    ExpectedList,

    /// A symbol was expected, but a list was found.
    ExpectedSymbol,

    /// A list without a head.
    EmptyList,

    /// The (named) placeholder was found where only atoms are permitted.
    PlaceholderInFact(String),

    /// The (named) computation is not part of the library of computations.
    UnknownComputation(String),

    /// A computation was found somewhere other than the condition of a rule.
    MisplacedComputation(String),

    /// A computed condition with a misplaced `->` output marker.
    MisplacedOutput,

    /// A rule is written `(==> condition conclusion)`.
    RuleShape,

    /// An arity declaration is written `(: relation arity)`.
    DeclarationShape,

    /// The (named) atom is not known, and may not be introduced.
    UnknownAtom(String),

    /// Some unspecific problem reading a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// Facts or rules may not be added once closure has begun.
    Closed,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<SymbolDBError> for ErrorKind {
    fn from(e: SymbolDBError) -> Self {
        ErrorKind::SymbolDB(e)
    }
}

/// Errors when revising the configuration of a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The value is outside the bounds of the (named) option.
    OutOfRange(&'static str),

    /// The (named) option may not be revised in the current state of the context.
    InvalidState(&'static str),

    /// The value could not be read for the (named) option.
    Unparsable(&'static str),

    /// No option has the given name.
    UnknownOption(String),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}
