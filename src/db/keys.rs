/// A key to access a fact stored in the [fact database](crate::db::fact).
///
/// Keys are given in order of insertion, and a key is never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FactKey(pub(crate) usize);

impl FactKey {
    /// The index of the fact in order of insertion.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for FactKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// A key to access a rule stored in the [rule database](crate::db::rule).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleKey(pub(crate) usize);

impl RuleKey {
    /// The index of the rule in order of registration.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}
