use std::str::FromStr;

/// The order in which rules are evaluated during each pass of a closure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleSchedule {
    /// Evaluate rules in the order they were registered.
    Registration = 0,

    /// Evaluate rules so that any rule whose conclusion may satisfy a condition of another rule is evaluated first, where possible.
    ///
    /// The fixpoint reached is the same as on [Registration](RuleSchedule::Registration), though typically with fewer passes.
    Dependency,
}

impl std::fmt::Display for RuleSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registration => write!(f, "Registration"),
            Self::Dependency => write!(f, "Dependency"),
        }
    }
}

impl RuleSchedule {
    /// The minimum RuleSchedule type.
    pub const MIN: RuleSchedule = RuleSchedule::Registration;

    /// The maximum RuleSchedule type.
    pub const MAX: RuleSchedule = RuleSchedule::Dependency;
}

impl FromStr for RuleSchedule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Registration" | "registration" => Ok(Self::Registration),

            "Dependency" | "dependency" => Ok(Self::Dependency),

            _ => Err(()),
        }
    }
}
