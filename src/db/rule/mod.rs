/*!
A database of rules.

Rules are stored in order of registration and accessed by [RuleKey]s.

A rule is checked when registered, and only well-formed rules are stored.
So, a rejected rule does not affect any rule already registered.
Registering a rule equal to some stored rule is a no-op, and returns the key of the stored rule.
Computed conditions of equal rules share both name and function.

# Schedules

During closure every rule is evaluated once per pass, in the order given by [schedule](RuleDB::schedule).
- On [Registration](RuleSchedule::Registration) rules are evaluated in order of registration.
- On [Dependency](RuleSchedule::Dependency) rules are evaluated so that, where possible, a rule whose conclusion may satisfy a condition of some other rule is evaluated before the other rule.
  See [dependency] for details.
*/

pub mod dependency;

use crate::{
    config::RuleSchedule,
    db::{signatures::Signatures, RuleKey},
    misc::log::targets::{self},
    structures::rule::Rule,
    types::err::{self},
};

/// The rule database.
#[derive(Clone, Debug, Default)]
pub struct RuleDB {
    rules: Vec<Rule>,
}

impl RuleDB {
    /// Registers `rule`, after checking the rule is well-formed and agrees with any arity declared in `signatures`.
    pub fn register(
        &mut self,
        rule: Rule,
        signatures: &Signatures,
    ) -> Result<RuleKey, err::MalformedRule> {
        if let Err(e) = rule.check_structure() {
            log::warn!(target: targets::RULE_DB, "Rejected rule: {e:?}");
            return Err(e);
        }

        for template in rule
            .condition_templates()
            .chain(std::iter::once(rule.conclusion()))
        {
            if let Err(e) = signatures.check_template(template) {
                log::warn!(target: targets::RULE_DB, "Rejected rule: {e:?}");
                return Err(e);
            }
        }

        if let Some(index) = self.rules.iter().position(|stored| *stored == rule) {
            log::debug!(target: targets::RULE_DB, "Duplicate of r{index}");
            return Ok(RuleKey(index));
        }

        let key = RuleKey(self.rules.len());
        log::debug!(target: targets::RULE_DB, "Registered {key}");
        self.rules.push(rule);
        Ok(key)
    }

    /// The rule at `key`, if any.
    pub fn get(&self, key: RuleKey) -> Option<&Rule> {
        self.rules.get(key.0)
    }

    /// A count of registered rules.
    pub fn count(&self) -> usize {
        self.rules.len()
    }

    /// An iterator over registered rules, in order of registration.
    pub fn iter(&self) -> impl Iterator<Item = (RuleKey, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, rule)| (RuleKey(index), rule))
    }

    /// The keys of all registered rules, in order of evaluation by `schedule`.
    pub fn schedule(&self, schedule: RuleSchedule) -> Vec<RuleKey> {
        match schedule {
            RuleSchedule::Registration => (0..self.rules.len()).map(RuleKey).collect(),
            RuleSchedule::Dependency => dependency::dependency_order(&self.rules),
        }
    }
}
