/*!
Rules, implications from a conjunction of conditions to a conclusion.

A rule is an ordered sequence of [conditions](Condition) together with a conclusion [template](Template).
Each condition is either:
- A template, satisfied by matching some stored fact.
- A [computed condition](computed), satisfied by a function of atoms bound by earlier conditions.

The conditions of a rule are evaluated in order, with each condition extending the substitution given by the conditions before it.
Whenever every condition is satisfied, the conclusion instantiated by the substitution is a consequence of the rule.

Rules are written as s-expressions, with placeholders prefixed by `$`, and conjunctions of conditions written with `,`:

```none
(==> (property $P flow_control) (property $P OnFailBacktrack))

(==> (, (p_arity $P $N) (#predecessor $N -> $M) (f_arity $F $M))
     (equivalentTypes $P $F))
```

A rule is well-formed when:
- It has at least one condition.
- Each placeholder read by a computed condition is bound by some earlier condition.
- Each placeholder of the conclusion is bound by some condition.
- Bind computations have an output, and test computations do not.

These requirements are checked when a rule is [registered](crate::db::rule::RuleDB::register), and the check is available through [Rule::check_structure].
*/

pub mod computed;
pub mod library;

use std::collections::HashSet;

use computed::{Computation, ComputedCondition};

use crate::{db::symbol::SymbolDB, types::err};

use super::{
    term::Placeholder,
    template::{term_as_string, Template},
};

/// A condition of a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Satisfied by a stored fact matching the template.
    Match(Template),

    /// Satisfied by a computation.
    Computed(ComputedCondition),
}

/// An implication rule.
#[derive(Clone, Debug)]
pub struct Rule {
    conditions: Vec<Condition>,
    conclusion: Template,
    names: Vec<String>,
}

impl Rule {
    /// A rule with placeholders named by index.
    pub fn new(conditions: impl Into<Vec<Condition>>, conclusion: Template) -> Self {
        Rule {
            conditions: conditions.into(),
            conclusion,
            names: Vec::default(),
        }
    }

    /// A rule whose placeholder at index *i* is named by `names[i]`.
    pub fn with_names(
        conditions: impl Into<Vec<Condition>>,
        conclusion: Template,
        names: Vec<String>,
    ) -> Self {
        Rule {
            conditions: conditions.into(),
            conclusion,
            names,
        }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn conclusion(&self) -> &Template {
        &self.conclusion
    }

    /// The templates of the rule's conditions, in order.
    pub fn condition_templates(&self) -> impl Iterator<Item = &Template> {
        self.conditions.iter().filter_map(|condition| match condition {
            Condition::Match(template) => Some(template),
            Condition::Computed(_) => None,
        })
    }

    /// One more than the greatest placeholder of the rule, or zero if the rule has no placeholders.
    pub fn placeholder_count(&self) -> usize {
        let conditions = self.conditions.iter().flat_map(|condition| {
            let placeholders: Vec<Placeholder> = match condition {
                Condition::Match(template) => template.placeholders().collect(),
                Condition::Computed(computed) => computed
                    .input_placeholders()
                    .chain(computed.output())
                    .collect(),
            };
            placeholders
        });

        conditions
            .chain(self.conclusion.placeholders())
            .max()
            .map_or(0, |greatest| greatest as usize + 1)
    }

    /// The name of `placeholder`, defaulting to the index of the placeholder.
    pub fn placeholder_name(&self, placeholder: Placeholder) -> String {
        match self.names.get(placeholder as usize) {
            Some(name) => name.clone(),
            None => placeholder.to_string(),
        }
    }

    /// Checks the rule is well-formed, without reference to any declared arities.
    pub fn check_structure(&self) -> Result<(), err::MalformedRule> {
        if self.conditions.is_empty() {
            return Err(err::MalformedRule::NoConditions);
        }

        let mut bound: HashSet<Placeholder> = HashSet::default();

        for condition in &self.conditions {
            match condition {
                Condition::Match(template) => bound.extend(template.placeholders()),

                Condition::Computed(computed) => {
                    if let Some(unbound) = computed
                        .input_placeholders()
                        .find(|placeholder| !bound.contains(placeholder))
                    {
                        return Err(err::MalformedRule::UnboundInput(
                            self.placeholder_name(unbound),
                        ));
                    }

                    match (computed.computation(), computed.output()) {
                        (Computation::Test(_), None) => {}

                        (Computation::Test(_), Some(_)) => {
                            return Err(err::MalformedRule::UnexpectedOutput(
                                computed.name().to_string(),
                            ));
                        }

                        (Computation::Bind(_), None) => {
                            return Err(err::MalformedRule::MissingOutput(
                                computed.name().to_string(),
                            ));
                        }

                        (Computation::Bind(_), Some(output)) => {
                            bound.insert(output);
                        }
                    }
                }
            }
        }

        if let Some(unbound) = self
            .conclusion
            .placeholders()
            .find(|placeholder| !bound.contains(placeholder))
        {
            return Err(err::MalformedRule::UnboundConclusion(
                self.placeholder_name(unbound),
            ));
        }

        Ok(())
    }

    /// The rule written as an s-expression.
    pub fn as_string(&self, symbols: &SymbolDB) -> String {
        let conditions = self
            .conditions
            .iter()
            .map(|condition| match condition {
                Condition::Match(template) => template.as_string(symbols, &self.names),
                Condition::Computed(computed) => {
                    let mut string = format!("(#{}", computed.name());
                    for input in computed.inputs() {
                        string.push(' ');
                        string.push_str(&term_as_string(input, symbols, &self.names));
                    }
                    if let Some(output) = computed.output() {
                        string.push_str(&format!(" -> ${}", self.placeholder_name(output)));
                    }
                    string.push(')');
                    string
                }
            })
            .collect::<Vec<_>>();

        let condition = match conditions.as_slice() {
            [single] => single.clone(),
            _ => format!("(, {})", conditions.join(" ")),
        };

        format!(
            "(==> {condition} {})",
            self.conclusion.as_string(symbols, &self.names)
        )
    }
}

/// Rules are equal when their conditions and conclusions are equal, regardless of the names of placeholders.
impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.conditions == other.conditions && self.conclusion == other.conclusion
    }
}

impl Eq for Rule {}
