/*!
Evaluation of a rule against stored facts.

The conditions of a rule are evaluated left to right, beginning with the empty substitution.
- A template condition extends the substitution once for each stored fact it [matches](crate::db::fact::FactDB::matches).
- A computed condition extends the substitution at most once, by [applying](crate::structures::rule::computed::ComputedCondition::apply) the computation.

Each substitution which survives every condition instantiates the conclusion of the rule, and the instance together with the keys of the facts matched along the way is a [Derivation].

Evaluation does not mutate the fact database, and so the derivations of a rule are those of the facts stored when evaluation began.
*/

use crate::{
    db::{fact::FactDB, symbol::SymbolDB, FactKey},
    misc::log::targets::{self},
    structures::{
        fact::Fact,
        rule::{Condition, Rule},
        substitution::Substitution,
    },
};

/// An instance of the conclusion of a rule, with the facts matched by the template conditions of the rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derivation {
    pub fact: Fact,

    /// Keys of the matched facts, in order of condition.
    /// Empty if premises are not recorded.
    pub premises: Vec<FactKey>,
}

struct Evaluation<'a> {
    rule: &'a Rule,
    fact_db: &'a FactDB,
    symbol_db: &'a SymbolDB,
    record_premises: bool,
}

impl Evaluation<'_> {
    fn extend(
        &self,
        conditions: &[Condition],
        substitution: &Substitution,
        premises: &mut Vec<FactKey>,
        derivations: &mut Vec<Derivation>,
    ) {
        let Some((condition, remaining)) = conditions.split_first() else {
            match self.rule.conclusion().instantiate(substitution) {
                Some(fact) => derivations.push(Derivation {
                    fact,
                    premises: match self.record_premises {
                        true => premises.clone(),
                        false => Vec::default(),
                    },
                }),

                None => {
                    log::warn!(target: targets::MATCHING, "Conclusion unbound by {substitution:?}");
                }
            }
            return;
        };

        match condition {
            Condition::Match(template) => {
                for (key, extended) in self.fact_db.matches(template, substitution) {
                    premises.push(key);
                    self.extend(remaining, &extended, premises, derivations);
                    premises.pop();
                }
            }

            Condition::Computed(computed) => {
                if let Some(extended) = computed.apply(substitution, self.symbol_db) {
                    self.extend(remaining, &extended, premises, derivations);
                }
            }
        }
    }
}

/// Every derivation of `rule` from the facts of `fact_db`, in order of the matched facts.
///
/// The same fact may be derived multiple times, from different premises.
pub fn derivations(
    rule: &Rule,
    fact_db: &FactDB,
    symbol_db: &SymbolDB,
    record_premises: bool,
) -> Vec<Derivation> {
    let evaluation = Evaluation {
        rule,
        fact_db,
        symbol_db,
        record_premises,
    };

    let mut derivations = Vec::default();
    let mut premises = Vec::default();
    evaluation.extend(
        rule.conditions(),
        &Substitution::with_capacity(rule.placeholder_count()),
        &mut premises,
        &mut derivations,
    );

    log::trace!(target: targets::MATCHING, "{} derivations", derivations.len());
    derivations
}
