use crate::{
    db::FactKey,
    structures::{fact::Fact, substitution::Substitution, template::Template},
};

/// An iterator over the matches of a template against stored facts.
///
/// Created by [FactDB::matches](super::FactDB::matches).
pub struct Matches<'a> {
    facts: &'a [Fact],
    candidates: std::slice::Iter<'a, FactKey>,
    template: &'a Template,
    substitution: &'a Substitution,
}

impl<'a> Matches<'a> {
    pub(super) fn new(
        facts: &'a [Fact],
        candidates: &'a [FactKey],
        template: &'a Template,
        substitution: &'a Substitution,
    ) -> Self {
        Matches {
            facts,
            candidates: candidates.iter(),
            template,
            substitution,
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = (FactKey, Substitution);

    fn next(&mut self) -> Option<Self::Item> {
        for key in self.candidates.by_ref() {
            let fact = &self.facts[key.0];
            if let Some(extended) = self.template.match_fact(fact, self.substitution) {
                return Some((*key, extended));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.candidates.len()))
    }
}
