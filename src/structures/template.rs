/*!
Templates, fact-shaped patterns with placeholders.

A template is a relation together with an ordered sequence of [terms](crate::structures::term::Term).
Given a substitution, a template matches a fact when:
- The relation and arity of the template and fact agree.
- Each atom of the template is the atom at the same position of the fact.
- Each placeholder of the template is either bound by the substitution to the atom at the same position of the fact, or unbound.

On a match the substitution is extended by binding each unbound placeholder to the atom at the same position of the fact.
A placeholder which appears in multiple positions of a template binds on its first appearance, and so each later appearance must match the same atom.

```rust
# use catalog_closure::structures::{fact::Fact, substitution::Substitution, template::Template, term::Term};
let (property, eval, evaluation) = (0, 1, 2);

let template = Template::new(property, vec![Term::Placeholder(0), Term::Atom(evaluation)]);
let fact = Fact::new(property, vec![eval, evaluation]);

let extended = template.match_fact(&fact, &Substitution::default()).unwrap();
assert_eq!(extended.get(0), Some(eval));

let instance = template.instantiate(&extended).unwrap();
assert_eq!(instance, fact);
```
*/

use crate::db::symbol::SymbolDB;

use super::{
    atom::Atom,
    fact::Fact,
    substitution::Substitution,
    term::{Placeholder, Term},
};

/// A fact-shaped pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Template {
    relation: Atom,
    terms: Vec<Term>,
}

impl Template {
    pub fn new(relation: Atom, terms: impl Into<Vec<Term>>) -> Self {
        Template {
            relation,
            terms: terms.into(),
        }
    }

    /// The relation of the template.
    pub fn relation(&self) -> Atom {
        self.relation
    }

    /// The terms of the template.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The arity of the template.
    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    /// The placeholders of the template, in order of position (and so possibly with repetition).
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.terms.iter().filter_map(|term| term.placeholder())
    }

    /// Whether the template contains no placeholders.
    pub fn is_ground(&self) -> bool {
        self.placeholders().next().is_none()
    }

    /// Extends `substitution` so that the template matches `fact`, if possible.
    pub fn match_fact(&self, fact: &Fact, substitution: &Substitution) -> Option<Substitution> {
        if self.relation != fact.relation() || self.arity() != fact.arity() {
            return None;
        }

        let mut extended = substitution.clone();
        for (term, atom) in self.terms.iter().zip(fact.args()) {
            match term {
                Term::Atom(literal) => {
                    if literal != atom {
                        return None;
                    }
                }

                Term::Placeholder(placeholder) => match extended.get(*placeholder) {
                    None => extended.bind(*placeholder, *atom),
                    Some(bound) if bound == *atom => {}
                    Some(_) => return None,
                },
            }
        }

        Some(extended)
    }

    /// The fact given by replacing each placeholder with its binding in `substitution`, if every placeholder is bound.
    pub fn instantiate(&self, substitution: &Substitution) -> Option<Fact> {
        let mut args = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            match term {
                Term::Atom(atom) => args.push(*atom),
                Term::Placeholder(placeholder) => args.push(substitution.get(*placeholder)?),
            }
        }
        Some(Fact::new(self.relation, args))
    }

    /// Whether some instance of the template may also be an instance of `other`.
    ///
    /// Placeholders are treated as independent across the two templates, and so this is an over-approximation.
    pub fn may_overlap(&self, other: &Template) -> bool {
        self.relation == other.relation
            && self.arity() == other.arity()
            && self
                .terms
                .iter()
                .zip(other.terms())
                .all(|pair| match pair {
                    (Term::Atom(a), Term::Atom(b)) => a == b,
                    _ => true,
                })
    }

    /// The template written as an s-expression, with atoms replaced by their names in `symbols` and placeholders named by `names`.
    ///
    /// Any placeholder without a name is written `$` followed by the placeholder.
    pub fn as_string(&self, symbols: &SymbolDB, names: &[String]) -> String {
        let mut string = String::from("(");
        string.push_str(&symbols.name_or_index(self.relation));
        for term in &self.terms {
            string.push(' ');
            string.push_str(&term_as_string(term, symbols, names));
        }
        string.push(')');
        string
    }
}

/// A term written with atoms replaced by their names in `symbols` and placeholders named by `names`.
pub(crate) fn term_as_string(term: &Term, symbols: &SymbolDB, names: &[String]) -> String {
    match term {
        Term::Atom(atom) => symbols.name_or_index(*atom),
        Term::Placeholder(placeholder) => match names.get(*placeholder as usize) {
            Some(name) => format!("${name}"),
            None => format!("${placeholder}"),
        },
    }
}

impl From<&Fact> for Template {
    fn from(fact: &Fact) -> Self {
        Template::new(
            fact.relation(),
            fact.args()
                .iter()
                .map(|atom| Term::Atom(*atom))
                .collect::<Vec<_>>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROPERTY: Atom = 0;
    const IF: Atom = 1;
    const FLOW: Atom = 2;
    const BACKTRACK: Atom = 3;

    #[test]
    fn literal_mismatch() {
        let template = Template::new(PROPERTY, vec![Term::Placeholder(0), Term::Atom(BACKTRACK)]);
        let fact = Fact::new(PROPERTY, vec![IF, FLOW]);
        assert!(template.match_fact(&fact, &Substitution::default()).is_none());
    }

    #[test]
    fn arity_mismatch() {
        let template = Template::new(PROPERTY, vec![Term::Placeholder(0), Term::Placeholder(1)]);
        let fact = Fact::new(PROPERTY, vec![IF, FLOW, BACKTRACK]);
        assert!(template.match_fact(&fact, &Substitution::default()).is_none());
    }

    #[test]
    fn bound_placeholder() {
        let template = Template::new(PROPERTY, vec![Term::Placeholder(0), Term::Atom(FLOW)]);
        let fact = Fact::new(PROPERTY, vec![IF, FLOW]);

        let mut substitution = Substitution::default();
        substitution.bind(0, BACKTRACK);
        assert!(template.match_fact(&fact, &substitution).is_none());

        let mut substitution = Substitution::default();
        substitution.bind(0, IF);
        assert_eq!(template.match_fact(&fact, &substitution), Some(substitution));
    }

    #[test]
    fn repeated_placeholder() {
        let template = Template::new(PROPERTY, vec![Term::Placeholder(0), Term::Placeholder(0)]);

        let same = Fact::new(PROPERTY, vec![IF, IF]);
        let extended = template.match_fact(&same, &Substitution::default());
        assert_eq!(extended.and_then(|s| s.get(0)), Some(IF));

        let different = Fact::new(PROPERTY, vec![IF, FLOW]);
        assert!(template.match_fact(&different, &Substitution::default()).is_none());
    }

    #[test]
    fn partial_instantiation() {
        let template = Template::new(PROPERTY, vec![Term::Placeholder(0), Term::Placeholder(1)]);
        let mut substitution = Substitution::default();
        substitution.bind(0, IF);
        assert!(template.instantiate(&substitution).is_none());
    }

    #[test]
    fn overlap() {
        let conclusion = Template::new(PROPERTY, vec![Term::Placeholder(0), Term::Atom(BACKTRACK)]);
        let condition = Template::new(PROPERTY, vec![Term::Placeholder(4), Term::Atom(BACKTRACK)]);
        let other = Template::new(PROPERTY, vec![Term::Placeholder(4), Term::Atom(FLOW)]);

        assert!(conclusion.may_overlap(&condition));
        assert!(!conclusion.may_overlap(&other));
    }
}
