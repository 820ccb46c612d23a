/*!
Queries against the facts of a context.

Queries read the fact database, and may be made at any point, before or after closure.
Though, only after closure is the answer to a query complete with respect to the rules of a context.

- [query](Context::query) finds the facts of a relation which agree with some partial arguments, where `None` is a wildcard.
- [query_from_string](Context::query_from_string) finds the facts matching a template, where placeholders are wildcards and a repeated placeholder requires the same atom at each position.
- [holds](Context::holds) checks whether a fact is stored.

Queries from strings do not intern atoms, and a name unknown to the context is not an error, as no stored fact could contain the name.

```rust
# use catalog_closure::config::Config;
# use catalog_closure::context::Context;
let mut the_context = Context::from_config(Config::default());

for fact in ["(property if flow_control)", "(property eval evaluation_execution)", "(property if OnFailBacktrack)"] {
    let fact = the_context.fact_from_string(fact).unwrap();
    assert!(the_context.add_fact(fact).is_ok());
}

assert_eq!(the_context.query_from_string("(property if $Tag)").unwrap().len(), 2);
assert_eq!(the_context.query_from_string("(property $P flow_control)").unwrap().len(), 1);
assert_eq!(the_context.query_from_string("(property $P NoSuchTag)"), Ok(vec![]));

assert_eq!(the_context.query_by_name("property", &[None, Some("evaluation_execution")]).len(), 1);
```
*/

use crate::{
    builder::parse::{fact_of, looking_up, read_expr, template_of},
    context::Context,
    structures::{atom::Atom, fact::Fact, substitution::Substitution},
    types::err::{self, ErrorKind},
};

impl Context {
    /// The stored facts of `relation` with arity the length of `partial_args`, and agreeing with each atom of `partial_args`.
    ///
    /// Facts are given in order of insertion.
    pub fn query(&self, relation: Atom, partial_args: &[Option<Atom>]) -> Vec<&Fact> {
        self.fact_db
            .with_relation(relation, partial_args.len())
            .filter(|(_, fact)| {
                fact.args()
                    .iter()
                    .zip(partial_args)
                    .all(|(arg, partial)| partial.map_or(true, |atom| atom == *arg))
            })
            .map(|(_, fact)| fact)
            .collect()
    }

    /// As [query](Context::query), with the relation and atoms given by name.
    ///
    /// If any name is unknown to the context, no fact is returned.
    pub fn query_by_name(&self, relation: &str, partial_args: &[Option<&str>]) -> Vec<&Fact> {
        let Some(relation) = self.symbol_db.get(relation) else {
            return Vec::default();
        };

        let mut atoms = Vec::with_capacity(partial_args.len());
        for partial in partial_args {
            match partial {
                None => atoms.push(None),
                Some(name) => match self.symbol_db.get(name) {
                    Some(atom) => atoms.push(Some(atom)),
                    None => return Vec::default(),
                },
            }
        }

        self.query(relation, &atoms)
    }

    /// The stored facts matched by the template written in `string`, in order of insertion.
    pub fn query_from_string(&self, string: &str) -> Result<Vec<&Fact>, ErrorKind> {
        let expr = read_expr(string)?;
        let mut resolve = looking_up(&self.symbol_db);
        let template = match template_of(&expr, &mut resolve, &mut Vec::default()) {
            Ok(template) => template,
            Err(ErrorKind::Parse(err::ParseError::UnknownAtom(_))) => return Ok(Vec::default()),
            Err(e) => return Err(e),
        };

        Ok(self
            .fact_db
            .matches(&template, &Substitution::default())
            .filter_map(|(key, _)| self.fact_db.get(key))
            .collect())
    }

    /// Whether `fact` is stored.
    pub fn holds(&self, fact: &Fact) -> bool {
        self.fact_db.contains(fact)
    }

    /// Whether the fact written in `string` is stored.
    pub fn holds_from_string(&self, string: &str) -> Result<bool, ErrorKind> {
        let expr = read_expr(string)?;
        match fact_of(&expr, &mut looking_up(&self.symbol_db)) {
            Ok(fact) => Ok(self.holds(&fact)),
            Err(ErrorKind::Parse(err::ParseError::UnknownAtom(_))) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
