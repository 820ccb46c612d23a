/*!
The rules of a catalog.

A catalog uses a small collection of generic rules:
- Category rules, which propagate a derived attribute to each atom with some category.
  For example, each atom with the `flow_control` category has the `OnFailBacktrack` attribute.
  ```none
  (==> (property $P flow_control) (property $P OnFailBacktrack))
  ```
- The arity equivalence rule, which relates a predicate of arity *n* to a function of arity *n - 1*.
  ```none
  (==> (, (p_arity $P $N) (#predecessor $N -> $M) (f_arity $F $M))
       (equivalentTypes $P $F))
  ```

Categories are not exclusive, and an atom with many categories gains the attributes of each.
*/

use crate::{
    context::Context,
    structures::{
        rule::{Condition, Rule},
        template::Template,
        term::Term,
    },
    types::err::ErrorKind,
};

/// The relation between an atom and its categories and attributes.
pub const PROPERTY: &str = "property";

/// The relation between a predicate and its arity.
pub const P_ARITY: &str = "p_arity";

/// The relation between a function and its arity.
pub const F_ARITY: &str = "f_arity";

/// The relation between a predicate and a function with equivalent types.
pub const EQUIVALENT_TYPES: &str = "equivalentTypes";

/// The arity equivalence rule.
pub const ARITY_EQUIVALENCE: &str =
    "(==> (, (p_arity $P $N) (#predecessor $N -> $M) (f_arity $F $M)) (equivalentTypes $P $F))";

impl Context {
    /// The rule giving `attribute` to each atom with `category`.
    ///
    /// ```rust
    /// # use catalog_closure::context::Context;
    /// # use catalog_closure::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    /// let rule = the_context.category_rule("flow_control", "OnFailBacktrack").unwrap();
    /// assert_eq!(
    ///     rule.as_string(the_context.symbol_db()),
    ///     "(==> (property $P flow_control) (property $P OnFailBacktrack))"
    /// );
    /// ```
    pub fn category_rule(&mut self, category: &str, attribute: &str) -> Result<Rule, ErrorKind> {
        let property = self.atom(PROPERTY)?;
        let category = self.atom(category)?;
        let attribute = self.atom(attribute)?;

        Ok(Rule::with_names(
            vec![Condition::Match(Template::new(
                property,
                vec![Term::Placeholder(0), Term::Atom(category)],
            ))],
            Template::new(property, vec![Term::Placeholder(0), Term::Atom(attribute)]),
            vec!["P".to_string()],
        ))
    }

    /// The rule deriving `equivalentTypes` between each predicate of arity *n* and each function of arity *n - 1*.
    pub fn arity_equivalence_rule(&mut self) -> Result<Rule, ErrorKind> {
        self.rule_from_string(ARITY_EQUIVALENCE)
    }
}
