/*!
Callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.
*/

use crate::{db::RuleKey, structures::fact::Fact};

use super::Context;

/// Called with each fact derived during a closure, and the rule which derived the fact.
pub type CallbackDerived = dyn FnMut(&Fact, RuleKey);

impl Context {
    /// Sets a callback to be made on each fact derived during a closure, immediately after the fact is stored.
    ///
    /// ```rust
    /// # use catalog_closure::context::Context;
    /// # use catalog_closure::config::Config;
    /// # use catalog_closure::{db::RuleKey, structures::fact::Fact};
    /// # use std::{cell::RefCell, rc::Rc};
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let derived = Rc::new(RefCell::new(0));
    /// let counter = derived.clone();
    /// the_context.set_callback_derived(Box::new(move |_fact: &Fact, _rule: RuleKey| *counter.borrow_mut() += 1));
    ///
    /// let fact = the_context.fact_from_string("(property if flow_control)").unwrap();
    /// let _ = the_context.add_fact(fact);
    /// let rule = the_context.rule_from_string("(==> (property $P flow_control) (property $P OnFailBacktrack))").unwrap();
    /// let _ = the_context.add_rule(rule);
    ///
    /// assert!(the_context.closure().is_ok());
    /// assert_eq!(*derived.borrow(), 1);
    /// ```
    pub fn set_callback_derived(&mut self, callback: Box<CallbackDerived>) {
        self.callback_derived = Some(callback);
    }
}
