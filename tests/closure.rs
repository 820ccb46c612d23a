use catalog_closure::{
    config::{Config, RuleSchedule},
    context::{Context, ContextState},
    reports::Report,
    types::err::{self, ErrorKind},
};

fn context_with(facts: &[&str], rules: &[&str]) -> Context {
    let mut ctx = Context::from_config(Config::default());
    for fact in facts {
        let fact = ctx.fact_from_string(fact).unwrap();
        assert!(ctx.add_fact(fact).is_ok());
    }
    for rule in rules {
        let rule = ctx.rule_from_string(rule).unwrap();
        assert!(ctx.add_rule(rule).is_ok());
    }
    ctx
}

mod propagation {
    use super::*;

    #[test]
    fn category_to_attribute() {
        let mut ctx = context_with(
            &["(property if flow_control)"],
            &["(==> (property $P flow_control) (property $P OnFailBacktrack))"],
        );

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(
            ctx.query_by_name("property", &[Some("if"), Some("OnFailBacktrack")])
                .len(),
            1
        );
    }

    #[test]
    fn multiple_attributes() {
        let mut ctx = context_with(
            &[
                "(property once flow_control)",
                "(property once evaluation_execution)",
            ],
            &[
                "(==> (property $P flow_control) (property $P OnFailBacktrack))",
                "(==> (property $P evaluation_execution) (property $P Deterministic))",
            ],
        );

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(ctx.holds_from_string("(property once OnFailBacktrack)"), Ok(true));
        assert_eq!(ctx.holds_from_string("(property once Deterministic)"), Ok(true));
        assert_eq!(ctx.counters().derived_facts, 2);
    }

    #[test]
    fn chained_rules() {
        let mut ctx = context_with(
            &["(property if flow_control)"],
            &[
                "(==> (property $P OnFailBacktrack) (property $P Nondeterministic))",
                "(==> (property $P flow_control) (property $P OnFailBacktrack))",
            ],
        );

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(ctx.holds_from_string("(property if Nondeterministic)"), Ok(true));
        assert_eq!(ctx.counters().passes, 3);
        assert_eq!(ctx.counters().productive_passes, 2);
    }

    #[test]
    fn dependency_schedule() {
        let mut ctx = context_with(
            &["(property if flow_control)"],
            &[
                "(==> (property $P OnFailBacktrack) (property $P Nondeterministic))",
                "(==> (property $P flow_control) (property $P OnFailBacktrack))",
            ],
        );
        assert!(ctx.set_rule_schedule(RuleSchedule::Dependency).is_ok());

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(ctx.holds_from_string("(property if Nondeterministic)"), Ok(true));
        assert_eq!(ctx.counters().passes, 2);
    }

    #[test]
    fn unrelated_atoms_untouched() {
        let mut ctx = context_with(
            &[
                "(property if flow_control)",
                "(property plus arithmetic_operations)",
            ],
            &["(==> (property $P flow_control) (property $P OnFailBacktrack))"],
        );

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(ctx.holds_from_string("(property plus OnFailBacktrack)"), Ok(false));
        assert_eq!(ctx.fact_db().count(), 3);
    }
}

mod arity_equivalence {
    use super::*;

    const RULE: &str =
        "(==> (, (p_arity $P $N) (#predecessor $N -> $M) (f_arity $F $M)) (equivalentTypes $P $F))";

    #[test]
    fn unary_predicate() {
        let mut ctx = context_with(
            &["(p_arity UnaryPredicate 1)", "(f_arity NullaryFunction 0)"],
            &[RULE],
        );

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(
            ctx.holds_from_string("(equivalentTypes UnaryPredicate NullaryFunction)"),
            Ok(true)
        );
    }

    #[test]
    fn mismatched_arities() {
        let mut ctx = context_with(
            &[
                "(p_arity UnaryPredicate 1)",
                "(f_arity UnaryFunction 1)",
                "(p_arity NullaryPredicate 0)",
                "(f_arity NullaryFunction 0)",
            ],
            &[RULE],
        );

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        let equivalent = ctx.query_by_name("equivalentTypes", &[None, None]);
        assert_eq!(equivalent.len(), 1);
        assert_eq!(
            equivalent[0].as_string(ctx.symbol_db()),
            "(equivalentTypes UnaryPredicate NullaryFunction)"
        );
    }

    #[test]
    fn built_rule() {
        let mut ctx = context_with(
            &["(p_arity TernaryPredicate 3)", "(f_arity BinaryFunction 2)"],
            &[],
        );
        let rule = ctx.arity_equivalence_rule().unwrap();
        assert!(ctx.add_rule(rule).is_ok());

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(
            ctx.holds_from_string("(equivalentTypes TernaryPredicate BinaryFunction)"),
            Ok(true)
        );
    }

    #[test]
    fn successor_bound_output() {
        let mut ctx = context_with(
            &["(p_arity UnaryPredicate 1)", "(f_arity NullaryFunction 0)"],
            &["(==> (, (p_arity $P $N) (f_arity $F $M) (#successor $M -> $N)) (equivalentTypes $P $F))"],
        );

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(
            ctx.holds_from_string("(equivalentTypes UnaryPredicate NullaryFunction)"),
            Ok(true)
        );
    }
}

mod provenance {
    use super::*;
    use catalog_closure::structures::fact::{Fact, FactSource};

    #[test]
    fn premises_and_rule() {
        let mut ctx = context_with(
            &["(property if flow_control)"],
            &["(==> (property $P flow_control) (property $P OnFailBacktrack))"],
        );
        assert!(ctx.closure().is_ok());

        let original = stored(&ctx, "(property if flow_control)");
        let derived = stored(&ctx, "(property if OnFailBacktrack)");

        let original_key = ctx.fact_db().key_of(&original).unwrap();
        let derived_key = ctx.fact_db().key_of(&derived).unwrap();

        assert_eq!(ctx.fact_db().source(original_key), Some(&FactSource::Original));

        match ctx.fact_db().source(derived_key) {
            Some(FactSource::Derived { rule, premises }) => {
                assert_eq!(rule.index(), 0);
                assert_eq!(premises, &vec![original_key]);
            }
            _ => panic!("Expected a derived fact"),
        }
    }

    #[test]
    fn unrecorded_premises() {
        let mut ctx = context_with(
            &["(property if flow_control)"],
            &["(==> (property $P flow_control) (property $P OnFailBacktrack))"],
        );
        assert!(ctx.set_record_premises(false).is_ok());
        assert!(ctx.closure().is_ok());

        let derived = stored(&ctx, "(property if OnFailBacktrack)");
        let derived_key = ctx.fact_db().key_of(&derived).unwrap();
        assert!(ctx
            .fact_db()
            .premises(derived_key)
            .is_some_and(|premises| premises.is_empty()));
        assert!(ctx.fact_db().source(derived_key).unwrap().is_derived());
    }

    fn stored(ctx: &Context, string: &str) -> Fact {
        let found = ctx.query_from_string(string).unwrap();
        assert_eq!(found.len(), 1);
        found[0].clone()
    }
}

mod callbacks {
    use super::*;
    use catalog_closure::{db::RuleKey, structures::fact::Fact};
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn each_derived_fact() {
        let mut ctx = context_with(
            &["(property if flow_control)", "(property case flow_control)"],
            &["(==> (property $P flow_control) (property $P OnFailBacktrack))"],
        );

        let derived = Rc::new(RefCell::new(Vec::new()));
        let record = derived.clone();
        ctx.set_callback_derived(Box::new(move |fact: &Fact, rule: RuleKey| {
            record.borrow_mut().push((fact.clone(), rule))
        }));

        assert!(ctx.closure().is_ok());
        assert_eq!(derived.borrow().len(), 2);
        assert!(derived.borrow().iter().all(|(_, rule)| rule.index() == 0));
    }
}

mod computations {
    use super::*;
    use catalog_closure::{
        db::symbol::SymbolDB,
        structures::{
            atom::Atom,
            rule::{computed::ComputedCondition, Condition, Rule},
            template::Template,
            term::Term,
        },
    };

    fn next(atoms: &[Atom], _symbols: &SymbolDB) -> Option<Atom> {
        atoms.first().map(|atom| atom + 1)
    }

    fn accept_all(_atoms: &[Atom], _symbols: &SymbolDB) -> bool {
        true
    }

    fn reject_all(_atoms: &[Atom], _symbols: &SymbolDB) -> bool {
        false
    }

    fn filtered(ctx: &mut Context, filter: fn(&[Atom], &SymbolDB) -> bool) -> Rule {
        let p = ctx.atom("p").unwrap();
        let q = ctx.atom("q").unwrap();
        Rule::new(
            vec![
                Condition::Match(Template::new(p, vec![Term::Placeholder(0)])),
                Condition::Computed(ComputedCondition::test(
                    "filter",
                    filter,
                    vec![Term::Placeholder(0)],
                )),
            ],
            Template::new(q, vec![Term::Placeholder(0)]),
        )
    }

    #[test]
    fn custom_bind_within_atoms() {
        let mut ctx = context_with(&["(p zero)"], &[]);
        let p = ctx.atom("p").unwrap();
        ctx.atom("one").unwrap();
        ctx.atom("two").unwrap();

        let rule = Rule::with_names(
            vec![
                Condition::Match(Template::new(p, vec![Term::Placeholder(0)])),
                Condition::Computed(ComputedCondition::bind(
                    "next",
                    next,
                    vec![Term::Placeholder(0)],
                    1,
                )),
            ],
            Template::new(p, vec![Term::Placeholder(1)]),
            vec!["X".to_string(), "Y".to_string()],
        );
        assert!(ctx.add_rule(rule).is_ok());
        assert!(ctx.set_pass_limit(16).is_ok());

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(ctx.holds_from_string("(p two)"), Ok(true));
        assert_eq!(ctx.fact_db().count(), 3);
        assert_eq!(ctx.symbol_db().count(), 4);
        for (_, fact) in ctx.fact_db().iter() {
            assert!(fact.args().iter().all(|atom| ctx.symbol_db().contains(*atom)));
        }
    }

    #[test]
    fn custom_tests_kept_apart() {
        let mut ctx = context_with(&["(p a)"], &[]);

        let rejecting = filtered(&mut ctx, reject_all);
        let accepting = filtered(&mut ctx, accept_all);

        let rejecting_key = ctx.add_rule(rejecting).unwrap();
        let accepting_key = ctx.add_rule(accepting).unwrap();
        assert_ne!(rejecting_key, accepting_key);
        assert_eq!(ctx.rule_db().count(), 2);

        let again = filtered(&mut ctx, reject_all);
        assert_eq!(ctx.add_rule(again), Ok(rejecting_key));

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(ctx.holds_from_string("(q a)"), Ok(true));
    }

    #[test]
    fn custom_test_rejects() {
        let mut ctx = context_with(&["(p a)"], &[]);
        let rule = filtered(&mut ctx, reject_all);
        assert!(ctx.add_rule(rule).is_ok());

        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(ctx.holds_from_string("(q a)"), Ok(false));
        assert_eq!(ctx.counters().derived_facts, 0);
    }
}

mod failures {
    use super::*;

    #[test]
    fn malformed_rule_before_closure() {
        let mut ctx = context_with(&["(property if flow_control)"], &[]);
        let rule = ctx
            .rule_from_string("(==> (property $P flow_control) (property $Q OnFailBacktrack))")
            .unwrap();

        assert_eq!(
            ctx.add_rule(rule),
            Err(ErrorKind::MalformedRule(err::MalformedRule::UnboundConclusion(
                "Q".to_string()
            )))
        );
        assert_eq!(ctx.rule_db().count(), 0);
    }

    #[test]
    fn computed_input_unbound() {
        let mut ctx = context_with(&[], &[]);
        let rule = ctx
            .rule_from_string("(==> (, (#predecessor $N -> $M) (p_arity $P $N)) (f_arity $P $M))")
            .unwrap();

        assert_eq!(
            ctx.add_rule(rule),
            Err(ErrorKind::MalformedRule(err::MalformedRule::UnboundInput(
                "N".to_string()
            )))
        );
    }

    #[test]
    fn no_conditions() {
        let mut ctx = context_with(&[], &[]);
        let rule = ctx.rule_from_string("(==> (,) (property if flow_control))").unwrap();
        assert_eq!(
            ctx.add_rule(rule),
            Err(ErrorKind::MalformedRule(err::MalformedRule::NoConditions))
        );
    }

    #[test]
    fn declared_arity() {
        let mut ctx = context_with(&[], &[]);
        let p_arity = ctx.atom("p_arity").unwrap();
        assert!(ctx.declare_arity(p_arity, 2).is_ok());

        let fact = ctx.fact_from_string("(p_arity UnaryPredicate 1 extra)").unwrap();
        assert_eq!(
            ctx.add_fact(fact),
            Err(ErrorKind::MalformedFact(err::MalformedFact::ArityMismatch {
                relation: p_arity,
                expected: 2,
                found: 3
            }))
        );
    }

    #[test]
    fn pass_limit() {
        let mut ctx = context_with(
            &["(property if flow_control)"],
            &[
                "(==> (property $P OnFailBacktrack) (property $P Nondeterministic))",
                "(==> (property $P flow_control) (property $P OnFailBacktrack))",
            ],
        );
        assert!(ctx.set_pass_limit(1).is_ok());

        assert_eq!(ctx.closure(), Err(ErrorKind::ClosureDidNotConverge(1)));
        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.state(), ContextState::Closing);
    }

    #[test]
    fn pass_limit_sufficient() {
        let mut ctx = context_with(
            &["(property if flow_control)"],
            &["(==> (property $P flow_control) (property $P OnFailBacktrack))"],
        );
        assert!(ctx.set_pass_limit(2).is_ok());
        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
    }

    #[test]
    fn closed_context() {
        let mut ctx = context_with(
            &["(property if flow_control)"],
            &["(==> (property $P flow_control) (property $P OnFailBacktrack))"],
        );
        assert!(ctx.closure().is_ok());

        assert_eq!(
            ctx.fact_from_string("(property eval evaluation_execution)"),
            Err(ErrorKind::State(err::StateError::Closed))
        );
        assert_eq!(
            ctx.rule_from_string("(==> (property $P a) (property $P b))"),
            Err(ErrorKind::State(err::StateError::Closed))
        );
        assert_eq!(
            ctx.set_pass_limit(4),
            Err(err::ConfigError::InvalidState("pass_limit"))
        );
    }
}
