use catalog_closure::{builder::FactOk, config::Config, context::Context, reports::Report};

mod basic {

    use catalog_closure::structures::{fact::Fact, substitution::Substitution};

    use super::*;

    #[test]
    fn duplicate_insertion() {
        let mut ctx = Context::from_config(Config::default());
        let fact = ctx
            .fact_from_string("(property eval evaluation_execution)")
            .unwrap();

        assert_eq!(Ok(FactOk::Added), ctx.add_fact(fact.clone()));
        let count = ctx.fact_db().count();

        assert_eq!(Ok(FactOk::Duplicate), ctx.add_fact(fact));
        assert_eq!(ctx.fact_db().count(), count);
    }

    #[test]
    fn variable_arity() {
        let mut ctx = Context::from_config(Config::default());
        for fact in [
            "(property if flow_control)",
            "(property if flow_control Deterministic)",
            "(property if flow_control Deterministic OnFailBacktrack)",
        ] {
            let fact = ctx.fact_from_string(fact).unwrap();
            assert_eq!(Ok(FactOk::Added), ctx.add_fact(fact));
        }

        assert_eq!(ctx.query_by_name("property", &[Some("if"), None]).len(), 1);
        assert_eq!(ctx.query_by_name("property", &[None, None, None]).len(), 1);
        assert_eq!(ctx.query_by_name("property", &[None, None, None, None]).len(), 1);
    }

    #[test]
    fn matching() {
        let mut ctx = Context::from_config(Config::default());
        for fact in [
            "(property if flow_control)",
            "(property eval evaluation_execution)",
            "(property case flow_control)",
        ] {
            let fact = ctx.fact_from_string(fact).unwrap();
            assert!(ctx.add_fact(fact).is_ok());
        }

        let template = ctx.template_from_string("(property $P flow_control)").unwrap();
        let matched = ctx
            .fact_db()
            .matches(&template, &Substitution::default())
            .map(|(_, substitution)| substitution.get(0))
            .map(|atom| atom.and_then(|atom| ctx.symbol_db().name(atom)))
            .collect::<Vec<_>>();

        assert_eq!(matched, vec![Some("if"), Some("case")]);
    }

    #[test]
    fn matching_is_lazy_and_read_only() {
        let mut ctx = Context::from_config(Config::default());
        for fact in ["(property if flow_control)", "(property case flow_control)"] {
            let fact = ctx.fact_from_string(fact).unwrap();
            assert!(ctx.add_fact(fact).is_ok());
        }

        let template = ctx.template_from_string("(property $P $Tag)").unwrap();
        let empty = Substitution::default();
        let mut matches = ctx.fact_db().matches(&template, &empty);

        assert!(matches.next().is_some());
        assert!(matches.next().is_some());
        assert!(matches.next().is_none());
        assert_eq!(ctx.fact_db().count(), 2);
    }

    #[test]
    fn empty_closure() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.closure(), Ok(Report::Fixpoint));
        assert_eq!(ctx.counters().passes, 1);
        assert_eq!(ctx.counters().productive_passes, 0);
    }

    #[test]
    fn holds() {
        let mut ctx = Context::from_config(Config::default());
        let property = ctx.atom("property").unwrap();
        let if_ = ctx.atom("if").unwrap();
        let flow = ctx.atom("flow_control").unwrap();

        assert!(ctx.add_fact(Fact::new(property, vec![if_, flow])).is_ok());
        assert!(ctx.holds(&Fact::new(property, vec![if_, flow])));
        assert!(!ctx.holds(&Fact::new(property, vec![flow, if_])));
    }
}
