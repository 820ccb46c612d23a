use std::io::BufRead;

use crate::{
    builder::parse::{
        declaration_of, fact_of, interning, read_exprs, rule_of, split_head, Expr,
        DECLARATION_HEAD, RULE_HEAD,
    },
    context::Context,
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

/// Counts of the things read from a catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Facts read, whether or not the fact was already stored.
    pub facts: usize,

    /// Rules read, whether or not the rule was already registered.
    pub rules: usize,

    /// Arity declarations read.
    pub declarations: usize,
}

impl Context {
    /// Reads a catalog of facts, rules, and declarations into the context.
    ///
    /// ```rust,ignore
    /// context.read_catalog(BufReader::new(&file))?;
    /// ```
    ///
    /// Each expression of a catalog is a fact, a rule, or an arity declaration.
    /// An expression may span multiple lines, and a line may hold multiple expressions.
    /// An error is reported with the line on which the expression begins.
    ///
    /// ```rust
    /// # use catalog_closure::context::Context;
    /// # use catalog_closure::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let catalog = b"
    /// ; Arities
    /// (: p_arity 2)
    /// (p_arity UnaryPredicate 1)
    /// (f_arity NullaryFunction 0)
    ///
    /// (==> (, (p_arity $P $N) (#predecessor $N -> $M) (f_arity $F $M))
    ///      (equivalentTypes $P $F))
    /// ";
    ///
    /// let summary = the_context.read_catalog(catalog.as_slice()).unwrap();
    /// assert_eq!(summary.facts, 2);
    /// assert_eq!(summary.rules, 1);
    ///
    /// assert!(the_context.closure().is_ok());
    /// assert_eq!(the_context.holds_from_string("(equivalentTypes UnaryPredicate NullaryFunction)"), Ok(true));
    /// ```
    pub fn read_catalog(&mut self, mut reader: impl BufRead) -> Result<CatalogSummary, ErrorKind> {
        let mut summary = CatalogSummary::default();

        let mut buffer = String::with_capacity(1024);
        let mut expression = String::default();

        let mut line_counter = 0;
        let mut expression_line = 0;
        let mut depth: isize = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => {
                    return Err(ErrorKind::from(err::ParseError::Line(line_counter + 1)));
                }
            }

            let code = match buffer.split_once(';') {
                Some((code, _comment)) => code,
                None => buffer.as_str(),
            };

            if code.trim().is_empty() {
                continue;
            }

            if expression.is_empty() {
                expression_line = line_counter;
            }

            for character in code.chars() {
                match character {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    _ => {}
                }
            }
            expression.push_str(code);
            expression.push('\n');

            if depth < 0 {
                return Err(at_line(
                    line_counter,
                    ErrorKind::from(err::ParseError::UnbalancedParentheses),
                ));
            }

            if depth == 0 {
                self.read_catalog_expressions(&expression, &mut summary)
                    .map_err(|error| at_line(expression_line, error))?;
                expression.clear();
            }
        }

        if !expression.is_empty() {
            return Err(at_line(
                expression_line,
                ErrorKind::from(err::ParseError::UnbalancedParentheses),
            ));
        }

        log::info!(target: targets::PARSE, "Read catalog: {summary:?}");
        Ok(summary)
    }

    fn read_catalog_expressions(
        &mut self,
        string: &str,
        summary: &mut CatalogSummary,
    ) -> Result<(), ErrorKind> {
        self.check_input_state()?;

        for expr in read_exprs(string)? {
            self.read_catalog_expression(&expr, summary)?;
        }

        Ok(())
    }

    fn read_catalog_expression(
        &mut self,
        expr: &Expr,
        summary: &mut CatalogSummary,
    ) -> Result<(), ErrorKind> {
        match split_head(expr)?.0 {
            RULE_HEAD => {
                let rule = rule_of(expr, &mut interning(&mut self.symbol_db))?;
                self.add_rule(rule)?;
                summary.rules += 1;
            }

            DECLARATION_HEAD => {
                let (relation, arity) = declaration_of(expr, &mut interning(&mut self.symbol_db))?;
                self.declare_arity(relation, arity)?;
                summary.declarations += 1;
            }

            _ => {
                let fact = fact_of(expr, &mut interning(&mut self.symbol_db))?;
                self.add_fact(fact)?;
                summary.facts += 1;
            }
        }

        Ok(())
    }
}

fn at_line(line: usize, error: ErrorKind) -> ErrorKind {
    ErrorKind::Catalog {
        line,
        error: Box::new(error),
    }
}
