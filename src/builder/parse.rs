/*!
Reading facts, templates, and rules from strings.

Strings are read as s-expressions, where an expression is either a symbol or a parenthesised list of expressions.
Whitespace separates symbols, and `;` begins a comment which runs to the end of the line.

- A fact is a list of symbols, e.g. `(property if flow_control)`.
- A template is a list of symbols, some of which may be placeholders, e.g. `(property $P flow_control)`.
- A computed condition is a list headed by `#` and the name of a computation, e.g. `(#predecessor $N -> $M)`.
- A rule is a list of `==>`, a condition, and a conclusion template, where a conjunction of conditions is a list headed by `,`.
- A declaration is a list of `:`, a relation, and an arity, e.g. `(: p_arity 2)`.

Atoms of an expression are obtained through a *resolver*, which either interns names as atoms (when building a context), or looks up the atom of a name (when querying a context).
*/

use crate::{
    context::{Context, ContextState},
    db::symbol::SymbolDB,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        fact::Fact,
        rule::{computed::ComputedCondition, library, Condition, Rule},
        template::Template,
        term::{Placeholder, Term},
    },
    types::err::{self, ErrorKind},
};

/// The head of a rule.
pub const RULE_HEAD: &str = "==>";

/// The head of a conjunction of conditions.
pub const CONJUNCTION_HEAD: &str = ",";

/// The head of an arity declaration.
pub const DECLARATION_HEAD: &str = ":";

/// The marker preceding the output placeholder of a computed condition.
pub const OUTPUT_MARKER: &str = "->";

/// An s-expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Symbol(String),
    List(Vec<Expr>),
}

enum Token {
    Open,
    Close,
    Symbol(String),
}

fn tokens(string: &str) -> Vec<Token> {
    let mut tokens = Vec::default();
    let mut symbol = String::default();

    for line in string.lines() {
        let line = match line.split_once(';') {
            Some((code, _comment)) => code,
            None => line,
        };

        for character in line.chars() {
            match character {
                '(' | ')' => {
                    if !symbol.is_empty() {
                        tokens.push(Token::Symbol(std::mem::take(&mut symbol)));
                    }
                    tokens.push(match character {
                        '(' => Token::Open,
                        _ => Token::Close,
                    });
                }

                c if c.is_whitespace() => {
                    if !symbol.is_empty() {
                        tokens.push(Token::Symbol(std::mem::take(&mut symbol)));
                    }
                }

                c => symbol.push(c),
            }
        }

        if !symbol.is_empty() {
            tokens.push(Token::Symbol(std::mem::take(&mut symbol)));
        }
    }

    tokens
}

/// Reads a single expression from `string`.
///
/// ```rust
/// # use catalog_closure::builder::parse::{read_expr, Expr};
/// let expr = read_expr("(property if ; a comment\n flow_control)").unwrap();
/// assert_eq!(
///     expr,
///     Expr::List(vec![
///         Expr::Symbol("property".to_string()),
///         Expr::Symbol("if".to_string()),
///         Expr::Symbol("flow_control".to_string()),
///     ])
/// );
/// ```
pub fn read_expr(string: &str) -> Result<Expr, err::ParseError> {
    let mut exprs = read_exprs(string)?.into_iter();
    let expr = exprs.next().ok_or(err::ParseError::Empty)?;
    match exprs.next() {
        Some(_) => Err(err::ParseError::TrailingInput),
        None => Ok(expr),
    }
}

/// Reads each expression of `string`, in order.
///
/// A closing parenthesis without a matching opening parenthesis is an error, regardless of any expressions read before it.
pub fn read_exprs(string: &str) -> Result<Vec<Expr>, err::ParseError> {
    let mut stack: Vec<Vec<Expr>> = Vec::default();
    let mut complete = Vec::default();

    for token in tokens(string) {
        let expr = match token {
            Token::Open => {
                stack.push(Vec::default());
                continue;
            }

            Token::Close => match stack.pop() {
                Some(items) => Expr::List(items),
                None => return Err(err::ParseError::UnbalancedParentheses),
            },

            Token::Symbol(symbol) => Expr::Symbol(symbol),
        };

        match stack.last_mut() {
            Some(parent) => parent.push(expr),
            None => complete.push(expr),
        }
    }

    if !stack.is_empty() {
        return Err(err::ParseError::UnbalancedParentheses);
    }

    Ok(complete)
}

/// The head symbol and remaining expressions of a list.
pub fn split_head(expr: &Expr) -> Result<(&str, &[Expr]), err::ParseError> {
    match expr {
        Expr::Symbol(_) => Err(err::ParseError::ExpectedList),

        Expr::List(items) => match items.split_first() {
            None => Err(err::ParseError::EmptyList),
            Some((Expr::Symbol(head), rest)) => Ok((head.as_str(), rest)),
            Some((Expr::List(_), _)) => Err(err::ParseError::ExpectedSymbol),
        },
    }
}

fn symbol_of(expr: &Expr) -> Result<&str, err::ParseError> {
    match expr {
        Expr::Symbol(symbol) => Ok(symbol),
        Expr::List(_) => Err(err::ParseError::ExpectedSymbol),
    }
}

/// A resolver which interns each name as an atom.
pub fn interning(symbol_db: &mut SymbolDB) -> impl FnMut(&str) -> Result<Atom, ErrorKind> + '_ {
    move |name: &str| -> Result<Atom, ErrorKind> { Ok(symbol_db.intern(name)?) }
}

/// A resolver which looks up the atom of each name, without interning.
pub fn looking_up(symbol_db: &SymbolDB) -> impl FnMut(&str) -> Result<Atom, ErrorKind> + '_ {
    move |name: &str| -> Result<Atom, ErrorKind> {
        match symbol_db.get(name) {
            Some(atom) => Ok(atom),
            None => Err(ErrorKind::from(err::ParseError::UnknownAtom(
                name.to_string(),
            ))),
        }
    }
}

/// The relation heading a fact or template.
fn relation_of<R>(head: &str, resolve: &mut R) -> Result<Atom, ErrorKind>
where
    R: FnMut(&str) -> Result<Atom, ErrorKind>,
{
    if let Some(name) = head.strip_prefix('$') {
        return Err(ErrorKind::from(err::ParseError::PlaceholderInFact(
            name.to_string(),
        )));
    }
    atom_of(head, resolve)
}

/// The atom of `symbol`, where `#` is reserved for computations.
fn atom_of<R>(symbol: &str, resolve: &mut R) -> Result<Atom, ErrorKind>
where
    R: FnMut(&str) -> Result<Atom, ErrorKind>,
{
    if let Some(name) = symbol.strip_prefix('#') {
        return Err(ErrorKind::from(err::ParseError::MisplacedComputation(
            name.to_string(),
        )));
    }
    resolve(symbol)
}

/// The term of `symbol`, with placeholders indexed by order of first appearance in `names`.
fn term_of<R>(symbol: &str, resolve: &mut R, names: &mut Vec<String>) -> Result<Term, ErrorKind>
where
    R: FnMut(&str) -> Result<Atom, ErrorKind>,
{
    match symbol.strip_prefix('$') {
        Some(name) => Ok(Term::Placeholder(placeholder_of(name, names))),
        None => Ok(Term::Atom(atom_of(symbol, resolve)?)),
    }
}

fn placeholder_of(name: &str, names: &mut Vec<String>) -> Placeholder {
    match names.iter().position(|known| known == name) {
        Some(index) => index as Placeholder,
        None => {
            names.push(name.to_string());
            (names.len() - 1) as Placeholder
        }
    }
}

/// The fact of `expr`.
pub fn fact_of<R>(expr: &Expr, resolve: &mut R) -> Result<Fact, ErrorKind>
where
    R: FnMut(&str) -> Result<Atom, ErrorKind>,
{
    let (head, rest) = split_head(expr)?;
    let relation = relation_of(head, resolve)?;

    if rest.is_empty() {
        return Err(ErrorKind::from(err::MalformedFact::NoArguments));
    }

    let mut args = Vec::with_capacity(rest.len());
    for arg in rest {
        let symbol = symbol_of(arg)?;
        if let Some(name) = symbol.strip_prefix('$') {
            return Err(ErrorKind::from(err::ParseError::PlaceholderInFact(
                name.to_string(),
            )));
        }
        args.push(atom_of(symbol, resolve)?);
    }

    Ok(Fact::new(relation, args))
}

/// The template of `expr`, with any placeholders named in `names`.
pub fn template_of<R>(
    expr: &Expr,
    resolve: &mut R,
    names: &mut Vec<String>,
) -> Result<Template, ErrorKind>
where
    R: FnMut(&str) -> Result<Atom, ErrorKind>,
{
    let (head, rest) = split_head(expr)?;
    let relation = relation_of(head, resolve)?;

    let mut terms = Vec::with_capacity(rest.len());
    for term in rest {
        terms.push(term_of(symbol_of(term)?, resolve, names)?);
    }

    Ok(Template::new(relation, terms))
}

/// The condition of `expr`, either a template or a computed condition.
pub fn condition_of<R>(
    expr: &Expr,
    resolve: &mut R,
    names: &mut Vec<String>,
) -> Result<Condition, ErrorKind>
where
    R: FnMut(&str) -> Result<Atom, ErrorKind>,
{
    let (head, rest) = split_head(expr)?;

    let Some(name) = head.strip_prefix('#') else {
        return Ok(Condition::Match(template_of(expr, resolve, names)?));
    };

    let computation = match library::computation(name) {
        Some(computation) => computation,
        None => {
            return Err(ErrorKind::from(err::ParseError::UnknownComputation(
                name.to_string(),
            )))
        }
    };

    let (inputs, output) = match rest
        .iter()
        .position(|expr| matches!(expr, Expr::Symbol(symbol) if symbol == OUTPUT_MARKER))
    {
        None => (rest, None),

        Some(index) => match &rest[index + 1..] {
            [Expr::Symbol(output)] => match output.strip_prefix('$') {
                Some(output) => (&rest[..index], Some(output)),
                None => return Err(ErrorKind::from(err::ParseError::MisplacedOutput)),
            },
            _ => return Err(ErrorKind::from(err::ParseError::MisplacedOutput)),
        },
    };

    let mut terms = Vec::with_capacity(inputs.len());
    for input in inputs {
        terms.push(term_of(symbol_of(input)?, resolve, names)?);
    }

    // Inputs first, so placeholders are numbered by first appearance.
    let output = output.map(|output| placeholder_of(output, names));

    Ok(Condition::Computed(ComputedCondition::new(
        name,
        computation,
        terms,
        output,
    )))
}

/// The rule of `expr`.
///
/// The rule is not checked, as checks take place on registration.
pub fn rule_of<R>(expr: &Expr, resolve: &mut R) -> Result<Rule, ErrorKind>
where
    R: FnMut(&str) -> Result<Atom, ErrorKind>,
{
    let (head, rest) = split_head(expr)?;
    let [condition, conclusion] = rest else {
        return Err(ErrorKind::from(err::ParseError::RuleShape));
    };
    if head != RULE_HEAD {
        return Err(ErrorKind::from(err::ParseError::RuleShape));
    }

    let mut names = Vec::default();

    let conditions = match split_head(condition)? {
        (CONJUNCTION_HEAD, conjuncts) => {
            let mut conditions = Vec::with_capacity(conjuncts.len());
            for conjunct in conjuncts {
                conditions.push(condition_of(conjunct, resolve, &mut names)?);
            }
            conditions
        }

        _ => vec![condition_of(condition, resolve, &mut names)?],
    };

    let conclusion = template_of(conclusion, resolve, &mut names)?;

    Ok(Rule::with_names(conditions, conclusion, names))
}

/// The relation and arity of a declaration.
pub fn declaration_of<R>(expr: &Expr, resolve: &mut R) -> Result<(Atom, usize), ErrorKind>
where
    R: FnMut(&str) -> Result<Atom, ErrorKind>,
{
    let (head, rest) = split_head(expr)?;
    match (head, rest) {
        (DECLARATION_HEAD, [Expr::Symbol(relation), Expr::Symbol(arity)]) => {
            let arity = match arity.parse::<usize>() {
                Ok(arity) => arity,
                Err(_) => return Err(ErrorKind::from(err::ParseError::DeclarationShape)),
            };
            Ok((relation_of(relation, resolve)?, arity))
        }

        _ => Err(ErrorKind::from(err::ParseError::DeclarationShape)),
    }
}

/// Methods to read structures from strings, interning any fresh names as atoms.
impl Context {
    /// The fact written in `string`.
    ///
    /// ```rust
    /// # use catalog_closure::context::Context;
    /// # use catalog_closure::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    /// let fact = the_context.fact_from_string("(property if flow_control)").unwrap();
    /// assert_eq!(fact.arity(), 2);
    /// assert_eq!(fact.as_string(the_context.symbol_db()), "(property if flow_control)");
    ///
    /// assert!(the_context.fact_from_string("(property $P flow_control)").is_err());
    /// ```
    pub fn fact_from_string(&mut self, string: &str) -> Result<Fact, ErrorKind> {
        let expr = self.read_input_expr(string)?;
        fact_of(&expr, &mut interning(&mut self.symbol_db))
    }

    /// The template written in `string`.
    pub fn template_from_string(&mut self, string: &str) -> Result<Template, ErrorKind> {
        let expr = self.read_input_expr(string)?;
        template_of(
            &expr,
            &mut interning(&mut self.symbol_db),
            &mut Vec::default(),
        )
    }

    /// The rule written in `string`.
    ///
    /// ```rust
    /// # use catalog_closure::context::Context;
    /// # use catalog_closure::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    /// let rule = the_context
    ///     .rule_from_string("(==> (, (p_arity $P $N) (#predecessor $N -> $M) (f_arity $F $M)) (equivalentTypes $P $F))")
    ///     .unwrap();
    /// assert_eq!(rule.conditions().len(), 3);
    /// assert_eq!(rule.placeholder_count(), 4);
    /// ```
    pub fn rule_from_string(&mut self, string: &str) -> Result<Rule, ErrorKind> {
        let expr = self.read_input_expr(string)?;
        rule_of(&expr, &mut interning(&mut self.symbol_db))
    }

    fn read_input_expr(&mut self, string: &str) -> Result<Expr, ErrorKind> {
        self.check_input_state()?;
        self.state = ContextState::Input;
        let expr = read_expr(string)?;
        log::trace!(target: targets::PARSE, "Read {expr:?}");
        Ok(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbalanced() {
        assert_eq!(
            read_expr("(property if"),
            Err(err::ParseError::UnbalancedParentheses)
        );
        assert_eq!(
            read_expr("(property if))"),
            Err(err::ParseError::UnbalancedParentheses)
        );
        assert_eq!(read_expr("  ; nothing"), Err(err::ParseError::Empty));
        assert_eq!(
            read_expr("(property if) (property eval)"),
            Err(err::ParseError::TrailingInput)
        );
    }

    #[test]
    fn fact_shapes() {
        let mut symbols = SymbolDB::default();

        let expr = read_expr("(property)").unwrap();
        assert_eq!(
            fact_of(&expr, &mut interning(&mut symbols)),
            Err(ErrorKind::MalformedFact(err::MalformedFact::NoArguments))
        );

        let expr = read_expr("(property (if) flow_control)").unwrap();
        assert_eq!(
            fact_of(&expr, &mut interning(&mut symbols)),
            Err(ErrorKind::Parse(err::ParseError::ExpectedSymbol))
        );

        let expr = read_expr("(property $P flow_control)").unwrap();
        assert_eq!(
            fact_of(&expr, &mut interning(&mut symbols)),
            Err(ErrorKind::Parse(err::ParseError::PlaceholderInFact(
                "P".to_string()
            )))
        );

        let expr = read_expr("(property if #flow_control)").unwrap();
        assert_eq!(
            fact_of(&expr, &mut interning(&mut symbols)),
            Err(ErrorKind::Parse(err::ParseError::MisplacedComputation(
                "flow_control".to_string()
            )))
        );

        let expr = read_expr("(property $P #flow_control)").unwrap();
        assert_eq!(
            template_of(&expr, &mut interning(&mut symbols), &mut Vec::default()),
            Err(ErrorKind::Parse(err::ParseError::MisplacedComputation(
                "flow_control".to_string()
            )))
        );
        assert_eq!(symbols.get("#flow_control"), None);
    }

    #[test]
    fn placeholders_by_first_appearance() {
        let mut symbols = SymbolDB::default();
        let expr = read_expr("(==> (same $X $Y $X) (pair $Y $X))").unwrap();
        let rule = rule_of(&expr, &mut interning(&mut symbols)).unwrap();

        assert_eq!(
            rule.conclusion().terms(),
            &[Term::Placeholder(1), Term::Placeholder(0)]
        );
        assert_eq!(rule.placeholder_name(0), "X");
        assert_eq!(rule.placeholder_name(1), "Y");
    }

    #[test]
    fn computed_conditions() {
        let mut symbols = SymbolDB::default();

        let expr = read_expr("(#predecessor $N -> $M)").unwrap();
        let mut names = Vec::default();
        let condition = condition_of(&expr, &mut interning(&mut symbols), &mut names).unwrap();
        match condition {
            Condition::Computed(computed) => {
                assert_eq!(computed.name(), "predecessor");
                assert_eq!(computed.inputs(), &[Term::Placeholder(0)]);
                assert_eq!(computed.output(), Some(1));
            }
            Condition::Match(_) => panic!("Expected a computed condition"),
        }

        let expr = read_expr("(#predecessor $N ->)").unwrap();
        assert_eq!(
            condition_of(&expr, &mut interning(&mut symbols), &mut Vec::default()),
            Err(ErrorKind::Parse(err::ParseError::MisplacedOutput))
        );

        let expr = read_expr("(#length $N -> $M)").unwrap();
        assert_eq!(
            condition_of(&expr, &mut interning(&mut symbols), &mut Vec::default()),
            Err(ErrorKind::Parse(err::ParseError::UnknownComputation(
                "length".to_string()
            )))
        );
    }

    #[test]
    fn rule_shape() {
        let mut symbols = SymbolDB::default();
        let expr = read_expr("(==> (property $P flow_control))").unwrap();
        assert_eq!(
            rule_of(&expr, &mut interning(&mut symbols)),
            Err(ErrorKind::Parse(err::ParseError::RuleShape))
        );

        let expr = read_expr("(<== (property $P a) (property $P b))").unwrap();
        assert_eq!(
            rule_of(&expr, &mut interning(&mut symbols)),
            Err(ErrorKind::Parse(err::ParseError::RuleShape))
        );
    }

    #[test]
    fn declarations() {
        let mut symbols = SymbolDB::default();
        let expr = read_expr("(: p_arity 2)").unwrap();
        let (relation, arity) = declaration_of(&expr, &mut interning(&mut symbols)).unwrap();
        assert_eq!(symbols.name(relation), Some("p_arity"));
        assert_eq!(arity, 2);

        let expr = read_expr("(: p_arity two)").unwrap();
        assert_eq!(
            declaration_of(&expr, &mut interning(&mut symbols)),
            Err(ErrorKind::Parse(err::ParseError::DeclarationShape))
        );
    }

    #[test]
    fn round_trip_rule() {
        let mut the_context = Context::from_config(crate::config::Config::default());
        let string = "(==> (, (p_arity $P $N) (#predecessor $N -> $M) (f_arity $F $M)) (equivalentTypes $P $F))";
        let rule = the_context.rule_from_string(string).unwrap();
        assert_eq!(rule.as_string(the_context.symbol_db()), string);
    }
}
