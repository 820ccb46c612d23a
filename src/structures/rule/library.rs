/*!
A library of computations for use in [computed conditions](crate::structures::rule::computed).

Computations are found by name through [computation], and this is how computations are found when reading rules from strings, e.g. `(#predecessor $N -> $M)`.

| Name          | Kind | Inputs | Accepts / produces                                          |
|---------------|------|--------|-------------------------------------------------------------|
| `predecessor` | Bind | 1      | The atom named *n - 1*, for the input named integer *n*.    |
| `successor`   | Bind | 1      | The atom named *n + 1*, for the input named integer *n*.    |
| `distinct`    | Test | any    | Each input is distinct.                                     |
| `equal`       | Test | any    | Each input is the same.                                     |

Integer computations produce nothing if the input is not named by an integer, or if no atom is named by the result.
*/

use crate::{db::symbol::SymbolDB, structures::atom::Atom};

use super::computed::Computation;

/// The computation named `name`, if any.
pub fn computation(name: &str) -> Option<Computation> {
    match name {
        "predecessor" => Some(Computation::Bind(predecessor)),
        "successor" => Some(Computation::Bind(successor)),
        "distinct" => Some(Computation::Test(distinct)),
        "equal" => Some(Computation::Test(equal)),
        _ => None,
    }
}

/// The atom named by the integer one less than the integer naming the single input.
pub fn predecessor(atoms: &[Atom], symbols: &SymbolDB) -> Option<Atom> {
    offset(atoms, symbols, -1)
}

/// The atom named by the integer one more than the integer naming the single input.
pub fn successor(atoms: &[Atom], symbols: &SymbolDB) -> Option<Atom> {
    offset(atoms, symbols, 1)
}

fn offset(atoms: &[Atom], symbols: &SymbolDB, by: i64) -> Option<Atom> {
    let [atom] = atoms else {
        return None;
    };
    let value = symbols.integer_of(*atom)?.checked_add(by)?;
    symbols.get(&value.to_string())
}

/// True if no two inputs are the same atom.
pub fn distinct(atoms: &[Atom], _symbols: &SymbolDB) -> bool {
    atoms
        .iter()
        .enumerate()
        .all(|(index, atom)| !atoms[index + 1..].contains(atom))
}

/// True if every input is the same atom.
pub fn equal(atoms: &[Atom], _symbols: &SymbolDB) -> bool {
    atoms.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_symbols() -> (SymbolDB, Vec<Atom>) {
        let mut symbols = SymbolDB::default();
        let atoms = (0..4)
            .map(|n| symbols.intern(&n.to_string()).unwrap())
            .collect();
        (symbols, atoms)
    }

    #[test]
    fn predecessor_within_range() {
        let (symbols, atoms) = numbered_symbols();
        assert_eq!(predecessor(&[atoms[3]], &symbols), Some(atoms[2]));
        assert_eq!(predecessor(&[atoms[0]], &symbols), None);
    }

    #[test]
    fn successor_within_range() {
        let (symbols, atoms) = numbered_symbols();
        assert_eq!(successor(&[atoms[0]], &symbols), Some(atoms[1]));
        assert_eq!(successor(&[atoms[3]], &symbols), None);
    }

    #[test]
    fn non_integer_input() {
        let (mut symbols, _) = numbered_symbols();
        let name = symbols.intern("UnaryPredicate").unwrap();
        assert_eq!(predecessor(&[name], &symbols), None);
    }

    #[test]
    fn wrong_input_count() {
        let (symbols, atoms) = numbered_symbols();
        assert_eq!(predecessor(&atoms[1..3], &symbols), None);
        assert_eq!(predecessor(&[], &symbols), None);
    }

    #[test]
    fn distinct_and_equal() {
        let (symbols, atoms) = numbered_symbols();
        assert!(distinct(&atoms, &symbols));
        assert!(!distinct(&[atoms[0], atoms[1], atoms[0]], &symbols));
        assert!(equal(&[atoms[2], atoms[2]], &symbols));
        assert!(!equal(&[atoms[2], atoms[1]], &symbols));
        assert!(equal(&[], &symbols));
    }

    #[test]
    fn lookup() {
        assert!(matches!(computation("predecessor"), Some(Computation::Bind(_))));
        assert!(matches!(computation("distinct"), Some(Computation::Test(_))));
        assert!(computation("length").is_none());
    }
}
