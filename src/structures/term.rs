/*!
Terms, the slots of a [template](crate::structures::template).

A term is either some atom, to be matched exactly, or a placeholder, to be bound to some atom during matching.

Placeholders are local to a rule (or a template) and are represented by an index.
Where placeholders are read from a string, indices are given in order of first appearance, and the names are kept alongside a [rule](crate::structures::rule::Rule) for reporting.
*/

use super::atom::Atom;

/// The index of a placeholder.
pub type Placeholder = u32;

/// A slot of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A literal atom.
    Atom(Atom),

    /// A placeholder.
    Placeholder(Placeholder),
}

impl Term {
    /// The atom of the term, if the term is an atom.
    pub fn atom(&self) -> Option<Atom> {
        match self {
            Self::Atom(atom) => Some(*atom),
            Self::Placeholder(_) => None,
        }
    }

    /// The placeholder of the term, if the term is a placeholder.
    pub fn placeholder(&self) -> Option<Placeholder> {
        match self {
            Self::Atom(_) => None,
            Self::Placeholder(placeholder) => Some(*placeholder),
        }
    }
}
