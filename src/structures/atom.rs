/*!
(The internal representation of) an atom.

Atoms are the symbols of a catalog: names of operators, categories, attributes, relations, and so on.
- 'Internal' atoms are used within a context.
- 'External' atoms are names, e.g. `if`, `flow_control`, `OnFailBacktrack`, `3`. \
  External atoms are a string of characters without whitespace or parentheses, and which does not begin with `$` (reserved for placeholders) or `#` (reserved for computations).

Each internal atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

The correspondence between internal and external atoms is kept by the [symbol database](crate::db::symbol).

No structure of an atom is interpreted by the core, and atoms are compared by equality only.
The one exception is [computed conditions](crate::structures::rule::computed), which may read the external name of an atom (e.g. reading `3` as an integer).
*/

/// An atom.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX;
