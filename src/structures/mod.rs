/*!
Abstract structures of a catalog, and their representation.

- [Atoms](atom), the symbols of a catalog.
- [Facts](fact), ground tuples of atoms headed by a relation.
- [Terms](term), either an atom or a placeholder.
- [Templates](template), fact-shaped patterns of terms.
- [Substitutions](substitution), partial maps from placeholders to atoms.
- [Rules](rule), implications from conditions to a conclusion template.

Structures are independent of any context, though most structures are written and read relative to some [symbol database](crate::db::symbol).
*/

pub mod atom;
pub mod fact;
pub mod rule;
pub mod substitution;
pub mod template;
pub mod term;
