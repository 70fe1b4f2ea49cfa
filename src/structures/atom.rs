/*!
(The internal representation of) an atom, aka. the name of a functor or constant.

Atoms are interned by the [atom database](crate::db::atom), and two atoms are equal exactly when their names are equal.

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

This representation allows atoms to be used as the indicies of a structure, e.g. the names stored in the atom database, and makes the check for equality of functors during unification a comparison of integers.

# Notes
- The external representation of an atom (its name) is stored in the atom database.
- In the Prolog literature the word 'atom' is used both for names and for constants (compounds without arguments). Here, an atom is always a name.
*/

/// An atom, aka. an interned name.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX;
