/*!
A database of atoms, interning the names of functors and constants.

Each name is given a unique [Atom] the first time it is seen, and the same atom each time after.
So, two atoms are equal if and only if their names are equal.
*/

use std::collections::HashMap;

use crate::{
    structures::atom::{Atom, ATOM_MAX},
    types::err::AtomDBError,
};

/// The atom database.
#[derive(Default)]
pub struct AtomDB {
    /// The name of each atom, indexed by atom.
    names: Vec<String>,

    /// A map from names to atoms.
    atoms: HashMap<String, Atom>,
}

impl AtomDB {
    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// The atom of `name`, fresh if the name has not been seen before.
    pub fn atom(&mut self, name: &str) -> Result<Atom, AtomDBError> {
        if let Some(atom) = self.atoms.get(name) {
            return Ok(*atom);
        }

        let atom = match Atom::try_from(self.names.len()) {
            Ok(atom) if atom < ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        self.names.push(name.to_owned());
        self.atoms.insert(name.to_owned(), atom);
        Ok(atom)
    }

    /// The atom of `name`, if the name has been seen.
    pub fn existing_atom(&self, name: &str) -> Option<Atom> {
        self.atoms.get(name).copied()
    }

    /// The name of an atom.
    pub fn name(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(|name| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning() {
        let mut atom_db = AtomDB::default();

        let app = atom_db.atom("app").unwrap();
        let cons = atom_db.atom("cons").unwrap();

        assert_ne!(app, cons);
        assert_eq!(atom_db.atom("app"), Ok(app));
        assert_eq!(atom_db.count(), 2);

        assert_eq!(atom_db.name(cons), Some("cons"));
        assert_eq!(atom_db.existing_atom("nil"), None);
    }
}
