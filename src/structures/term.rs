/*!
Terms, the values of the logic language.

A term is either:
- A *variable*, which is either unbound or bound to some other term.
- A *compound*, which is a functor ([Atom]) applied to an ordered sequence of argument terms.
  A compound without arguments is a constant.

Terms are stored in the [term database](crate::db::term) and refer to each other through [keys](crate::db::TermKey), rather than through references.
So, a variable may be bound to a compound which contains the variable (there is no occurs-check) without any cycle of ownership.

The arguments of a compound are set when the compound is created and are never changed.
The binding of a variable is changed only by [unification](crate::procedures::unify), and each change is recorded on the [trail](crate::db::trail).

# Dereferencing

The *representative* of a term is found by following bindings until an unbound variable or a compound is reached.
As only unbound variables are bound, chains of variables are always finite.
Though, as there is no occurs-check, the *structure* below a representative may be cyclic.
*/

use crate::{db::TermKey, structures::atom::Atom};

/// A stamp, given to each variable on creation.
///
/// Stamps are strictly increasing within a context, and so older variables have lower stamps.
pub type Stamp = u64;

/// A term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    /// A logic variable.
    Variable {
        /// The stamp of the variable, unique within a context.
        stamp: Stamp,

        /// The term the variable is bound to, if any.
        binding: Option<TermKey>,
    },

    /// A functor applied to some (perhaps empty) sequence of arguments.
    Compound {
        functor: Atom,
        arguments: Vec<TermKey>,
    },
}

impl Term {
    /// True if the term is a variable, whether bound or not.
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable { .. })
    }

    /// True if the term is a variable without a binding.
    pub fn is_unbound(&self) -> bool {
        matches!(self, Self::Variable { binding: None, .. })
    }

    /// True if the term is a compound.
    pub fn is_compound(&self) -> bool {
        matches!(self, Self::Compound { .. })
    }

    /// The functor of a compound.
    pub fn functor(&self) -> Option<Atom> {
        match self {
            Self::Compound { functor, .. } => Some(*functor),
            Self::Variable { .. } => None,
        }
    }

    /// The arguments of a compound, and otherwise the empty slice.
    pub fn arguments(&self) -> &[TermKey] {
        match self {
            Self::Compound { arguments, .. } => arguments,
            Self::Variable { .. } => &[],
        }
    }

    /// The count of arguments of a compound, and zero for a variable.
    pub fn arity(&self) -> usize {
        self.arguments().len()
    }

    /// The binding of a variable, if the term is a bound variable.
    pub fn binding(&self) -> Option<TermKey> {
        match self {
            Self::Variable { binding, .. } => *binding,
            Self::Compound { .. } => None,
        }
    }
}
