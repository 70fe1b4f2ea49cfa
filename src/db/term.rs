/*!
A database of terms, accessed via [keys](TermKey).

The term database is an arena: each term is stored at some index of a vector, and terms refer to other terms by index.
So, bindings which make a structure cyclic are keys in a vector, rather than references with ownership.

# Marks

Terms are only ever added to the end of the database, and a [TermMark] notes the count of terms at some point.
[Truncating](TermDB::truncate) to a mark discards, wholesale, every term created after the mark.

The arguments of a compound are always created before the compound, and so are never discarded before the compound.
Though, a variable created *before* a mark may be bound to a term created *after* the mark.
So, truncation is only sound once each binding made after the mark has been undone, and the database is only truncated by [backtracking](crate::context::Context::backtrack_to) after the trail has been undone and each remaining binding is to a term before the mark.

# Safety

Accessors are given in checked and unchecked variants.
Keys given to the library from outside are checked, and keys reached from a checked key --- arguments of compounds, and bindings of variables --- are in the database by the above, and are accessed unchecked.
*/

use crate::{
    config::Config,
    db::{TermIndex, TermKey},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        term::{Stamp, Term},
    },
    types::err::TermDBError,
};

/// A mark of the count of terms in a term database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TermMark(usize);

impl TermMark {
    /// True if the key is to some term created before the mark.
    pub fn includes(&self, key: TermKey) -> bool {
        key.index() < self.0
    }
}

/// The term database.
pub struct TermDB {
    /// The terms, indexed by key.
    terms: Vec<Term>,

    /// The stamp given to the most recently created variable.
    stamp: Stamp,

    /// The maximum count of terms.
    term_limit: TermIndex,
}

impl TermDB {
    /// A new [TermDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        TermDB {
            terms: Vec::default(),
            stamp: 0,
            term_limit: config.term_limit.value,
        }
    }

    /// A count of terms in the database.
    pub fn count(&self) -> usize {
        self.terms.len()
    }

    /// Stores a term, returning the key to the term.
    fn store(&mut self, term: Term) -> Result<TermKey, TermDBError> {
        let index = match TermIndex::try_from(self.terms.len()) {
            Ok(index) if index < self.term_limit => index,
            _ => {
                log::error!(target: targets::TERM_DB, "Term limit of {} reached", self.term_limit);
                return Err(TermDBError::TermsExhausted);
            }
        };

        if self.terms.try_reserve(1).is_err() {
            log::error!(target: targets::TERM_DB, "Failed to allocate space for a term");
            return Err(TermDBError::AllocationFailure);
        }
        self.terms.push(term);

        Ok(TermKey(index))
    }

    /// A fresh, unbound, variable.
    pub fn fresh_variable(&mut self) -> Result<TermKey, TermDBError> {
        let key = self.store(Term::Variable {
            stamp: self.stamp + 1,
            binding: None,
        })?;
        self.stamp += 1;
        Ok(key)
    }

    /// A compound with the given functor and arguments.
    ///
    /// Each argument must already be in the database.
    pub fn compound(
        &mut self,
        functor: Atom,
        arguments: Vec<TermKey>,
    ) -> Result<TermKey, TermDBError> {
        if let Some(missing) = arguments.iter().find(|key| !self.contains(**key)) {
            log::error!(target: targets::TERM_DB, "Compound with missing argument {missing}");
            return Err(TermDBError::InvalidKey);
        }
        self.store(Term::Compound { functor, arguments })
    }

    /// True if the key is to some term in the database.
    pub fn contains(&self, key: TermKey) -> bool {
        key.index() < self.terms.len()
    }

    /// The term with the given key.
    pub fn get(&self, key: TermKey) -> Result<&Term, TermDBError> {
        match self.terms.get(key.index()) {
            Some(term) => Ok(term),
            None => Err(TermDBError::InvalidKey),
        }
    }

    /// The term with the given key.
    ///
    /// # Safety
    /// No check is made to ensure the key is to some term in the database.
    pub unsafe fn get_unchecked(&self, key: TermKey) -> &Term {
        self.terms.get_unchecked(key.index())
    }

    /// The representative of a term.
    ///
    /// That is, the first term which is not a bound variable on the chain of bindings from the given term.
    pub fn dereference(&self, key: TermKey) -> Result<TermKey, TermDBError> {
        self.get(key)?;
        // Safety: The key was checked above, and bindings are in the database.
        Ok(unsafe { self.dereference_unchecked(key) })
    }

    /// The representative of a term.
    ///
    /// # Safety
    /// No check is made to ensure the key is to some term in the database.
    pub unsafe fn dereference_unchecked(&self, key: TermKey) -> TermKey {
        let mut representative = key;
        while let Term::Variable {
            binding: Some(next),
            ..
        } = self.get_unchecked(representative)
        {
            representative = *next;
        }
        representative
    }

    /// Binds a variable to a term.
    ///
    /// Any binding must be recorded on the trail, and so bindings are made through [Context::bind](crate::context::Context::bind).
    pub(crate) fn bind(&mut self, variable: TermKey, term: TermKey) {
        match self.terms.get_mut(variable.index()) {
            Some(Term::Variable { binding, .. }) => *binding = Some(term),
            _ => log::error!(target: targets::TERM_DB, "Attempt to bind {variable}, which is not a variable"),
        }
    }

    /// Removes the binding of a variable, if it has one.
    pub(crate) fn unbind(&mut self, variable: TermKey) {
        match self.terms.get_mut(variable.index()) {
            Some(Term::Variable { binding, .. }) => *binding = None,
            _ => log::error!(target: targets::TERM_DB, "Attempt to unbind {variable}, which is not a variable"),
        }
    }

    /// A mark of the current count of terms.
    pub fn mark(&self) -> TermMark {
        TermMark(self.terms.len())
    }

    /// Discards every term created after the mark.
    ///
    /// # Soundness
    /// Any binding to a discarded term must have been undone, see [the module documentation](crate::db::term).
    pub(crate) fn truncate(&mut self, mark: TermMark) {
        self.terms.truncate(mark.0);
    }
}
