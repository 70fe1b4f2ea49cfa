//! Clauses, aka. a head together with a body of goals, interpreted as: the head holds if each goal of the body holds.
//!
//! - A clause with an empty body is a *fact*.
//! - A clause with a non-empty body is a *rule*.
//!
//! Clauses stored in the [clause database](crate::db::clause) are templates.
//! They are never unified, and instead each use of a clause during a search is of a [fresh](crate::procedures::freshen) instance of the clause.

use crate::db::TermKey;

/// A clause, as a head and a body of goals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    /// The head of the clause, always a compound.
    pub head: TermKey,

    /// The goals of the body of the clause, in order.
    pub body: Vec<TermKey>,
}

impl Clause {
    pub fn new(head: TermKey, body: Vec<TermKey>) -> Self {
        Clause { head, body }
    }

    /// True if the body of the clause is empty.
    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }

    /// The head followed by each goal of the body.
    pub fn terms(&self) -> impl Iterator<Item = &TermKey> {
        std::iter::once(&self.head).chain(self.body.iter())
    }
}
