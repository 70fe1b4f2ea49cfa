//! Tools for building terms, clauses, and queries in a context.
//!
//! Names given to the builder are interned as [atoms](crate::structures::atom), and terms are stored in the [term database](crate::db::term).
//!
//! ```rust
//! # use otter_prolog::context::Context;
//! # use otter_prolog::config::Config;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let x = the_context.fresh_variable().unwrap();
//! let one = the_context.constant("1").unwrap();
//! let list = the_context.list(&[one, x], None).unwrap();
//! let p = the_context.compound("p", &[list]).unwrap();
//!
//! let x_string = the_context.term_string(x);
//! assert_eq!(the_context.term_string(p), format!("p([1, {x_string}])"));
//! ```

pub mod samples;

use crate::{
    context::Context,
    db::{ClauseKey, TermKey},
    misc::log::targets::{self},
    structures::clause::Clause,
    types::err::{self, ErrorKind},
};

/// The functor of a non-empty list.
pub const CONS: &str = "cons";

/// The empty list.
pub const NIL: &str = "nil";

/// Methods for building terms.
impl Context {
    /// A fresh, unbound, variable.
    pub fn fresh_variable(&mut self) -> Result<TermKey, ErrorKind> {
        Ok(self.term_db.fresh_variable()?)
    }

    /// `count` fresh variables.
    pub fn fresh_variables(&mut self, count: usize) -> Result<Vec<TermKey>, ErrorKind> {
        (0..count).map(|_| self.fresh_variable()).collect()
    }

    /// A compound of the functor `name` applied to `arguments`.
    pub fn compound(&mut self, name: &str, arguments: &[TermKey]) -> Result<TermKey, ErrorKind> {
        let functor = self.atom_db.atom(name)?;
        Ok(self.term_db.compound(functor, arguments.to_vec())?)
    }

    /// A constant, i.e. a compound of the functor `name` without arguments.
    pub fn constant(&mut self, name: &str) -> Result<TermKey, ErrorKind> {
        self.compound(name, &[])
    }

    /// The empty list.
    pub fn nil(&mut self) -> Result<TermKey, ErrorKind> {
        self.constant(NIL)
    }

    /// The list whose first element is `head` and whose remaining elements are `tail`.
    pub fn cons(&mut self, head: TermKey, tail: TermKey) -> Result<TermKey, ErrorKind> {
        self.compound(CONS, &[head, tail])
    }

    /// The list of `items` followed by `tail`, or by the empty list if no tail is given.
    pub fn list(&mut self, items: &[TermKey], tail: Option<TermKey>) -> Result<TermKey, ErrorKind> {
        let mut list = match tail {
            Some(tail) => tail,
            None => self.nil()?,
        };
        for item in items.iter().rev() {
            list = self.cons(*item, list)?;
        }
        Ok(list)
    }
}

/// Methods for building programs.
impl Context {
    /// Adds the clause `head :- body` after each other clause of the program, and returns the key to the clause.
    ///
    /// The head must be a compound, and each term must be in the term database.
    ///
    /// ```rust
    /// # use otter_prolog::context::Context;
    /// # use otter_prolog::config::Config;
    /// # use otter_prolog::types::err::{ClauseDBError, ErrorKind};
    /// let mut the_context = Context::from_config(Config::default());
    /// let x = the_context.fresh_variable().unwrap();
    /// let p_x = the_context.compound("p", &[x]).unwrap();
    /// let q_x = the_context.compound("q", &[x]).unwrap();
    ///
    /// assert!(the_context.add_clause(p_x, &[q_x]).is_ok());
    /// assert_eq!(
    ///     the_context.add_clause(x, &[]),
    ///     Err(ErrorKind::ClauseDB(ClauseDBError::NonCompoundHead))
    /// );
    /// ```
    pub fn add_clause(&mut self, head: TermKey, body: &[TermKey]) -> Result<ClauseKey, ErrorKind> {
        if !self.term_db.get(head)?.is_compound() {
            log::error!(target: targets::CLAUSE_DB, "The head of a clause must be a compound");
            return Err(ErrorKind::from(err::ClauseDBError::NonCompoundHead));
        }
        for goal in body {
            self.term_db.get(*goal)?;
        }

        Ok(self.clause_db.store(Clause::new(head, body.to_vec()))?)
    }
}
