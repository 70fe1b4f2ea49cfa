/*!
A database of clauses, aka. the program of a context.

Clauses are stored in the order they are added, and the [key](ClauseKey) of a clause is its position.
The order of clauses is the order in which clauses are tried during a search, and is part of the meaning of a program.

```rust
# use otter_prolog::config::Config;
# use otter_prolog::context::Context;
let mut the_context = Context::from_config(Config::default());
let [base, step] = the_context.add_append_clauses().unwrap();

assert_eq!(the_context.clause_db.keys().collect::<Vec<_>>(), vec![base, step]);

the_context.clause_db.reverse();
assert!(!the_context.clause_db.get(base).unwrap().is_fact());
assert!(the_context.clause_db.get(step).unwrap().is_fact());
```
*/

use crate::{
    db::{ClauseIndex, ClauseKey},
    misc::log::targets::{self},
    structures::clause::Clause,
    types::err::ClauseDBError,
};

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    clauses: Vec<Clause>,
}

impl ClauseDB {
    /// Stores a clause after every other clause, returning the key to the clause.
    ///
    /// No check is made on the terms of the clause, see [Context::add_clause](crate::context::Context::add_clause).
    pub fn store(&mut self, clause: Clause) -> Result<ClauseKey, ClauseDBError> {
        let index = match ClauseIndex::try_from(self.clauses.len()) {
            Ok(index) => index,
            Err(_) => {
                log::error!(target: targets::CLAUSE_DB, "No more clause keys");
                return Err(ClauseDBError::StorageExhausted);
            }
        };
        self.clauses.push(clause);

        let key = ClauseKey(index);
        log::info!(target: targets::CLAUSE_DB, "Stored clause: {key}");
        Ok(key)
    }

    /// The clause with the given key.
    pub fn get(&self, key: ClauseKey) -> Result<&Clause, ClauseDBError> {
        match self.clauses.get(key.index()) {
            Some(clause) => Ok(clause),
            None => Err(ClauseDBError::InvalidKey),
        }
    }

    /// A count of clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The key to each clause, in program order.
    pub fn keys(&self) -> impl Iterator<Item = ClauseKey> {
        (0..self.clauses.len() as ClauseIndex).map(ClauseKey)
    }

    /// Each clause together with its key, in program order.
    pub fn clauses(&self) -> impl Iterator<Item = (ClauseKey, &Clause)> {
        self.keys().zip(self.clauses.iter())
    }

    /// Exchanges the position of two clauses in the program.
    ///
    /// As keys are positions, after the swap the key `a` is to the clause previously keyed by `b`, and vice versa.
    pub fn swap(&mut self, a: ClauseKey, b: ClauseKey) -> Result<(), ClauseDBError> {
        if a.index() >= self.clauses.len() || b.index() >= self.clauses.len() {
            return Err(ClauseDBError::InvalidKey);
        }
        self.clauses.swap(a.index(), b.index());
        Ok(())
    }

    /// Reverses the order of the program.
    ///
    /// As keys are positions, the key of each clause changes.
    pub fn reverse(&mut self) {
        self.clauses.reverse();
    }
}
