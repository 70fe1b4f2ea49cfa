//! Databases for holding information relevant to a search.
//!
//!   - [The term database](crate::db::term)
//!     + An arena of terms, each indexed by a term key. \
//!       Terms refer to other terms by key, and the binding of a variable is a key.
//!   - [The atom database](crate::db::atom)
//!     + The names of functors and constants, each interned to an atom.
//!   - [The clause database](crate::db::clause)
//!     + The program, as a sequence of clauses. \
//!       The clauses of a program are templates, and are only used through fresh instances.
//!   - [The trail](crate::db::trail)
//!     + A record of each binding made, in order.
//!   - [The goal database](crate::db::goal)
//!     + Goal sequences, as shared cells.
//!
//! # Checkpoints
//!
//! The trail, term database, and goal database together make up the state of a search.
//! A [Checkpoint] marks each, and [backtracking](Context::backtrack_to) to a checkpoint returns each to the marked state:
//! - Every binding made after the checkpoint is undone, and then
//! - Every term and goal cell created after the checkpoint is discarded.
//!
//! A checkpoint is only meaningful for the context it was taken from, and only while the state has not been returned to some earlier checkpoint.
//! So, [backtrack_to](Context::backtrack_to) refuses any checkpoint ahead of the current state, or which would leave some remaining binding to a discarded term.

pub mod atom;
pub mod clause;
pub mod goal;
mod keys;
pub use keys::*;
pub mod term;
pub mod trail;

use crate::{
    context::Context,
    misc::log::targets::{self},
    types::err::{self},
};

use goal::GoalMark;
use term::TermMark;
use trail::TrailMark;

/// A mark of the state of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    trail: TrailMark,
    terms: TermMark,
    goals: GoalMark,
}

/// Canonical methods to record bindings, and to undo them.
impl Context {
    /// Binds `variable` to `term`, recording the binding on the trail.
    ///
    /// The variable must be unbound.
    pub(crate) fn bind(&mut self, variable: TermKey, term: TermKey) {
        log::trace!(target: targets::TRAIL, "Bind {variable} to {term}");
        self.trail.record(variable);
        self.term_db.bind(variable, term);
    }

    /// A checkpoint of the current state.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            trail: self.trail.checkpoint(),
            terms: self.term_db.mark(),
            goals: self.goal_db.mark(),
        }
    }

    /// Returns to the state of a checkpoint.
    ///
    /// An error is returned, without change to the state, if any part of the checkpoint is ahead of the current state.
    /// And, if some binding made before the checkpoint is to a term created after the checkpoint, an error is returned after the bindings made after the checkpoint are undone, without discarding any term or goal cell.
    ///
    /// # Soundness
    /// Any term created after the checkpoint is discarded, and a key to such a term should not be used after the call.
    /// In particular, a checkpoint taken before a clause was added should not be used after the clause was added.
    pub fn backtrack_to(&mut self, checkpoint: Checkpoint) -> Result<(), err::CheckpointError> {
        if self.trail.checkpoint() < checkpoint.trail
            || self.term_db.mark() < checkpoint.terms
            || self.goal_db.mark() < checkpoint.goals
        {
            log::error!(target: targets::TRAIL, "Backtrack to a checkpoint ahead of the current state");
            return Err(err::CheckpointError::AheadOfState);
        }

        self.trail.undo_to(checkpoint.trail, &mut self.term_db);

        let dangling = self.trail.bindings_before(checkpoint.trail).iter().find(|variable| {
            !checkpoint.terms.includes(**variable)
                || self
                    .term_db
                    .get(**variable)
                    .is_ok_and(|term| term.binding().is_some_and(|bound| !checkpoint.terms.includes(bound)))
        });
        if let Some(variable) = dangling {
            log::error!(target: targets::TRAIL, "Backtrack would leave {variable} bound to a discarded term");
            return Err(err::CheckpointError::DanglingBinding);
        }

        self.term_db.truncate(checkpoint.terms);
        self.goal_db.truncate(checkpoint.goals);
        Ok(())
    }

    /// Returns to the state of a checkpoint, without checking the checkpoint.
    ///
    /// # Safety
    /// The checkpoint must have been taken from the context, and every checkpoint taken after it must have been restored or discarded.
    /// Otherwise, some binding may remain to a discarded term, and unchecked access through the binding would be out of bounds.
    pub(crate) unsafe fn backtrack_to_unchecked(&mut self, checkpoint: Checkpoint) {
        self.trail.undo_to(checkpoint.trail, &mut self.term_db);
        self.term_db.truncate(checkpoint.terms);
        self.goal_db.truncate(checkpoint.goals);
    }
}
