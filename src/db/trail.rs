//! The trail, an undo log of the bindings of variables.
//!
//! Each time a variable is bound the variable is recorded on the trail, and a [checkpoint](Trail::checkpoint) of the trail is a mark of the count of bindings made so far.
//! [Undoing](Trail::undo_to) to a checkpoint removes the binding of every variable recorded after the checkpoint, most recent first.
//!
//! As bindings are only made to unbound variables, whether a variable is bound is fully determined by whether the variable is on the trail.
//! So, undoing to a checkpoint restores the bindings of every variable to those at the checkpoint.
//!
//! Checkpoints are strictly nested: a checkpoint taken after another is undone before the other.
//! This is ensured by construction in the [solve procedure](crate::procedures::solve), as each attempt to use a clause is made from a checkpoint which is restored before the next attempt.
//!
//! ```rust
//! # use otter_prolog::config::Config;
//! # use otter_prolog::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//! let x = the_context.fresh_variable().unwrap();
//! let a = the_context.constant("a").unwrap();
//!
//! let checkpoint = the_context.trail.checkpoint();
//! assert_eq!(the_context.unify(x, a), Ok(true));
//! assert_eq!(the_context.term_db.dereference(x), Ok(a));
//!
//! the_context.trail.undo_to(checkpoint, &mut the_context.term_db);
//! assert_eq!(the_context.term_db.dereference(x), Ok(x));
//! ```

use crate::{
    db::{term::TermDB, TermKey},
    misc::log::targets::{self},
};

/// A mark of the count of bindings recorded on a trail.
///
/// Marks are only obtained from [Trail::checkpoint].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrailMark(usize);

/// An undo log of the variables bound, in order of binding.
#[derive(Default)]
pub struct Trail {
    /// Each bound variable, in order of binding.
    variables: Vec<TermKey>,
}

impl Trail {
    /// A mark of the current count of bindings.
    pub fn checkpoint(&self) -> TrailMark {
        TrailMark(self.variables.len())
    }

    /// Records a variable as bound.
    /// To be called only as the variable is bound, see [Context::bind](crate::context::Context::bind).
    pub fn record(&mut self, variable: TermKey) {
        self.variables.push(variable);
    }

    /// Removes the binding of each variable recorded after `mark`, most recent first.
    ///
    /// After the call the count of bindings on the trail is that of the mark.
    /// A mark above the current count of bindings is from some other trail, or was taken before an undo to an earlier mark, and is ignored.
    pub fn undo_to(&mut self, mark: TrailMark, term_db: &mut TermDB) {
        if mark.0 > self.variables.len() {
            log::error!(target: targets::TRAIL, "Undo to mark {} above the trail of {} bindings", mark.0, self.variables.len());
            return;
        }
        log::trace!(target: targets::TRAIL, "Undo {} bindings", self.variables.len().saturating_sub(mark.0));

        while self.variables.len() > mark.0 {
            if let Some(variable) = self.variables.pop() {
                term_db.unbind(variable);
            }
        }
    }

    /// The count of bindings recorded.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True if no binding is recorded.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The variables bound before `mark`, in order of binding.
    pub fn bindings_before(&self, mark: TrailMark) -> &[TermKey] {
        self.variables.get(..mark.0).unwrap_or(&self.variables)
    }

    /// The variables bound after `mark`, in order of binding.
    pub fn bindings_since(&self, mark: TrailMark) -> &[TermKey] {
        self.variables.get(mark.0..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn bind(trail: &mut Trail, term_db: &mut TermDB, variable: TermKey, term: TermKey) {
        trail.record(variable);
        term_db.bind(variable, term);
    }

    #[test]
    fn undo_restores_in_order() {
        let mut term_db = TermDB::new(&Config::default());
        let mut trail = Trail::default();

        let x = term_db.fresh_variable().unwrap();
        let y = term_db.fresh_variable().unwrap();
        let z = term_db.fresh_variable().unwrap();
        let a = term_db.compound(0, vec![]).unwrap();

        bind(&mut trail, &mut term_db, x, a);
        let mark = trail.checkpoint();
        bind(&mut trail, &mut term_db, y, a);
        bind(&mut trail, &mut term_db, z, y);

        assert_eq!(trail.bindings_since(mark), &[y, z]);

        trail.undo_to(mark, &mut term_db);

        assert_eq!(trail.checkpoint(), mark);
        assert_eq!(term_db.get(x).unwrap().binding(), Some(a));
        assert!(term_db.get(y).unwrap().is_unbound());
        assert!(term_db.get(z).unwrap().is_unbound());
    }

    #[test]
    fn undo_is_idempotent() {
        let mut term_db = TermDB::new(&Config::default());
        let mut trail = Trail::default();

        let x = term_db.fresh_variable().unwrap();
        let a = term_db.compound(0, vec![]).unwrap();

        let mark = trail.checkpoint();
        bind(&mut trail, &mut term_db, x, a);

        trail.undo_to(mark, &mut term_db);
        trail.undo_to(mark, &mut term_db);

        assert!(trail.is_empty());
        assert!(term_db.get(x).unwrap().is_unbound());
    }

    #[test]
    fn mark_above_trail_is_ignored() {
        let mut term_db = TermDB::new(&Config::default());
        let mut trail = Trail::default();

        let x = term_db.fresh_variable().unwrap();
        let y = term_db.fresh_variable().unwrap();
        let a = term_db.compound(0, vec![]).unwrap();

        let start = trail.checkpoint();
        bind(&mut trail, &mut term_db, x, a);
        bind(&mut trail, &mut term_db, y, a);
        let above = trail.checkpoint();
        trail.undo_to(start, &mut term_db);

        bind(&mut trail, &mut term_db, x, a);
        trail.undo_to(above, &mut term_db);

        assert_eq!(trail.len(), 1);
        assert_eq!(trail.bindings_before(above), &[x]);
        assert_eq!(term_db.get(x).unwrap().binding(), Some(a));
    }

    #[test]
    fn nested_checkpoints() {
        let mut term_db = TermDB::new(&Config::default());
        let mut trail = Trail::default();

        let variables = (0..6)
            .map(|_| term_db.fresh_variable().unwrap())
            .collect::<Vec<_>>();
        let a = term_db.compound(0, vec![]).unwrap();

        let mut marks = Vec::default();
        for variable in &variables {
            marks.push(trail.checkpoint());
            bind(&mut trail, &mut term_db, *variable, a);
        }

        for (count, mark) in marks.into_iter().enumerate().rev() {
            trail.undo_to(mark, &mut term_db);
            assert_eq!(trail.len(), count);
            for (index, variable) in variables.iter().enumerate() {
                let term = term_db.get(*variable).unwrap();
                assert_eq!(term.is_unbound(), index >= count);
            }
        }
    }
}
