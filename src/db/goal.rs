/*!
A database of goal sequences.

A goal sequence is stored as a chain of cells, each cell holding a goal and (perhaps) the key to the cell of the next goal.
The empty sequence is `None`.

When a goal is resolved with a clause the goals of the body are placed before the rest of the sequence.
As cells are never changed, the rest of the sequence is shared by the new sequence rather than copied.

Like the [term database](crate::db::term), cells are only added to the end of the database, and the database is truncated to a [GoalMark] on backtracking.
*/

use crate::{
    db::{GoalIndex, GoalKey, TermKey},
    types::err::GoalDBError,
};

/// A goal sequence, as the key to the cell of its first goal.
pub type Goals = Option<GoalKey>;

/// A cell of a goal sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalCell {
    /// The goal.
    pub term: TermKey,

    /// The rest of the sequence.
    pub next: Goals,
}

/// A mark of the count of cells in a goal database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GoalMark(usize);

#[derive(Default)]
pub struct GoalDB {
    cells: Vec<GoalCell>,
}

impl GoalDB {
    /// A count of cells in the database.
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// The sequence of `term` followed by `rest`.
    pub fn push(&mut self, term: TermKey, rest: Goals) -> Result<GoalKey, GoalDBError> {
        let index = match GoalIndex::try_from(self.cells.len()) {
            Ok(index) => index,
            Err(_) => return Err(GoalDBError::AllocationFailure),
        };
        if self.cells.try_reserve(1).is_err() {
            return Err(GoalDBError::AllocationFailure);
        }
        self.cells.push(GoalCell { term, next: rest });
        Ok(GoalKey(index))
    }

    /// The sequence of `terms`, in order, followed by `rest`.
    pub fn prepend(&mut self, terms: &[TermKey], rest: Goals) -> Result<Goals, GoalDBError> {
        let mut sequence = rest;
        for term in terms.iter().rev() {
            sequence = Some(self.push(*term, sequence)?);
        }
        Ok(sequence)
    }

    /// The cell with the given key.
    pub fn get(&self, key: GoalKey) -> Result<&GoalCell, GoalDBError> {
        match self.cells.get(key.index()) {
            Some(cell) => Ok(cell),
            None => Err(GoalDBError::InvalidKey),
        }
    }

    /// An iterator over the goals of a sequence, in order.
    pub fn goals(&self, goals: Goals) -> impl Iterator<Item = TermKey> + '_ {
        let mut next = goals;
        std::iter::from_fn(move || {
            let cell = self.get(next?).ok()?;
            next = cell.next;
            Some(cell.term)
        })
    }

    /// A mark of the current count of cells.
    pub fn mark(&self) -> GoalMark {
        GoalMark(self.cells.len())
    }

    /// Discards every cell created after the mark.
    pub(crate) fn truncate(&mut self, mark: GoalMark) {
        self.cells.truncate(mark.0);
    }
}
