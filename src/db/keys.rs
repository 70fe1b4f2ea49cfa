/// The index of a term in the term database.
pub type TermIndex = u32;

/// The index of a clause in the clause database.
pub type ClauseIndex = u32;

/// The index of a goal cell in the goal database.
pub type GoalIndex = u32;

/// A key to access a term stored in the [term database](crate::db::term).
///
/// Within the term database terms are stored in a vector, and the key is the index of the term.
/// Keys are stable for the life of the term, and so the key of a variable is the identity of the variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermKey(pub(crate) TermIndex);

impl TermKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TermKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Term({})", self.0)
    }
}

/// A key to access a clause stored in the [clause database](crate::db::clause).
///
/// The key of a clause is the position of the clause in the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey(pub(crate) ClauseIndex);

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Clause({})", self.0)
    }
}

/// A key to access a goal cell stored in the [goal database](crate::db::goal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GoalKey(pub(crate) GoalIndex);

impl GoalKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for GoalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Goal({})", self.0)
    }
}
