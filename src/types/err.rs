//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - None of these are used to control the flow of a search --- failure to unify is a `false`, and backtracking is the normal mode of operation.
//! - A search which does not terminate is not an error, and is only guarded against by the limits of a [config](crate::config::Config).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Checkpoint(CheckpointError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    GoalDB(GoalDBError),
    TermDB(TermDBError),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors when returning to a checkpoint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckpointError {
    /// Some part of the checkpoint is ahead of the current state.
    /// E.g. the state has already been returned to some earlier checkpoint, or the checkpoint is from another context.
    AheadOfState,

    /// Some binding made before the checkpoint is to a term created after the checkpoint.
    DanglingBinding,
}

impl From<CheckpointError> for ErrorKind {
    fn from(e: CheckpointError) -> Self {
        ErrorKind::Checkpoint(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// The head of a clause must be a compound, and some other term was given.
    NonCompoundHead,

    /// A key to a clause not in the database.
    InvalidKey,

    /// All possible keys have been used.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when configuring a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value given to the named option is outside the bounds of the option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors in the goal database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GoalDBError {
    /// The database could not grow.
    AllocationFailure,

    /// A key to a goal cell not in the database.
    InvalidKey,
}

impl From<GoalDBError> for ErrorKind {
    fn from(e: GoalDBError) -> Self {
        ErrorKind::GoalDB(e)
    }
}

/// Errors in the term database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TermDBError {
    /// The database could not grow.
    /// Fatal to a search, as otherwise some malformed term would be used.
    AllocationFailure,

    /// The configured limit on the count of terms has been reached.
    TermsExhausted,

    /// A key to a term not in the database.
    /// E.g. a key to a term created during a search, after the search.
    InvalidKey,
}

impl From<TermDBError> for ErrorKind {
    fn from(e: TermDBError) -> Self {
        ErrorKind::TermDB(e)
    }
}
