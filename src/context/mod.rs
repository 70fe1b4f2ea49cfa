/*!
The context --- within which programs are built and searches take place.

A context owns each [database](crate::db) used during a search, together with the configuration and counters of the context.
As a search takes a mutable reference to a context, at most one search takes place within a context at any time, and the trail of a context belongs to that search alone.
Distinct contexts share nothing, and so may be used for independent searches.

# Example
```rust
# use otter_prolog::context::Context;
# use otter_prolog::config::Config;
# use otter_prolog::procedures::solve::Control;
# use otter_prolog::reports::Report;
# use otter_prolog::structures::query::Query;
let mut the_context = Context::from_config(Config::default());

// likes(mary, wine).
let mary = the_context.constant("mary").unwrap();
let wine = the_context.constant("wine").unwrap();
let fact = the_context.compound("likes", &[mary, wine]).unwrap();
assert!(the_context.add_clause(fact, &[]).is_ok());

// ?- likes(mary, X).
let x = the_context.fresh_variable().unwrap();
let goal = the_context.compound("likes", &[mary, x]).unwrap();
let query = Query::new(vec![goal]).with_variable("X", x);

let mut answer = String::default();
let report = the_context.solve(&query, |solution| {
    answer = solution.answer_string();
    Control::Continue
});

assert_eq!(report, Ok(Report::Exhausted));
assert_eq!(answer, "X = wine");
assert_eq!(the_context.counters.solutions, 1);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod strings;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, goal::GoalDB, term::TermDB, trail::Trail},
    reports::Report,
};

use callbacks::CallbackTerminate;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input, and no search has been made.
    Input,

    /// A search is in progress.
    Solving,

    /// A search has finished, for the reason given.
    Finished(Report),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Finished(report) => write!(f, "Finished ({report})"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/search.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The term database.
    /// See [db::term](crate::db::term) for details.
    pub term_db: TermDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The goal database.
    /// See [db::goal](crate::db::goal) for details.
    pub goal_db: GoalDB,

    /// The trail.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// Terminates a search, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            term_db: TermDB::new(&config),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            goal_db: GoalDB::default(),
            trail: Trail::default(),

            config,

            counters: Counters::default(),
            state: ContextState::Input,

            callback_terminate: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }
}
