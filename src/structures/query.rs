//! Queries, aka. a sequence of goals together with the names of variables whose values are of interest.
//!
//! ```rust
//! # use otter_prolog::config::Config;
//! # use otter_prolog::context::Context;
//! # use otter_prolog::structures::query::Query;
//! let mut the_context = Context::from_config(Config::default());
//! let x = the_context.fresh_variable().unwrap();
//! let goal = the_context.compound("p", &[x]).unwrap();
//!
//! let query = Query::new(vec![goal]).with_variable("X", x);
//! assert_eq!(query.variable("X"), Some(x));
//! ```

use crate::db::TermKey;

/// A query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    /// The goals of the query, read as a conjunction and proven left to right.
    goals: Vec<TermKey>,

    /// Named variables, whose values are read at each solution.
    variables: Vec<(String, TermKey)>,
}

impl Query {
    pub fn new(goals: Vec<TermKey>) -> Self {
        Query {
            goals,
            variables: Vec::default(),
        }
    }

    /// Adds a named variable to the query.
    pub fn with_variable(mut self, name: impl Into<String>, variable: TermKey) -> Self {
        self.variables.push((name.into(), variable));
        self
    }

    pub fn goals(&self) -> &[TermKey] {
        &self.goals
    }

    /// The named variables of the query, in the order they were added.
    pub fn variables(&self) -> impl Iterator<Item = (&str, TermKey)> {
        self.variables.iter().map(|(name, key)| (name.as_str(), *key))
    }

    /// The variable with the given name, if it was added to the query.
    pub fn variable(&self, name: &str) -> Option<TermKey> {
        self.variables
            .iter()
            .find(|(variable_name, _)| variable_name == name)
            .map(|(_, key)| *key)
    }
}
