//! A view of a context at a solution.
//!
//! A [Solution] is given to the callback of [solve](crate::procedures::solve) each time every goal of a query has been proven.
//! The bindings of the context are those of the solution only for the duration of the callback, and so a solution borrows the context.
//!
//! ```rust
//! # use otter_prolog::config::Config;
//! # use otter_prolog::context::Context;
//! # use otter_prolog::procedures::solve::Control;
//! let mut the_context = Context::from_config(Config::default());
//! let _ = the_context.add_append_clauses().unwrap();
//! let query = the_context.append_query(&["1"]).unwrap();
//!
//! let mut bindings = Vec::default();
//! let _ = the_context.solve(&query, |solution| {
//!     for (name, value) in solution.bindings() {
//!         bindings.push(format!("{name}: {value}"));
//!     }
//!     Control::Continue
//! });
//!
//! assert_eq!(bindings, vec!["I: []", "J: [1]", "I: [1]", "J: []"]);
//! ```

use crate::{
    context::Context,
    db::TermKey,
    structures::query::Query,
    types::err::ErrorKind,
};

/// A solution to a query.
pub struct Solution<'s> {
    context: &'s Context,
    query: &'s Query,
    index: usize,
}

impl<'s> Solution<'s> {
    pub(crate) fn new(context: &'s Context, query: &'s Query, index: usize) -> Self {
        Solution {
            context,
            query,
            index,
        }
    }

    /// The position of the solution among the solutions of a search, from zero.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The context, with the bindings of the solution.
    pub fn context(&self) -> &Context {
        self.context
    }

    /// The representative of a term at the solution.
    pub fn value_of(&self, term: TermKey) -> Result<TermKey, ErrorKind> {
        Ok(self.context.term_db.dereference(term)?)
    }

    /// A string of the value of the named variable of the query, if the query has such a variable.
    pub fn binding(&self, name: &str) -> Option<String> {
        self.query
            .variable(name)
            .map(|variable| self.context.term_string(variable))
    }

    /// A string of a term at the solution.
    pub fn term_string(&self, term: TermKey) -> String {
        self.context.term_string(term)
    }

    /// The name of each variable of the query together with a string of its value, in the order the variables were added.
    pub fn bindings(&self) -> impl Iterator<Item = (&'s str, String)> + '_ {
        self.query
            .variables()
            .map(|(name, variable)| (name, self.context.term_string(variable)))
    }

    /// The solution as text: a line `name = value` for each variable of the query, or `yes` if the query has no variables.
    pub fn answer_string(&self) -> String {
        let lines = self
            .bindings()
            .map(|(name, value)| format!("{name} = {value}"))
            .collect::<Vec<_>>();

        match lines.is_empty() {
            true => "yes".to_owned(),
            false => lines.join("\n"),
        }
    }
}
