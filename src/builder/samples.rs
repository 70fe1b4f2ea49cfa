//! A sample program: append, on lists built from `cons` and `nil`.
//!
//! ```none
//! app(nil, X, X).
//! app(cons(H, L), M, cons(H, N)) :- app(L, M, N).
//! ```
//!
//! With the query `app(I, J, [1, 2, 3])` each way to split the list `[1, 2, 3]` in two is found.

use crate::{
    context::Context,
    db::ClauseKey,
    structures::query::Query,
    types::err::ErrorKind,
};

/// The functor of append.
pub const APPEND: &str = "app";

impl Context {
    /// Adds the two clauses of append to the program, base case first, and returns their keys.
    pub fn add_append_clauses(&mut self) -> Result<[ClauseKey; 2], ErrorKind> {
        // app(nil, X, X).
        let nil = self.nil()?;
        let x = self.fresh_variable()?;
        let base_head = self.compound(APPEND, &[nil, x, x])?;
        let base = self.add_clause(base_head, &[])?;

        // app(cons(H, L), M, cons(H, N)) :- app(L, M, N).
        let [h, l, m, n] = [
            self.fresh_variable()?,
            self.fresh_variable()?,
            self.fresh_variable()?,
            self.fresh_variable()?,
        ];
        let h_l = self.cons(h, l)?;
        let h_n = self.cons(h, n)?;
        let step_head = self.compound(APPEND, &[h_l, m, h_n])?;
        let step_goal = self.compound(APPEND, &[l, m, n])?;
        let step = self.add_clause(step_head, &[step_goal])?;

        Ok([base, step])
    }

    /// The query `app(I, J, [items])`, where each item is a constant.
    pub fn append_query(&mut self, items: &[&str]) -> Result<Query, ErrorKind> {
        let constants = items
            .iter()
            .map(|item| self.constant(item))
            .collect::<Result<Vec<_>, _>>()?;
        let list = self.list(&constants, None)?;

        let i = self.fresh_variable()?;
        let j = self.fresh_variable()?;
        let goal = self.compound(APPEND, &[i, j, list])?;

        Ok(Query::new(vec![goal])
            .with_variable("I", i)
            .with_variable("J", j))
    }
}
