//! A small logic-programming engine, in the spirit of a tiny Prolog.
//!
//! otter_prolog proves goals against an ordered database of clauses using unification and depth-first backtracking search (SLD resolution).
//! The language is deliberately restricted: terms are variables or compounds, and there is no cut, negation, arithmetic, or built-in predicate.
//! Nor is there an occurs-check, so a variable may be bound to a term which contains it.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context owns a handful of databases, and a search is viewed as manipulation of these:
//! - Terms are stored in the [term database](crate::db::term), and referred to by [keys](crate::db::TermKey).
//! - Names of functors are interned in the [atom database](crate::db::atom).
//! - The program is stored, in order, in the [clause database](crate::db::clause).
//! - Every binding of a variable is recorded on the [trail](crate::db::trail), so a search may return to any earlier state.
//! - Sequences of goals still to be proven are stored as shared cells in the [goal database](crate::db::goal).
//!
//! Useful starting points, then, may be:
//! - The [solve procedure](crate::procedures::solve) to inspect the dynamics of a search.
//! - [Unification](crate::procedures::unify) and [instantiation](crate::procedures::freshen), which a search applies at each step.
//! - The [builder] for the construction of terms, clauses, and queries.
//! - The [configuration](crate::config) to see which limits a search supports.
//!
//! # Example
//!
//! Split a list in each possible way, using the two clauses of append.
//!
//! ```rust
//! # use otter_prolog::config::Config;
//! # use otter_prolog::context::Context;
//! # use otter_prolog::procedures::solve::Control;
//! # use otter_prolog::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_append_clauses().is_ok());
//! let query = the_context.append_query(&["1", "2", "3"]).unwrap();
//!
//! let mut answers = Vec::default();
//! let report = the_context.solve(&query, |solution| {
//!     answers.push(solution.answer_string());
//!     Control::Continue
//! });
//!
//! assert_eq!(report, Ok(Report::Exhausted));
//! assert_eq!(answers.len(), 4);
//! assert_eq!(answers[1], "I = [1]\nJ = [2, 3]");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - A trace of a search, with each goal sequence and each clause tried, can be found with `RUST_LOG=resolution=trace …`
//! - Bindings and their undoing can be found with `RUST_LOG=trail=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
