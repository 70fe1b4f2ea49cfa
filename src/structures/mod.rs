//! Key structures, such as terms and clauses.
//!
//! # Other structures without an implementation.
//!
//! ## Programs
//!
//! A program is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! Though, as the order of clauses determines both the order in which solutions are found and whether a search terminates at all, the order of a program is part of its meaning.
//!
//! The program of a context is the sequence of clauses in the [clause database](crate::db::clause).
//!
//! ## Goal sequences
//!
//! A goal sequence is a sequence of terms still to be proven, interpreted as a conjunction and proven left to right.
//! During a search goal sequences are stored as shared cells in the [goal database](crate::db::goal).

pub mod atom;
pub mod clause;
pub mod query;
pub mod term;
