//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod freshen;
pub mod solve;
pub mod unify;
