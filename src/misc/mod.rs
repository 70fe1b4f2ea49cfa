//! Miscelanous things.

pub mod log;
