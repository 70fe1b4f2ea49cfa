use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Counters are reset at the start of each search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of solutions found.
    pub solutions: usize,

    /// A count of attempts to unify a goal with the head of a (fresh instance of a) clause.
    pub inferences: usize,

    /// A count of choice points made, i.e. of goal sequences which have been given to some clause.
    pub choice_points: usize,

    /// The greatest depth of resolution reached.
    pub max_depth: usize,

    /// The time taken during a search.
    pub time: Duration,
}
