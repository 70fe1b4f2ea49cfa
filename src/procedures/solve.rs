//! Proves the goals of a query against the program of a context.
//!
//! # Overview
//!
//! [solve](Context::solve) is depth-first SLD resolution: the leftmost goal of a goal sequence is unified with the head of a fresh instance of each clause in program order, and on success the goals of the body of the instance are placed before the remaining goals.
//! A goal sequence without goals is a solution.
//!
//! Each point at which some clause is tried against a goal sequence is a *choice point*, and the search keeps a stack of choice points rather than recursing.
//! A choice point holds:
//! - The goal sequence.
//! - The next clause to try.
//! - A [checkpoint](crate::db::Checkpoint) of the state before any clause was tried.
//! - The depth of the choice point, i.e. the count of resolution steps made to reach the goal sequence.
//!
//! The top of the stack is always the next choice point to use, and using a choice point is:
//!
//! ```none
//!                 +-----------------------------------------+
//!                 |                                         |
//!                 ⌄                                         |
//!   +-----------------------------+   clauses exhausted   +-----+
//! --| backtrack to the checkpoint |---------------------->| pop |
//!   +-----------------------------+                       +-----+
//!                 |
//!                 | freshen the next clause
//!                 ⌄
//!   +-----------------------------+   no match
//!   |   unify goal and head       |--------------> try the next clause
//!   +-----------------------------+
//!                 |
//!                 | body, followed by the remaining goals
//!                 ⌄
//!        +-----------------+
//!        | empty sequence? |-----> solution, then try the next clause
//!        +-----------------+
//!                 |
//!                 | otherwise
//!                 ⌄
//!   push a choice point for the sequence
//! ```
//!
//! As the state is returned to the checkpoint of a choice point before *every* attempt, whether or not the previous attempt succeeded, bindings made while trying one clause are never seen while trying another.
//! And, as the stack is last in first out, the order of attempts (and so of solutions) is the order of the recursive presentation of SLD resolution.
//!
//! When the stack is empty every way to prove the query has been tried.
//! Before returning, the state is returned to that at the call, so every binding made during the search is undone and every term and goal created during the search is discarded.
//!
//! # Solutions
//!
//! The callback given to [solve](Context::solve) is called at each solution, with a [Solution] through which the bindings of the solution may be read.
//! The search continues if the callback returns [Control::Continue] and stops if the callback returns [Control::Stop].
//!
//! # Limits
//!
//! A search need not terminate.
//! Before each attempt to use a clause the limits of the [config](crate::config) are checked, together with any [terminate callback](crate::context::callbacks), and the search stops with a corresponding [Report] if some limit has been reached.
//!
//! # Example
//!
//! ```rust
//! # use otter_prolog::config::Config;
//! # use otter_prolog::context::Context;
//! # use otter_prolog::procedures::solve::Control;
//! # use otter_prolog::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! let _ = the_context.add_append_clauses().unwrap();
//! let query = the_context.append_query(&["1", "2"]).unwrap();
//!
//! let mut first = None;
//! let report = the_context.solve(&query, |solution| {
//!     first = solution.binding("J");
//!     Control::Stop
//! });
//!
//! assert_eq!(report, Ok(Report::Stopped));
//! assert_eq!(first.as_deref(), Some("[1, 2]"));
//! ```
//!
//! # Logs
//!
//! At the `trace` level the `resolution` target logs each goal sequence as `solve@depth: goals`, each clause instance tried as `try: clause`, and each failure to unify as `nomatch.`.

use std::time::Instant;

use crate::{
    context::{Context, ContextState, Counters},
    db::{Checkpoint, ClauseIndex, ClauseKey, GoalKey},
    misc::log::targets::{self},
    reports::{solution::Solution, Report},
    structures::query::Query,
    types::err::ErrorKind,
};

/// Whether a search continues after a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Search for further solutions.
    Continue,

    /// End the search.
    Stop,
}

/// A goal sequence, together with the state of the attempts to prove the sequence.
#[derive(Clone, Copy, Debug)]
struct ChoicePoint {
    /// The goal sequence, which is never empty.
    goals: GoalKey,

    /// The position of the next clause to try.
    next_clause: ClauseIndex,

    /// The state before any clause was tried.
    checkpoint: Checkpoint,

    depth: usize,
}

impl Context {
    /// Searches for each solution to `query`, calling `on_solution` at each.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve(
        &mut self,
        query: &Query,
        mut on_solution: impl FnMut(&Solution) -> Control,
    ) -> Result<Report, ErrorKind> {
        let total_time = Instant::now();

        self.counters = Counters::default();
        self.state = ContextState::Solving;

        let root = self.checkpoint();
        let result = self.search(query, &mut on_solution, total_time);
        // Safety: Every checkpoint of the search was taken after the root.
        unsafe { self.backtrack_to_unchecked(root) };

        self.counters.time = total_time.elapsed();

        match result {
            Ok(report) => {
                log::info!(target: targets::RESOLUTION, "Search finished: {report}");
                self.state = ContextState::Finished(report);
                Ok(report)
            }

            Err(e) => {
                log::error!(target: targets::RESOLUTION, "Search failed: {e:?}");
                self.state = ContextState::Input;
                Err(e)
            }
        }
    }

    /// The search loop of [solve](Context::solve), which leaves backtracking to the start of the search to the caller.
    fn search(
        &mut self,
        query: &Query,
        on_solution: &mut impl FnMut(&Solution) -> Control,
        total_time: Instant,
    ) -> Result<Report, ErrorKind> {
        for goal in query.goals() {
            self.term_db.get(*goal)?;
        }

        let Some(goals) = self.goal_db.prepend(query.goals(), None)? else {
            // The empty query holds, once.
            return Ok(self
                .note_solution(query, on_solution)
                .unwrap_or(Report::Exhausted));
        };

        let mut choice_points = vec![ChoicePoint {
            goals,
            next_clause: 0,
            checkpoint: self.checkpoint(),
            depth: 0,
        }];
        self.counters.choice_points += 1;

        while let Some(choice_point) = choice_points.last_mut() {
            if let Some(report) = self.check_limits(total_time) {
                return Ok(report);
            }

            let ChoicePoint {
                goals,
                next_clause,
                checkpoint,
                depth,
            } = *choice_point;

            if next_clause as usize >= self.clause_db.count() {
                choice_points.pop();
                continue;
            }
            choice_point.next_clause += 1;

            // Safety: Choice points above this one have been popped, and so the checkpoint is the most recent in use.
            unsafe { self.backtrack_to_unchecked(checkpoint) };

            if next_clause == 0 && log::log_enabled!(target: targets::RESOLUTION, log::Level::Trace) {
                log::trace!(target: targets::RESOLUTION, "solve@{depth}: {}", self.goals_string(Some(goals)));
            }

            let cell = *self.goal_db.get(goals)?;
            let instance = self.freshen(ClauseKey(next_clause))?;
            self.counters.inferences += 1;

            if log::log_enabled!(target: targets::RESOLUTION, log::Level::Trace) {
                log::trace!(target: targets::RESOLUTION, "try: {}", self.clause_string(&instance));
            }

            // Safety: Goals are checked when given as part of a query, or are from an instance of a clause.
            if !unsafe { self.unify_unchecked(cell.term, instance.head) } {
                log::trace!(target: targets::RESOLUTION, "nomatch.");
                continue;
            }

            match self.goal_db.prepend(&instance.body, cell.next)? {
                None => {
                    if let Some(report) = self.note_solution(query, on_solution) {
                        return Ok(report);
                    }
                }

                Some(goals) => {
                    choice_points.push(ChoicePoint {
                        goals,
                        next_clause: 0,
                        checkpoint: self.checkpoint(),
                        depth: depth + 1,
                    });
                    self.counters.choice_points += 1;
                    self.counters.max_depth = std::cmp::max(self.counters.max_depth, depth + 1);
                }
            }
        }

        Ok(Report::Exhausted)
    }

    /// Notes a solution, returning a report if the search should stop.
    fn note_solution(
        &mut self,
        query: &Query,
        on_solution: &mut impl FnMut(&Solution) -> Control,
    ) -> Option<Report> {
        let index = self.counters.solutions;
        self.counters.solutions += 1;
        log::info!(target: targets::RESOLUTION, "Solution {index}");

        let control = on_solution(&Solution::new(self, query, index));

        let solution_limit = self.config.solution_limit.value;
        match control {
            Control::Stop => Some(Report::Stopped),
            Control::Continue if solution_limit != 0 && self.counters.solutions >= solution_limit => {
                Some(Report::Stopped)
            }
            Control::Continue => None,
        }
    }

    /// A report, if some limit on the search has been reached.
    fn check_limits(&mut self, total_time: Instant) -> Option<Report> {
        let inference_limit = self.config.inference_limit.value;
        if inference_limit != 0 && self.counters.inferences >= inference_limit {
            log::info!(target: targets::RESOLUTION, "Inference limit of {inference_limit} reached");
            return Some(Report::InferenceLimit);
        }

        let time_limit = self.config.time_limit.value;
        if !time_limit.is_zero() && total_time.elapsed() > time_limit {
            return Some(Report::TimeUp);
        }

        if self.check_callback_terminate() {
            return Some(Report::Stopped);
        }

        None
    }
}
