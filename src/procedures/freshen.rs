//! Fresh instances of clauses.
//!
//! # Overview
//!
//! The clauses of a program are templates, and a clause is only used during a search through an instance of the clause whose variables are distinct from every variable in use.
//!
//! [instantiate](Context::instantiate) copies the head and each goal of a clause, using a single substitution from terms of the clause to terms of the copy:
//! - Each variable is replaced by a fresh, unbound, variable.
//! - Each compound is replaced by a compound with the same functor, whose arguments are the copies of the arguments.
//!
//! As the substitution is shared across the head and body, a variable which occurs more than once in a clause is replaced by the same fresh variable at each occurrence.
//! And, as compounds are recorded in the substitution as well as variables, a term shared within a clause is shared within the instance.
//!
//! The structure of the clause is copied as stored, and bindings are not followed.
//! In particular, a variable of a template is always replaced by a fresh variable, regardless of whether the variable has been bound.
//!
//! # Example
//!
//! ```rust
//! # use otter_prolog::config::Config;
//! # use otter_prolog::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//! let [base, _step] = the_context.add_append_clauses().unwrap();
//!
//! let instance = the_context.freshen(base).unwrap();
//! let template = the_context.clause_db.get(base).unwrap().clone();
//!
//! assert_ne!(instance.head, template.head);
//! assert!(instance.is_fact());
//! ```

use std::collections::HashMap;

use crate::{
    context::Context,
    db::{term::TermDB, ClauseKey, TermKey},
    misc::log::targets::{self},
    structures::{clause::Clause, term::Term},
    types::err::{ErrorKind, TermDBError},
};

/// A map from terms of a template to terms of an instance.
type Substitution = HashMap<TermKey, TermKey>;

impl Context {
    /// A fresh instance of the clause with the given key.
    ///
    /// For documentation, see [procedures::freshen](crate::procedures::freshen).
    pub fn freshen(&mut self, key: ClauseKey) -> Result<Clause, ErrorKind> {
        let clause = self.clause_db.get(key)?;
        let instance = instantiate_in(&mut self.term_db, clause)?;
        log::trace!(target: targets::FRESHEN, "Instance of {key}: {instance:?}");
        Ok(instance)
    }

    /// A fresh instance of a clause.
    pub fn instantiate(&mut self, clause: &Clause) -> Result<Clause, ErrorKind> {
        Ok(instantiate_in(&mut self.term_db, clause)?)
    }
}

fn instantiate_in(term_db: &mut TermDB, clause: &Clause) -> Result<Clause, TermDBError> {
    let mut substitution = Substitution::default();

    let head = copy_term(term_db, clause.head, &mut substitution)?;
    let mut body = Vec::with_capacity(clause.body.len());
    for goal in &clause.body {
        body.push(copy_term(term_db, *goal, &mut substitution)?);
    }

    Ok(Clause::new(head, body))
}

/// Copies a term, extending the substitution with each term copied.
///
/// Terms still to copy are kept on a stack, and a compound is built once each of its arguments has been copied.
fn copy_term(
    term_db: &mut TermDB,
    key: TermKey,
    substitution: &mut Substitution,
) -> Result<TermKey, TermDBError> {
    let mut tasks = vec![Step::Visit(key)];

    while let Some(task) = tasks.pop() {
        match task {
            Step::Visit(key) => {
                if substitution.contains_key(&key) {
                    continue;
                }
                match term_db.get(key)? {
                    Term::Variable { .. } => {
                        let fresh = term_db.fresh_variable()?;
                        substitution.insert(key, fresh);
                    }

                    Term::Compound { arguments, .. } => {
                        tasks.push(Step::Build(key));
                        tasks.extend(arguments.iter().rev().map(|argument| Step::Visit(*argument)));
                    }
                }
            }

            Step::Build(key) => {
                if substitution.contains_key(&key) {
                    continue;
                }
                let Term::Compound { functor, arguments } = term_db.get(key)? else {
                    return Err(TermDBError::InvalidKey);
                };
                let functor = *functor;
                let copied_arguments = arguments
                    .iter()
                    .map(|argument| substitution.get(argument).copied().ok_or(TermDBError::InvalidKey))
                    .collect::<Result<Vec<_>, _>>()?;

                let copy = term_db.compound(functor, copied_arguments)?;
                substitution.insert(key, copy);
            }
        }
    }

    substitution.get(&key).copied().ok_or(TermDBError::InvalidKey)
}

/// A step of copying a term.
enum Step {
    /// Copy the term, unless already copied.
    Visit(TermKey),

    /// Build the copy of a compound from the copies of its arguments.
    Build(TermKey),
}
