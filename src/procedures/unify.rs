//! Unification of terms.
//!
//! # Overview
//!
//! Two terms unify if there is some collection of bindings on which the terms are the same.
//! [unify](Context::unify) makes such a collection of bindings, if possible, recording each binding on the [trail](crate::db::trail).
//!
//! Each pair of terms to unify is dereferenced, and then:
//! 1. If the representatives are the same term, there is nothing to do.
//! 2. If both are unbound variables, the younger variable (with the greater stamp) is bound to the older.
//! 3. If one is an unbound variable and the other a compound, the variable is bound to the compound.
//! 4. If both are compounds, unification fails unless the functors and arities are equal, and otherwise each pair of arguments is unified, from left to right.
//!
//! As the direction of a binding between variables is fixed by the stamps of the variables, unify(*a*, *b*) makes the same bindings as unify(*b*, *a*).
//!
//! # Partial work
//!
//! On failure, unification does *not* undo the bindings made before the failure was found.
//! Instead, the caller takes a checkpoint before unifying and undoes to the checkpoint if the attempt is abandoned.
//! This is the case during a search, where the trail is undone after every attempt to use a clause regardless of whether unification succeeded.
//!
//! # No occurs-check
//!
//! A variable is bound to a compound without checking whether the compound contains the variable.
//! So, unifying `X` with `f(X)` succeeds with `X` bound to `f(X)`, a cyclic term.
//! Unification of two cyclic terms need not terminate.
//!
//! # Example
//!
//! ```rust
//! # use otter_prolog::context::Context;
//! # use otter_prolog::config::Config;
//! let mut the_context = Context::from_config(Config::default());
//! let x = the_context.fresh_variable().unwrap();
//! let y = the_context.fresh_variable().unwrap();
//! let a = the_context.constant("a").unwrap();
//! let b = the_context.constant("b").unwrap();
//!
//! let f_x_b = the_context.compound("f", &[x, b]).unwrap();
//! let f_a_y = the_context.compound("f", &[a, y]).unwrap();
//!
//! assert_eq!(the_context.unify(f_x_b, f_a_y), Ok(true));
//! assert_eq!(the_context.term_string(f_x_b), "f(a, b)");
//! assert_eq!(the_context.term_string(f_a_y), "f(a, b)");
//! ```

use crate::{
    context::Context,
    db::TermKey,
    misc::log::targets::{self},
    structures::term::Term,
    types::err::ErrorKind,
};

impl Context {
    /// Unifies two terms, returning whether unification succeeded.
    ///
    /// For documentation, see [procedures::unify](crate::procedures::unify).
    pub fn unify(&mut self, a: TermKey, b: TermKey) -> Result<bool, ErrorKind> {
        self.term_db.get(a)?;
        self.term_db.get(b)?;
        // Safety: Both keys were checked above.
        Ok(unsafe { self.unify_unchecked(a, b) })
    }

    /// Unifies two terms, returning whether unification succeeded.
    ///
    /// # Safety
    /// No check is made to ensure either key is to some term in the term database.
    pub(crate) unsafe fn unify_unchecked(&mut self, a: TermKey, b: TermKey) -> bool {
        // Pairs still to unify, with the next pair last.
        let mut pairs = vec![(a, b)];

        while let Some((a, b)) = pairs.pop() {
            // Safety: Arguments and bindings of terms in the database are in the database.
            let a = self.term_db.dereference_unchecked(a);
            let b = self.term_db.dereference_unchecked(b);

            if a == b {
                continue;
            }

            let binding = match (self.term_db.get_unchecked(a), self.term_db.get_unchecked(b)) {
                (Term::Variable { stamp: a_stamp, .. }, Term::Variable { stamp: b_stamp, .. }) => {
                    match a_stamp > b_stamp {
                        true => (a, b),
                        false => (b, a),
                    }
                }

                (Term::Variable { .. }, Term::Compound { .. }) => (a, b),

                (Term::Compound { .. }, Term::Variable { .. }) => (b, a),

                (
                    Term::Compound {
                        functor: a_functor,
                        arguments: a_arguments,
                    },
                    Term::Compound {
                        functor: b_functor,
                        arguments: b_arguments,
                    },
                ) => {
                    if a_functor != b_functor || a_arguments.len() != b_arguments.len() {
                        log::trace!(target: targets::UNIFICATION, "Clash of {a} and {b}");
                        return false;
                    }

                    pairs.extend(
                        a_arguments
                            .iter()
                            .zip(b_arguments.iter())
                            .rev()
                            .map(|(x, y)| (*x, *y)),
                    );
                    continue;
                }
            };

            self.bind(binding.0, binding.1);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context, db::TermKey};

    fn representative(ctx: &Context, key: TermKey) -> TermKey {
        ctx.term_db.dereference(key).unwrap()
    }

    #[test]
    fn identical_variable() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_variable().unwrap();

        assert_eq!(ctx.unify(x, x), Ok(true));
        assert!(ctx.trail.is_empty());
    }

    #[test]
    fn younger_variable_is_bound() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_variable().unwrap();
        let y = ctx.fresh_variable().unwrap();

        assert_eq!(ctx.unify(x, y), Ok(true));
        assert_eq!(representative(&ctx, y), x);
        assert_eq!(ctx.trail.len(), 1);

        let checkpoint = ctx.checkpoint();
        let z = ctx.fresh_variable().unwrap();
        assert_eq!(ctx.unify(z, y), Ok(true));
        assert_eq!(representative(&ctx, z), x);
        assert_eq!(ctx.backtrack_to(checkpoint), Ok(()));

        assert_eq!(ctx.unify(y, x), Ok(true));
        assert_eq!(ctx.trail.len(), 1);
    }

    #[test]
    fn functor_clash() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.constant("a").unwrap();
        let b = ctx.constant("b").unwrap();

        assert_eq!(ctx.unify(a, b), Ok(false));
        assert!(ctx.trail.is_empty());
    }

    #[test]
    fn arity_clash() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.constant("a").unwrap();
        let f_a = ctx.compound("f", &[a]).unwrap();
        let f_a_a = ctx.compound("f", &[a, a]).unwrap();

        assert_eq!(ctx.unify(f_a, f_a_a), Ok(false));
    }

    #[test]
    fn partial_bindings_remain() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_variable().unwrap();
        let a = ctx.constant("a").unwrap();
        let b = ctx.constant("b").unwrap();
        let c = ctx.constant("c").unwrap();

        let f_x_b = ctx.compound("f", &[x, b]).unwrap();
        let f_a_c = ctx.compound("f", &[a, c]).unwrap();

        let checkpoint = ctx.checkpoint();
        assert_eq!(ctx.unify(f_x_b, f_a_c), Ok(false));
        assert_eq!(representative(&ctx, x), a);

        assert_eq!(ctx.backtrack_to(checkpoint), Ok(()));
        assert_eq!(representative(&ctx, x), x);
    }

    #[test]
    fn arguments_left_to_right() {
        let mut ctx = Context::from_config(Config::default());
        let [x, y] = *ctx.fresh_variables(2).unwrap().as_slice() else {
            panic!("Insufficient variables");
        };
        let a = ctx.constant("a").unwrap();
        let b = ctx.constant("b").unwrap();

        let f_x_y = ctx.compound("f", &[x, y]).unwrap();
        let f_a_b = ctx.compound("f", &[a, b]).unwrap();

        let mark = ctx.trail.checkpoint();
        assert_eq!(ctx.unify(f_x_y, f_a_b), Ok(true));
        assert_eq!(ctx.trail.bindings_since(mark), &[x, y]);

        assert_eq!(representative(&ctx, x), a);
        assert_eq!(representative(&ctx, y), b);
    }

    #[test]
    fn invalid_key() {
        let mut ctx = Context::from_config(Config::default());
        let x = ctx.fresh_variable().unwrap();

        assert!(ctx.unify(x, TermKey(97)).is_err());
    }
}
