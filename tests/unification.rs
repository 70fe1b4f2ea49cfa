use otter_prolog::{config::Config, context::Context, db::TermKey, structures::term::Term};

use rand::{rngs::StdRng, Rng, SeedableRng};

const CONSTANTS: [&str; 3] = ["a", "b", "c"];

/// A random term, with a fresh variable at each variable position.
fn linear_term(the_context: &mut Context, rng: &mut StdRng, depth: usize) -> TermKey {
    match rng.gen_range(0..4) {
        0 => the_context.fresh_variable().unwrap(),

        _ if depth == 0 => the_context
            .constant(CONSTANTS[rng.gen_range(0..CONSTANTS.len())])
            .unwrap(),

        1 => the_context
            .constant(CONSTANTS[rng.gen_range(0..CONSTANTS.len())])
            .unwrap(),

        2 => {
            let argument = linear_term(the_context, rng, depth - 1);
            the_context.compound("g", &[argument]).unwrap()
        }

        _ => {
            let left = linear_term(the_context, rng, depth - 1);
            let right = linear_term(the_context, rng, depth - 1);
            the_context.compound("f", &[left, right]).unwrap()
        }
    }
}

/// A random term, whose variables are drawn from `variables`.
fn shared_term(
    the_context: &mut Context,
    rng: &mut StdRng,
    variables: &[TermKey],
    depth: usize,
) -> TermKey {
    match rng.gen_range(0..3) {
        0 if !variables.is_empty() => variables[rng.gen_range(0..variables.len())],

        _ if depth == 0 => the_context
            .constant(CONSTANTS[rng.gen_range(0..CONSTANTS.len())])
            .unwrap(),

        _ => {
            let left = shared_term(the_context, rng, variables, depth - 1);
            let right = shared_term(the_context, rng, variables, depth - 1);
            the_context.compound("f", &[left, right]).unwrap()
        }
    }
}

/// Checks unify(a, b) and unify(b, a) agree on the result and the bindings made, from the current state.
fn check_symmetry(the_context: &mut Context, a: TermKey, b: TermKey) {
    let checkpoint = the_context.checkpoint();

    let forward = the_context.unify(a, b).unwrap();
    let forward_strings = (the_context.term_string(a), the_context.term_string(b));
    if forward {
        assert_eq!(forward_strings.0, forward_strings.1);
    }
    assert_eq!(the_context.backtrack_to(checkpoint), Ok(()));

    let backward = the_context.unify(b, a).unwrap();
    let backward_strings = (the_context.term_string(a), the_context.term_string(b));
    assert_eq!(the_context.backtrack_to(checkpoint), Ok(()));

    assert_eq!(forward, backward);
    assert_eq!(forward_strings, backward_strings);
}

mod unification {

    use super::*;

    #[test]
    fn symmetry_linear() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut the_context = Context::from_config(Config::default());

        for _ in 0..500 {
            let a = linear_term(&mut the_context, &mut rng, 4);
            let b = linear_term(&mut the_context, &mut rng, 4);
            check_symmetry(&mut the_context, a, b);
        }
        assert!(the_context.trail.is_empty());
    }

    #[test]
    fn symmetry_shared_against_ground() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut the_context = Context::from_config(Config::default());

        for _ in 0..500 {
            let variables = the_context.fresh_variables(3).unwrap();
            let a = shared_term(&mut the_context, &mut rng, &variables, 3);
            let b = shared_term(&mut the_context, &mut rng, &[], 3);
            check_symmetry(&mut the_context, a, b);
        }
    }

    #[test]
    fn undo_completeness() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut the_context = Context::from_config(Config::default());

        let variables = the_context.fresh_variables(32).unwrap();
        let constants = CONSTANTS.map(|name| the_context.constant(name).unwrap());

        let snapshot = |the_context: &Context| -> Vec<Option<TermKey>> {
            variables
                .iter()
                .map(|variable| the_context.term_db.get(*variable).unwrap().binding())
                .collect()
        };

        for _ in 0..20 {
            let base = the_context.trail.checkpoint();
            let mut marks = Vec::default();

            for _ in 0..24 {
                if rng.gen_bool(0.4) {
                    marks.push((the_context.trail.checkpoint(), snapshot(&the_context)));
                }
                let variable = variables[rng.gen_range(0..variables.len())];
                let constant = constants[rng.gen_range(0..constants.len())];
                let _ = the_context.unify(variable, constant).unwrap();
            }

            while !marks.is_empty() {
                let index = rng.gen_range(0..marks.len());
                let (mark, expected) = marks[index].clone();

                the_context.trail.undo_to(mark, &mut the_context.term_db);
                assert_eq!(snapshot(&the_context), expected);
                assert_eq!(the_context.trail.checkpoint(), mark);

                marks.truncate(index);
            }

            the_context.trail.undo_to(base, &mut the_context.term_db);
            assert!(the_context.trail.is_empty());
            assert!(snapshot(&the_context).iter().all(|binding| binding.is_none()));
        }
    }

    #[test]
    fn no_occurs_check() {
        let mut the_context = Context::from_config(Config::default());
        let x = the_context.fresh_variable().unwrap();
        let f_x = the_context.compound("f", &[x]).unwrap();

        assert_eq!(the_context.unify(x, f_x), Ok(true));
        assert_eq!(the_context.term_db.dereference(x), Ok(f_x));

        let Ok(Term::Compound { arguments, .. }) = the_context.term_db.get(f_x) else {
            panic!("Compound expected");
        };
        assert_eq!(arguments, &vec![x]);

        // The cycle is met again, and resolved without further binding.
        let trail_length = the_context.trail.len();
        assert_eq!(the_context.unify(f_x, x), Ok(true));
        assert_eq!(the_context.trail.len(), trail_length);
    }

    #[test]
    fn variable_chains() {
        let mut the_context = Context::from_config(Config::default());
        let variables = the_context.fresh_variables(8).unwrap();

        for pair in variables.windows(2).rev() {
            assert_eq!(the_context.unify(pair[1], pair[0]), Ok(true));
        }
        for variable in &variables {
            assert_eq!(the_context.term_db.dereference(*variable), Ok(variables[0]));
        }

        let a = the_context.constant("a").unwrap();
        assert_eq!(the_context.unify(variables[7], a), Ok(true));
        assert_eq!(the_context.term_string(variables[3]), "a");
    }
}
