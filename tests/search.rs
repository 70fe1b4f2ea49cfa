use otter_prolog::{
    config::Config,
    context::{Context, Counters},
    procedures::solve::Control,
    reports::Report,
    structures::query::Query,
};

/// A context with the append clauses, in recursive first order, and a query which has no final solution.
fn endless_context(config: Config) -> (Context, Query) {
    let mut the_context = Context::from_config(config);
    assert!(the_context.add_append_clauses().is_ok());
    the_context.clause_db.reverse();

    let i = the_context.fresh_variable().unwrap();
    let j = the_context.fresh_variable().unwrap();
    let k = the_context.fresh_variable().unwrap();
    let goal = the_context.compound("app", &[i, j, k]).unwrap();

    (the_context, Query::new(vec![goal]))
}

mod control {

    use super::*;

    #[test]
    fn stop_at_solution() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_append_clauses().is_ok());
        let query = the_context.append_query(&["1", "2", "3"]).unwrap();

        let mut indices = Vec::default();
        let report = the_context.solve(&query, |solution| {
            indices.push(solution.index());
            match solution.index() {
                1 => Control::Stop,
                _ => Control::Continue,
            }
        });

        assert_eq!(report, Ok(Report::Stopped));
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(the_context.report(), Report::Stopped);
        assert!(the_context.trail.is_empty());
    }

    #[test]
    fn solution_limit() {
        let mut config = Config::default();
        assert!(config.solution_limit.set(3).is_ok());

        let mut the_context = Context::from_config(config);
        assert!(the_context.add_append_clauses().is_ok());
        let query = the_context.append_query(&["1", "2", "3"]).unwrap();

        let report = the_context.solve(&query, |_| Control::Continue);

        assert_eq!(report, Ok(Report::Stopped));
        assert_eq!(the_context.counters.solutions, 3);
    }

    #[test]
    fn empty_query() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_append_clauses().is_ok());

        let mut answers = Vec::default();
        let report = the_context.solve(&Query::default(), |solution| {
            answers.push(solution.answer_string());
            Control::Continue
        });

        assert_eq!(report, Ok(Report::Exhausted));
        assert_eq!(answers, vec!["yes"]);
        assert_eq!(the_context.counters.inferences, 0);
    }

    #[test]
    fn terminate_callback() {
        let (mut the_context, query) = endless_context(Config::default());

        the_context.set_callback_terminate(Box::new(|counters: &Counters| {
            counters.inferences >= 10
        }));

        let report = the_context.solve(&query, |_| Control::Continue);

        assert_eq!(report, Ok(Report::Stopped));
        assert_eq!(the_context.counters.inferences, 10);
        assert_eq!(the_context.counters.solutions, 0);

        the_context.clear_callback_terminate();
        let mut config = Config::default();
        assert!(config.inference_limit.set(20).is_ok());
        the_context.config = config;

        let report = the_context.solve(&query, |_| Control::Continue);
        assert_eq!(report, Ok(Report::InferenceLimit));
    }

    #[test]
    fn time_limit() {
        let mut config = Config::default();
        assert!(config
            .time_limit
            .set(std::time::Duration::from_millis(5))
            .is_ok());
        let (mut the_context, query) = endless_context(config);

        let report = the_context.solve(&query, |_| Control::Continue);

        assert_eq!(report, Ok(Report::TimeUp));
        assert!(the_context.counters.time >= std::time::Duration::from_millis(5));
    }

    #[test]
    fn term_limit() {
        let mut config = Config::default();
        assert!(config.term_limit.set(500).is_ok());
        let (mut the_context, query) = endless_context(config);

        let report = the_context.solve(&query, |_| Control::Continue);

        assert!(report.is_err());
        assert_eq!(the_context.report(), Report::Unknown);
        assert!(the_context.trail.is_empty());
    }
}

mod programs {

    use super::*;

    #[test]
    fn grandparent() {
        let mut the_context = Context::from_config(Config::default());

        let [ann, bob, cal, dee] = ["ann", "bob", "cal", "dee"].map(|name| the_context.constant(name).unwrap());
        for (parent, child) in [(ann, bob), (bob, cal), (bob, dee)] {
            let fact = the_context.compound("parent", &[parent, child]).unwrap();
            assert!(the_context.add_clause(fact, &[]).is_ok());
        }

        // grandparent(X, Z) :- parent(X, Y), parent(Y, Z).
        let [x, y, z] = [
            the_context.fresh_variable().unwrap(),
            the_context.fresh_variable().unwrap(),
            the_context.fresh_variable().unwrap(),
        ];
        let head = the_context.compound("grandparent", &[x, z]).unwrap();
        let x_y = the_context.compound("parent", &[x, y]).unwrap();
        let y_z = the_context.compound("parent", &[y, z]).unwrap();
        assert!(the_context.add_clause(head, &[x_y, y_z]).is_ok());

        let who = the_context.fresh_variable().unwrap();
        let goal = the_context.compound("grandparent", &[ann, who]).unwrap();
        let query = Query::new(vec![goal]).with_variable("Who", who);

        let mut answers = Vec::default();
        let report = the_context.solve(&query, |solution| {
            answers.push(solution.answer_string());
            Control::Continue
        });

        assert_eq!(report, Ok(Report::Exhausted));
        assert_eq!(answers, vec!["Who = cal", "Who = dee"]);
        assert_eq!(the_context.counters.max_depth, 2);
    }

    #[test]
    fn long_list_fact() {
        let mut the_context = Context::from_config(Config::default());
        let length = 200_000;

        // long([1, 1, ..., 1]).
        let one = the_context.constant("1").unwrap();
        let list = the_context.list(&vec![one; length], None).unwrap();
        let fact = the_context.compound("long", &[list]).unwrap();
        assert!(the_context.add_clause(fact, &[]).is_ok());

        let x = the_context.fresh_variable().unwrap();
        let goal = the_context.compound("long", &[x]).unwrap();
        let query = Query::new(vec![goal]).with_variable("X", x);

        let mut answers = Vec::default();
        let report = the_context.solve(&query, |solution| {
            answers.push(solution.answer_string());
            Control::Continue
        });

        assert_eq!(report, Ok(Report::Exhausted));
        assert_eq!(answers.len(), 1);
        assert!(answers[0].starts_with("X = [1, 1, 1"));
        assert!(answers[0].ends_with("1, 1]"));
        assert_eq!(answers[0].matches('1').count(), length);
    }

    #[test]
    fn shared_variable_in_query() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_append_clauses().is_ok());

        // ?- app(X, X, [1, 2, 1, 2]).
        let x = the_context.fresh_variable().unwrap();
        let items = ["1", "2", "1", "2"].map(|item| the_context.constant(item).unwrap());
        let list = the_context.list(&items, None).unwrap();
        let goal = the_context.compound("app", &[x, x, list]).unwrap();
        let query = Query::new(vec![goal]).with_variable("X", x);

        let mut answers = Vec::default();
        let report = the_context.solve(&query, |solution| {
            answers.push(solution.answer_string());
            Control::Continue
        });

        assert_eq!(report, Ok(Report::Exhausted));
        assert_eq!(answers, vec!["X = [1, 2]"]);
    }
}
