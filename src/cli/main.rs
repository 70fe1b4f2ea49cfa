#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;

use otter_prolog::{
    config::Config,
    context::Context,
    procedures::solve::Control,
    reports::Report,
    types::err::{self},
};

/// Splits a list in each possible way, with the two clauses of append
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The items of the list to split, separated by commas, with an empty value for the empty list
    #[arg(short, long, value_delimiter = ',', default_value = "1,2,3")]
    list: Vec<String>,

    /// The order(s) of the clauses of append to search with
    #[arg(short, long, default_value_t, value_enum)]
    order: Order,

    /// Stop after this many solutions, with zero for no limit
    #[arg(long, default_value_t = 0)]
    solution_limit: usize,

    /// Stop after this many attempts to unify a goal with the head of a clause, with zero for no limit
    #[arg(short, long, default_value_t = 0)]
    inference_limit: usize,

    /// Time limit for each search, in seconds
    #[arg(short, long, value_parser = |seconds: &str| seconds.parse().map(std::time::Duration::from_secs))]
    time: Option<std::time::Duration>,

    /// Display the program before each search
    #[arg(short, long, default_value_t = false)]
    program: bool,

    /// Display stats after each search
    #[arg(short, long, default_value_t = false)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
enum Order {
    /// The base clause first
    Normal,

    /// The recursive clause first
    Reversed,

    /// Normal, and then reversed
    #[default]
    Both,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {e:?}");
            std::process::exit(1);
        }
    };

    if matches!(args.order, Order::Normal | Order::Both) {
        println!("=======Append with normal clause order:");
        if let Err(e) = run_append(&args, config.clone(), false) {
            println!("Context error: {e:?}");
            std::process::exit(1);
        }
    }

    if matches!(args.order, Order::Reversed | Order::Both) {
        println!("\n=======Append with reversed normal clause order:");
        if let Err(e) = run_append(&args, config, true) {
            println!("Context error: {e:?}");
            std::process::exit(1);
        }
    }
}

fn config_from_args(args: &Args) -> Result<Config, err::ConfigError> {
    let mut config = Config::default();

    config.solution_limit.set(args.solution_limit)?;
    config.inference_limit.set(args.inference_limit)?;
    if let Some(time) = args.time {
        config.time_limit.set(time)?;
    }

    Ok(config)
}

/// The names of the items of a list, skipping any item without a name.
fn list_items(list: &[String]) -> Vec<&str> {
    list.iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Runs the append query in a fresh context, printing each answer.
fn run_append(args: &Args, config: Config, reversed: bool) -> Result<(), err::ErrorKind> {
    let mut the_context = Context::from_config(config);

    let _ = the_context.add_append_clauses()?;
    if reversed {
        the_context.clause_db.reverse();
    }

    let query = the_context.append_query(&list_items(&args.list))?;

    if args.program {
        for (_, clause) in the_context.clause_db.clauses() {
            println!("{}", the_context.clause_string(clause));
        }
        println!();
    }

    let report = the_context.solve(&query, |solution| {
        println!("{}", solution.answer_string());
        Control::Continue
    })?;

    match report {
        Report::Exhausted | Report::Stopped => {}
        Report::InferenceLimit => println!("Inference limit reached"),
        Report::TimeUp => println!("Time limit reached"),
        Report::Unknown => println!("Unknown"),
    }

    if args.stats {
        let counters = &the_context.counters;
        println!("c Report:        {report}");
        println!("c Solutions:     {}", counters.solutions);
        println!("c Inferences:    {}", counters.inferences);
        println!("c Choice points: {}", counters.choice_points);
        println!("c Max depth:     {}", counters.max_depth);
        println!("c Time:          {:.2?}", counters.time);
    }

    Ok(())
}
