/*!
Configuration of a context.

All configuration for a context is contained within the [Config] of the context.
Some databases take a copy of the parts of the configuration relevant to them when created.

For the most part, configuration limits a search.
As the engine itself places no bound on a search --- and a search need not terminate --- limits are the way for a caller to guard against a search which runs on.
For each limit, a value of zero is no limit.

```rust
# use otter_prolog::config::Config;
let mut config = Config::default();
assert!(config.solution_limit.set(2).is_ok());
assert!(config.term_limit.set(0).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

use crate::db::TermIndex;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The count of solutions after which a search stops.
    pub solution_limit: ConfigOption<usize>,

    /// The count of attempts to unify a goal with the head of a clause after which a search stops.
    pub inference_limit: ConfigOption<usize>,

    /// The time after which a search stops.
    pub time_limit: ConfigOption<Duration>,

    /// The maximum count of terms held in the term database at any point.
    pub term_limit: ConfigOption<TermIndex>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            solution_limit: ConfigOption {
                name: "solution_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            inference_limit: ConfigOption {
                name: "inference_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },

            term_limit: ConfigOption {
                name: "term_limit",
                min: 1,
                max: TermIndex::MAX,
                value: TermIndex::MAX,
            },
        }
    }
}
