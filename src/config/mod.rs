/*!
Configuration.

The logic engine takes no configuration, as model checking is exact and (by design of the procedure) considers every model.
Configuration is of the [search](crate::search) component, and of the front-ends built on the library.

Each option is a [ConfigOption], noting the least and greatest values permitted for the option.

```rust
# use otter_know::config::{Config, SearchStrategy};
let mut config = Config::default();
assert_eq!(config.search_strategy.value, SearchStrategy::BreadthFirst);

assert!(config.search_strategy.set(SearchStrategy::DepthFirst));
assert!(config.expansion_limit.set(1024));
assert_eq!(config.search().expansion_limit, Some(1024));
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod search_strategy;
pub use search_strategy::SearchStrategy;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The order in which states are examined during a search.
    pub search_strategy: ConfigOption<SearchStrategy>,

    /// The greatest count of states to expand during a search, with zero for no limit.
    pub expansion_limit: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_strategy: ConfigOption {
                name: "search_strategy",
                min: SearchStrategy::MIN,
                max: SearchStrategy::MAX,
                value: SearchStrategy::BreadthFirst,
            },

            expansion_limit: ConfigOption {
                name: "expansion_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },
        }
    }
}

/// The configuration of a single search, as read from a [Config].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: SearchStrategy,
    pub expansion_limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Config::default().search()
    }
}

impl Config {
    pub fn search(&self) -> SearchConfig {
        SearchConfig {
            strategy: self.search_strategy.value,
            expansion_limit: match self.expansion_limit.value {
                0 => None,
                limit => Some(limit),
            },
        }
    }
}
