/*!
A universe of symbols, for stating puzzles over a fixed collection of symbols.

Puzzles such as the zebra puzzle are stated over every combination of some attributes (house, colour, pet, etc.), and constraints are built by filtering those combinations.
A universe holds the combinations as symbols, and caches the result of each filter applied.

The cache belongs to the universe, and so two universes never share a cache.

```rust
# use otter_know::structures::universe::{SymbolFilter, SymbolUniverse};
let mut universe = SymbolUniverse::from_product(&[&["1", "2"], &["Red", "Blue"], &["fox", "dog"]]);
assert_eq!(universe.len(), 8);

let red = universe.filter(SymbolFilter::Contains, &["Red"]).len();
assert_eq!(red, 4);

let red_dog = universe.filter(SymbolFilter::Contains, &["Red", "dog"]).len();
assert_eq!(red_dog, 2);

universe.filter(SymbolFilter::Contains, &["Red"]);
assert_eq!(universe.cached_filters(), 2);
```

# Filters

Filters are on the names of symbols:
- [Contains](SymbolFilter::Contains) keeps those symbols whose name contains every argument.
- [Excludes](SymbolFilter::Excludes) keeps those symbols whose name contains no argument.

Note, names are matched as strings, and so an argument which is part of some other attribute matches that attribute too.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        proposition::{and, implication, not, or, Proposition},
        symbol::{Symbol, SymbolSet},
    },
};

/// Filters on the names of symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolFilter {
    /// The name contains every argument.
    Contains,

    /// The name contains no argument.
    Excludes,
}

impl SymbolFilter {
    pub fn keeps(&self, name: &str, args: &[&str]) -> bool {
        match self {
            Self::Contains => args.iter().all(|arg| name.contains(arg)),
            Self::Excludes => !args.iter().any(|arg| name.contains(arg)),
        }
    }
}

type FilterKey = (SymbolFilter, Vec<String>);

/// A set of symbols, with a cache of filters applied to the set.
#[derive(Default)]
pub struct SymbolUniverse {
    symbols: SymbolSet,
    cache: HashMap<FilterKey, SymbolSet>,
}

impl SymbolUniverse {
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        SymbolUniverse {
            symbols: symbols.into_iter().collect(),
            cache: HashMap::default(),
        }
    }

    /// A universe with a symbol for each combination of attributes, taking one attribute from each list and joining the attributes with a space.
    pub fn from_product(attributes: &[&[&str]]) -> Self {
        let mut names = vec![String::new()];

        for list in attributes {
            let mut extended = Vec::with_capacity(names.len() * list.len());
            for name in &names {
                for attribute in list.iter() {
                    match name.is_empty() {
                        true => extended.push(attribute.to_string()),
                        false => extended.push(format!("{name} {attribute}")),
                    }
                }
            }
            names = extended;
        }

        if attributes.is_empty() {
            names.clear();
        }

        Self::new(names.into_iter().map(Symbol::from))
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// A count of the filters cached.
    pub fn cached_filters(&self) -> usize {
        self.cache.len()
    }

    /// The symbols of the universe kept by `filter` on `args`.
    ///
    /// The result is cached, and so repeated calls with the same filter and arguments return the cached set.
    pub fn filter(&mut self, filter: SymbolFilter, args: &[&str]) -> &SymbolSet {
        let key: FilterKey = (filter, args.iter().map(|arg| arg.to_string()).collect());
        let symbols = &self.symbols;

        self.cache.entry(key).or_insert_with(|| {
            log::trace!(target: targets::UNIVERSE, "Filter miss: {filter:?} {args:?}");
            symbols
                .iter()
                .filter(|symbol| filter.keeps(symbol.name(), args))
                .cloned()
                .collect()
        })
    }

    /// The disjunction of every symbol in the universe other than `symbol`.
    pub fn all_except(&self, symbol: &Symbol) -> Proposition {
        or(self
            .symbols
            .iter()
            .filter(|other| *other != symbol)
            .cloned()
            .map(Proposition::Symbol))
    }

    /// If `symbol` is true, then every other symbol of the universe is false.
    pub fn exclusive(&self, symbol: &Symbol) -> Proposition {
        implication(
            Proposition::Symbol(symbol.clone()),
            not(self.all_except(symbol)),
        )
    }

    /// Some symbol kept by a [Contains](SymbolFilter::Contains) filter on `args` excludes every other symbol of the universe.
    ///
    /// Note, the proposition holds when every symbol is false, and so does not require some symbol to be true.
    /// For that, see [exactly_one](SymbolUniverse::exactly_one).
    pub fn is(&mut self, args: &[&str]) -> Proposition {
        let members = self.filter(SymbolFilter::Contains, args).clone();
        or(members.iter().map(|member| self.exclusive(member)))
    }

    /// Exactly one symbol of `members` is true.
    ///
    /// Members need not be part of the universe, as the proposition is stated over the members only.
    /// Unlike [is](SymbolUniverse::is), some member is required to be true.
    pub fn exactly_one(members: &SymbolSet) -> Proposition {
        let some = or(members.iter().cloned().map(Proposition::Symbol));

        let at_most = members.iter().map(|member| {
            let others = members
                .iter()
                .filter(|other| *other != member)
                .cloned()
                .map(Proposition::Symbol);
            implication(Proposition::Symbol(member.clone()), not(or(others)))
        });

        and(std::iter::once(some).chain(at_most))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{procedures::model_check::model_check, structures::proposition::symbol};

    #[test]
    fn product() {
        let universe = SymbolUniverse::from_product(&[&["1", "2"], &["a", "b", "c"]]);
        assert_eq!(universe.len(), 6);
        assert!(universe.symbols().contains(&Symbol::from("2 c")));

        assert!(SymbolUniverse::from_product(&[]).is_empty());
        assert!(SymbolUniverse::from_product(&[&["1"], &[]]).is_empty());
    }

    #[test]
    fn filters() {
        let mut universe = SymbolUniverse::from_product(&[&["1", "2"], &["Red", "Blue"]]);

        let excluded = universe.filter(SymbolFilter::Excludes, &["Red", "1"]).clone();
        assert_eq!(excluded.into_iter().collect::<Vec<_>>(), vec![Symbol::from("2 Blue")]);

        assert_eq!(universe.filter(SymbolFilter::Contains, &[]).len(), 4);
        assert_eq!(universe.cached_filters(), 2);

        universe.filter(SymbolFilter::Excludes, &["Red", "1"]);
        assert_eq!(universe.cached_filters(), 2);
    }

    #[test]
    fn exclusivity() {
        let universe = SymbolUniverse::new(["a", "b", "c"].map(Symbol::from));
        let a = Symbol::from("a");

        assert_eq!(universe.all_except(&a).to_string(), "b v c");
        assert_eq!(universe.exclusive(&a).to_string(), "a => ¬b v c");

        let kb = and([symbol("a"), universe.exclusive(&a)]);
        assert_eq!(model_check(&kb, &not(symbol("b"))), Ok(true));
        assert_eq!(model_check(&kb, &not(symbol("c"))), Ok(true));
    }

    #[test]
    fn exactly_one_of() {
        let members = ["a", "b", "c"].map(Symbol::from).into_iter().collect::<SymbolSet>();
        let one = SymbolUniverse::exactly_one(&members);

        let kb = and([one.clone(), not(symbol("a")), not(symbol("b"))]);
        assert_eq!(model_check(&kb, &symbol("c")), Ok(true));

        let kb = and([one, symbol("b")]);
        assert_eq!(model_check(&kb, &not(symbol("a"))), Ok(true));
        assert_eq!(model_check(&kb, &not(symbol("c"))), Ok(true));
    }

    #[test]
    fn is_requires_no_member() {
        let mut universe = SymbolUniverse::new(["a", "b", "c"].map(Symbol::from));
        let some = or(["a", "b", "c"].map(symbol));

        let is = universe.is(&[]);
        assert_eq!(is.to_string(), "a => ¬b v c v b => ¬a v c v c => ¬a v b");
        assert_eq!(model_check(&is, &some), Ok(false));

        let one = SymbolUniverse::exactly_one(universe.symbols());
        assert_eq!(model_check(&one, &some), Ok(true));

        // With some member given, the two agree.
        let kb = and([universe.is(&[]), symbol("b")]);
        assert_eq!(model_check(&kb, &not(symbol("a"))), Ok(true));
        assert_eq!(model_check(&kb, &not(symbol("c"))), Ok(true));
    }

    #[test]
    fn is_filters_members() {
        let mut universe = SymbolUniverse::from_product(&[&["1", "2"], &["Red", "Blue"]]);

        let is = universe.is(&["1", "Red"]);
        assert_eq!(is.to_string(), "1 Red => ¬1 Blue v 2 Blue v 2 Red");

        let kb = and([is, symbol("1 Red")]);
        assert_eq!(model_check(&kb, &not(symbol("2 Red"))), Ok(true));
    }
}
