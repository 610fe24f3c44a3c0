/*!
A (partial) function from symbols to truth values.

If every symbol of interest is assigned a value the valuation is 'total', otherwise the valuation is 'partial'.
Evaluation of a proposition requires a value for each symbol read, and reading a symbol without a value is an [error](crate::types::err::EvaluationError).

The canonical representation of a valuation is a [Model], a hash map from symbols to booleans.
Though, the valuation trait is implemented for any map from symbols to booleans, so an ordered map may be used if (e.g.) printing a model in a fixed order is of interest.

```rust
# use otter_know::structures::symbol::Symbol;
# use otter_know::structures::valuation::{Model, Valuation};
let p = Symbol::from("p");
let q = Symbol::from("q");

let model = Model::from([(p.clone(), true)]);

assert_eq!(model.value_of(&p), Some(true));
assert_eq!(model.value_of(&q), None);

let extended = model.extended(q.clone(), false);
assert_eq!(extended.value_of(&q), Some(false));
assert_eq!(model.value_of(&q), None);
```
*/

use std::collections::{BTreeMap, HashMap};

use super::symbol::Symbol;

/// The canonical representation of a valuation.
pub type Model = HashMap<Symbol, bool>;

/// A valuation is something which stores some value of a symbol and/or perhaps the information that the symbol has no value.
pub trait Valuation {
    /// The value of a symbol under the valuation, or otherwise nothing.
    fn value_of(&self, symbol: &Symbol) -> Option<bool>;

    /// A copy of the valuation, with the given symbol mapped to the given value.
    ///
    /// The original valuation is untouched.
    fn extended(&self, symbol: Symbol, value: bool) -> Self
    where
        Self: Sized;
}

impl Valuation for HashMap<Symbol, bool> {
    fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        self.get(symbol).copied()
    }

    fn extended(&self, symbol: Symbol, value: bool) -> Self {
        let mut copy = self.clone();
        copy.insert(symbol, value);
        copy
    }
}

impl Valuation for BTreeMap<Symbol, bool> {
    fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        self.get(symbol).copied()
    }

    fn extended(&self, symbol: Symbol, value: bool) -> Self {
        let mut copy = self.clone();
        copy.insert(symbol, value);
        copy
    }
}

/// A string representation of a valuation, with symbols in order and negated symbols prefixed by '¬'.
pub fn valuation_string(model: &Model) -> String {
    let ordered = model.iter().collect::<BTreeMap<_, _>>();
    ordered
        .into_iter()
        .map(|(symbol, value)| match value {
            true => format!("{symbol}"),
            false => format!("¬{symbol}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
