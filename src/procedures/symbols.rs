/*!
The symbols of a proposition.

The symbols of a proposition are the symbols which appear somewhere in the proposition, each noted once regardless of the count of appearances.

```rust
# use otter_know::structures::proposition::{and, not, symbol};
let p = symbol("P");
assert_eq!(and([p.clone(), not(p.clone()), p]).symbols().len(), 1);
```

No valuation is required to collect the symbols of a proposition, and each node of the proposition is visited exactly once.
*/

use crate::structures::{proposition::Proposition, symbol::SymbolSet};

/// The set of symbols which appear in `proposition`.
pub fn symbols(proposition: &Proposition) -> SymbolSet {
    let mut the_symbols = SymbolSet::default();
    collect(proposition, &mut the_symbols);
    the_symbols
}

/// The union of the symbols of each proposition.
pub fn symbols_of<'p>(propositions: impl IntoIterator<Item = &'p Proposition>) -> SymbolSet {
    let mut the_symbols = SymbolSet::default();
    for proposition in propositions {
        collect(proposition, &mut the_symbols);
    }
    the_symbols
}

fn collect(proposition: &Proposition, the_symbols: &mut SymbolSet) {
    match proposition {
        Proposition::Symbol(symbol) => {
            if !the_symbols.contains(symbol) {
                the_symbols.insert(symbol.clone());
            }
        }

        Proposition::Not(operand) => collect(operand, the_symbols),

        Proposition::And(elements) | Proposition::Or(elements) => {
            for element in elements {
                collect(element, the_symbols);
            }
        }

        Proposition::Implication(a, b) | Proposition::Biconditional(a, b) => {
            collect(a, the_symbols);
            collect(b, the_symbols);
        }
    }
}
