/*!
A symbol (aka. an 'atom' or a 'variable').

Symbols are things with a name to which assigning a (boolean) value (true or false) is of interest.
The identity of a symbol is its name, and so two symbols built from the same string are the same symbol.

```rust
# use otter_know::structures::symbol::Symbol;
let p = Symbol::new("I am a knight!");
let q = Symbol::from("I am a knight!");

assert_eq!(p, q);
assert_eq!(p.name(), "I am a knight!");
```

Symbols are ordered by name, and a [SymbolSet] is a set ordered in the same way.
As a consequence, any procedure which iterates through a set of symbols does so in a fixed order.
*/

use std::collections::BTreeSet;

/// A symbol, identified by its name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

/// A set of symbols, deduplicated by name.
pub type SymbolSet = BTreeSet<Symbol>;

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol(name.to_owned())
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol(name)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
