/*!
Propositions, built from symbols by negation, conjunction, disjunction, implication, and biconditional.

The collection of propositions is closed, and each kind of proposition is a variant of [Proposition].
Procedures on propositions ([evaluation](crate::procedures::evaluate), [collecting symbols](crate::procedures::symbols), and [rendering](crate::procedures::render)) match on the variants directly.

Propositions are built from already built propositions, either through the free functions of this module or the associated functions of [Proposition].

```rust
# use otter_know::structures::proposition::{and, implication, not, or, symbol};
let knight = symbol("I am a knight!");
let knave = symbol("I am a knave.");

let kb = and([
    or([
        and([knight.clone(), not(knave.clone())]),
        and([knave.clone(), not(knight.clone())]),
    ]),
    implication(knight.clone(), and([knight.clone(), knave.clone()])),
]);

assert_eq!(kb.symbols().len(), 2);
```

# Conjunctions and disjunctions

Conjunctions and disjunctions are n-ary, and elements are kept in the order given.
The order is used when rendering, and when evaluating (evaluation is left to right and short-circuits).

No check is made on the count of elements.
The empty conjunction is true on any model, and the empty disjunction is false on any model.

A knowledge base is typically a conjunction which is built by [adding](Proposition::add) facts one at a time:

```rust
# use otter_know::structures::proposition::{and, not, symbol};
let mut kb = and([]);
assert!(kb.add(symbol("p")).is_ok());
assert!(kb.add(not(symbol("q"))).is_ok());

assert_eq!(kb.to_string(), "p ^ ¬q");
assert!(symbol("p").add(symbol("q")).is_err());
```

Propositions are values, and so adding to a proposition has no effect on any clone of the proposition.
*/

use crate::{
    procedures,
    structures::{
        symbol::{Symbol, SymbolSet},
        valuation::Valuation,
    },
    types::err::{self},
};

/// A proposition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Proposition {
    /// An atomic proposition.
    Symbol(Symbol),

    /// The negation of the operand.
    Not(Box<Proposition>),

    /// The conjunction of the conjuncts.
    And(Vec<Proposition>),

    /// The disjunction of the disjuncts.
    Or(Vec<Proposition>),

    /// The antecedent implies the consequent.
    Implication(Box<Proposition>, Box<Proposition>),

    /// The left and right propositions have the same value.
    Biconditional(Box<Proposition>, Box<Proposition>),
}

/// An atomic proposition with the given name.
pub fn symbol(name: impl Into<String>) -> Proposition {
    Proposition::Symbol(Symbol::new(name))
}

/// The negation of `operand`.
pub fn not(operand: Proposition) -> Proposition {
    Proposition::Not(Box::new(operand))
}

/// The conjunction of `conjuncts`, in order.
pub fn and(conjuncts: impl IntoIterator<Item = Proposition>) -> Proposition {
    Proposition::And(conjuncts.into_iter().collect())
}

/// The disjunction of `disjuncts`, in order.
pub fn or(disjuncts: impl IntoIterator<Item = Proposition>) -> Proposition {
    Proposition::Or(disjuncts.into_iter().collect())
}

/// `antecedent` implies `consequent`.
pub fn implication(antecedent: Proposition, consequent: Proposition) -> Proposition {
    Proposition::Implication(Box::new(antecedent), Box::new(consequent))
}

/// `left` if and only if `right`.
pub fn biconditional(left: Proposition, right: Proposition) -> Proposition {
    Proposition::Biconditional(Box::new(left), Box::new(right))
}

impl Proposition {
    /// Appends a conjunct to a conjunction, or a disjunct to a disjunction.
    ///
    /// Any other proposition is left unchanged and an error is returned.
    pub fn add(&mut self, proposition: Proposition) -> Result<(), err::BuildError> {
        match self {
            Self::And(elements) | Self::Or(elements) => {
                elements.push(proposition);
                Ok(())
            }

            _ => Err(err::BuildError::NotVariadic),
        }
    }

    /// As [add](Proposition::add), though taking and returning ownership of the proposition.
    pub fn with(mut self, proposition: Proposition) -> Result<Self, err::BuildError> {
        self.add(proposition)?;
        Ok(self)
    }

    /// The symbol of an atomic proposition, otherwise nothing.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// The value of the proposition on `model`.
    ///
    /// See [evaluate](procedures::evaluate::evaluate).
    pub fn evaluate(&self, model: &impl Valuation) -> Result<bool, err::EvaluationError> {
        procedures::evaluate::evaluate(self, model)
    }

    /// The symbols of the proposition.
    ///
    /// See [symbols](procedures::symbols::symbols).
    pub fn symbols(&self) -> SymbolSet {
        procedures::symbols::symbols(self)
    }
}

impl From<Symbol> for Proposition {
    fn from(symbol: Symbol) -> Self {
        Proposition::Symbol(symbol)
    }
}

impl From<&str> for Proposition {
    fn from(name: &str) -> Self {
        symbol(name)
    }
}
