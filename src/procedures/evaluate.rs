/*!
The value of a proposition on a valuation.

Evaluation is recursive on the structure of a proposition:
- A symbol has the value given by the valuation, and it is an error if there is no such value.
- A negation has the opposite value of the operand.
- A conjunction is evaluated left to right, and is false as soon as some conjunct is false.
- A disjunction is evaluated left to right, and is true as soon as some disjunct is true.
- An implication 'A => B' has the value of '¬A v B'.
- A biconditional 'A <=> B' has the value of '(A ^ B) v (¬A ^ ¬B)'.

# Short-circuits

As conjunctions and disjunctions stop as soon as their value is settled, a symbol without a value which follows the point the value is settled is never read.
So, evaluation on a partial valuation may succeed even though some symbol of the proposition has no value.

```rust
# use otter_know::structures::proposition::{and, symbol};
# use otter_know::structures::valuation::Model;
# use otter_know::structures::symbol::Symbol;
let model = Model::from([(Symbol::from("p"), false)]);

assert_eq!(and([symbol("p"), symbol("q")]).evaluate(&model), Ok(false));
assert!(and([symbol("q"), symbol("p")]).evaluate(&model).is_err());
```

On a total valuation evaluation never fails.
*/

use crate::{
    misc::log::targets::{self},
    structures::{proposition::Proposition, valuation::Valuation},
    types::err::{self},
};

/// The value of `proposition` on `model`, or the first symbol read which has no value on `model`.
pub fn evaluate(
    proposition: &Proposition,
    model: &impl Valuation,
) -> Result<bool, err::EvaluationError> {
    match proposition {
        Proposition::Symbol(symbol) => match model.value_of(symbol) {
            Some(value) => Ok(value),
            None => {
                log::trace!(target: targets::EVALUATION, "No value for {symbol}");
                Err(err::EvaluationError::UnboundSymbol(symbol.clone()))
            }
        },

        Proposition::Not(operand) => Ok(!evaluate(operand, model)?),

        Proposition::And(conjuncts) => conjunction(conjuncts.iter(), model),

        Proposition::Or(disjuncts) => disjunction(disjuncts.iter(), model),

        Proposition::Implication(antecedent, consequent) => {
            // ¬A v B
            if !evaluate(antecedent, model)? {
                return Ok(true);
            }
            evaluate(consequent, model)
        }

        Proposition::Biconditional(left, right) => {
            // (A ^ B) v (¬A ^ ¬B)
            let both = evaluate(left, model)? && evaluate(right, model)?;
            if both {
                return Ok(true);
            }
            Ok(!evaluate(left, model)? && !evaluate(right, model)?)
        }
    }
}

fn conjunction<'p>(
    conjuncts: impl Iterator<Item = &'p Proposition>,
    model: &impl Valuation,
) -> Result<bool, err::EvaluationError> {
    for conjunct in conjuncts {
        if !evaluate(conjunct, model)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn disjunction<'p>(
    disjuncts: impl Iterator<Item = &'p Proposition>,
    model: &impl Valuation,
) -> Result<bool, err::EvaluationError> {
    for disjunct in disjuncts {
        if evaluate(disjunct, model)? {
            return Ok(true);
        }
    }
    Ok(false)
}
