/*!
Entailment, by model checking.

A knowledge base 𝐊 *entails* a query 𝐐 if and only if 𝐐 is true on every model on which 𝐊 is true.

As the value of a proposition depends only on the values of the symbols of the proposition, it is sufficient to consider each model whose symbols are exactly the symbols of 𝐊 together with the symbols of 𝐐.
And, model checking considers each such model, one after another:
- If 𝐊 is false on the model, the model places no constraint on entailment.
- Otherwise, 𝐐 must be true on the model.

```rust
# use otter_know::procedures::model_check::model_check;
# use otter_know::structures::proposition::{and, implication, symbol};
let p = symbol("P");
let q = symbol("Q");

let kb = and([p.clone(), implication(p.clone(), q.clone())]);

assert_eq!(model_check(&kb, &q), Ok(true));
assert_eq!(model_check(&q, &p), Ok(false));
```

# The procedure

Models are built one symbol at a time, by a recursive procedure which splits on the value of some symbol without a value:
- One copy of the current model is extended with the symbol valued true, and another with the symbol valued false.
- The procedure is then called on each copy, and the result is the conjunction of the two results.

When no symbol is without a value, the model is total and the knowledge base and query are evaluated.

So, the procedure always considers 2<sup>n</sup> models, where *n* is the count of symbols, and the depth of recursion is *n*.
Models are never shared between branches.

# Errors

Any evaluation error ends the procedure, and the error is returned.
As every model considered is total on the symbols of the knowledge base and query, this should never happen.
*/

use crate::{
    misc::log::targets::{self},
    procedures::{evaluate::evaluate, symbols::symbols_of},
    structures::{
        proposition::Proposition,
        symbol::Symbol,
        valuation::{Model, Valuation},
    },
    types::err::{self},
};

/// Whether `knowledge` entails `query`.
pub fn model_check(knowledge: &Proposition, query: &Proposition) -> Result<bool, err::EvaluationError> {
    let the_symbols = symbols_of([knowledge, query])
        .into_iter()
        .collect::<Vec<_>>();

    log::debug!(target: targets::MODEL_CHECK, "Checking {query} against {} symbols", the_symbols.len());

    check_all(knowledge, query, &the_symbols, Model::default())
}

fn check_all(
    knowledge: &Proposition,
    query: &Proposition,
    remaining: &[Symbol],
    model: Model,
) -> Result<bool, err::EvaluationError> {
    match remaining.split_first() {
        None => {
            if evaluate(knowledge, &model)? {
                let value = evaluate(query, &model)?;
                if !value {
                    log::trace!(target: targets::MODEL_CHECK, "Query false on a model of the knowledge base");
                }
                Ok(value)
            } else {
                Ok(true)
            }
        }

        Some((symbol, remaining)) => {
            let model_true = model.extended(symbol.clone(), true);
            let model_false = model.extended(symbol.clone(), false);

            let value_true = check_all(knowledge, query, remaining, model_true)?;
            let value_false = check_all(knowledge, query, remaining, model_false)?;

            Ok(value_true && value_false)
        }
    }
}

/// Each candidate entailed by `knowledge`, in the order given.
pub fn find_entailments<'c>(
    knowledge: &Proposition,
    candidates: impl IntoIterator<Item = &'c Proposition>,
) -> Result<Vec<Proposition>, err::EvaluationError> {
    let mut entailments = Vec::default();

    for candidate in candidates {
        if model_check(knowledge, candidate)? {
            log::debug!(target: targets::MODEL_CHECK, "Entailed: {candidate}");
            entailments.push(candidate.clone());
        }
    }

    Ok(entailments)
}

/// Each symbol of `knowledge` which is entailed by `knowledge`, in symbol order.
pub fn entailed_symbols(knowledge: &Proposition) -> Result<Vec<Symbol>, err::EvaluationError> {
    let candidates = knowledge
        .symbols()
        .into_iter()
        .map(Proposition::Symbol)
        .collect::<Vec<_>>();

    let entailments = find_entailments(knowledge, &candidates)?;

    Ok(entailments
        .into_iter()
        .filter_map(|entailment| match entailment {
            Proposition::Symbol(symbol) => Some(symbol),
            _ => None,
        })
        .collect())
}

/// Every model on the symbols of `knowledge` on which `knowledge` is true.
///
/// Models are returned in the order of the procedure, and so valuations with a symbol true come before those with the symbol false, for each symbol in symbol order.
pub fn models(knowledge: &Proposition) -> Result<Vec<Model>, err::EvaluationError> {
    let the_symbols = knowledge.symbols().into_iter().collect::<Vec<_>>();
    let mut the_models = Vec::default();
    collect_models(knowledge, &the_symbols, Model::default(), &mut the_models)?;
    Ok(the_models)
}

fn collect_models(
    knowledge: &Proposition,
    remaining: &[Symbol],
    model: Model,
    the_models: &mut Vec<Model>,
) -> Result<(), err::EvaluationError> {
    match remaining.split_first() {
        None => {
            if evaluate(knowledge, &model)? {
                the_models.push(model);
            }
            Ok(())
        }

        Some((symbol, remaining)) => {
            let model_true = model.extended(symbol.clone(), true);
            let model_false = model.extended(symbol.clone(), false);

            collect_models(knowledge, remaining, model_true, the_models)?;
            collect_models(knowledge, remaining, model_false, the_models)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::proposition::{and, biconditional, implication, not, or, symbol};

    #[test]
    fn conjunct_entailed() {
        let p = symbol("P");
        let q = symbol("Q");
        let kb = and([p.clone(), q.clone()]);

        assert_eq!(model_check(&kb, &q), Ok(true));
        assert_eq!(model_check(&kb, &p), Ok(true));
        assert_eq!(model_check(&kb, &not(q)), Ok(false));
    }

    #[test]
    fn unrelated_symbols() {
        assert_eq!(model_check(&symbol("A"), &symbol("B")), Ok(false));
    }

    #[test]
    fn inconsistent_knowledge() {
        let kb = and([symbol("A"), not(symbol("A"))]);
        assert_eq!(model_check(&kb, &symbol("B")), Ok(true));
        assert_eq!(model_check(&kb, &not(symbol("B"))), Ok(true));
    }

    #[test]
    fn empty_knowledge() {
        let kb = and([]);
        assert_eq!(model_check(&kb, &or([symbol("A"), not(symbol("A"))])), Ok(true));
        assert_eq!(model_check(&kb, &symbol("A")), Ok(false));
        assert_eq!(model_check(&kb, &and([])), Ok(true));
        assert_eq!(model_check(&kb, &or([])), Ok(false));
    }

    #[test]
    fn modus_tollens() {
        let kb = and([implication(symbol("rain"), symbol("wet")), not(symbol("wet"))]);
        assert_eq!(model_check(&kb, &not(symbol("rain"))), Ok(true));
    }

    #[test]
    fn entailed_symbols_of_kb() {
        let kb = and([
            symbol("A"),
            biconditional(symbol("A"), symbol("B")),
            or([symbol("C"), symbol("D")]),
        ]);

        let entailed = entailed_symbols(&kb).map(|symbols| {
            symbols
                .into_iter()
                .map(|symbol| symbol.name().to_owned())
                .collect::<Vec<_>>()
        });

        assert_eq!(entailed, Ok(vec!["A".to_owned(), "B".to_owned()]));
    }

    #[test]
    fn models_of_kb() {
        let kb = or([symbol("A"), symbol("B")]);
        let the_models = models(&kb);
        assert_eq!(the_models.map(|models| models.len()), Ok(3));

        assert_eq!(models(&and([symbol("A"), not(symbol("A"))])), Ok(vec![]));
        assert_eq!(models(&and([])), Ok(vec![Model::default()]));
    }
}
