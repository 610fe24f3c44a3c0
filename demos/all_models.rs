use otter_know::{
    procedures::model_check::{model_check, models},
    structures::{
        proposition::{and, biconditional, implication, not, or, symbol, Proposition},
        valuation::valuation_string,
    },
};

/// Every model of a small knowledge base is printed.
/// Each symbol true on every model is then checked to be entailed by the knowledge base, and each other symbol not.
fn main() {
    let kb = and([
        or([symbol("p"), symbol("q")]),
        implication(symbol("q"), symbol("r")),
        biconditional(symbol("r"), not(symbol("s"))),
    ]);

    println!("Knowledge base: {kb}");

    let the_models = match models(&kb) {
        Ok(models) => models,
        Err(e) => {
            println!("Evaluation error: {e}");
            std::process::exit(1);
        }
    };

    for (count, model) in the_models.iter().enumerate() {
        println!("v {count}\t {}", valuation_string(model));
    }

    for symbol in kb.symbols() {
        let always = the_models
            .iter()
            .all(|model| model.get(&symbol).copied().unwrap_or(false));

        let query = Proposition::Symbol(symbol.clone());
        match model_check(&kb, &query) {
            Ok(entailed) => {
                assert_eq!(entailed, always);
                println!("{symbol}: {}", if entailed { "entailed" } else { "not entailed" });
            }
            Err(e) => {
                println!("Evaluation error: {e}");
                std::process::exit(1);
            }
        }
    }
}
