use otter_know::{
    procedures::model_check::{model_check, models},
    structures::{
        proposition::{and, implication, not, or, symbol, Proposition},
        valuation::valuation_string,
    },
    types::err::ErrorKind,
};

/// The riddle, as a knowledge base together with the candidate answers.
fn riddle() -> (Proposition, [Proposition; 2]) {
    let knight = symbol("I am a knight!");
    let knave = symbol("I am a knave.");

    let kb = and([
        // Exactly one of knight or knave.
        or([
            and([knight.clone(), not(knave.clone())]),
            and([knave.clone(), not(knight.clone())]),
        ]),
        // What a knight says is true, and what a knave says is false.
        implication(knight.clone(), and([knight.clone(), knave.clone()])),
        implication(knave.clone(), not(and([knight.clone(), knave.clone()]))),
    ]);

    (kb, [knight, knave])
}

pub fn run(show_kb: bool, show_models: bool) -> Result<(), ErrorKind> {
    println!("A knight always tells the truth. A knave always lies.");
    println!(r#"I said: "I am both a knight and a knave!""#);

    let (kb, queries) = riddle();

    if show_kb {
        println!("\nKnowledge base: {kb}");
    }

    if show_models {
        for model in models(&kb)? {
            println!("Model: {}", valuation_string(&model));
        }
    }

    for query in &queries {
        if model_check(&kb, query)? {
            println!("\nKnowledge base inferred: {:?}", query.to_string());
            return Ok(());
        }
    }

    println!("\nKnowledge base could not make any inferences.");
    Ok(())
}
