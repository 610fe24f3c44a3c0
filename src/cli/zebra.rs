use otter_know::{
    procedures::model_check::find_entailments,
    structures::{
        proposition::{and, not, symbol, Proposition},
        universe::{SymbolFilter, SymbolUniverse},
    },
    types::err::ErrorKind,
};

const HOUSES: &[&str] = &["1", "2", "3"];
const COLOURS: &[&str] = &["Red", "Green", "Blue"];

/// Each house has exactly one colour, and each colour belongs to exactly one house.
fn constraints(universe: &mut SymbolUniverse) -> Proposition {
    and(HOUSES.iter().chain(COLOURS).map(|attribute| {
        SymbolUniverse::exactly_one(universe.filter(SymbolFilter::Contains, &[*attribute]))
    }))
}

pub fn run(show_kb: bool) -> Result<(), ErrorKind> {
    println!("Three houses, painted red, green, and blue.");
    println!("The green house is the second house, and the first house is not red.");

    let mut universe = SymbolUniverse::from_product(&[HOUSES, COLOURS]);

    let mut kb = constraints(&mut universe);
    kb.add(symbol("2 Green"))?;
    kb.add(not(symbol("1 Red")))?;

    if show_kb {
        println!("\nKnowledge base: {kb}");
    }

    let candidates = universe
        .symbols()
        .iter()
        .cloned()
        .map(Proposition::Symbol)
        .collect::<Vec<_>>();

    println!();
    for (index, entailment) in find_entailments(&kb, &candidates)?.iter().enumerate() {
        println!("{index}: {entailment}");
    }

    Ok(())
}
