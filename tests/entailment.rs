use otter_know::{
    procedures::model_check::{entailed_symbols, find_entailments, model_check, models},
    structures::{
        proposition::{and, biconditional, implication, not, or, symbol, Proposition},
        symbol::Symbol,
        valuation::Model,
    },
};

fn knights_and_knaves() -> (Proposition, Proposition, Proposition) {
    let knight = symbol("I am a knight!");
    let knave = symbol("I am a knave.");

    let kb = and([
        or([
            and([knight.clone(), not(knave.clone())]),
            and([knave.clone(), not(knight.clone())]),
        ]),
        implication(knight.clone(), and([knight.clone(), knave.clone()])),
        implication(knave.clone(), not(and([knight.clone(), knave.clone()]))),
    ]);

    (kb, knight, knave)
}

mod riddles {
    use super::*;

    #[test]
    fn knave() {
        #[cfg(feature = "log")]
        env_logger::init();

        let (kb, knight, knave) = knights_and_knaves();

        assert_eq!(model_check(&kb, &knave), Ok(true));
        assert_eq!(model_check(&kb, &knight), Ok(false));
        assert_eq!(model_check(&kb, &not(knight)), Ok(true));
    }

    #[test]
    fn inference_discovery() {
        let (kb, knight, knave) = knights_and_knaves();

        assert_eq!(
            find_entailments(&kb, [&knight, &knave, &not(knight.clone())]),
            Ok(vec![knave.clone(), not(knight)])
        );

        assert_eq!(entailed_symbols(&kb), Ok(vec![Symbol::from("I am a knave.")]));
    }

    #[test]
    fn accumulated_knowledge() {
        let mut kb = and([]);
        assert!(kb.add(or([symbol("mustard"), symbol("plum"), symbol("scarlet")])).is_ok());
        assert_eq!(model_check(&kb, &symbol("plum")), Ok(false));

        assert!(kb.add(not(symbol("mustard"))).is_ok());
        assert_eq!(model_check(&kb, &symbol("plum")), Ok(false));

        assert!(kb.add(not(symbol("scarlet"))).is_ok());
        assert_eq!(model_check(&kb, &symbol("plum")), Ok(true));
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn disjoint_symbols() {
        assert_eq!(model_check(&symbol("A"), &symbol("B")), Ok(false));
    }

    #[test]
    fn tautologies() {
        let excluded_middle = or([symbol("A"), not(symbol("A"))]);
        assert_eq!(model_check(&symbol("B"), &excluded_middle), Ok(true));
        assert_eq!(model_check(&and([]), &excluded_middle), Ok(true));

        let self_implication = biconditional(symbol("A"), symbol("A"));
        assert_eq!(model_check(&or([]), &self_implication), Ok(true));
    }

    #[test]
    fn contradiction_entails_anything() {
        let kb = and([symbol("A"), not(symbol("A"))]);
        assert_eq!(model_check(&kb, &or([])), Ok(true));
        assert_eq!(model_check(&kb, &symbol("B")), Ok(true));
    }
}

/// Random propositions, and comparisons of model checking against a truth table.
mod cross_check {
    use super::*;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    const NAMES: [&str; 4] = ["A", "B", "C", "D"];

    fn random_proposition(rng: &mut StdRng, depth: usize) -> Proposition {
        if depth == 0 {
            return symbol(NAMES[rng.gen_range(0..NAMES.len())]);
        }

        match rng.gen_range(0..6) {
            0 => symbol(NAMES[rng.gen_range(0..NAMES.len())]),
            1 => not(random_proposition(rng, depth - 1)),
            2 => {
                let count = rng.gen_range(0..4);
                and((0..count).map(|_| random_proposition(rng, depth - 1)).collect::<Vec<_>>())
            }
            3 => {
                let count = rng.gen_range(0..4);
                or((0..count).map(|_| random_proposition(rng, depth - 1)).collect::<Vec<_>>())
            }
            4 => implication(random_proposition(rng, depth - 1), random_proposition(rng, depth - 1)),
            _ => biconditional(random_proposition(rng, depth - 1), random_proposition(rng, depth - 1)),
        }
    }

    fn truth_table() -> Vec<Model> {
        (0..(1_u32 << NAMES.len()))
            .map(|bits| {
                NAMES
                    .iter()
                    .enumerate()
                    .map(|(index, name)| (Symbol::from(*name), bits & (1 << index) != 0))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn entailment_agrees_with_truth_table() {
        let mut rng = StdRng::seed_from_u64(0x07732);
        let table = truth_table();

        for _ in 0..200 {
            let kb = random_proposition(&mut rng, 3);
            let query = random_proposition(&mut rng, 3);

            let expected = table.iter().all(|model| {
                kb.evaluate(model) != Ok(true) || query.evaluate(model) == Ok(true)
            });

            assert_eq!(model_check(&kb, &query), Ok(expected), "{kb} / {query}");
        }
    }

    #[test]
    fn entailed_queries_hold_on_models() {
        let mut rng = StdRng::seed_from_u64(0x0b5e55);

        for _ in 0..100 {
            let kb = random_proposition(&mut rng, 3);
            let query = random_proposition(&mut rng, 2);

            if model_check(&kb, &query) != Ok(true) {
                continue;
            }

            let the_models = models(&kb).unwrap_or_default();
            for model in the_models {
                let mut total = model.clone();
                for symbol in query.symbols() {
                    total.entry(symbol).or_insert(false);
                }
                assert_eq!(query.evaluate(&total), Ok(true), "{kb} / {query}");

                for symbol in query.symbols() {
                    total.insert(symbol, true);
                }
                for (symbol, value) in &model {
                    total.insert(symbol.clone(), *value);
                }
                assert_eq!(query.evaluate(&total), Ok(true), "{kb} / {query}");
            }
        }
    }
}

/// Propositions are only read by a check, and so may be shared between checks on different threads.
mod parallel {
    use super::*;

    #[test]
    fn shared_knowledge() {
        let (kb, knight, knave) = knights_and_knaves();
        let queries = [knight.clone(), knave.clone(), not(knight), not(knave)];

        let kb = &kb;
        let results = crossbeam::scope(|scope| {
            let handles = queries
                .iter()
                .map(|query| scope.spawn(move |_| model_check(kb, query)))
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().ok())
                .collect::<Vec<_>>()
        });

        assert_eq!(
            results.ok(),
            Some(vec![Some(Ok(false)), Some(Ok(true)), Some(Ok(true)), Some(Ok(false))])
        );
    }
}
