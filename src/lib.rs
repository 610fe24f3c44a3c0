//! A library for representing propositional knowledge and determining what follows from that knowledge.
//!
//! otter_know is a library for stating facts as propositions of a small propositional language, and for deciding whether a knowledge base entails some query by checking each model of the knowledge base and query.
//!
//! Model checking is exact, and makes no attempt to be clever.
//! Every model of the symbols of a knowledge base and query is considered, and so the time taken by a check is exponential in the count of symbols.
//! For anything beyond a few dozen symbols, something such as a SAT solver is a better fit.
//!
//! # Orientation
//!
//! The library is designed around [propositions](structures::proposition), and a handful of [procedures] on propositions:
//! - [Evaluation](procedures::evaluate) of a proposition on a [valuation](structures::valuation).
//! - [Collecting the symbols](procedures::symbols) of a proposition.
//! - [Rendering](procedures::render) a proposition as a string.
//! - [Model checking](procedures::model_check), to decide entailment.
//!
//! In addition:
//! - A [universe](structures::universe) of symbols supports stating puzzles over a fixed set of symbols.
//! - The [search] module contains an (unrelated) uninformed search through a space of states.
//!
//! # Examples
//!
//! + A knight always tells the truth, and a knave always lies.
//!   Someone says "I am both a knight and a knave!"
//!
//! ```rust
//! # use otter_know::procedures::model_check::model_check;
//! # use otter_know::structures::proposition::{and, implication, not, or, symbol};
//! let knight = symbol("I am a knight!");
//! let knave = symbol("I am a knave.");
//!
//! let kb = and([
//!     or([
//!         and([knight.clone(), not(knave.clone())]),
//!         and([knave.clone(), not(knight.clone())]),
//!     ]),
//!     implication(knight.clone(), and([knight.clone(), knave.clone()])),
//!     implication(knave.clone(), not(and([knight.clone(), knave.clone()]))),
//! ]);
//!
//! assert_eq!(model_check(&kb, &knave), Ok(true));
//! assert_eq!(model_check(&kb, &knight), Ok(false));
//! ```
//!
//! + Find everything which follows about the symbols of a knowledge base.
//!
//! ```rust
//! # use otter_know::procedures::model_check::entailed_symbols;
//! # use otter_know::structures::proposition::{and, implication, symbol};
//! # use otter_know::structures::symbol::Symbol;
//! let mut kb = and([]);
//! assert!(kb.add(implication(symbol("rain"), symbol("wet"))).is_ok());
//! assert!(kb.add(implication(symbol("wet"), symbol("slippery"))).is_ok());
//! assert!(kb.add(symbol("rain")).is_ok());
//!
//! let entailed = entailed_symbols(&kb).unwrap();
//! assert_eq!(entailed, ["rain", "slippery", "wet"].map(Symbol::from));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with targets listed in [misc::log], and no log implementation is provided.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of each entailment found can be found with `RUST_LOG=model_check=debug …`
//! - Logs of filters applied to a universe can be found with `RUST_LOG=universe=trace …`

pub mod config;
pub mod misc;
pub mod procedures;
pub mod search;
pub mod structures;
pub mod types;
