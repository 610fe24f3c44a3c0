//! Procedures on propositions.
//!
//! - [evaluate] determines the value of a proposition on a valuation.
//! - [symbols] collects the symbols of a proposition.
//! - [render] gives a human readable representation of a proposition.
//! - [model_check] determines whether a knowledge base entails a query, using each of the above.
//!
//! Each procedure is a function of the propositions given, and no procedure mutates a proposition.

pub mod evaluate;
pub mod model_check;
pub mod render;
pub mod symbols;
