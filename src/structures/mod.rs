//! Key structures, such as symbols, propositions, and valuations.
//!
//! ## Languages
//!
//! A *language* 𝓛 is some set of [symbols](symbol), closed under the operations of negation, conjunction, disjunction, implication, and biconditional.
//! Every [proposition] is expressed in some language, and the least such language is determined by the [symbols](crate::procedures::symbols) of the proposition.
//!
//! Languages do not have an implementation, though a [universe] fixes a set of symbols of interest and supports building propositions over those symbols.
//!
//! ## Knowledge bases
//!
//! A knowledge base is a proposition, typically a conjunction of independently asserted facts.
//! There is no distinct structure for a knowledge base.
//!
//! ## (Boolean) values
//!
//! A (boolean) values is one of two things, identified as [true] and [false].

pub mod proposition;
pub mod symbol;
pub mod universe;
pub mod valuation;
