//! Error types used in the library.
//!
//! - Evaluation errors are the only errors the logic engine raises, and only when a symbol has no value in the model supplied.
//!   As [model checking](crate::procedures::model_check) builds total models over every symbol it evaluates, an evaluation error from a model check indicates something has gone very wrong.
//! - Build errors follow from misuse of the builder methods on a [proposition](crate::structures::proposition).
//! - Search errors are returned by the (independent) [search](crate::search) component.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::symbol::Symbol;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Evaluation(EvaluationError),
    Search(SearchError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "build error: {e}"),
            Self::Evaluation(e) => write!(f, "evaluation error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when building a proposition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An attempt to add an element to a proposition which is neither a conjunction nor a disjunction.
    NotVariadic,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotVariadic => write!(f, "only conjunctions and disjunctions may be extended"),
        }
    }
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors during evaluation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// A symbol was read which has no value in the model.
    ///
    /// Note, conjunctions and disjunctions short-circuit, and so a missing symbol after the point a value is settled is not noted.
    UnboundSymbol(Symbol),
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundSymbol(symbol) => write!(f, "variable {symbol} not in model"),
        }
    }
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Noted errors during a search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchError {
    /// Every reachable state was examined, and none was the goal.
    GoalNotFound,

    /// The configured limit on expanded states was reached before the goal.
    ExpansionLimit(usize),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoalNotFound => write!(f, "search failed to find goal"),
            Self::ExpansionLimit(limit) => write!(f, "search stopped after expanding {limit} states"),
        }
    }
}

impl From<SearchError> for ErrorKind {
    fn from(e: SearchError) -> Self {
        ErrorKind::Search(e)
    }
}
