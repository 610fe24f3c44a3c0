/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly at the trace and debug levels.
A model check visits every total model of its symbols, and so trace logs of a check are exponential in the count of symbols.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [evaluation](crate::procedures::evaluate)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to [model checking](crate::procedures::model_check)
    pub const MODEL_CHECK: &str = "model_check";

    /// Logs related to a [symbol universe](crate::structures::universe)
    pub const UNIVERSE: &str = "universe";

    /// Logs related to [search](crate::search)
    pub const SEARCH: &str = "search";
}
