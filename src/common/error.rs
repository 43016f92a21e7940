//! Model Error Types.
//!
//! The error taxonomy is narrow because the model is a closed, exhaustively
//! tabulated description of the standard. String-based parameter lookup is
//! the only fallible construction path, and a transition request outside the
//! tabulated (level, command) grid indicates a defect in the caller, not a
//! recoverable runtime condition. Timing and prerequisite queries never
//! fail: illegality is reported as "not yet legal until cycle N" or "issue
//! command X first".

use thiserror::Error;

use crate::ddr3::{Command, Level, State};

/// Errors raised by the DDR3 model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A construction-time string did not match any organization or speed
    /// table key.
    ///
    /// Fatal to construction; the caller must fix its parameters, not retry.
    #[error("unknown {kind} parameter: {name}")]
    UnknownParameter {
        /// Which table was consulted ("organization" or "speed").
        kind: &'static str,
        /// The string that failed to match.
        name: String,
    },

    /// A (level, command, state) combination with no table entry was
    /// requested.
    ///
    /// The model promises totality over the combinations a correct
    /// interpreter can reach, so this indicates a structurally invalid
    /// command and is treated as fatal.
    #[error("no transition defined for {command} at {level} level (state {state:?})")]
    UndefinedTransition {
        /// The level of the node the transition was requested on.
        level: Level,
        /// The command whose transition was requested.
        command: Command,
        /// The node state at the time of the request, if the level carries
        /// state of its own.
        state: Option<State>,
    },
}
