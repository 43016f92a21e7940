//! Row-Buffer Predicates.
//!
//! Read-only classification queries over a bank's row-buffer state, used
//! by the interpreter both for legality (routing to the prerequisite
//! resolver) and for row-buffer hit-rate statistics. Neither query mutates
//! state.

use crate::hierarchy::{NodeArena, NodeId};

use super::{Command, State};

/// Returns `true` if `cmd` is a column access whose target row is the row
/// currently open in the bank at `target`.
pub(crate) fn is_row_hit(arena: &NodeArena, target: NodeId, cmd: Command, row: u64) -> bool {
    if !cmd.is_accessing() {
        return false;
    }
    let node = arena.node(target);
    node.state() == Some(State::Opened) && node.open_row() == Some(row)
}

/// Returns `true` if `cmd` is a column access and the bank at `target` has
/// any row open, regardless of row identity.
pub(crate) fn is_row_open(arena: &NodeArena, target: NodeId, cmd: Command) -> bool {
    cmd.is_accessing() && arena.node(target).state() == Some(State::Opened)
}
