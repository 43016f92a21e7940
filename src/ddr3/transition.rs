//! State Machine Table.
//!
//! Per-(level, command) transition functions: given the current state of a
//! node, issuing a command yields a defined next state. Activate is the
//! only command that opens a bank; the precharge variants and the
//! auto-precharged accesses close it; refresh and the power commands move
//! rank state among power-up, the power-down flavors, and self-refresh.
//!
//! Transitions are total over the combinations a correct interpreter can
//! reach. Structurally impossible combinations (a bank transition for a
//! rank-only command, for example) are reported as
//! [`ModelError::UndefinedTransition`] rather than guarded defensively.

use crate::common::ModelError;
use crate::hierarchy::{NodeArena, NodeId};

use super::{Command, Level, State};

/// Returns `true` if a transition is defined for `cmd` at `level`.
///
/// Used by the issue path to fire transitions only at the lineage nodes
/// whose level the command mutates.
pub(crate) fn defines(level: Level, cmd: Command) -> bool {
    matches!(
        (level, cmd),
        (
            Level::Bank,
            Command::Act | Command::Pre | Command::Rd | Command::Wr | Command::Rda | Command::Wra
        ) | (
            Level::Rank,
            Command::PreA
                | Command::Ref
                | Command::Pde
                | Command::Pdx
                | Command::Sre
                | Command::Srx
        )
    )
}

/// Applies the state-machine transition for `cmd` at node `id`.
///
/// The side effect is exactly the state mutation; timing bookkeeping is the
/// caller's responsibility.
pub(crate) fn apply(
    arena: &mut NodeArena,
    id: NodeId,
    cmd: Command,
    row: Option<u64>,
) -> Result<(), ModelError> {
    let level = arena.node(id).level();
    match (level, cmd) {
        (Level::Bank, Command::Act) => {
            let node = arena.node_mut(id);
            node.state = Some(State::Opened);
            node.open_row = row;
        }
        (Level::Bank, Command::Pre | Command::Rda | Command::Wra) => {
            close_bank(arena, id);
        }
        (Level::Bank, Command::Rd | Command::Wr) => {}
        (Level::Rank, Command::PreA) => {
            for bank in arena.node(id).children().to_vec() {
                close_bank(arena, bank);
            }
        }
        (Level::Rank, Command::Ref) => {}
        (Level::Rank, Command::Pde) => {
            let open = arena
                .node(id)
                .children()
                .iter()
                .any(|&b| arena.node(b).state() == Some(State::Opened));
            arena.node_mut(id).state = Some(if open {
                State::ActivePowerDown
            } else {
                State::PrechargePowerDown
            });
        }
        (Level::Rank, Command::Pdx | Command::Srx) => {
            arena.node_mut(id).state = Some(State::PowerUp);
        }
        (Level::Rank, Command::Sre) => {
            arena.node_mut(id).state = Some(State::SelfRefresh);
        }
        _ => {
            return Err(ModelError::UndefinedTransition {
                level,
                command: cmd,
                state: arena.node(id).state(),
            });
        }
    }
    Ok(())
}

fn close_bank(arena: &mut NodeArena, id: NodeId) {
    let node = arena.node_mut(id);
    node.state = Some(State::Closed);
    node.open_row = None;
}
