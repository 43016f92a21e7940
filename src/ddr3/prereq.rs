//! Prerequisite Resolver.
//!
//! For a desired command at a target node, returns the single command that
//! must legally precede it in the current state, or `None` when the command
//! is already legal. The interpreter re-resolves recursively until it
//! reaches a legal command; the tables are constructed so that the chain
//! always terminates (exit power-down, precharge, activate, then the
//! access).
//!
//! Resolution walks the lineage top-down, so a rank's power state is
//! resolved before any bank-level concern: nothing is legal in power-down
//! or self-refresh until the matching exit command has been issued.

use crate::hierarchy::{Node, NodeArena, NodeId};

use super::{Command, Level, State};

/// Resolves the prerequisite for `cmd` at `target`.
///
/// `row` is the target row of an activate or column access; it decides
/// whether an open bank needs a precharge before the access.
pub(crate) fn resolve(
    arena: &NodeArena,
    target: NodeId,
    cmd: Command,
    row: Option<u64>,
) -> Option<Command> {
    for id in arena.lineage(target) {
        let need = match arena.node(id).level() {
            Level::Rank => rank_prereq(arena, id, cmd),
            Level::Bank => bank_prereq(arena.node(id), cmd, row),
            _ => None,
        };
        if need.is_some() {
            return need;
        }
    }
    None
}

/// Rank-level policy: power-state exits come first, and rank-wide
/// operations require all banks precharged.
fn rank_prereq(arena: &NodeArena, id: NodeId, cmd: Command) -> Option<Command> {
    let state = arena.node(id).state()?;
    match cmd {
        Command::Pde => match state {
            State::SelfRefresh => Some(Command::Srx),
            _ => None,
        },
        Command::Sre => match state {
            State::PowerUp => any_bank_open(arena, id).then_some(Command::PreA),
            State::ActivePowerDown | State::PrechargePowerDown => Some(Command::Pdx),
            _ => None,
        },
        Command::Pdx | Command::Srx => None,
        Command::Ref => match state {
            State::PowerUp => any_bank_open(arena, id).then_some(Command::PreA),
            State::ActivePowerDown | State::PrechargePowerDown => Some(Command::Pdx),
            State::SelfRefresh => Some(Command::Srx),
            _ => None,
        },
        _ => match state {
            State::ActivePowerDown | State::PrechargePowerDown => Some(Command::Pdx),
            State::SelfRefresh => Some(Command::Srx),
            _ => None,
        },
    }
}

/// Bank-level policy: accesses need the right row open, and re-activation
/// of an open bank goes through a precharge.
fn bank_prereq(node: &Node, cmd: Command, row: Option<u64>) -> Option<Command> {
    match cmd {
        Command::Act => match node.state() {
            Some(State::Opened) => Some(Command::Pre),
            _ => None,
        },
        Command::Rd | Command::Wr | Command::Rda | Command::Wra => match node.state() {
            Some(State::Closed) => Some(Command::Act),
            Some(State::Opened) => {
                if row.is_some() && node.open_row() == row {
                    None
                } else {
                    Some(Command::Pre)
                }
            }
            _ => None,
        },
        _ => None,
    }
}

fn any_bank_open(arena: &NodeArena, rank: NodeId) -> bool {
    arena
        .node(rank)
        .children()
        .iter()
        .any(|&b| arena.node(b).state() == Some(State::Opened))
}
