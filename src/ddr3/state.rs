//! Node States.
//!
//! Each level with state of its own draws from this enumeration: banks are
//! `Opened` or `Closed`, ranks move among `PowerUp`, the two power-down
//! flavors, and `SelfRefresh`. A node's state is always one of the states
//! legal for its level; the state-machine table is the only component that
//! mutates it.

use std::fmt;

/// State of a node in the device hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Bank state: a row is activated and staged in the row buffer.
    Opened,

    /// Bank state: no row is activated.
    Closed,

    /// Rank state: powered up and accepting commands.
    PowerUp,

    /// Rank state: power-down entered while at least one bank was open.
    ActivePowerDown,

    /// Rank state: power-down entered with all banks precharged.
    PrechargePowerDown,

    /// Rank state: self-refresh, clock disabled, exit required before any
    /// other command.
    SelfRefresh,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Opened => "Opened",
            State::Closed => "Closed",
            State::PowerUp => "PowerUp",
            State::ActivePowerDown => "ActivePowerDown",
            State::PrechargePowerDown => "PrechargePowerDown",
            State::SelfRefresh => "SelfRefresh",
        };
        write!(f, "{}", name)
    }
}
