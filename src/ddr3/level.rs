//! Device Addressing Levels.
//!
//! DDR3 devices are addressed through a strict hierarchy: channels contain
//! ranks, ranks contain banks, and banks are addressed by row and column.
//! Rows and columns are logical addressing contexts rather than allocated
//! nodes; only channels, ranks, and banks exist as runtime instances.

use std::fmt;

use super::State;

/// A tier in the device addressing hierarchy.
///
/// The discriminants are ordered parent-to-child and double as indices into
/// the per-level tables (organization counts, timing constraint lists).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Channel: one memory bus, the root of the hierarchy.
    Channel = 0,

    /// Rank: a set of devices sharing a chip select; carries the power
    /// state (power-up, power-down, self-refresh).
    Rank = 1,

    /// Bank: an independently operable array with one row buffer; carries
    /// the open/closed state.
    Bank = 2,

    /// Row: addressing context within a bank, not an allocated node.
    Row = 3,

    /// Column: addressing context within a row, not an allocated node.
    Column = 4,
}

impl Level {
    /// Number of levels, and the extent of every per-level table.
    pub const COUNT: usize = 5;

    /// All levels in parent-to-child order.
    pub const ALL: [Level; Level::COUNT] = [
        Level::Channel,
        Level::Rank,
        Level::Bank,
        Level::Row,
        Level::Column,
    ];

    /// Returns the initial state of a node at this level.
    ///
    /// Ranks power up in `PowerUp` and banks start `Closed`; channels,
    /// rows, and columns carry no state of their own.
    pub fn initial_state(self) -> Option<State> {
        match self {
            Level::Rank => Some(State::PowerUp),
            Level::Bank => Some(State::Closed),
            Level::Channel | Level::Row | Level::Column => None,
        }
    }

    /// Returns the next level down the hierarchy, if any.
    pub fn child(self) -> Option<Level> {
        match self {
            Level::Channel => Some(Level::Rank),
            Level::Rank => Some(Level::Bank),
            Level::Bank => Some(Level::Row),
            Level::Row => Some(Level::Column),
            Level::Column => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Channel => "Channel",
            Level::Rank => "Rank",
            Level::Bank => "Bank",
            Level::Row => "Row",
            Level::Column => "Column",
        };
        write!(f, "{}", name)
    }
}
