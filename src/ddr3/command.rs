//! Command Taxonomy.
//!
//! The twelve physical DDR3 commands, their scope (the level each command
//! primarily acts on), the classification predicates the other tables are
//! built from, and the translation of front-end request intents to physical
//! commands.

use std::fmt;

use super::Level;

/// A physical DDR3 command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Row activate: stages a row into the bank's row buffer.
    Act = 0,

    /// Row precharge: closes the bank's open row.
    Pre = 1,

    /// Precharge all banks in a rank.
    PreA = 2,

    /// Column read.
    Rd = 3,

    /// Column write.
    Wr = 4,

    /// Column read with auto-precharge; closes the row on completion.
    Rda = 5,

    /// Column write with auto-precharge; closes the row on completion.
    Wra = 6,

    /// Refresh one rank.
    Ref = 7,

    /// Power-down entry.
    Pde = 8,

    /// Power-down exit.
    Pdx = 9,

    /// Self-refresh entry.
    Sre = 10,

    /// Self-refresh exit.
    Srx = 11,
}

impl Command {
    /// Number of commands, and the extent of every per-command table.
    pub const COUNT: usize = 12;

    /// All commands in table order.
    pub const ALL: [Command; Command::COUNT] = [
        Command::Act,
        Command::Pre,
        Command::PreA,
        Command::Rd,
        Command::Wr,
        Command::Rda,
        Command::Wra,
        Command::Ref,
        Command::Pde,
        Command::Pdx,
        Command::Sre,
        Command::Srx,
    ];

    /// Returns the level this command logically acts on.
    ///
    /// Column accesses address a column, activate addresses a row, and the
    /// refresh/power commands act on a whole rank. The interpreter uses the
    /// scope to pick how deep in the hierarchy to target a command.
    pub fn scope(self) -> Level {
        match self {
            Command::Act => Level::Row,
            Command::Pre => Level::Bank,
            Command::PreA => Level::Rank,
            Command::Rd | Command::Wr | Command::Rda | Command::Wra => Level::Column,
            Command::Ref | Command::Pde | Command::Pdx | Command::Sre | Command::Srx => Level::Rank,
        }
    }

    /// Returns `true` if this command activates a row.
    pub fn is_opening(self) -> bool {
        matches!(self, Command::Act)
    }

    /// Returns `true` if this command accesses an open row (any column
    /// read or write variant).
    pub fn is_accessing(self) -> bool {
        matches!(
            self,
            Command::Rd | Command::Wr | Command::Rda | Command::Wra
        )
    }

    /// Returns `true` if this command closes a row, either explicitly or
    /// through auto-precharge.
    pub fn is_closing(self) -> bool {
        matches!(
            self,
            Command::Rda | Command::Wra | Command::Pre | Command::PreA
        )
    }

    /// Returns `true` if this command refreshes a rank.
    pub fn is_refreshing(self) -> bool {
        matches!(self, Command::Ref)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Act => "ACT",
            Command::Pre => "PRE",
            Command::PreA => "PREA",
            Command::Rd => "RD",
            Command::Wr => "WR",
            Command::Rda => "RDA",
            Command::Wra => "WRA",
            Command::Ref => "REF",
            Command::Pde => "PDE",
            Command::Pdx => "PDX",
            Command::Sre => "SRE",
            Command::Srx => "SRX",
        };
        write!(f, "{}", name)
    }
}

/// Request intent produced by the memory-controller front end.
///
/// Every request type has a fixed physical command; translation is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestType {
    /// Data read.
    Read,

    /// Data write.
    Write,

    /// Periodic refresh.
    Refresh,

    /// Enter power-down.
    PowerDown,

    /// Enter self-refresh.
    SelfRefresh,
}

impl RequestType {
    /// Translates this request intent to its physical command.
    pub fn translate(self) -> Command {
        match self {
            RequestType::Read => Command::Rd,
            RequestType::Write => Command::Wr,
            RequestType::Refresh => Command::Ref,
            RequestType::PowerDown => Command::Pde,
            RequestType::SelfRefresh => Command::Sre,
        }
    }
}
