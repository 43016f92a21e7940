//! DDR3 Standard Model.
//!
//! The standard-specific model consumed by a device interpreter: parameter
//! tables selected at construction, the level/command taxonomy, and the
//! per-(level, command) tables for state transitions, prerequisites,
//! row-buffer status, and timing constraints.
//!
//! The model itself is immutable after construction; all mutable state
//! lives in the [`NodeArena`](crate::hierarchy::NodeArena) the interpreter
//! drives, and the only operation permitted to mutate it is the validated
//! state-machine [`apply`](Ddr3::apply).

/// Command taxonomy, scope table, and request translation.
pub mod command;

/// Addressing level hierarchy descriptor.
pub mod level;

/// Organization (density by width) parameter table.
pub mod org;

/// Speed (rate by latency grade) parameter table.
pub mod speed;

/// Node state enumeration.
pub mod state;

/// Timing constraint table.
pub mod timing;

mod prereq;
mod row;
pub(crate) mod transition;

pub use command::{Command, RequestType};
pub use level::Level;
pub use org::{Org, OrgEntry};
pub use speed::{Speed, SpeedEntry};
pub use state::State;
pub use timing::{TimingEntry, TimingTable};

use std::str::FromStr;

use log::debug;

use crate::common::ModelError;
use crate::hierarchy::{NodeArena, NodeId};

/// Burst length fetched per column access (8n prefetch).
pub const PREFETCH_SIZE: u64 = 8;

/// Channel data-bus width in bits.
pub const CHANNEL_WIDTH: u64 = 64;

/// The DDR3 device model for one organization/speed pair.
///
/// Constructed once per simulation from a requested organization and speed
/// (as enumerants or their canonical names) plus topology overrides for the
/// channel and rank counts, then queried read-only for the lifetime of the
/// run.
#[derive(Debug)]
pub struct Ddr3 {
    org: Org,
    speed: Speed,
    org_entry: OrgEntry,
    speed_entry: SpeedEntry,
    read_latency: u64,
    timing: TimingTable,
}

impl Ddr3 {
    /// Creates a model from typed selectors.
    ///
    /// The channel and rank counts default to one each; use
    /// [`set_channel_number`](Ddr3::set_channel_number) and
    /// [`set_rank_number`](Ddr3::set_rank_number) to match the simulated
    /// topology before building the node arena.
    pub fn new(org: Org, speed: Speed) -> Self {
        let mut org_entry = org.entry();
        org_entry.count[Level::Channel as usize] = 1;
        org_entry.count[Level::Rank as usize] = 1;

        let mut speed_entry = speed.entry();
        speed_entry.derive(&org_entry);

        // End-to-end access path: row-to-column delay, column access
        // latency, then the burst itself.
        let read_latency = speed_entry.n_rcd + speed_entry.n_cl + speed_entry.n_bl;
        let timing = TimingTable::build(&speed_entry);

        debug!(
            "{} / {}: tRFC={} tXS={} tRRD={} tFAW={} read_latency={}",
            org.name(),
            speed.name(),
            speed_entry.n_rfc,
            speed_entry.n_xs,
            speed_entry.n_rrd,
            speed_entry.n_faw,
            read_latency
        );

        Ddr3 {
            org,
            speed,
            org_entry,
            speed_entry,
            read_latency,
            timing,
        }
    }

    /// Creates a model from canonical organization and speed names.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownParameter`] if either name matches no
    /// table key.
    pub fn from_names(org: &str, speed: &str) -> Result<Self, ModelError> {
        Ok(Ddr3::new(Org::from_str(org)?, Speed::from_str(speed)?))
    }

    /// Returns the organization selector.
    pub fn org(&self) -> Org {
        self.org
    }

    /// Returns the speed selector.
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Returns the organization entry, including topology counts.
    pub fn org_entry(&self) -> &OrgEntry {
        &self.org_entry
    }

    /// Returns the derived speed entry.
    pub fn speed_entry(&self) -> &SpeedEntry {
        &self.speed_entry
    }

    /// Returns the end-to-end read latency in cycles, used by the
    /// interpreter to timestamp data return.
    pub fn read_latency(&self) -> u64 {
        self.read_latency
    }

    /// Overrides the number of channels in the simulated system.
    pub fn set_channel_number(&mut self, channels: usize) {
        self.org_entry.count[Level::Channel as usize] = channels;
    }

    /// Overrides the number of ranks per channel.
    pub fn set_rank_number(&mut self, ranks: usize) {
        self.org_entry.count[Level::Rank as usize] = ranks;
    }

    /// Translates a front-end request intent to its physical command.
    pub fn translate(request: RequestType) -> Command {
        request.translate()
    }

    /// Applies the state-machine transition for `cmd` at node `id`.
    ///
    /// The side effect is exactly the state mutation of that node (and,
    /// for rank-wide commands, its children); no timing bookkeeping
    /// happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UndefinedTransition`] for a structurally
    /// impossible (level, command) combination.
    pub fn apply(
        &self,
        arena: &mut NodeArena,
        id: NodeId,
        cmd: Command,
        row: Option<u64>,
    ) -> Result<(), ModelError> {
        transition::apply(arena, id, cmd, row)
    }

    /// Returns the command that must precede `cmd` at `target` to make it
    /// legal, or `None` when `cmd` is already legal in the current state.
    pub fn prerequisite(
        &self,
        arena: &NodeArena,
        target: NodeId,
        cmd: Command,
        row: Option<u64>,
    ) -> Option<Command> {
        prereq::resolve(arena, target, cmd, row)
    }

    /// Returns `true` if `cmd` is a column access targeting the row
    /// currently open in the bank at `target`.
    pub fn is_row_hit(&self, arena: &NodeArena, target: NodeId, cmd: Command, row: u64) -> bool {
        row::is_row_hit(arena, target, cmd, row)
    }

    /// Returns `true` if `cmd` is a column access and the bank at `target`
    /// has any row open.
    pub fn is_row_open(&self, arena: &NodeArena, target: NodeId, cmd: Command) -> bool {
        row::is_row_open(arena, target, cmd)
    }

    /// Returns the earliest cycle at or after `cycle` at which `cmd` may
    /// be issued at `target`, given the issue history along its lineage.
    ///
    /// Every timing entry attached to a lineage level is evaluated against
    /// that level's node (or its siblings, for sibling constraints); the
    /// latest resulting cycle wins. Returns `cycle` unmodified when no
    /// entry applies.
    pub fn earliest_legal_cycle(
        &self,
        arena: &NodeArena,
        target: NodeId,
        cmd: Command,
        cycle: u64,
    ) -> u64 {
        let mut earliest = cycle;
        for id in arena.lineage(target) {
            let level = arena.node(id).level();
            for entry in self.timing.get(level, cmd) {
                if entry.sibling {
                    for sibling in arena.siblings(id) {
                        if let Some(past) = arena.node(sibling).last_issue(entry.cmd, entry.dist) {
                            earliest = earliest.max(past + entry.val);
                        }
                    }
                } else if let Some(past) = arena.node(id).last_issue(entry.cmd, entry.dist) {
                    earliest = earliest.max(past + entry.val);
                }
            }
        }
        earliest
    }

    /// Returns the deepest history of `cmd` the timing table looks back
    /// through; the node arena bounds its history accordingly.
    pub fn history_depth(&self, cmd: Command) -> usize {
        self.timing.history_depth(cmd)
    }
}
