//! Timing Constraint Table.
//!
//! For each (level, command) pair, a list of [`TimingEntry`] values naming
//! a prior reference command, a history distance, a minimum cycle delay,
//! and whether the constraint is measured against sibling nodes of the
//! level instead of the node's own lineage. The earliest legal cycle for a
//! candidate command is the maximum over all matching entries of
//! `issue_cycle(reference) + value`; the most conservative constraint
//! always governs.
//!
//! Constraints attach to the coarsest level that can observe them: data-bus
//! occupancy at channel level, inter-bank and power-state spacing at rank
//! level, and same-bank spacing at bank level. Rank-level history sees the
//! issues of every child bank, which is what lets the four-activate window
//! span sibling banks.

use super::{Command, Level, SpeedEntry};

/// One timing constraint: the candidate command must trail the `dist`-th
/// most recent issue of `cmd` by at least `val` cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingEntry {
    /// The prior command the constraint is measured from.
    pub cmd: Command,

    /// Which prior issue of `cmd` to measure from: 1 is the most recent.
    pub dist: usize,

    /// Minimum cycle delay.
    pub val: u64,

    /// If set, the constraint applies against every sibling node at this
    /// level rather than the node's own history.
    pub sibling: bool,
}

/// The full per-(level, command) constraint table for one speed bin.
#[derive(Debug)]
pub struct TimingTable {
    entries: [[Vec<TimingEntry>; Command::COUNT]; Level::COUNT],
}

impl TimingTable {
    /// Returns the constraints on `cmd` evaluated at `level`.
    pub fn get(&self, level: Level, cmd: Command) -> &[TimingEntry] {
        &self.entries[level as usize][cmd as usize]
    }

    /// Returns the deepest history of `cmd` any entry looks back through.
    ///
    /// The node arena bounds its per-command issue history to this depth.
    pub fn history_depth(&self, cmd: Command) -> usize {
        self.entries
            .iter()
            .flatten()
            .flatten()
            .filter(|e| e.cmd == cmd)
            .map(|e| e.dist)
            .max()
            .unwrap_or(1)
            .max(1)
    }

    /// Builds the constraint table from a derived speed entry.
    ///
    /// `s` must already have its organization-dependent placeholders filled
    /// in; every zero-valued field would otherwise become a vacuous
    /// constraint.
    pub fn build(s: &SpeedEntry) -> Self {
        let mut entries: [[Vec<TimingEntry>; Command::COUNT]; Level::COUNT] =
            std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()));

        let reads = [Command::Rd, Command::Rda];
        let writes = [Command::Wr, Command::Wra];

        let mut push = |level: Level, cmd: Command, e: TimingEntry| {
            entries[level as usize][cmd as usize].push(e);
        };
        let own = |cmd: Command, dist: usize, val: u64| TimingEntry {
            cmd,
            dist,
            val,
            sibling: false,
        };
        let sib = |cmd: Command, val: u64| TimingEntry {
            cmd,
            dist: 1,
            val,
            sibling: true,
        };

        // Channel: the data bus is shared by every rank, so back-to-back
        // bursts of the same direction are spaced by the burst time.
        for cur in reads {
            for prev in reads {
                push(Level::Channel, cur, own(prev, 1, s.n_bl));
            }
        }
        for cur in writes {
            for prev in writes {
                push(Level::Channel, cur, own(prev, 1, s.n_bl));
            }
        }

        // Rank: column-to-column spacing and read/write turnaround.
        for cur in reads {
            for prev in reads {
                push(Level::Rank, cur, own(prev, 1, s.n_ccd));
            }
            for prev in writes {
                push(Level::Rank, cur, own(prev, 1, s.n_cwl + s.n_bl + s.n_wtr));
            }
        }
        for cur in writes {
            for prev in writes {
                push(Level::Rank, cur, own(prev, 1, s.n_ccd));
            }
            for prev in reads {
                push(Level::Rank, cur, own(prev, 1, s.n_cl + s.n_ccd + 2 - s.n_cwl));
            }
        }

        // Rank: bus turnaround against sibling ranks.
        for cur in reads {
            for prev in reads {
                push(Level::Rank, cur, sib(prev, s.n_bl + s.n_rtrs));
            }
            for prev in writes {
                push(Level::Rank, cur, sib(prev, s.n_cwl + s.n_bl + s.n_rtrs - s.n_cl));
            }
        }
        for cur in writes {
            for prev in writes {
                push(Level::Rank, cur, sib(prev, s.n_bl + s.n_rtrs));
            }
            for prev in reads {
                push(Level::Rank, cur, sib(prev, s.n_cl + s.n_bl + s.n_rtrs - s.n_cwl));
            }
        }

        // Rank: column access against precharge-all.
        push(Level::Rank, Command::PreA, own(Command::Rd, 1, s.n_rtp));
        push(Level::Rank, Command::PreA, own(Command::Wr, 1, s.n_cwl + s.n_bl + s.n_wr));

        // Rank: column access against power-down entry/exit.
        push(Level::Rank, Command::Pde, own(Command::Rd, 1, s.n_cl + s.n_bl + 1));
        push(Level::Rank, Command::Pde, own(Command::Rda, 1, s.n_cl + s.n_bl + 1));
        push(Level::Rank, Command::Pde, own(Command::Wr, 1, s.n_cwl + s.n_bl + s.n_wr));
        push(Level::Rank, Command::Pde, own(Command::Wra, 1, s.n_cwl + s.n_bl + s.n_wr + 1));
        for cur in reads.into_iter().chain(writes) {
            push(Level::Rank, cur, own(Command::Pdx, 1, s.n_xp));
        }

        // Rank: activate spacing across banks. The four-activate window is
        // measured from the third-most-recent prior activate so that four
        // back-to-back activates always span the full window.
        push(Level::Rank, Command::Act, own(Command::Act, 1, s.n_rrd));
        push(Level::Rank, Command::Act, own(Command::Act, 3, s.n_faw));
        push(Level::Rank, Command::Act, own(Command::PreA, 1, s.n_rp));
        push(Level::Rank, Command::PreA, own(Command::Act, 1, s.n_ras));

        // Rank: refresh requires all banks precharged and blocks activates
        // for the refresh cycle time.
        push(Level::Rank, Command::Ref, own(Command::Act, 1, s.n_rc));
        push(Level::Rank, Command::Ref, own(Command::Pre, 1, s.n_rp));
        push(Level::Rank, Command::Ref, own(Command::PreA, 1, s.n_rp));
        push(Level::Rank, Command::Ref, own(Command::Ref, 1, s.n_rfc));
        push(Level::Rank, Command::Act, own(Command::Ref, 1, s.n_rfc));

        // Rank: power-down entry/exit spacing.
        push(Level::Rank, Command::Act, own(Command::Pdx, 1, s.n_xp));
        push(Level::Rank, Command::Pdx, own(Command::Pde, 1, s.n_pd));
        push(Level::Rank, Command::Pde, own(Command::Pdx, 1, s.n_xp));

        // Rank: self-refresh exit. Reads need the DLL relocked; everything
        // else waits the plain exit time.
        for cur in reads {
            push(Level::Rank, cur, own(Command::Srx, 1, s.n_xsdll));
        }
        for cur in writes {
            push(Level::Rank, cur, own(Command::Srx, 1, s.n_xs));
        }
        push(Level::Rank, Command::Act, own(Command::Srx, 1, s.n_xs));
        push(Level::Rank, Command::Ref, own(Command::Srx, 1, s.n_xs));
        push(Level::Rank, Command::Pde, own(Command::Srx, 1, s.n_xs));
        push(Level::Rank, Command::Srx, own(Command::Sre, 1, s.n_ckesr));
        push(Level::Rank, Command::Sre, own(Command::Pdx, 1, s.n_xp));

        // Bank: column access against the opening activate.
        for cur in reads.into_iter().chain(writes) {
            push(Level::Bank, cur, own(Command::Act, 1, s.n_rcd));
        }

        // Bank: precharge after the last column access, and the implicit
        // precharge of the auto-precharge variants folded into the next
        // activate.
        push(Level::Bank, Command::Pre, own(Command::Rd, 1, s.n_rtp));
        push(Level::Bank, Command::Pre, own(Command::Wr, 1, s.n_cwl + s.n_bl + s.n_wr));
        push(Level::Bank, Command::Act, own(Command::Rda, 1, s.n_rtp + s.n_rp));
        push(Level::Bank, Command::Act, own(Command::Wra, 1, s.n_cwl + s.n_bl + s.n_wr + s.n_rp));

        // Bank: row cycle.
        push(Level::Bank, Command::Act, own(Command::Act, 1, s.n_rc));
        push(Level::Bank, Command::Act, own(Command::Pre, 1, s.n_rp));
        push(Level::Bank, Command::Pre, own(Command::Act, 1, s.n_ras));

        TimingTable { entries }
    }
}
