//! DDR3 Device Timing and Protocol Model.
//!
//! This crate models the DDR3 device standard for use inside a cycle-level
//! memory-system simulator. For every addressable hierarchy level (channel,
//! rank, bank, row, column) it answers, on every simulated cycle: which
//! commands are currently legal, what command must be issued first to make a
//! desired command legal, whether an access is a row-buffer hit, when a
//! command may next be issued given prior history, and how issuing a command
//! mutates device state.
//!
//! # Architecture
//!
//! * **Parameter tables**: organization (density, data width, per-level
//!   element counts) and speed (clock rate plus every named JEDEC timing
//!   interval), selected once at construction.
//! * **Tables over the (level, command) grid**: state-machine transitions,
//!   prerequisite resolution, row-hit/row-open predicates, and the timing
//!   constraint lists that govern command spacing.
//! * **Node hierarchy**: an index-based arena of channel/rank/bank nodes
//!   holding the per-node state and issue history that the tables are
//!   evaluated against.
//!
//! The crate is a library consumed by a simulation engine; it performs no
//! I/O and holds no global mutable state.
//!
//! # Modules
//!
//! * `common`: Shared error types.
//! * `config`: Configuration loading and parsing.
//! * `ddr3`: The DDR3 standard model and its tables.
//! * `hierarchy`: Node arena, per-node state, and issue history.

/// Shared error handling.
///
/// Provides the error type covering the crate's two fatal conditions:
/// unknown construction parameters and structurally invalid transitions.
pub mod common;

/// Configuration system for device selection and topology.
///
/// Loads and parses TOML configuration to choose the organization/speed pair
/// and the channel/rank counts of the simulated system.
pub mod config;

/// The DDR3 standard model.
///
/// Implements the level hierarchy descriptor, command taxonomy, parameter
/// tables, state-machine table, prerequisite resolver, row-buffer
/// predicates, timing constraint table, and request translation.
pub mod ddr3;

/// Node hierarchy storage.
///
/// Implements the arena of channel/rank/bank nodes that carries per-node
/// state, the open-row record, and the bounded per-command issue history
/// consumed by the timing constraint table.
pub mod hierarchy;
