//! Node Hierarchy Storage.
//!
//! The runtime instances of the addressable levels form a strict tree:
//! channels contain ranks, ranks contain banks. Rows and columns are
//! addressing context and are not allocated. Nodes live in a flat arena and
//! refer to each other by index, which keeps parent, child, and sibling
//! lookups cheap and ownership flat.
//!
//! Each node carries the state the standard's tables are evaluated against:
//! its level state, the currently open row (banks only), and a bounded
//! history of recent issue cycles per command. History is recorded at every
//! node on the lineage of an issued command, so a rank's history sees the
//! issues of all its banks and a channel's history sees all of its ranks.

use std::collections::VecDeque;

use crate::common::ModelError;
use crate::ddr3::{transition, Command, Ddr3, Level, State};

/// Index of a node within the arena.
pub type NodeId = usize;

/// One runtime instance of a hierarchy level.
pub struct Node {
    pub(crate) level: Level,
    pub(crate) index: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) state: Option<State>,
    pub(crate) open_row: Option<u64>,
    pub(crate) history: [VecDeque<u64>; Command::COUNT],
}

impl Node {
    fn new(level: Level, index: usize, parent: Option<NodeId>) -> Self {
        Node {
            level,
            index,
            parent,
            children: Vec::new(),
            state: level.initial_state(),
            open_row: None,
            history: std::array::from_fn(|_| VecDeque::new()),
        }
    }

    /// Returns the level of this node.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns this node's position among its siblings.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the parent node, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the child nodes in position order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns the node's state, if its level carries state.
    pub fn state(&self) -> Option<State> {
        self.state
    }

    /// Returns the currently open row, if this is an opened bank.
    pub fn open_row(&self) -> Option<u64> {
        self.open_row
    }

    /// Returns the cycle of the `dist`-th most recent issue of `cmd`
    /// recorded at this node (1 is the most recent), if enough history
    /// exists.
    pub fn last_issue(&self, cmd: Command, dist: usize) -> Option<u64> {
        self.history[cmd as usize].get(dist - 1).copied()
    }
}

/// Arena of channel/rank/bank nodes for one simulated memory system.
///
/// Built once from a constructed model (after any channel/rank count
/// overrides) and mutated only through validated command issue.
pub struct NodeArena {
    nodes: Vec<Node>,
    channels: Vec<NodeId>,
    depth: [usize; Command::COUNT],
}

impl NodeArena {
    /// Creates the node tree for `model`'s organization.
    ///
    /// One node is allocated per channel, per rank, and per bank; history
    /// depth per command is bounded by the deepest lookback any timing
    /// entry performs.
    pub fn new(model: &Ddr3) -> Self {
        let counts = model.org_entry().count;
        let mut arena = NodeArena {
            nodes: Vec::new(),
            channels: Vec::new(),
            depth: std::array::from_fn(|i| model.history_depth(Command::ALL[i])),
        };

        for ch in 0..counts[Level::Channel as usize] {
            let ch_id = arena.alloc(Level::Channel, ch, None);
            arena.channels.push(ch_id);
            for rank in 0..counts[Level::Rank as usize] {
                let rank_id = arena.alloc(Level::Rank, rank, Some(ch_id));
                arena.nodes[ch_id].children.push(rank_id);
                for bank in 0..counts[Level::Bank as usize] {
                    let bank_id = arena.alloc(Level::Bank, bank, Some(rank_id));
                    arena.nodes[rank_id].children.push(bank_id);
                }
            }
        }
        arena
    }

    fn alloc(&mut self, level: Level, index: usize, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(level, index, parent));
        id
    }

    /// Returns the channel roots in position order.
    pub fn channels(&self) -> &[NodeId] {
        &self.channels
    }

    /// Returns the node for channel `ch`.
    pub fn channel(&self, ch: usize) -> NodeId {
        self.channels[ch]
    }

    /// Returns the node for rank `rank` of channel `ch`.
    pub fn rank(&self, ch: usize, rank: usize) -> NodeId {
        self.nodes[self.channels[ch]].children[rank]
    }

    /// Returns the node for bank `bank` of rank `rank` of channel `ch`.
    pub fn bank(&self, ch: usize, rank: usize, bank: usize) -> NodeId {
        self.nodes[self.rank(ch, rank)].children[bank]
    }

    /// Returns a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Returns the path from the channel root down to `id`, inclusive.
    pub fn lineage(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut cur = id;
        while let Some(parent) = self.nodes[cur].parent {
            path.push(parent);
            cur = parent;
        }
        path.reverse();
        path
    }

    /// Returns the same-level siblings of `id` (same parent, different
    /// position).
    pub fn siblings(&self, id: NodeId) -> Vec<NodeId> {
        match self.nodes[id].parent {
            Some(parent) => self.nodes[parent]
                .children
                .iter()
                .copied()
                .filter(|&c| c != id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Issues `cmd` at `target`, recording the issue cycle along the
    /// lineage and applying the state-machine transition wherever one is
    /// defined.
    ///
    /// The caller is responsible for having validated prerequisites and
    /// timing first; issue is an instantaneous, unconditional effect.
    ///
    /// # Arguments
    ///
    /// * `model` - The standard model providing the transition table.
    /// * `target` - The node at the command's scope (the bank for bank,
    ///   row, and column scoped commands; the rank for rank-scoped ones).
    /// * `cmd` - The command being issued.
    /// * `row` - The target row for activates and column accesses.
    /// * `cycle` - The issue cycle.
    pub fn issue(
        &mut self,
        model: &Ddr3,
        target: NodeId,
        cmd: Command,
        row: Option<u64>,
        cycle: u64,
    ) -> Result<(), ModelError> {
        log::trace!("issue {} at node {} cycle {}", cmd, target, cycle);
        for id in self.lineage(target) {
            self.record(id, cmd, cycle);
            if transition::defines(self.nodes[id].level, cmd) {
                model.apply(self, id, cmd, row)?;
            }
        }
        Ok(())
    }

    fn record(&mut self, id: NodeId, cmd: Command, cycle: u64) {
        let depth = self.depth[cmd as usize];
        let history = &mut self.nodes[id].history[cmd as usize];
        history.push_front(cycle);
        history.truncate(depth);
    }
}
