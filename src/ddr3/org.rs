//! Organization Table.
//!
//! One entry per manufactured DDR3 die organization (density by data
//! width). The bank count and the row/column counts are fixed by the
//! standard for each organization; the channel and rank counts depend on
//! system topology, are zero in the raw table, and are filled in by the
//! model from its configuration.

use std::str::FromStr;

use crate::common::ModelError;

use super::Level;

/// DDR3 die organization selector: density (Mb) by data width.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Org {
    DDR3_512Mb_x4 = 0,
    DDR3_512Mb_x8,
    DDR3_512Mb_x16,
    DDR3_1Gb_x4,
    DDR3_1Gb_x8,
    DDR3_1Gb_x16,
    DDR3_2Gb_x4,
    DDR3_2Gb_x8,
    DDR3_2Gb_x16,
    DDR3_4Gb_x4,
    DDR3_4Gb_x8,
    DDR3_4Gb_x16,
    DDR3_8Gb_x4,
    DDR3_8Gb_x8,
    DDR3_8Gb_x16,
}

impl Org {
    /// Number of organizations in the table.
    pub const COUNT: usize = 15;

    /// All organizations in table order.
    pub const ALL: [Org; Org::COUNT] = [
        Org::DDR3_512Mb_x4,
        Org::DDR3_512Mb_x8,
        Org::DDR3_512Mb_x16,
        Org::DDR3_1Gb_x4,
        Org::DDR3_1Gb_x8,
        Org::DDR3_1Gb_x16,
        Org::DDR3_2Gb_x4,
        Org::DDR3_2Gb_x8,
        Org::DDR3_2Gb_x16,
        Org::DDR3_4Gb_x4,
        Org::DDR3_4Gb_x8,
        Org::DDR3_4Gb_x16,
        Org::DDR3_8Gb_x4,
        Org::DDR3_8Gb_x8,
        Org::DDR3_8Gb_x16,
    ];

    /// Returns the canonical name of this organization.
    pub fn name(self) -> &'static str {
        match self {
            Org::DDR3_512Mb_x4 => "DDR3_512Mb_x4",
            Org::DDR3_512Mb_x8 => "DDR3_512Mb_x8",
            Org::DDR3_512Mb_x16 => "DDR3_512Mb_x16",
            Org::DDR3_1Gb_x4 => "DDR3_1Gb_x4",
            Org::DDR3_1Gb_x8 => "DDR3_1Gb_x8",
            Org::DDR3_1Gb_x16 => "DDR3_1Gb_x16",
            Org::DDR3_2Gb_x4 => "DDR3_2Gb_x4",
            Org::DDR3_2Gb_x8 => "DDR3_2Gb_x8",
            Org::DDR3_2Gb_x16 => "DDR3_2Gb_x16",
            Org::DDR3_4Gb_x4 => "DDR3_4Gb_x4",
            Org::DDR3_4Gb_x8 => "DDR3_4Gb_x8",
            Org::DDR3_4Gb_x16 => "DDR3_4Gb_x16",
            Org::DDR3_8Gb_x4 => "DDR3_8Gb_x4",
            Org::DDR3_8Gb_x8 => "DDR3_8Gb_x8",
            Org::DDR3_8Gb_x16 => "DDR3_8Gb_x16",
        }
    }

    /// Returns the raw organization entry for this selector.
    pub fn entry(self) -> OrgEntry {
        ORG_TABLE[self as usize]
    }
}

impl FromStr for Org {
    type Err = ModelError;

    /// Looks up an organization by its canonical name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Org::ALL
            .iter()
            .copied()
            .find(|org| org.name() == s)
            .ok_or_else(|| ModelError::UnknownParameter {
                kind: "organization",
                name: s.to_string(),
            })
    }
}

/// Organization of one DDR3 device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrgEntry {
    /// Device capacity in megabits.
    pub size: u64,

    /// Data width of one device (number of DQ pins).
    pub dq: u64,

    /// Element count per level: channel, rank, bank, row, column.
    ///
    /// Channel and rank counts are simulator-configured (zero in the raw
    /// table); bank, row, and column counts are fixed by the organization.
    pub count: [usize; Level::COUNT],
}

impl OrgEntry {
    /// Returns the row-buffer page size in bytes (dq x columns / 8).
    pub fn page_bytes(&self) -> u64 {
        self.dq * self.count[Level::Column as usize] as u64 / 8
    }
}

/// Raw organization table: {size, dq, {channel, rank, bank, row, column}}.
const ORG_TABLE: [OrgEntry; Org::COUNT] = [
    OrgEntry { size: 512, dq: 4, count: [0, 0, 8, 1 << 13, 1 << 11] },
    OrgEntry { size: 512, dq: 8, count: [0, 0, 8, 1 << 13, 1 << 10] },
    OrgEntry { size: 512, dq: 16, count: [0, 0, 8, 1 << 12, 1 << 10] },
    OrgEntry { size: 1 << 10, dq: 4, count: [0, 0, 8, 1 << 14, 1 << 11] },
    OrgEntry { size: 1 << 10, dq: 8, count: [0, 0, 8, 1 << 14, 1 << 10] },
    OrgEntry { size: 1 << 10, dq: 16, count: [0, 0, 8, 1 << 13, 1 << 10] },
    OrgEntry { size: 2 << 10, dq: 4, count: [0, 0, 8, 1 << 15, 1 << 11] },
    OrgEntry { size: 2 << 10, dq: 8, count: [0, 0, 8, 1 << 15, 1 << 10] },
    OrgEntry { size: 2 << 10, dq: 16, count: [0, 0, 8, 1 << 14, 1 << 10] },
    OrgEntry { size: 4 << 10, dq: 4, count: [0, 0, 8, 1 << 16, 1 << 11] },
    OrgEntry { size: 4 << 10, dq: 8, count: [0, 0, 8, 1 << 16, 1 << 10] },
    OrgEntry { size: 4 << 10, dq: 16, count: [0, 0, 8, 1 << 15, 1 << 10] },
    OrgEntry { size: 8 << 10, dq: 4, count: [0, 0, 8, 1 << 16, 1 << 12] },
    OrgEntry { size: 8 << 10, dq: 8, count: [0, 0, 8, 1 << 16, 1 << 11] },
    OrgEntry { size: 8 << 10, dq: 16, count: [0, 0, 8, 1 << 16, 1 << 10] },
];
