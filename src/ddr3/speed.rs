//! Speed Table.
//!
//! One entry per JEDEC DDR3 speed bin (data rate and CAS-latency grade).
//! Every timing interval is stored in device clock cycles. Four fields are
//! zero in the raw table because they depend on the chosen organization:
//! `n_rrd` and `n_faw` vary with page size, `n_rfc` and `n_xs` with density.
//! [`SpeedEntry::derive`] fills them in before the entry is used.

use std::str::FromStr;

use crate::common::ModelError;

use super::OrgEntry;

/// DDR3 speed bin selector: data rate and CAS-latency grade.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Speed {
    DDR3_800D = 0,
    DDR3_800E,
    DDR3_1066E,
    DDR3_1066F,
    DDR3_1066G,
    DDR3_1333G,
    DDR3_1333H,
    DDR3_1600H,
    DDR3_1600J,
    DDR3_1600K,
    DDR3_1866K,
    DDR3_1866L,
    DDR3_2133L,
    DDR3_2133M,
}

impl Speed {
    /// Number of speed bins in the table.
    pub const COUNT: usize = 14;

    /// All speed bins in table order.
    pub const ALL: [Speed; Speed::COUNT] = [
        Speed::DDR3_800D,
        Speed::DDR3_800E,
        Speed::DDR3_1066E,
        Speed::DDR3_1066F,
        Speed::DDR3_1066G,
        Speed::DDR3_1333G,
        Speed::DDR3_1333H,
        Speed::DDR3_1600H,
        Speed::DDR3_1600J,
        Speed::DDR3_1600K,
        Speed::DDR3_1866K,
        Speed::DDR3_1866L,
        Speed::DDR3_2133L,
        Speed::DDR3_2133M,
    ];

    /// Returns the canonical name of this speed bin.
    pub fn name(self) -> &'static str {
        match self {
            Speed::DDR3_800D => "DDR3_800D",
            Speed::DDR3_800E => "DDR3_800E",
            Speed::DDR3_1066E => "DDR3_1066E",
            Speed::DDR3_1066F => "DDR3_1066F",
            Speed::DDR3_1066G => "DDR3_1066G",
            Speed::DDR3_1333G => "DDR3_1333G",
            Speed::DDR3_1333H => "DDR3_1333H",
            Speed::DDR3_1600H => "DDR3_1600H",
            Speed::DDR3_1600J => "DDR3_1600J",
            Speed::DDR3_1600K => "DDR3_1600K",
            Speed::DDR3_1866K => "DDR3_1866K",
            Speed::DDR3_1866L => "DDR3_1866L",
            Speed::DDR3_2133L => "DDR3_2133L",
            Speed::DDR3_2133M => "DDR3_2133M",
        }
    }

    /// Returns the raw speed entry for this selector.
    ///
    /// The entry still carries zero placeholders; callers must run
    /// [`SpeedEntry::derive`] against an organization before building
    /// timing constraints from it.
    pub fn entry(self) -> SpeedEntry {
        SPEED_TABLE[self as usize]
    }
}

impl FromStr for Speed {
    type Err = ModelError;

    /// Looks up a speed bin by its canonical name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Speed::ALL
            .iter()
            .copied()
            .find(|speed| speed.name() == s)
            .ok_or_else(|| ModelError::UnknownParameter {
                kind: "speed",
                name: s.to_string(),
            })
    }
}

/// Timing parameters of one DDR3 speed bin, in device clock cycles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedEntry {
    /// Data rate in MT/s.
    pub rate: u64,
    /// Clock frequency in MHz.
    pub freq: f64,
    /// Clock period in nanoseconds.
    pub t_ck: f64,

    /// Burst time on the data bus (BL8 on a double data rate bus).
    pub n_bl: u64,
    /// Column-to-column delay.
    pub n_ccd: u64,
    /// Rank-to-rank switching time.
    pub n_rtrs: u64,
    /// Column access strobe latency (read command to data).
    pub n_cl: u64,
    /// Row-to-column command delay.
    pub n_rcd: u64,
    /// Row precharge time.
    pub n_rp: u64,
    /// Column write latency.
    pub n_cwl: u64,
    /// Row access strobe (activate to data restoration).
    pub n_ras: u64,
    /// Row cycle time (activate to activate on the same bank).
    pub n_rc: u64,
    /// Read to precharge.
    pub n_rtp: u64,
    /// Write to read turnaround.
    pub n_wtr: u64,
    /// Write recovery time.
    pub n_wr: u64,
    /// Activate-to-activate delay across banks (derived; zero in the raw
    /// table).
    pub n_rrd: u64,
    /// Four-activate window (derived; zero in the raw table).
    pub n_faw: u64,
    /// Refresh cycle time (derived; zero in the raw table).
    pub n_rfc: u64,
    /// Average refresh interval.
    pub n_refi: u64,
    /// Power-down entry to exit.
    pub n_pd: u64,
    /// Power-down exit to any valid command.
    pub n_xp: u64,
    /// Power-down exit to a command requiring a locked DLL.
    pub n_xpdll: u64,
    /// Minimum self-refresh entry to exit.
    pub n_ckesr: u64,
    /// Self-refresh exit to any non-read command (derived; zero in the raw
    /// table).
    pub n_xs: u64,
    /// Self-refresh exit to a read command (DLL relock).
    pub n_xsdll: u64,
}

/// Refresh cycle time in nanoseconds, by density (512Mb through 8Gb).
const T_RFC_NS: [f64; 5] = [90.0, 110.0, 160.0, 260.0, 350.0];

/// Activate-to-activate delay in nanoseconds, by rate and page size
/// (1KB, 2KB).
const T_RRD_NS: [[f64; 2]; 6] = [
    [10.0, 10.0],
    [7.5, 10.0],
    [6.0, 7.5],
    [6.0, 7.5],
    [5.0, 6.0],
    [5.0, 6.0],
];

/// Four-activate window in nanoseconds, by rate and page size (1KB, 2KB).
const T_FAW_NS: [[f64; 2]; 6] = [
    [40.0, 50.0],
    [37.5, 50.0],
    [30.0, 45.0],
    [30.0, 40.0],
    [27.0, 35.0],
    [25.0, 35.0],
];

impl SpeedEntry {
    /// Fills in the organization-dependent placeholders.
    ///
    /// `n_rfc` and `n_xs` depend on device density (tXS = tRFC + 10 ns);
    /// `n_rrd` and `n_faw` depend on the row-buffer page size and the data
    /// rate. Nanosecond values are rounded up to whole clocks, with the
    /// JEDEC four-clock floor on `n_rrd`.
    pub fn derive(&mut self, org: &OrgEntry) {
        let density = match org.size >> 9 {
            1 => 0,
            2 => 1,
            4 => 2,
            8 => 3,
            _ => 4,
        };
        let rate = match self.rate {
            800 => 0,
            1066 => 1,
            1333 => 2,
            1600 => 3,
            1866 => 4,
            _ => 5,
        };
        let page = if org.page_bytes() <= 1024 { 0 } else { 1 };

        self.n_rfc = self.cycles(T_RFC_NS[density]);
        self.n_xs = self.cycles(T_RFC_NS[density] + 10.0);
        self.n_rrd = self.cycles(T_RRD_NS[rate][page]).max(4);
        self.n_faw = self.cycles(T_FAW_NS[rate][page]);
    }

    /// Converts a nanosecond interval to clock cycles, rounding up.
    fn cycles(&self, ns: f64) -> u64 {
        (ns / self.t_ck).ceil() as u64
    }
}

/// Raw speed table. The zero-valued fields await [`SpeedEntry::derive`].
const SPEED_TABLE: [SpeedEntry; Speed::COUNT] = [
    SpeedEntry { rate: 800, freq: (400.0 / 3.0) * 3.0, t_ck: 7.5 / 3.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 5, n_rcd: 5, n_rp: 5, n_cwl: 5, n_ras: 15, n_rc: 20, n_rtp: 4, n_wtr: 4, n_wr: 6, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 3120, n_pd: 3, n_xp: 3, n_xpdll: 10, n_ckesr: 4, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 800, freq: (400.0 / 3.0) * 3.0, t_ck: 7.5 / 3.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 6, n_rcd: 6, n_rp: 6, n_cwl: 5, n_ras: 15, n_rc: 21, n_rtp: 4, n_wtr: 4, n_wr: 6, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 3120, n_pd: 3, n_xp: 3, n_xpdll: 10, n_ckesr: 4, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 1066, freq: (400.0 / 3.0) * 4.0, t_ck: 7.5 / 4.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 6, n_rcd: 6, n_rp: 6, n_cwl: 6, n_ras: 20, n_rc: 26, n_rtp: 4, n_wtr: 4, n_wr: 8, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 4160, n_pd: 3, n_xp: 4, n_xpdll: 13, n_ckesr: 4, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 1066, freq: (400.0 / 3.0) * 4.0, t_ck: 7.5 / 4.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 7, n_rcd: 7, n_rp: 7, n_cwl: 6, n_ras: 20, n_rc: 27, n_rtp: 4, n_wtr: 4, n_wr: 8, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 4160, n_pd: 3, n_xp: 4, n_xpdll: 13, n_ckesr: 4, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 1066, freq: (400.0 / 3.0) * 4.0, t_ck: 7.5 / 4.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 8, n_rcd: 8, n_rp: 8, n_cwl: 6, n_ras: 20, n_rc: 28, n_rtp: 4, n_wtr: 4, n_wr: 8, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 4160, n_pd: 3, n_xp: 4, n_xpdll: 13, n_ckesr: 4, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 1333, freq: (400.0 / 3.0) * 5.0, t_ck: 7.5 / 5.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 8, n_rcd: 8, n_rp: 8, n_cwl: 7, n_ras: 24, n_rc: 32, n_rtp: 5, n_wtr: 5, n_wr: 10, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 5200, n_pd: 4, n_xp: 4, n_xpdll: 16, n_ckesr: 5, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 1333, freq: (400.0 / 3.0) * 5.0, t_ck: 7.5 / 5.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 9, n_rcd: 9, n_rp: 9, n_cwl: 7, n_ras: 24, n_rc: 33, n_rtp: 5, n_wtr: 5, n_wr: 10, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 5200, n_pd: 4, n_xp: 4, n_xpdll: 16, n_ckesr: 5, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 1600, freq: (400.0 / 3.0) * 6.0, t_ck: 7.5 / 6.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 9, n_rcd: 9, n_rp: 9, n_cwl: 8, n_ras: 28, n_rc: 37, n_rtp: 6, n_wtr: 6, n_wr: 12, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 6240, n_pd: 4, n_xp: 5, n_xpdll: 20, n_ckesr: 5, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 1600, freq: (400.0 / 3.0) * 6.0, t_ck: 7.5 / 6.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 10, n_rcd: 10, n_rp: 10, n_cwl: 8, n_ras: 28, n_rc: 38, n_rtp: 6, n_wtr: 6, n_wr: 12, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 6240, n_pd: 4, n_xp: 5, n_xpdll: 20, n_ckesr: 5, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 1600, freq: (400.0 / 3.0) * 6.0, t_ck: 7.5 / 6.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 11, n_rcd: 11, n_rp: 11, n_cwl: 8, n_ras: 28, n_rc: 39, n_rtp: 6, n_wtr: 6, n_wr: 12, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 6240, n_pd: 4, n_xp: 5, n_xpdll: 20, n_ckesr: 5, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 1866, freq: (400.0 / 3.0) * 7.0, t_ck: 7.5 / 7.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 11, n_rcd: 11, n_rp: 11, n_cwl: 9, n_ras: 32, n_rc: 43, n_rtp: 7, n_wtr: 7, n_wr: 14, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 7280, n_pd: 5, n_xp: 6, n_xpdll: 23, n_ckesr: 6, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 1866, freq: (400.0 / 3.0) * 7.0, t_ck: 7.5 / 7.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 12, n_rcd: 12, n_rp: 12, n_cwl: 9, n_ras: 32, n_rc: 44, n_rtp: 7, n_wtr: 7, n_wr: 14, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 7280, n_pd: 5, n_xp: 6, n_xpdll: 23, n_ckesr: 6, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 2133, freq: (400.0 / 3.0) * 8.0, t_ck: 7.5 / 8.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 12, n_rcd: 12, n_rp: 12, n_cwl: 10, n_ras: 36, n_rc: 48, n_rtp: 8, n_wtr: 8, n_wr: 16, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 8320, n_pd: 6, n_xp: 7, n_xpdll: 26, n_ckesr: 7, n_xs: 0, n_xsdll: 512 },
    SpeedEntry { rate: 2133, freq: (400.0 / 3.0) * 8.0, t_ck: 7.5 / 8.0, n_bl: 4, n_ccd: 4, n_rtrs: 2, n_cl: 13, n_rcd: 13, n_rp: 13, n_cwl: 10, n_ras: 36, n_rc: 49, n_rtp: 8, n_wtr: 8, n_wr: 16, n_rrd: 0, n_faw: 0, n_rfc: 0, n_refi: 8320, n_pd: 6, n_xp: 7, n_xpdll: 26, n_ckesr: 7, n_xs: 0, n_xsdll: 512 },
];
