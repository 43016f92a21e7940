//! Integration tests for parameter resolution and the command taxonomy.

use ddr3_model::ddr3::{Command, Ddr3, Level, Org, RequestType, Speed};

/// Tests construction from canonical organization and speed names.
#[test]
fn test_construction_from_names() {
    let model = Ddr3::from_names("DDR3_8Gb_x8", "DDR3_1600K").unwrap();
    assert_eq!(model.org(), Org::DDR3_8Gb_x8);
    assert_eq!(model.speed(), Speed::DDR3_1600K);
}

/// Tests that string and enumerant construction yield identical entries.
#[test]
fn test_name_and_enumerant_construction_match() {
    let by_name = Ddr3::from_names("DDR3_8Gb_x8", "DDR3_1600K").unwrap();
    let by_enum = Ddr3::new(Org::DDR3_8Gb_x8, Speed::DDR3_1600K);

    assert_eq!(by_name.org_entry(), by_enum.org_entry());
    assert_eq!(by_name.speed_entry(), by_enum.speed_entry());
    assert_eq!(by_name.read_latency(), by_enum.read_latency());
}

/// Tests that an unknown organization name is rejected.
#[test]
fn test_unknown_org_rejected() {
    let err = Ddr3::from_names("DDR5_8Gb_x8", "DDR3_1600K").unwrap_err();
    assert!(err.to_string().contains("organization"));
}

/// Tests that an unknown speed name is rejected.
#[test]
fn test_unknown_speed_rejected() {
    let err = Ddr3::from_names("DDR3_8Gb_x8", "DDR3_9999Z").unwrap_err();
    assert!(err.to_string().contains("speed"));
}

/// Tests the fixed per-level counts of an organization entry.
#[test]
fn test_org_entry_counts() {
    let model = Ddr3::new(Org::DDR3_8Gb_x8, Speed::DDR3_1600K);
    let entry = model.org_entry();

    assert_eq!(entry.size, 8 << 10);
    assert_eq!(entry.dq, 8);
    assert_eq!(entry.count[Level::Bank as usize], 8);
    assert_eq!(entry.count[Level::Row as usize], 1 << 16);
    assert_eq!(entry.count[Level::Column as usize], 1 << 11);
}

/// Tests the channel and rank count overrides.
#[test]
fn test_topology_overrides() {
    let mut model = Ddr3::new(Org::DDR3_8Gb_x8, Speed::DDR3_1600K);
    assert_eq!(model.org_entry().count[Level::Channel as usize], 1);
    assert_eq!(model.org_entry().count[Level::Rank as usize], 1);

    model.set_channel_number(2);
    model.set_rank_number(4);
    assert_eq!(model.org_entry().count[Level::Channel as usize], 2);
    assert_eq!(model.org_entry().count[Level::Rank as usize], 4);
}

/// Tests that the refresh cycle time is derived from its zero placeholder.
#[test]
fn test_refresh_cycle_time_derived() {
    let raw = Speed::DDR3_1600K.entry();
    assert_eq!(raw.n_rfc, 0);

    let model = Ddr3::new(Org::DDR3_8Gb_x8, Speed::DDR3_1600K);
    let derived = model.speed_entry();
    assert!(derived.n_rfc > 0);
    // 350 ns at tCK = 1.25 ns.
    assert_eq!(derived.n_rfc, 280);
    assert_eq!(derived.n_xs, 288);
}

/// Tests the page-size-dependent activate spacing derivation.
#[test]
fn test_activate_window_derived() {
    // 2KB page at DDR3-1600.
    let high = Ddr3::new(Org::DDR3_8Gb_x8, Speed::DDR3_1600K);
    assert_eq!(high.speed_entry().n_rrd, 6);
    assert_eq!(high.speed_entry().n_faw, 32);

    // 1KB page at DDR3-800: the four-clock floor binds tRRD.
    let low = Ddr3::new(Org::DDR3_512Mb_x4, Speed::DDR3_800D);
    assert_eq!(low.speed_entry().n_rfc, 36);
    assert_eq!(low.speed_entry().n_xs, 40);
    assert_eq!(low.speed_entry().n_rrd, 4);
    assert_eq!(low.speed_entry().n_faw, 16);
}

/// Tests the derived end-to-end read latency.
#[test]
fn test_read_latency() {
    let model = Ddr3::new(Org::DDR3_8Gb_x8, Speed::DDR3_1600K);
    let s = model.speed_entry();
    assert_eq!(model.read_latency(), s.n_rcd + s.n_cl + s.n_bl);
    assert_eq!(model.read_latency(), 26);
}

/// Tests the command classification predicates.
#[test]
fn test_command_classification() {
    assert!(Command::Act.is_opening());
    assert!(!Command::Rd.is_opening());

    for cmd in [Command::Rd, Command::Wr, Command::Rda, Command::Wra] {
        assert!(cmd.is_accessing());
    }
    assert!(!Command::Act.is_accessing());

    for cmd in [Command::Pre, Command::PreA, Command::Rda, Command::Wra] {
        assert!(cmd.is_closing());
    }
    assert!(!Command::Rd.is_closing());

    assert!(Command::Ref.is_refreshing());
    assert!(!Command::Sre.is_refreshing());
}

/// Tests the command scope table.
#[test]
fn test_command_scope() {
    assert_eq!(Command::Act.scope(), Level::Row);
    assert_eq!(Command::Pre.scope(), Level::Bank);
    assert_eq!(Command::PreA.scope(), Level::Rank);
    assert_eq!(Command::Rd.scope(), Level::Column);
    assert_eq!(Command::Wra.scope(), Level::Column);
    assert_eq!(Command::Ref.scope(), Level::Rank);
    assert_eq!(Command::Srx.scope(), Level::Rank);
}

/// Tests the request-to-command translation.
#[test]
fn test_request_translation() {
    assert_eq!(Ddr3::translate(RequestType::Read), Command::Rd);
    assert_eq!(Ddr3::translate(RequestType::Write), Command::Wr);
    assert_eq!(Ddr3::translate(RequestType::Refresh), Command::Ref);
    assert_eq!(Ddr3::translate(RequestType::PowerDown), Command::Pde);
    assert_eq!(Ddr3::translate(RequestType::SelfRefresh), Command::Sre);
}

/// Tests the canonical mnemonics used in logs and errors.
#[test]
fn test_command_display() {
    assert_eq!(Command::Act.to_string(), "ACT");
    assert_eq!(Command::PreA.to_string(), "PREA");
    assert_eq!(Command::Wra.to_string(), "WRA");
    assert_eq!(Command::Srx.to_string(), "SRX");
}
