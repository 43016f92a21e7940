//! Integration tests for the prerequisite resolver.

use ddr3_model::ddr3::{Command, Ddr3, Org, Speed};
use ddr3_model::hierarchy::NodeArena;

/// Creates a single-rank test model and its node arena.
fn create_test_system() -> (Ddr3, NodeArena) {
    let model = Ddr3::new(Org::DDR3_8Gb_x8, Speed::DDR3_1600K);
    let arena = NodeArena::new(&model);
    (model, arena)
}

/// Tests that a read on a closed bank resolves to activate.
#[test]
fn test_read_on_closed_bank_needs_activate() {
    let (model, arena) = create_test_system();
    let bank = arena.bank(0, 0, 0);

    let need = model.prerequisite(&arena, bank, Command::Rd, Some(5));
    assert_eq!(need, Some(Command::Act));
}

/// Tests that a read on the open row needs nothing.
#[test]
fn test_read_on_open_row_needs_nothing() {
    let (model, mut arena) = create_test_system();
    let bank = arena.bank(0, 0, 0);

    arena.issue(&model, bank, Command::Act, Some(5), 0).unwrap();
    let need = model.prerequisite(&arena, bank, Command::Rd, Some(5));
    assert_eq!(need, None);
}

/// Tests that a read targeting a different row resolves to precharge.
#[test]
fn test_read_on_wrong_row_needs_precharge() {
    let (model, mut arena) = create_test_system();
    let bank = arena.bank(0, 0, 0);

    arena.issue(&model, bank, Command::Act, Some(5), 0).unwrap();
    let need = model.prerequisite(&arena, bank, Command::Wr, Some(6));
    assert_eq!(need, Some(Command::Pre));
}

/// Tests that activating an open bank resolves to precharge.
#[test]
fn test_activate_on_open_bank_needs_precharge() {
    let (model, mut arena) = create_test_system();
    let bank = arena.bank(0, 0, 0);

    assert_eq!(model.prerequisite(&arena, bank, Command::Act, Some(5)), None);
    arena.issue(&model, bank, Command::Act, Some(5), 0).unwrap();
    let need = model.prerequisite(&arena, bank, Command::Act, Some(6));
    assert_eq!(need, Some(Command::Pre));
}

/// Tests that refresh with an open bank resolves to precharge-all.
#[test]
fn test_refresh_with_open_bank_needs_precharge_all() {
    let (model, mut arena) = create_test_system();
    let rank = arena.rank(0, 0);
    let bank = arena.bank(0, 0, 4);

    assert_eq!(model.prerequisite(&arena, rank, Command::Ref, None), None);
    arena.issue(&model, bank, Command::Act, Some(5), 0).unwrap();
    let need = model.prerequisite(&arena, rank, Command::Ref, None);
    assert_eq!(need, Some(Command::PreA));
}

/// Tests that self-refresh entry requires all banks precharged.
#[test]
fn test_self_refresh_entry_needs_banks_closed() {
    let (model, mut arena) = create_test_system();
    let rank = arena.rank(0, 0);
    let bank = arena.bank(0, 0, 1);

    arena.issue(&model, bank, Command::Act, Some(2), 0).unwrap();
    assert_eq!(
        model.prerequisite(&arena, rank, Command::Sre, None),
        Some(Command::PreA)
    );

    arena.issue(&model, rank, Command::PreA, None, 40).unwrap();
    assert_eq!(model.prerequisite(&arena, rank, Command::Sre, None), None);
}

/// Tests that power-down blocks everything until the exit command.
#[test]
fn test_power_down_blocks_commands() {
    let (model, mut arena) = create_test_system();
    let rank = arena.rank(0, 0);
    let bank = arena.bank(0, 0, 0);

    arena.issue(&model, rank, Command::Pde, None, 0).unwrap();
    assert_eq!(
        model.prerequisite(&arena, bank, Command::Rd, Some(5)),
        Some(Command::Pdx)
    );
    assert_eq!(
        model.prerequisite(&arena, bank, Command::Act, Some(5)),
        Some(Command::Pdx)
    );
    assert_eq!(
        model.prerequisite(&arena, rank, Command::Ref, None),
        Some(Command::Pdx)
    );
}

/// Tests that self-refresh blocks everything until the exit command.
#[test]
fn test_self_refresh_blocks_commands() {
    let (model, mut arena) = create_test_system();
    let rank = arena.rank(0, 0);
    let bank = arena.bank(0, 0, 0);

    arena.issue(&model, rank, Command::Sre, None, 0).unwrap();
    assert_eq!(
        model.prerequisite(&arena, bank, Command::Wr, Some(5)),
        Some(Command::Srx)
    );
    assert_eq!(
        model.prerequisite(&arena, rank, Command::Pde, None),
        Some(Command::Srx)
    );
    assert_eq!(model.prerequisite(&arena, rank, Command::Srx, None), None);
}

/// Tests that recursive resolution reaches a legal command.
#[test]
fn test_resolution_chain_terminates() {
    let (model, mut arena) = create_test_system();
    let rank = arena.rank(0, 0);
    let bank = arena.bank(0, 0, 0);

    arena.issue(&model, rank, Command::Pde, None, 0).unwrap();

    // Read on a closed bank inside a powered-down rank: exit power-down,
    // then activate, then the read itself.
    let mut cycle = 10;
    let mut chain = Vec::new();
    while let Some(need) = model.prerequisite(&arena, bank, Command::Rd, Some(5)) {
        chain.push(need);
        let target = if need.scope() <= ddr3_model::ddr3::Level::Rank {
            rank
        } else {
            bank
        };
        arena.issue(&model, target, need, Some(5), cycle).unwrap();
        cycle += 50;
    }
    assert_eq!(chain, vec![Command::Pdx, Command::Act]);
}
