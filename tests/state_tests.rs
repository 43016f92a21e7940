//! Integration tests for the state-machine table.

use ddr3_model::common::ModelError;
use ddr3_model::ddr3::{Command, Ddr3, Level, Org, Speed, State};
use ddr3_model::hierarchy::NodeArena;

/// Creates a two-rank test model and its node arena.
fn create_test_system() -> (Ddr3, NodeArena) {
    let mut model = Ddr3::new(Org::DDR3_8Gb_x8, Speed::DDR3_1600K);
    model.set_rank_number(2);
    let arena = NodeArena::new(&model);
    (model, arena)
}

/// Tests that activate opens a closed bank and records the row.
#[test]
fn test_activate_opens_closed_bank() {
    let (model, mut arena) = create_test_system();
    let bank = arena.bank(0, 0, 0);

    assert_eq!(arena.node(bank).state(), Some(State::Closed));
    arena.issue(&model, bank, Command::Act, Some(5), 0).unwrap();
    assert_eq!(arena.node(bank).state(), Some(State::Opened));
    assert_eq!(arena.node(bank).open_row(), Some(5));
}

/// Tests that precharge closes an opened bank and clears the row.
#[test]
fn test_precharge_closes_bank() {
    let (model, mut arena) = create_test_system();
    let bank = arena.bank(0, 0, 0);

    arena.issue(&model, bank, Command::Act, Some(5), 0).unwrap();
    arena.issue(&model, bank, Command::Pre, None, 40).unwrap();
    assert_eq!(arena.node(bank).state(), Some(State::Closed));
    assert_eq!(arena.node(bank).open_row(), None);
}

/// Tests that a plain read leaves the bank opened.
#[test]
fn test_read_leaves_bank_opened() {
    let (model, mut arena) = create_test_system();
    let bank = arena.bank(0, 0, 0);

    arena.issue(&model, bank, Command::Act, Some(5), 0).unwrap();
    arena.issue(&model, bank, Command::Rd, Some(5), 11).unwrap();
    assert_eq!(arena.node(bank).state(), Some(State::Opened));
    assert_eq!(arena.node(bank).open_row(), Some(5));
}

/// Tests that the auto-precharge access variants close the bank.
#[test]
fn test_auto_precharge_closes_bank() {
    let (model, mut arena) = create_test_system();

    let bank = arena.bank(0, 0, 0);
    arena.issue(&model, bank, Command::Act, Some(5), 0).unwrap();
    arena.issue(&model, bank, Command::Rda, Some(5), 11).unwrap();
    assert_eq!(arena.node(bank).state(), Some(State::Closed));
    assert_eq!(arena.node(bank).open_row(), None);

    let bank = arena.bank(0, 0, 1);
    arena.issue(&model, bank, Command::Act, Some(7), 50).unwrap();
    arena.issue(&model, bank, Command::Wra, Some(7), 61).unwrap();
    assert_eq!(arena.node(bank).state(), Some(State::Closed));
}

/// Tests that precharge-all closes every bank in the rank.
#[test]
fn test_precharge_all_closes_every_bank() {
    let (model, mut arena) = create_test_system();
    let rank = arena.rank(0, 0);

    for bank in [0, 2, 5] {
        let id = arena.bank(0, 0, bank);
        arena.issue(&model, id, Command::Act, Some(1), 0).unwrap();
    }
    arena.issue(&model, rank, Command::PreA, None, 100).unwrap();

    for bank in 0..8 {
        let id = arena.bank(0, 0, bank);
        assert_eq!(arena.node(id).state(), Some(State::Closed));
        assert_eq!(arena.node(id).open_row(), None);
    }
}

/// Tests that power-down entry picks its flavor from the bank states.
#[test]
fn test_power_down_flavors() {
    let (model, mut arena) = create_test_system();

    // Rank 0 enters power-down with a bank open.
    let rank0 = arena.rank(0, 0);
    let bank = arena.bank(0, 0, 3);
    arena.issue(&model, bank, Command::Act, Some(9), 0).unwrap();
    arena.issue(&model, rank0, Command::Pde, None, 50).unwrap();
    assert_eq!(arena.node(rank0).state(), Some(State::ActivePowerDown));

    // Rank 1 enters power-down with all banks precharged.
    let rank1 = arena.rank(0, 1);
    arena.issue(&model, rank1, Command::Pde, None, 50).unwrap();
    assert_eq!(arena.node(rank1).state(), Some(State::PrechargePowerDown));
}

/// Tests that power-down exit restores the power-up state.
#[test]
fn test_power_down_exit() {
    let (model, mut arena) = create_test_system();
    let rank = arena.rank(0, 0);

    arena.issue(&model, rank, Command::Pde, None, 0).unwrap();
    arena.issue(&model, rank, Command::Pdx, None, 10).unwrap();
    assert_eq!(arena.node(rank).state(), Some(State::PowerUp));
}

/// Tests self-refresh entry and exit.
#[test]
fn test_self_refresh_entry_exit() {
    let (model, mut arena) = create_test_system();
    let rank = arena.rank(0, 0);

    arena.issue(&model, rank, Command::Sre, None, 0).unwrap();
    assert_eq!(arena.node(rank).state(), Some(State::SelfRefresh));

    arena.issue(&model, rank, Command::Srx, None, 300).unwrap();
    assert_eq!(arena.node(rank).state(), Some(State::PowerUp));
}

/// Tests that refresh leaves rank and bank state untouched.
#[test]
fn test_refresh_is_state_neutral() {
    let (model, mut arena) = create_test_system();
    let rank = arena.rank(0, 0);

    arena.issue(&model, rank, Command::Ref, None, 0).unwrap();
    assert_eq!(arena.node(rank).state(), Some(State::PowerUp));
    for bank in 0..8 {
        let id = arena.bank(0, 0, bank);
        assert_eq!(arena.node(id).state(), Some(State::Closed));
    }
}

/// Tests that a structurally impossible transition is rejected.
#[test]
fn test_undefined_transition_rejected() {
    let (model, mut arena) = create_test_system();
    let channel = arena.channel(0);

    let err = model
        .apply(&mut arena, channel, Command::Act, Some(0))
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::UndefinedTransition {
            level: Level::Channel,
            command: Command::Act,
            ..
        }
    ));
}

/// Tests that a rank-only command is undefined at bank level.
#[test]
fn test_rank_command_undefined_at_bank() {
    let (model, mut arena) = create_test_system();
    let bank = arena.bank(0, 0, 0);

    let err = model
        .apply(&mut arena, bank, Command::Pde, None)
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::UndefinedTransition {
            level: Level::Bank,
            command: Command::Pde,
            state: Some(State::Closed),
        }
    ));
}
