use chip_tracker::{
    api::{
        build_table_view, execute, execute_json, query_json, run_query, AdjustChipsCommand,
        ApiError, Command, CommandResponse, EditPlayerCommand, Query, QueryResponse,
        RaiseCommand, TakeLoanCommand,
    },
    domain::{BlindKind, Chips, Phase, TableConfig},
    engine::{EngineError, StepDirection, TableEngine, TableEventKind},
    execute_operation, TrackerOperation,
};

fn engine() -> TableEngine {
    TableEngine::new(TableConfig::default())
}

// ----------------------
// tests для dispatch.rs
// ----------------------

#[test]
fn add_player_command_returns_new_id_and_table() {
    let mut e = engine();

    let resp = execute(&mut e, Command::AddPlayer);

    match &resp {
        CommandResponse::PlayerAdded { player_id, table } => {
            assert_eq!(*player_id, 3);
            assert_eq!(table.players.len(), 3);
            assert_eq!(table.player(3).map(|p| p.name.as_str()), Some("Player 3"));
        }
        other => panic!("expected PlayerAdded, got {:?}", other),
    }
    assert!(resp.is_applied());
}

#[test]
fn ignored_command_reports_reason_but_no_change() {
    let mut e = engine();
    let before = build_table_view(e.table());

    let resp = execute(
        &mut e,
        Command::Bet {
            player_id: 1,
            amount: Chips(9_999),
        },
    );

    match &resp {
        CommandResponse::TableState { applied, reason, table } => {
            assert!(!applied);
            assert!(reason.is_some());
            assert_eq!(table, &before);
        }
        other => panic!("expected TableState, got {:?}", other),
    }
}

#[test]
fn raise_command_defaults_to_big_blind() {
    let mut e = engine();
    execute(
        &mut e,
        Command::PostBlind {
            player_id: 1,
            kind: BlindKind::Small,
        },
    );
    execute(
        &mut e,
        Command::PostBlind {
            player_id: 2,
            kind: BlindKind::Big,
        },
    );

    let resp = execute(
        &mut e,
        Command::Raise(RaiseCommand {
            player_id: 1,
            raise_by: None,
        }),
    );

    // колл 5 + рейз на BB 10
    assert!(resp.is_applied());
    assert_eq!(resp.table().player(1).map(|p| p.bet), Some(Chips(20)));
    assert_eq!(resp.table().pot, Chips(30));
    assert_eq!(resp.table().highest_bet, Chips(20));
    assert_eq!(resp.table().player(2).map(|p| p.to_call), Some(Chips(10)));
}

#[test]
fn take_loan_command_defaults_to_loan_increment() {
    let mut e = engine();
    execute(
        &mut e,
        Command::StepLoanIncrement {
            direction: StepDirection::Up,
        },
    );

    let resp = execute(
        &mut e,
        Command::TakeLoan(TakeLoanCommand {
            player_id: 2,
            amount: None,
        }),
    );

    let p2 = resp.table().player(2).cloned().unwrap_or_else(|| panic!("P2 missing"));
    assert_eq!(p2.loans, Chips(150));
    assert_eq!(p2.chips, Chips(650));
    assert_eq!(resp.table().total_loans, Chips(150));
}

#[test]
fn full_command_catalog_runs_through_dispatch() {
    let mut e = engine();

    let commands = vec![
        Command::AdjustChips(AdjustChipsCommand { player_id: 1, delta: -10 }),
        Command::EditPlayer(EditPlayerCommand {
            player_id: 2,
            name: "Bob".into(),
            chips: 600,
        }),
        Command::Bet { player_id: 1, amount: Chips(50) },
        Command::Call { player_id: 2 },
        Command::AllIn { player_id: 1 },
        Command::Fold { player_id: 2 },
        Command::AdvancePhase,
        Command::AwardPot { player_id: 1 },
        Command::ClearBets,
        Command::SetSmallBlind { small_blind: Chips(10) },
        Command::StepSmallBlind { direction: StepDirection::Down },
        Command::SetLoanIncrement { loan_increment: Chips(200) },
        Command::RemovePlayer { player_id: 2 },
        Command::ResetAll,
    ];

    for command in commands {
        let resp = execute(&mut e, command.clone());
        assert!(resp.is_applied(), "command {:?} was ignored", command);
    }

    let view = build_table_view(e.table());
    assert_eq!(view.players.len(), 1);
    assert_eq!(view.players[0].chips, Chips(500));
    assert_eq!(view.small_blind, Chips(9));
    assert_eq!(view.big_blind, Chips(18));
    assert_eq!(view.loan_increment, Chips(200));
    assert_eq!(view.phase, Phase::PreFlop);
}

#[test]
fn command_player_id_helper() {
    assert_eq!(Command::Call { player_id: 4 }.player_id(), Some(4));
    assert_eq!(
        Command::TakeLoan(TakeLoanCommand { player_id: 7, amount: None }).player_id(),
        Some(7)
    );
    assert_eq!(Command::AdvancePhase.player_id(), None);
}

// ----------------------
// JSON на входе
// ----------------------

#[test]
fn json_command_is_parsed_and_applied() {
    let mut e = engine();

    let resp = execute_json(&mut e, r#"{"Bet":{"player_id":1,"amount":25}}"#)
        .unwrap_or_else(|err| panic!("json rejected: {err}"));

    assert!(resp.is_applied());
    assert_eq!(resp.table().pot, Chips(25));
}

#[test]
fn json_unit_command_and_optional_fields() {
    let mut e = engine();

    let resp = execute_json(&mut e, r#""AdvancePhase""#)
        .unwrap_or_else(|err| panic!("json rejected: {err}"));
    assert_eq!(resp.table().phase, Phase::Flop);
    assert_eq!(resp.table().phase_label, "Flop");

    let resp = execute_json(&mut e, r#"{"TakeLoan":{"player_id":1}}"#)
        .unwrap_or_else(|err| panic!("json rejected: {err}"));
    assert_eq!(resp.table().player(1).map(|p| p.loans), Some(Chips(100)));
}

#[test]
fn broken_json_is_bad_request_and_changes_nothing() {
    let mut e = engine();
    let before = e.table().clone();

    let res = execute_json(&mut e, r#"{"Bet":{"player_id":"x"}}"#);

    assert!(matches!(res, Err(ApiError::BadRequest(_))));
    assert_eq!(e.table(), &before);
}

#[test]
fn command_serde_round_trip_keeps_shape() {
    let cmd = Command::PostBlind {
        player_id: 2,
        kind: BlindKind::Big,
    };
    let raw = serde_json::to_string(&cmd).unwrap_or_default();
    assert_eq!(raw, r#"{"PostBlind":{"player_id":2,"kind":"Big"}}"#);
}

// ----------------------
// queries.rs
// ----------------------

#[test]
fn table_view_projects_state_and_chip_stacks() {
    let mut e = engine();
    e.place_bet(1, Chips(135));
    e.take_loan(2, Chips(100));
    e.fold(2);

    let view = build_table_view(e.table());

    assert_eq!(view.pot, Chips(135));
    assert_eq!(view.pot_stack.represented_value(), Chips(135));
    assert_eq!(view.small_blind, Chips(5));
    assert_eq!(view.big_blind, Chips(10));
    assert_eq!(view.phase_label, "Pre-Flop");
    assert_eq!(view.total_chips_in_play, Chips(1_100));

    let p1 = view.player(1).cloned().unwrap_or_else(|| panic!("P1 missing"));
    assert_eq!(p1.chips, Chips(365));
    assert_eq!(p1.bet, Chips(135));
    assert_eq!(p1.chip_stack.count_of(chip_tracker::display::Denomination::Hundred), 3);

    let p2 = view.player(2).cloned().unwrap_or_else(|| panic!("P2 missing"));
    assert!(p2.folded);
    assert_eq!(p2.loans, Chips(100));
    assert_eq!(p2.to_call, Chips(135));
}

#[test]
fn queries_player_history_and_breakdown() {
    let mut e = engine();
    e.place_bet(1, Chips(10));

    match run_query(&e, &Query::GetPlayer { player_id: 1 }) {
        QueryResponse::Player(Some(p)) => assert_eq!(p.bet, Chips(10)),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(
        run_query(&e, &Query::GetPlayer { player_id: 50 }),
        QueryResponse::Player(None)
    );

    match run_query(&e, &Query::GetHistory) {
        QueryResponse::History(events) => {
            // 2 посадки + ставка
            assert_eq!(events.len(), 3);
            assert!(matches!(events[2].kind, TableEventKind::PlayerActed { .. }));
        }
        other => panic!("unexpected {:?}", other),
    }

    match query_json(&e, r#"{"ChipBreakdown":{"total":30}}"#) {
        Ok(QueryResponse::ChipStack(stack)) => {
            assert_eq!(stack.represented_value(), Chips(30));
        }
        other => panic!("unexpected {:?}", other),
    }
}

// ----------------------
// errors.rs / lib.rs
// ----------------------

#[test]
fn engine_error_maps_to_api_error_text() {
    let api: ApiError = EngineError::PlayerNotFound(5).into();
    match api {
        ApiError::EngineError(msg) => assert!(msg.contains('5')),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn api_error_display_is_prefixed_by_kind() {
    assert_eq!(ApiError::BadRequest("x".into()).to_string(), "bad request: x");
    assert_eq!(ApiError::InvalidConfig("y".into()).to_string(), "invalid config: y");
    assert_eq!(ApiError::EngineError("z".into()).to_string(), "engine: z");

    let as_std: Box<dyn std::error::Error> = Box::new(ApiError::BadRequest("x".into()));
    assert_eq!(as_std.to_string(), "bad request: x");
}

#[test]
fn ignored_command_reason_matches_engine_error_text() {
    let mut e = engine();
    let resp = execute(&mut e, Command::Call { player_id: 1 });

    match resp {
        CommandResponse::TableState { applied, reason, .. } => {
            assert!(!applied);
            assert_eq!(reason, Some(EngineError::NothingToCall.to_string()));
        }
        other => panic!("expected TableState, got {:?}", other),
    }
}

#[test]
fn tracker_operation_executes_command() {
    let mut e = engine();
    let resp = execute_operation(&mut e, TrackerOperation::Command(Command::AdvancePhase));
    assert_eq!(resp.table().phase, Phase::Flop);
}
