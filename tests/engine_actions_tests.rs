// tests/engine_actions_tests.rs
//
// Действия игрока: ставка, блайнды, колл, рейз, олл-ин, фолд.
// Каждое действие либо применяется целиком, либо не меняет ничего.

use chip_tracker::domain::{BlindKind, Chips, PlayerId, Table, TableConfig};
use chip_tracker::engine::{
    EngineError, Outcome, PlayerAction, PlayerActionKind, TableEngine, TableEventKind,
};

const P1: PlayerId = 1;
const P2: PlayerId = 2;

fn engine() -> TableEngine {
    TableEngine::new(TableConfig::default())
}

fn chips(e: &TableEngine, id: PlayerId) -> Chips {
    e.player(id).map(|p| p.chips).unwrap_or(Chips::ZERO)
}

fn bet(e: &TableEngine, id: PlayerId) -> Chips {
    e.player(id).map(|p| p.bet).unwrap_or(Chips::ZERO)
}

fn snapshot(e: &TableEngine) -> Table {
    e.table().clone()
}

//
// place_bet
//
#[test]
fn bet_moves_chips_from_stack_to_bet_and_pot() {
    let mut e = engine();
    let total_before = e.table().total_chips_in_play();

    assert_eq!(e.place_bet(P1, Chips(40)), Outcome::Applied);

    assert_eq!(chips(&e, P1), Chips(460));
    assert_eq!(bet(&e, P1), Chips(40));
    assert_eq!(e.pot(), Chips(40));
    assert_eq!(e.table().total_chips_in_play(), total_before);
}

#[test]
fn bet_larger_than_stack_is_ignored_without_partial_bet() {
    let mut e = engine();
    let before = snapshot(&e);

    let outcome = e.place_bet(P1, Chips(501));

    assert_eq!(
        outcome,
        Outcome::Ignored(EngineError::NotEnoughChips {
            needed: Chips(501),
            available: Chips(500),
        })
    );
    assert_eq!(e.table(), &before);
}

#[test]
fn bet_of_whole_stack_is_allowed() {
    let mut e = engine();
    assert!(e.place_bet(P1, Chips(500)).is_applied());
    assert!(chips(&e, P1).is_zero());
    assert_eq!(e.pot(), Chips(500));
}

#[test]
fn bet_for_unknown_player_is_ignored() {
    let mut e = engine();
    let before = snapshot(&e);

    assert_eq!(
        e.place_bet(42, Chips(10)),
        Outcome::Ignored(EngineError::PlayerNotFound(42))
    );
    assert_eq!(e.table(), &before);
}

#[test]
fn zero_bet_changes_nothing() {
    let mut e = engine();
    let before = snapshot(&e);
    assert!(e.place_bet(P1, Chips::ZERO).is_ignored());
    assert_eq!(e.table(), &before);
}

//
// blinds
//
#[test]
fn blinds_post_small_and_double_for_big() {
    let mut e = engine();

    assert!(e.place_blind(P1, BlindKind::Small).is_applied());
    assert!(e.place_blind(P2, BlindKind::Big).is_applied());

    assert_eq!(bet(&e, P1), Chips(5));
    assert_eq!(bet(&e, P2), Chips(10));
    assert_eq!(e.pot(), Chips(15));
}

#[test]
fn short_stack_posts_partial_blind() {
    let mut e = engine();
    e.edit_player(P2, "Short", 7);

    assert!(e.place_blind(P2, BlindKind::Big).is_applied());

    assert!(chips(&e, P2).is_zero());
    assert_eq!(bet(&e, P2), Chips(7));
    assert_eq!(e.pot(), Chips(7));
}

#[test]
fn blind_from_empty_stack_is_ignored() {
    let mut e = engine();
    e.edit_player(P1, "Broke", 0);
    let before = snapshot(&e);

    assert_eq!(
        e.place_blind(P1, BlindKind::Small),
        Outcome::Ignored(EngineError::ZeroAmount)
    );
    assert_eq!(e.table(), &before);
}

#[test]
fn blind_follows_current_small_blind() {
    let mut e = engine();
    e.set_small_blind(Chips(25));
    e.place_blind(P1, BlindKind::Big);
    assert_eq!(bet(&e, P1), Chips(50));
}

//
// call
//
#[test]
fn call_brings_bet_up_to_table_maximum() {
    let mut e = engine();
    e.place_bet(P2, Chips(60));
    e.place_bet(P1, Chips(20));

    assert!(e.call(P1).is_applied());

    assert_eq!(bet(&e, P1), Chips(60));
    assert_eq!(chips(&e, P1), Chips(440));
    assert_eq!(e.pot(), Chips(120));
}

#[test]
fn call_with_nothing_to_match_is_ignored() {
    let mut e = engine();
    e.place_bet(P1, Chips(10));
    e.place_bet(P2, Chips(10));
    let before = snapshot(&e);

    assert_eq!(e.call(P1), Outcome::Ignored(EngineError::NothingToCall));
    assert_eq!(e.table(), &before);
}

#[test]
fn call_without_enough_chips_is_ignored_no_partial_call() {
    let mut e = engine();
    e.place_bet(P2, Chips(300));
    e.edit_player(P1, "Short", 100);
    let before = snapshot(&e);

    let outcome = e.call(P1);

    assert!(matches!(
        outcome,
        Outcome::Ignored(EngineError::NotEnoughChips { .. })
    ));
    assert_eq!(e.table(), &before);
}

//
// raise
//
#[test]
fn raise_puts_bet_at_max_plus_raise() {
    let mut e = engine();
    e.place_bet(P2, Chips(30)); // M = 30
    e.place_bet(P1, Chips(10)); // B = 10

    assert!(e.raise(P1, Chips(20)).is_applied());

    // bet = M + R = 50, заплачено (M - B) + R = 40
    assert_eq!(bet(&e, P1), Chips(50));
    assert_eq!(chips(&e, P1), Chips(450));
    assert_eq!(e.pot(), Chips(80));
}

#[test]
fn raise_when_already_at_max_just_adds_raise() {
    let mut e = engine();
    assert!(e.raise(P1, Chips(10)).is_applied());
    assert_eq!(bet(&e, P1), Chips(10));
    assert_eq!(e.pot(), Chips(10));
}

#[test]
fn raise_exceeding_stack_is_ignored() {
    let mut e = engine();
    e.place_bet(P2, Chips(400));
    let before = snapshot(&e);

    // нужно 400 + 101 = 501 > 500
    assert!(e.raise(P1, Chips(101)).is_ignored());
    assert_eq!(e.table(), &before);

    // ровно 500 – можно
    assert!(e.raise(P1, Chips(100)).is_applied());
    assert_eq!(bet(&e, P1), Chips(500));
    assert!(chips(&e, P1).is_zero());
}

#[test]
fn raise_that_would_overflow_is_ignored() {
    let mut e = engine();
    e.place_bet(P2, Chips(10));
    let before = snapshot(&e);

    assert_eq!(
        e.raise(P1, Chips(u64::MAX)),
        Outcome::Ignored(EngineError::Overflow)
    );
    assert_eq!(e.table(), &before);
}

#[test]
fn zero_raise_with_nothing_to_call_is_ignored() {
    let mut e = engine();
    assert_eq!(
        e.raise(P1, Chips::ZERO),
        Outcome::Ignored(EngineError::ZeroAmount)
    );
}

//
// all-in
//
#[test]
fn all_in_moves_entire_stack() {
    let mut e = engine();
    e.place_bet(P1, Chips(50));

    assert!(e.all_in(P1).is_applied());

    assert!(chips(&e, P1).is_zero());
    assert_eq!(bet(&e, P1), Chips(500));
    assert_eq!(e.pot(), Chips(500));
}

#[test]
fn all_in_with_empty_stack_is_ignored() {
    let mut e = engine();
    e.all_in(P1);
    let before = snapshot(&e);

    assert_eq!(e.all_in(P1), Outcome::Ignored(EngineError::ZeroAmount));
    assert_eq!(e.table(), &before);
}

//
// fold
//
#[test]
fn fold_marks_player_and_keeps_money_in_place() {
    let mut e = engine();
    e.place_bet(P1, Chips(20));

    assert!(e.fold(P1).is_applied());

    let p1 = e.player(P1).cloned().unwrap_or_else(|| panic!("P1 missing"));
    assert!(p1.folded);
    assert_eq!(p1.bet, Chips(20));
    assert_eq!(p1.chips, Chips(480));
    assert_eq!(e.pot(), Chips(20));
}

#[test]
fn folded_player_cannot_call_raise_all_in_or_fold_again() {
    let mut e = engine();
    e.place_bet(P2, Chips(20));
    e.fold(P1);
    let before = snapshot(&e);

    assert_eq!(e.call(P1), Outcome::Ignored(EngineError::PlayerFolded(P1)));
    assert_eq!(e.raise(P1, Chips(10)), Outcome::Ignored(EngineError::PlayerFolded(P1)));
    assert_eq!(e.all_in(P1), Outcome::Ignored(EngineError::PlayerFolded(P1)));
    assert_eq!(e.fold(P1), Outcome::Ignored(EngineError::PlayerFolded(P1)));
    assert_eq!(e.table(), &before);
}

#[test]
fn folded_player_can_still_post_blind() {
    let mut e = engine();
    e.fold(P1);
    assert!(e.place_blind(P1, BlindKind::Small).is_applied());
    assert_eq!(bet(&e, P1), Chips(5));
}

//
// apply + history
//
#[test]
fn apply_records_player_acted_event() {
    let mut e = engine();
    let history_before = e.history().len();

    e.apply(PlayerAction::new(P1, PlayerActionKind::Bet(Chips(15))));

    assert_eq!(e.history().len(), history_before + 1);
    match e.history().last().map(|ev| &ev.kind) {
        Some(TableEventKind::PlayerActed {
            player_id,
            action,
            amount,
            new_chips,
            pot_after,
        }) => {
            assert_eq!(*player_id, P1);
            assert_eq!(*action, PlayerActionKind::Bet(Chips(15)));
            assert_eq!(*amount, Chips(15));
            assert_eq!(*new_chips, Chips(485));
            assert_eq!(*pot_after, Chips(15));
        }
        other => panic!("expected PlayerActed, got {:?}", other),
    }
}

#[test]
fn ignored_actions_are_not_recorded() {
    let mut e = engine();
    let history_before = e.history().len();

    e.place_bet(P1, Chips(10_000));
    e.call(P1);
    e.all_in(77);

    assert_eq!(e.history().len(), history_before);
}
