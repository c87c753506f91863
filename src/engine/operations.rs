use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::player::Player;
use crate::domain::table::Table;
use crate::domain::PlayerId;
use crate::engine::actions::{PlayerAction, PlayerActionKind, StepDirection};
use crate::engine::betting::{all_in_amount, blind_amount, call_amount, raise_amount};
use crate::engine::errors::EngineError;
use crate::engine::history::TableEventKind;
use crate::engine::pot::{award_to, collect_bet, discard};
use crate::engine::validation::ensure_in_hand;

// Операции над столом. Каждая либо применяется целиком и возвращает
// события для журнала, либо возвращает ошибку и не трогает стол.

/// Посадить нового игрока со стартовым стеком.
pub fn add_player(table: &mut Table, player_id: PlayerId) -> TableEventKind {
    let name = table.next_default_name();
    let chips = table.config.starting_stack;
    table.players.push(Player::new(player_id, name.clone(), chips));

    TableEventKind::PlayerAdded {
        player_id,
        name,
        chips,
    }
}

/// Убрать игрока. Банк и чужие ставки не пересчитываются.
pub fn remove_player(table: &mut Table, player_id: PlayerId) -> Result<TableEventKind, EngineError> {
    let idx = table
        .players
        .iter()
        .position(|p| p.id == player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    table.players.remove(idx);

    Ok(TableEventKind::PlayerRemoved { player_id })
}

/// Ручная корректировка стека: `max(0, chips + delta)`.
pub fn adjust_chips(table: &mut Table, player_id: PlayerId, delta: i64) -> Result<TableEventKind, EngineError> {
    if delta == 0 {
        return Err(EngineError::ZeroAmount);
    }
    let player = table
        .player_mut(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    player.chips = player.chips.apply_delta(delta).ok_or(EngineError::Overflow)?;

    Ok(TableEventKind::ChipsAdjusted {
        player_id,
        delta,
        new_chips: player.chips,
    })
}

/// Займ: новые деньги в стек, мимо банка.
pub fn take_loan(table: &mut Table, player_id: PlayerId, amount: Chips) -> Result<TableEventKind, EngineError> {
    if amount.is_zero() {
        return Err(EngineError::ZeroAmount);
    }
    let player = table
        .player_mut(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    let chips = player.chips.checked_add(amount).ok_or(EngineError::Overflow)?;
    let loans = player.loans.checked_add(amount).ok_or(EngineError::Overflow)?;
    player.chips = chips;
    player.loans = loans;

    Ok(TableEventKind::LoanTaken {
        player_id,
        amount,
        total_loans: player.loans,
    })
}

/// Применить действие игрока. Все ставки идут через `collect_bet`.
pub fn apply_action(table: &mut Table, action: PlayerAction) -> Result<TableEventKind, EngineError> {
    let player_id = action.player_id;

    let amount = match &action.kind {
        PlayerActionKind::Bet(amount) => *amount,
        PlayerActionKind::Blind(kind) => blind_amount(table, player_id, *kind)?,
        PlayerActionKind::Call => call_amount(table, player_id)?,
        PlayerActionKind::Raise(raise_by) => raise_amount(table, player_id, *raise_by)?,
        PlayerActionKind::AllIn => all_in_amount(table, player_id)?,
        PlayerActionKind::Fold => return fold(table, player_id),
    };

    let pot_after = collect_bet(table, player_id, amount)?;
    let new_chips = table
        .player(player_id)
        .map(|p| p.chips)
        .unwrap_or(Chips::ZERO);

    Ok(TableEventKind::PlayerActed {
        player_id,
        action: action.kind,
        amount,
        new_chips,
        pot_after,
    })
}

fn fold(table: &mut Table, player_id: PlayerId) -> Result<TableEventKind, EngineError> {
    let player = table
        .player_mut(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    ensure_in_hand(player)?;
    player.folded = true;
    let new_chips = player.chips;

    Ok(TableEventKind::PlayerActed {
        player_id,
        action: PlayerActionKind::Fold,
        amount: Chips::ZERO,
        new_chips,
        pot_after: table.pot,
    })
}

/// Следующая фаза. Переход Showdown -> PreFlop – это ещё и новая раздача.
pub fn advance_phase(table: &mut Table) -> Vec<TableEventKind> {
    let wraps = table.phase.wraps();
    table.phase = table.phase.next();

    let mut events = vec![TableEventKind::PhaseChanged { phase: table.phase }];
    if wraps {
        events.push(clear_bets(table));
    }
    events
}

/// "Новая раздача": ставки и фолды сброшены, банк сгорает.
pub fn clear_bets(table: &mut Table) -> TableEventKind {
    for p in table.players.iter_mut() {
        p.reset_for_new_hand();
    }
    let discarded = discard(table);

    TableEventKind::BetsCleared { discarded }
}

/// Выплатить банк победителю и снять фолды.
///
/// Ставки игроков остаются как были, в отличие от `clear_bets`.
pub fn award_pot(table: &mut Table, player_id: PlayerId) -> Result<TableEventKind, EngineError> {
    let amount = award_to(table, player_id)?;
    for p in table.players.iter_mut() {
        p.folded = false;
    }

    Ok(TableEventKind::PotAwarded { player_id, amount })
}

/// Переименовать и выставить стек напрямую, мимо банка.
pub fn edit_player(
    table: &mut Table,
    player_id: PlayerId,
    name: String,
    chips: i64,
) -> Result<TableEventKind, EngineError> {
    let player = table
        .player_mut(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    player.name = name;
    player.chips = Chips::from_signed(chips);

    Ok(TableEventKind::PlayerEdited {
        player_id,
        name: player.name.clone(),
        chips: player.chips,
    })
}

/// Полный сброс стола к стартовым значениям. Игроки остаются.
pub fn reset_all(table: &mut Table) -> TableEventKind {
    let starting_stack = table.config.starting_stack;
    for p in table.players.iter_mut() {
        p.reset_to(starting_stack);
    }
    table.pot = Chips::ZERO;
    table.phase = Phase::PreFlop;

    TableEventKind::TableReset
}

pub fn set_small_blind(table: &mut Table, small_blind: Chips) -> Result<TableEventKind, EngineError> {
    if small_blind.is_zero() {
        return Err(EngineError::InvalidBlind);
    }
    table.small_blind = small_blind;

    Ok(TableEventKind::SmallBlindChanged { small_blind })
}

/// Малый блайнд кнопками +/-: шаг из конфига, не ниже шага.
pub fn step_small_blind(table: &mut Table, direction: StepDirection) -> Result<TableEventKind, EngineError> {
    let step = table.config.blind_step;
    let next = match direction {
        StepDirection::Up => table.small_blind + step,
        StepDirection::Down => {
            if table.small_blind <= step {
                return Err(EngineError::InvalidBlind);
            }
            table.small_blind - step
        }
    };
    set_small_blind(table, next)
}

pub fn set_loan_increment(table: &mut Table, loan_increment: Chips) -> Result<TableEventKind, EngineError> {
    if loan_increment.is_zero() {
        return Err(EngineError::InvalidLoanIncrement { min: Chips(1) });
    }
    table.loan_increment = loan_increment;

    Ok(TableEventKind::LoanIncrementChanged { loan_increment })
}

/// Сумма займа кнопками +/-: шаг и нижняя граница из конфига.
pub fn step_loan_increment(table: &mut Table, direction: StepDirection) -> Result<TableEventKind, EngineError> {
    let step = table.config.loan_step;
    let floor = table.config.min_loan_increment;
    let next = match direction {
        StepDirection::Up => table.loan_increment + step,
        StepDirection::Down => {
            if table.loan_increment <= floor {
                return Err(EngineError::InvalidLoanIncrement { min: floor });
            }
            (table.loan_increment - step).max(floor)
        }
    };
    set_loan_increment(table, next)
}
