use crate::domain::blinds::BlindKind;
use crate::domain::chips::Chips;
use crate::domain::table::Table;
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;
use crate::engine::validation::ensure_in_hand;

// Расчёт сумм для действий. Здесь ничего не мутируется:
// сама ставка всегда идёт через pot::collect_bet.

/// Сумма колла: разница до максимальной ставки.
pub fn call_amount(table: &Table, player_id: PlayerId) -> Result<Chips, EngineError> {
    let player = table
        .player(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    ensure_in_hand(player)?;

    let shortfall = table.highest_bet().saturating_sub(player.bet);
    if shortfall.is_zero() {
        return Err(EngineError::NothingToCall);
    }
    Ok(shortfall)
}

/// Сумма рейза: колл + повышение.
pub fn raise_amount(table: &Table, player_id: PlayerId, raise_by: Chips) -> Result<Chips, EngineError> {
    let player = table
        .player(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    ensure_in_hand(player)?;

    let total = table
        .highest_bet()
        .saturating_sub(player.bet)
        .checked_add(raise_by)
        .ok_or(EngineError::Overflow)?;
    if total.is_zero() {
        return Err(EngineError::ZeroAmount);
    }
    Ok(total)
}

/// Блайнд урезается до стека: короткий стек постит частичный блайнд.
pub fn blind_amount(table: &Table, player_id: PlayerId, kind: BlindKind) -> Result<Chips, EngineError> {
    let player = table
        .player(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;

    let amount = kind.amount(table.small_blind).min(player.chips);
    if amount.is_zero() {
        return Err(EngineError::ZeroAmount);
    }
    Ok(amount)
}

/// Олл-ин: весь оставшийся стек.
pub fn all_in_amount(table: &Table, player_id: PlayerId) -> Result<Chips, EngineError> {
    let player = table
        .player(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    ensure_in_hand(player)?;

    if player.chips.is_zero() {
        return Err(EngineError::ZeroAmount);
    }
    Ok(player.chips)
}
