use crate::domain::chips::Chips;
use crate::domain::table::Table;
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;
use crate::engine::validation::ensure_can_pay;

/// Единственный примитив движения денег в банк: стек -> ставка -> банк.
///
/// Либо применяется целиком, либо не меняет ничего.
pub fn collect_bet(table: &mut Table, player_id: PlayerId, amount: Chips) -> Result<Chips, EngineError> {
    let pot = table.pot.checked_add(amount).ok_or(EngineError::Overflow)?;
    let player = table
        .player_mut(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;

    ensure_can_pay(player, amount)?;
    let bet = player.bet.checked_add(amount).ok_or(EngineError::Overflow)?;

    player.chips -= amount;
    player.bet = bet;
    table.pot = pot;

    Ok(table.pot)
}

/// Выплатить весь банк игроку. Ставки игроков не трогаем.
pub fn award_to(table: &mut Table, player_id: PlayerId) -> Result<Chips, EngineError> {
    let pot = table.pot;
    let player = table
        .player_mut(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;

    player.chips = player.chips.checked_add(pot).ok_or(EngineError::Overflow)?;
    table.pot = Chips::ZERO;

    Ok(pot)
}

/// Обнулить банк без выплаты. Возвращает сгоревшую сумму.
pub fn discard(table: &mut Table) -> Chips {
    core::mem::replace(&mut table.pot, Chips::ZERO)
}
