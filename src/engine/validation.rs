use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::errors::EngineError;

/// Ставка возможна только целиком: частичных ставок движок не делает.
pub fn ensure_can_pay(player: &Player, amount: Chips) -> Result<(), EngineError> {
    if amount.is_zero() {
        return Err(EngineError::ZeroAmount);
    }
    if player.chips < amount {
        return Err(EngineError::NotEnoughChips {
            needed: amount,
            available: player.chips,
        });
    }
    Ok(())
}

/// Call/raise/all-in недоступны сфолдившему игроку.
pub fn ensure_in_hand(player: &Player) -> Result<(), EngineError> {
    if !player.is_in_hand() {
        return Err(EngineError::PlayerFolded(player.id));
    }
    Ok(())
}
