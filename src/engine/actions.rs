use serde::{Deserialize, Serialize};

use crate::domain::{BlindKind, Chips, PlayerId};

/// Действие игрока в раздаче. Всё сводится к одной ставке (place_bet).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PlayerActionKind {
    /// Поставить ровно столько (без проверки на уравнивание).
    Bet(Chips),
    /// Блайнд, урезанный до стека игрока.
    Blind(BlindKind),
    Call,
    /// Повышение поверх максимальной ставки на указанную сумму.
    Raise(Chips),
    AllIn,
    Fold,
}

/// Конкретное действие игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerAction {
    pub player_id: PlayerId,
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn new(player_id: PlayerId, kind: PlayerActionKind) -> Self {
        Self { player_id, kind }
    }
}

/// Направление для кнопок +/- (блайнд, сумма займа).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}
