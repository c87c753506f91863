use serde::{Deserialize, Serialize};

use crate::display::ChipStack;
use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::PlayerId;

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub name: String,
    pub chips: Chips,
    pub bet: Chips,
    pub loans: Chips,
    pub folded: bool,
    /// Сколько не хватает до максимальной ставки.
    pub to_call: Chips,
    /// Стопка фишек для отрисовки стека.
    pub chip_stack: ChipStack,
}

/// DTO стола – всё, что нужно фронту для перерисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TableViewDto {
    pub players: Vec<PlayerViewDto>,
    pub pot: Chips,
    pub pot_stack: ChipStack,
    pub phase: Phase,
    /// "Pre-Flop", "Flop", ...
    pub phase_label: String,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub loan_increment: Chips,
    pub highest_bet: Chips,
    pub total_chips_in_play: Chips,
    pub total_loans: Chips,
}

impl TableViewDto {
    pub fn player(&self, player_id: PlayerId) -> Option<&PlayerViewDto> {
        self.players.iter().find(|p| p.player_id == player_id)
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Добавлен игрок.
    PlayerAdded {
        player_id: PlayerId,
        table: TableViewDto,
    },

    /// Обновлённое состояние стола.
    ///
    /// `applied == false` – команда ничего не изменила, `reason` – почему.
    TableState {
        applied: bool,
        reason: Option<String>,
        table: TableViewDto,
    },
}

impl CommandResponse {
    pub fn table(&self) -> &TableViewDto {
        match self {
            CommandResponse::PlayerAdded { table, .. } => table,
            CommandResponse::TableState { table, .. } => table,
        }
    }

    pub fn is_applied(&self) -> bool {
        match self {
            CommandResponse::PlayerAdded { .. } => true,
            CommandResponse::TableState { applied, .. } => *applied,
        }
    }
}
