use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::phase::Phase;
use crate::domain::PlayerId;
use crate::engine::actions::PlayerActionKind;

/// Тип события за столом. Пишутся только применённые операции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum TableEventKind {
    PlayerAdded {
        player_id: PlayerId,
        name: String,
        chips: Chips,
    },

    PlayerRemoved {
        player_id: PlayerId,
    },

    /// Ручная корректировка стека (мимо банка).
    ChipsAdjusted {
        player_id: PlayerId,
        delta: i64,
        new_chips: Chips,
    },

    LoanTaken {
        player_id: PlayerId,
        amount: Chips,
        total_loans: Chips,
    },

    /// Действие игрока, которое прошло через банк (или фолд).
    PlayerActed {
        player_id: PlayerId,
        action: PlayerActionKind,
        amount: Chips,
        new_chips: Chips,
        pot_after: Chips,
    },

    PhaseChanged {
        phase: Phase,
    },

    /// Новая раздача: ставки и банк обнулены, банк сгорел.
    BetsCleared {
        discarded: Chips,
    },

    PotAwarded {
        player_id: PlayerId,
        amount: Chips,
    },

    PlayerEdited {
        player_id: PlayerId,
        name: String,
        chips: Chips,
    },

    SmallBlindChanged {
        small_blind: Chips,
    },

    LoanIncrementChanged {
        loan_increment: Chips,
    },

    TableReset,
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TableEvent {
    pub index: u32,
    pub kind: TableEventKind,
}

/// Журнал стола за сессию.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TableHistory {
    pub events: Vec<TableEvent>,
}

impl TableHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: TableEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(TableEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&TableEvent> {
        self.events.last()
    }
}
