use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Игрок за столом: стек, ставка в текущей раздаче, долги, фолд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Отображаемое имя (оператор может переименовать).
    pub name: String,
    /// Текущий стек. Никогда не уходит в минус.
    pub chips: Chips,
    /// Ставка в текущей раздаче. Сбрасывается новой раздачей.
    pub bet: Chips,
    /// Сколько всего взято в долг. Только растёт (кроме полного сброса).
    pub loans: Chips,
    pub folded: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, chips: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
            bet: Chips::ZERO,
            loans: Chips::ZERO,
            folded: false,
        }
    }

    /// Игрок ещё претендует на банк.
    pub fn is_in_hand(&self) -> bool {
        !self.folded
    }

    /// Сброс на границе раздачи: ставка и фолд.
    pub fn reset_for_new_hand(&mut self) {
        self.bet = Chips::ZERO;
        self.folded = false;
    }

    /// Полный сброс к стартовому стеку.
    pub fn reset_to(&mut self, starting_stack: Chips) {
        self.chips = starting_stack;
        self.bet = Chips::ZERO;
        self.loans = Chips::ZERO;
        self.folded = false;
    }
}
