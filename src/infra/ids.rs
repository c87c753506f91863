use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Простая генерация ID игроков на основе монотонного счётчика.
/// Удалённые ID повторно не выдаются.
#[derive(Debug)]
pub struct IdGenerator {
    player_counter: AtomicU64,
}

impl IdGenerator {
    /// Генератор с начальным значением 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: PlayerId) -> Self {
        Self {
            player_counter: AtomicU64::new(first),
        }
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Какой ID будет выдан следующим (без выдачи).
    pub fn peek(&self) -> PlayerId {
        self.player_counter.load(Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Иногда удобно иметь "человекочитаемый" внешний ID (например, из фронта),
/// но внутри всё равно использовать числовые.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ExternalId(pub String);

impl ExternalId {
    /// Разобрать числовой ID игрока, если строка – это число.
    pub fn to_player_id(&self) -> Option<PlayerId> {
        self.0.trim().parse().ok()
    }
}
