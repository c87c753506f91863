// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Какой блайнд постит игрок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlindKind {
    Small,
    Big,
}

impl BlindKind {
    /// Размер блайнда при заданном малом блайнде.
    /// Большой блайнд всегда ровно 2× малого и отдельно не хранится.
    pub fn amount(self, small_blind: Chips) -> Chips {
        match self {
            BlindKind::Small => small_blind,
            BlindKind::Big => small_blind + small_blind,
        }
    }
}

/// Большой блайнд для данного малого.
pub fn big_blind(small_blind: Chips) -> Chips {
    BlindKind::Big.amount(small_blind)
}
