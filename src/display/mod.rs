//! Производные представления для отображения. Состояния не хранят.

pub mod chip_stack;

pub use chip_stack::{chip_stack, hidden_remainder, ChipColor, ChipCount, ChipStack, Denomination};
