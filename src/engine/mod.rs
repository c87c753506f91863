//! Движок стола: ставки, банк, фазы раздачи, займы.
//!
//! Высокоуровневый объект: `TableEngine`
//! Основные операции:
//!   - `apply` – действие игрока (блайнд, колл, рейз, олл-ин, фолд)
//!   - `award_pot` / `clear_bets` – конец раздачи
//!   - `advance_phase` – переход фаз (после шоудауна – новая раздача)
//!
//! Неприменимые операции ничего не меняют и возвращают `Outcome::Ignored`.

pub mod actions;
pub mod betting;
pub mod errors;
pub mod history;
pub mod operations;
pub mod pot;
pub mod table_engine;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind, StepDirection};
pub use errors::EngineError;
pub use history::{TableEvent, TableEventKind, TableHistory};
pub use table_engine::{Outcome, TableEngine};
