//! Доменная модель трекера: фишки, игроки, стол, фазы раздачи, блайнды.

pub mod blinds;
pub mod chips;
pub mod phase;
pub mod player;
pub mod table;

/// Непрозрачный идентификатор игрока.
pub type PlayerId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Chips и т.п.
pub use blinds::*;
pub use chips::*;
pub use phase::*;
pub use player::*;
pub use table::*;
