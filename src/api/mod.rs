//! Внешний API трекера.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет стол (игроки, ставки, банк, фазы);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — снапшот стола для фронта;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - dispatch.rs — применение команд/запросов к `TableEngine`.

pub mod commands;
pub mod dispatch;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dispatch::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
