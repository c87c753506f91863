//! Трекер фишек для покерного стола на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! связываем его с движком стола `TableEngine`.

pub mod api;
pub mod display;
pub mod domain;
pub mod engine;
pub mod infra;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, CommandResponse, Query, QueryResponse};

/// Операции (внешние команды), которые модуль принимает.
///
/// Одна операция = одна команда оператора из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TrackerOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera. Стол один, сообщений нет.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TrackerMessage {}

/// Запросы к сервису (read-only).
pub type TrackerQuery = Query;

/// Ответы на запросы.
pub type TrackerResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct TrackerAbi;

impl ContractAbi for TrackerAbi {
    type Operation = TrackerOperation;
    type Response = CommandResponse;
}

impl ServiceAbi for TrackerAbi {
    type Query = TrackerQuery;
    type QueryResponse = TrackerResponse;
}

/// Выполнить операцию над движком – то, что делает контракт.
pub fn execute_operation(engine: &mut engine::TableEngine, operation: TrackerOperation) -> CommandResponse {
    match operation {
        TrackerOperation::Command(command) => api::execute(engine, command),
    }
}
