use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
///
/// Сами операции стола ошибок не возвращают – тут только то, что
/// ломается до движка: разбор запроса и конфиг.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Некорректный конфиг стола.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Отказ движка в текстовом виде.
    #[error("engine: {0}")]
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
