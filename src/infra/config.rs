use std::fs;
use std::path::Path;

use crate::api::errors::ApiError;
use crate::domain::table::TableConfig;

/// Разобрать конфиг стола из JSON. Отсутствующие поля – по умолчанию.
pub fn parse_config(raw: &str) -> Result<TableConfig, ApiError> {
    let config: TableConfig = serde_json::from_str(raw)?;
    config.validate().map_err(ApiError::InvalidConfig)?;
    Ok(config)
}

/// Прочитать конфиг стола из JSON-файла.
pub fn load_config(path: impl AsRef<Path>) -> Result<TableConfig, ApiError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| ApiError::BadRequest(format!("{}: {}", path.display(), e)))?;
    parse_config(&raw)
}
