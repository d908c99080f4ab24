// ==========================================
// Система учёта инвентаря бара - Ошибки API-слоя
// ==========================================
// Ответственность: понятные оператору ошибки поверх
// ошибок слоя хранения, импорта и экспорта
// Инструмент: thiserror
// ==========================================

use crate::exporter::ExportError;
use crate::importer::ImportError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// Ошибки API-слоя
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Доступ =====
    #[error("доступ запрещён: роль {role} не может выполнить операцию '{operation}'")]
    AccessDenied { role: String, operation: String },

    #[error("неверный логин или пароль")]
    InvalidCredentials,

    // ===== Валидация =====
    #[error("некорректный ввод: {0}")]
    InvalidInput(String),

    #[error("пользователь с логином '{0}' уже существует")]
    LoginTaken(String),

    #[error("запись не найдена: {0}")]
    NotFound(String),

    // ===== Нижние слои =====
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Псевдоним результата API-слоя
pub type ApiResult<T> = Result<T, ApiError>;
