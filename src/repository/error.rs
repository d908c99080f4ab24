// ==========================================
// Система учёта инвентаря бара - Ошибки слоя хранения
// ==========================================
// Инструмент: thiserror
// ==========================================

use thiserror::Error;

/// Ошибки слоя хранения
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Ошибки базы данных =====
    #[error("запись не найдена: {entity} с id={id}")]
    NotFound { entity: String, id: String },

    #[error("не удалось открыть базу данных: {0}")]
    DatabaseConnectionError(String),

    #[error("не удалось захватить блокировку подключения: {0}")]
    LockError(String),

    #[error("ошибка транзакции: {0}")]
    DatabaseTransactionError(String),

    #[error("ошибка запроса к базе данных: {0}")]
    DatabaseQueryError(String),

    #[error("нарушение уникальности: {0}")]
    UniqueConstraintViolation(String),

    #[error("нарушение внешнего ключа: {0}")]
    ForeignKeyViolation(String),

    // ===== Ошибки данных =====
    #[error("некорректное значение поля {field}: {message}")]
    FieldValueError { field: String, message: String },

    // ===== Общие ошибки =====
    #[error("внутренняя ошибка: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    RepositoryError::ForeignKeyViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Псевдоним результата слоя хранения
pub type RepositoryResult<T> = Result<T, RepositoryError>;
