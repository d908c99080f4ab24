// ==========================================
// Система учёта инвентаря бара - Ошибки импорта
// ==========================================
// Инструмент: thiserror
// Файловые ошибки фатальны для всего импорта;
// строчные ошибки (RowError) никогда не прерывают пакет
// ==========================================

use thiserror::Error;

/// Ошибки уровня файла
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("файл не найден: {0}")]
    FileNotFound(String),

    #[error("формат файла не поддерживается: {0} (ожидается .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("файл не содержит читаемого листа: {0}")]
    FileFormat(String),

    #[error("файл не содержит строк с данными")]
    EmptyFile,

    #[error("ошибка чтения файла: {0}")]
    FileRead(String),

    #[error("ошибка разбора CSV: {0}")]
    Csv(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileRead(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Csv(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::FileFormat(err.to_string())
    }
}

/// Ошибки уровня строки
///
/// Локально перехватываются и превращаются в
/// RowOutcome::SkippedInvalid с сохранением причины
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("пустое название ингредиента")]
    Name,

    #[error("количество не является числом: {0:?}")]
    Quantity(String),

    #[error("пустая единица измерения")]
    Unit,
}

impl RowError {
    /// Имя поля, вызвавшего отбраковку строки
    pub fn field(&self) -> &'static str {
        match self {
            RowError::Name => "name",
            RowError::Quantity(_) => "quantity",
            RowError::Unit => "unit",
        }
    }
}

/// Псевдоним результата импорта
pub type ImportResult<T> = Result<T, ImportError>;
