// ==========================================
// Система учёта инвентаря бара - Слой импорта
// ==========================================
// Ответственность: превращение табличного файла в
// проверенных кандидатов и решения сверки со складом
// Поддержка: Excel, CSV
// ==========================================

// Объявления модулей
pub mod error;
pub mod file_parser;
pub mod ingredient_importer;
pub mod reconciler;
pub mod row_parser;

// Реэкспорт основных типов
pub use error::{ImportError, ImportResult, RowError};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawCell, RawRow, UniversalFileParser};
pub use ingredient_importer::IngredientImporter;
pub use reconciler::Reconciler;
