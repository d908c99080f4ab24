// ==========================================
// Система учёта инвентаря бара - Слой экспорта
// ==========================================
// Ответственность: выгрузка заказов в файл для отчётности
// ==========================================

pub mod order_exporter;

pub use order_exporter::{ExportError, ExportResult, OrderExporter};
