// ==========================================
// Система учёта инвентаря бара - Экспорт заказов
// ==========================================
// Формат: CSV с колонками Ингредиент / Количество /
// Ед. / Дата / Автор, даты в формате дд.мм.гггг чч:мм
// ==========================================

use crate::domain::order::OrderDetails;
use csv::WriterBuilder;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Формат даты в выгрузке
const EXPORT_DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Ошибки экспорта
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("ошибка записи файла: {0}")]
    FileWrite(String),

    #[error("ошибка формирования CSV: {0}")]
    Csv(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWrite(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err.to_string())
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

// ==========================================
// OrderExporter
// ==========================================
pub struct OrderExporter;

impl OrderExporter {
    /// Выгружает заказы в CSV-файл
    ///
    /// # Возврат
    /// - Ok(usize): число выгруженных заказов
    pub fn export_orders<P: AsRef<Path>>(
        orders: &[OrderDetails],
        out_path: P,
    ) -> ExportResult<usize> {
        let path = out_path.as_ref();
        let mut writer = WriterBuilder::new().from_path(path)?;

        writer.write_record(["Ингредиент", "Количество", "Ед.", "Дата", "Автор"])?;

        for details in orders {
            let record = [
                details.ingredient_name.clone(),
                details.order.quantity.to_string(),
                details.ingredient_unit.clone(),
                details
                    .order
                    .order_date
                    .format(EXPORT_DATE_FORMAT)
                    .to_string(),
                details.created_by_login.clone(),
            ];
            writer.write_record(&record)?;
        }

        writer.flush()?;
        info!(file = %path.display(), orders = orders.len(), "экспорт заказов завершён");
        Ok(orders.len())
    }
}
