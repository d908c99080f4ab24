// ==========================================
// Система учёта инвентаря бара - Импортёр ингредиентов
// ==========================================
// Поток: чтение файла -> классификация строк ->
// кандидаты + построчный отчёт
// Строчные ошибки никогда не прерывают пакет;
// файловые ошибки прерывают импорт без частичного результата
// ==========================================

use crate::domain::import::{ImportReport, RowOutcome};
use crate::domain::ingredient::IngredientCandidate;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::row_parser;
use std::path::Path;
use tracing::{debug, info, instrument};

// ==========================================
// IngredientImporter
// ==========================================
// Побочных эффектов нет: файл только читается,
// запись в базу выполняет вызывающая сторона
pub struct IngredientImporter {
    parser: UniversalFileParser,
}

impl Default for IngredientImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientImporter {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
        }
    }

    /// Разбирает файл в список кандидатов и построчный отчёт
    ///
    /// # Возврат
    /// - Ok((кандидаты в порядке строк, отчёт))
    /// - Err(ImportError): файл нечитаем или пуст
    #[instrument(skip(self, file_path))]
    pub fn parse<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> ImportResult<(Vec<IngredientCandidate>, ImportReport)> {
        let path = file_path.as_ref();
        info!(file = %path.display(), "начат разбор файла импорта");

        let rows = self.parser.parse(path)?;
        debug!(rows = rows.len(), "файл прочитан");

        let mut candidates = Vec::new();
        let mut report = ImportReport::default();

        for (row_number, cells) in rows {
            // заголовок проверяется только у первой строки листа
            if row_number == 1 && row_parser::is_header_row(&cells) {
                debug!(row = row_number, "строка пропущена: заголовок");
                report.record(row_number, RowOutcome::SkippedHeader);
                continue;
            }

            match row_parser::parse_row(&cells) {
                Ok(candidate) => {
                    debug!(
                        row = row_number,
                        name = %candidate.name,
                        quantity = candidate.quantity,
                        "строка принята"
                    );
                    candidates.push(candidate);
                    report.record(row_number, RowOutcome::Accepted);
                }
                Err(e) => {
                    debug!(row = row_number, reason = %e, "строка пропущена");
                    report.record(
                        row_number,
                        RowOutcome::SkippedInvalid {
                            field: e.field().to_string(),
                            message: e.to_string(),
                        },
                    );
                }
            }
        }

        info!(
            processed = report.processed,
            accepted = report.accepted,
            skipped = report.skipped,
            "разбор файла завершён"
        );

        Ok((candidates, report))
    }
}
