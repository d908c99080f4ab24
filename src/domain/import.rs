// ==========================================
// Система учёта инвентаря бара - Результаты импорта
// ==========================================
// Назначение: построчный протокол разбора файла
// и итог сверки с существующим складом
// ==========================================

use crate::domain::ingredient::{IngredientCandidate, IngredientUpdate};
use serde::{Deserialize, Serialize};

// ==========================================
// RowOutcome - терминальная классификация строки
// ==========================================
// Переходы: Unprocessed -> {Accepted | SkippedHeader | SkippedInvalid},
// без повторных попыток и отката
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowOutcome {
    /// Строка успешно разобрана в кандидата
    Accepted,
    /// Первая строка распознана как заголовок
    SkippedHeader,
    /// Строка отброшена: нечитаемое поле
    SkippedInvalid {
        /// Имя поля ("name" / "quantity" / "unit")
        field: String,
        /// Причина для отображения оператору
        message: String,
    },
}

// ==========================================
// ImportRow - протокол одной строки файла
// ==========================================
// Живёт только в пределах одного прогона импорта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRow {
    /// Номер строки в файле (с единицы)
    pub row_number: usize,
    pub outcome: RowOutcome,
}

// ==========================================
// ImportReport - сводка одного прогона импорта
// ==========================================
// Инвариант: processed = accepted + skipped
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    /// Всего обработано строк
    pub processed: usize,
    /// Пропущено строк (заголовок + нечитаемые)
    pub skipped: usize,
    /// Успешно разобрано строк
    pub accepted: usize,
    /// Построчный протокол в порядке следования строк
    pub rows: Vec<ImportRow>,
}

impl ImportReport {
    /// Фиксирует итог строки и обновляет счётчики
    pub fn record(&mut self, row_number: usize, outcome: RowOutcome) {
        self.processed += 1;
        match outcome {
            RowOutcome::Accepted => self.accepted += 1,
            RowOutcome::SkippedHeader | RowOutcome::SkippedInvalid { .. } => self.skipped += 1,
        }
        self.rows.push(ImportRow { row_number, outcome });
    }
}

// ==========================================
// ReconcileResult - решения сверки
// ==========================================
// Чистый результат: сами записи не изменяются,
// Create/Update выполняет вызывающая сторона
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconcileResult {
    /// Кандидаты без совпадения по названию - добавить
    pub added: Vec<IngredientCandidate>,
    /// Совпавшие по названию - обновить количество и единицу
    pub updated: Vec<IngredientUpdate>,
}

impl ReconcileResult {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }
}

// ==========================================
// ImportOutcome - итог импорта после записи в базу
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    /// Построчный протокол разбора
    pub report: ImportReport,
    /// Добавлено новых ингредиентов
    pub added: usize,
    /// Обновлено существующих ингредиентов
    pub updated: usize,
}

impl ImportOutcome {
    /// Всего успешно применённых кандидатов
    pub fn succeeded(&self) -> usize {
        self.added + self.updated
    }
}
