// ==========================================
// Система учёта инвентаря бара - Разбор строки
// ==========================================
// Ожидаемые колонки: название (текст), количество
// (число или числовой текст), единица измерения (текст)
// Ответственность: распознавание заголовка и чистое
// превращение строки в кандидата либо RowError
// ==========================================

use crate::domain::ingredient::IngredientCandidate;
use crate::importer::error::RowError;
use crate::importer::file_parser::RawCell;

/// Маркеры заголовка для первой ячейки первой строки
const HEADER_MARKERS: [&str; 6] = [
    "название",
    "ингредиент",
    "товар",
    "name",
    "ingredient",
    "item",
];

/// Распознаёт строку-заголовок
///
/// Проверяется только первая ячейка: регистронезависимое
/// вхождение любого из маркеров. Любая неоднозначность
/// трактуется как "не заголовок" (fail open)
pub fn is_header_row(cells: &[RawCell]) -> bool {
    let Some(text) = cells.first().and_then(RawCell::as_text) else {
        return false;
    };

    let lowered = text.to_lowercase();
    HEADER_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Разбирает строку в кандидата
///
/// Чистая функция: классификация строки выражена типом
/// Result, исключения не используются как поток управления
pub fn parse_row(cells: &[RawCell]) -> Result<IngredientCandidate, RowError> {
    let name = extract_text(cells, 0).ok_or(RowError::Name)?;
    let quantity = extract_quantity(cells)?;
    let unit = extract_text(cells, 2).ok_or(RowError::Unit)?;

    Ok(IngredientCandidate {
        name,
        quantity,
        unit,
    })
}

/// Непустой текст ячейки после обрезки пробелов
fn extract_text(cells: &[RawCell], index: usize) -> Option<String> {
    match cells.get(index) {
        Some(RawCell::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        // числовое название/единица - допустимый, но странный ввод
        Some(RawCell::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Количество: числовая ячейка берётся напрямую, текст
/// разбирается с заменой десятичной запятой на точку
/// (инвариантный числовой формат, независимый от локали)
fn extract_quantity(cells: &[RawCell]) -> Result<f64, RowError> {
    let quantity = match cells.get(1) {
        Some(RawCell::Number(n)) => *n,
        Some(RawCell::Text(s)) => {
            let normalized = s.trim().replace(',', ".");
            normalized
                .parse::<f64>()
                .map_err(|_| RowError::Quantity(s.trim().to_string()))?
        }
        _ => return Err(RowError::Quantity(String::new())),
    };

    // количество на складе - конечное неотрицательное число;
    // NaN и бесконечность проходят текстовый разбор, но
    // кандидатами не становятся
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(RowError::Quantity(quantity.to_string()));
    }

    Ok(quantity)
}
