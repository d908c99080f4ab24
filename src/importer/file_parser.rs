// ==========================================
// Система учёта инвентаря бара - Разбор файлов
// ==========================================
// Поддержка: Excel (.xlsx/.xls) / CSV (.csv)
// Результат: ячейки с сохранением исходного типа
// (число/текст), полностью пустые строки отбрасываются
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawCell - ячейка с исходным типом
// ==========================================
// Различение числового и текстового типа нужно
// правилу извлечения количества: числовая ячейка
// берётся как есть, текст разбирается отдельно
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
}

impl RawCell {
    pub fn is_empty(&self) -> bool {
        matches!(self, RawCell::Empty)
    }

    /// Текстовое содержимое ячейки, если она текстовая
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawCell::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Строка файла: номер (с единицы) и ячейки
pub type RawRow = (usize, Vec<RawCell>);

// ==========================================
// FileParser - общий интерфейс разбора файла
// ==========================================
pub trait FileParser {
    /// Читает файл в последовательность непустых строк
    /// в порядке следования
    fn parse_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// ExcelParser
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        let path = file_path;

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(path)?;

        // первый лист книги
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::FileFormat(
                "книга Excel не содержит листов".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::FileFormat(e.to_string()))?;

        if range.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        // range начинается с первой занятой строки листа;
        // номера строк считаются от начала листа
        let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);

        let mut rows = Vec::new();
        for (idx, data_row) in range.rows().enumerate() {
            let cells: Vec<RawCell> = data_row.iter().map(convert_cell).collect();

            // полностью пустые строки не учитываются
            if cells.iter().all(RawCell::is_empty) {
                continue;
            }

            rows.push((first_row + idx + 1, cells));
        }

        if rows.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        Ok(rows)
    }
}

/// Преобразует ячейку calamine с сохранением типа
fn convert_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::Float(f) => RawCell::Number(*f),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::DateTime(dt) => RawCell::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            if s.trim().is_empty() {
                RawCell::Empty
            } else {
                RawCell::Text(s.clone())
            }
        }
        Data::Bool(b) => RawCell::Text(b.to_string()),
        Data::Error(e) => RawCell::Text(format!("{:?}", e)),
    }
}

// ==========================================
// CsvParser
// ==========================================
// CSV не несёт типовой информации: все ячейки текстовые
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        let path = file_path;

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // заголовок распознаётся выше по конвейеру
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let cells: Vec<RawCell> = record
                .iter()
                .map(|value| {
                    if value.trim().is_empty() {
                        RawCell::Empty
                    } else {
                        RawCell::Text(value.to_string())
                    }
                })
                .collect();

            if cells.iter().all(RawCell::is_empty) {
                continue;
            }

            rows.push((idx + 1, cells));
        }

        if rows.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        Ok(rows)
    }
}

// ==========================================
// UniversalFileParser - выбор по расширению
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRow>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_rows(path),
            "xlsx" | "xls" => ExcelParser.parse_rows(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_csv_parser_basic() {
        let file = write_csv(&["Водка,10.5,л", "Лимон,25,шт"]);

        let rows = CsvParser.parse_rows(file.path()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 1);
        assert_eq!(rows[0].1[0], RawCell::Text("Водка".to_string()));
        // CSV всегда даёт текстовые ячейки, даже для чисел
        assert_eq!(rows[0].1[1], RawCell::Text("10.5".to_string()));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_rows(Path::new("нет_такого_файла.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_empty_file() {
        let file = write_csv(&[]);
        let result = CsvParser.parse_rows(file.path());
        assert!(matches!(result, Err(ImportError::EmptyFile)));
    }

    #[test]
    fn test_csv_parser_skips_blank_rows() {
        let file = write_csv(&["Водка,10.5,л", ",,", "Сироп,5.2,л"]);

        let rows = CsvParser.parse_rows(file.path()).unwrap();

        assert_eq!(rows.len(), 2);
        // номер строки сохраняется за исходной позицией в файле
        assert_eq!(rows[1].0, 3);
    }

    #[test]
    fn test_universal_parser_unsupported_extension() {
        let result = UniversalFileParser.parse("inventory.pdf");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_excel_parser_missing_file() {
        let result = ExcelParser.parse_rows(Path::new("нет_такой_книги.xlsx"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }
}
