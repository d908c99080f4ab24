// ==========================================
// Система учёта инвентаря бара - Сверка импорта
// ==========================================
// Ответственность: сопоставить кандидатов из файла с
// существующим складом и выдать решения добавить/обновить
// Правила:
// - совпадение по названию, без учёта регистра, без
//   нормализации пробелов и диакритики
// - при повторе названия в одном файле побеждает
//   последняя строка (кандидаты идут в порядке файла)
// - "существующее" множество логически растёт по мере
//   принятых в пакете добавлений, чтобы один файл не
//   породил дубликаты вставок
// ==========================================

use crate::domain::import::ReconcileResult;
use crate::domain::ingredient::{Ingredient, IngredientCandidate, IngredientUpdate};
use std::collections::HashMap;
use tracing::debug;

/// Позиция совпадения в накопленных решениях
enum Target {
    /// Индекс в списке обновлений
    Updated(usize),
    /// Индекс в списке добавлений текущего пакета
    Added(usize),
}

// ==========================================
// Reconciler
// ==========================================
// Чистый шаг: возвращает решения, записью в базу
// занимается вызывающая сторона
pub struct Reconciler;

impl Reconciler {
    /// Сверяет кандидатов с существующими ингредиентами
    pub fn reconcile(
        candidates: Vec<IngredientCandidate>,
        existing: &[Ingredient],
    ) -> ReconcileResult {
        // индекс существующего склада: название без регистра -> id
        // при дубликатах названий в базе совпадает первая запись
        let mut existing_index: HashMap<String, &Ingredient> = HashMap::new();
        for ing in existing {
            existing_index.entry(ing.name.to_lowercase()).or_insert(ing);
        }

        let mut result = ReconcileResult::default();
        // название без регистра -> уже принятое решение пакета
        let mut decided: HashMap<String, Target> = HashMap::new();

        for candidate in candidates {
            let key = candidate.name.to_lowercase();

            match decided.get(&key) {
                // повтор названия в пакете: последняя строка побеждает
                Some(Target::Updated(idx)) => {
                    let update = &mut result.updated[*idx];
                    update.quantity = candidate.quantity;
                    update.unit = candidate.unit;
                }
                Some(Target::Added(idx)) => {
                    result.added[*idx] = candidate;
                }
                None => {
                    if let Some(ing) = existing_index.get(&key) {
                        debug!(name = %candidate.name, id = ing.id, "сверка: обновление");
                        result.updated.push(IngredientUpdate {
                            id: ing.id,
                            name: ing.name.clone(),
                            quantity: candidate.quantity,
                            unit: candidate.unit,
                        });
                        decided.insert(key, Target::Updated(result.updated.len() - 1));
                    } else {
                        debug!(name = %candidate.name, "сверка: добавление");
                        result.added.push(candidate);
                        decided.insert(key, Target::Added(result.added.len() - 1));
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: i64, name: &str, quantity: f64, unit: &str) -> Ingredient {
        Ingredient {
            id,
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let existing = vec![ingredient(1, "водка", 10.0, "л")];
        let candidates = vec![IngredientCandidate::new("Водка", 12.0, "л")];

        let result = Reconciler::reconcile(candidates, &existing);

        assert_eq!(result.added_count(), 0);
        assert_eq!(result.updated_count(), 1);
        assert_eq!(result.updated[0].id, 1);
        assert_eq!(result.updated[0].quantity, 12.0);
    }

    #[test]
    fn test_no_match_is_addition() {
        let existing = vec![ingredient(1, "Лимон", 10.0, "шт")];
        let candidates = vec![IngredientCandidate::new("Сироп", 5.2, "л")];

        let result = Reconciler::reconcile(candidates, &existing);

        assert_eq!(result.added_count(), 1);
        assert_eq!(result.updated_count(), 0);
        assert_eq!(result.added[0].name, "Сироп");
    }

    #[test]
    fn test_last_writer_wins_on_update() {
        let existing = vec![ingredient(1, "Водка", 10.0, "л")];
        let candidates = vec![
            IngredientCandidate::new("Водка", 11.0, "л"),
            IngredientCandidate::new("водка", 15.0, "л"),
        ];

        let result = Reconciler::reconcile(candidates, &existing);

        // одно решение об обновлении со значениями последней строки
        assert_eq!(result.updated_count(), 1);
        assert_eq!(result.updated[0].quantity, 15.0);
    }

    #[test]
    fn test_batch_additions_do_not_duplicate() {
        // второй кандидат с тем же новым названием попадает
        // в уже принятое добавление, а не в новую вставку
        let candidates = vec![
            IngredientCandidate::new("Тоник", 3.0, "л"),
            IngredientCandidate::new("ТОНИК", 7.0, "л"),
        ];

        let result = Reconciler::reconcile(candidates, &[]);

        assert_eq!(result.added_count(), 1);
        assert_eq!(result.added[0].quantity, 7.0);
        assert_eq!(result.updated_count(), 0);
    }

    #[test]
    fn test_duplicate_store_names_match_first_row() {
        // уникальность названий на схеме не закреплена:
        // при дубликатах в базе обновляется первая запись
        let existing = vec![
            ingredient(1, "Водка", 10.0, "л"),
            ingredient(2, "водка", 4.0, "л"),
        ];
        let candidates = vec![IngredientCandidate::new("ВОДКА", 20.0, "л")];

        let result = Reconciler::reconcile(candidates, &existing);

        assert_eq!(result.updated_count(), 1);
        assert_eq!(result.updated[0].id, 1);
        assert_eq!(result.added_count(), 0);
    }

    #[test]
    fn test_exact_matching_without_normalization() {
        // пробелы внутри названия не нормализуются:
        // "Лимон " и "Лимон" - разные названия
        let existing = vec![ingredient(1, "Лимон", 10.0, "шт")];
        let candidates = vec![IngredientCandidate::new("Лимон ", 25.0, "шт")];

        let result = Reconciler::reconcile(candidates, &existing);

        assert_eq!(result.added_count(), 1);
        assert_eq!(result.updated_count(), 0);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let existing = vec![
            ingredient(1, "Лимон", 10.0, "шт"),
            ingredient(2, "Водка", 8.0, "л"),
        ];
        let candidates = vec![
            IngredientCandidate::new("лимон", 25.0, "шт"),
            IngredientCandidate::new("Сироп", 5.2, "л"),
        ];

        let first = Reconciler::reconcile(candidates.clone(), &existing);
        let second = Reconciler::reconcile(candidates, &existing);

        assert_eq!(first.added, second.added);
        assert_eq!(first.updated, second.updated);
    }
}
