// ==========================================
// Система учёта инвентаря бара - Модель ингредиента
// ==========================================
// Назначение: ингредиент на складе и промежуточные
// структуры импорта
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Ingredient - ингредиент (персистентная сущность)
// ==========================================
// Уникальность названия - деловое соглашение,
// на уровне схемы ограничение не накладывается
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Идентификатор записи
    pub id: i64,

    /// Название ингредиента
    pub name: String,

    /// Количество в наличии
    pub quantity: f64,

    /// Единица измерения (л, г, шт и т.д.)
    pub unit: String,
}

// ==========================================
// IngredientCandidate - кандидат из файла импорта
// ==========================================
// Живёт только внутри одного прогона импорта:
// после сверки либо становится новым Ingredient,
// либо обновляет существующий
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCandidate {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl IngredientCandidate {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

// ==========================================
// IngredientUpdate - решение об обновлении
// ==========================================
// Итог сверки для совпавшего по названию ингредиента:
// идентификатор сохраняется, количество и единица
// заменяются значениями кандидата
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUpdate {
    /// Идентификатор существующей записи
    pub id: i64,

    /// Название существующей записи (для отчёта)
    pub name: String,

    /// Новое количество
    pub quantity: f64,

    /// Новая единица измерения
    pub unit: String,
}
