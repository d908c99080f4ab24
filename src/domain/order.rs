// ==========================================
// Система учёта инвентаря бара - Модель заказа
// ==========================================
// Назначение: заказ на пополнение запаса ингредиента
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Order - заказ на пополнение (персистентная сущность)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Идентификатор заказа
    pub id: i64,

    /// Идентификатор заказанного ингредиента
    pub ingredient_id: i64,

    /// Заказанное количество
    pub quantity: f64,

    /// Дата и время создания заказа
    pub order_date: DateTime<Utc>,

    /// Идентификатор пользователя, создавшего заказ
    pub created_by: i64,
}

// ==========================================
// OrderDetails - заказ со связанными данными
// ==========================================
// Результат соединения orders + ingredients + users,
// используется для отображения и экспорта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
    pub order: Order,

    /// Название заказанного ингредиента
    pub ingredient_name: String,

    /// Единица измерения ингредиента
    pub ingredient_unit: String,

    /// Логин автора заказа
    pub created_by_login: String,
}
