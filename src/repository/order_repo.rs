// ==========================================
// Система учёта инвентаря бара - Хранилище заказов
// ==========================================
// Ответственность: CRUD по таблице orders и выборка
// заказов со связанными данными (ингредиент, автор)
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::order::{Order, OrderDetails};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

pub struct OrderRepository {
    conn: Arc<Mutex<Connection>>,
}

impl OrderRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn map_order(row: &Row<'_>) -> rusqlite::Result<Order> {
        Ok(Order {
            id: row.get(0)?,
            ingredient_id: row.get(1)?,
            quantity: row.get(2)?,
            order_date: parse_datetime(row.get::<_, String>(3)?),
            created_by: row.get(4)?,
        })
    }

    /// Все заказы со связанными данными, новые первыми
    pub fn list_with_details(&self) -> RepositoryResult<Vec<OrderDetails>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                o.id, o.ingredient_id, o.quantity, o.order_date, o.created_by,
                i.name, i.unit, u.login
            FROM orders o
            JOIN ingredients i ON i.id = o.ingredient_id
            JOIN users u ON u.id = o.created_by
            ORDER BY o.order_date DESC, o.id DESC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(OrderDetails {
                order: Self::map_order(row)?,
                ingredient_name: row.get(5)?,
                ingredient_unit: row.get(6)?,
                created_by_login: row.get(7)?,
            })
        })?;

        let mut orders = Vec::new();
        for row in rows {
            orders.push(row?);
        }
        Ok(orders)
    }

    /// Заказ по идентификатору
    pub fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Order>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            "SELECT id, ingredient_id, quantity, order_date, created_by
             FROM orders WHERE id = ?1",
            params![id],
            Self::map_order,
        );

        match result {
            Ok(order) => Ok(Some(order)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Создаёт заказ и возвращает его идентификатор
    pub fn create(
        &self,
        ingredient_id: i64,
        quantity: f64,
        order_date: DateTime<Utc>,
        created_by: i64,
    ) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO orders (ingredient_id, quantity, order_date, created_by)
             VALUES (?1, ?2, ?3, ?4)",
            params![ingredient_id, quantity, order_date.to_rfc3339(), created_by],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Обновляет ингредиент и количество заказа
    pub fn update(&self, id: i64, ingredient_id: i64, quantity: f64) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE orders SET ingredient_id = ?1, quantity = ?2 WHERE id = ?3",
            params![ingredient_id, quantity, id],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Order".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Удаляет заказ; false - записи не было
    pub fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let deleted = conn.execute("DELETE FROM orders WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

/// Разбирает дату RFC3339; нечитаемая дата не валит выборку
fn parse_datetime(raw: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
