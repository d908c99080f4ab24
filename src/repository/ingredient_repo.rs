// ==========================================
// Система учёта инвентаря бара - Хранилище ингредиентов
// ==========================================
// Ответственность: CRUD по таблице ingredients
// Красная линия: без бизнес-логики, только доступ к данным
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::ingredient::{Ingredient, IngredientCandidate};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

pub struct IngredientRepository {
    conn: Arc<Mutex<Connection>>,
}

impl IngredientRepository {
    /// Создаёт хранилище поверх файла базы данных
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Создаёт хранилище поверх уже открытого подключения
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Все ингредиенты в порядке идентификаторов
    pub fn list(&self) -> RepositoryResult<Vec<Ingredient>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, quantity, unit FROM ingredients ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Ingredient {
                id: row.get(0)?,
                name: row.get(1)?,
                quantity: row.get(2)?,
                unit: row.get(3)?,
            })
        })?;

        let mut ingredients = Vec::new();
        for row in rows {
            ingredients.push(row?);
        }
        Ok(ingredients)
    }

    /// Ингредиент по идентификатору
    pub fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Ingredient>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            "SELECT id, name, quantity, unit FROM ingredients WHERE id = ?1",
            params![id],
            |row| {
                Ok(Ingredient {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    quantity: row.get(2)?,
                    unit: row.get(3)?,
                })
            },
        );

        match result {
            Ok(ingredient) => Ok(Some(ingredient)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Добавляет ингредиент и возвращает запись с идентификатором
    pub fn create(&self, candidate: &IngredientCandidate) -> RepositoryResult<Ingredient> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO ingredients (name, quantity, unit) VALUES (?1, ?2, ?3)",
            params![candidate.name, candidate.quantity, candidate.unit],
        )?;

        Ok(Ingredient {
            id: conn.last_insert_rowid(),
            name: candidate.name.clone(),
            quantity: candidate.quantity,
            unit: candidate.unit.clone(),
        })
    }

    /// Обновляет количество и единицу измерения по идентификатору
    pub fn update_quantity_unit(
        &self,
        id: i64,
        quantity: f64,
        unit: &str,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE ingredients SET quantity = ?1, unit = ?2 WHERE id = ?3",
            params![quantity, unit, id],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Ingredient".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Обновляет все поля ингредиента
    pub fn update(&self, ingredient: &Ingredient) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE ingredients SET name = ?1, quantity = ?2, unit = ?3 WHERE id = ?4",
            params![
                ingredient.name,
                ingredient.quantity,
                ingredient.unit,
                ingredient.id
            ],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Ingredient".to_string(),
                id: ingredient.id.to_string(),
            });
        }
        Ok(())
    }

    /// Удаляет ингредиент; false - записи не было
    pub fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let deleted = conn.execute("DELETE FROM ingredients WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}
