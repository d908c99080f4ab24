// ==========================================
// Система учёта инвентаря бара - Хранилище пользователей
// ==========================================
// Ответственность: доступ к таблицам users и roles
// Внимание: пароли хранятся открытым текстом
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::user::{Role, User};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

pub struct UserRepository {
    conn: Arc<Mutex<Connection>>,
}

impl UserRepository {
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

    fn map_user(row: &Row<'_>) -> rusqlite::Result<User> {
        let role_id: i64 = row.get(3)?;
        Ok(User {
            id: row.get(0)?,
            login: row.get(1)?,
            password: row.get(2)?,
            // неизвестная роль в базе трактуется как бармен
            // (наименее привилегированная)
            role: Role::from_id(role_id).unwrap_or(Role::Barmen),
        })
    }

    /// Все пользователи с ролями
    pub fn list(&self) -> RepositoryResult<Vec<User>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT id, login, password, role_id FROM users ORDER BY id")?;

        let rows = stmt.query_map([], Self::map_user)?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row?);
        }
        Ok(users)
    }

    /// Пользователь по логину
    pub fn find_by_login(&self, login: &str) -> RepositoryResult<Option<User>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            "SELECT id, login, password, role_id FROM users WHERE login = ?1",
            params![login],
            Self::map_user,
        );

        match result {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Создаёт пользователя и возвращает его идентификатор
    pub fn create(&self, login: &str, password: &str, role: Role) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO users (login, password, role_id) VALUES (?1, ?2, ?3)",
            params![login, password, role.id()],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Меняет роль пользователя; false - записи не было
    pub fn update_role(&self, user_id: i64, new_role: Role) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE users SET role_id = ?1 WHERE id = ?2",
            params![new_role.id(), user_id],
        )?;
        Ok(changed > 0)
    }
}
