// ==========================================
// Система учёта инвентаря бара - Инициализация SQLite
// ==========================================
// Цели:
// - единые PRAGMA для всех подключений (внешние ключи,
//   busy_timeout), чтобы не было "частично включённых" ключей
// - встроенная инициализация схемы с посевом ролей
// ==========================================

use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

/// Busy_timeout по умолчанию (мс)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Единая настройка PRAGMA для подключения
///
/// foreign_keys и busy_timeout включаются на каждом
/// подключении отдельно
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Открывает подключение и применяет единые настройки
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Путь к базе данных по умолчанию
///
/// Каталог данных пользователя либо текущий каталог,
/// если системный каталог недоступен
pub fn get_default_db_path() -> String {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("bar-inventory");
    if let Err(e) = std::fs::create_dir_all(&path) {
        tracing::warn!("не удалось создать каталог данных: {}", e);
        return "bar_inventory.db".to_string();
    }
    path.push("bar_inventory.db");
    path.to_string_lossy().to_string()
}

/// Создаёт схему базы и сеет справочник ролей (идемпотентно)
///
/// Уникальность названий ингредиентов - деловое соглашение,
/// ограничение UNIQUE на ingredients.name не накладывается
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS roles (
            id   INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS users (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            login    TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            role_id  INTEGER NOT NULL REFERENCES roles(id)
        );

        CREATE TABLE IF NOT EXISTS ingredients (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            name     TEXT NOT NULL,
            quantity REAL NOT NULL,
            unit     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS orders (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            ingredient_id INTEGER NOT NULL REFERENCES ingredients(id),
            quantity      REAL NOT NULL,
            order_date    TEXT NOT NULL,
            created_by    INTEGER NOT NULL REFERENCES users(id)
        );

        INSERT OR IGNORE INTO roles (id, name) VALUES
            (1, 'Barmen'),
            (2, 'Manager'),
            (3, 'Admin');
        "#,
    )?;
    Ok(())
}
