// ==========================================
// Система учёта инвентаря бара - Пользователи и роли
// ==========================================
// Назначение: учётные записи и права доступа
// Роли: Barmen (просмотр), Manager (заказы и экспорт),
//       Admin (полный доступ)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Role - роль пользователя
// ==========================================
// Идентификаторы совпадают со строками таблицы roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Бармен: только просмотр остатков
    Barmen,
    /// Менеджер: остатки, заказы, экспорт
    Manager,
    /// Администратор: полный доступ
    Admin,
}

impl Role {
    /// Преобразует идентификатор роли из таблицы roles
    pub fn from_id(id: i64) -> Option<Role> {
        match id {
            1 => Some(Role::Barmen),
            2 => Some(Role::Manager),
            3 => Some(Role::Admin),
            _ => None,
        }
    }

    /// Идентификатор роли в таблице roles
    pub fn id(&self) -> i64 {
        match self {
            Role::Barmen => 1,
            Role::Manager => 2,
            Role::Admin => 3,
        }
    }

    /// Название роли в базе данных
    pub fn name(&self) -> &'static str {
        match self {
            Role::Barmen => "Barmen",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
        }
    }

    /// Право управлять заказами и экспортировать их
    pub fn can_manage_orders(&self) -> bool {
        matches!(self, Role::Manager | Role::Admin)
    }

    /// Право изменять ингредиенты и запускать импорт
    pub fn can_manage_ingredients(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Право управлять пользователями
    pub fn can_manage_users(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

// ==========================================
// User - учётная запись
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Идентификатор пользователя
    pub id: i64,

    /// Логин для входа
    pub login: String,

    /// Пароль. Внимание: хранится открытым текстом,
    /// хеширование не применяется
    pub password: String,

    /// Роль пользователя
    pub role: Role,
}
