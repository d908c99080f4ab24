// ==========================================
// Система учёта инвентаря бара - Сеанс пользователя
// ==========================================
// Назначение: текущий авторизованный пользователь,
// к которому обращаются проверки доступа
// ==========================================

use crate::domain::user::{Role, User};

/// Сеанс текущего пользователя
#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Запоминает авторизованного пользователя
    pub fn login(&mut self, user: User) {
        tracing::info!(login = %user.login, "сеанс открыт");
        self.current_user = Some(user);
    }

    /// Завершает сеанс
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(login = %user.login, "сеанс закрыт");
        }
    }

    /// Текущий пользователь, если авторизация выполнена
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Совпадает ли роль текущего пользователя
    pub fn is_in_role(&self, role: Role) -> bool {
        self.current_user
            .as_ref()
            .map(|u| u.role == role)
            .unwrap_or(false)
    }
}
