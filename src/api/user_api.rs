// ==========================================
// Система учёта инвентаря бара - API пользователей
// ==========================================
// Ответственность: управление учётными записями,
// доступно только администратору
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::user::{Role, User};
use crate::repository::UserRepository;
use tracing::info;

pub struct UserApi {
    user_repo: UserRepository,
}

impl UserApi {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    fn require_admin(&self, user: &User, operation: &str) -> ApiResult<()> {
        if !user.role.can_manage_users() {
            return Err(ApiError::AccessDenied {
                role: user.role.name().to_string(),
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    /// Все пользователи с ролями
    pub async fn list(&self, user: &User) -> ApiResult<Vec<User>> {
        self.require_admin(user, "просмотр пользователей")?;
        Ok(self.user_repo.list()?)
    }

    /// Создаёт пользователя
    ///
    /// Внимание: пароль сохраняется открытым текстом
    pub async fn create(
        &self,
        user: &User,
        login: &str,
        password: &str,
        role: Role,
    ) -> ApiResult<i64> {
        self.require_admin(user, "создание пользователя")?;

        if login.trim().is_empty() || password.is_empty() {
            return Err(ApiError::InvalidInput(
                "заполните логин и пароль".to_string(),
            ));
        }

        if self.user_repo.find_by_login(login)?.is_some() {
            return Err(ApiError::LoginTaken(login.to_string()));
        }

        let id = self.user_repo.create(login, password, role)?;
        info!(id = id, login = %login, role = role.name(), "пользователь создан");
        Ok(id)
    }

    /// Меняет роль пользователя
    pub async fn update_role(&self, user: &User, user_id: i64, new_role: Role) -> ApiResult<()> {
        self.require_admin(user, "изменение роли")?;

        if !self.user_repo.update_role(user_id, new_role)? {
            return Err(ApiError::NotFound(format!("пользователь с id={}", user_id)));
        }

        info!(user_id = user_id, role = new_role.name(), "роль обновлена");
        Ok(())
    }
}
