// ==========================================
// Система учёта инвентаря бара - API аутентификации
// ==========================================
// Внимание: пароль сравнивается открытым текстом
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::user::User;
use crate::repository::UserRepository;
use tracing::{info, warn};

pub struct AuthApi {
    user_repo: UserRepository,
}

impl AuthApi {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// Аутентифицирует пользователя по логину и паролю
    ///
    /// # Возврат
    /// - Ok(User): найден пользователь с совпавшим паролем
    /// - Err(InvalidCredentials): логин не найден или пароль не совпал
    pub async fn authenticate(&self, login: &str, password: &str) -> ApiResult<User> {
        if login.trim().is_empty() || password.is_empty() {
            return Err(ApiError::InvalidInput(
                "введите логин и пароль".to_string(),
            ));
        }

        let user = self.user_repo.find_by_login(login)?;

        match user {
            Some(user) if user.password == password => {
                info!(login = %user.login, role = user.role.name(), "вход выполнен");
                Ok(user)
            }
            _ => {
                warn!(login = %login, "неудачная попытка входа");
                Err(ApiError::InvalidCredentials)
            }
        }
    }
}
