// ==========================================
// Система учёта инвентаря бара - API заказов
// ==========================================
// Ответственность: заказы на пополнение с проверкой роли
// (менеджер и администратор) и экспорт в файл
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::order::{Order, OrderDetails};
use crate::domain::user::User;
use crate::exporter::OrderExporter;
use crate::repository::{IngredientRepository, OrderRepository};
use chrono::Utc;
use std::path::Path;
use tracing::info;

pub struct OrderApi {
    order_repo: OrderRepository,
    ingredient_repo: IngredientRepository,
}

impl OrderApi {
    pub fn new(order_repo: OrderRepository, ingredient_repo: IngredientRepository) -> Self {
        Self {
            order_repo,
            ingredient_repo,
        }
    }

    fn require_manage(&self, user: &User, operation: &str) -> ApiResult<()> {
        if !user.role.can_manage_orders() {
            return Err(ApiError::AccessDenied {
                role: user.role.name().to_string(),
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    /// Заказы со связанными данными (менеджер и администратор)
    pub async fn list_with_details(&self, user: &User) -> ApiResult<Vec<OrderDetails>> {
        self.require_manage(user, "просмотр заказов")?;
        Ok(self.order_repo.list_with_details()?)
    }

    /// Создаёт заказ от имени пользователя
    pub async fn create(&self, user: &User, ingredient_id: i64, quantity: f64) -> ApiResult<Order> {
        self.require_manage(user, "создание заказа")?;

        if quantity <= 0.0 {
            return Err(ApiError::InvalidInput(
                "количество заказа должно быть положительным".to_string(),
            ));
        }

        // заказ всегда ссылается на существующий ингредиент
        if self.ingredient_repo.find_by_id(ingredient_id)?.is_none() {
            return Err(ApiError::NotFound(format!(
                "ингредиент с id={}",
                ingredient_id
            )));
        }

        let order_date = Utc::now();
        let id = self
            .order_repo
            .create(ingredient_id, quantity, order_date, user.id)?;

        info!(id = id, ingredient_id = ingredient_id, login = %user.login, "заказ создан");

        Ok(Order {
            id,
            ingredient_id,
            quantity,
            order_date,
            created_by: user.id,
        })
    }

    /// Редактирует заказ
    pub async fn update(
        &self,
        user: &User,
        id: i64,
        ingredient_id: i64,
        quantity: f64,
    ) -> ApiResult<()> {
        self.require_manage(user, "изменение заказа")?;

        if quantity <= 0.0 {
            return Err(ApiError::InvalidInput(
                "количество заказа должно быть положительным".to_string(),
            ));
        }
        if self.ingredient_repo.find_by_id(ingredient_id)?.is_none() {
            return Err(ApiError::NotFound(format!(
                "ингредиент с id={}",
                ingredient_id
            )));
        }

        self.order_repo.update(id, ingredient_id, quantity)?;
        info!(id = id, "заказ обновлён");
        Ok(())
    }

    /// Удаляет заказ; false - записи не было
    pub async fn delete(&self, user: &User, id: i64) -> ApiResult<bool> {
        self.require_manage(user, "удаление заказа")?;
        let deleted = self.order_repo.delete(id)?;
        if deleted {
            info!(id = id, "заказ удалён");
        }
        Ok(deleted)
    }

    /// Выгружает все заказы в CSV-файл
    pub async fn export<P: AsRef<Path>>(&self, user: &User, out_path: P) -> ApiResult<usize> {
        self.require_manage(user, "экспорт заказов")?;

        let orders = self.order_repo.list_with_details()?;
        let count = OrderExporter::export_orders(&orders, out_path)?;
        Ok(count)
    }
}
