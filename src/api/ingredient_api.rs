// ==========================================
// Система учёта инвентаря бара - API ингредиентов
// ==========================================
// Ответственность: операции над складом с проверкой роли
// и применение решений импорта к базе
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::import::ImportOutcome;
use crate::domain::ingredient::{Ingredient, IngredientCandidate};
use crate::domain::user::User;
use crate::importer::{IngredientImporter, Reconciler};
use crate::repository::IngredientRepository;
use std::path::Path;
use tracing::{info, instrument};

pub struct IngredientApi {
    repo: IngredientRepository,
    importer: IngredientImporter,
}

impl IngredientApi {
    pub fn new(repo: IngredientRepository) -> Self {
        Self {
            repo,
            importer: IngredientImporter::new(),
        }
    }

    fn require_manage(&self, user: &User, operation: &str) -> ApiResult<()> {
        if !user.role.can_manage_ingredients() {
            return Err(ApiError::AccessDenied {
                role: user.role.name().to_string(),
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    /// Остатки склада: доступно всем ролям
    pub async fn list(&self, _user: &User) -> ApiResult<Vec<Ingredient>> {
        Ok(self.repo.list()?)
    }

    /// Добавляет ингредиент вручную (только администратор)
    pub async fn create(
        &self,
        user: &User,
        candidate: IngredientCandidate,
    ) -> ApiResult<Ingredient> {
        self.require_manage(user, "создание ингредиента")?;
        validate_candidate(&candidate)?;

        let created = self.repo.create(&candidate)?;
        info!(id = created.id, name = %created.name, "ингредиент добавлен");
        Ok(created)
    }

    /// Редактирует ингредиент (только администратор)
    pub async fn update(&self, user: &User, ingredient: Ingredient) -> ApiResult<()> {
        self.require_manage(user, "изменение ингредиента")?;
        validate_candidate(&IngredientCandidate {
            name: ingredient.name.clone(),
            quantity: ingredient.quantity,
            unit: ingredient.unit.clone(),
        })?;

        self.repo.update(&ingredient)?;
        info!(id = ingredient.id, "ингредиент обновлён");
        Ok(())
    }

    /// Удаляет ингредиент (только администратор)
    pub async fn delete(&self, user: &User, id: i64) -> ApiResult<bool> {
        self.require_manage(user, "удаление ингредиента")?;
        let deleted = self.repo.delete(id)?;
        if deleted {
            info!(id = id, "ингредиент удалён");
        }
        Ok(deleted)
    }

    /// Импортирует ингредиенты из файла (только администратор)
    ///
    /// Поток: разбор файла -> сверка со складом ->
    /// применение решений (Create/Update) -> итог для оператора
    #[instrument(skip(self, user, file_path))]
    pub async fn import_from_file<P: AsRef<Path>>(
        &self,
        user: &User,
        file_path: P,
    ) -> ApiResult<ImportOutcome> {
        self.require_manage(user, "импорт ингредиентов")?;

        let (candidates, report) = self.importer.parse(file_path)?;

        let existing = self.repo.list()?;
        let decisions = Reconciler::reconcile(candidates, &existing);

        for update in &decisions.updated {
            self.repo
                .update_quantity_unit(update.id, update.quantity, &update.unit)?;
        }
        for candidate in &decisions.added {
            self.repo.create(candidate)?;
        }

        let outcome = ImportOutcome {
            added: decisions.added_count(),
            updated: decisions.updated_count(),
            report,
        };

        info!(
            processed = outcome.report.processed,
            skipped = outcome.report.skipped,
            added = outcome.added,
            updated = outcome.updated,
            "импорт ингредиентов завершён"
        );

        Ok(outcome)
    }
}

/// Общая проверка полей ингредиента
fn validate_candidate(candidate: &IngredientCandidate) -> ApiResult<()> {
    if candidate.name.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "название ингредиента не может быть пустым".to_string(),
        ));
    }
    if candidate.unit.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "единица измерения не может быть пустой".to_string(),
        ));
    }
    if candidate.quantity < 0.0 {
        return Err(ApiError::InvalidInput(
            "количество не может быть отрицательным".to_string(),
        ));
    }
    Ok(())
}
