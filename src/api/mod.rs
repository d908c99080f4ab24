// ==========================================
// Система учёта инвентаря бара - API-слой
// ==========================================
// Ответственность: бизнес-операции с проверкой роли,
// преобразование ошибок нижних слоёв
// ==========================================

pub mod auth_api;
pub mod error;
pub mod ingredient_api;
pub mod order_api;
pub mod user_api;

pub use auth_api::AuthApi;
pub use error::{ApiError, ApiResult};
pub use ingredient_api::IngredientApi;
pub use order_api::OrderApi;
pub use user_api::UserApi;
