// ==========================================
// Система учёта инвентаря бара - Слой хранения
// ==========================================
// Ответственность: доступ к данным SQLite
// Красная линия: без бизнес-логики
// ==========================================

pub mod error;
pub mod ingredient_repo;
pub mod order_repo;
pub mod user_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use ingredient_repo::IngredientRepository;
pub use order_repo::OrderRepository;
pub use user_repo::UserRepository;
