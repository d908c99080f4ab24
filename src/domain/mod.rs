// ==========================================
// Система учёта инвентаря бара - Доменный слой
// ==========================================
// Назначение: сущности и типы предметной области
// ==========================================

pub mod import;
pub mod ingredient;
pub mod order;
pub mod user;

pub use import::{ImportOutcome, ImportReport, ImportRow, ReconcileResult, RowOutcome};
pub use ingredient::{Ingredient, IngredientCandidate, IngredientUpdate};
pub use order::{Order, OrderDetails};
pub use user::{Role, User};
