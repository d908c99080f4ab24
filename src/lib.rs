// ==========================================
// Система учёта инвентаря бара - Ядро
// ==========================================
// Технологии: Rust + SQLite
// Назначение: склад ингредиентов, заказы на пополнение,
// пользователи с ролями, импорт из Excel/CSV
// ==========================================

// Инициализация локализации
rust_i18n::i18n!("locales", fallback = "ru");

// ==========================================
// Объявления модулей
// ==========================================

// Доменный слой - сущности и типы
pub mod domain;

// Слой хранения - доступ к данным
pub mod repository;

// Слой импорта - внешние файлы
pub mod importer;

// Слой экспорта - выгрузка отчётов
pub mod exporter;

// API-слой - бизнес-операции
pub mod api;

// Инфраструктура базы данных (подключение/PRAGMA/схема)
pub mod db;

// Журналирование
pub mod logging;

// Локализация
pub mod i18n;

// Сеанс пользователя
pub mod session;

// ==========================================
// Реэкспорт основных типов
// ==========================================

// Доменные сущности
pub use domain::{
    ImportOutcome, ImportReport, ImportRow, Ingredient, IngredientCandidate, IngredientUpdate,
    Order, OrderDetails, ReconcileResult, Role, RowOutcome, User,
};

// Импорт
pub use importer::{ImportError, IngredientImporter, Reconciler, RowError};

// API
pub use api::{ApiError, AuthApi, IngredientApi, OrderApi, UserApi};

// Сеанс
pub use session::Session;

// ==========================================
// Константы
// ==========================================

/// Версия системы
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Название системы
pub const APP_NAME: &str = "Система учёта инвентаря бара";
