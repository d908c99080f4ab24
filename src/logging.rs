// ==========================================
// Инициализация журналирования
// ==========================================
// Используются tracing и tracing-subscriber,
// уровень настраивается переменной окружения
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Инициализирует журналирование
///
/// # Переменные окружения
/// - RUST_LOG: фильтр уровней (по умолчанию: info)
///   например: RUST_LOG=debug или RUST_LOG=bar_inventory=trace
///
/// # Пример
/// ```no_run
/// use bar_inventory::logging;
/// logging::init();
/// ```
pub fn init() {
    // уровень из окружения, по умолчанию info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Инициализация журналирования в тестах
///
/// Более подробный уровень и вывод в тестовый writer
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
