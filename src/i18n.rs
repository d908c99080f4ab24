// ==========================================
// Локализация (i18n)
// ==========================================
// Используется rust-i18n
// Поддерживаются русский (по умолчанию) и английский
// Макрос rust_i18n::i18n! инициализируется в lib.rs
// ==========================================

/// Текущий язык интерфейса
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Устанавливает язык интерфейса
///
/// # Параметры
/// - locale: код языка ("ru" или "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Переводит сообщение без параметров
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Переводит сообщение с подстановкой параметров
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
