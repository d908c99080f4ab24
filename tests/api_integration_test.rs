// ==========================================
// Интеграционные тесты API-слоя
// ==========================================
// Цель: аутентификация, разграничение ролей,
// CRUD заказов и пользователей, экспорт
// ==========================================


use bar_inventory::api::{ApiError, AuthApi, IngredientApi, OrderApi, UserApi};
use bar_inventory::domain::{IngredientCandidate, Role, User};
use bar_inventory::logging;
use bar_inventory::repository::{IngredientRepository, OrderRepository, UserRepository};
use test_helpers::{create_test_db, seed_ingredient, seed_users};

fn user_by_login(db_path: &str, login: &str) -> User {
    UserRepository::new(db_path)
        .unwrap()
        .find_by_login(login)
        .unwrap()
        .expect("пользователь посеян")
}

fn order_api(db_path: &str) -> OrderApi {
    OrderApi::new(
        OrderRepository::new(db_path).unwrap(),
        IngredientRepository::new(db_path).unwrap(),
    )
}

// ==========================================
// Аутентификация
// ==========================================

#[tokio::test]
async fn test_authenticate_success_and_failure() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();

    let auth = AuthApi::new(UserRepository::new(&db_path).unwrap());

    let user = auth.authenticate("admin", "admin").await.unwrap();
    assert_eq!(user.role, Role::Admin);

    // неверный пароль и несуществующий логин неразличимы
    assert!(matches!(
        auth.authenticate("admin", "не тот пароль").await,
        Err(ApiError::InvalidCredentials)
    ));
    assert!(matches!(
        auth.authenticate("нет такого", "пароль").await,
        Err(ApiError::InvalidCredentials)
    ));

    // пустой ввод отклоняется до обращения к базе
    assert!(matches!(
        auth.authenticate("", "").await,
        Err(ApiError::InvalidInput(_))
    ));
}

// ==========================================
// Ингредиенты: CRUD и разграничение ролей
// ==========================================

#[tokio::test]
async fn test_ingredient_crud_as_admin() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();
    let admin = user_by_login(&db_path, "admin");

    let api = IngredientApi::new(IngredientRepository::new(&db_path).unwrap());

    let created = api
        .create(&admin, IngredientCandidate::new("Водка", 10.0, "л"))
        .await
        .unwrap();
    assert!(created.id > 0);

    let mut updated = created.clone();
    updated.quantity = 8.5;
    api.update(&admin, updated).await.unwrap();

    let all = api.list(&admin).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].quantity, 8.5);

    assert!(api.delete(&admin, created.id).await.unwrap());
    assert!(!api.delete(&admin, created.id).await.unwrap());
}

#[tokio::test]
async fn test_ingredient_list_allowed_for_all_roles() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();
    seed_ingredient(&db_path, "Лимон", 10.0, "шт").unwrap();

    let api = IngredientApi::new(IngredientRepository::new(&db_path).unwrap());

    for login in ["barmen", "manager", "admin"] {
        let user = user_by_login(&db_path, login);
        let all = api.list(&user).await.unwrap();
        assert_eq!(all.len(), 1, "роль {} видит остатки", login);
    }
}

#[tokio::test]
async fn test_ingredient_edit_denied_for_manager() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();
    let manager = user_by_login(&db_path, "manager");

    let api = IngredientApi::new(IngredientRepository::new(&db_path).unwrap());
    let result = api
        .create(&manager, IngredientCandidate::new("Водка", 10.0, "л"))
        .await;

    assert!(matches!(result, Err(ApiError::AccessDenied { .. })));
}

// ==========================================
// Заказы
// ==========================================

#[tokio::test]
async fn test_order_crud_as_manager() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();
    let vodka_id = seed_ingredient(&db_path, "Водка", 10.0, "л").unwrap();
    let lemon_id = seed_ingredient(&db_path, "Лимон", 25.0, "шт").unwrap();
    let manager = user_by_login(&db_path, "manager");

    let api = order_api(&db_path);

    let order = api.create(&manager, vodka_id, 5.0).await.unwrap();
    assert_eq!(order.created_by, manager.id);

    api.update(&manager, order.id, lemon_id, 30.0).await.unwrap();

    let orders = api.list_with_details(&manager).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].ingredient_name, "Лимон");
    assert_eq!(orders[0].ingredient_unit, "шт");
    assert_eq!(orders[0].created_by_login, "manager");
    assert_eq!(orders[0].order.quantity, 30.0);

    assert!(api.delete(&manager, order.id).await.unwrap());
    assert!(api.list_with_details(&manager).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_order_requires_existing_ingredient() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();
    let manager = user_by_login(&db_path, "manager");

    let api = order_api(&db_path);
    let result = api.create(&manager, 999, 5.0).await;

    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_order_denied_for_barmen() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();
    let vodka_id = seed_ingredient(&db_path, "Водка", 10.0, "л").unwrap();
    let barmen = user_by_login(&db_path, "barmen");

    let api = order_api(&db_path);

    assert!(matches!(
        api.create(&barmen, vodka_id, 5.0).await,
        Err(ApiError::AccessDenied { .. })
    ));
    assert!(matches!(
        api.list_with_details(&barmen).await,
        Err(ApiError::AccessDenied { .. })
    ));
}

#[tokio::test]
async fn test_order_export_to_csv() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();
    let vodka_id = seed_ingredient(&db_path, "Водка", 10.0, "л").unwrap();
    let manager = user_by_login(&db_path, "manager");

    let api = order_api(&db_path);
    api.create(&manager, vodka_id, 5.0).await.unwrap();

    let out = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    let count = api.export(&manager, out.path()).await.unwrap();
    assert_eq!(count, 1);

    let content = std::fs::read_to_string(out.path()).unwrap();
    assert!(content.contains("Ингредиент"));
    assert!(content.contains("Водка"));
    assert!(content.contains("manager"));
}

// ==========================================
// Пользователи
// ==========================================

#[tokio::test]
async fn test_user_management_as_admin() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();
    let admin = user_by_login(&db_path, "admin");

    let api = UserApi::new(UserRepository::new(&db_path).unwrap());

    let id = api
        .create(&admin, "novice", "секрет", Role::Barmen)
        .await
        .unwrap();
    assert!(id > 0);

    // повторный логин отклоняется
    assert!(matches!(
        api.create(&admin, "novice", "другой", Role::Barmen).await,
        Err(ApiError::LoginTaken(_))
    ));

    api.update_role(&admin, id, Role::Manager).await.unwrap();

    let users = api.list(&admin).await.unwrap();
    let novice = users.iter().find(|u| u.login == "novice").unwrap();
    assert_eq!(novice.role, Role::Manager);

    // несуществующий пользователь
    assert!(matches!(
        api.update_role(&admin, 9999, Role::Admin).await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_user_management_denied_for_manager() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();
    let manager = user_by_login(&db_path, "manager");

    let api = UserApi::new(UserRepository::new(&db_path).unwrap());

    assert!(matches!(
        api.list(&manager).await,
        Err(ApiError::AccessDenied { .. })
    ));
    assert!(matches!(
        api.create(&manager, "x", "y", Role::Barmen).await,
        Err(ApiError::AccessDenied { .. })
    ));
}
