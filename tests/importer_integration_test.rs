// ==========================================
// Интеграционные тесты импорта ингредиентов
// ==========================================
// Цель: сквозной поток файл -> разбор -> сверка ->
// запись в базу, включая построчный протокол
// ==========================================


use bar_inventory::api::IngredientApi;
use bar_inventory::domain::RowOutcome;
use bar_inventory::logging;
use bar_inventory::repository::{IngredientRepository, UserRepository};
use test_helpers::{create_test_db, seed_ingredient, seed_users, write_import_csv};

fn admin(db_path: &str) -> bar_inventory::domain::User {
    let repo = UserRepository::new(db_path).expect("не удалось открыть базу");
    repo.find_by_login("admin")
        .expect("ошибка запроса")
        .expect("администратор посеян")
}

#[tokio::test]
async fn test_import_end_to_end() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().expect("не удалось создать базу");
    seed_users(&db_path).expect("не удалось посеять пользователей");
    let lemon_id = seed_ingredient(&db_path, "Лимон", 10.0, "шт").expect("посев ингредиента");

    // заголовок, обновление, добавление, брак (пустое название)
    let file = write_import_csv(&[
        "название,количество,ед",
        "Лимон,25,шт",
        "Сироп,5.2,л",
        ",3,л",
    ]);

    let user = admin(&db_path);
    let api = IngredientApi::new(IngredientRepository::new(&db_path).unwrap());
    let outcome = api.import_from_file(&user, file.path()).await.unwrap();

    // сводка прогона
    assert_eq!(outcome.report.processed, 4);
    assert_eq!(outcome.report.skipped, 2);
    assert_eq!(outcome.report.accepted, 2);
    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.updated, 1);
    assert_eq!(outcome.succeeded(), 2);

    // построчный протокол
    assert_eq!(outcome.report.rows[0].outcome, RowOutcome::SkippedHeader);
    assert_eq!(outcome.report.rows[1].outcome, RowOutcome::Accepted);
    assert_eq!(outcome.report.rows[2].outcome, RowOutcome::Accepted);
    assert!(matches!(
        outcome.report.rows[3].outcome,
        RowOutcome::SkippedInvalid { ref field, .. } if field == "name"
    ));

    // состояние базы после применения решений
    let repo = IngredientRepository::new(&db_path).unwrap();
    let all = repo.list().unwrap();
    assert_eq!(all.len(), 2);

    let lemon = repo.find_by_id(lemon_id).unwrap().unwrap();
    assert_eq!(lemon.quantity, 25.0);
    assert_eq!(lemon.name, "Лимон"); // идентичность и название сохранены

    let syrup = all.iter().find(|i| i.name == "Сироп").unwrap();
    assert_eq!(syrup.quantity, 5.2);
    assert_eq!(syrup.unit, "л");
}

#[tokio::test]
async fn test_import_case_insensitive_update() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();
    let id = seed_ingredient(&db_path, "водка", 10.0, "л").unwrap();

    let file = write_import_csv(&["Водка,12,л"]);

    let user = admin(&db_path);
    let api = IngredientApi::new(IngredientRepository::new(&db_path).unwrap());
    let outcome = api.import_from_file(&user, file.path()).await.unwrap();

    // обновление, а не дубликат
    assert_eq!(outcome.added, 0);
    assert_eq!(outcome.updated, 1);

    let repo = IngredientRepository::new(&db_path).unwrap();
    assert_eq!(repo.list().unwrap().len(), 1);
    let ing = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(ing.quantity, 12.0);
}

#[tokio::test]
async fn test_import_duplicate_names_in_one_file() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();

    // одно и то же новое название дважды: одна вставка,
    // значения из последней строки файла
    let file = write_import_csv(&["Тоник,3,л", "ТОНИК,7,л"]);

    let user = admin(&db_path);
    let api = IngredientApi::new(IngredientRepository::new(&db_path).unwrap());
    let outcome = api.import_from_file(&user, file.path()).await.unwrap();

    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.updated, 0);

    let repo = IngredientRepository::new(&db_path).unwrap();
    let all = repo.list().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].quantity, 7.0);
}

#[tokio::test]
async fn test_import_comma_decimal_quantity() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();

    let file = write_import_csv(&["Сироп,\"12,5\",л"]);

    let user = admin(&db_path);
    let api = IngredientApi::new(IngredientRepository::new(&db_path).unwrap());
    let outcome = api.import_from_file(&user, file.path()).await.unwrap();

    assert_eq!(outcome.added, 1);
    let repo = IngredientRepository::new(&db_path).unwrap();
    assert_eq!(repo.list().unwrap()[0].quantity, 12.5);
}

#[tokio::test]
async fn test_import_rejects_empty_file() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();

    let file = write_import_csv(&[]);

    let user = admin(&db_path);
    let api = IngredientApi::new(IngredientRepository::new(&db_path).unwrap());
    let result = api.import_from_file(&user, file.path()).await;

    // файловая ошибка фатальна: частичного результата нет
    assert!(result.is_err());
    let repo = IngredientRepository::new(&db_path).unwrap();
    assert!(repo.list().unwrap().is_empty());
}

#[tokio::test]
async fn test_import_denied_for_barmen() {
    logging::init_test();

    let (_tmp, db_path) = create_test_db().unwrap();
    seed_users(&db_path).unwrap();

    let repo = UserRepository::new(&db_path).unwrap();
    let barmen = repo.find_by_login("barmen").unwrap().unwrap();

    let file = write_import_csv(&["Водка,10,л"]);

    let api = IngredientApi::new(IngredientRepository::new(&db_path).unwrap());
    let result = api.import_from_file(&barmen, file.path()).await;

    assert!(matches!(
        result,
        Err(bar_inventory::api::ApiError::AccessDenied { .. })
    ));
}
