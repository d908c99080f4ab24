// ==========================================
// Система учёта инвентаря бара - Консольная утилита
// ==========================================
// Использование:
//   bar-inventory init [db]
//   bar-inventory ingredients <логин> <пароль> [db] [--json]
//   bar-inventory import <файл> <логин> <пароль> [db]
//   bar-inventory export-orders <файл.csv> <логин> <пароль> [db]
// ==========================================

use bar_inventory::api::{AuthApi, IngredientApi, OrderApi};
use bar_inventory::db::{get_default_db_path, init_schema, open_sqlite_connection};
use bar_inventory::domain::RowOutcome;
use bar_inventory::i18n::t_with_args;
use bar_inventory::repository::{IngredientRepository, OrderRepository, UserRepository};
use bar_inventory::session::Session;
use bar_inventory::{logging, APP_NAME, VERSION};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

fn usage() -> ! {
    eprintln!("{} v{}", APP_NAME, VERSION);
    eprintln!();
    eprintln!("Команды:");
    eprintln!("  init [db]                                    - создать схему базы");
    eprintln!("  ingredients <логин> <пароль> [db] [--json]   - остатки склада");
    eprintln!("  import <файл> <логин> <пароль> [db]          - импорт ингредиентов");
    eprintln!("  export-orders <файл.csv> <логин> <пароль> [db] - экспорт заказов");
    std::process::exit(2);
}

fn open_db(db_path: &str) -> Result<Arc<Mutex<Connection>>, Box<dyn std::error::Error>> {
    let conn = open_sqlite_connection(db_path)?;
    init_schema(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

async fn login(
    conn: Arc<Mutex<Connection>>,
    login: &str,
    password: &str,
) -> Result<Session, Box<dyn std::error::Error>> {
    let auth = AuthApi::new(UserRepository::from_connection(conn));
    let user = auth.authenticate(login, password).await?;
    let mut session = Session::new();
    session.login(user);
    Ok(session)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        usage();
    };

    tracing::info!("{} v{}", APP_NAME, VERSION);

    match command.as_str() {
        "init" => {
            let db_path = args.get(1).cloned().unwrap_or_else(get_default_db_path);
            open_db(&db_path)?;
            println!("База данных готова: {}", db_path);
        }

        "ingredients" => {
            let (user_login, password) = match (args.get(1), args.get(2)) {
                (Some(l), Some(p)) => (l.clone(), p.clone()),
                _ => usage(),
            };
            let as_json = args.iter().any(|a| a == "--json");
            let db_path = args
                .get(3)
                .filter(|a| *a != "--json")
                .cloned()
                .unwrap_or_else(get_default_db_path);
            let conn = open_db(&db_path)?;

            let session = login(conn.clone(), &user_login, &password).await?;
            let user = session.current_user().expect("сеанс только что открыт");

            let api = IngredientApi::new(IngredientRepository::from_connection(conn));
            let ingredients = api.list(user).await?;

            if as_json {
                println!("{}", serde_json::to_string_pretty(&ingredients)?);
            } else {
                for ing in &ingredients {
                    println!("{:>4}  {:<30} {:>10} {}", ing.id, ing.name, ing.quantity, ing.unit);
                }
                println!("Всего ингредиентов: {}", ingredients.len());
            }
        }

        "import" => {
            let (file, user_login, password) = match (args.get(1), args.get(2), args.get(3)) {
                (Some(f), Some(l), Some(p)) => (f.clone(), l.clone(), p.clone()),
                _ => usage(),
            };
            let db_path = args.get(4).cloned().unwrap_or_else(get_default_db_path);
            let conn = open_db(&db_path)?;

            let session = login(conn.clone(), &user_login, &password).await?;
            let user = session.current_user().expect("сеанс только что открыт");

            let api = IngredientApi::new(IngredientRepository::from_connection(conn));
            let outcome = api.import_from_file(user, &file).await?;

            // построчный протокол: причина каждой пропущенной строки
            for row in &outcome.report.rows {
                match &row.outcome {
                    RowOutcome::Accepted => {}
                    RowOutcome::SkippedHeader => {
                        println!("Строка {}: пропущена (заголовок)", row.row_number);
                    }
                    RowOutcome::SkippedInvalid { message, .. } => {
                        println!("Строка {}: пропущена ({})", row.row_number, message);
                    }
                }
            }

            println!(
                "{}",
                t_with_args(
                    "import.file_summary",
                    &[
                        ("processed", &outcome.report.processed.to_string()),
                        ("skipped", &outcome.report.skipped.to_string()),
                    ],
                )
            );
            println!(
                "{}",
                t_with_args(
                    "import.apply_summary",
                    &[
                        ("added", &outcome.added.to_string()),
                        ("updated", &outcome.updated.to_string()),
                    ],
                )
            );
        }

        "export-orders" => {
            let (out_file, user_login, password) = match (args.get(1), args.get(2), args.get(3)) {
                (Some(f), Some(l), Some(p)) => (f.clone(), l.clone(), p.clone()),
                _ => usage(),
            };
            let db_path = args.get(4).cloned().unwrap_or_else(get_default_db_path);
            let conn = open_db(&db_path)?;

            let session = login(conn.clone(), &user_login, &password).await?;
            let user = session.current_user().expect("сеанс только что открыт");

            let api = OrderApi::new(
                OrderRepository::from_connection(conn.clone()),
                IngredientRepository::from_connection(conn),
            );
            let count = api.export(user, &out_file).await?;
            println!("Выгружено заказов: {} -> {}", count, out_file);
        }

        _ => usage(),
    }

    Ok(())
}
