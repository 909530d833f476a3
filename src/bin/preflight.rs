use restaurant_reviews::infra::config::{Config, StoreBackend};
use restaurant_reviews::{HealthCheck, PgStore};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads env vars (or .env):\n\
           STORE_BACKEND (postgres|memory), DATABASE_URL, DB_MAX_CONNECTIONS,\n\
           BIND_ADDR, LOG_LEVEL, LOG_FORMAT\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  STORE_BACKEND={:?}", config.store_backend);
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  DB_MAX_CONNECTIONS={}", config.db_max_connections);
    println!("  LOG_LEVEL={} LOG_FORMAT={:?}", config.log_level, config.log_format);

    match config.store_backend {
        StoreBackend::Memory => {
            println!("> In-memory store selected; nothing to check.");
        }
        StoreBackend::Postgres => {
            let url = config.database_url.as_deref().unwrap_or_default();
            let store = PgStore::connect(url, 1).await?;
            store.ping().await?;
            println!("> PostgreSQL reachable; schema ensured.");
        }
    }

    println!("> Preflight OK.");
    Ok(())
}
