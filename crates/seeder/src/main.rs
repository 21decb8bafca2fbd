use anyhow::Result;
use chrono::Utc;
use tracing::info;

use persistence::PgSeedStore;
use property_seeder::{config::Config, generate, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    logging::init_logging(&config.logging);

    info!("Starting property seeder v{}", env!("CARGO_PKG_VERSION"));

    let pool = persistence::db::create_pool(&config.database).await?;

    info!("Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations").run(&pool).await?;
    info!("Migrations completed");

    let now = Utc::now();
    let months = shared::time::recent_months(now, config.generation.months);

    let mut store = PgSeedStore::begin(&pool).await?;
    let result = generate::run(&mut store, &config.generation, &months, now.timestamp()).await;

    // The connection is released whatever happened; an uncommitted
    // transaction rolls back with it.
    drop(store);
    pool.close().await;

    let summary = result?;
    info!(
        buildings = summary.buildings,
        owners = summary.owners,
        rooms = summary.rooms,
        parking_spaces = summary.parking_spaces,
        staff = summary.staff,
        service_areas = summary.service_areas,
        service_records = summary.service_records,
        transactions = summary.transactions,
        "generation complete"
    );

    Ok(())
}
