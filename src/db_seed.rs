use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use gymflow_db::{create_pool, schema::initialize_database, seed::seed_demo_data, PgBookingStore};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable must be set")?;

    let db_pool = create_pool(&database_url).await?;
    initialize_database(&db_pool).await?;

    let store = PgBookingStore::new(db_pool);
    let sessions = seed_demo_data(&store, Utc::now().date_naive()).await?;
    info!(sessions, "Demo trainers and group sessions created");

    Ok(())
}
