use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use swimsync_api::{ApiState, config::ApiConfig};
use swimsync_db::{PgStore, create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    dotenv().ok();

    let config = ApiConfig::from_env()?;

    let db_pool = create_pool(&config.database_url, config.database_max_connections).await?;
    initialize_database(&db_pool).await?;

    // One store backs both repositories so lesson writes see instructor deletes.
    let store = Arc::new(PgStore::new(db_pool));
    let state = ApiState::new(store.clone(), store);

    swimsync_api::start_server(config, state).await?;

    Ok(())
}
