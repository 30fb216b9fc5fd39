use crate::{
    domain::migration::Migration,
    infrastructure::{persistence::PersistenceAdapter, settings::Settings},
};
use polls_common::connect_to_database;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod domain;
pub mod infrastructure;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database = connect_to_database(&settings.database).await?;
    tracing::info!("connected to database {}", settings.database.db);
    let persistence = PersistenceAdapter::new(database);

    // create missing tables in the configured schema
    let migration = Migration::new(persistence);
    migration.migrate().await?;
    tracing::info!("database schema migrated");

    Ok(())
}
