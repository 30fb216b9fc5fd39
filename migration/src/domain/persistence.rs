use std::collections::HashSet;
use std::future::Future;

use crate::domain::migration::MigrationStep;

pub trait Persistence: Send + Sync + Clone + 'static {
    /// load tables from database
    fn load(&self) -> impl Future<Output = Result<HashSet<String>, anyhow::Error>> + Send;
    /// apply migration steps to database
    fn apply_migration_steps(
        &self,
        steps: Vec<MigrationStep>,
    ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;
    /// extract database schema
    fn database_schema(&self) -> &str;
}
