use std::collections::HashSet;

use polls_common::database::qualified_table_name;

use crate::domain::persistence::Persistence;
use crate::domain::tables::{Column, Index, Table, needed_tables};

/// Brings the database schema in line with the tables the service needs
pub struct Migration<P: Persistence> {
    persistence: P,
}

impl<P: Persistence> Migration<P> {
    pub fn new(persistence: P) -> Self {
        Self { persistence }
    }

    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        let actual_schema = self.persistence.load().await?;
        let steps = migration_steps(
            self.persistence.database_schema(),
            needed_tables(),
            &actual_schema,
        );

        if steps.is_empty() {
            tracing::info!("database schema is up to date");
            return Ok(());
        }

        tracing::info!("applying {} migration step(s)", steps.len());
        self.persistence.apply_migration_steps(steps).await
    }
}

/// A group of DDL statements applied in one transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStep {
    ctx: &'static str,
    ddls: Vec<String>,
}

impl MigrationStep {
    fn create_table(database_schema: &str, table: &Table) -> Self {
        Self {
            ctx: "CREATE TABLE",
            ddls: create_table_ddl(database_schema, table),
        }
    }

    pub fn ctx(&self) -> &'static str {
        self.ctx
    }

    pub fn ddls(self) -> Vec<String> {
        self.ddls
    }
}

/// Existing tables are left untouched; only missing ones are created.
pub fn migration_steps(
    database_schema: &str,
    needed_schema: Vec<Table>,
    actual_schema: &HashSet<String>,
) -> Vec<MigrationStep> {
    needed_schema
        .iter()
        .filter(|table| !actual_schema.contains(&table.name))
        .map(|table| MigrationStep::create_table(database_schema, table))
        .collect()
}

fn create_table_ddl(schema: &str, table: &Table) -> Vec<String> {
    let mut columns = Vec::new();
    let mut pk_columns = Vec::new();

    for column in table.columns.iter() {
        columns.push(column_ddl(column));
        if column.primary_key {
            pk_columns.push(format!("\"{}\"", column.name));
        }
    }

    let columns_sql = columns.join(",\n    ");
    let pk_columns_sql = pk_columns.join(",");

    let table_ddl = format!(
        "CREATE TABLE {} (\n    {},\n    PRIMARY KEY({})\n)",
        qualified_table_name(schema, &table.name),
        columns_sql,
        pk_columns_sql
    );

    let mut ddls = vec![table_ddl];

    for index in table.indexes.iter() {
        ddls.push(create_index_ddl(schema, index));
    }

    ddls
}

fn column_ddl(column: &Column) -> String {
    let mut sql = format!("\"{}\" {}", column.name, column.column_type);
    if column.not_null {
        sql.push_str(" NOT NULL");
    }
    sql
}

fn create_index_ddl(schema: &str, index: &Index) -> String {
    let columns_sql = index
        .columns
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "CREATE INDEX \"{}_{}_idx\" ON {} ({})",
        index.table_name,
        index.columns.join("_"),
        qualified_table_name(schema, &index.table_name),
        columns_sql
    )
}
