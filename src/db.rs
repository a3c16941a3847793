use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::seed::seed_if_empty;

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Minimal migration runner that executes SQL files in `dir` in filename order.
pub async fn run_migrations(conn: &DatabaseConnection, dir: impl AsRef<Path>) -> Result<()> {
    let mut entries = fs::read_dir(dir.as_ref()).await?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in files {
        let sql = fs::read_to_string(&file).await?;
        // Postgres prepared statements cannot contain multiple commands,
        // so split the migration file and run each statement individually.
        for stmt in split_statements(&sql) {
            conn.execute(Statement::from_string(backend, stmt)).await?;
        }
        tracing::debug!(file = %file.display(), "migration applied");
    }

    Ok(())
}

/// Migrates and seeds a fresh connection. A migration failure drops the
/// connection so the service falls back to no-database mode instead of
/// serving from missing tables. A failed seed keeps it.
pub async fn prepare(
    orm: DatabaseConnection,
    migrations_dir: impl AsRef<Path>,
) -> Option<DatabaseConnection> {
    if let Err(err) = run_migrations(&orm, migrations_dir).await {
        tracing::error!(error = %err, "migrations failed, running without a database");
        return None;
    }
    if let Err(err) = seed_if_empty(&orm).await {
        tracing::warn!(error = %err, "seeding demo catalogue failed");
    }
    Some(orm)
}

fn split_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .map(|stmt| format!("{stmt};"))
        .collect()
}

/// Names of the tables in the `public` schema, sorted.
pub async fn list_tables<C: ConnectionTrait>(conn: &C) -> Result<Vec<String>, DbErr> {
    let backend = conn.get_database_backend();
    let rows = conn
        .query_all(Statement::from_string(
            backend,
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = 'public' ORDER BY table_name",
        ))
        .await?;

    rows.iter()
        .map(|row| row.try_get::<String>("", "table_name"))
        .collect()
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::{prepare, split_statements};

    #[tokio::test]
    async fn failed_migration_drops_the_connection() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        assert!(prepare(conn, "migrations/does-not-exist").await.is_none());
    }

    #[test]
    fn splits_on_semicolons_and_drops_blank_chunks() {
        let sql = "CREATE TABLE a (id INT);\n\n  CREATE INDEX i ON a (id)  ;\n";
        assert_eq!(
            split_statements(sql),
            vec![
                "CREATE TABLE a (id INT);".to_string(),
                "CREATE INDEX i ON a (id);".to_string(),
            ]
        );
    }
}
