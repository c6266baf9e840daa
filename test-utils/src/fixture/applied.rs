//! SQL snippets that record which migration files ran.
//!
//! Migration files written by tests insert their own label into an `applied` table.
//! Reading the table back in `seq` order shows which files executed and in what order.

use sea_orm::{DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement};

/// Creates the `applied` log table.
pub const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS applied (seq INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL);";

/// SQL appending `name` to the `applied` table.
pub fn record(name: &str) -> String {
    format!("INSERT INTO applied (name) VALUES ('{}');", name)
}

/// SQL creating the `applied` table if needed and then appending `name`.
pub fn create_and_record(name: &str) -> String {
    format!("{}\n{}", CREATE_TABLE, record(name))
}

#[derive(Debug, FromQueryResult)]
struct AppliedRow {
    name: String,
}

/// Reads the labels recorded in the `applied` table in execution order.
///
/// # Returns
/// - `Ok(Vec<String>)` - Labels in the order their files ran
/// - `Err(DbErr)` - Table missing or query failed
pub async fn names(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    let rows = AppliedRow::find_by_statement(Statement::from_string(
        DbBackend::Sqlite,
        "SELECT name FROM applied ORDER BY seq",
    ))
    .all(db)
    .await?;

    Ok(rows.into_iter().map(|row| row.name).collect())
}
