//! Roster repository (server-assigned ids).

use sqlx::PgPool;

use crate::{
    models::{NewRosterEntry, RosterEntry, RosterUpdate},
    Error, Result,
};

#[derive(Clone)]
pub struct RosterRepository {
    pool: PgPool,
}

impl RosterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, entry: &NewRosterEntry) -> Result<RosterEntry> {
        let created = sqlx::query_as::<_, RosterEntry>(
            "INSERT INTO tasks (emp_name, emp_salary)
             VALUES ($1, $2)
             RETURNING emp_id, emp_name, emp_salary",
        )
        .bind(&entry.emp_name)
        .bind(entry.emp_salary)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(created)
    }

    pub async fn list_all(&self) -> Result<Vec<RosterEntry>> {
        let entries = sqlx::query_as::<_, RosterEntry>(
            "SELECT emp_id, emp_name, emp_salary
             FROM tasks
             ORDER BY emp_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(entries)
    }

    pub async fn get(&self, emp_id: i64) -> Result<Option<RosterEntry>> {
        let entry = sqlx::query_as::<_, RosterEntry>(
            "SELECT emp_id, emp_name, emp_salary
             FROM tasks
             WHERE emp_id = $1",
        )
        .bind(emp_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(entry)
    }

    /// Apply a partial update; absent fields keep their current values.
    /// Returns the number of rows matched.
    pub async fn update(&self, emp_id: i64, changes: &RosterUpdate) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE tasks
             SET emp_name = COALESCE($2, emp_name),
                 emp_salary = COALESCE($3, emp_salary)
             WHERE emp_id = $1",
        )
        .bind(emp_id)
        .bind(&changes.emp_name)
        .bind(changes.emp_salary)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, emp_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE emp_id = $1")
            .bind(emp_id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(result.rows_affected())
    }
}
