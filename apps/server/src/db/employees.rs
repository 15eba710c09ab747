//! Employee registry repository.

use sqlx::PgPool;

use crate::{
    models::{Employee, EmployeeUpdate, NewEmployee},
    Error, Result,
};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, emp_id: i64) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM employees WHERE emp_id = $1")
            .bind(emp_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.is_some())
    }

    pub async fn insert(&self, employee: &NewEmployee) -> Result<()> {
        sqlx::query(
            "INSERT INTO employees (emp_id, name, age, salary)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(employee.emp_id)
        .bind(&employee.name)
        .bind(employee.age)
        .bind(employee.salary)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT emp_id, name, age, salary
             FROM employees
             ORDER BY emp_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(employees)
    }

    pub async fn get(&self, emp_id: i64) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT emp_id, name, age, salary
             FROM employees
             WHERE emp_id = $1",
        )
        .bind(emp_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(employee)
    }

    /// Full replacement of the mutable fields. Returns the number of rows
    /// matched (0 when the employee does not exist).
    pub async fn update(&self, emp_id: i64, update: &EmployeeUpdate) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE employees
             SET name = $2, age = $3, salary = $4
             WHERE emp_id = $1",
        )
        .bind(emp_id)
        .bind(&update.name)
        .bind(update.age)
        .bind(update.salary)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, emp_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM employees WHERE emp_id = $1")
            .bind(emp_id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(result.rows_affected())
    }
}
